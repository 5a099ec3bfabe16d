mod chaser;
mod config;
mod grid;
mod maze;
mod movement;
mod pathfinding;
mod patroller;
mod render;
mod sim;

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};

use crate::config::Config;
use crate::movement::Dir;
use crate::render::Renderer;
use crate::sim::{Mode, Session};

fn main() -> io::Result<()> {
    // Logs go to stderr so the alternate screen stays clean; redirect to a
    // file and set RUST_LOG to capture them.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout) -> io::Result<()> {
    let config = Config::from_env();
    let Some(mode) = select_mode(stdout)? else {
        return Ok(());
    };
    let mut session = Session::new(mode, &config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    let mut renderer = Renderer::new(&session);

    let tick_interval = config.tick_interval();
    let frame_interval = config.frame_interval();
    let mut last_tick = Instant::now();
    let mut paused = false;

    stdout.execute(Clear(ClearType::All))?;

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('p') => paused = !paused,
                    KeyCode::Up | KeyCode::Char('k') => session.set_human_intent(Dir::Up),
                    KeyCode::Down | KeyCode::Char('j') => session.set_human_intent(Dir::Down),
                    KeyCode::Left | KeyCode::Char('h') => session.set_human_intent(Dir::Left),
                    KeyCode::Right | KeyCode::Char('l') => session.set_human_intent(Dir::Right),
                    _ => {}
                }
            }
        }

        // A pause simply withholds tick advancement; nothing mid-tick to
        // suspend.
        if !paused && last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            session.tick();
        }
        render::draw(stdout, &session, &mut renderer, paused)?;

        if session.outcome().is_some() {
            render::draw_end_banner(stdout, &session, &renderer)?;
            return wait_for_quit();
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}

const MENU_OPTIONS: [(&str, Mode); 3] = [
    ("1. Player", Mode::Human),
    ("2. CPU", Mode::Ai),
    ("3. Player vs CPU", Mode::Versus),
];

fn select_mode(stdout: &mut Stdout) -> io::Result<Option<Mode>> {
    let mut selected = 0usize;
    loop {
        draw_menu(stdout, selected)?;
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected = (selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % MENU_OPTIONS.len();
                    }
                    KeyCode::Enter => return Ok(Some(MENU_OPTIONS[selected].1)),
                    KeyCode::Char('1') => return Ok(Some(Mode::Human)),
                    KeyCode::Char('2') => return Ok(Some(Mode::Ai)),
                    KeyCode::Char('3') => return Ok(Some(Mode::Versus)),
                    _ => {}
                }
            }
        }
    }
}

fn draw_menu(stdout: &mut Stdout, selected: usize) -> io::Result<()> {
    let (term_w, term_h) = terminal::size()?;
    stdout.queue(Clear(ClearType::All))?;

    let title = "G R I D C H A S E";
    let base_y = term_h.saturating_sub(MENU_OPTIONS.len() as u16 * 2 + 4) / 2;
    stdout.queue(MoveTo(centered_x(term_w, title), base_y))?;
    stdout.queue(SetForegroundColor(Color::Yellow))?;
    stdout.queue(Print(title))?;

    for (ix, (label, _)) in MENU_OPTIONS.iter().enumerate() {
        stdout.queue(MoveTo(
            centered_x(term_w, label),
            base_y + 2 + ix as u16 * 2,
        ))?;
        if ix == selected {
            stdout.queue(SetForegroundColor(Color::White))?;
        } else {
            stdout.queue(SetForegroundColor(Color::Blue))?;
        }
        stdout.queue(Print(*label))?;
    }

    let hint = "arrows/jk move - enter selects - q quits";
    stdout.queue(MoveTo(
        centered_x(term_w, hint),
        base_y + 3 + MENU_OPTIONS.len() as u16 * 2,
    ))?;
    stdout.queue(SetForegroundColor(Color::DarkGrey))?;
    stdout.queue(Print(hint))?;
    stdout.queue(ResetColor)?;
    stdout.flush()?;
    Ok(())
}

fn centered_x(term_w: u16, text: &str) -> u16 {
    (term_w / 2).saturating_sub(text.len() as u16 / 2)
}

fn wait_for_quit() -> io::Result<()> {
    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }
    }
}
