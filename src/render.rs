//! Terminal renderer: per-cell diffing against the last frame, redrawing
//! only what changed.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::chaser::ControlMode;
use crate::grid::Tile;
use crate::movement::Pos;
use crate::sim::{Arena, Mode, Outcome, Session};

const CELL_W: usize = 2;
const GUTTER: usize = 4;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Cpu,
    Patroller,
    Wall,
    Floor,
    Pellet,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

pub struct Renderer {
    grid_w: usize,
    grid_h: usize,
    arenas: usize,
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(session: &Session) -> Self {
        let grid_w = session.arenas[0].grid.width();
        let grid_h = session.arenas[0].grid.height();
        let arenas = session.arenas.len();
        Self {
            grid_w,
            grid_h,
            arenas,
            last: vec![
                Cell {
                    glyph: Glyph::Floor,
                    color: Color::Reset,
                };
                grid_w * grid_h * arenas
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    fn needed_size(&self) -> (u16, u16) {
        let w = self.arenas * self.grid_w * CELL_W + (self.arenas - 1) * GUTTER;
        let h = self.grid_h + 2;
        (w as u16, h as u16)
    }

    fn arena_origin_x(&self, arena_ix: usize) -> u16 {
        self.origin_x + (arena_ix * (self.grid_w * CELL_W + GUTTER)) as u16
    }
}

pub fn draw(
    stdout: &mut Stdout,
    session: &Session,
    renderer: &mut Renderer,
    paused: bool,
) -> io::Result<()> {
    let (needed_w, needed_h) = renderer.needed_size();

    stdout.queue(MoveTo(0, 0))?;
    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }

    let hud = hud_line(session, paused);
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    for (arena_ix, arena) in session.arenas.iter().enumerate() {
        for y in 0..renderer.grid_h {
            for x in 0..renderer.grid_w {
                let cell = cell_for(arena, Pos::new(x, y));
                let idx = (arena_ix * renderer.grid_h + y) * renderer.grid_w + x;
                if renderer.needs_full || cell != renderer.last[idx] {
                    renderer.last[idx] = cell;
                    draw_cell(stdout, renderer, arena_ix, x, y, cell)?;
                }
            }
        }
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn hud_line(session: &Session, paused: bool) -> String {
    let mut parts = Vec::new();
    for arena in &session.arenas {
        let label = match (session.mode, arena.chaser.mode()) {
            (Mode::Versus, ControlMode::Human) => "YOU  ",
            (Mode::Versus, ControlMode::Ai) => "CPU  ",
            _ => "",
        };
        parts.push(format!(
            "{}Score: {}  Lives: {}  Pellets: {}",
            label,
            arena.chaser.score(),
            arena.chaser.lives(),
            arena.grid.pellet_count()
        ));
    }
    let mut hud = parts.join("   |   ");
    hud.push_str("  (q quits, p pauses)");
    if paused {
        hud.push_str("  [PAUSED]");
    }
    hud
}

fn cell_for(arena: &Arena, pos: Pos) -> Cell {
    if pos == arena.chaser.pos() {
        return match arena.chaser.mode() {
            ControlMode::Human => Cell {
                glyph: Glyph::Player,
                color: Color::Yellow,
            },
            ControlMode::Ai => Cell {
                glyph: Glyph::Cpu,
                color: Color::Green,
            },
        };
    }
    if arena.patrollers.iter().any(|p| p.pos() == pos) {
        return Cell {
            glyph: Glyph::Patroller,
            color: Color::Red,
        };
    }
    match arena.grid.tile_at(pos) {
        Tile::Wall => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        Tile::Pellet => Cell {
            glyph: Glyph::Pellet,
            color: Color::White,
        },
        Tile::Empty | Tile::OpenGap => Cell {
            glyph: Glyph::Floor,
            color: Color::Reset,
        },
    }
}

fn draw_cell(
    stdout: &mut Stdout,
    renderer: &Renderer,
    arena_ix: usize,
    x: usize,
    y: usize,
    cell: Cell,
) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player => "😃",
        Glyph::Cpu => "🤖",
        Glyph::Patroller => "👻",
        Glyph::Wall => "██",
        Glyph::Floor => "  ",
        Glyph::Pellet => "· ",
    };
    let x_pos = renderer.arena_origin_x(arena_ix) + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

/// Print the end-of-run banner just below the maze(s).
pub fn draw_end_banner(
    stdout: &mut Stdout,
    session: &Session,
    renderer: &Renderer,
) -> io::Result<()> {
    let (needed_w, needed_h) = renderer.needed_size();
    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(MoveTo(0, needed_h))?;
    } else {
        stdout.queue(MoveTo(
            renderer.origin_x,
            renderer.origin_y + renderer.grid_h as u16,
        ))?;
    }
    stdout.queue(Print(format!(
        "{} (press q to quit)",
        outcome_line(session)
    )))?;
    stdout.flush()?;
    Ok(())
}

fn outcome_line(session: &Session) -> String {
    match session.mode {
        Mode::Versus => {
            let you = &session.arenas[0];
            let cpu = &session.arenas[1];
            let headline = match (you.outcome, cpu.outcome) {
                (Some(Outcome::Won { .. }), _) => "You cleared your maze first!",
                (Some(Outcome::Lost { .. }), _) => "The patrollers got you.",
                (_, Some(Outcome::Won { .. })) => "The CPU cleared its maze first.",
                _ => "Run over.",
            };
            format!(
                "{}  You: {}  CPU: {}",
                headline,
                you.chaser.score(),
                cpu.chaser.score()
            )
        }
        _ => match session.arenas[0].outcome {
            Some(Outcome::Won { score }) => format!("Maze cleared! Final score: {}", score),
            Some(Outcome::Lost { score }) => format!("GAME OVER - Final score: {}", score),
            None => "Run over.".to_string(),
        },
    }
}
