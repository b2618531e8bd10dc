/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state. No game logic is performed; this module only translates
/// state into terminal commands. Positions are clamped upstream by entity
/// updates, so anything still off-screen (the enemy fall-trail offset) is
/// simply skipped rather than drawn.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use dodge_game::entities::{Enemy, GameObject, GameState, Player};

/// Rows the enemy glyph trails below its tracked position.
const ENEMY_TRAIL_OFFSET: i32 = 3;
/// HUD row for the score/health line.
const STATUS_ROW: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_STATUS: Color = Color::Yellow;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: clear, every surviving object, status line.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    height: u16,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for obj in &state.objects {
        match obj {
            GameObject::Player(p) => draw_player(out, p)?,
            GameObject::Enemy(e) => draw_enemy(out, e, height)?,
        }
    }

    draw_status(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, player: &Player) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(player.x as u16, player.y as u16))?;
    out.queue(Print("O"))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, height: u16) -> std::io::Result<()> {
    // The glyph is drawn 3 rows below the tracked y (fall trail); skip it
    // once that row leaves the screen.
    let row = enemy.y + ENEMY_TRAIL_OFFSET;
    if (0..height as i32).contains(&row) {
        out.queue(style::SetForegroundColor(C_ENEMY))?;
        out.queue(cursor::MoveTo(enemy.x as u16, row as u16))?;
        out.queue(Print("XXX"))?;
    }
    Ok(())
}

// ── Status line ───────────────────────────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, STATUS_ROW))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(format!(
        "Score: {} Health: {}",
        state.score,
        state.player().health
    )))?;
    Ok(())
}
