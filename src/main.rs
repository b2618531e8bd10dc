mod display;

use std::io::{stdout, BufWriter, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
    ExecutableCommand,
};
use rand::{thread_rng, Rng};

use dodge_game::compute::{
    check_collisions, init_state, maybe_spawn, resolve_game_over, update_objects,
};
use dodge_game::entities::{Direction, GameState};

/// Fixed end-of-frame pause — the sole frame-rate throttle.
const FRAME: Duration = Duration::from_millis(7);

/// Terminal rows requested at startup, before the loop begins.
const GAME_HEIGHT: u16 = 60;

// ── Input ─────────────────────────────────────────────────────────────────────

enum Input {
    Dir(Direction),
    Quit,
}

/// Drain every pending key event without blocking. The last directional key
/// wins; Ctrl-C is the only way out of the loop besides game over, since raw
/// mode swallows the usual interrupt.
fn poll_input() -> std::io::Result<Option<Input>> {
    let mut pending = None;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = event::read()?
        {
            match code {
                KeyCode::Left => pending = Some(Input::Dir(Direction::Left)),
                KeyCode::Right => pending = Some(Input::Dir(Direction::Right)),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(Some(Input::Quit));
                }
                _ => {}
            }
        }
    }
    Ok(pending)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Run frames until game over (or Ctrl-C). Fixed order per frame: update,
/// collide, render, game-over check, spawn, sleep. Terminal bounds are read
/// fresh at the top of every frame so the clamps never work from stale sizes.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut impl Rng,
) -> std::io::Result<()> {
    while !state.game_over {
        let (width, height) = terminal::size()?;

        let input = match poll_input()? {
            Some(Input::Quit) => return Ok(()),
            Some(Input::Dir(dir)) => Some(dir),
            None => None,
        };

        update_objects(state, input, width, rng);
        check_collisions(state, height);

        display::render(out, state, height)?;

        // Checked after the render so the final frame is still shown.
        resolve_game_over(state);

        maybe_spawn(state, width, rng);

        thread::sleep(FRAME);
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Fix the play-field height before the first frame; width stays whatever
    // the terminal currently has.
    let (cols, _) = terminal::size()?;
    out.execute(terminal::SetSize(cols, GAME_HEIGHT))?;

    let (width, height) = terminal::size()?;
    let mut state = init_state(width, height);
    let mut rng = thread_rng();

    let result = game_loop(&mut out, &mut state, &mut rng);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    drop(out);

    if state.game_over {
        println!("Game over!");
    }
    result
}
