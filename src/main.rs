//! Terminal maze runner (default binary).
//!
//! Turn-based: each tick checks the clock, redraws, then blocks until a move
//! key arrives. The clock is only consulted between moves, so a player who
//! idles past the budget times out on the next tick.

use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use tui_maze::config::AppConfig;
use tui_maze::core::{GameSession, TickStatus};
use tui_maze::input::{command_for, Command};
use tui_maze::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use tui_maze::types::Direction;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_logging()?;

    let layout = config.load_layout()?;
    let mut session = GameSession::from_layout(&layout).context("parsing maze layout")?;
    info!(
        "starting {}x{} maze",
        session.grid().width(),
        session.grid().height()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if let Some(outcome) = session.outcome() {
        for line in outcome.farewell() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut hud = Hud::default();
    let started = Instant::now();

    loop {
        hud.remaining_secs = match session.check_time(started.elapsed()) {
            TickStatus::TimedOut => return Ok(()),
            TickStatus::Running { remaining_secs } => remaining_secs,
        };
        draw(term, &view, session, &hud, &mut fb)?;

        let Some(direction) = wait_for_move(term, &view, session, &hud, &mut fb)? else {
            session.quit();
            return Ok(());
        };

        if let Some(report) = session.apply_move(direction) {
            hud.notice = report.event();
            if report.outcome.is_some() {
                return Ok(());
            }
        }
    }
}

/// Block until a move key. `None` means the player asked to quit.
fn wait_for_move(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &GameSession,
    hud: &Hud,
    fb: &mut FrameBuffer,
) -> Result<Option<Direction>> {
    loop {
        match event::read()? {
            Event::Key(key) => match command_for(key) {
                Some(Command::Move(direction)) => return Ok(Some(direction)),
                Some(Command::Quit) => return Ok(None),
                None => {}
            },
            Event::Resize(..) => {
                term.invalidate();
                draw(term, view, session, hud, fb)?;
            }
            _ => {}
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    session: &GameSession,
    hud: &Hud,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(session, hud, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
