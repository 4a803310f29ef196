//! NOCT portfolio terminal entry point.
//!
//! Boots the simulated terminal, then runs a fixed-cadence event loop:
//! poll keys, advance playback by elapsed milliseconds, redraw.

mod input;
mod render;
mod tui;

use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use noct_term::boot::run_boot;
use noct_term::clock::DesktopClock;
use noct_term::{register_builtins, CommandRegistry, Profile, Screen, Session};
use noct_types::InputEvent;

const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let profile = Rc::new(Profile::embedded()?);
    log::info!(
        "starting terminal for {}@{}",
        profile.user,
        profile.hostname
    );

    let _guard = tui::RawModeGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let size = terminal.size()?;

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &profile);

    let screen = Screen::new(size.width, size.height);
    let mut session = Session::new(
        registry,
        screen,
        Box::new(DesktopClock::new()),
        &profile.user,
        &profile.hostname,
    );
    run_boot(&mut session.screen, &profile);

    let mut last_tick = Instant::now();
    loop {
        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match input::map_event(event::read()?) {
                Some(InputEvent::Quit) => break,
                Some(ev) => session.handle_input(ev),
                None => {},
            }
        }
        let elapsed = last_tick.elapsed();
        if elapsed >= TICK {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis() as u64);
        }
        terminal.draw(|frame| render::draw(frame, &session))?;
    }

    log::info!("session closed");
    Ok(())
}
