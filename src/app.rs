//! The interactive session: terminal setup, the event loop and the tick timer.
use std::{
    io::{self, Stdout},
    time::Instant,
};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::{
    config::Config,
    error::Result,
    event::Input,
    frames::FrameSet,
    state::GameState,
    timer::Ticker,
    view::View,
};

/// Owns the terminal while a session runs: raw mode, the alternate screen, a hidden cursor
/// and mouse capture. Everything is restored on drop, also when unwinding from an error.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self { out: io::stdout() };
        execute!(
            session.out,
            EnterAlternateScreen,
            Hide,
            EnableMouseCapture,
            Clear(ClearType::All)
        )?;
        Ok(session)
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let restored = execute!(self.out, DisableMouseCapture, Show, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(e) = restored {
            log::error!("could not restore the terminal: {e}");
        }
    }
}

/// What the event loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// One walking session: the state, its art, and how it is shown.
pub struct App {
    config: Config,
    state: GameState,
    frames: FrameSet,
    view: View,
}

impl App {
    /// Validates `config` and prepares a session, loading frames from disk when image
    /// support is compiled in.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let frames = FrameSet::for_config(&config);
        Ok(Self::with_frames(config, frames))
    }

    /// Prepares a session with the given art. `config` is assumed to be valid.
    pub fn with_frames(config: Config, frames: FrameSet) -> Self {
        Self {
            state: GameState::new(&config),
            view: View::new(&config),
            frames,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one input to the state.
    pub fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Steer(direction) => {
                if self.state.direction() != Some(direction) {
                    log::debug!("now walking {direction}");
                }
                self.state.set_direction(direction);
                Flow::Redraw
            }
            Input::Redraw => Flow::Redraw,
            Input::Quit => Flow::Quit,
        }
    }

    /// Takes over the terminal and runs until the player quits.
    pub fn run(&mut self) -> Result<()> {
        let mut session = TerminalSession::start()?;
        let mut ticker = Ticker::new(self.config.tick_interval, Instant::now());
        log::info!("session started, ticking every {:?}", ticker.interval());

        self.view
            .draw(session.out(), &self.state.snapshot(), &self.frames)?;
        loop {
            if event::poll(ticker.remaining(Instant::now()))? {
                let input = Input::from_crossterm_event(event::read()?, self.view.buttons());
                match input.map_or(Flow::Continue, |input| self.handle(input)) {
                    Flow::Quit => break,
                    Flow::Redraw => {
                        if matches!(input, Some(Input::Redraw)) {
                            execute!(session.out(), Clear(ClearType::All))?;
                        }
                        self.view
                            .draw(session.out(), &self.state.snapshot(), &self.frames)?;
                    }
                    Flow::Continue => {}
                }
            }
            if ticker.fire(Instant::now()) {
                if let Some(snapshot) = self.state.advance() {
                    self.view.draw(session.out(), &snapshot, &self.frames)?;
                }
            }
        }

        ticker.cancel();
        let (x, y) = self.state.position();
        log::info!("session ended after {} ticks at ({x}, {y})", ticker.ticks());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    fn app() -> App {
        let config = Config::default();
        let frames = FrameSet::builtin(&config);
        App::with_frames(config, frames)
    }

    #[test]
    fn steering_changes_direction_only() {
        let mut app = app();
        let before = app.state().snapshot();
        assert_eq!(app.handle(Input::Steer(Direction::Down)), Flow::Redraw);
        let after = app.state().snapshot();
        assert_eq!(after.direction, Some(Direction::Down));
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!(after.frame_index, before.frame_index);
    }

    #[test]
    fn quit_and_redraw() {
        let mut app = app();
        assert_eq!(app.handle(Input::Quit), Flow::Quit);
        assert_eq!(app.handle(Input::Redraw), Flow::Redraw);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(App::new(Config::default().with_scale(0)).is_err());
    }
}
