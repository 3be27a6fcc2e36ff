use std::io;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::menu::{Menu, MenuOutcome};
use super::{keys, menu_view, tower_view};
use crate::input::InputEvent;
use crate::session::{BoardView, Display, InputSource, Pause};

/// Terminal front end: draws with ratatui and reads keys from crossterm.
pub struct App<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        App { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Show a menu until an option is chosen. `None` if the player quits.
    pub fn run_menu(&mut self, menu: &mut Menu) -> io::Result<Option<usize>> {
        menu.reset();
        loop {
            self.terminal.draw(|f| menu_view::render(f, menu))?;

            match menu.handle(self.next_event()?) {
                MenuOutcome::Pending => {}
                MenuOutcome::Chosen(choice) => return Ok(Some(choice)),
                MenuOutcome::Cancelled => return Ok(None),
            }
        }
    }

    fn draw_board(&mut self, view: &BoardView<'_>, message: Option<&str>) -> io::Result<()> {
        self.terminal
            .draw(|f| tower_view::render(f, view, message))?;
        Ok(())
    }
}

/// Block until a key press arrives; other terminal events are skipped.
fn read_key() -> io::Result<InputEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(keys::classify(key));
            }
        }
    }
}

impl<B: Backend> InputSource for App<B> {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        read_key()
    }
}

impl<B: Backend> Display for App<B> {
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()> {
        self.draw_board(view, None)
    }

    fn notice(&mut self, view: &BoardView<'_>, message: &str) -> io::Result<()> {
        let text = format!("{message}  (press any key)");
        self.draw_board(view, Some(&text))?;
        read_key()?;
        Ok(())
    }
}

impl<B: Backend> Pause for App<B> {
    /// Waits out the full duration unless a quit key arrives first.
    fn pause(&mut self, duration: Duration) -> io::Result<ControlFlow<()>> {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(ControlFlow::Continue(()));
            }
            if let Event::Key(key) = event::read()? {
                if keys::classify(key) == InputEvent::Quit {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }
    }
}
