use std::collections::VecDeque;
use std::io;
use std::ops::ControlFlow;
use std::time::Duration;

use super::{BoardView, Display, InputSource, Pause};
use crate::input::InputEvent;

/// In-memory front end that replays a fixed key script.
#[derive(Debug, Default)]
pub(crate) struct ScriptedUi {
    pub events: VecDeque<InputEvent>,
    pub renders: usize,
    pub notices: Vec<String>,
    pub pauses: Vec<Duration>,
    /// Stop the animation at this pause (0-based)
    pub stop_at_pause: Option<usize>,
    /// Column selections seen by `render`, as (cursor, armed)
    pub frames: Vec<(Option<usize>, Option<usize>)>,
}

impl ScriptedUi {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        ScriptedUi {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl InputSource for ScriptedUi {
    /// An exhausted script quits, so a short script never hangs a test.
    fn next_event(&mut self) -> io::Result<InputEvent> {
        Ok(self.events.pop_front().unwrap_or(InputEvent::Quit))
    }
}

impl Display for ScriptedUi {
    fn render(&mut self, view: &BoardView<'_>) -> io::Result<()> {
        self.renders += 1;
        self.frames.push((view.cursor, view.armed));
        Ok(())
    }

    fn notice(&mut self, _view: &BoardView<'_>, message: &str) -> io::Result<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}

impl Pause for ScriptedUi {
    fn pause(&mut self, duration: Duration) -> io::Result<ControlFlow<()>> {
        let index = self.pauses.len();
        self.pauses.push(duration);
        if self.stop_at_pause == Some(index) {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }
}
