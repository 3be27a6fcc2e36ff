use ratatui::style::Color;

use crate::error::MenuError;
use crate::input::InputEvent;

/// Spacing and colours for a [`Menu`]. Colours are used as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    /// Blank lines above the prompt
    pub upper_padding: u16,
    /// Blank lines between the prompt and the first option
    pub prompt_padding: u16,
    pub foreground: Color,
    pub background: Color,
    /// Colour of the prompt and the highlighted option
    pub accent: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            upper_padding: 2,
            prompt_padding: 1,
            foreground: Color::Gray,
            background: Color::Black,
            accent: Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Pending,
    /// Index of the chosen option, counting selectable options only
    Chosen(usize),
    Cancelled,
}

/// A vertical list of options with one highlighted entry.
///
/// Blank options are drawn as spacers and skipped by the highlight.
#[derive(Debug, Clone)]
pub struct Menu {
    prompt: Option<String>,
    options: Vec<String>,
    /// Positions in `options` that can be highlighted
    selectable: Vec<usize>,
    selected: usize,
    style: MenuStyle,
}

impl Menu {
    pub fn new(options: Vec<String>, prompt: Option<String>) -> Result<Self, MenuError> {
        let selectable: Vec<usize> = options
            .iter()
            .enumerate()
            .filter(|(_, option)| !option.trim().is_empty())
            .map(|(index, _)| index)
            .collect();
        if selectable.is_empty() {
            return Err(MenuError::NoSelectableOptions);
        }

        Ok(Menu {
            prompt,
            options,
            selectable,
            selected: 0,
            style: MenuStyle::default(),
        })
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Highlighted entry, counting selectable options only
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Position of the highlighted entry in the full option list
    pub fn highlighted(&self) -> usize {
        self.selectable[self.selected]
    }

    /// Move the highlight back to the first selectable option
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn handle(&mut self, event: InputEvent) -> MenuOutcome {
        let count = self.selectable.len();
        match event {
            InputEvent::MoveUp => {
                self.selected = (self.selected + count - 1) % count;
                MenuOutcome::Pending
            }
            InputEvent::MoveDown => {
                self.selected = (self.selected + 1) % count;
                MenuOutcome::Pending
            }
            InputEvent::Confirm => MenuOutcome::Chosen(self.selected),
            InputEvent::Quit => MenuOutcome::Cancelled,
            _ => MenuOutcome::Pending,
        }
    }
}
