use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::menu::Menu;

pub fn render(frame: &mut Frame, menu: &Menu) {
    let style = menu.style();
    let widget = Paragraph::new(menu_lines(menu))
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(style.background)));

    frame.render_widget(widget, frame.area());
}

/// Prompt and options, top padding included. The highlighted option is
/// wrapped in `<` `>`.
pub fn menu_lines(menu: &Menu) -> Vec<Line<'static>> {
    let style = menu.style();
    let accent = Style::default().fg(style.accent);
    let mut lines = Vec::new();

    lines.extend((0..style.upper_padding).map(|_| Line::default()));
    if let Some(prompt) = menu.prompt() {
        lines.push(Line::from(Span::styled(prompt.to_string(), accent)));
    }
    lines.extend((0..style.prompt_padding).map(|_| Line::default()));

    for (index, option) in menu.options().iter().enumerate() {
        if index == menu.highlighted() {
            lines.push(Line::from(Span::styled(format!("<{option}>"), accent)));
        } else {
            lines.push(Line::from(Span::styled(
                option.clone(),
                Style::default().fg(style.foreground),
            )));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::ui::menu::MenuStyle;
    use ratatui::style::Color;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_menu_lines_layout() {
        let mut menu = Menu::new(
            vec!["Play".into(), "".into(), "Quit".into()],
            Some("Towers of Hanoi".into()),
        )
        .unwrap();
        menu.handle(InputEvent::MoveDown);

        let lines = menu_lines(&menu);
        let texts: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(
            texts,
            vec!["", "", "Towers of Hanoi", "", "Play", "", "<Quit>"]
        );
    }

    #[test]
    fn test_menu_colours_pass_through() {
        let style = MenuStyle {
            upper_padding: 0,
            prompt_padding: 0,
            foreground: Color::Green,
            background: Color::Reset,
            accent: Color::Magenta,
        };
        let menu = Menu::new(vec!["a".into(), "b".into()], None)
            .unwrap()
            .with_style(style);

        let lines = menu_lines(&menu);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Magenta));
        assert_eq!(lines[1].spans[0].style.fg, Some(Color::Green));
    }
}
