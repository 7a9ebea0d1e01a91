//! Single-line text entry popup.
//!
//! Used for entering an offer by hand and for renaming a profile. Long input
//! scrolls so the end of the text stays visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::render_help;
use crate::theme::{FOCUSED_BORDER_STYLE, MUTED_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const INPUT_POPUP_WIDTH: u16 = 70;
const INPUT_POPUP_HEIGHT: u16 = 8;
const CURSOR: char = '█';

pub fn render(frame: &mut Frame, area: Rect, title: &str, prompt: &str, text: &str) {
    let popup_area = centered_popup_area(area, INPUT_POPUP_WIDTH, INPUT_POPUP_HEIGHT);
    frame.render_widget(Clear, popup_area);

    let block = create_popup_block(title).border_style(FOCUSED_BORDER_STYLE);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let visible = tail(text, usize::from(inner.width.saturating_sub(1)));
    let lines = vec![
        Line::from(Span::styled(
            prompt.to_string(),
            Style::default().fg(MUTED_COLOR),
        )),
        Line::from(format!("{visible}{CURSOR}")),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    render_help(
        frame,
        popup_area,
        key_hints(&[("Enter", "submit"), ("^V", "paste"), ("Esc", "cancel")]),
    );
}

/// Last `width` characters of `text`.
fn tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    text.char_indices()
        .nth(skip)
        .map_or("", |(index, _)| &text[index..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case("abc", 5, "abc")]
    #[case("abcdef", 3, "def")]
    #[case("héllo", 4, "éllo")]
    #[case("abc", 0, "")]
    fn test_tail(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(tail(text, width), expected);
    }

    #[test]
    fn test_input_popup_shows_prompt_and_text() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "Rename Profile", "New name:", "Alice"))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Rename Profile"));
        assert!(text.contains("New name:"));
        assert!(text.contains("Alice█"));
    }
}
