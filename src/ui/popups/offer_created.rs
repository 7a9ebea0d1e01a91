//! Popup shown after `make_offer` succeeds.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use super::render_help;
use crate::constants::{POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT};
use crate::theme::SUCCESS_COLOR;
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_rect_percent;

pub fn render(frame: &mut Frame, area: Rect, offer: &str) {
    let popup_area = centered_rect_percent(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, area);
    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Offer Created");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from(Span::styled(
            "Your offer is ready. Save it to the wallet or copy it to share.",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(offer.to_string()),
    ];
    let content = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), content);

    render_help(
        frame,
        popup_area,
        key_hints(&[("Enter", "save"), ("c", "copy"), ("Esc", "close")]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_offer_created_popup() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), "offer1created"))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Offer Created"));
        assert!(text.contains("offer1created"));
        assert!(text.contains("Enter:save  c:copy  Esc:close"));
    }
}
