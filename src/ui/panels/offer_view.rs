//! Detail view of a pasted or typed offer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::OfferView;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, key_hints};

pub fn render(frame: &mut Frame, area: Rect, view: &OfferView) {
    let block = create_border_block("Offer", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let route = Line::from(vec![
        Span::styled("Route: ", Style::default().fg(MUTED_COLOR)),
        Span::styled(view.route.clone(), Style::default().fg(PRIMARY_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(route), rows[0]);

    frame.render_widget(
        Paragraph::new(view.offer.clone()).wrap(Wrap { trim: false }),
        rows[1],
    );

    let status = if view.importing {
        Line::from(Span::styled(
            "Importing offer…",
            Style::default().fg(WARNING_COLOR),
        ))
    } else {
        key_hints(&[("Enter", "import"), ("c", "copy"), ("Esc", "back")])
    };
    frame.render_widget(Paragraph::new(status), rows[2]);
}
