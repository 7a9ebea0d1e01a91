//! Create-profile form panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::CreateProfileForm;
use crate::state::profiles::CreateProfileField;
use crate::theme::{MUTED_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_border_block, field_line, key_hints};

pub fn render(frame: &mut Frame, area: Rect, form: &CreateProfileForm, ticker: &str) {
    let block = create_border_block("Create Profile", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "A DID profile holds your on-chain identity.",
            Style::default().fg(MUTED_COLOR),
        )),
        Line::default(),
        field_line(
            "Name",
            &form.name,
            "Profile name",
            form.field == CreateProfileField::Name,
        ),
        field_line(
            &format!("Network Fee ({ticker})"),
            &form.fee,
            "0",
            form.field == CreateProfileField::Fee,
        ),
        Line::default(),
    ];

    lines.push(if form.submitting {
        Line::from(Span::styled(
            "Creating profile…",
            Style::default().fg(WARNING_COLOR),
        ))
    } else {
        key_hints(&[("Tab", "next field"), ("Enter", "create"), ("Esc", "back")])
    });

    frame.render_widget(Paragraph::new(lines), inner);
}
