//! Offer list panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::render_notice;
use crate::constants::{CURSOR_SYMBOL, OFFER_PREVIEW_LENGTH, truncate_middle};
use crate::domain::OfferRecord;
use crate::state::OffersState;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, status_color};
use crate::ui::helpers::create_border_block;

/// Renders the wallet's offers, newest first as the wallet returns them.
pub fn render(frame: &mut Frame, area: Rect, offers: &OffersState) {
    let block = create_border_block("Offers", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !offers.loaded {
        render_notice(frame, inner, "Loading offers…");
        return;
    }
    if offers.records.is_empty() {
        render_notice(frame, inner, "No offers yet. Press n to make one.");
        return;
    }

    let items: Vec<ListItem> = offers
        .records
        .iter()
        .enumerate()
        .map(|(i, record)| offer_item(record, i == offers.cursor))
        .collect();

    let mut state = ListState::default().with_selected(Some(offers.cursor));
    frame.render_stateful_widget(List::new(items), inner, &mut state);
}

fn offer_item(record: &OfferRecord, selected: bool) -> ListItem<'static> {
    let marker = if selected { CURSOR_SYMBOL } else { "  " };
    let badge = Span::styled(
        format!("[{}]", record.status.label()),
        Style::default()
            .fg(status_color(record.status))
            .add_modifier(Modifier::BOLD),
    );

    ListItem::new(vec![
        Line::from(vec![
            Span::raw(marker),
            badge,
            Span::raw("  "),
            Span::styled(
                record.creation_date.clone(),
                Style::default().fg(MUTED_COLOR),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::raw(truncate_middle(&record.offer, OFFER_PREVIEW_LENGTH)),
        ]),
    ])
    .style(if selected {
        SELECTED_STYLE
    } else {
        Style::default()
    })
}
