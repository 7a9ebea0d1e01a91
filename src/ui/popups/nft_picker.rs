//! NFT picker popup.
//!
//! Shows the slot's current NFT, one catalog page, and a page indicator.
//! Entries already used by another slot are marked and cannot be chosen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};

use super::render_help;
use crate::constants::{
    BLOCKED_SYMBOL, CURSOR_SYMBOL, POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT, truncate_middle,
};
use crate::domain::nft::media_label;
use crate::domain::{NftRecord, OfferDraft};
use crate::state::{NftPicker, PickerPhase, ThumbnailCache};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, WARNING_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_rect_percent;

const NFT_ID_WIDTH: usize = 24;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    picker: &NftPicker,
    draft: &OfferDraft,
    thumbnails: &ThumbnailCache,
) {
    let popup_area = centered_rect_percent(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT, area);
    frame.render_widget(Clear, popup_area);

    let title = format!(
        "Choose NFT {} · page {}/{}",
        picker.slot + 1,
        picker.page + 1,
        picker.page_count
    );
    let block = create_popup_block(&title);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(current_line(picker, thumbnails)), rows[0]);

    if picker.catalog.is_empty() {
        let notice = match picker.phase {
            PickerPhase::Idle | PickerPhase::FetchingPage => "Loading NFTs…",
            _ => "No NFTs on this page",
        };
        frame.render_widget(
            Paragraph::new(notice).style(Style::default().fg(MUTED_COLOR)),
            rows[1],
        );
    } else {
        let items: Vec<ListItem> = picker
            .catalog
            .iter()
            .enumerate()
            .map(|(i, nft)| {
                let selectable = picker.can_select(draft, &nft.launcher_id);
                nft_item(nft, i == picker.cursor, selectable, thumbnails)
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(picker.cursor));
        frame.render_stateful_widget(List::new(items), rows[1], &mut state);
    }

    render_help(
        frame,
        popup_area,
        key_hints(&[("Enter", "choose"), ("←→", "page"), ("Esc", "close")]),
    );
}

fn current_line(picker: &NftPicker, thumbnails: &ThumbnailCache) -> Line<'static> {
    let label = Span::styled("Current: ", Style::default().fg(MUTED_COLOR));
    let value = match (&picker.selected, picker.nft_id.is_empty()) {
        (_, true) => Span::styled("none", Style::default().fg(MUTED_COLOR)),
        (Some(nft), false) => Span::styled(
            format!(
                "{} [{}]",
                nft.display_name(),
                media_label(thumbnails.uri_or_placeholder(&nft.launcher_id))
            ),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        (None, false) => Span::raw(truncate_middle(&picker.nft_id, NFT_ID_WIDTH)),
    };
    let mut spans = vec![label, value];
    if matches!(
        picker.phase,
        PickerPhase::FetchingPage | PickerPhase::FetchingThumbnails
    ) {
        spans.push(Span::styled("  loading…", Style::default().fg(WARNING_COLOR)));
    }
    Line::from(spans)
}

fn nft_item(
    nft: &NftRecord,
    highlighted: bool,
    selectable: bool,
    thumbnails: &ThumbnailCache,
) -> ListItem<'static> {
    let marker = if highlighted { CURSOR_SYMBOL } else { "  " };
    let status = if selectable {
        Span::raw("  ")
    } else {
        Span::styled(
            format!("{BLOCKED_SYMBOL} "),
            Style::default().fg(ERROR_COLOR),
        )
    };
    let media = if thumbnails.is_in_flight(&nft.launcher_id) {
        "loading".to_string()
    } else {
        media_label(thumbnails.uri_or_placeholder(&nft.launcher_id)).to_string()
    };
    let name_style = if selectable {
        Style::default()
    } else {
        Style::default().fg(MUTED_COLOR).add_modifier(Modifier::CROSSED_OUT)
    };

    ListItem::new(Line::from(vec![
        Span::raw(marker),
        status,
        Span::styled(nft.display_name().to_string(), name_style),
        Span::raw("  "),
        Span::styled(
            truncate_middle(&nft.launcher_id, NFT_ID_WIDTH),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::styled(format!("  [{media}]"), Style::default().fg(MUTED_COLOR)),
    ]))
    .style(if highlighted {
        SELECTED_STYLE
    } else {
        Style::default()
    })
}
