//! DID profile list panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use super::render_notice;
use crate::constants::{CURSOR_SYMBOL, truncate_middle};
use crate::domain::DidRecord;
use crate::state::ProfilesState;
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE, WARNING_COLOR};
use crate::ui::helpers::create_border_block;

const DID_ID_WIDTH: usize = 40;

pub fn render(frame: &mut Frame, area: Rect, profiles: &ProfilesState) {
    let block = create_border_block("Profiles", true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !profiles.loaded {
        render_notice(frame, inner, "Loading profiles…");
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    if let Some(notice) = profiles.empty_notice() {
        render_notice(frame, rows[0], &format!("{notice}\nPress n to create a profile."));
    } else {
        let items: Vec<ListItem> = profiles
            .visible()
            .into_iter()
            .enumerate()
            .map(|(i, did)| profile_item(did, i == profiles.cursor))
            .collect();
        let mut state = ListState::default().with_selected(Some(profiles.cursor));
        frame.render_stateful_widget(List::new(items), rows[0], &mut state);
    }

    if let Some(hint) = hidden_hint(profiles) {
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(MUTED_COLOR)),
            rows[1],
        );
    }
}

fn profile_item(did: &DidRecord, selected: bool) -> ListItem<'static> {
    let marker = if selected { CURSOR_SYMBOL } else { "  " };
    let mut spans = vec![
        Span::raw(marker),
        Span::styled(
            did.display_name().to_string(),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            truncate_middle(&did.launcher_id, DID_ID_WIDTH),
            Style::default().fg(MUTED_COLOR),
        ),
    ];
    if !did.visible {
        spans.push(Span::styled(" (hidden)", Style::default().fg(WARNING_COLOR)));
    }

    ListItem::new(Line::from(spans)).style(if selected {
        SELECTED_STYLE
    } else {
        Style::default()
    })
}

fn hidden_hint(profiles: &ProfilesState) -> Option<String> {
    if !profiles.has_hidden() {
        return None;
    }
    if profiles.show_hidden {
        return Some("Showing hidden profiles. Press h to hide them.".to_string());
    }
    let count = profiles.dids.iter().filter(|did| !did.visible).count();
    Some(format!("{count} hidden. Press h to show."))
}
