//! Offer composer panel.
//!
//! The body is split into the offered and requested columns over a settings
//! block holding the fee, the expiration timer and the submit status.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::client::WalletApi;
use crate::constants::{CURSOR_SYMBOL, truncate_middle};
use crate::domain::nft::media_label;
use crate::domain::{OfferDraft, Side};
use crate::state::{App, ComposerField, ThumbnailCache, composer};
use crate::theme::{
    ERROR_COLOR, HIGHLIGHT_STYLE, MUTED_COLOR, OFFERED_COLOR, REQUESTED_COLOR, SUCCESS_COLOR,
    WARNING_COLOR,
};
use crate::ui::helpers::{create_border_block, field_line};

/// Rows of the settings block: fee, expiration rows, blank, status, borders.
const SETTINGS_HEIGHT: u16 = 8;

const NFT_ID_WIDTH: usize = 32;

pub fn render<W: WalletApi>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(SETTINGS_HEIGHT)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let draft = app.drafts.get();
    let focus = app.composer.focus;
    let ticker = &app.unit.ticker;

    for (side, column) in [(Side::Offered, columns[0]), (Side::Requested, columns[1])] {
        let focused = is_side_field(focus) && focus.side() == side;
        let block = create_border_block(side.label(), focused);
        let inner = block.inner(column);
        frame.render_widget(block, column);

        let lines = side_lines(draft, side, focus, ticker, &app.thumbnails);
        frame.render_widget(Paragraph::new(lines), inner);
    }

    let block = create_border_block("Settings", !is_side_field(focus));
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    let mut lines = settings_lines(draft, focus, ticker);
    lines.push(Line::default());
    lines.push(status_line(app));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

const fn is_side_field(field: ComposerField) -> bool {
    !matches!(
        field,
        ComposerField::Fee
            | ComposerField::ExpirationDays
            | ComposerField::ExpirationHours
            | ComposerField::ExpirationMinutes
    )
}

fn side_lines(
    draft: &OfferDraft,
    side: Side,
    focus: ComposerField,
    ticker: &str,
    thumbnails: &ThumbnailCache,
) -> Vec<Line<'static>> {
    let color = match side {
        Side::Offered => OFFERED_COLOR,
        Side::Requested => REQUESTED_COLOR,
    };

    composer::fields(draft)
        .into_iter()
        .filter(|field| is_side_field(*field) && field.side() == side)
        .map(|field| {
            let focused = field == focus;
            let value = composer::field_value(draft, field).unwrap_or_default();
            match field {
                ComposerField::SideHeader(_) => header_line(draft, side, color, focused),
                ComposerField::Native(_) => {
                    field_line(&format!("Amount ({ticker})"), value, "0", focused)
                }
                ComposerField::Nft(Side::Offered, _) => {
                    let shown = if value.is_empty() {
                        String::new()
                    } else {
                        format!(
                            "{} [{}]",
                            truncate_middle(value, NFT_ID_WIDTH),
                            media_label(thumbnails.uri_or_placeholder(value))
                        )
                    };
                    field_line(&field.label(), &shown, "Enter to choose", focused)
                }
                ComposerField::Nft(..) => field_line(&field.label(), value, "nft1…", focused),
                ComposerField::TokenAssetId(..) => {
                    field_line(&field.label(), value, "asset id", focused)
                }
                _ => field_line(&field.label(), value, "0", focused),
            }
        })
        .collect()
}

fn header_line(draft: &OfferDraft, side: Side, color: Color, focused: bool) -> Line<'static> {
    let marker = if focused { CURSOR_SYMBOL } else { "  " };
    let mut spans = vec![
        Span::raw(marker),
        Span::styled(
            side.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if draft.side(side).is_empty() {
        spans.push(Span::styled(
            "  ^X amount  ^N NFT  ^T token",
            Style::default().fg(MUTED_COLOR),
        ));
    }
    let line = Line::from(spans);
    if focused {
        line.style(HIGHLIGHT_STYLE)
    } else {
        line
    }
}

fn settings_lines(draft: &OfferDraft, focus: ComposerField, ticker: &str) -> Vec<Line<'static>> {
    let mut lines = vec![field_line(
        &format!("Network Fee ({ticker})"),
        &draft.fee,
        "0",
        focus == ComposerField::Fee,
    )];

    match &draft.expiration {
        None => lines.push(Line::from(Span::styled(
            "  Expires: never (^E to set a timer)",
            Style::default().fg(MUTED_COLOR),
        ))),
        Some(expiration) => {
            for (field, value) in [
                (ComposerField::ExpirationDays, &expiration.days),
                (ComposerField::ExpirationHours, &expiration.hours),
                (ComposerField::ExpirationMinutes, &expiration.minutes),
            ] {
                lines.push(field_line(
                    &format!("Expires in {}", field.label().to_lowercase()),
                    value,
                    "0",
                    focus == field,
                ));
            }
        }
    }
    lines
}

fn status_line<W: WalletApi>(app: &App<W>) -> Line<'static> {
    if app.composer.submitting {
        return Line::from(Span::styled(
            "  Submitting offer…",
            Style::default().fg(WARNING_COLOR),
        ));
    }
    match app.submit_blocker() {
        Some(reason) => Line::from(Span::styled(
            format!("  {reason}"),
            Style::default().fg(ERROR_COLOR),
        )),
        None => Line::from(Span::styled(
            "  Ready. Press ^S to submit.",
            Style::default().fg(SUCCESS_COLOR),
        )),
    }
}
