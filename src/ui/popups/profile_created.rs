//! Confirmation popup for a submitted `create_did`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::render_help;
use crate::domain::{TransactionResponse, Unit, to_display_units};
use crate::theme::{MUTED_COLOR, SUCCESS_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, response: &TransactionResponse, unit: &Unit) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup_area);

    let block = create_popup_block("Profile Created");
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let muted = Style::default().fg(MUTED_COLOR);
    let lines = vec![
        Line::from(Span::styled(
            "Your profile is being created.",
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "It appears in the list once the transaction confirms.",
            muted,
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Fee: ", muted),
            Span::raw(fee_label(&response.summary.fee, unit)),
        ]),
        Line::from(vec![
            Span::styled("Coin spends: ", muted),
            Span::raw(response.coin_spends.len().to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    render_help(
        frame,
        popup_area,
        key_hints(&[("Enter", "view profiles"), ("Esc", "close")]),
    );
}

/// Fee in display units with the ticker. Unparseable fees are shown raw.
fn fee_label(fee: &str, unit: &Unit) -> String {
    fee.parse::<u128>().map_or_else(
        |_| fee.to_string(),
        |units| format!("{} {}", to_display_units(units, unit.decimals), unit.ticker),
    )
}
