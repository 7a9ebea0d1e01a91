//! Header rendering for the offerdesk TUI
//!
//! Renders the logo, the screen tabs, and the wallet unit.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::client::WalletApi;
use crate::state::{App, Screen};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};

use super::helpers::create_border_block;

/// Render the application header
pub fn render<W: WalletApi>(frame: &mut Frame, area: Rect, app: &App<W>) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let unit = format!("{} · {} decimals", app.unit.ticker, app.unit.decimals);
    #[allow(clippy::cast_possible_truncation)]
    let unit_width = if area.width > 60 {
        unit.chars().count() as u16
    } else {
        0
    };

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4 + unit_width),
        1,
    );
    frame.render_widget(Paragraph::new(title_line(&app.screen)), title_area);

    if unit_width > 0 {
        let unit_area = Rect::new(
            area.right().saturating_sub(unit_width + 2),
            area.y + 1,
            unit_width,
            1,
        );
        let unit_label = Paragraph::new(unit)
            .style(
                Style::default()
                    .fg(SUCCESS_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Right);
        frame.render_widget(unit_label, unit_area);
    }
}

fn title_line(screen: &Screen) -> Line<'static> {
    let on_offers = !matches!(screen, Screen::Profiles | Screen::CreateProfile(_));
    let tab = |label: &'static str, active: bool| {
        if active {
            Span::styled(
                label,
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else {
            Span::styled(label, Style::default().fg(MUTED_COLOR))
        }
    };

    Line::from(vec![
        "[".into(),
        "offer".yellow().bold(),
        "desk".green().bold(),
        "]".into(),
        Span::raw("   "),
        tab("Offers", on_offers),
        Span::raw(" │ "),
        tab("Profiles", !on_offers),
        Span::raw("   "),
        Span::styled(screen.title(), Style::default().fg(MUTED_COLOR)),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OfferView;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_title_names_screen() {
        assert_eq!(
            text(&title_line(&Screen::MakeOffer)),
            "[offerdesk]   Offers │ Profiles   Make Offer"
        );
        let view = OfferView::open("offer1abc").unwrap();
        assert!(text(&title_line(&Screen::ViewOffer(view))).ends_with("View Offer"));
    }

    #[test]
    fn test_active_tab_follows_screen() {
        let offers = title_line(&Screen::Offers);
        let profiles = title_line(&Screen::Profiles);
        assert_eq!(offers.spans[5].style.fg, Some(PRIMARY_COLOR));
        assert_eq!(profiles.spans[5].style.fg, Some(MUTED_COLOR));
        assert_eq!(profiles.spans[7].style.fg, Some(PRIMARY_COLOR));
    }
}
