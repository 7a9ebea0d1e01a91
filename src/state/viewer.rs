//! Routing serialized offers to the detail view.

use url::Url;

/// Route prefix of the offer detail view.
pub const VIEW_ROUTE_PREFIX: &str = "offers/view";

/// Builds the detail route for a pasted or typed offer.
///
/// Input is trimmed; blank input yields `None`. The offer is percent-encoded as
/// a single path segment.
#[must_use]
pub fn offer_route(input: &str) -> Option<String> {
    let offer = input.trim();
    if offer.is_empty() {
        return None;
    }

    let mut route = Url::parse(&format!("offerdesk:/{VIEW_ROUTE_PREFIX}")).ok()?;
    route.path_segments_mut().ok()?.push(offer);
    Some(route.path().trim_start_matches('/').to_string())
}

/// State of the offer detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferView {
    pub route: String,
    /// The trimmed offer string.
    pub offer: String,
    /// An `import_offer` request is in flight.
    pub importing: bool,
}

impl OfferView {
    /// Opens the view for `input`, or `None` for blank input.
    #[must_use]
    pub fn open(input: &str) -> Option<Self> {
        let route = offer_route(input)?;
        Some(Self {
            route,
            offer: input.trim().to_string(),
            importing: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t ")]
    fn test_blank_input_never_routes(#[case] input: &str) {
        assert_eq!(offer_route(input), None);
        assert!(OfferView::open(input).is_none());
    }

    #[test]
    fn test_route_is_trimmed() {
        assert_eq!(
            offer_route("  offer1qqz83wc  ").as_deref(),
            Some("offers/view/offer1qqz83wc")
        );
    }

    #[test]
    fn test_route_encodes_segment() {
        let route = offer_route("a/b c%d").unwrap();
        assert_eq!(route, "offers/view/a%2Fb%20c%25d");

        let view = OfferView::open(" a/b c%d ").unwrap();
        assert_eq!(view.offer, "a/b c%d");
        assert_eq!(view.route, route);
    }
}
