//! Layouts codelab fragments: top bar, body text and the photographer card

pub const TOP_BAR_TITLE: &str = "LayoutsCodelab";

pub const FAVORITE_ICON: &str = "♥";

pub const BODY_LINES: [&str; 2] = ["Hi there!", "Thanks for going through the Layouts codelab"];

/// Static content of the photographer card
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotographerCard {
    pub name: &'static str,
    pub last_seen: &'static str,
}

impl Default for PhotographerCard {
    fn default() -> Self {
        PhotographerCard {
            name: "Alex Cole",
            last_seen: "3 minutes ago",
        }
    }
}

/// The favorite action has nothing wired to it yet
pub fn on_favorite() {
    tracing::info!("Favorite action pressed");
}

/// Card clicks are accepted and ignored
pub fn on_card_click(card: &PhotographerCard) {
    tracing::debug!(name = card.name, "Photographer card clicked");
}
