use crate::content::case_study::ContentTable;
use crate::site::nav::NavTarget;

/// Card in the horizontal project strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ShowcaseCard {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl ShowcaseCard {
    /// Case-study route the card links to.
    pub fn target(&self) -> NavTarget {
        NavTarget::project(self.id)
    }
}

/// Showcase cards in display order.
pub const SHOWCASE_CARDS: [ShowcaseCard; 3] = [
    ShowcaseCard {
        id: "project-management-tool",
        title: "Project Management Tool",
        category: "EdTech Platform",
        image: "/project-management.jpg",
        description: "Comprehensive dashboard for college project tracking and collaboration.",
    },
    ShowcaseCard {
        id: "tech-fest-website",
        title: "Tech Fest Website",
        category: "Event Experience",
        image: "/techfest-website.jpg",
        description: "Dynamic portal for a college technical festival with event registration.",
    },
    ShowcaseCard {
        id: "siem-tool",
        title: "SIEM Tool",
        category: "Cybersecurity",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=2070",
        description: "Security Information and Event Management system for real-time threat detection.",
    },
];

/// Ids of cards whose link would land on the not-found page.
pub fn dangling_cards<'a>(cards: &'a [ShowcaseCard], table: &ContentTable) -> Vec<&'a str> {
    cards
        .iter()
        .filter(|c| table.lookup(c.id).is_none())
        .map(|c| c.id)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/content/projects.rs"]
mod tests;
