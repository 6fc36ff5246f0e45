//! Placeholder dashboard content and the year substitution that fills it in.
//!
//! Nothing here is real data; every section is a fixed list until a content
//! source exists.

use serde::Serialize;

use crate::pipeline::DisplayFields;

/// A poster-style entry (movie, song, outfit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub emoji: &'static str,
}

/// Icon shown next to a dashboard section title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIcon {
    News,
    Movie,
    Music,
    Fashion,
    Astronomy,
    Chart,
}

/// One of the round highlight cards along the bottom of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircleItem {
    pub title: &'static str,
    pub icon: SectionIcon,
    /// Gradient start class for the circle background
    pub tint: &'static str,
    pub emoji: &'static str,
}

const NEWS_BULLETS: [&str; 2] = ["Sample news A · Sample news B", "Replace with real API later"];

pub const MOVIES: [MediaItem; 3] = [
    MediaItem { title: "Home Alone", subtitle: Some("Comedy"), emoji: "🎬" },
    MediaItem { title: "Ghost", subtitle: Some("Drama"), emoji: "👻" },
    MediaItem { title: "Pretty Woman", subtitle: Some("Romance"), emoji: "💖" },
];

pub const TOP_HITS: [MediaItem; 3] = [
    MediaItem { title: "Billie Jean", subtitle: Some("#1"), emoji: "🎵" },
    MediaItem { title: "Like a Prayer", subtitle: Some("#2"), emoji: "🎶" },
    MediaItem { title: "Beat It", subtitle: Some("#3"), emoji: "🎧" },
];

pub const FASHION: [MediaItem; 3] = [
    MediaItem { title: "Denim Jacket", subtitle: None, emoji: "🧥" },
    MediaItem { title: "High Tops", subtitle: None, emoji: "👟" },
    MediaItem { title: "Retro Tee", subtitle: None, emoji: "👕" },
];

pub const CIRCLES: [CircleItem; 4] = [
    CircleItem {
        title: "Magazine Covers",
        icon: SectionIcon::News,
        tint: "from-amber-300/30",
        emoji: "📰",
    },
    CircleItem {
        title: "Billboard Charts",
        icon: SectionIcon::Chart,
        tint: "from-emerald-300/30",
        emoji: "📈",
    },
    CircleItem {
        title: "TV & Anime",
        icon: SectionIcon::Movie,
        tint: "from-sky-300/30",
        emoji: "📺",
    },
    CircleItem {
        title: "Astronomy",
        icon: SectionIcon::Astronomy,
        tint: "from-fuchsia-300/30",
        emoji: "✨",
    },
];

/// Everything the dashboard screen displays, with the year already filled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub display: DisplayFields,
    pub subtitle: String,
    pub news_bullets: Vec<String>,
    pub movies: Vec<MediaItem>,
    pub top_hits_title: String,
    pub top_hits: Vec<MediaItem>,
    pub fashion: Vec<MediaItem>,
    pub circles: Vec<CircleItem>,
}

impl DashboardView {
    pub fn render(display: &DisplayFields) -> Self {
        let year = display.year_text();

        let news_bullets = std::iter::once(format!("Headlines from {}", year))
            .chain(NEWS_BULLETS.iter().map(|bullet| bullet.to_string()))
            .collect();

        Self {
            display: display.clone(),
            subtitle: format!("Based on your birthday: {}", display.long_date),
            news_bullets,
            movies: MOVIES.to_vec(),
            top_hits_title: format!("TOP HITS OF {}", year),
            top_hits: TOP_HITS.to_vec(),
            fashion: FASHION.to_vec(),
            circles: CIRCLES.to_vec(),
        }
    }
}
