//! Content model for the portfolio page.
//!
//! Each of the four JSON resources served under `/static/json/` decodes into
//! one of the types here. [`ContentStore`] aggregates them once loading has
//! finished.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four resources the page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Resume,
    Portfolio,
    Contacts,
    About,
}

impl ResourceKind {
    /// All resources, in the order they are requested.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Resume,
        ResourceKind::Portfolio,
        ResourceKind::Contacts,
        ResourceKind::About,
    ];

    /// Resource name on the server (`{name}.json`).
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Resume => "resume",
            ResourceKind::Portfolio => "portfolio",
            ResourceKind::Contacts => "contacts",
            ResourceKind::About => "about",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.json", self.name())
    }
}

/// A single resume entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub position: String,
    pub company: String,
    pub duration: String,
    pub responsibilities: String,
}

/// A gif thumbnail and the page it links to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gif {
    pub file: String,
    pub link: String,
}

/// View count as published. Display-only, so any JSON scalar is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewCount {
    Number(serde_json::Number),
    Label(String),
    Flag(bool),
    #[default]
    Missing,
}

impl fmt::Display for ViewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewCount::Number(n) => write!(f, "{n}"),
            ViewCount::Label(label) => f.write_str(label),
            ViewCount::Flag(flag) => write!(f, "{flag}"),
            ViewCount::Missing => Ok(()),
        }
    }
}

/// A client video credited in the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub video_name: String,
    pub video_link: String,
    pub client_name: String,
    pub client_link: String,
    #[serde(default)]
    pub view_count: ViewCount,
    #[serde(default)]
    pub gifs: Vec<Gif>,
}

/// Portfolio sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortfolioSection {
    ThreeDAnimation,
    VideoEditing,
}

impl PortfolioSection {
    pub const ALL: [PortfolioSection; 2] =
        [PortfolioSection::ThreeDAnimation, PortfolioSection::VideoEditing];

    /// Key used in `portfolio.json`.
    pub fn key(self) -> &'static str {
        match self {
            PortfolioSection::ThreeDAnimation => "3dAnimation",
            PortfolioSection::VideoEditing => "videoEditing",
        }
    }

    /// Heading shown above the section.
    pub fn title(self) -> &'static str {
        match self {
            PortfolioSection::ThreeDAnimation => "3D Animation",
            PortfolioSection::VideoEditing => "Video Editing",
        }
    }
}

/// Portfolio entries grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(rename = "3dAnimation", default)]
    pub three_d_animation: Vec<PortfolioEntry>,
    #[serde(rename = "videoEditing", default)]
    pub video_editing: Vec<PortfolioEntry>,
}

impl Portfolio {
    /// Entries of one section, in stored order.
    pub fn section(&self, section: PortfolioSection) -> &[PortfolioEntry] {
        match section {
            PortfolioSection::ThreeDAnimation => &self.three_d_animation,
            PortfolioSection::VideoEditing => &self.video_editing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contacts {
    pub email: String,
    pub phone: String,
}

/// Text for the About side box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub content: Vec<String>,
}

/// Everything the views render from.
///
/// A store is either the empty pre-load store from [`ContentStore::new`] or a
/// complete post-load store built by the content loader. Fields of resources
/// that failed to load stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    pub jobs: Option<Vec<Job>>,
    pub portfolio: Option<Portfolio>,
    pub contacts: Option<Contacts>,
    pub about: Option<About>,
    loaded: bool,
    failed: Vec<ResourceKind>,
}

impl ContentStore {
    /// Create the empty pre-load store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether loading has settled for every resource.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Resources whose fetch failed during loading.
    pub fn failed(&self) -> &[ResourceKind] {
        &self.failed
    }

    /// Whether a resource is present in the store.
    pub fn has(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Resume => self.jobs.is_some(),
            ResourceKind::Portfolio => self.portfolio.is_some(),
            ResourceKind::Contacts => self.contacts.is_some(),
            ResourceKind::About => self.about.is_some(),
        }
    }

    /// Seal a store built by the loader.
    pub(crate) fn settle(mut self, failed: Vec<ResourceKind>) -> Self {
        self.loaded = true;
        self.failed = failed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        let names: Vec<_> = ResourceKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, ["resume", "portfolio", "contacts", "about"]);
        assert_eq!(ResourceKind::Contacts.to_string(), "contacts.json");
    }

    #[test]
    fn test_portfolio_decodes_section_keys() {
        let json = r#"{
            "3dAnimation": [{
                "videoName": "Intro",
                "videoLink": "https://v/1",
                "clientName": "Studio",
                "clientLink": "https://c/1",
                "viewCount": "1.2M views",
                "gifs": [{"file": "a.gif", "link": "https://v/1?t=3"}]
            }],
            "videoEditing": []
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();

        let animation = portfolio.section(PortfolioSection::ThreeDAnimation);
        assert_eq!(animation.len(), 1);
        assert_eq!(animation[0].view_count.to_string(), "1.2M views");
        assert_eq!(animation[0].gifs[0].file, "a.gif");
        assert!(portfolio.section(PortfolioSection::VideoEditing).is_empty());
    }

    #[test]
    fn test_view_count_accepts_numbers() {
        let count: ViewCount = serde_json::from_str("48210").unwrap();
        assert_eq!(count, ViewCount::Number(48210.into()));
        assert_eq!(count.to_string(), "48210");

        for (json, shown) in [("1500.0", "1500.0"), ("-3", "-3"), ("2.5e3", "2500.0")] {
            let count: ViewCount = serde_json::from_str(json).unwrap();
            assert_eq!(count.to_string(), shown, "{json}");
        }
    }

    #[test]
    fn test_entry_with_odd_view_count_still_decodes() {
        let json = r#"{
            "3dAnimation": [
                {"videoName": "A", "videoLink": "l", "clientName": "c", "clientLink": "cl", "viewCount": 1500.0},
                {"videoName": "B", "videoLink": "l", "clientName": "c", "clientLink": "cl", "viewCount": null},
                {"videoName": "C", "videoLink": "l", "clientName": "c", "clientLink": "cl"}
            ],
            "videoEditing": [
                {"videoName": "D", "videoLink": "l", "clientName": "c", "clientLink": "cl", "viewCount": true}
            ]
        }"#;
        let portfolio: Portfolio = serde_json::from_str(json).unwrap();

        let animation = portfolio.section(PortfolioSection::ThreeDAnimation);
        assert_eq!(animation.len(), 3);
        assert_eq!(animation[0].view_count.to_string(), "1500.0");
        assert_eq!(animation[1].view_count, ViewCount::Missing);
        assert_eq!(animation[2].view_count.to_string(), "");
        let editing = portfolio.section(PortfolioSection::VideoEditing);
        assert_eq!(editing[0].view_count, ViewCount::Flag(true));
    }

    #[test]
    fn test_empty_store() {
        let store = ContentStore::new();
        assert!(!store.is_loaded());
        assert!(ResourceKind::ALL.iter().all(|k| !store.has(*k)));
    }

    #[test]
    fn test_settle_marks_loaded() {
        let store = ContentStore::new().settle(vec![ResourceKind::Contacts]);
        assert!(store.is_loaded());
        assert_eq!(store.failed(), &[ResourceKind::Contacts]);
    }
}
