//! Crawl metadata: map page kinds to a fixed (changefreq, priority) taxonomy.

use crate::topology::PageKind;
use serde::Serialize;

/// Sitemap-protocol change frequency values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// How a page should be advertised to crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrawlDirective {
    pub change_frequency: ChangeFrequency,
    /// Crawl priority in [0.0, 1.0], rendered to one decimal place.
    pub priority: f32,
}

/// Look up the crawl directive for a page kind.
///
/// Pure table lookup; the ranking taxonomy lives entirely here so the URL
/// space builder never has to know about it. City homes outrank everything
/// but the global home; free-text and long-tail content sits at 0.6.
pub fn crawl_directive(kind: PageKind) -> CrawlDirective {
    let (change_frequency, priority) = match kind {
        PageKind::GlobalHome => (ChangeFrequency::Weekly, 1.0),
        PageKind::CityHome => (ChangeFrequency::Weekly, 0.9),
        PageKind::Occasion => (ChangeFrequency::Weekly, 0.8),
        PageKind::ProductType => (ChangeFrequency::Weekly, 0.7),
        PageKind::Seasonal => (ChangeFrequency::Weekly, 0.7),
        PageKind::UtilityPage => (ChangeFrequency::Monthly, 0.5),
        PageKind::GuidesHub => (ChangeFrequency::Weekly, 0.7),
        PageKind::Guide => (ChangeFrequency::Monthly, 0.6),
        PageKind::FuneralType => (ChangeFrequency::Weekly, 0.7),
        PageKind::BlogHub => (ChangeFrequency::Weekly, 0.7),
        PageKind::BlogPost => (ChangeFrequency::Monthly, 0.6),
        PageKind::Hospital => (ChangeFrequency::Monthly, 0.6),
        PageKind::Neighborhood => (ChangeFrequency::Monthly, 0.6),
    };
    CrawlDirective {
        change_frequency,
        priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [PageKind; 13] = [
        PageKind::GlobalHome,
        PageKind::CityHome,
        PageKind::Occasion,
        PageKind::ProductType,
        PageKind::Seasonal,
        PageKind::UtilityPage,
        PageKind::GuidesHub,
        PageKind::Guide,
        PageKind::FuneralType,
        PageKind::BlogHub,
        PageKind::BlogPost,
        PageKind::Hospital,
        PageKind::Neighborhood,
    ];

    #[test]
    fn test_priorities_in_range() {
        for kind in ALL_KINDS {
            let d = crawl_directive(kind);
            assert!((0.0..=1.0).contains(&d.priority), "{kind:?}");
        }
    }

    #[test]
    fn test_home_pages_rank_highest() {
        assert_eq!(crawl_directive(PageKind::GlobalHome).priority, 1.0);
        assert_eq!(crawl_directive(PageKind::CityHome).priority, 0.9);
        for kind in ALL_KINDS {
            if kind != PageKind::GlobalHome && kind != PageKind::CityHome {
                assert!(crawl_directive(kind).priority <= 0.8, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_utility_pages_refresh_monthly() {
        let d = crawl_directive(PageKind::UtilityPage);
        assert_eq!(d.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(d.priority, 0.5);
    }

    #[test]
    fn test_changefreq_serializes_lowercase() {
        assert_eq!(ChangeFrequency::Weekly.as_str(), "weekly");
        assert_eq!(
            serde_json::to_string(&ChangeFrequency::Monthly).unwrap(),
            "\"monthly\""
        );
    }
}
