//! Catalog registry: the static configuration every build reads.
//!
//! All source data lives here — cities, the fixed content dimensions, and the
//! per-city free-text hospital/neighborhood lists. The registry validates the
//! configuration once at construction and is immutable afterwards; every
//! downstream structure is a derived projection recomputed on each build.

use crate::error::TopologyError;
use crate::slug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One city the storefront serves.
///
/// `state_slug` and `city_slug` are supplied pre-normalized by the catalog;
/// the hospital and neighborhood lists are arbitrary human-entered display
/// names and get slugged during expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEntry {
    pub state_slug: String,
    pub city_slug: String,
    pub city_name: String,
    #[serde(default)]
    pub hospitals: Vec<String>,
    #[serde(default)]
    pub neighborhoods: Vec<String>,
}

impl CityEntry {
    /// Base path for every page under this city, without trailing slash.
    pub fn base_path(&self) -> String {
        format!("/{}/{}", self.state_slug, self.city_slug)
    }
}

/// An item in one of the fixed content dimensions (occasions, product types,
/// seasonal collections, guides, funeral types, blog posts). Slugs are
/// pre-assigned in configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub slug: String,
    pub name: String,
}

/// The raw catalog file as deserialized from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    pub cities: Vec<CityEntry>,
    pub occasions: Vec<CatalogItem>,
    pub product_types: Vec<CatalogItem>,
    pub seasonal: Vec<CatalogItem>,
    pub guides: Vec<CatalogItem>,
    pub funeral_types: Vec<CatalogItem>,
    pub blog_posts: Vec<CatalogItem>,
}

/// Validated, read-only view over the catalog.
///
/// Both the URL space builder and the static route enumerator take the same
/// `Registry` value, which is what guarantees the sitemap and the pre-render
/// set can never disagree about which cities exist.
#[derive(Debug, Clone)]
pub struct Registry {
    config: CatalogConfig,
}

impl Registry {
    /// Validate a catalog configuration and wrap it in a registry.
    ///
    /// Fails fast on any integrity defect: a city with empty identity slugs,
    /// a duplicate `(state, city)` pair, a duplicate or non-normalized slug
    /// within a fixed dimension, or a free-text name with no alphanumeric
    /// characters (which could never become a path segment).
    pub fn from_config(config: CatalogConfig) -> Result<Self, TopologyError> {
        let mut city_keys = HashSet::new();
        for city in &config.cities {
            if city.state_slug.is_empty() || city.city_slug.is_empty() {
                return Err(TopologyError::ConfigIntegrity(format!(
                    "city {:?} is missing state or city slug",
                    city.city_name
                )));
            }
            if !city_keys.insert((city.state_slug.clone(), city.city_slug.clone())) {
                return Err(TopologyError::ConfigIntegrity(format!(
                    "duplicate city {}/{}",
                    city.state_slug, city.city_slug
                )));
            }
            for (list, label) in [(&city.hospitals, "hospitals"), (&city.neighborhoods, "neighborhoods")] {
                for name in list.iter() {
                    if slug::normalize(name).is_empty() {
                        return Err(TopologyError::EmptyNormalization {
                            name: name.clone(),
                            scope: format!("{label} of {}/{}", city.state_slug, city.city_slug),
                        });
                    }
                }
            }
        }

        for (items, dimension) in [
            (&config.occasions, "occasions"),
            (&config.product_types, "product_types"),
            (&config.seasonal, "seasonal"),
            (&config.guides, "guides"),
            (&config.funeral_types, "funeral_types"),
            (&config.blog_posts, "blog_posts"),
        ] {
            check_dimension(items, dimension)?;
        }

        Ok(Self { config })
    }

    pub fn cities(&self) -> &[CityEntry] {
        &self.config.cities
    }

    pub fn occasions(&self) -> &[CatalogItem] {
        &self.config.occasions
    }

    pub fn product_types(&self) -> &[CatalogItem] {
        &self.config.product_types
    }

    pub fn seasonal(&self) -> &[CatalogItem] {
        &self.config.seasonal
    }

    pub fn guides(&self) -> &[CatalogItem] {
        &self.config.guides
    }

    pub fn funeral_types(&self) -> &[CatalogItem] {
        &self.config.funeral_types
    }

    pub fn blog_posts(&self) -> &[CatalogItem] {
        &self.config.blog_posts
    }

    /// Hospital display names for a city. Free text, not yet slugged.
    pub fn hospitals_of<'a>(&self, city: &'a CityEntry) -> &'a [String] {
        &city.hospitals
    }

    /// Neighborhood display names for a city. Free text, not yet slugged.
    pub fn neighborhoods_of<'a>(&self, city: &'a CityEntry) -> &'a [String] {
        &city.neighborhoods
    }
}

/// A fixed dimension must have unique, already-normalized, non-empty slugs.
fn check_dimension(items: &[CatalogItem], dimension: &str) -> Result<(), TopologyError> {
    let mut seen = HashSet::new();
    for item in items {
        if item.slug.is_empty() || slug::normalize(&item.slug) != item.slug {
            return Err(TopologyError::ConfigIntegrity(format!(
                "{dimension}: slug {:?} is not a normalized path segment",
                item.slug
            )));
        }
        if !seen.insert(item.slug.as_str()) {
            return Err(TopologyError::ConfigIntegrity(format!(
                "{dimension}: duplicate slug {:?}",
                item.slug
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;

    pub fn item(slug: &str) -> CatalogItem {
        CatalogItem {
            slug: slug.to_string(),
            name: slug.replace('-', " "),
        }
    }

    pub fn items(slugs: &[&str]) -> Vec<CatalogItem> {
        slugs.iter().map(|s| item(s)).collect()
    }

    pub fn city(state: &str, city: &str, hospitals: &[&str], neighborhoods: &[&str]) -> CityEntry {
        CityEntry {
            state_slug: state.to_string(),
            city_slug: city.to_string(),
            city_name: city.replace('-', " "),
            hospitals: hospitals.iter().map(|s| s.to_string()).collect(),
            neighborhoods: neighborhoods.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A small but fully populated catalog used across the unit tests.
    pub fn sample_config() -> CatalogConfig {
        CatalogConfig {
            cities: vec![
                city(
                    "ca",
                    "san-francisco",
                    &["St. Mary's Hospital", "UCSF Medical Center"],
                    &["Mission District", "Nob Hill", "Sunset"],
                ),
                city("or", "portland", &["Providence Park Medical"], &["Pearl District"]),
            ],
            occasions: items(&["birthday", "anniversary", "sympathy"]),
            product_types: items(&["roses", "lilies"]),
            seasonal: items(&["spring", "winter-holidays"]),
            guides: items(&["flower-care", "wedding-planning"]),
            funeral_types: items(&["casket-sprays", "standing-sprays"]),
            blog_posts: items(&["how-to-dry-roses", "meaning-of-lilies", "best-birthday-flowers"]),
        }
    }
}
