//! Sitemap assembly: descriptors + crawl metadata → the final document.

pub mod xml;

use crate::error::TopologyError;
use crate::topology::{crawl_directive, ChangeFrequency, PageDescriptor, PageKind};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::info;

/// One record in the sitemap: a page plus its crawl metadata.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub descriptor: PageDescriptor,
    /// Build timestamp, applied uniformly — the catalogs carry no per-item
    /// revision dates.
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// The assembled sitemap document.
#[derive(Debug, Clone)]
pub struct Sitemap {
    /// Site origin, no trailing slash, e.g. `https://bloomlocal.com`.
    pub base_url: String,
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Absolute URL for an entry.
    pub fn loc(&self, entry: &SitemapEntry) -> String {
        format!("{}{}", self.base_url, entry.descriptor.path)
    }
}

/// Assemble the sitemap: one global-home entry, then every descriptor in
/// builder order, each stamped with its crawl directive.
///
/// This is the end-to-end guard on path uniqueness: any duplicate path in
/// the set — however it was produced — fails the build rather than letting
/// one entry silently overwrite another.
pub fn assemble(
    base_url: &str,
    descriptors: Vec<PageDescriptor>,
    generated_at: DateTime<Utc>,
) -> Result<Sitemap, TopologyError> {
    let base_url = base_url.trim_end_matches('/').to_string();

    let mut entries = Vec::with_capacity(descriptors.len() + 1);
    entries.push(make_entry(
        PageDescriptor {
            path: "/".to_string(),
            kind: PageKind::GlobalHome,
            city: None,
        },
        generated_at,
    ));
    for descriptor in descriptors {
        entries.push(make_entry(descriptor, generated_at));
    }

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        let path = entry.descriptor.path.as_str();
        if !seen.insert(path) {
            return Err(TopologyError::SlugCollision {
                path: path.to_string(),
                detail: "duplicate path in assembled sitemap".to_string(),
            });
        }
    }

    info!(entries = entries.len(), %base_url, "assembled sitemap");

    Ok(Sitemap { base_url, entries })
}

fn make_entry(descriptor: PageDescriptor, generated_at: DateTime<Utc>) -> SitemapEntry {
    let directive = crawl_directive(descriptor.kind);
    SitemapEntry {
        descriptor,
        last_modified: generated_at,
        change_frequency: directive.change_frequency,
        priority: directive.priority,
    }
}
