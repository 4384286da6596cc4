//! Combinatorial expansion of the catalog into the full URL space.
//!
//! For each city the builder crosses every content dimension in a fixed
//! order, so two builds over the same catalog produce byte-identical output
//! (stable sitemap diffs). Ranking policy lives in `metadata`; this module
//! only decides *which* pages exist.

use crate::catalog::{CityEntry, Registry};
use crate::error::TopologyError;
use crate::slug;
use crate::topology::{PageDescriptor, PageKind};
use std::collections::HashMap;
use tracing::info;

/// The fixed city-scoped utility pages every city gets.
pub const UTILITY_PAGES: [&str; 5] = ["faq", "contact", "delivery", "privacy", "terms"];

/// Expand the registry into the complete ordered descriptor set.
///
/// Emission order per city: city home, occasions, product types, seasonal,
/// utility pages, guides hub + guides, funeral types, blog hub + blog posts,
/// hospitals, neighborhoods. Blog and guide slugs are global and cross-joined
/// with every city.
///
/// Free-text hospital/neighborhood names are slugged here; two names in the
/// same city normalizing to the same segment abort the build.
pub fn build_descriptors(registry: &Registry) -> Result<Vec<PageDescriptor>, TopologyError> {
    let mut descriptors = Vec::new();

    for city in registry.cities() {
        expand_city(registry, city, &mut descriptors)?;
    }

    info!(
        cities = registry.cities().len(),
        descriptors = descriptors.len(),
        "expanded url space"
    );

    Ok(descriptors)
}

fn expand_city(
    registry: &Registry,
    city: &CityEntry,
    out: &mut Vec<PageDescriptor>,
) -> Result<(), TopologyError> {
    let base = city.base_path();

    out.push(PageDescriptor::city_page(
        format!("{base}/"),
        PageKind::CityHome,
        city,
    ));

    for occasion in registry.occasions() {
        out.push(PageDescriptor::city_page(
            format!("{base}/flowers/{}/", occasion.slug),
            PageKind::Occasion,
            city,
        ));
    }

    for product in registry.product_types() {
        out.push(PageDescriptor::city_page(
            format!("{base}/shop/{}/", product.slug),
            PageKind::ProductType,
            city,
        ));
    }

    for collection in registry.seasonal() {
        out.push(PageDescriptor::city_page(
            format!("{base}/seasonal/{}/", collection.slug),
            PageKind::Seasonal,
            city,
        ));
    }

    for page in UTILITY_PAGES {
        out.push(PageDescriptor::city_page(
            format!("{base}/{page}/"),
            PageKind::UtilityPage,
            city,
        ));
    }

    out.push(PageDescriptor::city_page(
        format!("{base}/guides/"),
        PageKind::GuidesHub,
        city,
    ));
    for guide in registry.guides() {
        out.push(PageDescriptor::city_page(
            format!("{base}/guides/{}/", guide.slug),
            PageKind::Guide,
            city,
        ));
    }

    for funeral in registry.funeral_types() {
        out.push(PageDescriptor::city_page(
            format!("{base}/funeral/{}/", funeral.slug),
            PageKind::FuneralType,
            city,
        ));
    }

    out.push(PageDescriptor::city_page(
        format!("{base}/blog/"),
        PageKind::BlogHub,
        city,
    ));
    for post in registry.blog_posts() {
        out.push(PageDescriptor::city_page(
            format!("{base}/blog/{}/", post.slug),
            PageKind::BlogPost,
            city,
        ));
    }

    expand_free_text(
        registry.hospitals_of(city),
        city,
        &base,
        "hospital",
        PageKind::Hospital,
        out,
    )?;
    expand_free_text(
        registry.neighborhoods_of(city),
        city,
        &base,
        "neighborhood",
        PageKind::Neighborhood,
        out,
    )?;

    Ok(())
}

/// Slug a list of display names under `{base}/{section}/`, aborting on a
/// name that normalizes to nothing or collides with an earlier name in the
/// same city.
fn expand_free_text(
    names: &[String],
    city: &CityEntry,
    base: &str,
    section: &str,
    kind: PageKind,
    out: &mut Vec<PageDescriptor>,
) -> Result<(), TopologyError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for name in names {
        let segment = slug::normalize(name);
        if segment.is_empty() {
            return Err(TopologyError::EmptyNormalization {
                name: name.clone(),
                scope: format!("{section}s of {}/{}", city.state_slug, city.city_slug),
            });
        }
        if let Some(earlier) = seen.insert(segment.clone(), name.as_str()) {
            return Err(TopologyError::SlugCollision {
                path: format!("{base}/{section}/{segment}/"),
                detail: format!("{earlier:?} vs {name:?}"),
            });
        }
        out.push(PageDescriptor::city_page(
            format!("{base}/{section}/{segment}/"),
            kind,
            city,
        ));
    }

    Ok(())
}
