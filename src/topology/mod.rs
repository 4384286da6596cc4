//! Logical page descriptors and the operations that derive them.

pub mod builder;
pub mod metadata;
pub mod routes;

pub use builder::build_descriptors;
pub use metadata::{crawl_directive, ChangeFrequency, CrawlDirective};
pub use routes::{enumerate_city_params, CityParams};

use serde::Serialize;

/// The closed set of page kinds the storefront generates.
///
/// Hub pages (`GuidesHub`, `BlogHub`) are distinct kinds so the crawl
/// metadata table can rank them separately from their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PageKind {
    GlobalHome,
    CityHome,
    Occasion,
    ProductType,
    Seasonal,
    UtilityPage,
    GuidesHub,
    Guide,
    FuneralType,
    BlogHub,
    BlogPost,
    Hospital,
    Neighborhood,
}

/// Identity of the city a descriptor belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityRef {
    pub state_slug: String,
    pub city_slug: String,
}

/// One logical page: the unit flowing from the URL space builder to both the
/// sitemap assembler and the static route enumerator.
///
/// `path` is the fully composed absolute route with trailing slash, e.g.
/// `/ca/san-francisco/hospital/st-marys-hospital/`. Paths are unique across
/// the whole generated set; a collision is a data defect, never silently
/// dropped.
#[derive(Debug, Clone, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub kind: PageKind,
    /// `None` only for the global home entry the assembler prepends.
    pub city: Option<CityRef>,
}

impl PageDescriptor {
    pub(crate) fn city_page(path: String, kind: PageKind, city: &crate::catalog::CityEntry) -> Self {
        Self {
            path,
            kind,
            city: Some(CityRef {
                state_slug: city.state_slug.clone(),
                city_slug: city.city_slug.clone(),
            }),
        }
    }
}
