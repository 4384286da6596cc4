//! BloomLocal site topology generator.
//!
//! Derives the complete addressable URL space of the storefront from static
//! catalog configuration: cities cross-joined with occasions, product types,
//! seasonal collections, guides, blog posts, funeral pages, and per-city
//! hospital/neighborhood pages. The same descriptor set feeds both the
//! search-engine sitemap and the static route parameters the rendering layer
//! pre-builds, so the two can never diverge.
//!
//! Everything here runs at build time over in-memory data. The pipeline is a
//! deterministic fold that either completes or fails fast — a partial sitemap
//! is worse than none, so no error is recoverable.

pub mod catalog;
pub mod error;
pub mod sitemap;
pub mod slug;
pub mod topology;

pub use catalog::Registry;
pub use error::TopologyError;
pub use sitemap::Sitemap;
pub use topology::{PageDescriptor, PageKind};
