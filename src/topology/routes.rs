//! Static route parameters for the page-rendering layer.
//!
//! The rendering layer pre-builds one template instance per `(state, city)`
//! pair. These come from the same `Registry` value the URL space builder
//! reads, which is what keeps the pre-render set and the sitemap in lockstep
//! by construction — there is no second city list to drift.

use crate::catalog::Registry;
use serde::Serialize;

/// Route parameters for one city-scoped page template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CityParams {
    pub state: String,
    pub city: String,
}

/// One `{state, city}` pair per city in the registry, in catalog order.
///
/// Content-specific sub-params (occasion slugs, product slugs, ...) are not
/// enumerated here; templates read those straight off the same registry
/// accessors. Dynamically parameterized routes (product SKUs, search) are
/// deliberately excluded from static enumeration.
pub fn enumerate_city_params(registry: &Registry) -> Vec<CityParams> {
    registry
        .cities()
        .iter()
        .map(|city| CityParams {
            state: city.state_slug.clone(),
            city: city.city_slug.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::sample_config;
    use crate::catalog::Registry;
    use crate::topology::{build_descriptors, PageKind};
    use std::collections::HashSet;

    #[test]
    fn test_one_param_per_city() {
        let registry = Registry::from_config(sample_config()).unwrap();
        let params = enumerate_city_params(&registry);
        assert_eq!(params.len(), registry.cities().len());
        assert_eq!(params[0].state, "ca");
        assert_eq!(params[0].city, "san-francisco");
    }

    #[test]
    fn test_bijective_with_city_home_descriptors() {
        let registry = Registry::from_config(sample_config()).unwrap();
        let params: HashSet<(String, String)> = enumerate_city_params(&registry)
            .into_iter()
            .map(|p| (p.state, p.city))
            .collect();
        let homes: HashSet<(String, String)> = build_descriptors(&registry)
            .unwrap()
            .into_iter()
            .filter(|d| d.kind == PageKind::CityHome)
            .map(|d| {
                let city = d.city.unwrap();
                (city.state_slug, city.city_slug)
            })
            .collect();
        assert_eq!(params, homes);
    }

    #[test]
    fn test_serializes_for_routes_json() {
        let registry = Registry::from_config(sample_config()).unwrap();
        let json = serde_json::to_value(enumerate_city_params(&registry)).unwrap();
        assert_eq!(json[0]["state"], "ca");
        assert_eq!(json[0]["city"], "san-francisco");
    }
}
