use std::collections::{BTreeMap, BTreeSet};

/// Immutable lookup catalogs for landing-page resolution.
///
/// Built once at startup and injected wherever page paths are classified, so
/// tests can substitute smaller fixture catalogs.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    products: BTreeMap<String, Vec<String>>,
    subdivisions: BTreeSet<String>,
}

impl SiteCatalog {
    pub fn new<P, V, S>(products: P, subdivisions: S) -> Self
    where
        P: IntoIterator<Item = (String, V)>,
        V: IntoIterator<Item = String>,
        S: IntoIterator<Item = String>,
    {
        Self {
            products: products
                .into_iter()
                .map(|(key, variations)| (key, variations.into_iter().collect()))
                .collect(),
            subdivisions: subdivisions.into_iter().collect(),
        }
    }

    pub fn is_product(&self, key: &str) -> bool {
        self.products.contains_key(key)
    }

    pub fn is_subdivision(&self, key: &str) -> bool {
        self.subdivisions.contains(key)
    }

    pub fn is_variation_of(&self, product_key: &str, variation_key: &str) -> bool {
        self.products
            .get(product_key)
            .is_some_and(|variations| variations.iter().any(|v| v == variation_key))
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn subdivision_count(&self) -> usize {
        self.subdivisions.len()
    }

    /// The production catalog: the product line and the US states the company
    /// ships to, keyed by URL slug.
    pub fn builtin() -> Self {
        let products = PRODUCT_CATALOG.iter().map(|(key, variations)| {
            (
                key.to_string(),
                variations.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            )
        });
        let subdivisions = STATE_SLUGS.iter().map(|s| s.to_string());
        Self::new(products, subdivisions)
    }
}

const PRODUCT_CATALOG: &[(&str, &[&str])] = &[
    (
        "container-offices",
        &["single-wide", "double-wide", "ground-level", "climate-controlled"],
    ),
    (
        "mobile-offices",
        &["single-wide", "double-wide", "sales-office", "construction-office"],
    ),
    (
        "modular-classrooms",
        &[
            "single-classroom",
            "classroom-complex",
            "portable-classroom",
            "daycare-classroom",
            "science-lab",
        ],
    ),
    (
        "modular-churches",
        &["sanctuary", "fellowship-hall", "classroom-wing"],
    ),
    (
        "guard-booths",
        &["prefab-steel", "bullet-resistant", "portable"],
    ),
    (
        "modular-restrooms",
        &["single-stall", "multi-stall", "ada-compliant"],
    ),
    (
        "modular-medical-buildings",
        &["exam-clinic", "dental-office", "triage-unit"],
    ),
];

const STATE_SLUGS: &[&str] = &[
    "alabama",
    "alaska",
    "arizona",
    "arkansas",
    "california",
    "colorado",
    "connecticut",
    "delaware",
    "florida",
    "georgia",
    "hawaii",
    "idaho",
    "illinois",
    "indiana",
    "iowa",
    "kansas",
    "kentucky",
    "louisiana",
    "maine",
    "maryland",
    "massachusetts",
    "michigan",
    "minnesota",
    "mississippi",
    "missouri",
    "montana",
    "nebraska",
    "nevada",
    "new-hampshire",
    "new-jersey",
    "new-mexico",
    "new-york",
    "north-carolina",
    "north-dakota",
    "ohio",
    "oklahoma",
    "oregon",
    "pennsylvania",
    "rhode-island",
    "south-carolina",
    "south-dakota",
    "tennessee",
    "texas",
    "utah",
    "vermont",
    "virginia",
    "washington",
    "west-virginia",
    "wisconsin",
    "wyoming",
    "district-of-columbia",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = SiteCatalog::builtin();
        assert!(catalog.is_product("container-offices"));
        assert!(catalog.is_subdivision("texas"));
        assert!(catalog.is_variation_of("container-offices", "single-wide"));
        assert!(!catalog.is_variation_of("container-offices", "sanctuary"));
        assert!(!catalog.is_product("texas"));
        assert_eq!(catalog.subdivision_count(), 51);
    }

    #[test]
    fn test_variation_scoped_to_product() {
        let catalog = SiteCatalog::builtin();
        // "single-wide" exists for two products but only through their own lists
        assert!(catalog.is_variation_of("mobile-offices", "single-wide"));
        assert!(!catalog.is_variation_of("modular-churches", "single-wide"));
    }
}
