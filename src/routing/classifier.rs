use crate::routing::catalog::SiteCatalog;
use serde::Serialize;
use utoipa::ToSchema;

/// The semantic page addressed by a two-segment landing-page path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageKind {
    ProductState { product: String, state: String },
    ProductVariation { product: String, variation: String },
    StateCity { state: String, city: String },
    Unresolved,
}

/// Classifies a `/{outer}/{inner}` path against the catalog. First match wins:
///
/// 1. product + state — the highest-traffic category, checked first
/// 2. product + one of that product's variations
/// 3. state + city — the city set is open-ended, so `inner` is accepted
///    unconditionally; this branch must stay last or it would shadow the
///    two discriminating checks above
/// 4. `Unresolved` — a normal outcome, the caller renders not-found
pub fn classify(catalog: &SiteCatalog, outer: &str, inner: &str) -> PageKind {
    if catalog.is_product(outer) {
        if catalog.is_subdivision(inner) {
            return PageKind::ProductState {
                product: outer.to_string(),
                state: inner.to_string(),
            };
        }
        if catalog.is_variation_of(outer, inner) {
            return PageKind::ProductVariation {
                product: outer.to_string(),
                variation: inner.to_string(),
            };
        }
    }

    if catalog.is_subdivision(outer) {
        return PageKind::StateCity {
            state: outer.to_string(),
            city: inner.to_string(),
        };
    }

    PageKind::Unresolved
}
