//! Resource operations: every listing and mutation the console performs.
//!
//! Each function takes the backend by reference and a region. Listings keyed
//! by an empty region resolve to an empty collection without touching the
//! backend.

mod models;
mod profiles;
mod regions;
mod tags;

pub use models::{list_foundation_models, list_model_sources};
pub use profiles::{create_profile, delete_profile, list_profiles, CreateOutcome, DeleteOutcome};
pub use regions::list_regions;
pub use tags::list_tags;

/// True when `region` cannot address a regional endpoint.
pub(crate) fn is_unset(region: &str) -> bool {
    region.trim().is_empty()
}
