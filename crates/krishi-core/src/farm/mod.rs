//! Farming context captured by the form.
//!
//! - `model`: closed enumerations and the immutable [`FarmContext`]
//! - `draft`: the form candidate ([`FarmContextDraft`]) and its fields

mod draft;
mod model;

pub use draft::{FarmContextDraft, FieldChoice, FormField};
pub use model::{Climate, FarmContext, LandSizeClass, Region, Season, SoilType, option_names};
