//! Read-only product catalog and the parameter resolver built on it.
//!
//! Every lookup is total: unknown ids resolve to a documented default so the
//! configurator always has something to draw.

pub mod errors;
pub mod load;
pub mod normalize;
pub mod resolve;
pub mod tables;

pub use errors::CatalogError;
pub use load::{load_catalog, save_catalog, FORMAT_VERSION};
pub use normalize::{normalize, ResolvedConfiguration, ResolvedGlazing, ResolvedProduct, ResolvedProfile};
pub use tables::{Catalog, ColorEntry, GlazingEntry, ProfileEntry};
