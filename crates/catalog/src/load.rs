use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::CatalogError;
use crate::tables::{Catalog, ColorEntry, GlazingEntry, ProfileEntry};

/// Current catalog file format version.
pub const FORMAT_VERSION: u32 = 1;

const FORMAT_NAME: &str = "sash-catalog";

/// On-disk catalog layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub format: String,
    pub version: u32,
    pub profiles: Vec<ProfileEntry>,
    pub glazings: Vec<GlazingEntry>,
    pub colors: Vec<ColorEntry>,
}

/// Deserialize a catalog from JSON.
///
/// Validates the format identifier, the version and id uniqueness per table.
pub fn load_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let raw: CatalogFile =
        serde_json::from_str(json).map_err(|e| CatalogError::ParseError(e.to_string()))?;

    if raw.format != FORMAT_NAME {
        return Err(CatalogError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(CatalogError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    check_unique("profile", raw.profiles.iter().map(|p| p.id.as_str()))?;
    check_unique("glazing", raw.glazings.iter().map(|g| g.id.as_str()))?;
    check_unique("color", raw.colors.iter().map(|c| c.id.as_str()))?;

    info!(
        profiles = raw.profiles.len(),
        glazings = raw.glazings.len(),
        colors = raw.colors.len(),
        "catalog loaded"
    );

    Ok(Catalog {
        profiles: raw.profiles,
        glazings: raw.glazings,
        colors: raw.colors,
    })
}

/// Serialize a catalog to pretty-printed JSON.
pub fn save_catalog(catalog: &Catalog) -> String {
    let file = CatalogFile {
        format: FORMAT_NAME.to_string(),
        version: FORMAT_VERSION,
        profiles: catalog.profiles.clone(),
        glazings: catalog.glazings.clone(),
        colors: catalog.colors.clone(),
    };
    serde_json::to_string_pretty(&file).expect("Catalog serialization should never fail")
}

fn check_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
