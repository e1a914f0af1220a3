use crate::theme::{Theme, ThemeCatalog};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] crate::theme::CatalogError),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

pub fn save_catalog_to_file(catalog: &ThemeCatalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.themes())?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a catalog from disk. Re-validates through [`ThemeCatalog::new`], so a
/// file with duplicate or missing theme names fails to load.
pub fn load_catalog_from_file(path: &Path) -> Result<ThemeCatalog> {
    let json = std::fs::read_to_string(path)?;
    let themes: Vec<Theme> = serde_json::from_str(&json)?;
    Ok(ThemeCatalog::new(themes)?)
}
