//! Built-in seed catalog, embedded in the binary.

use once_cell::sync::Lazy;

use super::CatalogFile;

static SEED_CATALOG: Lazy<CatalogFile> = Lazy::new(|| {
    CatalogFile::parse_yaml(include_str!("seed_catalog.yaml"))
        .unwrap_or_else(|e| panic!("Embedded seed catalog is invalid: {}", e))
});

/// The built-in catalog: five opportunities and one judgment.
pub fn seed_catalog() -> &'static CatalogFile {
    &SEED_CATALOG
}
