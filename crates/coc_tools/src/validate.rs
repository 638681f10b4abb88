//! Data validation utilities.

use std::path::Path;

use coc_core::catalog::UnitCatalog;
use coc_core::data::Category;

use crate::loader::{load_catalog_data, DataLoadError, DataLoadResult};

/// Validate all RON data files in a directory.
///
/// Beyond the cross-reference checks of
/// [`CatalogData::validate`](coc_core::data::CatalogData::validate), every
/// unit is resolved at every known Town-Hall tier, so a catalog that
/// passes here never fails a progress calculation.
///
/// # Errors
///
/// Returns [`DataLoadError::Validation`] listing every problem found, or a
/// load error if the files cannot be read.
pub fn validate_data_directory(path: &Path) -> DataLoadResult<()> {
    let data = load_catalog_data(path)?;

    let mut errors = data.validate();
    if !errors.is_empty() {
        return Err(DataLoadError::Validation { errors });
    }

    let catalog = UnitCatalog::from_data(data)?;
    let town_halls: Vec<u32> = catalog.known_town_halls().collect();

    for category in Category::ALL {
        for name in catalog.display_order(category) {
            let Some(definition) = catalog.get(category, name) else {
                continue;
            };
            for &town_hall in &town_halls {
                if let Err(e) = definition.max_level_at_tier(&catalog, town_hall) {
                    errors.push(format!("{name} at Town Hall {town_hall}: {e}"));
                }
            }
        }
    }

    if errors.is_empty() {
        tracing::info!(
            "Validated {} Town Hall tiers in {}",
            town_halls.len(),
            path.display()
        );
        Ok(())
    } else {
        Err(DataLoadError::Validation { errors })
    }
}
