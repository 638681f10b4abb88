//! Catalog and snapshot loading.
//!
//! Reads the static catalog from a directory of RON files and player
//! snapshots from JSON. All parsing happens here; `coc_core` only ever
//! sees already-parsed data.
//!
//! # Directory layout
//!
//! ```text
//! assets/data/
//! ├── heroes.ron      [UnitData(...), ...]
//! ├── troops.ron      [UnitData(...), ...]
//! ├── spells.ron      [UnitData(...), ...]
//! ├── buildings.ron   [BuildingData(...), ...]
//! └── town_hall.ron   TownHallData(...)
//! ```

use std::path::Path;

use coc_core::catalog::UnitCatalog;
use coc_core::data::CatalogData;
use coc_core::error::CalcError;
use coc_core::player::PlayerSnapshot;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Hero definitions file name.
pub const HEROES_FILE: &str = "heroes.ron";
/// Troop definitions file name.
pub const TROOPS_FILE: &str = "troops.ron";
/// Spell definitions file name.
pub const SPELLS_FILE: &str = "spells.ron";
/// Building unlock tables file name.
pub const BUILDINGS_FILE: &str = "buildings.ron";
/// Town-Hall tables file name.
pub const TOWN_HALL_FILE: &str = "town_hall.ron";

/// Errors that can occur during data loading.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    Io {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    Parse {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Failed to parse a player snapshot.
    #[error("Failed to parse player snapshot '{path}': {source}")]
    Snapshot {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Catalog data validation failed.
    #[error("Catalog validation failed: {errors:?}")]
    Validation {
        /// List of validation errors.
        errors: Vec<String>,
    },

    /// Catalog could not be built or queried.
    #[error(transparent)]
    Catalog(#[from] CalcError),
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

fn read_file(path: &Path) -> DataLoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load and parse one RON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> DataLoadResult<T> {
    let contents = read_file(path)?;
    ron::from_str(&contents).map_err(|source| DataLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load raw catalog data from a directory.
///
/// Every file of the layout is required.
///
/// # Errors
///
/// Returns an error if any file is missing or fails to parse.
pub fn load_catalog_data(dir: &Path) -> DataLoadResult<CatalogData> {
    let data = CatalogData {
        heroes: read_ron(&dir.join(HEROES_FILE))?,
        troops: read_ron(&dir.join(TROOPS_FILE))?,
        spells: read_ron(&dir.join(SPELLS_FILE))?,
        buildings: read_ron(&dir.join(BUILDINGS_FILE))?,
        town_hall: read_ron(&dir.join(TOWN_HALL_FILE))?,
    };

    tracing::info!(
        "Loaded catalog data from {} with {} units, {} buildings, {} Town Hall tiers",
        dir.display(),
        data.unit_count(),
        data.buildings.len(),
        data.town_hall.lab_levels.len()
    );

    Ok(data)
}

/// Load the catalog, logging validation problems as warnings.
///
/// Units with malformed definitions stay in the catalog and are skipped
/// at calculation time.
///
/// # Errors
///
/// Returns an error if the data cannot be read, parsed, or indexed.
pub fn load_catalog(dir: &Path) -> DataLoadResult<UnitCatalog> {
    let data = load_catalog_data(dir)?;

    for error in data.validate() {
        tracing::warn!("Catalog data problem: {error}");
    }

    Ok(UnitCatalog::from_data(data)?)
}

/// Load the catalog, rejecting any validation problem.
///
/// # Errors
///
/// Returns [`DataLoadError::Validation`] if the data is inconsistent, or
/// any error of [`load_catalog_data`].
pub fn load_catalog_strict(dir: &Path) -> DataLoadResult<UnitCatalog> {
    let data = load_catalog_data(dir)?;

    let errors = data.validate();
    if !errors.is_empty() {
        return Err(DataLoadError::Validation { errors });
    }

    Ok(UnitCatalog::from_data(data)?)
}

/// Load a player snapshot from a JSON file in the game API's format.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_snapshot(path: &Path) -> DataLoadResult<PlayerSnapshot> {
    let contents = read_file(path)?;
    let snapshot: PlayerSnapshot =
        serde_json::from_str(&contents).map_err(|source| DataLoadError::Snapshot {
            path: path.display().to_string(),
            source,
        })?;

    tracing::debug!(
        player = %snapshot.name,
        tag = %snapshot.tag,
        town_hall = snapshot.town_hall_level,
        "loaded player snapshot"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coc_core::data::Category;
    use coc_test_utils::fixtures::sample_catalog_data;

    fn write_catalog_data(dir: &Path, data: &CatalogData) {
        let config = ron::ser::PrettyConfig::default();
        let files = [
            (HEROES_FILE, ron::ser::to_string_pretty(&data.heroes, config.clone())),
            (TROOPS_FILE, ron::ser::to_string_pretty(&data.troops, config.clone())),
            (SPELLS_FILE, ron::ser::to_string_pretty(&data.spells, config.clone())),
            (BUILDINGS_FILE, ron::ser::to_string_pretty(&data.buildings, config.clone())),
            (TOWN_HALL_FILE, ron::ser::to_string_pretty(&data.town_hall, config)),
        ];
        for (name, contents) in files {
            std::fs::write(dir.join(name), contents.unwrap()).unwrap();
        }
    }

    #[test]
    fn test_catalog_directory_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let data = sample_catalog_data();
        write_catalog_data(dir.path(), &data);

        let loaded = load_catalog_data(dir.path()).unwrap();
        assert_eq!(loaded, data);

        let catalog = load_catalog_strict(dir.path()).unwrap();
        assert_eq!(
            catalog.display_order(Category::Hero),
            ["Barbarian King", "Archer Queen", "Grand Warden"]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog_data(dir.path());
        assert!(matches!(result, Err(DataLoadError::Io { path, .. }) if path.ends_with(HEROES_FILE)));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog_data(dir.path(), &sample_catalog_data());
        std::fs::write(dir.path().join(TROOPS_FILE), "[UnitData(name: )]").unwrap();

        let result = load_catalog_data(dir.path());
        assert!(matches!(result, Err(DataLoadError::Parse { path, .. }) if path.ends_with(TROOPS_FILE)));
    }

    #[test]
    fn test_strict_load_rejects_inconsistent_data() {
        let dir = tempfile::tempdir().unwrap();
        let mut data = sample_catalog_data();
        data.spells[0].unlock_building = Some("Spell Tower".to_string());
        write_catalog_data(dir.path(), &data);

        assert!(matches!(
            load_catalog_strict(dir.path()),
            Err(DataLoadError::Validation { errors }) if errors.len() == 1
        ));
        // The lenient loader only warns.
        assert!(load_catalog(dir.path()).is_ok());
    }

    #[test]
    fn test_load_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.json");
        std::fs::write(
            &path,
            r##"{"name": "Chief", "tag": "#2PP", "townHallLevel": 9, "heroes": [{"name": "Archer Queen", "level": 3, "village": "home"}]}"##,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.town_hall_level, 9);
        assert_eq!(snapshot.heroes.len(), 1);

        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(load_snapshot(&path), Err(DataLoadError::Snapshot { .. })));
    }
}
