//! Error types for the progression calculator.

use thiserror::Error;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Top-level error type for catalog lookups and progression calculations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Catalog backing data is missing or malformed.
    #[error("Failed to load catalog data: {0}")]
    CatalogLoad(String),

    /// Building is not present in the tier-gate table.
    #[error("Unknown building: {0}")]
    UnknownBuilding(String),

    /// Town-Hall tier is outside the known Town-Hall to Laboratory map.
    #[error("Unknown Town Hall tier: {0}")]
    UnknownTier(u32),

    /// A unit definition cannot be used for tier resolution.
    #[error("Malformed definition for unit '{unit}': {reason}")]
    MalformedDefinition {
        /// Name of the offending unit.
        unit: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A computed record has no slot in the caller's display order.
    #[error("Unit '{0}' is not part of the display order")]
    UnknownUnitInOrder(String),
}

impl CalcError {
    /// Whether this error only concerns a single unit definition.
    ///
    /// Such errors are recovered from during aggregation by skipping the
    /// unit; everything else is a catalog/version mismatch and propagates.
    #[must_use]
    pub const fn is_unit_local(&self) -> bool {
        matches!(self, Self::MalformedDefinition { .. })
    }
}
