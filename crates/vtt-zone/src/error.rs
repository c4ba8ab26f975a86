//! Error types for the zone crate

use thiserror::Error;

use crate::zone::ZoneId;

/// Zone-related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// Zone not found in registry
    #[error("Zone not found: {0}")]
    ZoneNotFound(ZoneId),

    /// Removing the active zone would leave the session without a focus
    #[error("Cannot remove the active zone: {0}")]
    ActiveZoneRemoval(ZoneId),
}

/// Result type for zone operations
pub type ZoneResult<T> = Result<T, ZoneError>;
