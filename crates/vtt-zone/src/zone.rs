//! Zone entity types
//!
//! A [`Zone`] is one map in the loaded campaign: it has a registry-assigned
//! identity, a player-facing display name, and a visibility flag that
//! controls whether non-privileged participants can see it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a zone, unique within its registry
///
/// Ids are allocated by [`ZoneRegistry`](crate::ZoneRegistry) and stay
/// stable across renames, which is what session peers key their state on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneId(u32);

impl ZoneId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        ZoneId(raw)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named map entity shared by all session participants
///
/// Zones live in the [`ZoneRegistry`](crate::ZoneRegistry) for their whole
/// lifetime; only `name` and `visible` are mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    id: ZoneId,
    name: String,
    visible: bool,
}

impl Zone {
    /// Create a new visible zone. Only the registry allocates ids.
    pub(crate) fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visible: true,
        }
    }

    /// Get the zone id
    pub fn id(&self) -> ZoneId {
        self.id
    }

    /// Get the display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name
    ///
    /// Names are not required to be unique across the registry.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Check whether the zone is visible to non-privileged participants
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the visibility flag
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
