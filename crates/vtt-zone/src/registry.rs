//! Zone registry with explicit iteration order and an active designator
//!
//! The registry owns every loaded [`Zone`] and maintains the order zones
//! were loaded in. That order is a contract: name resolution and name
//! enumeration both walk it front to back, so duplicate names always
//! resolve to the earliest-loaded zone.

use ahash::AHashMap;

use crate::error::{ZoneError, ZoneResult};
use crate::zone::{Zone, ZoneId};

/// Ordered collection of loaded zones plus the session's active zone
///
/// A registry is never empty: it is constructed with its first zone, the
/// active designator always names an existing zone, and the active zone
/// cannot be removed.
pub struct ZoneRegistry {
    /// Zones stored by id
    zones: AHashMap<ZoneId, Zone>,
    /// Load order, used for resolution and enumeration
    order: Vec<ZoneId>,
    /// The zone currently designated as the session's focus
    active: ZoneId,
    /// Counter for allocating ids
    next_id: u32,
}

impl ZoneRegistry {
    /// Create a registry containing one zone, which becomes active
    pub fn new(first_zone: impl Into<String>) -> Self {
        let id = ZoneId::from_raw(1);
        let mut zones = AHashMap::new();
        zones.insert(id, Zone::new(id, first_zone));
        Self {
            zones,
            order: vec![id],
            active: id,
            next_id: 2,
        }
    }

    /// Get the number of zones
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Add a zone at the end of the load order, returning its id
    pub fn add(&mut self, name: impl Into<String>) -> ZoneId {
        let id = ZoneId::from_raw(self.next_id);
        self.next_id += 1;
        self.zones.insert(id, Zone::new(id, name));
        self.order.push(id);
        id
    }

    /// Remove a zone by id
    ///
    /// Refuses to remove the active zone, so the active designator can
    /// never dangle.
    pub fn remove(&mut self, id: ZoneId) -> ZoneResult<Zone> {
        if id == self.active {
            return Err(ZoneError::ActiveZoneRemoval(id));
        }
        let zone = self.zones.remove(&id).ok_or(ZoneError::ZoneNotFound(id))?;
        self.order.retain(|z| *z != id);
        Ok(zone)
    }

    /// Check if a zone exists
    pub fn contains(&self, id: ZoneId) -> bool {
        self.zones.contains_key(&id)
    }

    /// Get a zone by id
    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    /// Get mutable access to a zone by id
    pub fn get_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.get_mut(&id)
    }

    /// Iterate over all zones in load order
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.order.iter().filter_map(|id| self.zones.get(id))
    }

    /// Iterate over all zone names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|zone| zone.name())
    }

    /// Find a zone by display name
    ///
    /// Names are not unique; this returns the first exact (case-sensitive)
    /// match in load order.
    pub fn find_by_name(&self, name: &str) -> Option<&Zone> {
        self.iter().find(|zone| zone.name() == name)
    }

    /// Get the active zone's id
    pub fn active(&self) -> ZoneId {
        self.active
    }

    /// Get the active zone
    pub fn active_zone(&self) -> &Zone {
        // The constructor and `remove` keep `active` pointing at a live zone.
        self.zones
            .get(&self.active)
            .expect("active zone present in registry")
    }

    /// Designate a zone as active
    pub fn set_active(&mut self, id: ZoneId) -> ZoneResult<()> {
        if !self.zones.contains_key(&id) {
            return Err(ZoneError::ZoneNotFound(id));
        }
        self.active = id;
        Ok(())
    }

    /// Set a zone's visibility flag, returning the resulting value
    pub fn set_visible(&mut self, id: ZoneId, visible: bool) -> ZoneResult<bool> {
        let zone = self.zones.get_mut(&id).ok_or(ZoneError::ZoneNotFound(id))?;
        zone.set_visible(visible);
        Ok(zone.is_visible())
    }

    /// Rename a zone
    ///
    /// The new name may collide with an existing zone's name; resolution
    /// order decides ties.
    pub fn rename(&mut self, id: ZoneId, new_name: impl Into<String>) -> ZoneResult<()> {
        let zone = self.zones.get_mut(&id).ok_or(ZoneError::ZoneNotFound(id))?;
        zone.set_name(new_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_active_zone() {
        let zones = ZoneRegistry::new("Grasslands");
        assert_eq!(zones.len(), 1);
        assert_eq!(zones.active_zone().name(), "Grasslands");
    }

    #[test]
    fn test_iteration_follows_load_order() {
        let mut zones = ZoneRegistry::new("a");
        zones.add("b");
        zones.add("c");

        let names: Vec<_> = zones.names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_by_name_returns_first_match() {
        let mut zones = ZoneRegistry::new("Dungeon");
        let dup = zones.add("Dungeon");

        let found = zones.find_by_name("Dungeon").unwrap();
        assert_eq!(found.id(), zones.active());
        assert_ne!(found.id(), dup);
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let zones = ZoneRegistry::new("Dungeon");
        assert!(zones.find_by_name("dungeon").is_none());
    }

    #[test]
    fn test_set_active_unknown_zone() {
        let mut other = ZoneRegistry::new("other");
        let foreign = other.add("b");
        other.remove(foreign).unwrap();

        let mut zones = ZoneRegistry::new("a");
        assert_eq!(
            zones.set_active(foreign),
            Err(ZoneError::ZoneNotFound(foreign))
        );
        assert_eq!(zones.active_zone().name(), "a");
    }

    #[test]
    fn test_active_zone_survives_rename() {
        let mut zones = ZoneRegistry::new("Old");
        let id = zones.active();
        zones.rename(id, "New").unwrap();
        assert_eq!(zones.active(), id);
        assert_eq!(zones.active_zone().name(), "New");
    }

    #[test]
    fn test_remove_active_zone_refused() {
        let mut zones = ZoneRegistry::new("a");
        let b = zones.add("b");
        zones.set_active(b).unwrap();

        assert!(matches!(
            zones.remove(b),
            Err(ZoneError::ActiveZoneRemoval(id)) if id == b
        ));
        assert!(zones.contains(b));
    }

    #[test]
    fn test_set_visible_returns_resulting_flag() {
        let mut zones = ZoneRegistry::new("a");
        let id = zones.active();
        assert_eq!(zones.set_visible(id, false), Ok(false));
        assert!(!zones.active_zone().is_visible());
    }
}
