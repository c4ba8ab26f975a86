//! VTT-RS Zone Management
//!
//! This crate provides the zone layer for VTT-RS, including:
//!
//! - [`Zone`] and [`ZoneId`] - Named map entities with visibility state
//! - [`ZoneRegistry`] - Ordered zone collection with an active-zone designator
//! - [`SessionBroadcaster`], [`DisplayRefresher`], [`PrivilegeChecker`] -
//!   Collaborator interfaces consumed by the command layer
//! - [`Standalone`] - Loopback collaborators for unshared local sessions
//!
//! # Architecture
//!
//! The zone crate is the data model shared by the rest of the application:
//! the command layer (`vtt-cmd`) mutates zones through the registry and
//! notifies session peers and the local display through the collaborator
//! traits defined here. Network transport and rendering live behind those
//! traits and are not part of this crate.
//!
//! # Example
//!
//! ```
//! use vtt_zone::ZoneRegistry;
//!
//! let mut zones = ZoneRegistry::new("Grasslands");
//! let dungeon = zones.add("Dungeon");
//!
//! zones.set_active(dungeon)?;
//! assert_eq!(zones.active_zone().name(), "Dungeon");
//! # Ok::<(), vtt_zone::ZoneError>(())
//! ```

mod error;
mod registry;
mod session;
mod zone;

// Re-export main types
pub use error::{ZoneError, ZoneResult};
pub use registry::ZoneRegistry;
pub use session::{DisplayRefresher, PrivilegeChecker, SessionBroadcaster, Standalone};
pub use zone::{Zone, ZoneId};
