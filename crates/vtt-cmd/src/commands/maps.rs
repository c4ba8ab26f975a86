//! Map commands: getCurrentMapName, setCurrentMap, getMapVisible,
//! setMapVisible, setMapName, getAllMapNames, getVisibleMapNames
//!
//! Mutating commands follow a strict order: local zone mutation, then the
//! session broadcast, then the display refresh step. Validation and name
//! resolution happen before the first mutation.

use vtt_zone::{ZoneError, ZoneId};

use crate::args::{ArgValue, CommandRequest, CommandValue};
use crate::command::{Command, CommandContext, CommandRegistry};
use crate::error::{CmdError, CmdResult};

/// Register map commands
pub fn register(registry: &mut CommandRegistry) {
    registry.register(GetCurrentMapName);
    registry.register(SetCurrentMap);
    registry.register(GetMapVisible);
    registry.register(SetMapVisible);
    registry.register(SetMapName);
    registry.register(GetAllMapNames);
    registry.register(GetVisibleMapNames);
}

/// Resolve a zone by display name: first exact match in load order
fn resolve_zone(ctx: &CommandContext<'_>, function: &str, map_name: &str) -> CmdResult<ZoneId> {
    ctx.zones
        .find_by_name(map_name)
        .map(|zone| zone.id())
        .ok_or_else(|| CmdError::unknown_map(function, map_name))
}

/// Encode a visibility flag in the session's wire encoding
///
/// `"1"` and `"0"` are the only valid encodings; peers and macro output
/// depend on these exact bytes.
fn encode_visible(visible: bool) -> CommandValue {
    CommandValue::Text(if visible { "1" } else { "0" }.to_string())
}

/// Coerce a visibility argument to a boolean
fn coerce_visible(value: &ArgValue) -> CmdResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| CmdError::invalid_boolean(value.to_string()))
}

/// Format an enumeration result per the optional output-format argument
///
/// The literal `"json"` selects the structured list; any other value (or
/// absence, defaulting to `","`) joins the names with that delimiter.
fn format_names(req: &CommandRequest, names: Vec<String>) -> CommandValue {
    let delim = req.text(0).unwrap_or_else(|| ",".to_string());
    if delim == "json" {
        CommandValue::List(names)
    } else {
        CommandValue::Text(names.join(&delim))
    }
}

// ============================================================================
// getCurrentMapName command
// ============================================================================

struct GetCurrentMapName;

impl Command for GetCurrentMapName {
    fn name(&self) -> &str {
        "getCurrentMapName"
    }

    fn arity(&self) -> (usize, usize) {
        (0, 0)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "getCurrentMapName" returns the name of the current map.

USAGE

    getCurrentMapName()
"#
    }

    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        _req: &CommandRequest,
    ) -> CmdResult<CommandValue> {
        Ok(CommandValue::Text(ctx.zones.active_zone().name().to_string()))
    }
}

// ============================================================================
// setCurrentMap command
// ============================================================================

struct SetCurrentMap;

impl Command for SetCurrentMap {
    fn name(&self) -> &str {
        "setCurrentMap"
    }

    fn arity(&self) -> (usize, usize) {
        (1, 1)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "setCurrentMap" switches the current map to the named one.

USAGE

    setCurrentMap(mapName)

ARGUMENTS

    mapName = string: name of the map to switch to

EXAMPLES

    setCurrentMap("Dungeon")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        let map_name = req
            .text(0)
            .ok_or_else(|| CmdError::too_few(self.name(), 1, req.arg_count()))?;

        let target = resolve_zone(ctx, self.name(), &map_name)?;
        ctx.zones.set_active(target)?;

        ctx.print(&format!(" Switched to map \"{}\"", map_name));
        Ok(CommandValue::Text(map_name))
    }
}

// ============================================================================
// getMapVisible command
// ============================================================================

struct GetMapVisible;

impl Command for GetMapVisible {
    fn name(&self) -> &str {
        "getMapVisible"
    }

    fn arity(&self) -> (usize, usize) {
        (0, 1)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "getMapVisible" returns a map's visibility flag as "1" or "0".

USAGE

    getMapVisible([mapName])

ARGUMENTS

    mapName = string: map to query (default: the current map)

EXAMPLES

    getMapVisible()
    getMapVisible("Dungeon")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        let zone = match req.text(0) {
            Some(map_name) => {
                let id = resolve_zone(ctx, self.name(), &map_name)?;
                ctx.zones.get(id).ok_or(ZoneError::ZoneNotFound(id))?
            }
            None => ctx.zones.active_zone(),
        };
        Ok(encode_visible(zone.is_visible()))
    }
}

// ============================================================================
// setMapVisible command
// ============================================================================

struct SetMapVisible;

impl Command for SetMapVisible {
    fn name(&self) -> &str {
        "setMapVisible"
    }

    fn arity(&self) -> (usize, usize) {
        (1, 2)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "setMapVisible" sets a map's visibility flag, announces the change to
    the session, and refreshes the local display.

USAGE

    setMapVisible(visible [, mapName])

ARGUMENTS

    visible = boolean: 1/0, true/false, on/off, yes/no
    mapName = string: map to change (default: the current map)

EXAMPLES

    setMapVisible(0)
    setMapVisible("on", "Dungeon")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        let value = req
            .get(0)
            .ok_or_else(|| CmdError::too_few(self.name(), 1, req.arg_count()))?;
        let visible = coerce_visible(value)?;

        let target = match req.text(1) {
            Some(map_name) => resolve_zone(ctx, self.name(), &map_name)?,
            None => ctx.zones.active(),
        };

        // Mutate first; peers hear about it before the local repaint.
        let now = ctx.zones.set_visible(target, visible)?;
        ctx.broadcast.announce_visibility(target, now);
        ctx.display.invalidate_minimap();
        ctx.display.request_repaint();

        Ok(encode_visible(now))
    }
}

// ============================================================================
// setMapName command
// ============================================================================

struct SetMapName;

impl Command for SetMapName {
    fn name(&self) -> &str {
        "setMapName"
    }

    fn arity(&self) -> (usize, usize) {
        (2, 2)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "setMapName" renames a map and announces the rename to the session.

USAGE

    setMapName(oldName, newName)

ARGUMENTS

    oldName = string: current name of the map
    newName = string: new name

EXAMPLES

    setMapName("Dungeon", "Deep Dungeon")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        let old_name = req
            .text(0)
            .ok_or_else(|| CmdError::too_few(self.name(), 2, req.arg_count()))?;
        let new_name = req
            .text(1)
            .ok_or_else(|| CmdError::too_few(self.name(), 2, req.arg_count()))?;

        let target = resolve_zone(ctx, self.name(), &old_name)?;
        ctx.zones.rename(target, &new_name)?;
        ctx.broadcast.announce_rename(target, &new_name);

        // Re-assert the active designation so dependent UI state picks up
        // the new name.
        if ctx.zones.active() == target {
            ctx.zones.set_active(target)?;
        }

        ctx.print(&format!(" Renamed map \"{}\" to \"{}\"", old_name, new_name));
        Ok(CommandValue::Text(new_name))
    }
}

// ============================================================================
// getAllMapNames command
// ============================================================================

struct GetAllMapNames;

impl Command for GetAllMapNames {
    fn name(&self) -> &str {
        "getAllMapNames"
    }

    fn arity(&self) -> (usize, usize) {
        (0, 1)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "getAllMapNames" returns the names of all maps, hidden ones included.
    Requires a trusted caller.

USAGE

    getAllMapNames([delim])

ARGUMENTS

    delim = string: output delimiter (default: ","), or "json" for a
            structured list

EXAMPLES

    getAllMapNames()
    getAllMapNames("json")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        if !ctx.privileges.caller_is_trusted() {
            return Err(CmdError::no_permission(self.name()));
        }

        let names: Vec<String> = ctx.zones.names().map(str::to_string).collect();
        Ok(format_names(req, names))
    }
}

// ============================================================================
// getVisibleMapNames command
// ============================================================================

struct GetVisibleMapNames;

impl Command for GetVisibleMapNames {
    fn name(&self) -> &str {
        "getVisibleMapNames"
    }

    fn arity(&self) -> (usize, usize) {
        (0, 1)
    }

    fn help(&self) -> &str {
        r#"
DESCRIPTION

    "getVisibleMapNames" returns the names of the maps whose visibility
    flag is set.

USAGE

    getVisibleMapNames([delim])

ARGUMENTS

    delim = string: output delimiter (default: ","), or "json" for a
            structured list

EXAMPLES

    getVisibleMapNames()
    getVisibleMapNames("json")
"#
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue> {
        let names: Vec<String> = ctx
            .zones
            .iter()
            .filter(|zone| zone.is_visible())
            .map(|zone| zone.name().to_string())
            .collect();
        Ok(format_names(req, names))
    }
}
