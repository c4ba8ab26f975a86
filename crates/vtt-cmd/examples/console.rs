//! Interactive zone command console
//!
//! A minimal host for exercising the command layer from a terminal. The
//! real application drives the dispatcher from its macro engine; this
//! example stands in with a hand-rolled read-eval loop over a standalone
//! (unshared, trusted) session.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example console
//! ```
//!
//! Type commands in macro call syntax at the `vtt> ` prompt:
//!
//! - `getCurrentMapName()` - Name of the current map
//! - `setCurrentMap("Dungeon")` - Switch maps
//! - `setMapVisible(0, "Dungeon")` - Hide a map
//! - `getAllMapNames("json")` - Enumerate all maps
//! - `help setMapName` - Show a command's help text
//! - `quit` or `exit` - Leave the console

use std::io::{self, BufRead, Write};

use vtt_cmd::{ArgValue, CommandContext, CommandExecutor};
use vtt_zone::{Standalone, ZoneRegistry};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut zones = ZoneRegistry::new("Grasslands");
    zones.add("Dungeon");
    zones.add("Tower");

    let mut broadcast = Standalone;
    let mut display = Standalone;
    let privileges = Standalone;
    let mut executor = CommandExecutor::new();

    println!("vtt-rs console - maps: Grasslands, Dungeon, Tower");
    println!("Type `help <command>` for usage, `quit` to exit.");

    let stdin = io::stdin();
    loop {
        print!("vtt> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if let Some(name) = line.strip_prefix("help ") {
            match executor.registry().get(name.trim()) {
                Some(cmd) => println!("{}", cmd.help()),
                None => println!("unknown command: {}", name.trim()),
            }
            continue;
        }

        let Some((name, args)) = parse_call(line) else {
            println!("could not parse: {}", line);
            continue;
        };

        let mut ctx =
            CommandContext::new(&mut zones, &mut broadcast, &mut display, &privileges);
        match executor.execute(&mut ctx, &name, &args) {
            Ok(value) => println!("{}", value),
            Err(e) => println!("error: {}", e),
        }
    }
}

/// Parse one `name(arg, ...)` line into a command invocation
///
/// Argument parsing here is deliberately crude (split on commas, strip
/// quotes); the real host's expression engine owns proper parsing.
fn parse_call(line: &str) -> Option<(String, Vec<ArgValue>)> {
    let (name, rest) = match line.find('(') {
        Some(open) => {
            let close = line.rfind(')')?;
            if close < open {
                return None;
            }
            (line[..open].trim(), &line[open + 1..close])
        }
        None => (line, ""),
    };

    if name.is_empty() {
        return None;
    }

    let mut args = Vec::new();
    for part in rest.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        args.push(ArgValue::from(part.trim_matches('"')));
    }

    Some((name.to_string(), args))
}
