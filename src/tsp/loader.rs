//! Node loading from the plain-text instance format.
//!
//! Each non-empty line is `<label: integer> <x: float> <y: float>`,
//! whitespace-separated. Blank lines are skipped; any other deviation is a
//! fatal parse error.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::tsp::problem::Node;

/// Parses node records from text.
///
/// Internal indices are assigned sequentially in the order nodes are
/// accepted, starting at 0.
///
/// # Errors
/// Returns [`Error::Parse`] with the 1-based line number for any non-empty
/// line that does not contain exactly three parsable fields.
pub fn parse_nodes(input: &str) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    for (lineno, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::Parse {
                line: lineno + 1,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        let label: i64 = fields[0].parse().map_err(|_| Error::Parse {
            line: lineno + 1,
            message: format!("invalid label `{}`", fields[0]),
        })?;
        let x: f64 = fields[1].parse().map_err(|_| Error::Parse {
            line: lineno + 1,
            message: format!("invalid x coordinate `{}`", fields[1]),
        })?;
        let y: f64 = fields[2].parse().map_err(|_| Error::Parse {
            line: lineno + 1,
            message: format!("invalid y coordinate `{}`", fields[2]),
        })?;

        nodes.push(Node {
            index: nodes.len() as u32,
            label,
            x,
            y,
        });
    }
    Ok(nodes)
}

/// Reads and parses a node file.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`]
/// for malformed contents.
pub fn load_nodes<P: AsRef<Path>>(path: P) -> Result<Vec<Node>> {
    let contents = fs::read_to_string(path)?;
    parse_nodes(&contents)
}
