//! The command node model
//!
//! A closed set of variants, one per statement kind, matched exhaustively
//! everywhere. Commands carry only what the source said: symbolic references
//! stay symbolic here, and the resolver binds them in its own pass.

use crate::sketch::ast::point::Point;
use serde::Serialize;
use std::fmt;

/// How a circle's center was written: by reference to a named entity, or as
/// inline coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CenterSpec {
    Reference(String),
    Inline(Point),
}

impl fmt::Display for CenterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CenterSpec::Reference(name) => write!(f, "{}", name),
            CenterSpec::Inline(point) => write!(f, "{} {}", point.x, point.y),
        }
    }
}

/// One parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /// `point <id> <x> <y>` - declares a named point.
    MarkPoint { id: String, x: i64, y: i64 },

    /// `circle [<id>] (<ref> | <x> <y>) <radius>` - draws a circle. A named
    /// circle enters the symbol table; referencing it elsewhere means its
    /// center.
    DrawCircle {
        id: Option<String>,
        center: CenterSpec,
        radius: i64,
    },

    /// `chord <ref> <ref>`
    DrawChord { start: String, end: String },

    /// `segment <ref> <ref>` - endpoints may be points or circle centers.
    DrawSegment { start: String, end: String },

    /// `radius <ref> <ref>` - a line from a center to a point.
    DrawRadius { center: String, end: String },
}

impl Command {
    /// The identifier this command declares, if any. Only declaring commands
    /// enter the symbol table.
    pub fn declared_id(&self) -> Option<&str> {
        match self {
            Command::MarkPoint { id, .. } => Some(id),
            Command::DrawCircle { id, .. } => id.as_deref(),
            Command::DrawChord { .. } | Command::DrawSegment { .. } | Command::DrawRadius { .. } => {
                None
            }
        }
    }

    /// The statement keyword this command was parsed from.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::MarkPoint { .. } => "point",
            Command::DrawCircle { .. } => "circle",
            Command::DrawChord { .. } => "chord",
            Command::DrawSegment { .. } => "segment",
            Command::DrawRadius { .. } => "radius",
        }
    }
}

/// Display renders the canonical source form of the statement.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MarkPoint { id, x, y } => write!(f, "point {} {} {}", id, x, y),
            Command::DrawCircle { id, center, radius } => match id {
                Some(id) => write!(f, "circle {} {} {}", id, center, radius),
                None => write!(f, "circle {} {}", center, radius),
            },
            Command::DrawChord { start, end } => write!(f, "chord {} {}", start, end),
            Command::DrawSegment { start, end } => write!(f, "segment {} {}", start, end),
            Command::DrawRadius { center, end } => write!(f, "radius {} {}", center, end),
        }
    }
}
