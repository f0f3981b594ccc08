//! Resolver
//!
//!     Binds the symbolic references in a parsed program to concrete
//!     coordinates. Resolution runs only after the whole program is parsed,
//!     so forward references are legal: `circle C P 2` may appear before
//!     `point P 3 4`.
//!
//!     This is a dedicated pass with its own output. Commands are never
//!     mutated; [resolve] returns a [Resolution] whose drawables are
//!     co-indexed with the command list. That makes re-resolution trivially
//!     idempotent (it is a pure function) and leaves the render pass as
//!     read-only consumption of already-bound data.
//!
//!     A reference binds to a `point` directly, or to a `circle` by taking
//!     that circle's center - which may itself be a reference, so binding
//!     recurses through the chain. Recursion depth is bounded by the number
//!     of declared identifiers; a chain that revisits an identifier is
//!     reported as a cyclic reference instead of looping.

use crate::sketch::ast::{
    CenterSpec, Command, Diagnostic, Point, PointRef, ResolveError,
};
use crate::sketch::parsing::Program;
use serde::Serialize;

/// What kind of line a resolved segment came from. They are drawn alike;
/// the kind survives for display and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    Chord,
    Segment,
    Radius,
}

/// Renderer-facing resolved geometry for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Drawable {
    Point {
        at: Point,
        label: String,
    },
    Circle {
        center: PointRef,
        radius: i64,
        label: Option<String>,
    },
    Segment {
        from: PointRef,
        to: PointRef,
        kind: SegmentKind,
    },
}

/// The result of one resolution pass. `drawables` is co-indexed with the
/// program's command list; `None` marks a command that cannot be drawn (a
/// reference failed to bind), with a diagnostic saying why.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolution {
    pub drawables: Vec<Option<Drawable>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Drawables in source order (drawing order), with their command index.
    pub fn drawable_iter(&self) -> impl Iterator<Item = (usize, &Drawable)> {
        self.drawables
            .iter()
            .enumerate()
            .filter_map(|(idx, d)| d.as_ref().map(|d| (idx, d)))
    }

    pub fn drawable_count(&self) -> usize {
        self.drawables.iter().filter(|d| d.is_some()).count()
    }
}

/// Resolve every command of `program`. Pure: the program (and in particular
/// its symbol table) is never mutated, and resolving twice yields identical
/// results.
pub fn resolve(program: &Program) -> Resolution {
    let mut resolution = Resolution::default();

    for (index, command) in program.commands.iter().enumerate() {
        let line = program.lines.get(index).copied().unwrap_or(0);
        let drawable = match command {
            Command::MarkPoint { id, x, y } => Ok(Drawable::Point {
                at: Point::new(*x, *y),
                label: id.clone(),
            }),
            Command::DrawCircle { id, center, radius } => {
                resolve_center(center, program).map(|center| Drawable::Circle {
                    center,
                    radius: *radius,
                    label: id.clone(),
                })
            }
            Command::DrawChord { start, end } => {
                resolve_pair(start, end, SegmentKind::Chord, program)
            }
            Command::DrawSegment { start, end } => {
                resolve_pair(start, end, SegmentKind::Segment, program)
            }
            Command::DrawRadius { center, end } => {
                resolve_pair(center, end, SegmentKind::Radius, program)
            }
        };

        match drawable {
            Ok(drawable) => resolution.drawables.push(Some(drawable)),
            Err(err) => {
                resolution
                    .diagnostics
                    .push(Diagnostic::from_resolve(&err, line));
                resolution.drawables.push(None);
            }
        }
    }

    resolution
}

/// Bind one reference to coordinates, recording the referenced identifier
/// as the origin.
pub fn resolve_ref(name: &str, program: &Program) -> Result<PointRef, ResolveError> {
    let mut visiting = Vec::new();
    lookup_point(name, program, &mut visiting).map(|at| PointRef::named(at, name))
}

fn resolve_center(center: &CenterSpec, program: &Program) -> Result<PointRef, ResolveError> {
    match center {
        CenterSpec::Reference(name) => resolve_ref(name, program),
        CenterSpec::Inline(point) => Ok(PointRef::inline(*point)),
    }
}

fn resolve_pair(
    start: &str,
    end: &str,
    kind: SegmentKind,
    program: &Program,
) -> Result<Drawable, ResolveError> {
    let from = resolve_ref(start, program)?;
    let to = resolve_ref(end, program)?;
    Ok(Drawable::Segment { from, to, kind })
}

/// Follow `name` to concrete coordinates. `visiting` holds the identifiers
/// currently on the reference chain; meeting one again means the chain is
/// cyclic.
fn lookup_point(
    name: &str,
    program: &Program,
    visiting: &mut Vec<String>,
) -> Result<Point, ResolveError> {
    if visiting.iter().any(|seen| seen == name) {
        return Err(ResolveError::CyclicReference {
            name: name.to_string(),
            chain: visiting.clone(),
        });
    }

    let index = program
        .symbols
        .lookup(name)
        .ok_or_else(|| ResolveError::UnresolvedReference {
            name: name.to_string(),
        })?;

    match &program.commands[index] {
        Command::MarkPoint { x, y, .. } => Ok(Point::new(*x, *y)),
        Command::DrawCircle { center, .. } => match center {
            CenterSpec::Inline(point) => Ok(*point),
            CenterSpec::Reference(next) => {
                visiting.push(name.to_string());
                let result = lookup_point(next, program, visiting);
                visiting.pop();
                result
            }
        },
        // Chords, segments and radii declare no identifiers, so the symbol
        // table can never point at them.
        Command::DrawChord { .. } | Command::DrawSegment { .. } | Command::DrawRadius { .. } => {
            Err(ResolveError::UnresolvedReference {
                name: name.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sketch::pipeline::parse_program;

    fn resolve_source(source: &str) -> (Program, Resolution) {
        let program = parse_program(source);
        let resolution = resolve(&program);
        (program, resolution)
    }

    #[test]
    fn test_backward_reference() {
        let (_, resolution) = resolve_source("point P 3 4\ncircle C P 2\n");
        match &resolution.drawables[1] {
            Some(Drawable::Circle { center, radius, label }) => {
                assert_eq!(center.at, Point::new(3, 4));
                assert_eq!(center.origin.as_deref(), Some("P"));
                assert_eq!(*radius, 2);
                assert_eq!(label.as_deref(), Some("C"));
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_forward_reference() {
        let (_, resolution) = resolve_source("circle C P 2\npoint P 3 4\n");
        match &resolution.drawables[0] {
            Some(Drawable::Circle { center, .. }) => {
                assert_eq!(center.at, Point::new(3, 4));
            }
            other => panic!("expected a circle, got {:?}", other),
        }
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn test_segment_to_circle_binds_to_center() {
        let (_, resolution) =
            resolve_source("point P 3 4\npoint A 0 0\ncircle C P 2\nsegment A C\n");
        match &resolution.drawables[3] {
            Some(Drawable::Segment { from, to, kind }) => {
                assert_eq!(from.at, Point::new(0, 0));
                assert_eq!(to.at, Point::new(3, 4));
                assert_eq!(to.origin.as_deref(), Some("C"));
                assert_eq!(*kind, SegmentKind::Segment);
            }
            other => panic!("expected a segment, got {:?}", other),
        }
    }

    #[test]
    fn test_chained_circle_centers() {
        // B's center is circle A, whose center is point P.
        let (_, resolution) =
            resolve_source("point P 1 2\ncircle A P 3\ncircle B A 4\n");
        match &resolution.drawables[2] {
            Some(Drawable::Circle { center, .. }) => {
                assert_eq!(center.at, Point::new(1, 2));
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_unresolved_reference_is_reported_not_drawn() {
        let (_, resolution) = resolve_source("point X 0 0\nchord X Y\n");
        assert_eq!(resolution.drawables[1], None);
        assert_eq!(resolution.drawable_count(), 1);
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(
            resolution.diagnostics[0].code.as_deref(),
            Some("unresolved-reference")
        );
        assert_eq!(resolution.diagnostics[0].line, Some(2));
    }

    #[test]
    fn test_self_cycle_is_detected() {
        let (_, resolution) = resolve_source("circle C C 2\n");
        assert_eq!(resolution.drawables[0], None);
        assert_eq!(
            resolution.diagnostics[0].code.as_deref(),
            Some("cyclic-reference")
        );
    }

    #[test]
    fn test_two_step_cycle_is_detected() {
        let (_, resolution) = resolve_source("circle A B 1\ncircle B A 1\n");
        assert_eq!(resolution.drawables[0], None);
        assert_eq!(resolution.drawables[1], None);
        assert_eq!(resolution.diagnostics.len(), 2);
        assert!(resolution
            .diagnostics
            .iter()
            .all(|d| d.code.as_deref() == Some("cyclic-reference")));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let program = parse_program(
            "point P 3 4\ncircle C P 2\nsegment P C\nchord P Q\nradius C P\n",
        );
        let first = resolve(&program);
        let second = resolve(&program);
        assert_eq!(first.drawables, second.drawables);
        assert_eq!(first.diagnostics, second.diagnostics);
    }

    #[test]
    fn test_radius_kind() {
        let (_, resolution) = resolve_source("point P 0 0\npoint Q 1 0\nradius P Q\n");
        match &resolution.drawables[2] {
            Some(Drawable::Segment { kind, .. }) => assert_eq!(*kind, SegmentKind::Radius),
            other => panic!("expected a segment, got {:?}", other),
        }
    }
}
