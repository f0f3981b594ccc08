//! Renderer-facing scene
//!
//!     A [Scene] is what external rendering surfaces consume: the parsed
//!     program, one cached resolution of it, and the logical bounding box of
//!     everything drawable. The resolution is computed once per loaded
//!     program - redrawing never re-scans the symbol table - and is only
//!     rebuilt by building a new Scene from new source.
//!
//!     This is a pure library type: it computes, callers print/draw. The
//!     scene serializes to JSON for the CLI and for renderers living outside
//!     this process.

use crate::sketch::ast::{Diagnostic, Point, SymbolTable};
use crate::sketch::parsing::Program;
use crate::sketch::resolve::{resolve, Drawable, Resolution};
use serde::Serialize;

/// Logical bounding box of a scene, in program coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Viewport used when a scene has nothing drawable, matching the classic
/// empty-canvas view around the origin.
const EMPTY_BOUNDS: Bounds = Bounds {
    min: Point { x: -10, y: -10 },
    max: Point { x: 10, y: 10 },
};

impl Bounds {
    fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }
}

/// A fully resolved scene.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    program: Program,
    resolution: Resolution,
    bounds: Bounds,
}

impl Scene {
    /// Build a scene: resolve the program once and cache the result.
    pub fn new(program: Program) -> Self {
        let resolution = resolve(&program);
        let bounds = compute_bounds(&resolution);
        Scene {
            program,
            resolution,
            bounds,
        }
    }

    /// Parse and resolve source text in one step.
    pub fn from_source(source: &str) -> Self {
        Scene::new(crate::sketch::pipeline::parse_program(source))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.program.symbols
    }

    /// Drawables in source order (the drawing order), with command indices.
    pub fn drawables(&self) -> impl Iterator<Item = (usize, &Drawable)> {
        self.resolution.drawable_iter()
    }

    /// Parse-time diagnostics followed by resolution-time diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.program
            .diagnostics
            .iter()
            .chain(self.resolution.diagnostics.iter())
    }

    pub fn has_errors(&self) -> bool {
        use crate::sketch::ast::Severity;
        self.diagnostics().any(|d| d.severity == Severity::Error)
    }

    /// Logical bounding box over all resolved geometry (circle extents
    /// included). Falls back to a fixed box around the origin for scenes
    /// with nothing drawable.
    pub fn logical_bounds(&self) -> Bounds {
        self.bounds
    }
}

fn compute_bounds(resolution: &Resolution) -> Bounds {
    let mut extents: Vec<Point> = Vec::new();

    for (_, drawable) in resolution.drawable_iter() {
        match drawable {
            Drawable::Point { at, .. } => extents.push(*at),
            Drawable::Circle { center, radius, .. } => {
                extents.push(Point::new(center.at.x - radius, center.at.y - radius));
                extents.push(Point::new(center.at.x + radius, center.at.y + radius));
            }
            Drawable::Segment { from, to, .. } => {
                extents.push(from.at);
                extents.push(to.at);
            }
        }
    }

    let Some(first) = extents.first().copied() else {
        return EMPTY_BOUNDS;
    };
    let mut bounds = Bounds {
        min: first,
        max: first,
    };
    for point in extents {
        bounds.include(point);
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scene_bounds() {
        let scene = Scene::from_source("");
        assert_eq!(scene.logical_bounds(), EMPTY_BOUNDS);
        assert_eq!(scene.drawables().count(), 0);
    }

    #[test]
    fn test_bounds_include_circle_extent() {
        let scene = Scene::from_source("point P 0 0\ncircle C P 5\n");
        let bounds = scene.logical_bounds();
        assert_eq!(bounds.min, Point::new(-5, -5));
        assert_eq!(bounds.max, Point::new(5, 5));
        assert_eq!(bounds.width(), 10);
        assert_eq!(bounds.height(), 10);
    }

    #[test]
    fn test_diagnostics_cover_both_phases() {
        // One parse error (bad arity) and one resolve error (dangling ref).
        let scene = Scene::from_source("point A 0\nchord A B\n");
        let codes: Vec<_> = scene
            .diagnostics()
            .filter_map(|d| d.code.as_deref())
            .collect();
        assert!(codes.contains(&"malformed-statement"));
        assert!(codes.contains(&"unresolved-reference"));
        assert!(scene.has_errors());
    }

    #[test]
    fn test_drawables_keep_source_order() {
        let scene = Scene::from_source("point A 0 0\npoint B 2 2\nsegment A B\n");
        let indices: Vec<usize> = scene.drawables().map(|(idx, _)| idx).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = Scene::from_source("point P 3 4\ncircle C P 2\n");
        let json = serde_json::to_value(&scene).expect("scene serializes");
        assert_eq!(json["program"]["commands"][0]["MarkPoint"]["x"], 3);
        assert_eq!(
            json["resolution"]["drawables"][1]["Circle"]["center"]["at"]["y"],
            4
        );
        assert_eq!(json["bounds"]["max"]["x"], 5);
    }
}
