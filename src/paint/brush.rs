use kurbo::Point;
use rand::Rng;

use crate::foundation::error::{BoardError, BoardResult};

/// Per-cell compositing mode applied when stamping a brush.
///
/// A closed set of pure `bool -> bool` transfer functions; the painter
/// dispatches on the variant, callers cannot inject arbitrary behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintMode {
    /// Flip the cell.
    Invert,
    /// Force the cell alive.
    Add,
    /// Force the cell dead.
    Remove,
    /// Randomize the cell, alive with probability one half.
    Random,
}

impl PaintMode {
    pub(crate) fn apply(self, alive: bool, rng: &mut impl Rng) -> bool {
        match self {
            PaintMode::Invert => !alive,
            PaintMode::Add => true,
            PaintMode::Remove => false,
            PaintMode::Random => rng.gen_bool(0.5),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An immutable stamp pattern.
///
/// `cells` is row-major, `cells[y * width + x]`. The stamp anchor is the
/// pattern center `(width/2, height/2)`, deliberately not an integer for
/// even-sized patterns, which centers the stamp between cells.
pub struct Brush {
    /// Display name.
    pub name: String,
    /// Grouping label ("Moving", "Staying", ...).
    pub category: String,
    /// Pattern width in cells.
    pub width: u32,
    /// Pattern height in cells.
    pub height: u32,
    /// Row-major bits, `cells[y * width + x]`.
    pub cells: Vec<bool>,
}

impl Brush {
    /// Build a brush, validating that `cells` covers `width * height`.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        width: u32,
        height: u32,
        cells: Vec<bool>,
    ) -> BoardResult<Self> {
        let brush = Self {
            name: name.into(),
            category: category.into(),
            width,
            height,
            cells,
        };
        brush.validate()?;
        Ok(brush)
    }

    /// Check the pattern length against the declared dimensions. Useful for
    /// brushes deserialized from the interchange format.
    pub fn validate(&self) -> BoardResult<()> {
        let expected = self.width as usize * self.height as usize;
        if self.cells.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: self.cells.len(),
            });
        }
        Ok(())
    }

    /// The bit at `(x, y)`; out-of-bounds reads are dead.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[(y * self.width + x) as usize]
    }

    /// The stamp anchor.
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// The single-cell brush, the painter's default.
    pub fn dot() -> Self {
        Self {
            name: "1-Block".to_string(),
            category: "Ending".to_string(),
            width: 1,
            height: 1,
            cells: vec![true],
        }
    }
}

fn pattern(name: &str, category: &str, rows: &[&str]) -> Brush {
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let height = rows.len() as u32;
    let cells = rows
        .iter()
        .flat_map(|row| row.bytes().map(|b| b == b'x'))
        .collect();
    Brush {
        name: name.to_string(),
        category: category.to_string(),
        width,
        height,
        cells,
    }
}

/// The built-in pattern library, grouped by how the pattern behaves under
/// classic Life rules.
pub fn builtin_brushes() -> Vec<Brush> {
    vec![
        Brush::dot(),
        pattern("9-Block", "Later Flipping", &["xxx", "xxx", "xxx"]),
        pattern("3-Bar", "Flipping", &["xxx"]),
        pattern("5-Jet", "Moving", &["xxx", "..x", ".x."]),
        pattern(
            "13-Jet",
            "Moving",
            &[".xxxxxx", "x.....x", "......x", "x....x.", "..xx..."],
        ),
        pattern("4-Circle", "Staying", &[".x.", "x.x", ".x."]),
        pattern("6-Circle", "Staying", &[".x.", "x.x", "x.x", ".x."]),
        pattern("6-Cross", "Flipping", &["..x.", "xx..", "..xx", ".x.."]),
    ]
}

/// Look a built-in brush up by name.
pub fn builtin_brush(name: &str) -> Option<Brush> {
    builtin_brushes().into_iter().find(|b| b.name == name)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/brush.rs"]
mod tests;
