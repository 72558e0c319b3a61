//! Boundary descriptors for straight edges
//!
//! Every edge is stored as the equation of its infinite line plus the
//! coordinate extent of the finite segment:
//! - `Vertical { x }` when both endpoints share an x coordinate
//! - `Horizontal { y }` when both endpoints share a y coordinate
//! - `Oblique { slope, intercept }` for `y = slope * x + intercept` otherwise
//!
//! Intersections are solved on the infinite lines and clipped back to the
//! segments through the extents.

use glam::DVec2;
use serde::Serialize;

/// Line equation of an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LineEq {
    Vertical { x: f64 },
    Horizontal { y: f64 },
    Oblique { slope: f64, intercept: f64 },
}

impl LineEq {
    /// Equation of the line through two distinct points
    pub fn through(a: DVec2, b: DVec2) -> Self {
        if a.x == b.x {
            LineEq::Vertical { x: a.x }
        } else if a.y == b.y {
            LineEq::Horizontal { y: a.y }
        } else {
            let slope = (a.y - b.y) / (a.x - b.x);
            LineEq::Oblique {
                slope,
                intercept: a.y - slope * a.x,
            }
        }
    }

    /// Split a point into (compared coordinate, line value at that point).
    ///
    /// Vertical lines compare x against the line's x, everything else compares
    /// y against the line's y at the point's x.
    #[inline]
    fn sides(&self, p: DVec2) -> (f64, f64) {
        match *self {
            LineEq::Vertical { x } => (p.x, x),
            LineEq::Horizontal { y } => (p.y, y),
            LineEq::Oblique { slope, intercept } => (p.y, slope * p.x + intercept),
        }
    }
}

/// Which side of an edge counts as inside its polygon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Inside {
    /// Inside when the compared coordinate is `<=` the line value
    AtMost,
    /// Inside when the compared coordinate is `>=` the line value
    AtLeast,
}

/// A finite straight edge: line equation plus coordinate extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boundary {
    pub eq: LineEq,
    /// Smallest x and y over both endpoints
    pub min: DVec2,
    /// Largest x and y over both endpoints
    pub max: DVec2,
}

impl Boundary {
    /// Descriptor of the segment `a`-`b`. The endpoints must differ.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            eq: LineEq::through(a, b),
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn spans_x(&self, x: f64) -> bool {
        self.min.x <= x && x <= self.max.x
    }

    #[inline]
    pub fn spans_y(&self, y: f64) -> bool {
        self.min.y <= y && y <= self.max.y
    }

    /// Which side `p` lies on, as the comparator that `p` satisfies
    pub fn side_of(&self, p: DVec2) -> Inside {
        let (coord, line) = self.eq.sides(p);
        if line >= coord {
            Inside::AtMost
        } else {
            Inside::AtLeast
        }
    }

    /// Whether `p` satisfies `inside` against this edge's line
    #[inline]
    pub fn admits(&self, p: DVec2, inside: Inside) -> bool {
        let (coord, line) = self.eq.sides(p);
        match inside {
            Inside::AtMost => coord <= line,
            Inside::AtLeast => coord >= line,
        }
    }

    /// Whether two finite edges intersect.
    ///
    /// Identical line equations count as overlapping regardless of extent.
    /// Parallel edges on different lines never intersect.
    pub fn intersects(&self, other: &Boundary) -> bool {
        use LineEq::*;

        if self.eq == other.eq {
            return true;
        }

        match (self.eq, other.eq) {
            (Vertical { .. }, Vertical { .. }) | (Horizontal { .. }, Horizontal { .. }) => false,
            (Vertical { x }, Horizontal { y }) => self.spans_y(y) && other.spans_x(x),
            (Horizontal { y }, Vertical { x }) => self.spans_x(x) && other.spans_y(y),
            (Oblique { slope, intercept }, Vertical { x }) => {
                Self::oblique_meets_vertical(self, slope, intercept, other, x)
            }
            (Vertical { x }, Oblique { slope, intercept }) => {
                Self::oblique_meets_vertical(other, slope, intercept, self, x)
            }
            (Oblique { slope, intercept }, Horizontal { y }) => {
                Self::oblique_meets_horizontal(self, slope, intercept, other, y)
            }
            (Horizontal { y }, Oblique { slope, intercept }) => {
                Self::oblique_meets_horizontal(other, slope, intercept, self, y)
            }
            (
                Oblique {
                    slope: m1,
                    intercept: c1,
                },
                Oblique {
                    slope: m2,
                    intercept: c2,
                },
            ) => {
                if m1 == m2 {
                    return false;
                }
                let x = (c2 - c1) / (m1 - m2);
                self.spans_x(x) && other.spans_x(x)
            }
        }
    }

    fn oblique_meets_vertical(
        oblique: &Boundary,
        slope: f64,
        intercept: f64,
        vertical: &Boundary,
        x: f64,
    ) -> bool {
        oblique.spans_x(x) && vertical.spans_y(slope * x + intercept)
    }

    fn oblique_meets_horizontal(
        oblique: &Boundary,
        slope: f64,
        intercept: f64,
        horizontal: &Boundary,
        y: f64,
    ) -> bool {
        oblique.spans_y(y) && horizontal.spans_x((y - intercept) / slope)
    }
}
