//! Polygons (asteroids)
//!
//! A polygon is a closed ring of distinct vertices. Construction and rotation
//! order the vertices with a nearest-neighbour walk:
//! - start at the vertex closest to the origin
//! - step to the nearest remaining vertex at or to the right of the current one
//! - once nothing remains to the right, step to the nearest one on the left
//!
//! For the convex-ish outlines used by the game this yields a simple ring.
//! Each edge stores which side of it the centroid lies on, so containment is a
//! conjunction of half-plane tests.

use glam::DVec2;
use serde::Serialize;

use super::boundary::{Boundary, Inside};
use super::circle::Circle;
use super::collision;
use super::line::Line;
use super::rect::Rect;
use crate::error::ShapeError;
use crate::{centroid, enlarge_point, rotate_point};

/// A polygon edge and the side of it that counts as inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub boundary: Boundary,
    pub inside: Inside,
}

impl Edge {
    #[inline]
    pub fn admits(&self, p: DVec2) -> bool {
        self.boundary.admits(p, self.inside)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    /// Closed ring: the last vertex repeats the first
    ring: Vec<DVec2>,
    center: DVec2,
    rect: Rect,
    edges: Vec<Edge>,
}

impl Polygon {
    pub fn new(vertices: &[DVec2]) -> Result<Self, ShapeError> {
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(ShapeError::NonFinite);
        }
        let distinct = dedup(vertices);
        if distinct.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                found: distinct.len(),
            });
        }

        let mut polygon = Self {
            ring: walk_ring(distinct),
            center: DVec2::ZERO,
            rect: Rect::default(),
            edges: Vec::new(),
        };
        polygon.refresh();
        Ok(polygon)
    }

    /// Distinct vertices in ring order
    #[inline]
    pub fn vertices(&self) -> &[DVec2] {
        &self.ring[..self.ring.len() - 1]
    }

    /// Vertices in ring order with the first repeated at the end
    #[inline]
    pub fn ring(&self) -> &[DVec2] {
        &self.ring
    }

    /// Mean of the distinct vertices
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    #[inline]
    pub fn bounding_box(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn boundaries(&self) -> impl Iterator<Item = &Boundary> + '_ {
        self.edges.iter().map(|e| &e.boundary)
    }

    /// Recompute bounding box, centroid and edges from the ring
    fn refresh(&mut self) {
        self.rect = Rect::bounding(&self.ring);
        self.center = centroid(self.vertices());
        self.rebuild_edges();
    }

    fn rebuild_edges(&mut self) {
        let center = self.center;
        self.edges.clear();
        self.edges.extend(self.ring.windows(2).map(|pair| {
            let boundary = Boundary::new(pair[0], pair[1]);
            Edge {
                boundary,
                inside: boundary.side_of(center),
            }
        }));
    }

    /// Replace every vertex; reorders and revalidates like `new`
    pub fn set_vertices(&mut self, vertices: &[DVec2]) -> Result<&mut Self, ShapeError> {
        *self = Self::new(vertices)?;
        Ok(self)
    }

    pub fn translate(&mut self, delta: DVec2) -> &mut Self {
        for v in &mut self.ring {
            *v += delta;
        }
        self.rect.x += delta.x;
        self.rect.y += delta.y;
        self.center += delta;
        self.rebuild_edges();
        self
    }

    /// Translate so the centroid lands on `target`
    pub fn move_to(&mut self, target: DVec2) -> &mut Self {
        let delta = target - self.center;
        self.translate(delta)
    }

    /// Same as `move_to`; the ring order is kept
    pub fn set_center(&mut self, center: DVec2) -> &mut Self {
        self.move_to(center)
    }

    /// Rotate by `degrees` about `pivot` (the centroid by default), then
    /// re-walk the ring since the starting vertex may change.
    pub fn rotate(&mut self, degrees: f64, pivot: Option<DVec2>) -> &mut Self {
        let pivot = pivot.unwrap_or(self.center);
        let turned: Vec<DVec2> = self
            .vertices()
            .iter()
            .map(|&v| rotate_point(v, degrees, pivot))
            .collect();
        self.ring = walk_ring(dedup(&turned));
        self.refresh();
        self
    }

    /// Scale each vertex's offset from `pivot` (the centroid by default)
    pub fn enlarge(&mut self, scale: f64, pivot: Option<DVec2>) -> &mut Self {
        debug_assert!(scale != 0.0, "enlarging by zero collapses the polygon");
        let pivot = pivot.unwrap_or(self.center);
        for v in &mut self.ring {
            *v = enlarge_point(*v, scale, pivot);
        }
        self.refresh();
        self
    }

    /// Half-plane test against every edge, after a bounding box rejection
    pub fn contains_point(&self, p: DVec2) -> bool {
        self.rect.contains_point(p) && self.edges.iter().all(|e| e.admits(p))
    }

    /// Whether any edge crosses the given boundary
    pub fn crosses(&self, other: &Boundary) -> bool {
        self.boundaries().any(|b| b.intersects(other))
    }

    pub fn collide_polygon(&self, other: &Polygon) -> bool {
        collision::polygon_polygon(self, other)
    }

    pub fn collide_circle(&self, circle: &Circle) -> bool {
        collision::circle_polygon(circle, self)
    }

    pub fn collide_line(&self, line: &Line) -> bool {
        collision::line_polygon(line, self)
    }

    pub fn collide_rect(&self, rect: &Rect) -> bool {
        collision::polygon_rect(self, rect)
    }
}

/// Drop repeated vertices, keeping first occurrences in order
fn dedup(points: &[DVec2]) -> Vec<DVec2> {
    let mut distinct: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        if !distinct.contains(&p) {
            distinct.push(p);
        }
    }
    distinct
}

/// Index of the point nearest `from` among those passing `filter` (first on ties)
fn nearest(points: &[DVec2], from: DVec2, filter: impl Fn(DVec2) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &p) in points.iter().enumerate() {
        if !filter(p) {
            continue;
        }
        let d = from.distance(p);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Nearest-neighbour walk over distinct points, returned as a closed ring
fn walk_ring(mut remaining: Vec<DVec2>) -> Vec<DVec2> {
    let mut ring = Vec::with_capacity(remaining.len() + 1);
    let Some(start) = nearest(&remaining, DVec2::ZERO, |_| true) else {
        return ring;
    };
    let mut current = remaining.remove(start);
    ring.push(current);

    while !remaining.is_empty() {
        let x = current.x;
        let next = nearest(&remaining, current, |p| p.x >= x)
            .or_else(|| nearest(&remaining, current, |_| true));
        let Some(next) = next else { break };
        current = remaining.remove(next);
        ring.push(current);
    }

    ring.push(ring[0]);
    ring
}
