//! Pairwise collision tests between every shape kind
//!
//! Each test rejects on bounding boxes first, then looks for:
//! - a defining point (circle center, vertex, endpoint) inside the other shape
//! - a pair of edges that intersect (for circles: an edge within the radius)
//!
//! `collide` dispatches over borrowed shapes and mirrors the pairs so that
//! `collide(a, b) == collide(b, a)`.

use super::circle::Circle;
use super::line::Line;
use super::polygon::Polygon;
use super::rect::Rect;

/// Circles overlap when their centers are closer than the summed radii.
/// Touching circles do not collide.
#[inline]
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    a.center().distance(b.center()) < a.radius() + b.radius()
}

pub fn circle_line(circle: &Circle, line: &Line) -> bool {
    if !circle.bounding_box().overlaps(line.bounding_box()) {
        return false;
    }
    if line.points().iter().any(|&p| circle.contains_point(p)) {
        return true;
    }
    circle.touches_boundary(line.boundary())
}

pub fn circle_polygon(circle: &Circle, polygon: &Polygon) -> bool {
    if !circle.bounding_box().overlaps(polygon.bounding_box()) {
        return false;
    }
    if polygon.contains_point(circle.center()) {
        return true;
    }
    if polygon.vertices().iter().any(|&v| circle.contains_point(v)) {
        return true;
    }
    circle.touches_any(polygon.boundaries())
}

pub fn circle_rect(circle: &Circle, rect: &Rect) -> bool {
    if !circle.bounding_box().overlaps(rect) {
        return false;
    }
    let c = circle.center();
    let r = circle.radius();

    if rect.contains_point(c) {
        return true;
    }
    // A corner poking into the circle
    if rect.corners().iter().any(|&k| c.distance(k) < r) {
        return true;
    }
    // Center beside a vertical side
    let beside_y = rect.top() <= c.y && c.y <= rect.bottom();
    if beside_y && ((c.x - rect.left()).abs() < r || (c.x - rect.right()).abs() < r) {
        return true;
    }
    // Center above or below a horizontal side
    let beside_x = rect.left() <= c.x && c.x <= rect.right();
    if beside_x && ((c.y - rect.top()).abs() < r || (c.y - rect.bottom()).abs() < r) {
        return true;
    }
    false
}

pub fn line_line(a: &Line, b: &Line) -> bool {
    if !a.bounding_box().overlaps(b.bounding_box()) {
        return false;
    }
    a.boundary().intersects(b.boundary())
}

pub fn line_polygon(line: &Line, polygon: &Polygon) -> bool {
    if !line.bounding_box().overlaps(polygon.bounding_box()) {
        return false;
    }
    if line.points().iter().any(|&p| polygon.contains_point(p)) {
        return true;
    }
    polygon.crosses(line.boundary())
}

pub fn line_rect(line: &Line, rect: &Rect) -> bool {
    if !line.bounding_box().overlaps(rect) {
        return false;
    }
    if line.points().iter().any(|&p| rect.contains_point(p)) {
        return true;
    }
    rect.edges().iter().any(|e| line.boundary().intersects(e))
}

pub fn polygon_polygon(a: &Polygon, b: &Polygon) -> bool {
    if !a.bounding_box().overlaps(b.bounding_box()) {
        return false;
    }
    if a.vertices().iter().any(|&v| b.contains_point(v)) {
        return true;
    }
    if b.vertices().iter().any(|&v| a.contains_point(v)) {
        return true;
    }
    a.boundaries().any(|edge| b.crosses(edge))
}

pub fn polygon_rect(polygon: &Polygon, rect: &Rect) -> bool {
    if !polygon.bounding_box().overlaps(rect) {
        return false;
    }
    if polygon.vertices().iter().any(|&v| rect.contains_point(v)) {
        return true;
    }
    if rect.corners().iter().any(|&k| polygon.contains_point(k)) {
        return true;
    }
    rect.edges().iter().any(|edge| polygon.crosses(edge))
}

#[inline]
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// A borrowed shape of any kind
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Circle(&'a Circle),
    Line(&'a Line),
    Polygon(&'a Polygon),
    Rect(&'a Rect),
}

impl ShapeRef<'_> {
    pub fn bounding_box(&self) -> Rect {
        match *self {
            ShapeRef::Circle(c) => *c.bounding_box(),
            ShapeRef::Line(l) => *l.bounding_box(),
            ShapeRef::Polygon(p) => *p.bounding_box(),
            ShapeRef::Rect(r) => *r,
        }
    }
}

impl<'a> From<&'a Circle> for ShapeRef<'a> {
    fn from(c: &'a Circle) -> Self {
        ShapeRef::Circle(c)
    }
}

impl<'a> From<&'a Line> for ShapeRef<'a> {
    fn from(l: &'a Line) -> Self {
        ShapeRef::Line(l)
    }
}

impl<'a> From<&'a Polygon> for ShapeRef<'a> {
    fn from(p: &'a Polygon) -> Self {
        ShapeRef::Polygon(p)
    }
}

impl<'a> From<&'a Rect> for ShapeRef<'a> {
    fn from(r: &'a Rect) -> Self {
        ShapeRef::Rect(r)
    }
}

/// Collision between any two shapes
pub fn collide(a: ShapeRef<'_>, b: ShapeRef<'_>) -> bool {
    use ShapeRef as S;
    match (a, b) {
        (S::Circle(x), S::Circle(y)) => circle_circle(x, y),
        (S::Circle(c), S::Line(l)) | (S::Line(l), S::Circle(c)) => circle_line(c, l),
        (S::Circle(c), S::Polygon(p)) | (S::Polygon(p), S::Circle(c)) => circle_polygon(c, p),
        (S::Circle(c), S::Rect(r)) | (S::Rect(r), S::Circle(c)) => circle_rect(c, r),
        (S::Line(x), S::Line(y)) => line_line(x, y),
        (S::Line(l), S::Polygon(p)) | (S::Polygon(p), S::Line(l)) => line_polygon(l, p),
        (S::Line(l), S::Rect(r)) | (S::Rect(r), S::Line(l)) => line_rect(l, r),
        (S::Polygon(x), S::Polygon(y)) => polygon_polygon(x, y),
        (S::Polygon(p), S::Rect(r)) | (S::Rect(r), S::Polygon(p)) => polygon_rect(p, r),
        (S::Rect(x), S::Rect(y)) => rect_rect(x, y),
    }
}
