use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the product's front view.
/// Origin is the top-left outer corner, x grows right, y grows down. Millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from edges; sizes never go negative.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Shrink by the given amounts per edge, collapsing to zero size instead of inverting.
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let width = (self.width - left - right).max(0.0);
        let height = (self.height - top - bottom).max(0.0);
        Self::new(self.x + left, self.y + top, width, height)
    }

    pub fn inset_uniform(&self, amount: f64) -> Self {
        self.inset(amount, amount, amount, amount)
    }

    /// The part of `self` that lies inside `outer`. Disjoint rects collapse to
    /// a zero-size rect on the nearest edge of `outer`.
    pub fn clamped_to(&self, outer: &Rect) -> Self {
        if outer.contains_rect(self, 0.0) {
            return *self;
        }
        let left = self.x.clamp(outer.x, outer.right());
        let top = self.y.clamp(outer.y, outer.bottom());
        let right = self.right().clamp(left, outer.right());
        let bottom = self.bottom().clamp(top, outer.bottom());
        Self::from_edges(left, top, right, bottom)
    }

    /// Smallest rect covering both.
    pub fn union(&self, other: &Rect) -> Self {
        Self::from_edges(
            self.x.min(other.x),
            self.y.min(other.y),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    pub fn contains_rect(&self, other: &Rect, tol: f64) -> bool {
        other.x >= self.x - tol
            && other.y >= self.y - tol
            && other.right() <= self.right() + tol
            && other.bottom() <= self.bottom() + tol
    }

    pub fn approx_eq(&self, other: &Rect, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.width - other.width).abs() <= tol
            && (self.height - other.height).abs() <= tol
    }
}

/// An axis-aligned box: a front-view footprint plus a depth span.
/// `z` is measured from the front plane into the product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub rect: Rect,
    pub z: f64,
    pub depth: f64,
}

impl Bounds {
    pub fn new(rect: Rect, z: f64, depth: f64) -> Self {
        Self { rect, z, depth }
    }

    pub fn z_end(&self) -> f64 {
        self.z + self.depth
    }

    /// Reflect the depth span about the mid-plane of a product `total_depth` deep.
    pub fn mirrored(&self, total_depth: f64) -> Self {
        Self {
            rect: self.rect,
            z: total_depth - self.z - self.depth,
            depth: self.depth,
        }
    }
}

/// One of the four sides of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_inset_collapses() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = r.inset_uniform(10.0);
        assert!(inner.approx_eq(&Rect::new(10.0, 10.0, 80.0, 30.0), TOL));
        let gone = r.inset_uniform(40.0);
        assert_eq!(gone.height, 0.0);
        assert_eq!(gone.width, 20.0);
    }

    #[test]
    fn test_clamped_to_outer() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = Rect::new(-10.0, 90.0, 50.0, 30.0);
        let c = r.clamped_to(&outer);
        assert!(c.approx_eq(&Rect::new(0.0, 90.0, 40.0, 10.0), TOL));
        assert!(outer.contains_rect(&c, TOL));
    }

    #[test]
    fn test_clamped_disjoint_is_empty() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 5.0, 5.0).clamped_to(&outer);
        assert_eq!(c.area(), 0.0);
        assert!(outer.contains_rect(&c, TOL));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 20.0, 10.0, 5.0);
        assert!(a.union(&b).approx_eq(&Rect::new(0.0, 0.0, 15.0, 25.0), TOL));
    }

    #[test]
    fn test_mirror_depth() {
        let b = Bounds::new(Rect::new(0.0, 0.0, 1.0, 1.0), 2.0, 3.0);
        let m = b.mirrored(10.0);
        assert_eq!(m.z, 5.0);
        assert_eq!(m.z_end(), 8.0);
        assert_eq!(m.mirrored(10.0), b);
    }
}
