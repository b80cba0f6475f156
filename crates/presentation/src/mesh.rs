use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A triangle mesh for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Vertex normals [nx, ny, nz, ...]
    pub normals: Vec<f32>,
    /// Triangle indices [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn add_vertex(&mut self, pos: Point3<f32>, normal: Vector3<f32>) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.extend_from_slice(&[pos.x, pos.y, pos.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|idx| idx + offset));
    }

    pub fn vertex(&self, i: usize) -> Point3<f32> {
        Point3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }

    /// Axis-aligned bounds, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        if self.positions.is_empty() {
            return None;
        }
        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);
        for i in 0..self.vertex_count() {
            let p = self.vertex(i);
            min = min.inf(&p);
            max = max.sup(&p);
        }
        Some((min, max))
    }

    /// Planar quad with a shared normal. Corners are counter-clockwise seen
    /// from the side the normal points to.
    fn add_quad(&mut self, corners: [Point3<f32>; 4], normal: Vector3<f32>) {
        let idx: Vec<u32> = corners.iter().map(|p| self.add_vertex(*p, normal)).collect();
        self.add_triangle(idx[0], idx[1], idx[2]);
        self.add_triangle(idx[0], idx[2], idx[3]);
    }
}

/// Closed box spanning `min..max`, 24 vertices so every face gets its own normal.
pub fn box_mesh(min: Point3<f32>, max: Point3<f32>) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);
    let p = |x: f32, y: f32, z: f32| Point3::new(x, y, z);

    mesh.add_quad(
        [p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)],
        Vector3::z(),
    );
    mesh.add_quad(
        [p(x1, y0, z0), p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0)],
        -Vector3::z(),
    );
    mesh.add_quad(
        [p(x1, y0, z1), p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1)],
        Vector3::x(),
    );
    mesh.add_quad(
        [p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0)],
        -Vector3::x(),
    );
    mesh.add_quad(
        [p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0), p(x0, y1, z0)],
        Vector3::y(),
    );
    mesh.add_quad(
        [p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1), p(x0, y0, z1)],
        -Vector3::y(),
    );
    mesh
}

/// Rectangular loop of width `band` around a `width x height` hole-bearing
/// rect centred on the origin, built from four boxes.
pub fn ring_mesh(width: f32, height: f32, depth: f32, band: f32) -> TriangleMesh {
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);
    let b = band.clamp(0.0, hw.min(hh));
    let mut mesh = TriangleMesh::new();
    // Top and bottom run the full width; sides fit between them.
    mesh.merge(&box_mesh(
        Point3::new(-hw, hh - b, -hd),
        Point3::new(hw, hh, hd),
    ));
    mesh.merge(&box_mesh(
        Point3::new(-hw, -hh, -hd),
        Point3::new(hw, -hh + b, hd),
    ));
    mesh.merge(&box_mesh(
        Point3::new(-hw, -hh + b, -hd),
        Point3::new(-hw + b, hh - b, hd),
    ));
    mesh.merge(&box_mesh(
        Point3::new(hw - b, -hh + b, -hd),
        Point3::new(hw, hh - b, hd),
    ));
    mesh
}

/// Triangular prism extruded along z from a counter-clockwise outline.
pub fn prism_mesh(outline: [(f32, f32); 3], depth: f32) -> TriangleMesh {
    let hd = depth * 0.5;
    let mut mesh = TriangleMesh::new();
    let front: Vec<u32> = outline
        .iter()
        .map(|&(x, y)| mesh.add_vertex(Point3::new(x, y, hd), Vector3::z()))
        .collect();
    mesh.add_triangle(front[0], front[1], front[2]);
    let back: Vec<u32> = outline
        .iter()
        .map(|&(x, y)| mesh.add_vertex(Point3::new(x, y, -hd), -Vector3::z()))
        .collect();
    mesh.add_triangle(back[0], back[2], back[1]);

    for i in 0..3 {
        let (ax, ay) = outline[i];
        let (bx, by) = outline[(i + 1) % 3];
        let normal = Vector3::new(by - ay, ax - bx, 0.0)
            .try_normalize(f32::EPSILON)
            .unwrap_or_else(Vector3::x);
        mesh.add_quad(
            [
                Point3::new(ax, ay, -hd),
                Point3::new(bx, by, -hd),
                Point3::new(bx, by, hd),
                Point3::new(ax, ay, hd),
            ],
            normal,
        );
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_counts_and_bounds() {
        let m = box_mesh(Point3::new(-1.0, -2.0, -3.0), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(m.vertex_count(), 24);
        assert_eq!(m.triangle_count(), 12);
        let (min, max) = m.bounds().unwrap();
        assert_eq!(min, Point3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_merge_offsets_indices() {
        let mut a = box_mesh(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let b = box_mesh(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        a.merge(&b);
        assert_eq!(a.vertex_count(), 48);
        assert_eq!(*a.indices.iter().max().unwrap(), 47);
    }

    #[test]
    fn test_ring_is_four_boxes() {
        let m = ring_mesh(10.0, 20.0, 1.0, 2.0);
        assert_eq!(m.triangle_count(), 48);
        let (min, max) = m.bounds().unwrap();
        assert_eq!((min.x, max.x, min.y, max.y), (-5.0, 5.0, -10.0, 10.0));
    }

    #[test]
    fn test_prism_counts() {
        let m = prism_mesh([(-1.0, 0.0), (1.0, -1.0), (1.0, 1.0)], 0.5);
        assert_eq!(m.triangle_count(), 8);
        assert!(m.bounds().is_some());
        assert!(TriangleMesh::new().bounds().is_none());
    }
}
