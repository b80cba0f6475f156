//! Static SVG snapshot of a scene graph, for previews and docs.

use std::cmp::Ordering;
use std::fmt::Write as _;

use nalgebra::{Point2, Point3, Vector3};

use crate::scene::SceneGraph;

struct Tri {
    points: [Point2<f64>; 3],
    depth: f32,
    rgb: [u8; 3],
    opacity: f32,
}

/// Project `scene` through its camera and paint triangles far to near.
pub fn scene_to_svg(scene: &SceneGraph, width: f64, height: f64, title: &str) -> String {
    let vp = scene.camera.view_projection();
    let header = 25.0;
    let avail_h = (height - header).max(1.0);
    let to_px = |ndc: &Point3<f32>| {
        Point2::new(
            (ndc.x as f64 + 1.0) * 0.5 * width,
            header + (1.0 - ndc.y as f64) * 0.5 * avail_h,
        )
    };

    let mut tris = Vec::new();
    for node in &scene.nodes {
        let mesh = &node.mesh;
        let m = node.material;
        for t in mesh.indices.chunks_exact(3) {
            let world: Vec<Point3<f32>> = t
                .iter()
                .map(|&i| node.transform.transform_point(&mesh.vertex(i as usize)))
                .collect();
            let normal: Vector3<f32> = (world[1] - world[0]).cross(&(world[2] - world[0]));
            // Cull faces turned away from the camera.
            if normal.dot(&(scene.camera.eye - world[0])) <= 0.0 {
                continue;
            }
            let ndc: Vec<Point3<f32>> = world.iter().map(|p| vp.transform_point(p)).collect();
            let brightness = scene.lights.shade(&normal);
            let channel = |c: f32| (c * brightness * 255.0).round().clamp(0.0, 255.0) as u8;
            tris.push(Tri {
                points: [to_px(&ndc[0]), to_px(&ndc[1]), to_px(&ndc[2])],
                depth: (ndc[0].z + ndc[1].z + ndc[2].z) / 3.0,
                rgb: [channel(m.color[0]), channel(m.color[1]), channel(m.color[2])],
                opacity: m.opacity,
            });
        }
    }

    tris.sort_by(|a, b| b.depth.partial_cmp(&a.depth).unwrap_or(Ordering::Equal));

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" style=\"background:#f4f4f0\">\n\
         <text x=\"{}\" y=\"18\" font-family=\"sans-serif\" font-size=\"13\" fill=\"#333\" text-anchor=\"middle\">{title}</text>\n",
        width / 2.0
    );
    for tri in &tris {
        let [a, b, c] = tri.points;
        let [r, g, bl] = tri.rgb;
        let _ = writeln!(
            svg,
            "  <polygon points=\"{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"rgb({r},{g},{bl})\" fill-opacity=\"{:.2}\"/>",
            a.x, a.y, b.x, b.y, c.x, c.y, tri.opacity
        );
    }
    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"10\" fill=\"#888\" text-anchor=\"middle\">{} nodes, {} triangles</text>",
        width / 2.0,
        height - 6.0,
        scene.nodes.len(),
        tris.len()
    );
    svg.push_str("</svg>\n");
    svg
}
