//! 3D scene graph over an assembly.
//!
//! Scene space is centred on the product, y up, +z toward the exterior
//! viewer. Every part becomes one node: a mesh in local coordinates plus a
//! translation to the part's centre.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use assembly_engine::Assembly;
use sash_types::{Edge, Fill, NeutralTone, Part, PartId, Rgb, Shape, Side};

use crate::mesh::{box_mesh, prism_mesh, ring_mesh, TriangleMesh};
use crate::style::fill_color;

/// Settings for the scene adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Scene units per assembly unit.
    pub scale: f32,
    /// Vertical field of view of the camera, in degrees.
    pub fov_deg: f32,
    /// Camera distance as a multiple of the framing distance.
    pub framing: f32,
    pub auto_rotate: bool,
    /// Radians per second when auto-rotating.
    pub auto_rotate_speed: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            scale: 0.001,
            fov_deg: 45.0,
            framing: 1.2,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
        }
    }
}

impl SceneOptions {
    /// Slowly turning product, for the showroom view.
    pub fn showroom() -> Self {
        Self {
            auto_rotate: true,
            framing: 1.4,
            ..Self::default()
        }
    }

    /// For assemblies already built in meters.
    pub fn unscaled() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }
}

/// Surface appearance of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Linear RGBA.
    pub color: [f32; 4],
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub transparent: bool,
}

impl Material {
    fn from_fill(fill: &Fill, rgb: Rgb, alpha: f64) -> Self {
        let [r, g, b] = rgb.to_unit();
        let opacity = alpha as f32;
        let (metalness, roughness) = match fill {
            Fill::Glass { .. } => (0.0, 0.05),
            Fill::Neutral {
                tone: NeutralTone::Hardware,
            } => (0.8, 0.3),
            Fill::Neutral { .. } => (0.0, 0.8),
            Fill::Role { .. } => (0.1, 0.6),
        };
        Self {
            color: [r, g, b, opacity],
            opacity,
            metalness,
            roughness,
            transparent: opacity < 1.0,
        }
    }
}

/// One drawable node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub part: PartId,
    /// `<kind>-<id>-<side>`.
    pub name: String,
    pub side: Side,
    pub mesh: TriangleMesh,
    pub transform: Matrix4<f32>,
    pub material: Material,
    /// Draw order for transparent sorting; higher draws later.
    pub render_order: u8,
}

impl SceneNode {
    /// World-space centre of the node.
    pub fn position(&self) -> Point3<f32> {
        self.transform.transform_point(&Point3::origin())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl CameraRig {
    pub fn view(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.eye, &self.target, &self.up)
    }

    pub fn projection(&self) -> Matrix4<f32> {
        Matrix4::new_perspective(self.aspect, self.fov_deg.to_radians(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection() * self.view()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Direction the light travels.
    pub direction: Vector3<f32>,
    pub intensity: f32,
}

/// Ambient fill plus a key and a rim light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub ambient: f32,
    pub key: DirectionalLight,
    pub rim: DirectionalLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            key: DirectionalLight {
                direction: Vector3::new(-0.3, -0.5, -0.8).normalize(),
                intensity: 0.8,
            },
            rim: DirectionalLight {
                direction: Vector3::new(0.4, -0.2, 0.9).normalize(),
                intensity: 0.3,
            },
        }
    }
}

impl LightRig {
    /// Lambert brightness of a surface with `normal`, in `[0, 1]`.
    pub fn shade(&self, normal: &Vector3<f32>) -> f32 {
        let n = normal.try_normalize(f32::EPSILON).unwrap_or_else(Vector3::z);
        let lambert = |l: &DirectionalLight| (-l.direction).dot(&n).max(0.0) * l.intensity;
        (self.ambient + lambert(&self.key) + lambert(&self.rim)).min(1.0)
    }
}

/// Spherical camera control around a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitControls {
    pub target: Point3<f32>,
    /// Rotation about the vertical axis; 0 looks at the exterior.
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    /// Radians per second.
    pub auto_rotate_speed: f32,
}

/// Keeps the camera off the poles.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.1;

impl OrbitControls {
    pub fn new(target: Point3<f32>, distance: f32) -> Self {
        Self {
            target,
            yaw: 0.0,
            pitch: 0.0,
            distance,
            min_distance: distance * 0.25,
            max_distance: distance * 4.0,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
        }
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw = (self.yaw + self.auto_rotate_speed * dt).rem_euclid(TAU);
        }
    }

    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Scale the distance; factors below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Turn to face one side head-on.
    pub fn look_at_side(&mut self, side: Side) {
        self.yaw = match side {
            Side::Front => 0.0,
            Side::Back => PI,
        };
        self.pitch = 0.0;
    }

    pub fn eye(&self) -> Point3<f32> {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vector3::new(sy * cp, sp, cy * cp) * self.distance
    }

    pub fn apply(&self, camera: &mut CameraRig) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}

/// Everything a renderer needs to draw one assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub nodes: Vec<SceneNode>,
    pub camera: CameraRig,
    pub lights: LightRig,
    pub controls: OrbitControls,
    /// Scene-space bounds of all nodes.
    pub bounds: (Point3<f32>, Point3<f32>),
}

impl SceneGraph {
    #[instrument(skip_all, fields(parts = assembly.parts.len()))]
    pub fn build(assembly: &Assembly, options: &SceneOptions) -> Self {
        let s = options.scale;
        let size = Vector3::new(
            assembly.footprint.width as f32,
            assembly.footprint.height as f32,
            assembly.depth as f32,
        ) * s;

        let nodes: Vec<SceneNode> = assembly
            .parts
            .iter()
            .filter(|p| p.bounds.rect.width > 0.0 && p.bounds.rect.height > 0.0)
            .map(|p| node(assembly, p, s))
            .collect();

        let half = size * 0.5;
        let bounds = nodes
            .iter()
            .filter_map(|n| {
                n.mesh.bounds().map(|(lo, hi)| {
                    (n.transform.transform_point(&lo), n.transform.transform_point(&hi))
                })
            })
            .reduce(|(a_lo, a_hi), (b_lo, b_hi)| (a_lo.inf(&b_lo), a_hi.sup(&b_hi)))
            .unwrap_or((Point3::from(-half), Point3::from(half)));

        let radius = half.norm().max(f32::EPSILON);
        let fov = options.fov_deg.to_radians();
        let distance = radius / (fov * 0.5).tan() * options.framing;

        let mut controls = OrbitControls::new(Point3::origin(), distance);
        controls.auto_rotate = options.auto_rotate;
        controls.auto_rotate_speed = options.auto_rotate_speed;

        let mut camera = CameraRig {
            eye: Point3::origin(),
            target: Point3::origin(),
            up: Vector3::y(),
            fov_deg: options.fov_deg,
            near: distance * 0.01,
            far: distance * 10.0,
            aspect: 1.0,
        };
        controls.apply(&mut camera);

        debug!(nodes = nodes.len(), distance, "scene graph built");
        Self {
            nodes,
            camera,
            lights: LightRig::default(),
            controls,
            bounds,
        }
    }

    /// Advance animation state by `dt` seconds and move the camera.
    pub fn tick(&mut self, dt: f32) {
        self.controls.update(dt);
        self.controls.apply(&mut self.camera);
    }

    pub fn nodes_on(&self, side: Side) -> impl Iterator<Item = &SceneNode> + '_ {
        self.nodes.iter().filter(move |n| n.side == side)
    }

    pub fn triangle_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.triangle_count()).sum()
    }
}

fn node(assembly: &Assembly, part: &Part, s: f32) -> SceneNode {
    let r = part.bounds.rect;
    let fw = assembly.footprint.width;
    let fh = assembly.footprint.height;
    let d = assembly.depth;

    // Footprint centre to scene space: x right, y up, z toward the exterior.
    let (cx, cy) = r.center();
    let cz = part.bounds.z + part.bounds.depth * 0.5;
    let centre = Vector3::new(
        (cx - assembly.footprint.x - fw * 0.5) as f32,
        (fh * 0.5 - (cy - assembly.footprint.y)) as f32,
        (d * 0.5 - cz) as f32,
    ) * s;

    let w = r.width as f32 * s;
    let h = r.height as f32 * s;
    let depth = part.bounds.depth as f32 * s;

    let mesh = match part.shape {
        Shape::Rect => {
            let half = Vector3::new(w, h, depth) * 0.5;
            box_mesh(Point3::from(-half), Point3::from(half))
        }
        Shape::Ring { band } => ring_mesh(w, h, depth, band as f32 * s),
        Shape::Triangle { apex } => prism_mesh(triangle_outline(apex, w, h), depth),
    };

    let (rgb, alpha) = fill_color(&part.fill, &assembly.palette);
    let side = match part.side {
        Side::Front => "front",
        Side::Back => "back",
    };
    SceneNode {
        part: part.id,
        name: format!("{}-{}-{}", part.kind.name(), part.id.0, side),
        side: part.side,
        mesh,
        transform: Matrix4::new_translation(&centre),
        material: Material::from_fill(&part.fill, rgb, alpha),
        render_order: part.z_index,
    }
}

/// Counter-clockwise outline, in y-up local coordinates, of a triangle whose
/// apex touches the middle of `apex`.
fn triangle_outline(apex: Edge, w: f32, h: f32) -> [(f32, f32); 3] {
    let (hw, hh) = (w * 0.5, h * 0.5);
    match apex {
        Edge::Left => [(-hw, 0.0), (hw, -hh), (hw, hh)],
        Edge::Right => [(hw, 0.0), (-hw, hh), (-hw, -hh)],
        Edge::Top => [(0.0, hh), (-hw, -hh), (hw, -hh)],
        Edge::Bottom => [(0.0, -hh), (hw, hh), (-hw, hh)],
    }
}
