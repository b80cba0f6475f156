//! Presentation adapters over an [`assembly_engine::Assembly`].
//!
//! Neither adapter changes the assembly; both only read its part list.

pub mod layered;
pub mod lifecycle;
pub mod mesh;
pub mod scene;
pub mod style;
pub mod svg;

pub use layered::{ElementShape, LayerElement, LayeredOptions, LayeredSide, LayeredView};
pub use lifecycle::{MeshHandle, RecordingBackend, RenderBackend, SceneError, SceneHandle};
pub use mesh::TriangleMesh;
pub use scene::{CameraRig, LightRig, Material, OrbitControls, SceneGraph, SceneNode, SceneOptions};
pub use svg::scene_to_svg;
