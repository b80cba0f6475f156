//! Owned GPU-side resources of a scene.
//!
//! A [`SceneHandle`] owns the uploaded meshes of one scene graph. Replacing
//! the graph releases the previous uploads first; disposing or dropping the
//! handle releases whatever is still held.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use assembly_engine::Assembly;

use crate::mesh::TriangleMesh;
use crate::scene::{Material, SceneGraph, SceneOptions};

/// Opaque id of one uploaded mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub Uuid);

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene {id} has been disposed")]
    Disposed { id: Uuid },

    #[error("unknown mesh handle {0}")]
    UnknownHandle(Uuid),

    #[error("render backend error: {0}")]
    Backend(String),
}

/// Whatever draws the meshes: a GPU context, a remote viewer, a test ledger.
pub trait RenderBackend {
    fn upload_mesh(
        &mut self,
        mesh: &TriangleMesh,
        material: &Material,
    ) -> Result<MeshHandle, SceneError>;

    fn release_mesh(&mut self, handle: MeshHandle) -> Result<(), SceneError>;
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn upload_mesh(
        &mut self,
        mesh: &TriangleMesh,
        material: &Material,
    ) -> Result<MeshHandle, SceneError> {
        (**self).upload_mesh(mesh, material)
    }

    fn release_mesh(&mut self, handle: MeshHandle) -> Result<(), SceneError> {
        (**self).release_mesh(handle)
    }
}

/// In-memory backend that records live uploads.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Live handles and the triangle count uploaded under each.
    pub live: HashMap<Uuid, usize>,
    pub uploads: usize,
    pub releases: usize,
    /// Fail every upload after this many succeeded.
    pub fail_after: Option<usize>,
    /// Reject every release, leaving the mesh live.
    pub fail_releases: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_triangles(&self) -> usize {
        self.live.values().sum()
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_mesh(
        &mut self,
        mesh: &TriangleMesh,
        _material: &Material,
    ) -> Result<MeshHandle, SceneError> {
        if self.fail_after.is_some_and(|limit| self.uploads >= limit) {
            return Err(SceneError::Backend("out of buffer memory".into()));
        }
        let id = Uuid::new_v4();
        self.live.insert(id, mesh.triangle_count());
        self.uploads += 1;
        Ok(MeshHandle(id))
    }

    fn release_mesh(&mut self, handle: MeshHandle) -> Result<(), SceneError> {
        if self.fail_releases {
            return Err(SceneError::Backend("release rejected".into()));
        }
        self.live
            .remove(&handle.0)
            .ok_or(SceneError::UnknownHandle(handle.0))?;
        self.releases += 1;
        Ok(())
    }
}

/// A scene graph together with the backend resources uploaded for it.
pub struct SceneHandle<B: RenderBackend> {
    id: Uuid,
    backend: B,
    graph: Option<SceneGraph>,
    handles: Vec<MeshHandle>,
}

impl<B: RenderBackend> SceneHandle<B> {
    /// Build the scene for `assembly` and upload every node.
    pub fn create(
        backend: B,
        assembly: &Assembly,
        options: &SceneOptions,
    ) -> Result<Self, SceneError> {
        let mut handle = Self {
            id: Uuid::new_v4(),
            backend,
            graph: None,
            handles: Vec::new(),
        };
        handle.install(SceneGraph::build(assembly, options))?;
        info!(scene = %handle.id, meshes = handle.handles.len(), "scene created");
        Ok(handle)
    }

    /// Replace the scene with one for a new assembly. Camera state carries over.
    /// If the old meshes cannot be released the handle ends up disposed.
    pub fn update(&mut self, assembly: &Assembly, options: &SceneOptions) -> Result<(), SceneError> {
        let previous = self.graph.as_ref().ok_or(SceneError::Disposed { id: self.id })?;
        let mut graph = SceneGraph::build(assembly, options);
        graph.controls.yaw = previous.controls.yaw;
        graph.controls.pitch = previous.controls.pitch;
        graph.controls.apply(&mut graph.camera);

        if let Err(e) = self.release_all() {
            self.graph = None;
            return Err(e);
        }
        self.install(graph)?;
        debug!(scene = %self.id, meshes = self.handles.len(), "scene updated");
        Ok(())
    }

    /// Advance the animation loop by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Result<(), SceneError> {
        let graph = self.graph.as_mut().ok_or(SceneError::Disposed { id: self.id })?;
        graph.tick(dt);
        Ok(())
    }

    /// Release every backend resource. The handle is unusable afterwards.
    pub fn dispose(&mut self) -> Result<(), SceneError> {
        if self.graph.take().is_none() {
            return Err(SceneError::Disposed { id: self.id });
        }
        self.release_all()?;
        info!(scene = %self.id, "scene disposed");
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn graph(&self) -> Option<&SceneGraph> {
        self.graph.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn mesh_handles(&self) -> &[MeshHandle] {
        &self.handles
    }

    pub fn is_disposed(&self) -> bool {
        self.graph.is_none()
    }

    /// Upload all nodes of `graph`. On failure, uploads made so far are
    /// released again and the handle holds no graph.
    fn install(&mut self, graph: SceneGraph) -> Result<(), SceneError> {
        for node in &graph.nodes {
            match self.backend.upload_mesh(&node.mesh, &node.material) {
                Ok(h) => self.handles.push(h),
                Err(e) => {
                    warn!(scene = %self.id, error = %e, "upload failed, rolling back");
                    self.graph = None;
                    if let Err(release) = self.release_all() {
                        warn!(scene = %self.id, error = %release, "rollback release failed");
                    }
                    return Err(e);
                }
            }
        }
        self.graph = Some(graph);
        Ok(())
    }

    /// Release every held mesh, reporting the first failure.
    fn release_all(&mut self) -> Result<(), SceneError> {
        let mut first_err = None;
        for h in std::mem::take(&mut self.handles) {
            if let Err(e) = self.backend.release_mesh(h) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl<B: RenderBackend> Drop for SceneHandle<B> {
    fn drop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        debug!(scene = %self.id, meshes = self.handles.len(), "releasing meshes on drop");
        if let Err(e) = self.release_all() {
            warn!(scene = %self.id, error = %e, "failed to release meshes on drop");
        }
    }
}
