use sash_types::{Bounds, Fill, Owner, Part, PartId, PartKind, Shape, Side};

/// Collects front-side parts and hands out sequential ids.
#[derive(Debug, Default)]
pub struct PartSink {
    parts: Vec<Part>,
}

impl PartSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        kind: PartKind,
        owner: Owner,
        shape: Shape,
        bounds: Bounds,
        fill: Fill,
    ) -> PartId {
        let id = PartId(self.parts.len() as u32);
        self.parts.push(Part {
            id,
            kind,
            owner,
            side: Side::Front,
            shape,
            bounds,
            fill,
            z_index: kind.layer().z_index(),
            counterpart: None,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }
}
