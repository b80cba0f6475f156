use serde::{Deserialize, Serialize};

use crate::color::ColorRole;
use crate::config::HingeSide;
use crate::geometry::{Bounds, Edge};

/// Index of a part within one assembly. Stable for identical configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartId(pub u32);

/// Which face of the product a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// Exterior view.
    Front,
    /// Interior view, rendered rotated 180 degrees about the vertical axis.
    Back,
}

impl Side {
    pub fn flipped(self) -> Self {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

/// Door glass cutouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlassBand {
    /// 20 % to 50 % of the door height.
    Upper,
    /// 60 % to 80 % of the door height, premium profiles only.
    Lower,
}

/// The structural unit a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Owner {
    Frame,
    Leaf { index: usize },
    Door,
    DoorGlass { band: GlassBand },
}

/// What a part is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PartKind {
    /// Visible face of one frame bar.
    FrameEdge { edge: Edge },
    /// Depth-extruded body of one frame bar, always in the base color.
    FrameDepth { edge: Edge },
    /// Glass opening of a window leaf.
    Leaf,
    /// Decorative glazing hairline inside a glass panel.
    GlazingLine { index: usize },
    /// Rubber gasket around a glass opening.
    Seal,
    /// Vertical bar between two adjacent leaves.
    Mullion { index: usize },
    /// Opening-direction glyph. Its apex points at the hinge edge.
    Indicator { hinge: HingeSide, tilt: bool },
    Handle,
    Hinge { index: usize },
    /// Solid door leaf inside the door frame.
    DoorPanel,
    /// Glass cutout of a door panel.
    DoorGlass { band: GlassBand },
}

impl PartKind {
    pub fn layer(&self) -> Layer {
        match self {
            PartKind::FrameDepth { .. } => Layer::FrameDepth,
            PartKind::FrameEdge { .. } => Layer::Frame,
            PartKind::DoorPanel => Layer::Panel,
            PartKind::Mullion { .. } => Layer::Mullion,
            PartKind::Leaf | PartKind::DoorGlass { .. } => Layer::Glass,
            PartKind::GlazingLine { .. } => Layer::GlazingLine,
            PartKind::Seal => Layer::Seal,
            PartKind::Indicator { .. } => Layer::Indicator,
            PartKind::Handle | PartKind::Hinge { .. } => Layer::Hardware,
        }
    }

    pub fn is_glass_panel(&self) -> bool {
        matches!(self, PartKind::Leaf | PartKind::DoorGlass { .. })
    }

    pub fn is_hardware(&self) -> bool {
        matches!(self, PartKind::Handle | PartKind::Hinge { .. })
    }

    /// Short lowercase name used for CSS classes and scene node names.
    pub fn name(&self) -> &'static str {
        match self {
            PartKind::FrameEdge { .. } => "frame",
            PartKind::FrameDepth { .. } => "frame-depth",
            PartKind::Leaf => "leaf",
            PartKind::GlazingLine { .. } => "glazing-line",
            PartKind::Seal => "seal",
            PartKind::Mullion { .. } => "mullion",
            PartKind::Indicator { .. } => "indicator",
            PartKind::Handle => "handle",
            PartKind::Hinge { .. } => "hinge",
            PartKind::DoorPanel => "door-panel",
            PartKind::DoorGlass { .. } => "door-glass",
        }
    }
}

/// Paint order within one side, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Layer {
    FrameDepth,
    Frame,
    Panel,
    Mullion,
    Glass,
    GlazingLine,
    Seal,
    Indicator,
    Hardware,
}

impl Layer {
    pub fn z_index(self) -> u8 {
        self as u8
    }
}

/// Outline of a part within its footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Shape {
    Rect,
    /// Rectangular loop with a hole; `band` is the loop width.
    Ring { band: f64 },
    /// Triangle filling the footprint, apex at the middle of `apex`.
    Triangle { apex: Edge },
}

/// Fills that are not bound to a user color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeutralTone {
    Hairline,
    Hardware,
    Indicator,
}

/// Material binding of a part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fill {
    Role { role: ColorRole },
    Glass { opacity: f64 },
    Neutral { tone: NeutralTone },
}

impl Fill {
    pub fn role(role: ColorRole) -> Self {
        Fill::Role { role }
    }

    pub fn color_role(&self) -> Option<ColorRole> {
        match self {
            Fill::Role { role } => Some(*role),
            _ => None,
        }
    }
}

/// One positioned, colored piece of the assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub kind: PartKind,
    pub owner: Owner,
    pub side: Side,
    pub shape: Shape,
    pub bounds: Bounds,
    pub fill: Fill,
    pub z_index: u8,
    /// The same part on the opposite side, once composed.
    pub counterpart: Option<PartId>,
}

impl Part {
    pub fn leaf_index(&self) -> Option<usize> {
        match self.owner {
            Owner::Leaf { index } => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_ordered_back_to_front() {
        assert!(Layer::FrameDepth.z_index() < Layer::Frame.z_index());
        assert!(Layer::Glass.z_index() < Layer::GlazingLine.z_index());
        assert!(Layer::Indicator.z_index() < Layer::Hardware.z_index());
        assert_eq!(PartKind::Handle.layer(), Layer::Hardware);
    }

    #[test]
    fn test_glass_panels() {
        assert!(PartKind::Leaf.is_glass_panel());
        assert!(PartKind::DoorGlass {
            band: GlassBand::Upper
        }
        .is_glass_panel());
        assert!(!PartKind::Seal.is_glass_panel());
    }

    #[test]
    fn test_part_kind_tagged_serde() {
        let json = serde_json::to_value(PartKind::Mullion { index: 1 }).unwrap();
        assert_eq!(json["type"], "mullion");
        assert_eq!(json["index"], 1);
    }
}
