//! Layered 2D elements with CSS 3D transforms.
//!
//! Each side becomes a stack of absolutely positioned boxes. The back stack
//! is rotated half a turn about the vertical axis, so turning the stage shows
//! the interior through the product.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use assembly_engine::Assembly;
use sash_types::{ColorRole, Edge, Part, PartId, Shape, Side};

use crate::style::{css_color, fill_color};

/// Settings for the layered adapter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayeredOptions {
    /// Screen pixels per assembly unit.
    pub px_per_unit: f64,
    /// CSS `perspective` of the stage.
    pub perspective_px: f64,
    /// Exaggerates depth offsets; 1.0 is true scale.
    pub depth_scale: f64,
    /// Width of the rubber border drawn around leaf glass.
    pub leaf_border_px: f64,
    /// Stage rotation about the vertical axis, in degrees.
    pub yaw_deg: f64,
}

impl Default for LayeredOptions {
    fn default() -> Self {
        Self {
            px_per_unit: 0.25,
            perspective_px: 1200.0,
            depth_scale: 1.0,
            leaf_border_px: 1.0,
            yaw_deg: 0.0,
        }
    }
}

impl LayeredOptions {
    /// Small product cards.
    pub fn thumbnail() -> Self {
        Self {
            px_per_unit: 0.1,
            perspective_px: 600.0,
            ..Self::default()
        }
    }

    /// Large configurator preview with pronounced depth.
    pub fn detail() -> Self {
        Self {
            px_per_unit: 0.4,
            depth_scale: 1.5,
            leaf_border_px: 2.0,
            ..Self::default()
        }
    }

    /// Same options turned to look at the interior.
    pub fn inside_view(self) -> Self {
        Self {
            yaw_deg: 180.0,
            ..self
        }
    }
}

/// Outline of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementShape {
    Box,
    /// Hollow box drawn with a border of `band_px`.
    Ring { band_px: f64 },
    /// Triangle drawn with a `clip-path`.
    Triangle { apex: Edge },
}

/// One positioned element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerElement {
    pub part: PartId,
    /// CSS class, the part kind name.
    pub class: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub z_index: i32,
    pub shape: ElementShape,
    pub background: Option<String>,
    pub border: Option<String>,
    pub transform: String,
}

impl LayerElement {
    /// Inline CSS for this element.
    pub fn style(&self) -> String {
        let mut s = format!(
            "position:absolute;left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;z-index:{};transform:{};box-sizing:border-box",
            self.left, self.top, self.width, self.height, self.z_index, self.transform
        );
        if let Some(bg) = &self.background {
            let _ = write!(s, ";background:{bg}");
        }
        if let Some(border) = &self.border {
            let _ = write!(s, ";border:{border}");
        }
        if let ElementShape::Triangle { apex } = self.shape {
            let _ = write!(s, ";clip-path:{}", triangle_clip(apex));
        }
        s
    }
}

fn triangle_clip(apex: Edge) -> &'static str {
    match apex {
        Edge::Left => "polygon(0 50%, 100% 0, 100% 100%)",
        Edge::Right => "polygon(100% 50%, 0 0, 0 100%)",
        Edge::Top => "polygon(50% 0, 100% 100%, 0 100%)",
        Edge::Bottom => "polygon(50% 100%, 0 0, 100% 0)",
    }
}

/// All elements of one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredSide {
    pub side: Side,
    /// Transform of the side container.
    pub transform: String,
    /// Sorted back to front.
    pub elements: Vec<LayerElement>,
}

/// Both sides of an assembly as layered elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredView {
    pub width_px: f64,
    pub height_px: f64,
    pub perspective_px: f64,
    pub yaw_deg: f64,
    pub front: LayeredSide,
    pub back: LayeredSide,
}

impl LayeredView {
    pub fn build(assembly: &Assembly, options: &LayeredOptions) -> Self {
        let s = options.px_per_unit;
        let half_depth = assembly.depth * 0.5;
        let origin = (assembly.footprint.x, assembly.footprint.y);

        let side_view = |side: Side| {
            let mut elements: Vec<LayerElement> = assembly
                .parts_on(side)
                .map(|p| element(assembly, p, origin, half_depth, options))
                .collect();
            elements.sort_by_key(|e| e.z_index);
            LayeredSide {
                side,
                transform: match side {
                    Side::Front => "none".to_string(),
                    Side::Back => "rotateY(180deg)".to_string(),
                },
                elements,
            }
        };

        let view = Self {
            width_px: assembly.footprint.width * s,
            height_px: assembly.footprint.height * s,
            perspective_px: options.perspective_px,
            yaw_deg: options.yaw_deg,
            front: side_view(Side::Front),
            back: side_view(Side::Back),
        };
        debug!(
            front = view.front.elements.len(),
            back = view.back.elements.len(),
            "layered view built"
        );
        view
    }

    pub fn side(&self, side: Side) -> &LayeredSide {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }

    /// Standalone HTML fragment of the stage.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div class=\"stage\" style=\"perspective:{:.0}px;width:{:.2}px;height:{:.2}px\">\n\
             <div class=\"assembly\" style=\"position:relative;width:100%;height:100%;transform-style:preserve-3d;transform:rotateY({:.1}deg)\">\n",
            self.perspective_px, self.width_px, self.height_px, self.yaw_deg
        );
        for side in [&self.front, &self.back] {
            let name = match side.side {
                Side::Front => "front",
                Side::Back => "back",
            };
            let _ = writeln!(
                html,
                "<div class=\"side {name}\" style=\"position:absolute;inset:0;transform-style:preserve-3d;backface-visibility:hidden;transform:{}\">",
                side.transform
            );
            for e in &side.elements {
                let _ = writeln!(
                    html,
                    "<div class=\"{}\" data-part=\"{}\" style=\"{}\"></div>",
                    e.class,
                    e.part.0,
                    e.style()
                );
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n</div>\n");
        html
    }
}

fn element(
    assembly: &Assembly,
    part: &Part,
    origin: (f64, f64),
    half_depth: f64,
    options: &LayeredOptions,
) -> LayerElement {
    let s = options.px_per_unit;
    let rect = part.bounds.rect;
    let (rgb, alpha) = fill_color(&part.fill, &assembly.palette);
    let color = css_color(rgb, alpha);

    // Distance of the visible face in front of the mid-plane, toward this side's viewer.
    let lift = match part.side {
        Side::Front => half_depth - part.bounds.z,
        Side::Back => part.bounds.z_end() - half_depth,
    };
    let transform = format!("translateZ({:.2}px)", lift * s * options.depth_scale);

    let (shape, background, border) = match part.shape {
        Shape::Rect if part.kind.is_glass_panel() => {
            let rubber = assembly.palette.rgb(ColorRole::Rubber);
            (
                ElementShape::Box,
                Some(color),
                Some(format!("{:.2}px solid {}", options.leaf_border_px, rubber)),
            )
        }
        Shape::Rect => (ElementShape::Box, Some(color), None),
        Shape::Ring { band } => {
            let band_px = band * s;
            (
                ElementShape::Ring { band_px },
                None,
                Some(format!("{band_px:.2}px solid {color}")),
            )
        }
        Shape::Triangle { apex } => (ElementShape::Triangle { apex }, Some(color), None),
    };

    LayerElement {
        part: part.id,
        class: part.kind.name().to_string(),
        left: (rect.x - origin.0) * s,
        top: (rect.y - origin.1) * s,
        width: rect.width * s,
        height: rect.height * s,
        z_index: i32::from(part.z_index),
        shape,
        background,
        border,
        transform,
    }
}
