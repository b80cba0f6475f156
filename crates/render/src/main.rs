//! Write SVG and HTML previews of sample configurations.
//!
//! Usage: `render_previews [OUT_DIR] [CATALOG_JSON]`. Output goes to
//! `docs/previews` by default; the built-in catalog is used unless a catalog
//! file is given. Set `RUST_LOG=debug` to see every assembly step.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use assembly_engine::{Assembler, Assembly, AssemblyConfig};
use catalog::{load_catalog, Catalog};
use presentation::{scene_to_svg, LayeredOptions, LayeredView, SceneGraph, SceneOptions};
use sash_types::{
    ColorSelection, Configuration, OpeningDirection, PartKind, ProductType, Side, WindowType,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct Sample {
    name: &'static str,
    title: &'static str,
    config: Configuration,
}

fn colors(base: &str, outside: &str, inside: &str) -> ColorSelection {
    ColorSelection {
        base: base.into(),
        outside: outside.into(),
        inside: inside.into(),
        rubber: "black".into(),
    }
}

fn window(
    window_type: WindowType,
    opening_direction: OpeningDirection,
    profile: &str,
    glazing: &str,
    width: f64,
    height: f64,
) -> Configuration {
    Configuration {
        product_type: ProductType::Window,
        window_type,
        opening_direction,
        profile_id: profile.into(),
        glazing_id: glazing.into(),
        colors: colors("white", "anthracite", "white"),
        width,
        height,
    }
}

fn door(profile: &str, width: f64, height: f64) -> Configuration {
    Configuration {
        product_type: ProductType::Door,
        window_type: WindowType::SingleLeaf,
        opening_direction: OpeningDirection::Left,
        profile_id: profile.into(),
        glazing_id: "glz-double".into(),
        colors: colors("white", "walnut", "golden-oak"),
        width,
        height,
    }
}

fn samples() -> Vec<Sample> {
    vec![
        Sample {
            name: "fixed",
            title: "Fixed window, ideal-4000, double glazing",
            config: window(WindowType::Fixed, OpeningDirection::Fixed, "ideal-4000", "glz-double", 800.0, 1000.0),
        },
        Sample {
            name: "single_tilt",
            title: "Single leaf, top-left tilt, streamline-76",
            config: window(WindowType::SingleLeaf, OpeningDirection::TopLeft, "streamline-76", "glz-triple", 900.0, 1300.0),
        },
        Sample {
            name: "double_left",
            title: "Double leaf, left, bluEvolution-82, triple glazing",
            config: window(WindowType::DoubleLeaf, OpeningDirection::Left, "bluEvolution-82", "glz-triple", 1200.0, 1400.0),
        },
        Sample {
            name: "triple_right",
            title: "Triple leaf, right, bluEvolution-92, quad glazing",
            config: window(WindowType::TripleLeaf, OpeningDirection::Right, "bluEvolution-92", "glz-quad", 2100.0, 1500.0),
        },
        Sample {
            name: "door_classic",
            title: "Door, classic",
            config: door("door-classic", 1000.0, 2100.0),
        },
        Sample {
            name: "door_premium",
            title: "Door, premium with lower glass band",
            config: door("door-premium", 1100.0, 2200.0),
        },
        Sample {
            name: "door_solid",
            title: "Door, solid panel",
            config: door("door-solid", 900.0, 2000.0),
        },
    ]
}

fn report(name: &str, assembly: &Assembly, scene: &SceneGraph) {
    println!(
        "  {name}: {front} parts per side, {leaves} leaves, {hw} hardware, {tris} tris, {clamped} clamped",
        front = assembly.parts_on(Side::Front).count(),
        leaves = assembly.leaves(Side::Front).len(),
        hw = assembly.count(Side::Front, PartKind::is_hardware),
        tris = scene.triangle_count(),
        clamped = assembly.diagnostics.clamped_parts,
    );
    for w in &assembly.diagnostics.warnings {
        println!("    warning: {w}");
    }
}

fn write_sample(out: &Path, sample: &Sample, assembly: &Assembly) -> Result<(), Box<dyn Error>> {
    let outside = SceneGraph::build(assembly, &SceneOptions::default());
    let svg = scene_to_svg(&outside, 480.0, 420.0, sample.title);
    fs::write(out.join(format!("{}_outside.svg", sample.name)), svg)?;

    let mut inside = SceneGraph::build(assembly, &SceneOptions::default());
    inside.controls.look_at_side(Side::Back);
    inside.controls.apply(&mut inside.camera);
    let svg = scene_to_svg(&inside, 480.0, 420.0, &format!("{} (inside)", sample.title));
    fs::write(out.join(format!("{}_inside.svg", sample.name)), svg)?;

    let front = LayeredView::build(assembly, &LayeredOptions::thumbnail());
    let back = LayeredView::build(assembly, &LayeredOptions::thumbnail().inside_view());
    let html = format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body style=\"display:flex;gap:48px;padding:32px;background:#f4f4f0\">\n{}\n{}\n</body></html>\n",
        front.to_html(),
        back.to_html(),
        title = sample.title,
    );
    fs::write(out.join(format!("{}.html", sample.name)), html)?;

    report(sample.name, assembly, &outside);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let out = PathBuf::from(args.next().unwrap_or_else(|| "docs/previews".into()));
    let catalog = match args.next() {
        Some(path) => load_catalog(&fs::read_to_string(&path)?)?,
        None => Catalog::default(),
    };
    fs::create_dir_all(&out)?;
    info!(out = %out.display(), "rendering previews");

    let mut assembler = Assembler::new(catalog, AssemblyConfig::default());

    println!("=== Windows and doors ===");
    for sample in samples() {
        let assembly = assembler.assemble(&sample.config);
        write_sample(&out, &sample, &assembly)?;
    }

    let stats = assembler.stats();
    info!(hits = stats.hits, misses = stats.misses, "done");
    println!("\nPreviews written to {}", out.display());
    Ok(())
}
