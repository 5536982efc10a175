//! Assembles a small settings panel and drives it the way a host
//! toolkit's event dispatch would.
//!
//! Run with: `cargo run --example demo_panel`

use std::sync::Arc;

use armature::prelude::*;
use armature_core::ObjectTreeDebug;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    init_global_registry();

    // A labeled slider and an edit-slider inside a collapsible section.
    let mut section = CollapsibleGroupBox::new("Render Settings");

    let brightness = LabelSlider::new().with_maximum(255).with_value(128);
    section.add_child(Box::new(brightness));

    let mut opacity = EditFloatSlider::new(0.0, 1.0, 0.5, 2);
    opacity.value_changed.connect(|_| {
        println!("opacity committed");
    });

    // Decorate the opacity control with a status icon.
    let icons = Arc::new(
        StatusIconSet::new()
            .with_icon("ok", IconSource::new("check"))
            .with_icon("warn", IconSource::new("warning")),
    );
    let colors = Arc::new(
        StatusColorSet::new()
            .with_color("ok", Color::from_rgb8(0, 170, 0))
            .with_color("warn", Color::from_rgb8(230, 160, 0)),
    );
    let mut opacity = IconDecoration::new(opacity, icons, colors, 24.0);
    opacity.set_status(Some("ok"));
    section.add_child(Box::new(opacity));

    // Give the section a geometry, as the host layout would.
    section.set_geometry(Rect::new(0.0, 0.0, 480.0, 160.0));

    println!("panel tree:");
    let tree = ObjectTreeDebug::new();
    print!("{}", tree.format_subtree(section.object_id()).unwrap());

    // Collapse and expand the section.
    section.toggle();
    println!(
        "collapsed: children visible = {}",
        section.children().any(|c| c.is_visible())
    );
    section.toggle();
    println!(
        "expanded: children visible = {}",
        section.children().all(|c| c.is_visible())
    );
}
