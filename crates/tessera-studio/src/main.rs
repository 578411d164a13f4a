use std::sync::Arc;

use anyhow::{Context, Result};
use tessera_engine::align::Placement;
use tessera_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::node::{Geometry, ImageId, Node};
use tessera_engine::paint::{Color, Paint, Pattern};
use tessera_engine::render::{RenderContext, View};
use tessera_engine::scene::{DrawCmd, DrawList};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let placement = match std::env::var("TESSERA_ASPECT") {
        Ok(value) => value
            .parse::<Placement>()
            .with_context(|| format!("invalid TESSERA_ASPECT value '{value}'"))?,
        Err(_) => Placement::default(),
    };

    let view = View::shared("studio", Viewport::new(320.0, 240.0));
    let scene = demo_scene(placement);

    let mut list = DrawList::new();
    let stats = {
        let mut ctx = RenderContext::new(&view);
        ctx.with_pass(&mut list, |ctx| ctx.paint(&scene))
            .context("failed to run paint pass")?
    };

    log::info!(
        "painted {} draw calls ({} pattern tiles, {} skipped patterns)",
        stats.draw_calls,
        stats.pattern_tiles,
        stats.skipped_patterns
    );
    for item in list.iter_in_paint_order() {
        log::info!("  {:<12} clip={:?}", cmd_name(&item.cmd), item.clip_rect);
    }

    // A context outliving its view must paint nothing.
    let mut late = DrawList::new();
    let mut ctx = RenderContext::new(&view);
    drop(view);
    let stats = ctx.with_pass(&mut late, |ctx| ctx.paint(&scene))?;
    log::info!("after view teardown: halted={} draws={}", stats.halted, late.len());

    Ok(())
}

fn demo_scene(placement: Placement) -> Node {
    let white = Color::from_srgb_u8(240, 240, 240, 255);
    let ink = Color::from_srgb_u8(30, 30, 60, 255);

    // Two-by-two checker cell, scaled to a quarter of whatever it fills.
    let checker_cell = Node::group(vec![
        Node::shape(Geometry::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)), ink),
        Node::shape(Geometry::Rect(Rect::new(10.0, 10.0, 10.0, 10.0)), ink),
    ]);
    let checker = Arc::new(Pattern::object_bounding_box(checker_cell, Rect::new(0.0, 0.0, 0.25, 0.25)));

    let dots = Paint::pattern(Pattern::user_space(
        Node::shape(Geometry::Circle { center: Vec2::new(4.0, 4.0), radius: 1.5 }, ink),
        Rect::new(0.0, 0.0, 8.0, 8.0),
    ));

    let icon = Node::group(vec![
        Node::shape(
            Geometry::RoundedRect { rect: Rect::new(0.0, 0.0, 24.0, 24.0), radii: CornerRadii::all(4.0) },
            white,
        ),
        Node::shape(Geometry::Circle { center: Vec2::new(12.0, 12.0), radius: 8.0 }, dots),
    ]);

    Node::group(vec![
        Node::shape(Geometry::Rect(Rect::new(0.0, 0.0, 80.0, 80.0)), Arc::clone(&checker)),
        Node::shape(Geometry::Rect(Rect::new(0.0, 0.0, 120.0, 40.0)), checker)
            .with_offset(Vec2::new(100.0, 20.0)),
        Node::viewport(Rect::new(0.0, 100.0, 200.0, 100.0), Rect::new(0.0, 0.0, 24.0, 24.0), placement, icon),
        Node::image(ImageId(1), Vec2::new(64.0, 48.0), Rect::new(220.0, 100.0, 80.0, 120.0), placement),
    ])
}

fn cmd_name(cmd: &DrawCmd) -> &'static str {
    match cmd {
        DrawCmd::Rect(_) => "rect",
        DrawCmd::RoundedRect(_) => "rounded_rect",
        DrawCmd::Circle(_) => "circle",
        DrawCmd::Image(_) => "image",
    }
}
