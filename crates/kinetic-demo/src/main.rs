use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use kinetic_render::coords::{Geometry, Vec2};
use kinetic_render::layer::LayerOptions;
use kinetic_render::logging::{init_logging, LoggingConfig};
use kinetic_render::paint::{palette, StyleRecord};
use kinetic_render::time::FrameClock;
use kinetic_render::world::{Bodies, Body, BodyId, World};
use kinetic_render::{Renderer, RendererConfig};

const FRAMES: u32 = 120;
const STEPS_PER_FRAME: u32 = 2;
const PLAYER: BodyId = BodyId(0);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("kinetic-demo.png"));

    let mut renderer = Renderer::new(RendererConfig::new().size(640, 480).meta(true))?;

    renderer.add_layer("follow", None, LayerOptions::new().centered().follow(PLAYER))?;
    renderer.add_layer(
        "minimap",
        None,
        LayerOptions::new().size(160, 120).auto_resize(false).scale(0.25).z_index(2),
    )?;

    let mut world = scene();
    // The follow layer shows the player and whatever is near it; main shows the rest.
    world.on_before_render(|event| {
        if let Some(follow) = event.renderer.layer_mut("follow") {
            follow.reset_stack([PLAYER, BodyId(1), BodyId(2)]);
        }
    });

    let mut clock = FrameClock::new();
    for _ in 0..FRAMES {
        let frame = clock.tick_by(Duration::from_millis(16));
        for _ in 0..STEPS_PER_FRAME {
            step(&mut world, frame.dt / STEPS_PER_FRAME as f32);
        }
        renderer.render(&mut world, &clock.meta(STEPS_PER_FRAME));
    }

    if let Some(meta) = renderer.meta() {
        log::info!("{}", meta.text().replace('\n', ", "));
    }

    let image = renderer.composite()?;
    image
        .save_png(&out)
        .with_context(|| format!("failed writing {}", out.display()))?;
    log::info!("wrote {}", out.display());

    Ok(())
}

fn scene() -> Bodies {
    let mut world = Bodies::new();

    world.insert(
        Body::new(PLAYER, Geometry::circle(18.0))
            .at(320.0, 240.0)
            .with_style(StyleRecord::filled(palette::gold(), 2.0).with_angle_indicator(palette::white())),
    );
    world.insert(Body::new(BodyId(1), Geometry::rectangle(60.0, 20.0)).at(200.0, 140.0));
    world.insert(
        Body::new(BodyId(2), Geometry::convex_polygon(vec![
            Vec2::new(0.0, -20.0),
            Vec2::new(18.0, 12.0),
            Vec2::new(-18.0, 12.0),
        ]))
        .at(460.0, 320.0)
        .with_style(StyleRecord::filled(palette::orange(), 1.0).with_stroke(palette::pink())),
    );
    world.insert(Body::new(BodyId(3), Geometry::circle(8.0)).at(100.0, 400.0));
    world.insert(Body::new(BodyId(4), Geometry::Point).at(10.0, 10.0));

    world
}

/// Toy motion: the player orbits the center, everything else spins in place.
fn step(world: &mut Bodies, dt: f32) {
    let center = Vec2::new(320.0, 240.0);
    for body in world.iter_mut() {
        body.angle += dt;
        if body.id == PLAYER {
            let radial = body.position - center;
            let orbit = if radial.length() > 1.0 { radial } else { Vec2::new(120.0, 0.0) };
            body.position = center + orbit.rotated(dt * 0.8);
        }
    }
    debug_assert!(world.bodies().iter().all(|b| b.position.is_finite()));
}
