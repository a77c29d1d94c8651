//! Headless driver for the camera/transform pipeline.
//!
//! Builds a small scene (a camera, a parent sprite with an orbiting child),
//! then runs a fixed number of ticks:
//!
//! 1. gameplay moves the camera and spins the parent;
//! 2. `propagate_transforms` pushes parent matrices into children;
//! 3. the camera update publishes the view matrix;
//! 4. `collect_draw_list` composes screen matrices for every sprite.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 5 --zoom-delta 1 --json
//! ```

use affineview::components::camera::Camera;
use affineview::components::sprite::Sprite;
use affineview::components::transform2d::Transform2D;
use affineview::components::zindex::ZIndex;
use affineview::resources::currentview::CurrentView;
use affineview::resources::drawlist::DrawList;
use affineview::resources::gameconfig::GameConfig;
use affineview::resources::zoominput::ZoomInput;
use affineview::systems::camera::CameraUpdate;
use affineview::systems::propagate_transforms::propagate_transforms;
use affineview::systems::render::collect_draw_list;
use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::DVec2;
use serde::Serialize;
use std::path::PathBuf;

/// Affine view demo
#[derive(Parser)]
#[command(
    version,
    about = "Runs the 2D camera/transform pipeline headless and reports the view matrix."
)]
struct Cli {
    /// INI configuration file. Defaults are used when missing or invalid.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 3)]
    ticks: u32,

    /// Zoom delta fed as input on every tick (needs interactive zoom).
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    zoom_delta: f64,

    /// Print one JSON line per tick to stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DrawReport {
    tex_key: String,
    z: i32,
    matrix: [f64; 6],
}

#[derive(Serialize)]
struct TickReport {
    tick: u32,
    zoom: f64,
    view: Option<[f64; 6]>,
    draws: Vec<DrawReport>,
}

#[derive(Component)]
struct Spinner {
    degrees_per_tick: f64,
}

fn gameplay(
    mut cameras: Query<&mut Transform2D, (With<Camera>, Without<Spinner>)>,
    mut spinners: Query<(&mut Transform2D, &Spinner)>,
) {
    for mut transform in cameras.iter_mut() {
        let position = transform.position();
        transform.set_position(position + DVec2::new(8.0, 0.0));
    }
    for (mut transform, spinner) in spinners.iter_mut() {
        let (degrees, _) = transform.rotation();
        transform.set_rotation(degrees + spinner.degrees_per_tick);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }
    let mut settings = config.camera_settings();
    if cli.zoom_delta != 0.0 {
        settings.interactive_zoom = true;
    }

    let screen = config.screen_size();
    let viewport_size = DVec2::new(screen.w as f64, screen.h as f64);
    let camera = match Camera::new_with(viewport_size, config.zoom) {
        Ok(camera) => camera,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(screen);
    world.insert_resource(settings);
    world.insert_resource(ZoomInput::default());
    world.insert_resource(CurrentView::new());
    world.insert_resource(DrawList::default());

    world.spawn((Transform2D::new(), camera));

    let parent = world
        .spawn((
            Transform2D::new_with(DVec2::new(320.0, 180.0), DVec2::ONE, DVec2::ZERO, 0.0),
            Sprite::new("planet", 64.0, 64.0).with_anchor(0.5, 0.5),
            ZIndex(0),
            Spinner {
                degrees_per_tick: 15.0,
            },
        ))
        .id();
    world.spawn((
        Transform2D::new_with(DVec2::new(96.0, 0.0), DVec2::splat(0.5), DVec2::ZERO, 0.0),
        Sprite::new("moon", 32.0, 32.0).with_anchor(0.5, 0.5),
        ZIndex(1),
        ChildOf(parent),
    ));
    world.flush();

    let mut before_camera = Schedule::default();
    before_camera.add_systems((gameplay, propagate_transforms).chain());
    let mut after_camera = Schedule::default();
    after_camera.add_systems(collect_draw_list);

    let mut camera_update = CameraUpdate::new();

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        world.resource_mut::<ZoomInput>().delta = cli.zoom_delta;

        before_camera.run(&mut world);
        if let Err(e) = camera_update.update(&mut world) {
            log::warn!("tick {tick}: camera update failed: {e}");
        }
        after_camera.run(&mut world);

        let view = world.resource::<CurrentView>().get();
        let zoom = {
            let mut q = world.query::<&Camera>();
            q.iter(&world).next().map(|c| c.zoom()).unwrap_or(0.0)
        };
        log::info!("tick {tick}: zoom={zoom:.3} view={view:?}");

        if cli.json {
            let report = TickReport {
                tick,
                zoom,
                view: view.map(|v| v.to_cols_array()),
                draws: world
                    .resource::<DrawList>()
                    .commands
                    .iter()
                    .map(|c| DrawReport {
                        tex_key: c.tex_key.clone(),
                        z: c.z,
                        matrix: c.screen_matrix.to_cols_array(),
                    })
                    .collect(),
            };
            match serde_json::to_string(&report) {
                Ok(line) => println!("{line}"),
                Err(e) => log::error!("failed to serialize tick report: {e}"),
            }
        }

        world.clear_trackers();
    }
}
