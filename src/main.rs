use std::time::{Duration, Instant};

mod app;
mod assets;
mod clock;
mod collision;
mod config;
mod craft;
mod error;
mod explosion;
mod geometry;
mod group;
mod gui;
mod input_system;
mod modes;
mod planet;
mod projectile;
mod record;
mod render;
mod text;
mod ui;

use app::{App, GAME_TITLE};
use assets::{texture_names, Assets};
use config::GameConfig;
use error::GameError;
use input_system::InputSystem;

/// Longest step fed to the simulation; a stalled frame must not tunnel
/// ships through planets
const MAX_FRAME_DT: f32 = 0.1;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::load_or_default();
    log::info!(
        "{}x{} @ {} fps, assets in {}",
        config.screen_width,
        config.screen_height,
        config.fps,
        config.asset_dir.display()
    );

    run(&config).map_err(|e| {
        log::error!("{}", e);
        e.to_string()
    })
}

fn run(config: &GameConfig) -> Result<(), GameError> {
    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Sdl)?;

    let window = video_subsystem
        .window("Star Doom", config.screen_width, config.screen_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    // Game logic always works in logical pixels
    canvas
        .set_logical_size(config.screen_width, config.screen_height)
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

    let assets = Assets::load(&texture_creator, &config.asset_dir, &texture_names());

    let mut input = InputSystem::new();
    let mut app = App::new(config);
    log::info!("{} ready", GAME_TITLE);

    let frame_time = Duration::new(0, 1_000_000_000u32 / config.fps.max(1));
    let mut last_frame = Instant::now();

    'running: loop {
        input.set_context(app.input_context());
        for action in input.poll_events(&mut event_pump) {
            app.handle_action(&action);
            if !app.is_running() {
                break 'running;
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_DT);
        last_frame = now;

        app.update(dt);
        if !app.is_running() {
            break 'running;
        }

        app.render(&mut canvas, &assets).map_err(GameError::Sdl)?;
        canvas.present();

        std::thread::sleep(frame_time);
    }

    log::info!("Goodbye");
    Ok(())
}
