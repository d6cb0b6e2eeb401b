//! Fear The Dead - chase scene preflight
//!
//! Loads the configuration and the chase scene, validates it, binds the
//! controller and reports what a host would be driving. Exits non-zero if
//! any of that fails.

use std::process::ExitCode;

use fear_the_dead::config::AppConfig;
use fear_the_dead::systems::SimulationSystem;
use ftd_core::SceneManager;

fn init_logging(config: &AppConfig) {
    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
}

fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let chase = config.chase_config()?;

    let mut scenes = SceneManager::new();
    let name = scenes.load_scene(&config.scene.path)?;

    let mut system =
        SimulationSystem::new(scenes, name.as_str(), chase).with_window(&config.window);
    system.start()?;

    let controller = system.controller();
    let graph = system
        .scenes()
        .active_graph()
        .ok_or("chase scene did not become active")?;

    log::info!(
        "Scene '{}': {} nodes, {} zombie(s), camera {:?}",
        name,
        graph.node_count(),
        controller.zombies().len(),
        graph.camera_position()
    );
    log::info!(
        "Window '{}' {}x{} (fullscreen: {}), touch view centred on {:?}",
        config.window.title,
        config.window.width,
        config.window.height,
        system.is_fullscreen(),
        system.view().camera
    );
    log::info!(
        "Player speed {}, zombie speed {}, zombie sound '{}'",
        controller.config().player_speed,
        controller.config().zombie_speed,
        controller.config().zombie_sound
    );
    log::info!(
        "Result transition: {} ({:.2}s)",
        controller.config().result_transition.name(),
        controller.config().result_transition.duration().as_secs_f32()
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&AppConfig::default());
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);
    log::info!("Starting Fear The Dead preflight");

    match run(&config) {
        Ok(()) => {
            log::info!("Preflight passed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Preflight failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
