mod app_state;
mod cli;

use odyssey_common::ExplorerError;
use odyssey_config::schema::ExplorerConfig;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_DIRECTIVE: &str = "odyssey=info";

fn main() {
    let args = cli::parse();

    // Loaded before logging starts so `logging.level` can shape the filter.
    // The loader stays silent; everything is reported below.
    let loaded = odyssey_config::load_config(args.config.as_deref());

    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => format!("odyssey={}", config.logging.level.as_directive()),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Odyssey Explorer v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => {
            match args.config {
                Some(ref path) => tracing::info!("Using config override: {}", path.display()),
                None => match odyssey_config::toml_loader::default_config_path() {
                    Ok(path) => tracing::info!("Using config: {}", path.display()),
                    Err(e) => tracing::debug!("Config path unknown: {e}"),
                },
            }
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ExplorerConfig::default()
        }
    };
    if let Err(e) = odyssey_config::validation::validate(&config) {
        tracing::warn!("Config has out-of-range values, keeping them: {e}");
    }

    if args.dump_config {
        println!("{}", odyssey_config::config_to_json(&config));
        return;
    }

    let seed = args.seed.or(config.debug.seed);

    if let Err(e) = run(config, seed) {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Build the scene and drive the event loop until the window closes or a
/// setup or frame error stops it.
fn run(config: ExplorerConfig, seed: Option<u64>) -> odyssey_common::Result<()> {
    let event_loop = EventLoop::new()
        .map_err(|e| ExplorerError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::ExplorerApp::new(config, seed);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| ExplorerError::Window(format!("event loop error: {e}")))?;

    match app.take_failure() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
