use popshot_app::config::AppConfig;
use popshot_app::error::AppError;
use popshot_app::scripted::ScriptedHands;

/// Demo cycles fed when no frame limit is set.
const DEMO_CYCLES: usize = 10;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let summary = popshot_app::run_headless(config, ScriptedHands::demo(DEMO_CYCLES))?;
    tracing::info!(
        frames = summary.frames,
        targets = summary.targets_spawned,
        projectiles = summary.projectiles_spawned,
        collisions = summary.collisions,
        "run complete"
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    if let Err(err) = run() {
        tracing::error!(%err, "popshot failed");
        std::process::exit(1);
    }
}
