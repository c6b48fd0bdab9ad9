use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for the interactive UI.
pub const LOG_FILE_ENV: &str = "STUDYSPARK_LOG";

/// Initialize tracing for the interactive UI.
///
/// Nothing is logged unless `STUDYSPARK_LOG` names a file; writing to the
/// terminal would corrupt the display. The file gets a `.{timestamp}.{pid}`
/// suffix so concurrent instances do not share it.
pub fn init_tui_tracing() {
    let Some(log_path) = std::env::var(LOG_FILE_ENV).ok().filter(|p| !p.trim().is_empty())
    else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(file_layer)
        .try_init();
}

/// Initialize tracing for headless subcommands: stderr, `warn` by default.
pub fn init_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
