use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logging(level: &str) {
    let level = match level {
        "trace" => level,
        "debug" => level,
        "info" => level,
        "warn" => level,
        "error" => level,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            "info"
        }
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.parse().expect("static level directive"))
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(stdout_layer.with_filter(filter))
        .init();
}
