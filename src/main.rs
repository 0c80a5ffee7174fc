use clap::Parser;
use mockforge::cli::{Cli, Commands, Verbosity};
use mockforge::config::Config;
use mockforge::ui::formatter::Formatter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing(verbosity: Verbosity) {
    let fallback_filter = format!("mockforge={}", verbosity.to_log_level());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("MOCKFORGE_LOG_JSON").is_ok() {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}

fn main() -> miette::Result<()> {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();

    // The config may set the default verbosity, so it is read before tracing
    // is up and any failure is reported afterwards.
    let loaded = Config::load();
    let verbosity = match (&loaded, cli.quiet, cli.verbose) {
        (Ok(config), false, 0) => config
            .logging
            .verbosity
            .map(Verbosity::from_level)
            .unwrap_or(Verbosity::Normal),
        _ => cli.verbosity(),
    };

    initialize_tracing(verbosity);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    let result = match cli.command {
        Commands::Inspect(args) => mockforge::cli::commands::inspect(args, &config),
        Commands::Run(args) => mockforge::cli::commands::run(args, &config),
    };

    if let Err(err) = result {
        eprintln!("{}", Formatter::error(format!("Error: {err}")));
        return Err(err);
    }
    Ok(())
}
