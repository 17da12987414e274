//! fibseq — Fibonacci sequence generator with anchored sub-ranges.

use fibseq_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(e) = app::run(&config) {
        fibseq_cli::ui::print_error(&format!("{e:#}"));
        std::process::exit(errors::exit_code(&e));
    }
}
