//! folio entry point.
//!
//! Launch the interactive terminal:
//! ```bash
//! cargo run -p folio-repl -- --start /about
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use folio_repl::{Cli, Settings};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var); keep stdout for the shell
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli)?;
    folio_repl::run(settings)
}
