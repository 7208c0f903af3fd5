//! Render one URL offline and print the document.
//!
//! Status and redirect target go to stderr, the HTML to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ssr_server::config::{resolve_config, Environment};
use ssr_server::observability::logging::init_stderr_logging;
use ssr_server::bootstrap;

#[derive(Parser)]
#[command(name = "ssr-render")]
#[command(about = "Render a single page to stdout", long_about = None)]
struct Cli {
    /// URL path and query to render, e.g. `/posts?page=2`.
    #[arg(default_value = "/")]
    url: String,

    /// Config file (defaults to ./ssr.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `styles.environment` (development | production).
    #[arg(short, long)]
    env: Option<Environment>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(env) = cli.env {
        config.styles.environment = env;
    }
    init_stderr_logging(&config.observability);

    let pipeline = bootstrap(&config)?;
    let page = pipeline.render_page(&cli.url)?;

    eprintln!("status: {}", page.status);
    if let Some(location) = &page.location {
        eprintln!("location: {}", location);
    }
    println!("{}", page.body);
    Ok(())
}
