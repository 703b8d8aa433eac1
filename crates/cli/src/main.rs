use std::path::PathBuf;
use std::process;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tsbuild_core::{DEFAULT_COMPILER, Ticker, copy_assets, run_compiler};
use tsbuild_platform::clear_screen;

/// tsbuild - optimised production build orchestrator
#[derive(Parser)]
#[command(name = "tsbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Compiler program to invoke
    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    /// Build output directory
    #[arg(long, default_value = "./build")]
    build_dir: PathBuf,

    /// Documentation file copied into the build directory
    #[arg(long, default_value = "./README.md")]
    readme: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();

    run(&cli)?;

    let end = Local::now().format("%H:%M:%S");
    println!("{} {}", style("Done!").green().bold(), end);

    // Status 0 even when the compiler itself failed; only a fatal copy
    // error above reaches the caller as a non-zero exit.
    process::exit(0);
}

/// Run the build sequence: compile, then refresh the documentation file,
/// with a screen clear between phases.
fn run(cli: &Cli) -> Result<()> {
    debug!(
        compiler = %cli.compiler,
        build_dir = %cli.build_dir.display(),
        readme = %cli.readme.display(),
        "starting build sequence"
    );

    clear_screen();

    let ticker = Ticker::start("Compiling");
    run_compiler(&cli.compiler);
    ticker.finish();

    clear_screen();

    let ticker = Ticker::start("Copying assets");
    let copied = copy_assets(&cli.readme, &cli.build_dir);
    ticker.finish();
    copied?;

    clear_screen();

    Ok(())
}
