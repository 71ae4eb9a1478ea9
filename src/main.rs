use anyhow::{Context, Result};
use clap::Parser;
use repo_tidy::cli::{Args, Commands};
use repo_tidy::constants::{DEFAULT_PIPE_TARGET, SCAN_COMPLETE_MESSAGE, SCAN_START_PREFIX};
use repo_tidy::logger::{self, Verbosity};
use repo_tidy::{compress_directory, fix_pipes_in_file, info, CompressionOptions};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if args.quiet && args.verbose {
        repo_tidy::warn!("--quiet overrides --verbose");
    }
    logger::set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            repo_tidy::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Compress {
            directory,
            quality,
            keep_larger,
        } => {
            let options = CompressionOptions::new(quality, keep_larger)?;
            run_compress(directory, &options)?;
        }
        Commands::FixPipes { file } => {
            run_fix_pipes(file.unwrap_or_else(|| PathBuf::from(DEFAULT_PIPE_TARGET)))?;
        }
    }

    Ok(())
}

fn run_compress(directory: Option<PathBuf>, options: &CompressionOptions) -> Result<()> {
    let root = match directory {
        Some(dir) => dir,
        None => env::current_dir().context("cannot determine the current directory")?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot access {}", root.display()))?;

    info!("{} {}", SCAN_START_PREFIX, root.display());
    compress_directory(&root, options)?;
    info!("\n{}", SCAN_COMPLETE_MESSAGE);

    Ok(())
}

fn run_fix_pipes(path: PathBuf) -> Result<()> {
    let outcome = fix_pipes_in_file(&path)
        .with_context(|| format!("failed to fix pipes in {}", path.display()))?;
    info!("{}", outcome.message());
    Ok(())
}
