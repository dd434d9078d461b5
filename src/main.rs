use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use git_version_builder::cli::{run_generate, GenerateArgs, WriteMode};
use git_version_builder::config;
use git_version_builder::git::Git2Repository;
use git_version_builder::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-version",
    version,
    about = "Generate version constants for C++, Python or Rust from git tags"
)]
struct Args {
    #[arg(short, long, help = "Output format: cpp, python or rust")]
    lang: Option<String>,

    #[arg(short, long, help = "File to generate")]
    output: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Repository to describe")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Length of the abbreviated commit id")]
    abbrev: Option<u32>,

    #[arg(long, conflicts_with = "check", help = "Print the generated file instead of writing it")]
    stdout: bool,

    #[arg(long, help = "Fail if the generated file is out of date")]
    check: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    fn write_mode(&self) -> WriteMode {
        if self.stdout {
            WriteMode::Stdout
        } else if self.check {
            WriteMode::Check
        } else {
            WriteMode::Write
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let generate_args = match GenerateArgs::resolve(
        args.lang.as_deref(),
        args.output.clone(),
        args.abbrev,
        args.write_mode(),
        &config,
    ) {
        Ok(generate_args) => generate_args,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let result = run_generate(&repo, &generate_args).with_context(|| {
        format!(
            "failed to generate {} from {}",
            generate_args.output.display(),
            args.repo.display()
        )
    });
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    match generate_args.mode {
        WriteMode::Stdout => print!("{}", result.content),
        WriteMode::Check => {
            if result.changed {
                ui::display_error(&format!("{} is out of date", result.output.display()));
                std::process::exit(1);
            }
            ui::display_success(&format!("{} is up to date", result.output.display()));
        }
        WriteMode::Write => {
            if result.changed {
                ui::display_success(&format!(
                    "Wrote {} ({})",
                    result.output.display(),
                    generate_args.format
                ));
            }
            ui::display_version(&result.info);
        }
    }

    Ok(())
}
