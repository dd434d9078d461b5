//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the generate workflow so the workflow
//! can be driven programmatically (and against a mock repository) without clap.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::VersionInfo;
use crate::error::Result;
use crate::git::Repository;
use crate::output::{self, Format};

/// What to do with the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write the output file if its content changed
    #[default]
    Write,
    /// Only report whether the output file is out of date
    Check,
    /// Leave the file system alone; the caller prints the content
    Stdout,
}

/// Arguments for the generate workflow, after config and CLI are merged
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    pub format: Format,
    pub output: PathBuf,
    pub abbrev: u32,
    pub mode: WriteMode,
}

impl GenerateArgs {
    /// Merge command line overrides with the loaded configuration
    ///
    /// The format is taken from `lang`, then the config, then the extension of
    /// the output path, falling back to C++. The output path is taken from
    /// `output`, then the config, then the format's default file name.
    ///
    /// # Returns
    /// * `Ok(GenerateArgs)` - Fully resolved arguments
    /// * `Err(UnsupportedFormat)` - If a format name is given but not recognized
    pub fn resolve(
        lang: Option<&str>,
        output: Option<PathBuf>,
        abbrev: Option<u32>,
        mode: WriteMode,
        config: &Config,
    ) -> Result<Self> {
        let output = output.or_else(|| config.output.file.clone());

        let format = match lang.or(config.output.lang.as_deref()) {
            Some(name) => name.parse::<Format>()?,
            None => output
                .as_deref()
                .and_then(Format::from_path)
                .unwrap_or(Format::Cpp),
        };

        let output = output.unwrap_or_else(|| PathBuf::from(format.default_file_name()));

        Ok(GenerateArgs {
            format,
            output,
            abbrev: abbrev.unwrap_or(config.describe.abbrev),
            mode,
        })
    }
}

/// Result of a successful generate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Version derived from the repository
    pub info: VersionInfo,

    /// Rendered source text
    pub content: String,

    /// Destination file
    pub output: PathBuf,

    /// Whether the file on disk differs (or differed) from `content`
    pub changed: bool,

    /// Non-fatal issues to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Main generate workflow
///
/// 1. Describe HEAD through the repository
/// 2. Parse the description into a version record
/// 3. Render the record in the requested format
/// 4. Write, check or hand back the rendered text depending on the mode
pub fn run_generate<R: Repository + ?Sized>(
    repo: &R,
    args: &GenerateArgs,
) -> Result<GenerateResult> {
    let described = repo.describe_head(args.abbrev)?;
    debug!(description = %described.description, tag = ?described.tag_name, "describe output");

    let info = described.parse()?;
    let mut warnings = collect_warnings(&info);
    let content = output::render(&info, args.format);

    let changed = match args.mode {
        WriteMode::Write => write_if_changed(&args.output, &content)?,
        WriteMode::Check => is_out_of_date(&args.output, &content)?,
        WriteMode::Stdout => false,
    };
    info!(
        version = %info.version_string(),
        format = %args.format,
        output = %args.output.display(),
        changed,
        "generated version file"
    );

    if args.mode == WriteMode::Write && !changed {
        warnings.push(BoundaryWarning::OutputUnchanged {
            path: args.output.clone(),
        });
    }

    Ok(GenerateResult {
        info,
        content,
        output: args.output.clone(),
        changed,
        warnings,
    })
}

fn collect_warnings(info: &VersionInfo) -> Vec<BoundaryWarning> {
    let mut warnings = Vec::new();

    match info.tag() {
        None => warnings.push(BoundaryWarning::NoTagFound {
            commit_id: info.commit_id().to_string(),
        }),
        Some(tag) if info.tag_version().is_none() => {
            warnings.push(BoundaryWarning::UnparsableTagVersion {
                tag: tag.to_string(),
            })
        }
        Some(_) => {}
    }

    if info.is_dirty() {
        warnings.push(BoundaryWarning::DirtyWorkingTree {
            commit_id: info.commit_id().to_string(),
        });
    }

    warnings
}

/// Whether `path` is missing or holds something other than `content`
pub fn is_out_of_date(path: &Path, content: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing != content),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::InvalidData) => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Write `content` to `path` unless the file already holds exactly that
///
/// Leaving an identical file untouched keeps its modification time, so build
/// systems do not rebuild everything that includes it.
///
/// # Returns
/// * `Ok(true)` - The file was created or rewritten
/// * `Ok(false)` - The file was already up to date
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if !is_out_of_date(path, content)? {
        debug!(path = %path.display(), "output unchanged, not rewriting");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(true)
}
