//! Rendering of version info into generated source files
//!
//! Every output format shares the same constants, order and inclusion rules;
//! only the concrete syntax differs. Each format implements [`Syntax`] and is
//! selected through the [`Format`] enum:
//!
//! - [`cpp::CppSyntax`]: C++ header with include guard and `version` namespace
//! - [`python::PythonSyntax`]: flat Python module
//! - [`rust::RustSyntax`]: Rust module with `pub const` items

pub mod cpp;
pub mod python;
pub mod rust;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::VersionInfo;
use crate::error::{GitVersionError, Result};

const RULE: &str = "---------------------------------------------------";
const BANNER: [&str; 4] = [
    RULE,
    "This file is autogenerated by git-version.",
    "DO NOT MODIFY!",
    RULE,
];

/// Concrete syntax of one output format
///
/// Implementors only describe how a single declaration looks; the shared
/// [`render_with`] decides what is emitted and in which order.
pub trait Syntax {
    /// Line comment token used for the banner
    fn comment(&self) -> &'static str;

    /// Indentation of constant declarations
    fn indent(&self) -> &'static str {
        ""
    }

    /// Text emitted between the banner and the first constant
    fn open(&self, _out: &mut String) {}

    /// Text emitted after the last constant
    fn close(&self, _out: &mut String) {}

    fn bool_literal(&self, value: bool) -> &'static str;

    fn string_const(&self, name: &str, value: &str) -> String;

    fn uint_const(&self, name: &str, value: u32) -> String;

    fn bool_const(&self, name: &str, value: bool) -> String;

    fn list_const(&self, name: &str, values: &[String]) -> String;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// C++ header (block style)
    Cpp,
    /// Python module (flat style)
    Python,
    /// Rust module
    Rust,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Cpp, Format::Python, Format::Rust];

    /// Canonical name, accepted by [`Format::from_str`]
    pub fn name(&self) -> &'static str {
        match self {
            Format::Cpp => "cpp",
            Format::Python => "python",
            Format::Rust => "rust",
        }
    }

    /// Output file name used when none is configured
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Format::Cpp => "version.h",
            Format::Python => "version.py",
            Format::Rust => "version.rs",
        }
    }

    /// Guess the format from an output file extension
    ///
    /// # Returns
    /// * `Some(Format)` - If the extension belongs to a known format
    /// * `None` - If there is no extension or it is not recognized
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    fn syntax(&self) -> &'static dyn Syntax {
        match self {
            Format::Cpp => &cpp::CppSyntax,
            Format::Python => &python::PythonSyntax,
            Format::Rust => &rust::RustSyntax,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Format {
    type Err = GitVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "h" | "hpp" => Ok(Format::Cpp),
            "python" | "py" => Ok(Format::Python),
            "rust" | "rs" => Ok(Format::Rust),
            _ => Err(GitVersionError::unsupported_format(s)),
        }
    }
}

/// Render version info in the given format
pub fn render(info: &VersionInfo, format: Format) -> String {
    render_with(format.syntax(), info)
}

/// Render version info in the format with the given name
///
/// # Returns
/// * `Ok(String)` - Rendered source text
/// * `Err(UnsupportedFormat)` - If `format_name` is not a known format
pub fn render_named(info: &VersionInfo, format_name: &str) -> Result<String> {
    let format = format_name.parse::<Format>()?;
    Ok(render(info, format))
}

/// Render version info with an arbitrary syntax
pub fn render_with(syntax: &dyn Syntax, info: &VersionInfo) -> String {
    let mut out = String::new();

    for line in BANNER {
        out.push_str(syntax.comment());
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    syntax.open(&mut out);

    let mut declarations = vec![
        syntax.string_const("VERSION_STRING", &info.version_string()),
        syntax.string_const("GIT_TAG_NAME", info.tag_name()),
        syntax.uint_const("GIT_COMMITS_SINCE_TAG", info.commits_since_tag()),
        syntax.string_const("GIT_COMMIT_ID", info.commit_id()),
        syntax.bool_const("IS_DEV_VERSION", info.is_dev_version()),
    ];
    if let Some(stable) = info.is_stable_version() {
        declarations.push(syntax.bool_const("IS_STABLE_VERSION", stable));
    }
    push_lines(&mut out, syntax.indent(), &declarations);

    if let Some(tag_version) = info.tag_version() {
        out.push('\n');
        let declarations = [
            syntax.list_const("VERSION_COMPONENTS", &tag_version.components),
            syntax.string_const("VERSION_TAG", &tag_version.tag),
        ];
        push_lines(&mut out, syntax.indent(), &declarations);
    }

    syntax.close(&mut out);
    out
}

fn push_lines(out: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}

/// Double-quote every value and join them with `", "`
pub(crate) fn quoted_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}
