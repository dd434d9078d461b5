pub mod boundary;
pub mod cli;
pub mod config;
pub mod describe;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod ui;

pub use describe::{parse, DescribeOutput};
pub use domain::{TagVersion, VersionInfo};
pub use error::{GitVersionError, Result};
pub use output::{render, render_named, Format};
