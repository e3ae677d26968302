use std::{
  fmt::Display,
  path::{Path, PathBuf},
  sync::Arc,
};

use swc_core::common::SourceFile;

use crate::utils::PathExt;
use crate::CWD;

pub mod error_code;

#[derive(Debug)]
pub enum ErrorKind {
  /// The svg file behind a module id could not be read.
  ReadFileFailed {
    filename: PathBuf,
    source: std::io::Error,
  },
  /// The markup could not be turned into a component.
  InvalidSvg {
    reason: String,
    position: Option<u64>,
  },
  /// One of the `importStringPattern` globs does not compile.
  InvalidImportPattern {
    pattern: String,
    reason: String,
  },
  /// The generated component source is not valid for the selected loader.
  ParseJsFailed {
    source_file: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  },
  /// Unrecoverable failure that has no dedicated kind, e.g. a codegen error.
  Panic {
    source: anyhow::Error,
  },
}

impl Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::ReadFileFailed { filename, source } => write!(f, "Could not read \"{}\": {source}", filename.may_display_relative()),
      ErrorKind::InvalidSvg { reason, position: Some(position) } => write!(f, "Invalid svg markup at byte {position}: {reason}"),
      ErrorKind::InvalidSvg { reason, position: None } => write!(f, "Invalid svg markup: {reason}"),
      ErrorKind::InvalidImportPattern { pattern, reason } => write!(f, r#"Invalid "importStringPattern" value "{pattern}": {reason}"#),
      ErrorKind::ParseJsFailed { source_file, source } => write!(
        f,
        "Parse failed: {}: {}",
        Path::new(&source_file.name.to_string()).may_display_relative(),
        source.kind().msg()
      ),
      ErrorKind::Panic { source } => source.fmt(f),
    }
  }
}

impl ErrorKind {
  /// Shorten the file paths in messages by make them relative to CWD.
  pub fn to_readable_string(&self, cwd: impl AsRef<Path>) -> String {
    let cwd = cwd.as_ref().to_path_buf();
    CWD.set(&cwd, || self.to_string())
  }

  pub fn code(&self) -> &'static str {
    match self {
      ErrorKind::ReadFileFailed { .. } => error_code::READ_FILE_FAILED,
      ErrorKind::InvalidSvg { .. } => error_code::INVALID_SVG,
      ErrorKind::InvalidImportPattern { .. } => error_code::INVALID_IMPORT_PATTERN,
      ErrorKind::ParseJsFailed { .. } => error_code::PARSE_JS_FAILED,
      ErrorKind::Panic { .. } => error_code::PANIC,
    }
  }
}
