use std::{
  fmt::Display,
  path::{Path, PathBuf},
  sync::Arc,
};

use swc_core::common::SourceFile;

use crate::ErrorKind;

#[derive(Debug)]
pub struct Error {
  contexts: Vec<String>,
  pub kind: ErrorKind,
}

impl Error {
  fn with_kind(kind: ErrorKind) -> Self {
    Self {
      contexts: vec![],
      kind,
    }
  }

  pub fn context(mut self, context: impl Into<String>) -> Self {
    self.contexts.push(context.into());
    self
  }

  pub fn contexts(&self) -> &[String] {
    &self.contexts
  }

  pub fn read_file_failed(filename: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::with_kind(ErrorKind::ReadFileFailed {
      filename: filename.as_ref().to_path_buf(),
      source,
    })
  }

  pub fn invalid_svg(reason: impl Into<String>, position: Option<u64>) -> Self {
    Self::with_kind(ErrorKind::InvalidSvg {
      reason: reason.into(),
      position,
    })
  }

  pub fn invalid_import_pattern(pattern: impl Into<String>, reason: impl Display) -> Self {
    Self::with_kind(ErrorKind::InvalidImportPattern {
      pattern: pattern.into(),
      reason: reason.to_string(),
    })
  }

  pub fn parse_js_failed(
    fm: Arc<SourceFile>,
    source: swc_core::ecma::parser::error::Error,
  ) -> Self {
    Self::with_kind(ErrorKind::ParseJsFailed {
      source_file: fm,
      source,
    })
  }

  pub fn panic(msg: String) -> Self {
    anyhow::format_err!(msg).into()
  }

  pub fn filename(&self) -> Option<PathBuf> {
    match &self.kind {
      ErrorKind::ReadFileFailed { filename, .. } => Some(filename.clone()),
      ErrorKind::ParseJsFailed { source_file, .. } => Some(PathBuf::from(source_file.name.to_string())),
      _ => None,
    }
  }
}

impl std::convert::From<anyhow::Error> for Error {
  fn from(value: anyhow::Error) -> Self {
    Self::with_kind(ErrorKind::Panic { source: value })
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match &self.kind {
      ErrorKind::Panic { source, .. } => Some(source.as_ref()),
      ErrorKind::ReadFileFailed { source, .. } => Some(source),
      _ => None,
    }
  }
}

impl Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for ctx in self.contexts.iter().rev() {
      writeln!(f, "{}: {}", ansi_term::Color::Yellow.paint("context"), ctx)?;
    }

    self.kind.fmt(f)
  }
}
