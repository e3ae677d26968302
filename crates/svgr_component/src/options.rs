use std::fmt::Display;

use serde::Deserialize;

use crate::SvgrOptions;

/// Options of [crate::SvgrComponentPlugin]. Deserialized from camelCase keys
/// (`importStringPattern`, `svgrOptions`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SvgrComponentOptions {
  /// Ids have to match at least one of the patterns.
  pub import_string_pattern: ImportPattern,
  /// Laid over [default_svgr_options], keys set here win.
  pub svgr_options: SvgrOptions,
  /// Compile the component with the `tsx` loader instead of `jsx`.
  pub typescript: bool,
  /// Keep the raw svg assets the bundler emitted for transformed imports.
  pub keep_emitted_assets: bool,
}

impl Default for SvgrComponentOptions {
  fn default() -> Self {
    Self {
      import_string_pattern: Default::default(),
      svgr_options: Default::default(),
      typescript: true,
      keep_emitted_assets: false,
    }
  }
}

impl SvgrComponentOptions {
  pub fn effective_svgr_options(&self) -> SvgrOptions {
    default_svgr_options().merge(&self.svgr_options)
  }
}

/// `{ memo: true, typescript: true, svgo: true, titleProp: true }`
pub fn default_svgr_options() -> SvgrOptions {
  SvgrOptions {
    memo: Some(true),
    typescript: Some(true),
    svgo: Some(true),
    title_prop: Some(true),
    ..Default::default()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ImportPattern {
  Single(String),
  List(Vec<String>),
}

impl Default for ImportPattern {
  fn default() -> Self {
    ImportPattern::Single("*.svg*".to_string())
  }
}

impl ImportPattern {
  pub fn patterns(&self) -> &[String] {
    match self {
      ImportPattern::Single(pattern) => std::slice::from_ref(pattern),
      ImportPattern::List(patterns) => patterns,
    }
  }
}

impl From<&str> for ImportPattern {
  fn from(pattern: &str) -> Self {
    ImportPattern::Single(pattern.to_string())
  }
}

impl<S: Into<String>> From<Vec<S>> for ImportPattern {
  fn from(patterns: Vec<S>) -> Self {
    ImportPattern::List(patterns.into_iter().map(Into::into).collect())
  }
}

impl Display for ImportPattern {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ImportPattern::Single(pattern) => f.write_str(pattern),
      ImportPattern::List(patterns) => write!(f, "[{}]", patterns.join(", ")),
    }
  }
}
