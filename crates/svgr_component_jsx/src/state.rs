use std::path::{Path, PathBuf};

use heck::ToUpperCamelCase;

/// Per-file information handed to the component compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
  pub file_path: Option<PathBuf>,
  pub component_name: String,
}

impl Default for State {
  fn default() -> Self {
    Self {
      file_path: None,
      component_name: "SvgComponent".to_string(),
    }
  }
}

impl State {
  /// `src/assets/arrow-left.svg` -> `SvgArrowLeft`
  pub fn from_file_path(file_path: impl AsRef<Path>) -> Self {
    let file_path = file_path.as_ref();
    let stem = file_path
      .file_name()
      .and_then(|name| name.to_str())
      .map(|name| name.split('.').next().unwrap_or(name))
      .unwrap_or_default()
      .to_upper_camel_case();
    Self {
      file_path: Some(file_path.to_path_buf()),
      component_name: if stem.is_empty() {
        "SvgComponent".to_string()
      } else {
        format!("Svg{stem}")
      },
    }
  }
}
