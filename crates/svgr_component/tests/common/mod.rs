use std::path::{Path, PathBuf};

use serde::Deserialize;
use svgr_component::{SvgrComponentOptions, SvgrComponentPlugin};
use svgr_component_plugin::{BuildPlugin, TransformArgs, TransformResult};
use tempfile::TempDir;

pub const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><title>Icon</title><path fill="#000" d="M0 0h24v24H0z"/></svg>"##;

pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
  tokio::runtime::Runtime::new().unwrap().block_on(future)
}

/// A temp dir holding svg files. Dropping it removes the files.
pub struct SvgDir {
  pub dir: TempDir,
}

impl SvgDir {
  pub fn new() -> Self {
    Self {
      dir: tempfile::tempdir().unwrap(),
    }
  }

  /// Writes `content` to `name` and returns the absolute id.
  pub fn write(&self, name: &str, content: &str) -> String {
    let path = self.dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
  }

  pub fn path(&self, name: &str) -> PathBuf {
    self.dir.path().join(name)
  }
}

pub fn plugin(options: SvgrComponentOptions) -> SvgrComponentPlugin {
  SvgrComponentPlugin::new(options).unwrap()
}

pub async fn transform(
  plugin: &SvgrComponentPlugin,
  id: &str,
) -> svgr_component_error::Result<Option<TransformResult>> {
  plugin.transform(&TransformArgs { id, code: "" }).await
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedError {
  pub code: String,
  #[serde(default)]
  pub message_contains: Option<String>,
}

/// `test.config.json` of a fixture folder. Successful fixtures are compared
/// against `output.snap` next to `input.svg`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConfig {
  #[serde(default)]
  pub options: SvgrComponentOptions,
  /// Id suffix appended to the path of `input.svg`, e.g. `?react`.
  #[serde(default)]
  pub query: String,
  #[serde(default)]
  pub expected_error: Option<ExpectedError>,
}

impl TestConfig {
  pub fn from_config_path(filepath: &Path) -> Self {
    serde_json::from_str(&std::fs::read_to_string(filepath).unwrap_or_else(|_| "{}".to_string()))
      .unwrap()
  }
}

pub fn run_fixture(test_config_path: &Path) {
  let fixture_folder = test_config_path.parent().unwrap();
  let config = TestConfig::from_config_path(test_config_path);
  let id = format!(
    "{}{}",
    fixture_folder.join("input.svg").to_string_lossy(),
    config.query
  );

  let plugin = plugin(config.options);
  let output = block_on(transform(&plugin, &id));

  if let Some(expected_error) = config.expected_error {
    let error = output.expect_err("Expected error but got success");
    assert_eq!(error.kind.code(), expected_error.code);
    if let Some(message) = expected_error.message_contains {
      let readable = error.kind.to_readable_string(fixture_folder);
      assert!(readable.contains(&message), "{readable}");
    }
    assert!(!plugin.is_cached(&id));
    return;
  }

  let output = output.unwrap().expect("svg should be handled");
  assert_eq!(output.map, None);
  assert!(plugin.is_cached(&id));

  let mut settings = insta::Settings::clone_current();
  settings.set_snapshot_path(fixture_folder);
  settings.set_prepend_module_to_snapshot(false);
  settings.set_input_file(fixture_folder);
  settings.bind(|| {
    insta::assert_snapshot!("output", output.code);
  });
}
