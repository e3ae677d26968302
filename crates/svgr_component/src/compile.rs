use svgr_component_compiler::{Compiler, JsxRuntime, Loader, TransformOptions};
use svgr_component_error::Error;
use svgr_component_jsx::{Config, State};
use svgr_component_plugin::TransformResult;
use tracing::instrument;

/// `/src/icon.svg?react` -> `/src/icon.svg`
pub fn strip_query(id: &str) -> &str {
  id.split_once('?').map_or(id, |(path, _)| path)
}

/// Reads the svg behind `id` and turns it into module code: svg markup to a
/// component, then the component to code the host can consume.
#[instrument(skip(config, compiler))]
pub async fn compile_svg(
  id: &str,
  config: &Config,
  loader: Loader,
  compiler: &Compiler,
) -> svgr_component_error::Result<TransformResult> {
  let path = strip_query(id);
  let svg = tokio::fs::read_to_string(path)
    .await
    .map_err(|err| Error::read_file_failed(path, err))?;

  let component = svgr_component_jsx::transform(&svg, config, &State::from_file_path(path))?;
  tracing::trace!(%component, "component generated");

  let options = TransformOptions {
    loader,
    jsx_runtime: match config.jsx_runtime() {
      svgr_component_jsx::JsxRuntime::Classic => JsxRuntime::Classic,
      svgr_component_jsx::JsxRuntime::Automatic => JsxRuntime::Automatic,
    },
  };
  let output = compiler.transform(path, component, &options)?;
  Ok(TransformResult::without_map(output.code))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn query_is_stripped() {
    assert_eq!(strip_query("/a/icon.svg?react"), "/a/icon.svg");
    assert_eq!(strip_query("/a/icon.svg"), "/a/icon.svg");
    assert_eq!(strip_query("icon.svg?"), "icon.svg");
  }
}
