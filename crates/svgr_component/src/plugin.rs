use dashmap::DashMap;
use derivative::Derivative;
use svgr_component_compiler::{Compiler, Loader};
use svgr_component_plugin::{
  async_trait, BuildPlugin, HookNoopReturn, Output, OutputBundle, PluginName, PluginOrder,
  TransformArgs, TransformOutput, TransformResult,
};
use tracing::instrument;

use crate::{compile_svg, ImportMatcher, SvgrComponentOptions, SvgrOptions};

/// Turns svg imports into React components and drops the raw svg assets the
/// bundler emitted for them.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct SvgrComponentPlugin {
  matcher: ImportMatcher,
  svgr_options: SvgrOptions,
  loader: Loader,
  keep_emitted_assets: bool,
  #[derivative(Debug = "ignore")]
  compiler: Compiler,
  /// Keyed by module id. Never evicted.
  #[derivative(Debug = "ignore")]
  cache: DashMap<String, TransformResult>,
}

impl SvgrComponentPlugin {
  pub fn new(options: SvgrComponentOptions) -> svgr_component_error::Result<Self> {
    svgr_component_tracing::enable_tracing_on_demand();
    let matcher = options.import_string_pattern.compile()?;
    Ok(Self {
      matcher,
      svgr_options: options.effective_svgr_options(),
      loader: if options.typescript {
        Loader::Tsx
      } else {
        Loader::Jsx
      },
      keep_emitted_assets: options.keep_emitted_assets,
      compiler: Compiler::default(),
      cache: DashMap::default(),
    })
  }

  pub fn new_boxed(options: SvgrComponentOptions) -> svgr_component_error::Result<Box<dyn BuildPlugin>> {
    Ok(Box::new(Self::new(options)?))
  }

  /// The `.svg` check is a substring test, `icon.svg.txt` passes it.
  pub fn is_transformable(&self, id: &str) -> bool {
    id.contains(".svg") && self.matcher.is_match(id)
  }

  pub fn loader(&self) -> Loader {
    self.loader
  }

  pub fn is_cached(&self, id: &str) -> bool {
    self.cache.contains_key(id)
  }

  pub fn cached_count(&self) -> usize {
    self.cache.len()
  }

  fn is_transformed_asset(&self, output: &Output) -> bool {
    output.is_asset()
      && output
        .name()
        .map_or(false, |name| name.ends_with(".svg") && self.cache.contains_key(name))
  }
}

#[async_trait::async_trait]
impl BuildPlugin for SvgrComponentPlugin {
  fn name(&self) -> PluginName {
    std::borrow::Cow::Borrowed("builtin:svgr-component")
  }

  fn enforce(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Pre)
  }

  #[instrument(skip_all, fields(id = args.id))]
  async fn transform(&self, args: &TransformArgs) -> TransformOutput {
    if !self.is_transformable(args.id) {
      return Ok(None);
    }

    let cached = self.cache.get(args.id).map(|entry| entry.value().clone());
    if let Some(cached) = cached {
      tracing::trace!("cache hit");
      return Ok(Some(cached));
    }

    let result = compile_svg(args.id, &self.svgr_options, self.loader, &self.compiler)
      .await
      .map_err(|err| err.context(format!("failed to compile {} to a component", args.id)))?;
    tracing::debug!(loader = self.loader.as_str(), "svg compiled");
    // A concurrent transform of the same id may have won, the values are equal.
    self.cache.insert(args.id.to_string(), result.clone());
    Ok(Some(result))
  }

  async fn generate_bundle(&self, bundle: &mut OutputBundle) -> HookNoopReturn {
    if self.keep_emitted_assets {
      return Ok(());
    }
    let before = bundle.len();
    bundle.retain(|_, output| !self.is_transformed_asset(output));
    tracing::debug!(removed = before - bundle.len(), "svg assets removed");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ImportPattern;

  fn plugin(options: SvgrComponentOptions) -> SvgrComponentPlugin {
    SvgrComponentPlugin::new(options).unwrap()
  }

  #[test]
  fn loader_follows_typescript_flag() {
    assert_eq!(plugin(Default::default()).loader(), Loader::Tsx);
    let untyped = plugin(SvgrComponentOptions {
      typescript: false,
      ..Default::default()
    });
    assert_eq!(untyped.loader(), Loader::Jsx);
  }

  #[test]
  fn marker_is_a_substring_test() {
    let plugin = plugin(Default::default());
    assert!(plugin.is_transformable("/src/icon.svg"));
    assert!(plugin.is_transformable("/src/icon.svg?react"));
    assert!(plugin.is_transformable("/src/not.svg.but.txt"));
    assert!(!plugin.is_transformable("/src/icon.png"));
  }

  #[test]
  fn pattern_has_to_match_too() {
    let plugin = plugin(SvgrComponentOptions {
      import_string_pattern: ImportPattern::from("*.svg?react"),
      ..Default::default()
    });
    assert!(plugin.is_transformable("/src/icon.svg?react"));
    assert!(!plugin.is_transformable("/src/icon.svg"));
  }

  #[test]
  fn invalid_pattern_fails_construction() {
    let err = SvgrComponentPlugin::new(SvgrComponentOptions {
      import_string_pattern: ImportPattern::from(vec!["*.svg", "[*.svg"]),
      ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.kind.code(), "INVALID_IMPORT_PATTERN");
  }

  #[test]
  fn debug_output_skips_cache() {
    let debug = format!("{:?}", plugin(Default::default()));
    assert!(debug.starts_with("SvgrComponentPlugin"));
    assert!(!debug.contains("cache"));
  }
}
