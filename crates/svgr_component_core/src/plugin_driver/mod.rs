use futures::future::join_all;
use svgr_component_error::Errors;
use svgr_component_plugin::{BuildPlugin, OutputBundle, PluginOrder, TransformArgs};
use tracing::instrument;

use crate::BuildResult;

/// A module after every plugin had the chance to rewrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedModule {
  pub id: String,
  pub code: String,
  /// The map of the last plugin that handled the module.
  pub map: Option<String>,
  /// Whether any plugin returned a result for the module.
  pub handled: bool,
}

/// Host side of the plugin protocol: runs hooks in `enforce` order.
#[derive(Debug, Default)]
pub struct PluginDriver {
  plugins: Vec<Box<dyn BuildPlugin>>,
}

fn order_rank(order: Option<PluginOrder>) -> u8 {
  match order {
    Some(PluginOrder::Pre) => 0,
    None => 1,
    Some(PluginOrder::Post) => 2,
  }
}

impl PluginDriver {
  pub fn new(mut plugins: Vec<Box<dyn BuildPlugin>>) -> Self {
    svgr_component_tracing::enable_tracing_on_demand();
    // Stable, so plugins with the same hint keep the order they were given in
    plugins.sort_by_key(|plugin| order_rank(plugin.enforce()));
    Self { plugins }
  }

  pub fn plugin_names(&self) -> Vec<String> {
    self
      .plugins
      .iter()
      .map(|plugin| plugin.name().into_owned())
      .collect()
  }

  /// Feeds `code` through every `transform` hook; each handled result becomes
  /// the input of the next plugin.
  #[instrument(skip(self, code))]
  pub async fn transform(&self, id: &str, code: String) -> BuildResult<TransformedModule> {
    let mut module = TransformedModule {
      id: id.to_string(),
      code,
      map: None,
      handled: false,
    };
    for plugin in &self.plugins {
      let output = plugin
        .transform(&TransformArgs {
          id,
          code: &module.code,
        })
        .await
        .map_err(|err| err.context(format!("plugin {} failed to transform {id}", plugin.name())))?;
      if let Some(output) = output {
        tracing::trace!(plugin = %plugin.name(), "module transformed");
        module.code = output.code;
        module.map = output.map;
        module.handled = true;
      }
    }
    Ok(module)
  }

  /// Transforms all modules concurrently. Every failure is collected instead
  /// of stopping at the first one.
  pub async fn transform_all(
    &self,
    modules: Vec<(String, String)>,
  ) -> Result<Vec<TransformedModule>, Errors> {
    let results = join_all(
      modules
        .into_iter()
        .map(|(id, code)| async move { self.transform(&id, code).await }),
    )
    .await;

    let mut transformed = Vec::with_capacity(results.len());
    let mut failures = vec![];
    for result in results {
      match result {
        Ok(module) => transformed.push(module),
        Err(err) => failures.push(err),
      }
    }
    match Errors::try_from_vec(failures) {
      Some(errors) => Err(errors),
      None => Ok(transformed),
    }
  }

  #[instrument(skip_all)]
  pub async fn generate_bundle(&self, bundle: &mut OutputBundle) -> BuildResult<()> {
    for plugin in &self.plugins {
      plugin
        .generate_bundle(bundle)
        .await
        .map_err(|err| err.context(format!("plugin {} failed in generate_bundle", plugin.name())))?;
    }
    Ok(())
  }
}
