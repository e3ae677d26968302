use std::{borrow::Cow, fmt::Debug};

use crate::{OutputBundle, TransformArgs};

/// What a `transform` hook hands back to the host. `map` is a serialized source map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
  pub code: String,
  pub map: Option<String>,
}

impl TransformResult {
  pub fn without_map(code: String) -> Self {
    Self { code, map: None }
  }
}

pub type TransformOutput = svgr_component_error::Result<Option<TransformResult>>;
pub type HookNoopReturn = svgr_component_error::Result<()>;
pub type PluginName<'a> = Cow<'a, str>;

/// Mirrors the `enforce` field of vite plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluginOrder {
  Pre,
  Post,
}

#[async_trait::async_trait]
pub trait BuildPlugin: Debug + Send + Sync {
  fn name(&self) -> PluginName;

  /// `Some(PluginOrder::Pre)` runs the hooks of this plugin before the ones without a hint.
  fn enforce(&self) -> Option<PluginOrder> {
    None
  }

  /// `Ok(None)` means the module is not handled and the host keeps its default behavior.
  async fn transform(&self, _args: &TransformArgs) -> TransformOutput {
    Ok(None)
  }

  /// Called once with the finalized output. Entries may be removed in place.
  async fn generate_bundle(&self, _bundle: &mut OutputBundle) -> HookNoopReturn {
    Ok(())
  }
}
