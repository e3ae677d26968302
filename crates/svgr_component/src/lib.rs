mod compile;
pub use compile::*;
mod options;
pub use options::*;
mod pattern;
pub use pattern::*;
mod plugin;
pub use plugin::*;

pub use svgr_component_compiler::Loader;
pub use svgr_component_jsx::Config as SvgrOptions;
pub use svgr_component_plugin::{BuildPlugin, OutputBundle, TransformResult};

/// Builds the plugin as a trait object, ready to be handed to a bundler.
pub fn svgr_component(
  options: SvgrComponentOptions,
) -> svgr_component_error::Result<Box<dyn BuildPlugin>> {
  SvgrComponentPlugin::new_boxed(options)
}
