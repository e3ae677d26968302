//! SVG markup to React component source, following SVGR's conventions.
//!
//! The pipeline is parse -> optimize (when `svgo` is on) -> JSX -> template.
//! The output still contains JSX and, with `typescript`, type annotations; it
//! is meant to be fed to a source transformer.

mod ast;
pub use ast::*;
mod config;
pub use config::*;
mod jsx;
pub use jsx::*;
mod optimize;
pub use optimize::*;
mod parse;
pub use parse::*;
mod state;
pub use state::*;
mod template;
pub use template::*;

use svgr_component_error::Result;
use tracing::instrument;

/// Compiles `svg_code` into component source text.
#[instrument(skip_all, fields(component = %state.component_name))]
pub fn transform(svg_code: &str, config: &Config, state: &State) -> Result<String> {
  let mut root = parse_svg(svg_code)?;
  if config.svgo() {
    optimize(&mut root);
  }
  let jsx = to_jsx(&root, config).render();
  tracing::trace!(jsx_len = jsx.len(), "rendered jsx");
  Ok(render_template(&jsx, config, state))
}
