use std::path::Path;

use swc_core::{
  common::{
    chain, comments::SingleThreadedComments, pass::Optional, util::take::Take, Globals, Mark,
    GLOBALS,
  },
  ecma::{
    transforms::{
      base::{
        fixer::fixer,
        helpers::{Helpers, HELPERS},
        hygiene::hygiene,
        resolver,
      },
      react::{self, Runtime},
      typescript::strip,
    },
    visit::FoldWith,
  },
};
use tracing::instrument;

use crate::{Compiler, Loader};

/// How JSX is lowered. `Classic` expects `React` to be in scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsxRuntime {
  #[default]
  Classic,
  Automatic,
}

#[derive(Debug, Clone, Copy)]
pub struct TransformOptions {
  pub loader: Loader,
  pub jsx_runtime: JsxRuntime,
}

impl TransformOptions {
  pub fn new(loader: Loader) -> Self {
    Self {
      loader,
      jsx_runtime: JsxRuntime::default(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
  pub code: String,
  pub map: Option<String>,
}

impl Compiler {
  /// Turns `source` into plain JavaScript: JSX is lowered and, for typed
  /// loaders, type syntax is erased. ES module syntax is kept as is.
  #[instrument(skip_all, fields(filename = %filename.as_ref().display(), loader = options.loader.as_str()))]
  pub fn transform(
    &self,
    filename: impl AsRef<Path>,
    source: String,
    options: &TransformOptions,
  ) -> svgr_component_error::Result<TransformOutput> {
    let fm = self.add_source_file(filename.as_ref(), source);
    let comments = SingleThreadedComments::default();
    let mut module =
      self.parse_module(fm, options.loader.syntax(), Some(&comments))?;

    // Marks are only valid inside the globals they were created in.
    GLOBALS.set(&Globals::new(), || HELPERS.set(&Helpers::new(false), || {
      let unresolved_mark = Mark::new();
      let top_level_mark = Mark::new();

      let mut chained = chain!(
        // Conduct identifier scope analysis
        resolver(unresolved_mark, top_level_mark, options.loader.is_typescript()),
        // Lower JSX before stripping types, otherwise `import * as React` looks
        // unused and gets elided together with the type-only imports.
        react::react(
          self.cm.clone(),
          Some(comments.clone()),
          react::Options {
            runtime: Some(match options.jsx_runtime {
              JsxRuntime::Classic => Runtime::Classic,
              JsxRuntime::Automatic => Runtime::Automatic,
            }),
            // `{ ...props }` instead of the `_extends` helper
            use_spread: Some(true),
            ..Default::default()
          },
          top_level_mark,
          unresolved_mark,
        ),
        Optional::new(strip(top_level_mark), options.loader.is_typescript()),
        hygiene(),
        fixer(Some(&comments)),
      );
      module = module.take().fold_with(&mut chained);
    }));

    let code = self.print_module(&module, Some(&comments))?;
    tracing::trace!(bytes = code.len(), "transformed");
    Ok(TransformOutput { code, map: None })
  }
}
