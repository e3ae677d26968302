use std::{path::Path, sync::Arc};

use swc_core::{
  common::{comments::Comments, FileName, SourceFile, SourceMap},
  ecma::{
    ast::{EsVersion, Module},
    codegen::{text_writer::JsWriter, Emitter},
    parser::{lexer::Lexer, Parser, StringInput, Syntax},
  },
};
use svgr_component_error::Error;

mod loader;
pub use loader::*;
mod transform;
pub use transform::*;

/// Parses, transforms and prints modules against one shared [SourceMap].
#[derive(Default)]
pub struct Compiler {
  pub cm: Arc<SourceMap>,
}

impl std::fmt::Debug for Compiler {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Compiler").finish_non_exhaustive()
  }
}

impl Compiler {
  fn add_source_file(&self, filename: &Path, source: String) -> Arc<SourceFile> {
    self
      .cm
      .new_source_file(FileName::Real(filename.to_path_buf()), source)
  }

  /// Parses `source_file` as an ES module. Recoverable errors fail the parse as
  /// well, generated code has no excuse for them.
  pub fn parse_module(
    &self,
    source_file: Arc<SourceFile>,
    syntax: Syntax,
    comments: Option<&dyn Comments>,
  ) -> svgr_component_error::Result<Module> {
    let lexer = Lexer::new(
      syntax,
      EsVersion::latest(),
      StringInput::from(source_file.as_ref()),
      comments,
    );
    let mut parser = Parser::new_from(lexer);
    let parsed = parser.parse_module();
    let recovered = parser.take_errors().into_iter().next();
    match (parsed, recovered) {
      (Err(err), _) | (Ok(_), Some(err)) => Err(Error::parse_js_failed(source_file, err)),
      (Ok(module), None) => Ok(module),
    }
  }

  pub fn print_module(
    &self,
    module: &Module,
    comments: Option<&dyn Comments>,
  ) -> anyhow::Result<String> {
    let mut buf = vec![];
    {
      let mut emitter = Emitter {
        cfg: Default::default(),
        cm: self.cm.clone(),
        comments,
        wr: JsWriter::new(self.cm.clone(), "\n", &mut buf, None),
      };
      emitter.emit_module(module)?;
    }
    Ok(String::from_utf8(buf)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_errors_keep_the_source_file() {
    let compiler = Compiler::default();
    let fm = compiler.add_source_file(Path::new("/src/broken.js"), "const = 1;".to_string());
    let err = compiler
      .parse_module(fm, Loader::Js.syntax(), None)
      .unwrap_err();
    assert_eq!(err.kind.code(), "PARSE_JS_FAILED");
    assert_eq!(
      err.filename(),
      Some(std::path::PathBuf::from("/src/broken.js"))
    );
  }

  #[test]
  fn prints_what_it_parsed() {
    let compiler = Compiler::default();
    let fm = compiler.add_source_file(Path::new("a.js"), "export default 1;".to_string());
    let module = compiler
      .parse_module(fm, Loader::Js.syntax(), None)
      .unwrap();
    assert_eq!(compiler.print_module(&module, None).unwrap(), "export default 1;\n");
  }
}
