use globset::{Glob, GlobSet, GlobSetBuilder};
use svgr_component_error::Error;

use crate::ImportPattern;

/// Compiled form of [ImportPattern]. An id matches when any pattern does.
#[derive(Debug, Clone)]
pub struct ImportMatcher {
  set: GlobSet,
}

impl ImportPattern {
  pub fn compile(&self) -> svgr_component_error::Result<ImportMatcher> {
    let mut builder = GlobSetBuilder::new();
    for pattern in self.patterns() {
      // `*` crosses `/`, so `*.svg` matches absolute module ids
      let glob = Glob::new(pattern).map_err(|err| Error::invalid_import_pattern(pattern, err))?;
      builder.add(glob);
    }
    let set = builder
      .build()
      .map_err(|err| Error::invalid_import_pattern(self.to_string(), err))?;
    Ok(ImportMatcher { set })
  }
}

impl ImportMatcher {
  pub fn is_match(&self, id: &str) -> bool {
    self.set.is_match(id)
  }
}
