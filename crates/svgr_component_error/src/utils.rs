use std::{borrow::Cow, path::Path};

use sugar_path::SugarPath;

use crate::CWD;

pub trait PathExt {
  /// Relative to the cwd set by [crate::ErrorKind::to_readable_string], the
  /// path as is otherwise.
  fn may_display_relative(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn may_display_relative(&self) -> Cow<str> {
    if !self.is_absolute() || !CWD.is_set() {
      return self.to_string_lossy();
    }
    CWD.with(|cwd| Cow::Owned(self.relative(cwd).to_string_lossy().into_owned()))
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  #[test]
  fn relative_paths_are_kept() {
    let cwd = PathBuf::from("/project");
    CWD.set(&cwd, || {
      assert_eq!(Path::new("icons/a.svg").may_display_relative(), "icons/a.svg");
      assert_eq!(Path::new("/project/icons/a.svg").may_display_relative(), "icons/a.svg");
    });
    assert_eq!(Path::new("/project/icons/a.svg").may_display_relative(), "/project/icons/a.svg");
  }
}
