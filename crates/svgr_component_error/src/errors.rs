use std::fmt::Display;

use crate::Error;

/// Every failure of a build that keeps going after the first error. Never empty.
#[derive(Debug)]
pub struct Errors(Vec<Error>);

impl Errors {
  pub fn new(err: Error) -> Self {
    Self(vec![err])
  }

  /// `None` for an empty list.
  pub fn try_from_vec(errors: Vec<Error>) -> Option<Self> {
    if errors.is_empty() {
      None
    } else {
      Some(Self(errors))
    }
  }

  pub fn push(&mut self, error: Error) {
    self.0.push(error);
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn first(&self) -> &Error {
    &self.0[0]
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Error> {
    self.0.iter()
  }

  pub fn into_vec(self) -> Vec<Error> {
    self.0
  }
}

impl From<Error> for Errors {
  fn from(error: Error) -> Self {
    Self::new(error)
  }
}

impl IntoIterator for Errors {
  type Item = Error;
  type IntoIter = std::vec::IntoIter<Error>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl Display for Errors {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{} error(s):", self.0.len())?;
    for err in &self.0 {
      writeln!(f, "{err}")?;
    }
    Ok(())
  }
}
