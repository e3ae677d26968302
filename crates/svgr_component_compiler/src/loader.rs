use std::str::FromStr;

use swc_core::ecma::parser::{EsConfig, Syntax, TsConfig};

/// Syntax dialect used to parse a source text, named after esbuild loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
  Js,
  Jsx,
  Ts,
  Tsx,
}

impl Loader {
  pub fn is_typescript(self) -> bool {
    matches!(self, Loader::Ts | Loader::Tsx)
  }

  pub fn syntax(self) -> Syntax {
    match self {
      Loader::Js => Syntax::Es(Default::default()),
      Loader::Jsx => Syntax::Es(EsConfig {
        jsx: true,
        ..Default::default()
      }),
      Loader::Ts => Syntax::Typescript(Default::default()),
      Loader::Tsx => Syntax::Typescript(TsConfig {
        tsx: true,
        ..Default::default()
      }),
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Loader::Js => "js",
      Loader::Jsx => "jsx",
      Loader::Ts => "ts",
      Loader::Tsx => "tsx",
    }
  }
}

impl FromStr for Loader {
  type Err = svgr_component_error::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "js" => Ok(Self::Js),
      "jsx" => Ok(Self::Jsx),
      "ts" => Ok(Self::Ts),
      "tsx" => Ok(Self::Tsx),
      _ => Err(svgr_component_error::Error::panic(format!(
        "Unknown loader value \"{}\"",
        s
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loaders_round_trip_through_their_names() {
    for loader in [Loader::Js, Loader::Jsx, Loader::Ts, Loader::Tsx] {
      assert_eq!(Loader::from_str(loader.as_str()).unwrap(), loader);
    }
    assert!(Loader::from_str("json").is_err());
  }

  #[test]
  fn typed_loaders_select_the_typescript_grammar() {
    assert!(matches!(Loader::Tsx.syntax(), Syntax::Typescript(TsConfig { tsx: true, .. })));
    assert!(matches!(Loader::Jsx.syntax(), Syntax::Es(EsConfig { jsx: true, .. })));
    assert!(Loader::Tsx.is_typescript());
    assert!(!Loader::Jsx.is_typescript());
  }
}
