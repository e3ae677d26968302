use std::collections::BTreeMap;

use serde::Deserialize;

/// SVGR-compatible component options. Every field is optional so that a
/// caller-supplied record can be laid over a set of defaults with
/// [Config::merge]; unset fields fall back to SVGR's own defaults. SVGR options
/// without an implementation here (`native`, `template`, `plugins`, ...) are
/// rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
  pub icon: Option<bool>,
  pub dimensions: Option<bool>,
  pub expand_props: Option<ExpandProps>,
  #[serde(rename = "ref")]
  pub ref_: Option<bool>,
  pub title_prop: Option<bool>,
  pub desc_prop: Option<bool>,
  pub memo: Option<bool>,
  pub typescript: Option<bool>,
  pub svgo: Option<bool>,
  pub svg_props: Option<BTreeMap<String, String>>,
  pub replace_attr_values: Option<BTreeMap<String, String>>,
  pub jsx_runtime: Option<JsxRuntime>,
  pub export_type: Option<ExportType>,
  pub named_export: Option<String>,
}

impl Config {
  /// Shallow merge: every key set in `overrides` wins, the rest is kept.
  pub fn merge(&self, overrides: &Config) -> Config {
    Config {
      icon: overrides.icon.or(self.icon),
      dimensions: overrides.dimensions.or(self.dimensions),
      expand_props: overrides.expand_props.or(self.expand_props),
      ref_: overrides.ref_.or(self.ref_),
      title_prop: overrides.title_prop.or(self.title_prop),
      desc_prop: overrides.desc_prop.or(self.desc_prop),
      memo: overrides.memo.or(self.memo),
      typescript: overrides.typescript.or(self.typescript),
      svgo: overrides.svgo.or(self.svgo),
      svg_props: overrides
        .svg_props
        .clone()
        .or_else(|| self.svg_props.clone()),
      replace_attr_values: overrides
        .replace_attr_values
        .clone()
        .or_else(|| self.replace_attr_values.clone()),
      jsx_runtime: overrides.jsx_runtime.or(self.jsx_runtime),
      export_type: overrides.export_type.or(self.export_type),
      named_export: overrides
        .named_export
        .clone()
        .or_else(|| self.named_export.clone()),
    }
  }

  pub fn icon(&self) -> bool {
    self.icon.unwrap_or(false)
  }

  pub fn dimensions(&self) -> bool {
    self.dimensions.unwrap_or(true)
  }

  pub fn expand_props(&self) -> ExpandProps {
    self.expand_props.unwrap_or_default()
  }

  pub fn with_ref(&self) -> bool {
    self.ref_.unwrap_or(false)
  }

  pub fn title_prop(&self) -> bool {
    self.title_prop.unwrap_or(false)
  }

  pub fn desc_prop(&self) -> bool {
    self.desc_prop.unwrap_or(false)
  }

  pub fn memo(&self) -> bool {
    self.memo.unwrap_or(false)
  }

  pub fn typescript(&self) -> bool {
    self.typescript.unwrap_or(false)
  }

  pub fn svgo(&self) -> bool {
    self.svgo.unwrap_or(true)
  }

  pub fn jsx_runtime(&self) -> JsxRuntime {
    self.jsx_runtime.unwrap_or_default()
  }

  pub fn export_type(&self) -> ExportType {
    self.export_type.unwrap_or_default()
  }

  pub fn named_export(&self) -> &str {
    self.named_export.as_deref().unwrap_or("ReactComponent")
  }
}

/// Where `{...props}` lands on the root `<svg>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawExpandProps")]
pub enum ExpandProps {
  Start,
  #[default]
  End,
  Off,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpandProps {
  Enabled(bool),
  Position(Position),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum Position {
  Start,
  End,
}

impl From<RawExpandProps> for ExpandProps {
  fn from(raw: RawExpandProps) -> Self {
    match raw {
      RawExpandProps::Enabled(true) | RawExpandProps::Position(Position::End) => ExpandProps::End,
      RawExpandProps::Enabled(false) => ExpandProps::Off,
      RawExpandProps::Position(Position::Start) => ExpandProps::Start,
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsxRuntime {
  #[default]
  Classic,
  Automatic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportType {
  #[default]
  Default,
  Named,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caller_keys_override_and_absent_keys_are_kept() {
    let defaults = Config {
      memo: Some(true),
      typescript: Some(true),
      svgo: Some(true),
      title_prop: Some(true),
      ..Default::default()
    };
    let merged = defaults.merge(&Config {
      typescript: Some(false),
      ..Default::default()
    });
    assert_eq!(
      merged,
      Config {
        memo: Some(true),
        typescript: Some(false),
        svgo: Some(true),
        title_prop: Some(true),
        ..Default::default()
      }
    );
  }

  #[test]
  fn deserializes_svgr_option_names() {
    let config: Config = serde_json::from_str(
      r##"{
        "ref": true,
        "titleProp": true,
        "expandProps": "start",
        "jsxRuntime": "automatic",
        "exportType": "named",
        "svgProps": { "role": "img" },
        "replaceAttrValues": { "#000": "currentColor" }
      }"##,
    )
    .unwrap();
    assert!(config.with_ref());
    assert!(config.title_prop());
    assert_eq!(config.expand_props(), ExpandProps::Start);
    assert_eq!(config.jsx_runtime(), JsxRuntime::Automatic);
    assert_eq!(config.export_type(), ExportType::Named);
    assert_eq!(config.named_export(), "ReactComponent");
    assert_eq!(config.svg_props.unwrap()["role"], "img");
  }

  #[test]
  fn unsupported_svgr_options_are_rejected() {
    for config in [
      r#"{ "native": true }"#,
      r#"{ "svgoConfig": {} }"#,
      r#"{ "memo": true, "template": "tpl" }"#,
    ] {
      let err = serde_json::from_str::<Config>(config).unwrap_err();
      assert!(err.to_string().contains("unknown field"), "{err}");
    }
  }

  #[test]
  fn expand_props_accepts_booleans() {
    let off: Config = serde_json::from_str(r#"{ "expandProps": false }"#).unwrap();
    let on: Config = serde_json::from_str(r#"{ "expandProps": true }"#).unwrap();
    assert_eq!(off.expand_props(), ExpandProps::Off);
    assert_eq!(on.expand_props(), ExpandProps::End);
    assert_eq!(Config::default().expand_props(), ExpandProps::End);
  }
}
