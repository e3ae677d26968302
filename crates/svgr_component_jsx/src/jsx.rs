use std::collections::BTreeMap;

use heck::{ToLowerCamelCase, ToUpperCamelCase};

use crate::{Config, Element, ExpandProps, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttr {
  Str { name: String, value: String },
  Expr { name: String, expr: String },
  Spread(String),
}

impl JsxAttr {
  fn name(&self) -> Option<&str> {
    match self {
      JsxAttr::Str { name, .. } | JsxAttr::Expr { name, .. } => Some(name),
      JsxAttr::Spread(_) => None,
    }
  }

  /// `"{props.color}"` is an expression, anything else a string.
  fn from_value(name: impl Into<String>, value: &str) -> Self {
    match value
      .strip_prefix('{')
      .and_then(|value| value.strip_suffix('}'))
    {
      Some(expr) => JsxAttr::Expr {
        name: name.into(),
        expr: expr.to_string(),
      },
      None => JsxAttr::Str {
        name: name.into(),
        value: value.to_string(),
      },
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxChild {
  Element(JsxElement),
  Expr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
  pub name: String,
  pub attrs: Vec<JsxAttr>,
  pub children: Vec<JsxChild>,
}

impl JsxElement {
  fn set_attr(&mut self, attr: JsxAttr) {
    let name = attr.name().map(ToOwned::to_owned);
    match self
      .attrs
      .iter_mut()
      .find(|existing| existing.name().is_some() && existing.name() == name.as_deref())
    {
      Some(existing) => *existing = attr,
      None => self.attrs.push(attr),
    }
  }

  fn remove_attr(&mut self, name: &str) {
    self.attrs.retain(|attr| attr.name() != Some(name));
  }

  pub fn render(&self) -> String {
    let mut out = String::new();
    self.render_into(&mut out);
    out
  }

  fn render_into(&self, out: &mut String) {
    out.push('<');
    out.push_str(&self.name);
    for attr in &self.attrs {
      out.push(' ');
      match attr {
        JsxAttr::Str { name, value } if needs_expression(value) => {
          out.push_str(&format!("{name}={{{}}}", js_string(value)));
        }
        JsxAttr::Str { name, value } => out.push_str(&format!("{name}=\"{value}\"")),
        JsxAttr::Expr { name, expr } => out.push_str(&format!("{name}={{{expr}}}")),
        JsxAttr::Spread(expr) => out.push_str(&format!("{{...{expr}}}")),
      }
    }
    if self.children.is_empty() {
      out.push_str(" />");
      return;
    }
    out.push('>');
    for child in &self.children {
      match child {
        JsxChild::Element(el) => el.render_into(out),
        JsxChild::Expr(expr) => {
          out.push('{');
          out.push_str(expr);
          out.push('}');
        }
      }
    }
    out.push_str("</");
    out.push_str(&self.name);
    out.push('>');
  }
}

/// Converts the svg tree into JSX and applies the prop-related options to the root.
pub fn to_jsx(root: &Element, config: &Config) -> JsxElement {
  let empty = BTreeMap::new();
  let replacements = config.replace_attr_values.as_ref().unwrap_or(&empty);

  let mut root_children = root.children.clone();
  let title = if config.title_prop() {
    Some(take_child(&mut root_children, "title"))
  } else {
    None
  };
  let desc = if config.desc_prop() {
    Some(take_child(&mut root_children, "desc"))
  } else {
    None
  };

  let mut svg = convert_element(
    &Element {
      name: root.name.clone(),
      attributes: root.attributes.clone(),
      children: root_children,
    },
    replacements,
  );

  if !config.dimensions() {
    svg.remove_attr("width");
    svg.remove_attr("height");
  }
  if config.icon() {
    svg.set_attr(JsxAttr::from_value("width", "1em"));
    svg.set_attr(JsxAttr::from_value("height", "1em"));
  }
  if let Some(svg_props) = &config.svg_props {
    for (name, value) in svg_props {
      svg.set_attr(JsxAttr::from_value(name.as_str(), value));
    }
  }
  if config.with_ref() {
    svg.set_attr(JsxAttr::from_value("ref", "{ref}"));
  }

  let mut injected = vec![];
  if let Some(existing) = title {
    svg.set_attr(JsxAttr::from_value("aria-labelledby", "{titleId}"));
    injected.push(JsxChild::Expr(optional_text_element("title", "titleId", existing)));
  }
  if let Some(existing) = desc {
    svg.set_attr(JsxAttr::from_value("aria-describedby", "{descId}"));
    injected.push(JsxChild::Expr(optional_text_element("desc", "descId", existing)));
  }
  injected.append(&mut svg.children);
  svg.children = injected;

  match config.expand_props() {
    ExpandProps::Start => svg.attrs.insert(0, JsxAttr::Spread("props".to_string())),
    ExpandProps::End => svg.attrs.push(JsxAttr::Spread("props".to_string())),
    ExpandProps::Off => {}
  }

  svg
}

/// Removes the first `<name>` child and returns its text, if there was one.
fn take_child(children: &mut Vec<Node>, name: &str) -> Option<String> {
  let idx = children
    .iter()
    .position(|child| matches!(child, Node::Element(el) if el.name == name))?;
  match children.remove(idx) {
    Node::Element(el) => Some(el.text()),
    Node::Text(_) => None,
  }
}

/// `{title ? <title id={titleId}>{title}</title> : null}`, falling back to the
/// markup's own text while the prop is `undefined`.
fn optional_text_element(tag: &str, id: &str, existing: Option<String>) -> String {
  let from_prop = format!("<{tag} id={{{id}}}>{{{tag}}}</{tag}>");
  match existing {
    Some(text) => format!(
      "{tag} === undefined ? <{tag} id={{{id}}}>{{{}}}</{tag}> : {tag} ? {from_prop} : null",
      js_string(&text)
    ),
    None => format!("{tag} ? {from_prop} : null"),
  }
}

fn convert_element(element: &Element, replacements: &BTreeMap<String, String>) -> JsxElement {
  let attrs = element
    .attributes
    .iter()
    .map(|attr| {
      let name = jsx_attribute_name(&attr.name);
      if name == "style" {
        return JsxAttr::Expr {
          name,
          expr: style_to_object(&attr.value),
        };
      }
      match replacements.get(&attr.value) {
        Some(replacement) => JsxAttr::from_value(name, replacement),
        None => JsxAttr::Str {
          name,
          value: attr.value.clone(),
        },
      }
    })
    .collect();

  let children = element
    .children
    .iter()
    .map(|child| match child {
      Node::Element(el) => JsxChild::Element(convert_element(el, replacements)),
      Node::Text(text) => JsxChild::Expr(js_string(text)),
    })
    .collect();

  JsxElement {
    name: element.name.clone(),
    attrs,
    children,
  }
}

/// Maps an svg attribute to the prop name React expects.
pub fn jsx_attribute_name(name: &str) -> String {
  match name {
    "class" => "className".to_string(),
    "for" => "htmlFor".to_string(),
    "tabindex" => "tabIndex".to_string(),
    "crossorigin" => "crossOrigin".to_string(),
    _ if name.starts_with("data-") || name.starts_with("aria-") => name.to_string(),
    _ if name.contains(|c| c == '-' || c == ':') => name.to_lower_camel_case(),
    _ => name.to_string(),
  }
}

/// `fill:red;stroke-width:2` -> `{ fill: "red", strokeWidth: 2 }`
pub fn style_to_object(style: &str) -> String {
  let properties = style
    .split(';')
    .filter_map(|declaration| declaration.split_once(':'))
    .map(|(property, value)| (property.trim(), value.trim()))
    .filter(|(property, value)| !property.is_empty() && !value.is_empty())
    .map(|(property, value)| format!("{}: {}", style_key(property), style_value(value)))
    .collect::<Vec<_>>();

  if properties.is_empty() {
    "{}".to_string()
  } else {
    format!("{{ {} }}", properties.join(", "))
  }
}

fn style_key(property: &str) -> String {
  if property.starts_with("--") {
    js_string(property)
  } else if let Some(rest) = property.strip_prefix("-ms-") {
    format!("ms{}", rest.to_upper_camel_case())
  } else if property.starts_with('-') {
    property.to_upper_camel_case()
  } else {
    property.to_lower_camel_case()
  }
}

fn style_value(value: &str) -> String {
  let is_number = value.parse::<f64>().is_ok()
    && value
      .chars()
      .all(|c| c.is_ascii_digit() || c == '.' || c == '-');
  if is_number {
    value.to_string()
  } else {
    js_string(value)
  }
}

fn needs_expression(value: &str) -> bool {
  value.contains(|c| matches!(c, '"' | '&' | '\\' | '\n' | '\r'))
}

/// Quotes `value` as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
  serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parse_svg;

  fn render(source: &str, config: Config) -> String {
    to_jsx(&parse_svg(source).unwrap(), &config).render()
  }

  #[test]
  fn renames_attributes_for_react() {
    assert_eq!(jsx_attribute_name("stroke-width"), "strokeWidth");
    assert_eq!(jsx_attribute_name("xlink:href"), "xlinkHref");
    assert_eq!(jsx_attribute_name("xmlns:xlink"), "xmlnsXlink");
    assert_eq!(jsx_attribute_name("xml:space"), "xmlSpace");
    assert_eq!(jsx_attribute_name("class"), "className");
    assert_eq!(jsx_attribute_name("viewBox"), "viewBox");
    assert_eq!(jsx_attribute_name("data-name"), "data-name");
    assert_eq!(jsx_attribute_name("aria-hidden"), "aria-hidden");
  }

  #[test]
  fn converts_style_strings_to_objects() {
    assert_eq!(
      style_to_object("fill: #fff; stroke-width:2;-webkit-transform:none;--accent:red"),
      r##"{ fill: "#fff", strokeWidth: 2, WebkitTransform: "none", "--accent": "red" }"##
    );
    assert_eq!(style_to_object(" ; "), "{}");
  }

  #[test]
  fn renders_props_spread_at_the_end_by_default() {
    assert_eq!(
      render(
        r#"<svg viewBox="0 0 24 24" class="icon"><text>a "quote"</text></svg>"#,
        Config::default()
      ),
      r#"<svg viewBox="0 0 24 24" className="icon" {...props}><text>{"a \"quote\""}</text></svg>"#
    );
  }

  #[test]
  fn mixed_text_runs_keep_their_spacing() {
    assert_eq!(
      render(
        "<svg>\n  <text>Hello <tspan>World</tspan></text>\n</svg>",
        Config {
          expand_props: Some(ExpandProps::Off),
          ..Default::default()
        }
      ),
      r#"<svg><text>{"Hello "}<tspan>{"World"}</tspan></text></svg>"#
    );
  }

  #[test]
  fn applies_root_options() {
    let config = Config {
      icon: Some(true),
      ref_: Some(true),
      expand_props: Some(ExpandProps::Start),
      svg_props: Some(BTreeMap::from([
        ("role".to_string(), "img".to_string()),
        ("focusable".to_string(), "{false}".to_string()),
      ])),
      replace_attr_values: Some(BTreeMap::from([(
        "#000".to_string(),
        "{props.color}".to_string(),
      )])),
      ..Default::default()
    };
    assert_eq!(
      render(
        r##"<svg width="24" height="24"><path fill="#000" d="M0 0"/></svg>"##,
        config
      ),
      r#"<svg {...props} width="1em" height="1em" focusable={false} role="img" ref={ref}><path fill={props.color} d="M0 0" /></svg>"#
    );
  }

  #[test]
  fn drops_dimensions_when_disabled() {
    let config = Config {
      dimensions: Some(false),
      expand_props: Some(ExpandProps::Off),
      ..Default::default()
    };
    assert_eq!(
      render(r#"<svg width="24" height="24" viewBox="0 0 24 24"/>"#, config),
      r#"<svg viewBox="0 0 24 24" />"#
    );
  }

  #[test]
  fn title_prop_reuses_the_existing_title() {
    let config = Config {
      title_prop: Some(true),
      desc_prop: Some(true),
      ..Default::default()
    };
    assert_eq!(
      render(r#"<svg><title>Logo</title><path/></svg>"#, config),
      concat!(
        r#"<svg aria-labelledby={titleId} aria-describedby={descId} {...props}>"#,
        r#"{title === undefined ? <title id={titleId}>{"Logo"}</title> : title ? <title id={titleId}>{title}</title> : null}"#,
        r#"{desc ? <desc id={descId}>{desc}</desc> : null}"#,
        r#"<path /></svg>"#
      )
    );
  }
}
