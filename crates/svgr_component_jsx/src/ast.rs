/// Minimal XML tree: comments, processing instructions and doctypes never
/// make it into a component, so the parser drops them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  Element(Element),
  Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
  pub name: String,
  pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
  pub name: String,
  pub attributes: Vec<Attribute>,
  pub children: Vec<Node>,
}

impl Element {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      attributes: vec![],
      children: vec![],
    }
  }

  pub fn attr(&self, name: &str) -> Option<&str> {
    self
      .attributes
      .iter()
      .find(|attr| attr.name == name)
      .map(|attr| attr.value.as_str())
  }

  pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
    let value = value.into();
    match self.attributes.iter_mut().find(|attr| attr.name == name) {
      Some(attr) => attr.value = value,
      None => self.attributes.push(Attribute {
        name: name.to_string(),
        value,
      }),
    }
  }

  pub fn remove_attr(&mut self, name: &str) -> Option<String> {
    let idx = self.attributes.iter().position(|attr| attr.name == name)?;
    Some(self.attributes.remove(idx).value)
  }

  /// Text content elements, where whitespace is rendered.
  pub fn preserves_whitespace(&self) -> bool {
    matches!(self.name.as_str(), "text" | "tspan" | "textPath" | "style")
  }

  pub fn elements(&self) -> impl Iterator<Item = &Element> {
    self.children.iter().filter_map(|child| match child {
      Node::Element(el) => Some(el),
      Node::Text(_) => None,
    })
  }

  /// Concatenated direct text children.
  pub fn text(&self) -> String {
    self
      .children
      .iter()
      .filter_map(|child| match child {
        Node::Text(text) => Some(text.as_str()),
        Node::Element(_) => None,
      })
      .collect()
  }
}
