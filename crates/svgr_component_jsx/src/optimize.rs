use crate::{Element, Node};

/// Namespaces written by drawing tools that carry no rendering information.
const EDITOR_NAMESPACES: &[&str] = &[
  "http://inkscape.sourceforge.net/DTD/sodipodi-0.dtd",
  "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd",
  "http://www.inkscape.org/namespaces/inkscape",
  "http://www.bohemiancoding.com/sketch/ns",
  "http://ns.adobe.com/AdobeIllustrator/10.0/",
  "http://ns.adobe.com/Graphs/1.0/",
  "http://ns.adobe.com/AdobeSVGViewerExtensions/3.0/",
  "http://ns.adobe.com/Variables/1.0/",
  "http://ns.adobe.com/SaveForWeb/1.0/",
  "http://ns.adobe.com/Extensibility/1.0/",
  "http://ns.adobe.com/Flows/1.0/",
  "http://ns.adobe.com/ImageReplacement/1.0/",
  "http://ns.adobe.com/GenericCustomNamespace/1.0/",
  "http://ns.adobe.com/XPath/1.0/",
  "http://schemas.microsoft.com/visio/2003/SVGExtensions/",
  "http://taptrix.com/vectorillustrator/svg_extensions",
  "http://www.figma.com/figma/ns",
  "http://purl.org/dc/elements/1.1/",
  "http://creativecommons.org/ns#",
  "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
  "http://www.serif.com/",
  "http://www.vector.evaxdesign.sk",
];

const REMOVED_ELEMENTS: &[&str] = &["metadata", "sodipodi:namedview"];

const REMOVED_ROOT_ATTRIBUTES: &[&str] = &["version", "xml:space", "enable-background"];

/// Collapses to nothing when they end up without children.
const CONTAINERS: &[&str] = &["g", "defs", "symbol", "marker", "clipPath", "mask", "pattern"];

/// A lightweight take on svgo's default preset. Comments, doctypes and
/// processing instructions are already gone after parsing.
pub fn optimize(root: &mut Element) {
  let editor_prefixes = remove_editor_namespace_declarations(root);
  for name in REMOVED_ROOT_ATTRIBUTES {
    root.remove_attr(name);
  }
  optimize_children(root, &editor_prefixes);
}

fn remove_editor_namespace_declarations(root: &mut Element) -> Vec<String> {
  let mut prefixes = vec![];
  root.attributes.retain(|attr| {
    let Some(prefix) = attr.name.strip_prefix("xmlns:") else {
      return true;
    };
    if EDITOR_NAMESPACES.contains(&attr.value.as_str()) {
      prefixes.push(prefix.to_string());
      false
    } else {
      true
    }
  });
  prefixes
}

fn is_editor_name(name: &str, editor_prefixes: &[String]) -> bool {
  name
    .split_once(':')
    .map_or(false, |(prefix, _)| editor_prefixes.iter().any(|p| p == prefix))
}

fn optimize_children(element: &mut Element, editor_prefixes: &[String]) {
  element
    .attributes
    .retain(|attr| !is_editor_name(&attr.name, editor_prefixes));
  for attr in element.attributes.iter_mut() {
    attr.value = collapse_whitespace(&attr.value).trim().to_string();
  }

  let preserve_whitespace = element.preserves_whitespace();
  let children = std::mem::take(&mut element.children);
  for child in children {
    match child {
      Node::Text(text) if preserve_whitespace => element.children.push(Node::Text(text)),
      Node::Text(text) => {
        if !text.trim().is_empty() {
          element.children.push(Node::Text(collapse_whitespace(&text)));
        }
      }
      Node::Element(mut child) => {
        if REMOVED_ELEMENTS.contains(&child.name.as_str())
          || is_editor_name(&child.name, editor_prefixes)
          || child.attr("display") == Some("none")
        {
          continue;
        }
        optimize_children(&mut child, editor_prefixes);

        if CONTAINERS.contains(&child.name.as_str())
          && child.children.is_empty()
          && child.attr("id").is_none()
        {
          continue;
        }
        // A bare group only adds nesting
        if child.name == "g" && child.attributes.is_empty() {
          element.children.extend(child.children);
          continue;
        }
        element.children.push(Node::Element(child));
      }
    }
  }
}

fn collapse_whitespace(value: &str) -> String {
  let mut out = String::with_capacity(value.len());
  let mut last_was_space = false;
  for ch in value.chars() {
    if ch.is_whitespace() {
      if !last_was_space {
        out.push(' ');
      }
      last_was_space = true;
    } else {
      out.push(ch);
      last_was_space = false;
    }
  }
  out
}
