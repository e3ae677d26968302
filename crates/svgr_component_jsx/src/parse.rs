use std::borrow::Cow;

use quick_xml::{
  events::{BytesStart, Event},
  Reader,
};
use svgr_component_error::{Error, Result};

use crate::{Attribute, Element, Node};

/// Parses svg markup into an [Element] tree rooted at `<svg>`.
pub fn parse_svg(source: &str) -> Result<Element> {
  let mut reader = Reader::from_str(source);

  let mut stack: Vec<Element> = vec![];
  let mut root: Option<Element> = None;

  loop {
    let event = reader
      .read_event()
      .map_err(|err| Error::invalid_svg(err.to_string(), Some(reader.error_position() as u64)))?;
    let position = reader.buffer_position() as u64;

    match event {
      Event::Start(start) => stack.push(element_from_start(&start, position)?),
      Event::Empty(start) => {
        let element = element_from_start(&start, position)?;
        attach(&mut stack, &mut root, element, position)?;
      }
      Event::End(_) => {
        // quick-xml already verified that the end tag matches
        let element = stack
          .pop()
          .ok_or_else(|| Error::invalid_svg("unexpected closing tag", Some(position)))?;
        attach(&mut stack, &mut root, element, position)?;
      }
      Event::Text(text) => {
        if let Some(parent) = stack.last_mut() {
          let text = match text.unescape() {
            Ok(text) => text.into_owned(),
            // Entities declared in a DOCTYPE (Illustrator's `&ns_svg;`) are kept verbatim
            Err(_) => String::from_utf8_lossy(&text).into_owned(),
          };
          // Indentation between elements
          if parent.preserves_whitespace() || !text.trim().is_empty() {
            parent.children.push(Node::Text(text));
          }
        }
      }
      Event::CData(data) => {
        if let Some(parent) = stack.last_mut() {
          let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
          parent.children.push(Node::Text(text));
        }
      }
      Event::Eof => break,
      _ => {}
    }
  }

  if let Some(unclosed) = stack.last() {
    return Err(Error::invalid_svg(
      format!("unclosed element <{}>", unclosed.name),
      Some(reader.buffer_position() as u64),
    ));
  }

  match root {
    Some(root) if root.name == "svg" => Ok(root),
    Some(root) => Err(Error::invalid_svg(
      format!("expected an <svg> root element, found <{}>", root.name),
      None,
    )),
    None => Err(Error::invalid_svg("no <svg> element found", None)),
  }
}

fn attach(
  stack: &mut [Element],
  root: &mut Option<Element>,
  element: Element,
  position: u64,
) -> Result<()> {
  if let Some(parent) = stack.last_mut() {
    parent.children.push(Node::Element(element));
  } else if root.is_none() {
    *root = Some(element);
  } else {
    return Err(Error::invalid_svg(
      format!("unexpected second root element <{}>", element.name),
      Some(position),
    ));
  }
  Ok(())
}

fn element_from_start(start: &BytesStart, position: u64) -> Result<Element> {
  let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
  for attr in start.attributes() {
    let attr = attr.map_err(|err| Error::invalid_svg(err.to_string(), Some(position)))?;
    let value = match attr.unescape_value() {
      Ok(value) => value,
      Err(_) => Cow::Owned(String::from_utf8_lossy(&attr.value).into_owned()),
    };
    element.attributes.push(Attribute {
      name: String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
      value: value.into_owned(),
    });
  }
  Ok(element)
}
