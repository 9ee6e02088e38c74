//! Document reader: text to [`Element`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Element, MapperConfig, Result, XmlError};

/// Parse a document into its root element.
///
/// Text inside a leaf element is kept exactly as written. Whitespace-only
/// text between child elements (indentation) is dropped. Declarations,
/// comments, and processing instructions are skipped.
///
/// # Errors
///
/// Returns `XmlError::Malformed` for mismatched or unclosed tags, a missing
/// or repeated root element, character data outside the root, or nesting
/// deeper than `config.max_depth`.
pub fn parse_document(input: &str, config: &MapperConfig) -> Result<Element> {
    let mut reader = Reader::from_str(input);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            XmlError::Malformed(format!("{e} at byte {}", reader.error_position()))
        })?;

        match event {
            Event::Start(start) => {
                if stack.len() >= config.max_depth {
                    return Err(XmlError::Malformed(format!(
                        "nesting exceeds {} levels",
                        config.max_depth
                    )));
                }
                let element = open_element(&start)?;
                if stack.is_empty() && root.is_some() {
                    return Err(extra_root(&element));
                }
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| XmlError::Malformed("unbalanced end tag".to_string()))?;
                drop_indentation(&mut element);
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| XmlError::Malformed(e.to_string()))?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let bytes = data.into_inner();
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| XmlError::Malformed(format!("invalid CDATA: {e}")))?;
                append_text(&mut stack, text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Malformed(format!(
            "unclosed element <{}>",
            open.name
        )));
    }

    root.ok_or_else(|| XmlError::Malformed("document has no root element".to_string()))
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| XmlError::Malformed(format!("invalid tag name: {e}")))?
        .to_string();
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::Malformed(format!("bad attribute: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| XmlError::Malformed(format!("invalid attribute name: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| XmlError::Malformed(format!("bad attribute value: {e}")))?;
        element.set_attr(key, value.into_owned());
    }

    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(extra_root(&element));
    }
    *root = Some(element);
    Ok(())
}

fn append_text(stack: &mut [Element], text: &str) -> Result<()> {
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(XmlError::Malformed(format!(
            "character data outside the root element: {:?}",
            text.trim()
        ))),
    }
}

/// Whitespace around child elements is layout, not content.
fn drop_indentation(element: &mut Element) {
    if !element.children.is_empty() && element.text.trim().is_empty() {
        element.text.clear();
    }
}

fn extra_root(element: &Element) -> XmlError {
    XmlError::Malformed(format!(
        "unexpected second root element <{}>",
        element.name
    ))
}
