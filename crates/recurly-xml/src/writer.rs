//! Document writer: [`Element`] tree to text.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Element, MapperConfig, Result, XmlError};

/// Render `root` as a document.
///
/// Elements without text or children are written self-closing. Output is
/// compact unless `config.indent` is set.
///
/// # Errors
///
/// Returns `XmlError::Write` if the writer fails.
pub fn render_document(root: &Element, config: &MapperConfig) -> Result<String> {
    let mut writer = match config.indent {
        Some(spaces) => Writer::new_with_indent(Vec::new(), b' ', spaces),
        None => Writer::new(Vec::new()),
    };

    if config.declaration {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
    }
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).map_err(|e| XmlError::Write(e.to_string()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text.is_empty() && element.children.is_empty() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if !element.text.is_empty() {
        emit(writer, Event::Text(BytesText::new(&element.text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| XmlError::Write(e.to_string()))
}
