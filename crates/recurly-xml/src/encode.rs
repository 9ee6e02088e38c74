//! Field encoders used by [`xml_record!`](crate::xml_record).
//!
//! Absent fields are omitted from the output. Collections are written in
//! stored order, and a present but empty collection becomes an empty
//! wrapper element.

use crate::{Element, MapperConfig, XmlRecord, XmlValue};

/// Encode an attribute on the record's own element.
pub fn attr(value: &Option<String>, out: &mut Element, _config: &MapperConfig, name: &str) {
    if let Some(value) = value {
        out.set_attr(name, value.clone());
    }
}

/// Encode a scalar child element.
pub fn value<T: XmlValue>(value: &Option<T>, out: &mut Element, config: &MapperConfig, name: &str) {
    if let Some(value) = value {
        out.push(scalar(value, config, name));
    }
}

/// Encode a nested record child element.
pub fn record<T: XmlRecord>(value: &Option<T>, out: &mut Element, config: &MapperConfig, name: &str) {
    if let Some(value) = value {
        out.push(value.to_element(name, config));
    }
}

/// Encode a boxed nested record child element.
#[allow(clippy::borrowed_box)]
pub fn boxed<T: XmlRecord>(value: &Option<Box<T>>, out: &mut Element, config: &MapperConfig, name: &str) {
    if let Some(value) = value {
        out.push(value.to_element(name, config));
    }
}

/// Encode repeated record items inside a wrapper.
pub fn records<T: XmlRecord>(
    value: &Option<Vec<T>>,
    out: &mut Element,
    config: &MapperConfig,
    wrapper: &str,
    item: &str,
) {
    if let Some(items) = value {
        let mut list = Element::new(wrapper);
        for entry in items {
            list.push(entry.to_element(item, config));
        }
        out.push(list);
    }
}

/// Encode repeated scalar items inside a wrapper.
pub fn values<T: XmlValue>(
    value: &Option<Vec<T>>,
    out: &mut Element,
    config: &MapperConfig,
    wrapper: &str,
    item: &str,
) {
    if let Some(items) = value {
        let mut list = Element::new(wrapper);
        for entry in items {
            list.push(scalar(entry, config, item));
        }
        out.push(list);
    }
}

fn scalar<T: XmlValue>(value: &T, config: &MapperConfig, name: &str) -> Element {
    let mut element = Element::with_text(name, value.to_text());
    if config.type_attributes {
        if let Some(hint) = T::TYPE_HINT {
            element.set_attr("type", hint);
        }
    }
    element
}
