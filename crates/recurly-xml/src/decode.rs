//! Field decoders used by [`xml_record!`](crate::xml_record).
//!
//! Every decoder returns `Ok(None)` when its element is missing or marked
//! nil, so absence is never confused with a zero or empty value.

use crate::{Element, FieldKind, FieldSpec, MapperConfig, Result, ValueError, XmlError, XmlRecord, XmlValue};

/// Decode an attribute of the record's own element.
///
/// # Errors
///
/// Never fails; the signature matches the other decoders.
pub fn attr(element: &Element, _config: &MapperConfig, name: &str) -> Result<Option<String>> {
    Ok(element.attr(name).map(str::to_string))
}

/// Decode a scalar child element.
///
/// # Errors
///
/// Returns `TypeCoercion` or `UnknownEnumValue` when the text does not fit
/// the declared type.
pub fn value<T: XmlValue>(element: &Element, config: &MapperConfig, name: &str) -> Result<Option<T>> {
    match element.child(name) {
        Some(child) => scalar(child, config, name),
        None => Ok(None),
    }
}

/// Decode a nested record child element.
///
/// # Errors
///
/// Propagates the nested record's errors with `name` prefixed to the path.
pub fn record<T: XmlRecord>(element: &Element, config: &MapperConfig, name: &str) -> Result<Option<T>> {
    match element.child(name) {
        Some(child) if !child.is_nil() => T::from_element(child, config)
            .map(Some)
            .map_err(|e| e.within(name)),
        _ => Ok(None),
    }
}

/// Decode a nested record held behind a `Box`.
///
/// # Errors
///
/// Same as [`record`].
pub fn boxed<T: XmlRecord>(element: &Element, config: &MapperConfig, name: &str) -> Result<Option<Box<T>>> {
    Ok(record(element, config, name)?.map(Box::new))
}

/// Decode a wrapper of repeated record items, keeping document order.
///
/// A missing or nil wrapper is `None`; an empty wrapper is `Some(vec![])`.
///
/// # Errors
///
/// Propagates item errors with `wrapper[index]` prefixed to the path.
pub fn records<T: XmlRecord>(
    element: &Element,
    config: &MapperConfig,
    wrapper: &str,
    item: &str,
) -> Result<Option<Vec<T>>> {
    let Some(list) = element.child(wrapper).filter(|list| !list.is_nil()) else {
        return Ok(None);
    };

    list.children_named(item)
        .filter(|child| !child.is_nil())
        .enumerate()
        .map(|(index, child)| {
            T::from_element(child, config).map_err(|e| e.within(&format!("{wrapper}[{index}]")))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Decode a wrapper of repeated scalar items, keeping document order.
///
/// Nil items are skipped.
///
/// # Errors
///
/// Returns the first item that does not fit the declared type.
pub fn values<T: XmlValue>(
    element: &Element,
    config: &MapperConfig,
    wrapper: &str,
    item: &str,
) -> Result<Option<Vec<T>>> {
    let Some(list) = element.child(wrapper).filter(|list| !list.is_nil()) else {
        return Ok(None);
    };

    let mut items = Vec::new();
    for (index, child) in list.children_named(item).enumerate() {
        if let Some(value) = scalar(child, config, &format!("{wrapper}[{index}]"))? {
            items.push(value);
        }
    }
    Ok(Some(items))
}

/// Log child elements the field table does not declare.
///
/// Unknown children (action links, fields newer than this schema) are
/// skipped rather than rejected.
pub fn note_unknown(element: &Element, fields: &[FieldSpec]) {
    for child in &element.children {
        let declared = fields
            .iter()
            .any(|spec| spec.kind != FieldKind::Attribute && spec.wire == child.name);
        if !declared {
            tracing::trace!(parent = %element.name, element = %child.name, "Skipping undeclared element");
        }
    }
}

fn scalar<T: XmlValue>(element: &Element, config: &MapperConfig, path: &str) -> Result<Option<T>> {
    // Strings keep their text verbatim; typed scalars ignore surrounding whitespace.
    let text = if T::EMPTY_IS_VALUE {
        element.text.as_str()
    } else {
        element.text.trim()
    };
    if element.is_nil() || (text.is_empty() && !T::EMPTY_IS_VALUE) {
        return Ok(None);
    }

    if let (Some(hint), Some(declared)) = (element.type_hint(), T::TYPE_HINT) {
        if hint != declared {
            tracing::trace!(field = path, hint, declared, "Type hint differs from declared type");
        }
    }

    T::from_text(text, config)
        .map(Some)
        .map_err(|e| match e {
            ValueError::Invalid => XmlError::TypeCoercion {
                field: path.to_string(),
                expected: T::EXPECTED,
                value: text.to_string(),
            },
            ValueError::UnknownToken => XmlError::UnknownEnumValue {
                field: path.to_string(),
                expected: T::EXPECTED,
                value: text.to_string(),
            },
        })
}
