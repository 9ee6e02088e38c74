//! XML mapping engine for Recurly v2 resources.
//!
//! The API speaks an XML dialect with two conventions that a plain serde
//! mapping gets wrong:
//!
//! - nullable elements are sent as `<canceled_at nil="nil"></canceled_at>`
//!   and must decode to `None`, not to a zero value or an empty string;
//! - typed scalars carry a `type="integer|float|dateTime|boolean"` hint.
//!
//! This crate provides:
//!
//! - **Reader/writer**: [`parse_document`] and [`render_document`] convert
//!   between text and an [`Element`] tree using `quick-xml`.
//! - **Scalars**: [`XmlValue`] coerces element text by declared type, with
//!   exact decimals for money.
//! - **Records**: [`xml_record!`] declares a resource struct and its static
//!   [`FieldSpec`] table; [`XmlRecord`] decodes and encodes by walking it.
//! - **Closed sets**: [`wire_enum!`] declares token enumerations.
//!
//! # Example
//!
//! ```
//! use recurly_xml::{xml_record, MapperConfig};
//!
//! xml_record! {
//!     #[derive(Debug, Default, PartialEq, Eq)]
//!     pub struct Note => "note" {
//!         pub message: Option<String> = value("message"),
//!         pub created_at: Option<chrono::DateTime<chrono::Utc>> = value("created_at"),
//!     }
//! }
//!
//! let note: Note = recurly_xml::from_str(
//!     r#"<note><message>hello</message><created_at nil="nil"/></note>"#,
//! )?;
//! assert_eq!(note.created_at, None);
//!
//! let config = MapperConfig::default().with_declaration(false);
//! let xml = recurly_xml::to_string_with(&note, &config)?;
//! assert_eq!(xml, "<note><message>hello</message></note>");
//! # Ok::<(), recurly_xml::XmlError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
pub mod decode;
mod element;
pub mod encode;
mod error;
mod reader;
mod record;
mod value;
mod wire_enum;
mod writer;

pub use config::{MapperConfig, UnknownEnumPolicy, DEFAULT_MAX_DEPTH};
pub use element::Element;
pub use error::{Result, XmlError};
pub use reader::parse_document;
pub use record::{FieldKind, FieldSpec, XmlRecord};
pub use value::{ValueError, XmlValue};
pub use writer::render_document;

/// Decode a document whose root is `T::TAG`, using the default configuration.
///
/// # Errors
///
/// See [`from_str_with`].
pub fn from_str<T: XmlRecord>(input: &str) -> Result<T> {
    from_str_with(input, &MapperConfig::default())
}

/// Decode a document whose root is `T::TAG`.
///
/// # Errors
///
/// Returns `Malformed` for ill-formed text, `UnexpectedRoot` when the root
/// tag is not `T::TAG`, and any field-level error from the decoder. There
/// is no partial result.
pub fn from_str_with<T: XmlRecord>(input: &str, config: &MapperConfig) -> Result<T> {
    let root = parse_document(input, config)?;
    if root.name != T::TAG {
        return Err(XmlError::UnexpectedRoot {
            expected: T::TAG,
            found: root.name,
        });
    }

    let record = T::from_element(&root, config)?;
    tracing::debug!(root = T::TAG, bytes = input.len(), "Decoded document");
    Ok(record)
}

/// Encode `record` as a document rooted at `T::TAG`, using the default
/// configuration.
///
/// # Errors
///
/// See [`to_string_with`].
pub fn to_string<T: XmlRecord>(record: &T) -> Result<String> {
    to_string_with(record, &MapperConfig::default())
}

/// Encode `record` as a document rooted at `T::TAG`.
///
/// # Errors
///
/// Returns `XmlError::Write` if the writer fails.
pub fn to_string_with<T: XmlRecord>(record: &T, config: &MapperConfig) -> Result<String> {
    let root = record.to_element(T::TAG, config);
    let xml = render_document(&root, config)?;
    tracing::debug!(root = T::TAG, bytes = xml.len(), "Encoded document");
    Ok(xml)
}
