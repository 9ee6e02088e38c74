//! Records: resources with a statically declared field table.
//!
//! A record is declared once with [`xml_record!`](crate::xml_record). The
//! declaration produces the struct, its [`FieldSpec`] table, and the decoder
//! and encoder that walk the table.
//!
//! ```
//! use recurly_xml::{xml_record, XmlRecord};
//!
//! xml_record! {
//!     #[derive(Debug, Clone, Default, PartialEq, Eq)]
//!     pub struct Coupon => "coupon" {
//!         pub href: Option<String> = attr("href"),
//!         pub coupon_code: Option<String> = value("coupon_code"),
//!         pub max_redemptions: Option<i32> = value("max_redemptions"),
//!         pub plan_codes: Option<Vec<String>> = values("plan_codes", "plan_code"),
//!     }
//! }
//!
//! let coupon: Coupon = recurly_xml::from_str(
//!     "<coupon><coupon_code>spring</coupon_code><max_redemptions nil=\"nil\"/></coupon>",
//! )
//! .unwrap();
//! assert_eq!(coupon.coupon_code.as_deref(), Some("spring"));
//! assert_eq!(coupon.max_redemptions, None);
//! assert_eq!(Coupon::FIELDS[1].wire, "coupon_code");
//! ```

use crate::{Element, MapperConfig, Result};

/// How a field maps onto the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// An attribute on the record's own element.
    Attribute,
    /// A scalar child element.
    Value,
    /// A nested record child element.
    Record,
    /// A nested record held behind a `Box` (recursive schemas).
    Boxed,
    /// A wrapper element holding repeated record items.
    Records,
    /// A wrapper element holding repeated scalar items.
    Values,
}

/// One row of a record's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name.
    pub field: &'static str,
    /// Wire name: attribute name, child tag, or wrapper tag.
    pub wire: &'static str,
    /// Item tag inside the wrapper, for collections.
    pub item: Option<&'static str>,
    /// Mapping kind.
    pub kind: FieldKind,
}

/// A resource that maps to and from an element.
pub trait XmlRecord: Sized {
    /// Tag of the element when the record is a document root or list item.
    const TAG: &'static str;

    /// The field table, in declaration order (which is also output order).
    const FIELDS: &'static [FieldSpec];

    /// Decode the record from its element.
    ///
    /// # Errors
    ///
    /// Returns the first field-level coercion error, with its field path.
    fn from_element(element: &Element, config: &MapperConfig) -> Result<Self>;

    /// Append every present field to `out`.
    fn write_fields(&self, out: &mut Element, config: &MapperConfig);

    /// Encode the record as an element named `name`.
    fn to_element(&self, name: &str, config: &MapperConfig) -> Element {
        let mut element = Element::new(name);
        self.write_fields(&mut element, config);
        element
    }

    /// Look up a field table row by Rust field name.
    #[must_use]
    fn field_spec(field: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.field == field)
    }
}

/// Declare a record struct together with its field table.
///
/// Each field is written `name: Type = kind("wire")`, or for collections
/// `kind("wrapper", "item")`. Kinds are `attr`, `value`, `record`, `boxed`,
/// `records`, and `values`; every field type is an `Option`. An optional
/// `where finish = path` clause names a `fn(&mut Self) -> Result<()>` run
/// after decoding.
#[macro_export]
macro_rules! xml_record {
    (@wire $wire:literal $(, $rest:literal)*) => { $wire };
    (@item $wire:literal) => { None };
    (@item $wire:literal, $item:literal) => { Some($item) };
    (@kind attr) => { $crate::FieldKind::Attribute };
    (@kind value) => { $crate::FieldKind::Value };
    (@kind record) => { $crate::FieldKind::Record };
    (@kind boxed) => { $crate::FieldKind::Boxed };
    (@kind records) => { $crate::FieldKind::Records };
    (@kind values) => { $crate::FieldKind::Values };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $tag:literal
        $(where finish = $finish:path)?
        {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty = $kind:ident ( $($wire:literal),+ )
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::XmlRecord for $name {
            const TAG: &'static str = $tag;

            const FIELDS: &'static [$crate::FieldSpec] = &[
                $(
                    $crate::FieldSpec {
                        field: stringify!($field),
                        wire: $crate::xml_record!(@wire $($wire),+),
                        item: $crate::xml_record!(@item $($wire),+),
                        kind: $crate::xml_record!(@kind $kind),
                    },
                )*
            ];

            fn from_element(
                element: &$crate::Element,
                config: &$crate::MapperConfig,
            ) -> $crate::Result<Self> {
                $crate::decode::note_unknown(element, Self::FIELDS);
                #[allow(unused_mut)]
                let mut record = Self {
                    $(
                        $field: $crate::decode::$kind(element, config, $($wire),+)?,
                    )*
                };
                $( $finish(&mut record)?; )?
                Ok(record)
            }

            fn write_fields(&self, out: &mut $crate::Element, config: &$crate::MapperConfig) {
                $(
                    $crate::encode::$kind(&self.$field, out, config, $($wire),+);
                )*
            }
        }
    };
}
