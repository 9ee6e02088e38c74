//! Scalar coercion between element text and Rust values.
//!
//! The declared Rust type always decides how text is coerced. A `type`
//! attribute on the element is written on output as a hint for the API but
//! is never used to infer a type on input.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::MapperConfig;

/// Why element text could not become a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// The text is not valid for the declared type.
    Invalid,
    /// The text is not a member of a closed set.
    UnknownToken,
}

/// A scalar that can be stored as element text.
pub trait XmlValue: Sized {
    /// The `type` attribute written alongside the value, if any.
    const TYPE_HINT: Option<&'static str>;

    /// Human-readable type name used in error messages.
    const EXPECTED: &'static str;

    /// Whether a non-nil element with empty text is a present value.
    ///
    /// Only strings say yes; typed scalars treat empty text as absent.
    const EMPTY_IS_VALUE: bool = false;

    /// Coerce element text. Typed scalars receive it trimmed; strings
    /// (`EMPTY_IS_VALUE`) receive it verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] describing why the text was rejected.
    fn from_text(text: &str, config: &MapperConfig) -> Result<Self, ValueError>;

    /// Render the value as element text.
    fn to_text(&self) -> String;
}

impl XmlValue for String {
    const TYPE_HINT: Option<&'static str> = None;
    const EXPECTED: &'static str = "string";
    const EMPTY_IS_VALUE: bool = true;

    fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
        Ok(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

macro_rules! integer_value {
    ($($ty:ty),+) => {
        $(
            impl XmlValue for $ty {
                const TYPE_HINT: Option<&'static str> = Some("integer");
                const EXPECTED: &'static str = "integer";

                fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
                    text.parse().map_err(|_| ValueError::Invalid)
                }

                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

integer_value!(i32, i64, u32);

impl XmlValue for bool {
    const TYPE_HINT: Option<&'static str> = Some("boolean");
    const EXPECTED: &'static str = "boolean";

    fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
        match text {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ValueError::Invalid),
        }
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

/// Amounts and rates are exact decimals; the API labels them `float`.
impl XmlValue for Decimal {
    const TYPE_HINT: Option<&'static str> = Some("float");
    const EXPECTED: &'static str = "decimal";

    fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| ValueError::Invalid)
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl XmlValue for DateTime<Utc> {
    const TYPE_HINT: Option<&'static str> = Some("dateTime");
    const EXPECTED: &'static str = "dateTime";

    fn from_text(text: &str, _config: &MapperConfig) -> Result<Self, ValueError> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValueError::Invalid)
    }

    fn to_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}
