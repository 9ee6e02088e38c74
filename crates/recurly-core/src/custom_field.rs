//! Custom fields.

use recurly_xml::xml_record;
use serde::{Deserialize, Serialize};

xml_record! {
    /// A name/value pair defined by the site administrator.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct CustomField => "custom_field" {
        /// Field name.
        pub name: Option<String> = value("name"),
        /// Field value.
        pub value: Option<String> = value("value"),
    }
}

impl CustomField {
    /// A custom field with both name and value set.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}
