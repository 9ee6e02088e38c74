//! Account reference embedded in a subscription.
//!
//! Subscription responses carry only `<account href="..."/>`; create
//! requests may embed a full account body. Both shapes map onto
//! [`AccountRef`].

use recurly_xml::xml_record;
use serde::{Deserialize, Serialize};

use crate::href::resource_code;

xml_record! {
    /// The account that owns a subscription.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct AccountRef => "account" {
        /// Link to the account resource.
        pub href: Option<String> = attr("href"),

        /// Account code, as sent. See [`AccountRef::code`] for the code
        /// derived from `href`.
        pub account_code: Option<String> = value("account_code"),

        /// Email address (embedded account bodies only).
        pub email: Option<String> = value("email"),

        /// First name (embedded account bodies only).
        pub first_name: Option<String> = value("first_name"),

        /// Last name (embedded account bodies only).
        pub last_name: Option<String> = value("last_name"),

        /// Company name (embedded account bodies only).
        pub company_name: Option<String> = value("company_name"),
    }
}

impl AccountRef {
    /// Reference an existing account by code.
    #[must_use]
    pub fn with_code(account_code: impl Into<String>) -> Self {
        Self {
            account_code: Some(account_code.into()),
            ..Self::default()
        }
    }

    /// Reference an account by link only.
    #[must_use]
    pub fn from_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// The account code: `account_code` when sent, otherwise the last
    /// segment of an `.../accounts/{code}` link.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.account_code
            .as_deref()
            .or_else(|| resource_code(self.href.as_deref()?, "accounts"))
    }
}
