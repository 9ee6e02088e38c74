//! Plan reference embedded in a subscription.

use recurly_xml::xml_record;
use serde::{Deserialize, Serialize};

use crate::href::resource_code;

xml_record! {
    /// The plan a subscription (or pending subscription) is on.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PlanRef => "plan" {
        /// Link to the plan resource.
        pub href: Option<String> = attr("href"),
        /// Plan code, as sent. See [`PlanRef::code`] for the code derived
        /// from `href`.
        pub plan_code: Option<String> = value("plan_code"),
        /// Display name.
        pub name: Option<String> = value("name"),
    }
}

impl PlanRef {
    /// Reference a plan by code and display name.
    #[must_use]
    pub fn new(plan_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            href: None,
            plan_code: Some(plan_code.into()),
            name: Some(name.into()),
        }
    }

    /// The plan code: `plan_code` when sent, otherwise the last segment of
    /// a `.../plans/{code}` link.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.plan_code
            .as_deref()
            .or_else(|| resource_code(self.href.as_deref()?, "plans"))
    }
}
