//! Ramp pricing intervals.

use chrono::{DateTime, Utc};
use recurly_xml::xml_record;
use serde::{Deserialize, Serialize};

xml_record! {
    /// A pricing tier active for a range of billing cycles.
    ///
    /// The last tier of a ramp usually has neither `remaining_billing_cycles`
    /// nor `ending_on`: it continues indefinitely and is the tier currently
    /// open once reached.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct RampInterval => "ramp_interval" {
        /// Billing cycle (1-based) at which this tier starts.
        pub starting_billing_cycle: Option<i32> = value("starting_billing_cycle"),
        /// Unit price in cents during this tier.
        pub unit_amount_in_cents: Option<i64> = value("unit_amount_in_cents"),
        /// Billing cycles left in this tier; `None` means unbounded.
        pub remaining_billing_cycles: Option<i32> = value("remaining_billing_cycles"),
        /// When this tier starts.
        pub starting_on: Option<DateTime<Utc>> = value("starting_on"),
        /// When this tier ends; `None` means open-ended.
        pub ending_on: Option<DateTime<Utc>> = value("ending_on"),
    }
}

impl RampInterval {
    /// Whether the tier has no end date.
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.ending_on.is_none()
    }

    /// Whether the tier has no cycle limit.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.remaining_billing_cycles.is_none()
    }

    /// Whether `at` falls within `[starting_on, ending_on)`.
    ///
    /// A tier without a start date is never active.
    #[must_use]
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.starting_on.is_some_and(|start| start <= at)
            && self.ending_on.map_or(true, |end| at < end)
    }
}
