//! Subscription add-ons.

use recurly_xml::xml_record;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RevenueScheduleType;

xml_record! {
    /// An add-on attached to a subscription.
    ///
    /// Fixed add-ons are priced by `unit_amount_in_cents`; usage-based
    /// add-ons may instead carry a `usage_percentage`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct SubscriptionAddOn => "subscription_add_on" {
        /// Add-on code, unique within the plan.
        pub add_on_code: Option<String> = value("add_on_code"),
        /// Quantity.
        pub quantity: Option<i32> = value("quantity"),
        /// Unit price in cents.
        pub unit_amount_in_cents: Option<i64> = value("unit_amount_in_cents"),
        /// Percentage charged on usage, for percentage-priced usage add-ons.
        pub usage_percentage: Option<Decimal> = value("usage_percentage"),
        /// Revenue recognition override for this add-on.
        pub revenue_schedule_type: Option<RevenueScheduleType> = value("revenue_schedule_type"),
        /// Where the add-on comes from (`plan_add_on` or `item`).
        pub add_on_source: Option<String> = value("add_on_source"),
        /// `fixed` or `usage`.
        pub add_on_type: Option<String> = value("add_on_type"),
        /// `price` or `percentage`, for usage add-ons.
        pub usage_type: Option<String> = value("usage_type"),
        /// Measured unit the usage is reported in.
        pub measured_unit_id: Option<i64> = value("measured_unit_id"),
    }
}

impl SubscriptionAddOn {
    /// An add-on with a code, quantity, and unit price.
    #[must_use]
    pub fn new(add_on_code: impl Into<String>, quantity: i32, unit_amount_in_cents: i64) -> Self {
        Self {
            add_on_code: Some(add_on_code.into()),
            quantity: Some(quantity),
            unit_amount_in_cents: Some(unit_amount_in_cents),
            ..Self::default()
        }
    }

    /// Quantity times unit price, when both are known and the product fits.
    #[must_use]
    pub fn total_in_cents(&self) -> Option<i64> {
        self.unit_amount_in_cents?.checked_mul(i64::from(self.quantity?))
    }
}
