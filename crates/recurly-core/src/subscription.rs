//! The subscription resource.
//!
//! [`Subscription`] maps the `<subscription>` document of the v2 API. Every
//! field is optional: responses omit or nil out whatever does not apply,
//! and create or update requests send only what the caller sets.

use chrono::{DateTime, Utc};
use recurly_xml::{xml_record, MapperConfig, Result, XmlError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    AccountRef, BillingInfoUuid, CustomField, PlanRef, RampInterval, RevenueScheduleType,
    SubscriptionAddOn, SubscriptionUuid,
};

recurly_xml::wire_enum! {
    /// Lifecycle state of a subscription.
    pub enum SubscriptionState {
        /// Billing normally.
        Active = "active",
        /// Canceled; runs until the end of the current term.
        Canceled = "canceled",
        /// Ended.
        Expired = "expired",
        /// Starts at a future date.
        Future = "future",
        /// In its trial period.
        InTrial = "in_trial",
        /// An invoice is past due.
        PastDue = "past_due",
        /// Paused.
        Paused = "paused",
    }
}

recurly_xml::wire_enum! {
    /// How invoices for a subscription are collected.
    pub enum CollectionMethod {
        /// Charged to the billing info on file.
        Automatic = "automatic",
        /// Paid by the customer against net terms.
        Manual = "manual",
    }
}

xml_record! {
    /// A subscription, optionally carrying its next scheduled state.
    ///
    /// Equality and hashing are structural: two values built separately
    /// from the same fields are equal and hash alike.
    ///
    /// A pending subscription never carries a pending subscription of its
    /// own. Parsing and [`Subscription::to_xml`] both reject that shape.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Subscription => "subscription" where finish = check_pending {
        /// Link to this resource.
        pub href: Option<String> = attr("href"),
        /// Owning account.
        pub account: Option<AccountRef> = record("account"),
        /// Plan the subscription is on.
        pub plan: Option<PlanRef> = record("plan"),
        /// Plan code, as sent in create requests.
        pub plan_code: Option<String> = value("plan_code"),
        /// Subscription UUID.
        pub uuid: Option<SubscriptionUuid> = value("uuid"),
        /// Lifecycle state.
        pub state: Option<SubscriptionState> = value("state"),
        /// Unit price in cents.
        pub unit_amount_in_cents: Option<i64> = value("unit_amount_in_cents"),
        /// ISO 4217 currency code.
        pub currency: Option<String> = value("currency"),
        /// Plan quantity.
        pub quantity: Option<i32> = value("quantity"),
        /// When the subscription was activated.
        pub activated_at: Option<DateTime<Utc>> = value("activated_at"),
        /// Last modification time.
        pub updated_at: Option<DateTime<Utc>> = value("updated_at"),
        /// When the subscription was canceled; `None` unless canceled.
        pub canceled_at: Option<DateTime<Utc>> = value("canceled_at"),
        /// When the subscription expires or expired.
        pub expires_at: Option<DateTime<Utc>> = value("expires_at"),
        /// Start of the current billing period.
        pub current_period_started_at: Option<DateTime<Utc>> = value("current_period_started_at"),
        /// End of the current billing period.
        pub current_period_ends_at: Option<DateTime<Utc>> = value("current_period_ends_at"),
        /// Start of the trial.
        pub trial_started_at: Option<DateTime<Utc>> = value("trial_started_at"),
        /// End of the trial.
        pub trial_ends_at: Option<DateTime<Utc>> = value("trial_ends_at"),
        /// Whether a trial requires billing info up front.
        pub trial_requires_billing_info: Option<bool> = value("trial_requires_billing_info"),
        /// When the subscription starts.
        pub starts_at: Option<DateTime<Utc>> = value("starts_at"),
        /// Billing cycles in a term.
        pub total_billing_cycles: Option<i32> = value("total_billing_cycles"),
        /// Billing cycles left in the current term.
        pub remaining_billing_cycles: Option<i32> = value("remaining_billing_cycles"),
        /// Billing cycles in each renewal term.
        pub renewal_billing_cycles: Option<i32> = value("renewal_billing_cycles"),
        /// Whether the subscription renews at the end of its term.
        pub auto_renew: Option<bool> = value("auto_renew"),
        /// Start of the current term.
        pub current_term_started_at: Option<DateTime<Utc>> = value("current_term_started_at"),
        /// End of the current term.
        pub current_term_ends_at: Option<DateTime<Utc>> = value("current_term_ends_at"),
        /// When the subscription was paused.
        pub paused_at: Option<DateTime<Utc>> = value("paused_at"),
        /// Billing cycles left before a paused subscription resumes.
        pub remaining_pause_cycles: Option<i32> = value("remaining_pause_cycles"),
        /// Collection method.
        pub collection_method: Option<CollectionMethod> = value("collection_method"),
        /// Payment terms in days, for manual collection.
        pub net_terms: Option<i32> = value("net_terms"),
        /// Purchase order number.
        pub po_number: Option<String> = value("po_number"),
        /// Tax in cents.
        pub tax_in_cents: Option<i64> = value("tax_in_cents"),
        /// Tax type, e.g. `usst` or `vat`.
        pub tax_type: Option<String> = value("tax_type"),
        /// Tax region.
        pub tax_region: Option<String> = value("tax_region"),
        /// Tax rate as an exact decimal (`0.0875` is 8.75%).
        pub tax_rate: Option<Decimal> = value("tax_rate"),
        /// Revenue recognition schedule.
        pub revenue_schedule_type: Option<RevenueScheduleType> = value("revenue_schedule_type"),
        /// Date of the first renewal.
        pub first_renewal_date: Option<DateTime<Utc>> = value("first_renewal_date"),
        /// Whether the subscription was created by redeeming a gift card.
        pub started_with_gift: Option<bool> = value("started_with_gift"),
        /// When a gifted subscription converted to a paid one.
        pub converted_at: Option<DateTime<Utc>> = value("converted_at"),
        /// Why the subscription was created without billing info.
        pub no_billing_info_reason: Option<String> = value("no_billing_info_reason"),
        /// Whether the trial was imported from another system.
        pub imported_trial: Option<bool> = value("imported_trial"),
        /// Billing info used to pay for this subscription.
        pub billing_info_uuid: Option<BillingInfoUuid> = value("billing_info_uuid"),
        /// Whether this is a bulk (quantity-only) subscription.
        pub bulk: Option<bool> = value("bulk"),
        /// Notes printed on invoices.
        pub customer_notes: Option<String> = value("customer_notes"),
        /// Terms printed on invoices.
        pub terms_and_conditions: Option<String> = value("terms_and_conditions"),
        /// VAT reverse-charge notes printed on invoices.
        pub vat_reverse_charge_notes: Option<String> = value("vat_reverse_charge_notes"),
        /// Add-ons, in document order.
        pub add_ons: Option<Vec<SubscriptionAddOn>> = records("subscription_add_ons", "subscription_add_on"),
        /// Coupon codes, in document order.
        pub coupon_codes: Option<Vec<String>> = values("coupon_codes", "coupon_code"),
        /// Custom fields, in document order.
        pub custom_fields: Option<Vec<CustomField>> = records("custom_fields", "custom_field"),
        /// Ramp pricing tiers, in document order.
        pub ramp_intervals: Option<Vec<RampInterval>> = records("ramp_intervals", "ramp_interval"),
        /// Next scheduled state of this subscription.
        pub pending_subscription: Option<Box<Subscription>> = boxed("pending_subscription"),
    }
}

/// A pending subscription describes one scheduled change; it never carries
/// a pending subscription of its own.
fn check_pending(subscription: &mut Subscription) -> Result<()> {
    subscription.check_pending_depth()
}

impl Subscription {
    /// Parse a `<subscription>` document with the default configuration.
    ///
    /// # Errors
    ///
    /// Fails on ill-formed text, a root other than `<subscription>`, or any
    /// field that cannot be coerced to its declared type.
    pub fn from_xml(document: &str) -> Result<Self> {
        recurly_xml::from_str(document)
    }

    /// Parse a `<subscription>` document.
    ///
    /// # Errors
    ///
    /// See [`Subscription::from_xml`].
    pub fn from_xml_with(document: &str, config: &MapperConfig) -> Result<Self> {
        recurly_xml::from_str_with(document, config)
    }

    /// Render as a `<subscription>` document with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Subscription::to_xml_with`].
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&MapperConfig::default())
    }

    /// Render as a `<subscription>` document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` when the pending subscription has a pending
    /// subscription of its own, and `XmlError::Write` if the writer fails.
    pub fn to_xml_with(&self, config: &MapperConfig) -> Result<String> {
        self.check_pending_depth()?;
        recurly_xml::to_string_with(self, config)
    }

    fn check_pending_depth(&self) -> Result<()> {
        let nested = self
            .pending_subscription
            .as_ref()
            .is_some_and(|pending| pending.pending_subscription.is_some());
        if nested {
            tracing::warn!(
                uuid = ?self.uuid,
                "Rejecting pending subscription with its own pending subscription"
            );
            return Err(XmlError::InvalidRecord {
                field: "pending_subscription.pending_subscription".to_string(),
                reason: "a pending subscription cannot itself have a pending subscription"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// Set a single coupon code, replacing any others.
    pub fn set_coupon_code(&mut self, code: impl Into<String>) {
        self.set_coupon_codes(vec![code.into()]);
    }

    /// Replace the coupon codes.
    pub fn set_coupon_codes(&mut self, codes: Vec<String>) {
        self.coupon_codes = Some(codes);
    }

    /// Coupon codes, empty when none were sent.
    #[must_use]
    pub fn coupon_codes(&self) -> &[String] {
        self.coupon_codes.as_deref().unwrap_or_default()
    }

    /// The first coupon code.
    #[must_use]
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon_codes().first().map(String::as_str)
    }

    /// Add-ons, empty when none were sent.
    #[must_use]
    pub fn add_ons(&self) -> &[SubscriptionAddOn] {
        self.add_ons.as_deref().unwrap_or_default()
    }

    /// Custom fields, empty when none were sent.
    #[must_use]
    pub fn custom_fields(&self) -> &[CustomField] {
        self.custom_fields.as_deref().unwrap_or_default()
    }

    /// Ramp intervals, empty when none were sent.
    #[must_use]
    pub fn ramp_intervals(&self) -> &[RampInterval] {
        self.ramp_intervals.as_deref().unwrap_or_default()
    }

    /// Code of the owning account, falling back to the account link.
    #[must_use]
    pub fn account_code(&self) -> Option<&str> {
        self.account.as_ref()?.code()
    }

    /// Plan code from the plan reference (its code or link), falling back
    /// to the top-level `plan_code`.
    #[must_use]
    pub fn resolved_plan_code(&self) -> Option<&str> {
        self.plan
            .as_ref()
            .and_then(PlanRef::code)
            .or(self.plan_code.as_deref())
    }

    /// Value of the first custom field called `name`.
    #[must_use]
    pub fn custom_field(&self, name: &str) -> Option<&str> {
        self.custom_fields()
            .iter()
            .find(|field| field.name.as_deref() == Some(name))
            .and_then(|field| field.value.as_deref())
    }

    /// The open-ended ramp tier, if the subscription has reached it.
    #[must_use]
    pub fn current_ramp_interval(&self) -> Option<&RampInterval> {
        self.ramp_intervals()
            .iter()
            .find(|interval| interval.is_open_ended())
    }

    /// The ramp tier active at `at`.
    #[must_use]
    pub fn ramp_interval_at(&self, at: DateTime<Utc>) -> Option<&RampInterval> {
        self.ramp_intervals()
            .iter()
            .find(|interval| interval.is_active_at(at))
    }

    /// Whether a change is scheduled.
    #[must_use]
    pub fn has_pending_change(&self) -> bool {
        self.pending_subscription.is_some()
    }
}
