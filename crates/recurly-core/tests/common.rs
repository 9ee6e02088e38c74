//! Common fixtures for subscription integration tests.

#![allow(dead_code)] // Some fixtures are used by different test files

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use recurly_core::{
    AccountRef, BillingInfoUuid, CollectionMethod, CustomField, PlanRef, RampInterval,
    RevenueScheduleType, Subscription, SubscriptionAddOn, SubscriptionState, SubscriptionUuid,
};

/// Subscription document with two coupon codes and a pending plan change.
pub const SUBSCRIPTION_WITH_PENDING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<subscription href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96">
  <account href="https://api.recurly.com/v2/accounts/1"/>
  <plan href="https://api.recurly.com/v2/plans/gold">
    <plan_code>gold</plan_code>
    <name>Gold plan</name>
  </plan>
  <uuid>44f83d7cba354d5b84812419f923ea96</uuid>
  <state>active</state>
  <unit_amount_in_cents type="integer">800</unit_amount_in_cents>
  <currency>EUR</currency>
  <quantity type="integer">1</quantity>
  <activated_at type="dateTime">2011-05-27T07:00:00Z</activated_at>
  <updated_at type="dateTime">2011-05-27T07:00:00Z</updated_at>
  <canceled_at nil="nil"></canceled_at>
  <expires_at nil="nil"></expires_at>
  <current_period_started_at type="dateTime">2011-06-27T07:00:00Z</current_period_started_at>
  <current_period_ends_at type="dateTime">2010-07-27T07:00:00Z</current_period_ends_at>
  <trial_started_at nil="nil"></trial_started_at>
  <trial_ends_at nil="nil"></trial_ends_at>
  <starts_at>2010-07-28T07:00:00Z</starts_at>
  <a name="cancel" href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/cancel" method="put"/>
  <a name="terminate" href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/terminate" method="put"/>
  <a name="postpone" href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/postpone" method="put"/>
  <collection_method>manual</collection_method>
  <net_terms type="integer">10</net_terms>
  <po_number>PO19384</po_number>
  <tax_in_cents type="integer">394</tax_in_cents>
  <tax_type>usst</tax_type>
  <tax_region>CA</tax_region>
  <tax_rate type="float">0.0875</tax_rate>
  <revenue_schedule_type>evenly</revenue_schedule_type>
  <first_renewal_date type="dateTime">2011-07-01T07:00:00Z</first_renewal_date>
  <started_with_gift type="boolean">true</started_with_gift>
  <converted_at type="dateTime">2017-06-27T00:00:00Z</converted_at>
  <no_billing_info_reason>plan_free_trial</no_billing_info_reason>
  <imported_trial type="boolean">true</imported_trial>
  <subscription_add_ons type="array">
  </subscription_add_ons>
  <coupon_codes type="array">
    <coupon_code>123</coupon_code>
    <coupon_code>abc</coupon_code>
  </coupon_codes>
  <pending_subscription type="subscription">
    <plan href="https://api.recurly.com/v2/plans/silver">
      <plan_code>silver</plan_code>
      <name>Silver plan</name>
    </plan>
    <unit_amount_in_cents type="integer">400</unit_amount_in_cents>
    <quantity type="integer">1</quantity>
    <subscription_add_ons type="array">
    </subscription_add_ons>
  </pending_subscription>
</subscription>"#;

/// Subscription document with three add-ons, the last sourced from an item.
pub const SUBSCRIPTION_WITH_ADD_ONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<subscription href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96">
  <account href="https://api.recurly.com/v2/accounts/1"/>
  <plan href="https://api.recurly.com/v2/plans/gold">
    <plan_code>gold</plan_code>
    <name>Gold plan</name>
  </plan>
  <uuid>44f83d7cba354d5b84812419f923ea96</uuid>
  <state>active</state>
  <unit_amount_in_cents type="integer">800</unit_amount_in_cents>
  <currency>EUR</currency>
  <quantity type="integer">1</quantity>
  <activated_at type="dateTime">2011-05-27T07:00:00Z</activated_at>
  <updated_at type="dateTime">2011-05-27T07:00:00Z</updated_at>
  <canceled_at nil="nil"></canceled_at>
  <expires_at nil="nil"></expires_at>
  <current_period_started_at type="dateTime">2011-06-27T07:00:00Z</current_period_started_at>
  <current_period_ends_at type="dateTime">2010-07-27T07:00:00Z</current_period_ends_at>
  <trial_started_at nil="nil"></trial_started_at>
  <trial_ends_at nil="nil"></trial_ends_at>
  <starts_at>2010-07-28T07:00:00Z</starts_at>
  <a name="cancel" href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/cancel" method="put"/>
  <collection_method>manual</collection_method>
  <net_terms type="integer">10</net_terms>
  <po_number>PO19384</po_number>
  <tax_in_cents type="integer">394</tax_in_cents>
  <tax_type>usst</tax_type>
  <tax_region>CA</tax_region>
  <tax_rate type="float">0.0875</tax_rate>
  <first_renewal_date type="dateTime">2011-07-01T07:00:00Z</first_renewal_date>
  <revenue_schedule_type>evenly</revenue_schedule_type>
  <started_with_gift type="boolean">true</started_with_gift>
  <converted_at type="dateTime">2017-06-27T00:00:00Z</converted_at>
  <no_billing_info_reason>plan_free_trial</no_billing_info_reason>
  <imported_trial type="boolean">true</imported_trial>
  <subscription_add_ons type="array">
    <subscription_add_on>
      <add_on_code>extra_users</add_on_code>
      <quantity>2</quantity>
      <unit_amount_in_cents>1000</unit_amount_in_cents>
      <usage_percentage type="float">2.1</usage_percentage>
      <revenue_schedule_type>evenly</revenue_schedule_type>
    </subscription_add_on>
    <subscription_add_on>
      <add_on_code>extra_ip</add_on_code>
      <quantity>3</quantity>
      <unit_amount_in_cents>200</unit_amount_in_cents>
    </subscription_add_on>
    <subscription_add_on>
      <add_on_code>mockitem</add_on_code>
      <quantity>1</quantity>
      <unit_amount_in_cents>199</unit_amount_in_cents>
      <add_on_source>item</add_on_source>
    </subscription_add_on>
  </subscription_add_ons>
</subscription>"#;

/// Subscription document with two custom fields.
pub const SUBSCRIPTION_WITH_CUSTOM_FIELDS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<subscription href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96">
  <account href="https://api.recurly.com/v2/accounts/1"/>
  <uuid>44f83d7cba354d5b84812419f923ea96</uuid>
  <state>active</state>
  <unit_amount_in_cents type="integer">800</unit_amount_in_cents>
  <currency>EUR</currency>
  <custom_fields type="array">
    <custom_field>
      <name>field1</name>
      <value>one value</value>
    </custom_field>
    <custom_field>
      <name>field2</name>
      <value>second value</value>
    </custom_field>
  </custom_fields>
</subscription>"#;

/// Subscription document with three ramp tiers; the last is open-ended.
pub const SUBSCRIPTION_WITH_RAMPS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<subscription href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96">
  <account href="https://api.recurly.com/v2/accounts/1"/>
  <plan href="https://api.recurly.com/v2/plans/gold">
    <plan_code>gold</plan_code>
    <name>Gold plan</name>
  </plan>
  <uuid>44f83d7cba354d5b84812419f923ea96</uuid>
  <state>active</state>
  <ramp_intervals type="array">
    <ramp_interval>
      <starting_billing_cycle type="integer">1</starting_billing_cycle>
      <unit_amount_in_cents type="integer">2000</unit_amount_in_cents>
      <remaining_billing_cycles type="integer">0</remaining_billing_cycles>
      <starting_on type="dateTime">2011-06-27T07:00:00Z</starting_on>
      <ending_on type="dateTime">2011-07-27T07:00:00Z</ending_on>
    </ramp_interval>
    <ramp_interval>
      <starting_billing_cycle type="integer">2</starting_billing_cycle>
      <unit_amount_in_cents type="integer">4000</unit_amount_in_cents>
      <remaining_billing_cycles type="integer">5</remaining_billing_cycles>
      <starting_on type="dateTime">2011-07-27T07:00:00Z</starting_on>
      <ending_on type="dateTime">2011-08-27T07:00:00Z</ending_on>
    </ramp_interval>
    <ramp_interval>
      <starting_billing_cycle type="integer">7</starting_billing_cycle>
      <unit_amount_in_cents type="integer">7000</unit_amount_in_cents>
      <remaining_billing_cycles nil="nil"/>
      <starting_on type="dateTime">2011-08-27T07:00:00Z</starting_on>
      <ending_on nil="nil"></ending_on>
    </ramp_interval>
  </ramp_intervals>
  <unit_amount_in_cents type="integer">2000</unit_amount_in_cents>
  <currency>EUR</currency>
  <quantity type="integer">1</quantity>
  <subscription_add_ons type="array">
  </subscription_add_ons>
</subscription>"#;

/// Parse an RFC 3339 timestamp.
pub fn ts(text: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(text)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

/// Build a subscription whose every field is derived from `seed`.
///
/// Two calls with the same seed produce equal values through unrelated
/// allocations.
pub fn sample_subscription(seed: u32) -> Subscription {
    let n = i64::from(seed);
    let day = seed % 28 + 1;
    let at = |month: u32| Utc.with_ymd_and_hms(2020, month, day, 12, 30, 0).unwrap();

    Subscription {
        href: Some(format!(
            "https://api.recurly.com/v2/subscriptions/sub{seed:029}"
        )),
        account: Some(AccountRef::from_href(format!(
            "https://api.recurly.com/v2/accounts/acct-{seed}"
        ))),
        plan: Some(PlanRef::new(format!("plan-{seed}"), format!("Plan {seed}"))),
        plan_code: None,
        uuid: Some(SubscriptionUuid::new(format!("sub{seed:029}"))),
        state: Some(SubscriptionState::Active),
        unit_amount_in_cents: Some(1000 + n),
        currency: Some("USD".to_string()),
        quantity: Some(i32::try_from(seed % 5).unwrap() + 1),
        activated_at: Some(at(1)),
        updated_at: Some(at(2)),
        canceled_at: None,
        expires_at: None,
        current_period_started_at: Some(at(2)),
        current_period_ends_at: Some(at(3)),
        trial_started_at: Some(at(1)),
        trial_ends_at: Some(at(2)),
        trial_requires_billing_info: Some(true),
        starts_at: Some(at(1)),
        total_billing_cycles: Some(12),
        remaining_billing_cycles: Some(11),
        renewal_billing_cycles: Some(12),
        auto_renew: Some(true),
        current_term_started_at: Some(at(1)),
        current_term_ends_at: Some(at(12)),
        paused_at: None,
        remaining_pause_cycles: None,
        collection_method: Some(CollectionMethod::Automatic),
        net_terms: Some(30),
        po_number: Some(format!("PO-{seed}")),
        tax_in_cents: Some(80 + n),
        tax_type: Some("usst".to_string()),
        tax_region: Some("CA".to_string()),
        tax_rate: Some(Decimal::new(875, 4)),
        revenue_schedule_type: Some(RevenueScheduleType::Evenly),
        first_renewal_date: Some(at(3)),
        started_with_gift: Some(false),
        converted_at: None,
        no_billing_info_reason: None,
        imported_trial: Some(false),
        billing_info_uuid: Some(BillingInfoUuid::new(format!("bi{seed}"))),
        bulk: Some(false),
        customer_notes: Some(format!("Notes for {seed}\nSecond line\n")),
        terms_and_conditions: Some("  Net 30, see contract  ".to_string()),
        vat_reverse_charge_notes: None,
        add_ons: Some(vec![
            SubscriptionAddOn::new("extra_users", 2, 1000 + n),
            SubscriptionAddOn {
                usage_percentage: Some(Decimal::new(21, 1)),
                revenue_schedule_type: Some(RevenueScheduleType::AtRangeStart),
                add_on_source: Some("item".to_string()),
                add_on_type: Some("usage".to_string()),
                usage_type: Some("percentage".to_string()),
                measured_unit_id: Some(100 + n),
                ..SubscriptionAddOn::new("api_calls", 1, 0)
            },
        ]),
        coupon_codes: Some(vec![format!("coupon-{seed}"), "welcome".to_string()]),
        custom_fields: Some(vec![
            CustomField::new("acct_manager", format!("Manager {seed}")),
            CustomField::new("department", "Accounting"),
            CustomField::new("note", "  padded value "),
        ]),
        ramp_intervals: Some(vec![
            RampInterval {
                starting_billing_cycle: Some(1),
                unit_amount_in_cents: Some(500 + n),
                remaining_billing_cycles: Some(2),
                starting_on: Some(at(1)),
                ending_on: Some(at(4)),
            },
            RampInterval {
                starting_billing_cycle: Some(4),
                unit_amount_in_cents: Some(1000 + n),
                remaining_billing_cycles: None,
                starting_on: Some(at(4)),
                ending_on: None,
            },
        ]),
        pending_subscription: Some(Box::new(Subscription {
            plan: Some(PlanRef {
                href: Some("https://api.recurly.com/v2/plans/silver".to_string()),
                ..PlanRef::default()
            }),
            unit_amount_in_cents: Some(400),
            quantity: Some(1),
            add_ons: Some(Vec::new()),
            ..Subscription::default()
        })),
    }
}
