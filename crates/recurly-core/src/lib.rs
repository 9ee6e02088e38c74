//! Recurly v2 subscription resource model.
//!
//! This crate defines the `<subscription>` resource and the resources nested
//! in it, declared with [`recurly_xml::xml_record!`] so that every field has
//! a wire name, a declared type, and a fixed output position.
//!
//! # Core Types
//!
//! - [`Subscription`]: the resource, with an optional pending subscription
//! - [`PlanRef`], [`AccountRef`]: linked resources
//! - [`SubscriptionAddOn`], [`CustomField`], [`RampInterval`]: collection items
//! - [`SubscriptionState`], [`CollectionMethod`], [`RevenueScheduleType`]:
//!   closed-set tokens
//! - [`SubscriptionUuid`], [`BillingInfoUuid`]: opaque identifiers
//!
//! # Example
//!
//! ```
//! use recurly_core::{parse, serialize, Subscription};
//!
//! let mut subscription = Subscription::default();
//! subscription.set_coupon_code("my-coupon");
//!
//! let xml = serialize(&subscription)?;
//! assert!(xml.contains("<coupon_codes><coupon_code>my-coupon</coupon_code></coupon_codes>"));
//! assert_eq!(parse(&xml)?, subscription);
//! # Ok::<(), recurly_core::XmlError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod account;
pub mod add_on;
pub mod custom_field;
mod href;
pub mod ids;
pub mod plan;
pub mod ramp;
pub mod revenue;
pub mod subscription;

pub use account::AccountRef;
pub use add_on::SubscriptionAddOn;
pub use custom_field::CustomField;
pub use href::resource_code;
pub use ids::{BillingInfoUuid, SubscriptionUuid};
pub use plan::PlanRef;
pub use ramp::RampInterval;
pub use revenue::RevenueScheduleType;
pub use subscription::{CollectionMethod, Subscription, SubscriptionState};

pub use recurly_xml::{MapperConfig, Result, UnknownEnumPolicy, XmlError};

/// Parse a `<subscription>` document with the default configuration.
///
/// # Errors
///
/// See [`Subscription::from_xml`].
pub fn parse(document: &str) -> Result<Subscription> {
    Subscription::from_xml(document)
}

/// Render a subscription as a `<subscription>` document with the default
/// configuration.
///
/// # Errors
///
/// See [`Subscription::to_xml`].
pub fn serialize(subscription: &Subscription) -> Result<String> {
    subscription.to_xml()
}
