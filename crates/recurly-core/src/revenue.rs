//! Revenue recognition schedule.

recurly_xml::wire_enum! {
    /// How charged revenue is recognised over time.
    pub enum RevenueScheduleType {
        /// Revenue is never recognised by Recurly.
        Never = "never",
        /// Revenue is spread evenly across the service period.
        Evenly = "evenly",
        /// Revenue is recognised at the start of the service period.
        AtRangeStart = "at_range_start",
        /// Revenue is recognised at the end of the service period.
        AtRangeEnd = "at_range_end",
        /// Revenue is recognised when the invoice is posted.
        AtInvoice = "at_invoice",
    }
}
