//! Typed filter for listing payments.

use derive_more::Display;

use crate::{Error, ParamBuilder, Result};

/// Sort key accepted by the payment-list endpoint.
///
/// Allowed values: `create_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortBy {
    /// Sort payments by their creation time.
    #[display("create_time")]
    CreateTime,
}

/// Sort order accepted by the payment-list endpoint.
///
/// Allowed values: `desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SortOrder {
    /// Descending order.
    #[display("desc")]
    Desc,
}

/// Filter for getting payments from the PayPal server.
///
/// Every field is optional; unset fields are omitted from the query string
/// entirely, so the server applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct PaymentListFilter {
    count: Option<u32>,
    start_index: Option<u32>,
    start_id: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    payee_id: Option<String>,
    sort_by: Option<SortBy>,
    sort_order: Option<SortOrder>,
}

impl PaymentListFilter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of items to list in the response.
    ///
    /// Server default: 10. Maximum value: 20.
    pub fn count(mut self, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(Error::invalid_request(format!(
                "count can't be zero: {count}"
            )));
        }
        if count > 20 {
            return Err(Error::invalid_request(format!(
                "count can't be greater than 20: {count}"
            )));
        }
        self.count = Some(count);
        Ok(self)
    }

    /// The start index of the payments to list, to jump to a specific
    /// position in the resource history.
    #[must_use]
    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// The ID of the starting resource. When results are paged, the
    /// `next_id` value continues with the next set of results.
    #[must_use]
    pub fn start_id(mut self, start_id: impl Into<String>) -> Self {
        self.start_id = Some(start_id.into());
        self
    }

    /// Start of the date-time range, in Internet date and time format,
    /// e.g. `2016-03-06T11:00:00Z`.
    #[must_use]
    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = Some(start_time.into());
        self
    }

    /// End of the date-time range, in Internet date and time format.
    #[must_use]
    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Filters by the PayPal-assigned merchant ID that identifies the payee.
    #[must_use]
    pub fn payee_id(mut self, payee_id: impl Into<String>) -> Self {
        self.payee_id = Some(payee_id.into());
        self
    }

    /// Sorts the payments in the response.
    #[must_use]
    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// Orders the payments in the response.
    #[must_use]
    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Renders the filter as encoded query parameters.
    #[must_use]
    pub fn query_params(&self) -> ParamBuilder {
        ParamBuilder::new()
            .add_opt("count", self.count)
            .add_opt("start_index", self.start_index)
            .add_opt("start_id", self.start_id.as_deref())
            .add_opt("start_time", self.start_time.as_deref())
            .add_opt("end_time", self.end_time.as_deref())
            .add_opt("payee_id", self.payee_id.as_deref())
            .add_opt("sort_by", self.sort_by)
            .add_opt("sort_order", self.sort_order)
    }

    /// Appends the filter to the endpoint URL.
    #[must_use]
    pub fn create_url(&self, base_url: &str) -> String {
        self.query_params().create_url(base_url)
    }
}
