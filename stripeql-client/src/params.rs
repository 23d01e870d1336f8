//! Request parameters shared by retrieval calls

/// Parameters accepted by `Get`-style calls.
///
/// The zero value retrieves the resource as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetParams {
    /// Related objects to expand in place of their ids
    pub expand: Vec<String>,

    /// Perform the call on behalf of a connected account
    pub stripe_account: Option<String>,
}

impl GetParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a related object, e.g. `customer` or `invoice.subscription`
    pub fn expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    pub fn on_behalf_of(mut self, account: impl Into<String>) -> Self {
        self.stripe_account = Some(account.into());
        self
    }

    /// Query string pairs in the API's bracket notation
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        self.expand.iter().map(|field| ("expand[]", field.as_str())).collect()
    }
}
