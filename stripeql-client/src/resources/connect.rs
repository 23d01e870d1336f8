//! Connected accounts and the money moving between them

use super::{BalanceTransaction, Charge, Currency, Expandable, Metadata};

resource! {
    /// A platform or connected account
    pub struct Account {
        pub id: String,
        pub object: String,
        pub business_type: Option<String>,
        pub charges_enabled: bool,
        pub country: Option<String>,
        pub created: i64,
        pub default_currency: Option<Currency>,
        pub details_submitted: bool,
        pub email: Option<String>,
        pub metadata: Metadata,
        pub payouts_enabled: bool,
        pub r#type: String,
    }
}

resource! {
    /// A fee collected by the platform on a connected account's charge
    pub struct ApplicationFee {
        pub id: String,
        pub object: String,
        pub account: Option<Expandable<Account>>,
        pub amount: i64,
        pub amount_refunded: i64,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub charge: Option<Expandable<Charge>>,
        pub created: i64,
        pub currency: Currency,
        pub livemode: bool,
        pub refunded: bool,
    }
}

resource! {
    /// Onboarding requirements for accounts in one country
    pub struct CountrySpec {
        pub id: String,
        pub object: String,
        pub default_currency: Currency,
        pub supported_payment_currencies: Vec<String>,
        pub supported_payment_methods: Vec<String>,
        pub supported_transfer_countries: Vec<String>,
    }
}

resource! {
    /// A short-lived key granting a client scoped API access
    pub struct EphemeralKey {
        pub id: String,
        pub object: String,
        pub created: i64,
        pub expires: i64,
        pub livemode: bool,
        pub secret: Option<String>,
    }
}

resource! {
    /// Funds added to the balance from a bank account
    pub struct Topup {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub created: i64,
        pub currency: Currency,
        pub description: Option<String>,
        pub expected_availability_date: Option<i64>,
        pub failure_code: Option<String>,
        pub failure_message: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub statement_descriptor: Option<String>,
        pub status: String,
        pub transfer_group: Option<String>,
    }
}

resource! {
    /// Funds moved from the platform to a connected account
    pub struct Transfer {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub amount_reversed: i64,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub created: i64,
        pub currency: Currency,
        pub description: Option<String>,
        pub destination: Option<Expandable<Account>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub reversed: bool,
        pub source_transaction: Option<Expandable<Charge>>,
        pub source_type: Option<String>,
        pub transfer_group: Option<String>,
    }
}
