//! Charges, customers and the balance objects around them

use super::{
    ChargeStatus, Currency, DisputeStatus, Expandable, Invoice, Metadata, PaymentIntent,
    PaymentMethod, TaxExempt,
};

resource! {
    /// Funds available and pending in the account, per currency
    pub struct Balance {
        pub object: String,
        pub available: Vec<BalanceAmount>,
        pub pending: Vec<BalanceAmount>,
        pub livemode: bool,
    }
}

resource! {
    pub struct BalanceAmount {
        pub amount: i64,
        pub currency: Currency,
    }
}

resource! {
    /// A movement of funds through the account balance
    pub struct BalanceTransaction {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub available_on: i64,
        pub created: i64,
        pub currency: Currency,
        pub description: Option<String>,
        pub exchange_rate: Option<f64>,
        pub fee: i64,
        pub fee_details: Vec<Fee>,
        pub net: i64,
        pub reporting_category: String,
        pub source: Option<String>,
        pub status: String,
        pub r#type: String,
    }
}

resource! {
    pub struct Fee {
        pub amount: i64,
        pub application: Option<String>,
        pub currency: Currency,
        pub description: Option<String>,
        pub r#type: String,
    }
}

resource! {
    /// A single attempt to move money onto the account
    pub struct Charge {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub amount_captured: i64,
        pub amount_refunded: i64,
        pub application_fee_amount: Option<i64>,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub calculated_statement_descriptor: Option<String>,
        pub captured: bool,
        pub created: i64,
        pub currency: Currency,
        pub customer: Option<Expandable<Customer>>,
        pub description: Option<String>,
        pub disputed: bool,
        pub failure_code: Option<String>,
        pub failure_message: Option<String>,
        pub invoice: Option<Expandable<Invoice>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub paid: bool,
        pub payment_intent: Option<Expandable<PaymentIntent>>,
        pub payment_method: Option<String>,
        pub receipt_email: Option<String>,
        pub receipt_number: Option<String>,
        pub receipt_url: Option<String>,
        pub refunded: bool,
        pub statement_descriptor: Option<String>,
        pub status: ChargeStatus,
        pub transfer_group: Option<String>,
    }
}

resource! {
    /// A customer of the business
    pub struct Customer {
        pub id: String,
        pub object: String,
        pub address: Option<Address>,
        pub balance: i64,
        pub created: i64,
        pub currency: Option<Currency>,
        pub default_source: Option<String>,
        pub deleted: bool,
        pub delinquent: bool,
        pub description: Option<String>,
        pub email: Option<String>,
        pub invoice_prefix: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub name: Option<String>,
        pub next_invoice_sequence: i64,
        pub phone: Option<String>,
        pub preferred_locales: Vec<String>,
        pub tax_exempt: TaxExempt,
    }
}

resource! {
    pub struct Address {
        pub city: Option<String>,
        pub country: Option<String>,
        pub line1: Option<String>,
        pub line2: Option<String>,
        pub postal_code: Option<String>,
        pub state: Option<String>,
    }
}

resource! {
    /// A charge the cardholder has contested with their bank
    pub struct Dispute {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub balance_transactions: Vec<BalanceTransaction>,
        pub charge: Option<Expandable<Charge>>,
        pub created: i64,
        pub currency: Currency,
        pub is_charge_refundable: bool,
        pub livemode: bool,
        pub metadata: Metadata,
        pub payment_intent: Option<Expandable<PaymentIntent>>,
        pub reason: String,
        pub status: DisputeStatus,
    }
}

resource! {
    /// A change that happened on the account
    pub struct Event {
        pub id: String,
        pub object: String,
        pub account: Option<String>,
        pub api_version: Option<String>,
        pub created: i64,
        pub data: EventData,
        pub livemode: bool,
        pub pending_webhooks: i64,
        pub request: Option<EventRequest>,
        pub r#type: String,
    }
}

resource! {
    pub struct EventData {
        pub object: serde_json::Value,
        pub previous_attributes: Option<serde_json::Value>,
    }
}

resource! {
    pub struct EventRequest {
        pub id: Option<String>,
        pub idempotency_key: Option<String>,
    }
}

resource! {
    /// A file hosted by the payment platform
    pub struct File {
        pub id: String,
        pub object: String,
        pub created: i64,
        pub expires_at: Option<i64>,
        pub filename: Option<String>,
        pub purpose: String,
        pub size: i64,
        pub title: Option<String>,
        pub r#type: Option<String>,
        pub url: Option<String>,
    }
}

resource! {
    /// Authorisation to debit a payment method
    pub struct Mandate {
        pub id: String,
        pub object: String,
        pub livemode: bool,
        pub payment_method: Option<Expandable<PaymentMethod>>,
        pub status: String,
        pub r#type: String,
    }
}

resource! {
    /// Funds sent from the balance to a bank account or debit card
    pub struct Payout {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub arrival_date: i64,
        pub automatic: bool,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub created: i64,
        pub currency: Currency,
        pub description: Option<String>,
        pub destination: Option<String>,
        pub failure_code: Option<String>,
        pub failure_message: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub method: String,
        pub source_type: String,
        pub statement_descriptor: Option<String>,
        pub status: String,
        pub r#type: String,
    }
}

resource! {
    /// Money returned against a previous charge
    pub struct Refund {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub balance_transaction: Option<Expandable<BalanceTransaction>>,
        pub charge: Option<Expandable<Charge>>,
        pub created: i64,
        pub currency: Currency,
        pub metadata: Metadata,
        pub payment_intent: Option<Expandable<PaymentIntent>>,
        pub reason: Option<String>,
        pub receipt_number: Option<String>,
        pub status: Option<String>,
    }
}

resource! {
    /// A single-use handle on card or bank details
    pub struct Token {
        pub id: String,
        pub object: String,
        pub card: Option<Card>,
        pub client_ip: Option<String>,
        pub created: i64,
        pub livemode: bool,
        pub r#type: String,
        pub used: bool,
    }
}

resource! {
    pub struct Card {
        pub id: Option<String>,
        pub brand: String,
        pub country: Option<String>,
        pub exp_month: i64,
        pub exp_year: i64,
        pub fingerprint: Option<String>,
        pub funding: String,
        pub last4: String,
    }
}
