//! Payment intents, payment methods and fraud reviews

use super::{Address, Card, Charge, Currency, Customer, Expandable, Invoice, Metadata, PaymentIntentStatus};

resource! {
    /// Guides the collection of a payment from a customer
    pub struct PaymentIntent {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub amount_capturable: i64,
        pub amount_received: i64,
        pub application_fee_amount: Option<i64>,
        pub canceled_at: Option<i64>,
        pub cancellation_reason: Option<String>,
        pub capture_method: String,
        pub client_secret: Option<String>,
        pub confirmation_method: String,
        pub created: i64,
        pub currency: Currency,
        pub customer: Option<Expandable<Customer>>,
        pub description: Option<String>,
        pub invoice: Option<Expandable<Invoice>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub payment_method: Option<Expandable<PaymentMethod>>,
        pub payment_method_types: Vec<String>,
        pub receipt_email: Option<String>,
        pub statement_descriptor: Option<String>,
        pub status: PaymentIntentStatus,
        pub transfer_group: Option<String>,
    }
}

resource! {
    /// A stored instrument that can be charged
    pub struct PaymentMethod {
        pub id: String,
        pub object: String,
        pub billing_details: Option<BillingDetails>,
        pub card: Option<Card>,
        pub created: i64,
        pub customer: Option<Expandable<Customer>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub r#type: String,
    }
}

resource! {
    pub struct BillingDetails {
        pub address: Option<Address>,
        pub email: Option<String>,
        pub name: Option<String>,
        pub phone: Option<String>,
    }
}

resource! {
    /// Sets up a payment method for future payments
    pub struct SetupIntent {
        pub id: String,
        pub object: String,
        pub cancellation_reason: Option<String>,
        pub client_secret: Option<String>,
        pub created: i64,
        pub customer: Option<Expandable<Customer>>,
        pub description: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub payment_method: Option<Expandable<PaymentMethod>>,
        pub payment_method_types: Vec<String>,
        pub status: String,
        pub usage: String,
    }
}

resource! {
    /// A payment flagged for manual fraud review
    pub struct Review {
        pub id: String,
        pub object: String,
        pub billing_zip: Option<String>,
        pub charge: Option<Expandable<Charge>>,
        pub closed_reason: Option<String>,
        pub created: i64,
        pub ip_address: Option<String>,
        pub livemode: bool,
        pub open: bool,
        pub opened_reason: String,
        pub payment_intent: Option<Expandable<PaymentIntent>>,
        pub reason: String,
    }
}
