//! Products, prices and recurring billing

use super::{Charge, Currency, Customer, Expandable, InvoiceStatus, Metadata, PaymentMethod, SubscriptionStatus};

resource! {
    /// A discount applied to invoices or subscriptions
    pub struct Coupon {
        pub id: String,
        pub object: String,
        pub amount_off: Option<i64>,
        pub created: i64,
        pub currency: Option<Currency>,
        pub duration: String,
        pub duration_in_months: Option<i64>,
        pub livemode: bool,
        pub max_redemptions: Option<i64>,
        pub metadata: Metadata,
        pub name: Option<String>,
        pub percent_off: Option<f64>,
        pub redeem_by: Option<i64>,
        pub times_redeemed: i64,
        pub valid: bool,
    }
}

resource! {
    /// A statement of amounts owed by a customer
    pub struct Invoice {
        pub id: String,
        pub object: String,
        pub account_country: Option<String>,
        pub account_name: Option<String>,
        pub amount_due: i64,
        pub amount_paid: i64,
        pub amount_remaining: i64,
        pub attempt_count: i64,
        pub attempted: bool,
        pub auto_advance: bool,
        pub billing_reason: Option<String>,
        pub charge: Option<Expandable<Charge>>,
        pub collection_method: Option<String>,
        pub created: i64,
        pub currency: Currency,
        pub customer: Option<Expandable<Customer>>,
        pub customer_email: Option<String>,
        pub description: Option<String>,
        pub due_date: Option<i64>,
        pub hosted_invoice_url: Option<String>,
        pub invoice_pdf: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub number: Option<String>,
        pub paid: bool,
        pub period_end: i64,
        pub period_start: i64,
        pub status: Option<InvoiceStatus>,
        pub subscription: Option<Expandable<Subscription>>,
        pub subtotal: i64,
        pub tax: Option<i64>,
        pub total: i64,
    }
}

resource! {
    /// A pending line to be added to a customer's next invoice
    pub struct InvoiceItem {
        pub id: String,
        pub object: String,
        pub amount: i64,
        pub currency: Currency,
        pub customer: Option<Expandable<Customer>>,
        pub date: i64,
        pub description: Option<String>,
        pub discountable: bool,
        pub invoice: Option<Expandable<Invoice>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub price: Option<Price>,
        pub proration: bool,
        pub quantity: i64,
        pub unit_amount: Option<i64>,
        pub unit_amount_decimal: Option<String>,
    }
}

resource! {
    /// Legacy recurring pricing for a product
    pub struct Plan {
        pub id: String,
        pub object: String,
        pub active: bool,
        pub aggregate_usage: Option<String>,
        pub amount: Option<i64>,
        pub amount_decimal: Option<String>,
        pub billing_scheme: String,
        pub created: i64,
        pub currency: Currency,
        pub interval: String,
        pub interval_count: i64,
        pub livemode: bool,
        pub metadata: Metadata,
        pub nickname: Option<String>,
        pub product: Option<Expandable<Product>>,
        pub trial_period_days: Option<i64>,
        pub usage_type: String,
    }
}

resource! {
    /// Unit cost, currency and cadence of a product
    pub struct Price {
        pub id: String,
        pub object: String,
        pub active: bool,
        pub billing_scheme: String,
        pub created: i64,
        pub currency: Currency,
        pub livemode: bool,
        pub lookup_key: Option<String>,
        pub metadata: Metadata,
        pub nickname: Option<String>,
        pub product: Option<Expandable<Product>>,
        pub recurring: Option<Recurring>,
        pub r#type: String,
        pub unit_amount: Option<i64>,
        pub unit_amount_decimal: Option<String>,
    }
}

resource! {
    pub struct Recurring {
        pub aggregate_usage: Option<String>,
        pub interval: String,
        pub interval_count: i64,
        pub usage_type: String,
    }
}

resource! {
    /// Goods or services offered to customers
    pub struct Product {
        pub id: String,
        pub object: String,
        pub active: bool,
        pub created: i64,
        pub description: Option<String>,
        pub images: Vec<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub name: String,
        pub shippable: Option<bool>,
        pub statement_descriptor: Option<String>,
        pub unit_label: Option<String>,
        pub updated: i64,
        pub url: Option<String>,
    }
}

resource! {
    /// Recurring charges for a customer
    pub struct Subscription {
        pub id: String,
        pub object: String,
        pub billing_cycle_anchor: i64,
        pub cancel_at: Option<i64>,
        pub cancel_at_period_end: bool,
        pub canceled_at: Option<i64>,
        pub collection_method: Option<String>,
        pub created: i64,
        pub current_period_end: i64,
        pub current_period_start: i64,
        pub customer: Option<Expandable<Customer>>,
        pub days_until_due: Option<i64>,
        pub default_payment_method: Option<Expandable<PaymentMethod>>,
        pub ended_at: Option<i64>,
        pub latest_invoice: Option<Expandable<Invoice>>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub start_date: i64,
        pub status: SubscriptionStatus,
        pub trial_end: Option<i64>,
        pub trial_start: Option<i64>,
    }
}

resource! {
    /// A tax rate applied to invoices
    pub struct TaxRate {
        pub id: String,
        pub object: String,
        pub active: bool,
        pub country: Option<String>,
        pub created: i64,
        pub description: Option<String>,
        pub display_name: String,
        pub inclusive: bool,
        pub jurisdiction: Option<String>,
        pub livemode: bool,
        pub metadata: Metadata,
        pub percentage: f64,
        pub state: Option<String>,
    }
}
