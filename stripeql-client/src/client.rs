//! The API client and its introspection surface

use crate::backend::{Backend, HttpBackend};
use crate::config::ClientConfig;
use crate::errors::StripeError;
use crate::resources::*;
use crate::service::{
    AccountClient, BalanceClient, EphemeralKeyClient, ResourceClient, Service, Session,
};
use std::sync::Arc;
use tracing::debug;

/// A named service member of a client
#[derive(Clone, Copy)]
pub struct ServiceField<'a> {
    pub name: &'static str,
    pub service: &'a dyn Service,
}

impl std::fmt::Debug for ServiceField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceField").field("name", &self.name).finish()
    }
}

/// Types that can enumerate their service members
pub trait Introspect {
    /// Service members in declaration order
    fn fields(&self) -> Vec<ServiceField<'_>>;
}

macro_rules! api_client {
    ($( $field:ident : $service:ty = $build:expr ),* $(,)?) => {
        /// Payment API client with one member per service
        pub struct Client {
            $( pub $field: $service, )*
        }

        impl Client {
            fn with_session(session: Session) -> Self {
                Self {
                    $( $field: ($build)(session.clone()), )*
                }
            }
        }

        impl Introspect for Client {
            fn fields(&self) -> Vec<ServiceField<'_>> {
                vec![
                    $(
                        ServiceField {
                            name: stringify!($field),
                            service: &self.$field,
                        },
                    )*
                ]
            }
        }
    };
}

api_client! {
    accounts: AccountClient = AccountClient::new,
    application_fees: ResourceClient<ApplicationFee> =
        |s| ResourceClient::new(s, "/v1/application_fees"),
    balance: BalanceClient = BalanceClient::new,
    balance_transactions: ResourceClient<BalanceTransaction> =
        |s| ResourceClient::new(s, "/v1/balance_transactions"),
    charges: ResourceClient<Charge> = |s| ResourceClient::new(s, "/v1/charges"),
    coupons: ResourceClient<Coupon> = |s| ResourceClient::new(s, "/v1/coupons"),
    country_specs: ResourceClient<CountrySpec> = |s| ResourceClient::new(s, "/v1/country_specs"),
    customers: ResourceClient<Customer> = |s| ResourceClient::new(s, "/v1/customers"),
    disputes: ResourceClient<Dispute> = |s| ResourceClient::new(s, "/v1/disputes"),
    ephemeral_keys: EphemeralKeyClient = EphemeralKeyClient::new,
    events: ResourceClient<Event> = |s| ResourceClient::new(s, "/v1/events"),
    files: ResourceClient<File> = |s| ResourceClient::new(s, "/v1/files"),
    invoice_items: ResourceClient<InvoiceItem> = |s| ResourceClient::new(s, "/v1/invoiceitems"),
    invoices: ResourceClient<Invoice> = |s| ResourceClient::new(s, "/v1/invoices"),
    mandates: ResourceClient<Mandate> = |s| ResourceClient::new(s, "/v1/mandates"),
    payment_intents: ResourceClient<PaymentIntent> =
        |s| ResourceClient::new(s, "/v1/payment_intents"),
    payment_methods: ResourceClient<PaymentMethod> =
        |s| ResourceClient::new(s, "/v1/payment_methods"),
    payouts: ResourceClient<Payout> = |s| ResourceClient::new(s, "/v1/payouts"),
    plans: ResourceClient<Plan> = |s| ResourceClient::new(s, "/v1/plans"),
    prices: ResourceClient<Price> = |s| ResourceClient::new(s, "/v1/prices"),
    products: ResourceClient<Product> = |s| ResourceClient::new(s, "/v1/products"),
    refunds: ResourceClient<Refund> = |s| ResourceClient::new(s, "/v1/refunds"),
    reviews: ResourceClient<Review> = |s| ResourceClient::new(s, "/v1/reviews"),
    setup_intents: ResourceClient<SetupIntent> = |s| ResourceClient::new(s, "/v1/setup_intents"),
    subscriptions: ResourceClient<Subscription> = |s| ResourceClient::new(s, "/v1/subscriptions"),
    tax_rates: ResourceClient<TaxRate> = |s| ResourceClient::new(s, "/v1/tax_rates"),
    tokens: ResourceClient<Token> = |s| ResourceClient::new(s, "/v1/tokens"),
    topups: ResourceClient<Topup> = |s| ResourceClient::new(s, "/v1/topups"),
    transfers: ResourceClient<Transfer> = |s| ResourceClient::new(s, "/v1/transfers"),
}

impl Client {
    /// Create a client for `key`. Without a backend the default HTTP backend
    /// is used.
    pub fn new(key: &str, backend: Option<Arc<dyn Backend>>) -> Result<Self, StripeError> {
        let backend = match backend {
            Some(backend) => backend,
            None => Arc::new(HttpBackend::new(ClientConfig::default())?),
        };
        Ok(Self::with_session(Session::new(key, backend)))
    }

    /// Create a client using the HTTP backend built from `config`
    pub fn with_config(key: &str, config: ClientConfig) -> Result<Self, StripeError> {
        debug!("Creating client for {}", config.api_base);
        let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(config)?);
        Self::new(key, Some(backend))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("services", &self.fields().len())
            .finish()
    }
}
