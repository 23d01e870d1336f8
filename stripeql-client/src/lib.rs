//! Payment API client for stripeql
//!
//! Resources and services describe themselves at runtime through the
//! [`reflect`] module, which lets the schema builder discover what the client
//! can fetch without static declarations on its side.

pub mod backend;
pub mod client;
pub mod config;
pub mod errors;
pub mod params;
pub mod reflect;
pub mod resources;
pub mod service;
pub mod types;

pub use backend::{Backend, HttpBackend};
pub use client::{Client, Introspect, ServiceField};
pub use config::ClientConfig;
pub use errors::StripeError;
pub use params::GetParams;
pub use reflect::{
    FieldKind, FieldShape, ParamKind, Record, Reflect, Scalar, ScalarKind, Signature, StructShape,
};
pub use service::{GetById, Method, Resource, ResourceClient, Service, Session};
pub use types::HttpMethod;
