//! Service clients and their self-description
//!
//! Each service exposes its methods through [`Service::method`], so callers can
//! inspect the method's [`Signature`] and, for `Get(id, params)` methods, obtain
//! an invoker returning a type-erased [`Record`].

use crate::backend::Backend;
use crate::errors::StripeError;
use crate::params::GetParams;
use crate::reflect::{ParamKind, Record, Reflect, Signature, StructShape};
use crate::resources::{Account, Balance, EphemeralKey};
use crate::types::HttpMethod;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Credential and transport shared by every service of a client
#[derive(Clone)]
pub struct Session {
    key: Arc<str>,
    backend: Arc<dyn Backend>,
}

impl Session {
    pub fn new(key: impl Into<Arc<str>>, backend: Arc<dyn Backend>) -> Self {
        Self {
            key: key.into(),
            backend,
        }
    }

    async fn call(
        &self,
        method: HttpMethod,
        path: &str,
        params: &GetParams,
    ) -> Result<JsonValue, StripeError> {
        self.backend.call(method, path, &self.key, params).await
    }

    async fn fetch<R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &GetParams,
    ) -> Result<R, StripeError> {
        let value = self.call(method, path, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("key", &"[REDACTED]").finish()
    }
}

/// A resource that can be fetched and inspected
pub trait Resource: Reflect + Record + DeserializeOwned {}

impl<T: Reflect + Record + DeserializeOwned> Resource for T {}

/// Type-erased invoker for a `Get(id, params)` method
#[async_trait]
pub trait GetById: Send + Sync {
    /// Shape of the struct returned on success
    fn output(&self) -> &'static StructShape;

    async fn get(&self, id: &str, params: &GetParams) -> Result<Box<dyn Record>, StripeError>;
}

/// A method exposed by a service
#[derive(Clone)]
pub struct Method {
    pub name: &'static str,
    pub signature: Signature,
    handler: Option<Arc<dyn GetById>>,
}

impl Method {
    pub fn new(name: &'static str, signature: Signature) -> Self {
        Self {
            name,
            signature,
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn GetById>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// The invoker, when this method has the `(receiver, id, params)` shape
    pub fn by_id(&self) -> Option<Arc<dyn GetById>> {
        if self.signature.is_get_by_id() {
            self.handler.clone()
        } else {
            None
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("invokable", &self.handler.is_some())
            .finish()
    }
}

/// A service member of the client
pub trait Service: Send + Sync {
    /// Look up a method by its exported name, e.g. `Get`
    fn method(&self, name: &str) -> Option<Method>;
}

/// Encode an id as a single path segment
fn path_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes()).collect()
}

/// Client for a resource retrievable at `{path}/{id}`
pub struct ResourceClient<R> {
    session: Session,
    path: &'static str,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            path: self.path,
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient").field("path", &self.path).finish()
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(session: Session, path: &'static str) -> Self {
        Self {
            session,
            path,
            _resource: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Retrieve a resource by id
    pub async fn get(&self, id: &str, params: &GetParams) -> Result<R, StripeError> {
        if id.is_empty() {
            return Err(StripeError::InvalidRequest(format!(
                "{} id must not be empty",
                R::NAME
            )));
        }

        let path = format!("{}/{}", self.path, path_segment(id));
        self.session.fetch(HttpMethod::Get, &path, params).await
    }

    fn get_signature() -> Signature {
        Signature {
            inputs: vec![ParamKind::Receiver, ParamKind::Id, ParamKind::Params(R::NAME)],
            output: Some(R::shape()),
        }
    }
}

#[async_trait]
impl<R: Resource> GetById for ResourceClient<R> {
    fn output(&self) -> &'static StructShape {
        R::shape()
    }

    async fn get(&self, id: &str, params: &GetParams) -> Result<Box<dyn Record>, StripeError> {
        let resource = ResourceClient::<R>::get(self, id, params).await?;
        Ok(Box::new(resource))
    }
}

impl<R: Resource> Service for ResourceClient<R> {
    fn method(&self, name: &str) -> Option<Method> {
        match name {
            "Get" => Some(
                Method::new("Get", Self::get_signature()).with_handler(Arc::new(self.clone())),
            ),
            _ => None,
        }
    }
}

/// Balance of the calling account. `Get` takes no id.
#[derive(Debug, Clone)]
pub struct BalanceClient {
    session: Session,
}

impl BalanceClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn get(&self, params: &GetParams) -> Result<Balance, StripeError> {
        self.session.fetch(HttpMethod::Get, "/v1/balance", params).await
    }
}

impl Service for BalanceClient {
    fn method(&self, name: &str) -> Option<Method> {
        match name {
            "Get" => Some(Method::new(
                "Get",
                Signature {
                    inputs: vec![ParamKind::Receiver, ParamKind::Params(Balance::NAME)],
                    output: Some(Balance::shape()),
                },
            )),
            _ => None,
        }
    }
}

/// Accounts. `Get` reads the calling account; other accounts go through
/// `GetByID`.
#[derive(Debug, Clone)]
pub struct AccountClient {
    session: Session,
    by_id: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(session: Session) -> Self {
        Self {
            by_id: ResourceClient::new(session.clone(), "/v1/accounts"),
            session,
        }
    }

    pub async fn get(&self) -> Result<Account, StripeError> {
        self.session
            .fetch(HttpMethod::Get, "/v1/account", &GetParams::default())
            .await
    }

    pub async fn get_by_id(&self, id: &str, params: &GetParams) -> Result<Account, StripeError> {
        self.by_id.get(id, params).await
    }
}

impl Service for AccountClient {
    fn method(&self, name: &str) -> Option<Method> {
        match name {
            "Get" => Some(Method::new(
                "Get",
                Signature {
                    inputs: vec![ParamKind::Receiver],
                    output: Some(Account::shape()),
                },
            )),
            "GetByID" => Some(
                Method::new("GetByID", ResourceClient::<Account>::get_signature())
                    .with_handler(Arc::new(self.by_id.clone())),
            ),
            _ => None,
        }
    }
}

/// Ephemeral keys can only be created and deleted
#[derive(Debug, Clone)]
pub struct EphemeralKeyClient {
    session: Session,
}

impl EphemeralKeyClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub async fn del(&self, id: &str, params: &GetParams) -> Result<EphemeralKey, StripeError> {
        if id.is_empty() {
            return Err(StripeError::InvalidRequest(
                "EphemeralKey id must not be empty".to_string(),
            ));
        }

        let path = format!("/v1/ephemeral_keys/{}", path_segment(id));
        self.session.fetch(HttpMethod::Delete, &path, params).await
    }
}

impl Service for EphemeralKeyClient {
    fn method(&self, name: &str) -> Option<Method> {
        match name {
            "Del" => Some(Method::new(
                "Del",
                Signature {
                    inputs: vec![ParamKind::Receiver, ParamKind::Id, ParamKind::Params(EphemeralKey::NAME)],
                    output: Some(EphemeralKey::shape()),
                },
            )),
            _ => None,
        }
    }
}
