//! Request dispatch capability the form-design client delegates to
//!
//! Implementations own the transport (base URL, auth, serialization). The
//! returned value is the backend's payload, already unwrapped from any
//! response envelope.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    /// GET `path` with the given query string pairs
    async fn get(&self, path: &str, query: HashMap<String, String>) -> Result<Value>;

    /// POST `path`, with a JSON body when one is given
    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value>;

    /// PUT `path`, with a JSON body when one is given
    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value>;

    /// DELETE `path` without a body
    async fn delete(&self, path: &str) -> Result<Value>;
}

/// Lets several clients share one dispatcher
#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    async fn get(&self, path: &str, query: HashMap<String, String>) -> Result<Value> {
        (**self).get(path, query).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        (**self).post(path, body).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        (**self).put(path, body).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        (**self).delete(path).await
    }
}
