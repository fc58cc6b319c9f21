//! Form-design endpoints
//!
//! One method per backend operation. Each builds the verb, path and payload,
//! hands them to the dispatcher and decodes what comes back. Dispatcher
//! failures are returned untouched; nothing here validates, retries or caches.

use super::constants;
use super::dispatcher::Dispatcher;
use super::error::ApiError;
use super::models::{
    CloneFormDesignReq, DetailFormDesignReq, FormDesignItem, FormDesignReq, FormDesignResp,
    ListFormDesignReq, ListResp, PreviewFormDesignResp, PublishFormDesignReq,
};
use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub struct FormDesignClient<D> {
    dispatcher: D,
}

impl<D: Dispatcher> FormDesignClient<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// POST /workorder/form-design/create
    ///
    /// Returns the stored design when the backend echoes it, `None` when it
    /// acknowledges with an empty payload.
    pub async fn create(&self, req: &FormDesignReq) -> Result<Option<FormDesignResp>> {
        let path = constants::create_path();
        debug!("create form design '{}': POST {}", req.name, path);

        let data = self.dispatcher.post(&path, Some(to_body(req)?)).await?;
        decode_optional("create", data)
    }

    /// PUT /workorder/form-design/update/{id}
    ///
    /// The whole request, id included, is sent as the body. Path and body ids
    /// both come from `req.id`; a request without an id is rejected before
    /// anything is sent.
    pub async fn update(&self, req: &FormDesignReq) -> Result<Option<FormDesignResp>> {
        let id = req.id.ok_or(ApiError::MissingId("update"))?;
        let path = constants::update_path(id);
        debug!("update form design {}: PUT {}", id, path);

        let data = self.dispatcher.put(&path, Some(to_body(req)?)).await?;
        decode_optional("update", data)
    }

    /// DELETE /workorder/form-design/delete/{id}
    pub async fn delete(&self, req: &DetailFormDesignReq) -> Result<Value> {
        let path = constants::delete_path(req.id);
        debug!("delete form design {}: DELETE {}", req.id, path);

        self.dispatcher.delete(&path).await
    }

    /// GET /workorder/form-design/list
    pub async fn list(&self, req: &ListFormDesignReq) -> Result<ListResp<FormDesignItem>> {
        let path = constants::list_path();
        let query = req.to_query_params();
        debug!("list form designs: GET {} {:?}", path, query);

        let data = self.dispatcher.get(&path, query).await?;
        decode("list", data)
    }

    /// GET /workorder/form-design/detail/{id}
    pub async fn detail(&self, req: &DetailFormDesignReq) -> Result<FormDesignResp> {
        let path = constants::detail_path(req.id);
        debug!("form design detail {}: GET {}", req.id, path);

        let data = self.dispatcher.get(&path, HashMap::new()).await?;
        decode("detail", data)
    }

    /// POST /workorder/form-design/publish/{id}, without a body
    pub async fn publish(&self, req: &PublishFormDesignReq) -> Result<Value> {
        let path = constants::publish_path(req.id);
        debug!("publish form design {}: POST {}", req.id, path);

        self.dispatcher.post(&path, None).await
    }

    /// POST /workorder/form-design/clone/{id} with `{id, name}` as body
    pub async fn clone_design(&self, req: &CloneFormDesignReq) -> Result<Value> {
        let path = constants::clone_path(req.id);
        debug!("clone form design {} as '{}': POST {}", req.id, req.name, path);

        self.dispatcher.post(&path, Some(to_body(req)?)).await
    }

    /// GET /workorder/form-design/preview/{id}
    pub async fn preview(&self, req: &DetailFormDesignReq) -> Result<PreviewFormDesignResp> {
        let path = constants::preview_path(req.id);
        debug!("preview form design {}: GET {}", req.id, path);

        let data = self.dispatcher.get(&path, HashMap::new()).await?;
        decode("preview", data)
    }
}

fn to_body<T: Serialize>(req: &T) -> Result<Value> {
    serde_json::to_value(req).context("Failed to serialize request body")
}

fn decode<T: DeserializeOwned>(operation: &str, data: Value) -> Result<T> {
    serde_json::from_value(data)
        .with_context(|| format!("Failed to decode {} response", operation))
}

fn decode_optional<T: DeserializeOwned>(operation: &str, data: Value) -> Result<Option<T>> {
    if data.is_null() {
        return Ok(None);
    }
    decode(operation, data).map(Some)
}
