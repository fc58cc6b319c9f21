use super::constants::{self, headers, SUCCESS_CODE};
use super::dispatcher::Dispatcher;
use super::error::ApiError;
use super::logging::{LoggingConfig, RequestContext, RequestLogger};
use crate::config::ClientConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

const USER_AGENT: &str = concat!("form-design/", env!("CARGO_PKG_VERSION"));

/// Dispatcher backed by a pooled reqwest client
#[derive(Clone)]
pub struct HttpDispatcher {
    base_url: String,
    token: Option<String>,
    http_client: reqwest::Client,
    logger: RequestLogger,
}

/// Body shape every endpoint answers with
#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Value,
}

impl HttpDispatcher {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(config, http_client))
    }

    /// Use a preconfigured reqwest client (proxies, custom TLS, ...)
    pub fn with_custom_client(config: &ClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            base_url: config.base_url.clone(),
            token: config.token.clone(),
            http_client,
            logger: RequestLogger::new(LoggingConfig::default()),
        }
    }

    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logger = RequestLogger::new(logging);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: HashMap<String, String>,
        body: Option<Value>,
    ) -> Result<Value> {
        let url = constants::endpoint(&self.base_url, path);
        let context = self.logger.start(method.as_str(), path);

        let mut request_headers = HashMap::new();
        request_headers.insert("Accept".to_string(), headers::CONTENT_TYPE_JSON.to_string());
        request_headers.insert(headers::X_REQUEST_ID.to_string(), context.correlation_id.clone());

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .header(headers::X_REQUEST_ID, &context.correlation_id);

        if let Some(token) = &self.token {
            request_headers.insert("Authorization".to_string(), format!("Bearer {}", token));
            request = request.bearer_auth(token);
        }

        if !query.is_empty() {
            request = request.query(&query);
        }

        if let Some(body) = &body {
            request_headers.insert("Content-Type".to_string(), headers::CONTENT_TYPE_JSON.to_string());
            request = request.json(body);
        }

        self.logger.log_request(&context, &url, &request_headers);

        let result = self.execute(&context, request).await;
        let error_message = result.as_ref().err().map(|e| e.to_string());
        self.logger.complete(&context, error_message.as_deref());

        result.map_err(anyhow::Error::from)
    }

    async fn execute(&self, context: &RequestContext, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        self.logger.log_response(context, status.as_u16(), context.elapsed());

        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        unwrap_envelope(&text)
    }
}

/// Extract `data` from a successful response body
fn unwrap_envelope(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    let envelope: Envelope =
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;

    if envelope.code != SUCCESS_CODE {
        return Err(ApiError::Backend {
            code: envelope.code,
            message: envelope.message,
        });
    }

    Ok(envelope.data)
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn get(&self, path: &str, query: HashMap<String, String>) -> Result<Value> {
        self.send(Method::GET, path, query, None).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.send(Method::POST, path, HashMap::new(), body).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        self.send(Method::PUT, path, HashMap::new(), body).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.send(Method::DELETE, path, HashMap::new(), None).await
    }
}
