//! Structured request logging with correlation ids
//!
//! Each dispatched call gets a [`RequestContext`] carrying a correlation id that
//! is also sent as the `X-Request-ID` header, so client logs can be matched to
//! backend logs.

use serde_json::json;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use log::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub request_logging: bool,
    pub log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            request_logging: true,
            log_level: LogLevel::Info,
        }
    }
}

impl LoggingConfig {
    /// No output at all, used when the caller does its own tracing
    pub fn silent() -> Self {
        Self {
            request_logging: false,
            log_level: LogLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestLogger {
    config: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: String,
    pub method: String,
    pub path: String,
    pub start_time: Instant,
}

impl RequestContext {
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl RequestLogger {
    pub fn new(config: LoggingConfig) -> Self {
        Self { config }
    }

    /// Open a context for one call and log its start
    pub fn start(&self, method: &str, path: &str) -> RequestContext {
        let context = RequestContext {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            method: method.to_string(),
            path: path.to_string(),
            start_time: Instant::now(),
        };

        if self.config.request_logging && self.should_log(LogLevel::Info) {
            let log_data = json!({
                "event": "request_started",
                "correlation_id": context.correlation_id,
                "method": context.method,
                "path": context.path,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });

            info!("API Request Started: {}", log_data);
        }

        context
    }

    pub fn log_request(&self, context: &RequestContext, url: &str, headers: &HashMap<String, String>) {
        if !self.config.request_logging || !self.should_log(LogLevel::Debug) {
            return;
        }

        let log_data = json!({
            "event": "http_request",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "url": url,
            "headers": self.sanitize_headers(headers),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        debug!("HTTP Request: {}", log_data);
    }

    pub fn log_response(&self, context: &RequestContext, status_code: u16, duration: Duration) {
        if !self.config.request_logging {
            return;
        }

        let log_data = json!({
            "event": "http_response",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "path": context.path,
            "status_code": status_code,
            "duration_ms": duration.as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if status_code >= 400 {
            if self.should_log(LogLevel::Warn) {
                warn!("HTTP Response (Error): {}", log_data);
            }
        } else if self.should_log(LogLevel::Debug) {
            debug!("HTTP Response: {}", log_data);
        }
    }

    /// Close the context, logging the outcome
    pub fn complete(&self, context: &RequestContext, error_message: Option<&str>) {
        let log_data = json!({
            "event": "request_completed",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "path": context.path,
            "duration_ms": context.elapsed().as_millis(),
            "success": error_message.is_none(),
            "error_message": error_message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        match error_message {
            None if self.config.request_logging && self.should_log(LogLevel::Info) => {
                info!("API Request Completed: {}", log_data);
            }
            Some(_) if self.should_log(LogLevel::Error) && self.config.request_logging => {
                error!("API Request Failed: {}", log_data);
            }
            _ => {}
        }
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level <= self.config.log_level
    }

    /// Redact credentials before headers reach the log
    fn sanitize_headers(&self, headers: &HashMap<String, String>) -> HashMap<String, String> {
        headers
            .iter()
            .map(|(key, value)| {
                let key_lower = key.to_lowercase();
                if key_lower.contains("authorization") || key_lower.contains("token") || key_lower.contains("key") {
                    (key.clone(), "[REDACTED]".to_string())
                } else {
                    (key.clone(), value.clone())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let logger = RequestLogger::new(LoggingConfig::default());
        let context = logger.start("GET", "/workorder/form-design/list");

        assert_eq!(context.method, "GET");
        assert_eq!(context.path, "/workorder/form-design/list");
        assert!(uuid::Uuid::parse_str(&context.correlation_id).is_ok());
    }

    #[test]
    fn test_correlation_ids_are_unique() {
        let logger = RequestLogger::new(LoggingConfig::silent());
        let a = logger.start("GET", "/a");
        let b = logger.start("GET", "/a");
        assert_ne!(a.correlation_id, b.correlation_id);
    }

    #[test]
    fn test_header_sanitization() {
        let logger = RequestLogger::new(LoggingConfig::default());
        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), "Bearer secret-token".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("X-API-Key".to_string(), "secret-key".to_string());

        let sanitized = logger.sanitize_headers(&headers);

        assert_eq!(sanitized.get("Authorization"), Some(&"[REDACTED]".to_string()));
        assert_eq!(sanitized.get("Accept"), Some(&"application/json".to_string()));
        assert_eq!(sanitized.get("X-API-Key"), Some(&"[REDACTED]".to_string()));
    }

    #[test]
    fn test_log_level_filtering() {
        let logger = RequestLogger::new(LoggingConfig {
            request_logging: true,
            log_level: LogLevel::Warn,
        });

        assert!(logger.should_log(LogLevel::Error));
        assert!(logger.should_log(LogLevel::Warn));
        assert!(!logger.should_log(LogLevel::Info));
        assert!(!logger.should_log(LogLevel::Debug));
        assert!(!logger.should_log(LogLevel::Trace));
    }
}
