//! Form-design API module
//!
//! Typed wire shapes for the workorder form-design endpoints, a client issuing
//! one call per operation, and a reqwest-backed dispatcher for talking to a
//! real backend. The client only depends on the [`Dispatcher`] trait, so any
//! transport (or a test double) can stand in.

pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod form_design;
pub mod http;
pub mod logging;
pub mod models;
pub mod schema_check;

pub use dispatcher::Dispatcher;
pub use error::ApiError;
pub use form_design::FormDesignClient;
pub use http::HttpDispatcher;
pub use logging::{LogLevel, LoggingConfig, RequestContext, RequestLogger};
pub use models::{
    Category, CloneFormDesignReq, DetailFormDesignReq, FieldType, FormDesignItem, FormDesignReq,
    FormDesignResp, FormField, FormFieldOption, FormFieldValidation, FormSchema, ListFormDesignReq,
    ListResp, PreviewFormDesignResp, PublishFormDesignReq, ValidateFormDesignResp,
};
pub use schema_check::check_schema;
