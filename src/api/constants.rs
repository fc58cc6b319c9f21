//! Endpoint paths and header values for the form-design API

/// Prefix shared by every form-design endpoint
pub const FORM_DESIGN_BASE_PATH: &str = "/workorder/form-design";

/// Envelope `code` the backend uses for success
pub const SUCCESS_CODE: i64 = 0;

pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Correlation id sent with every request
    pub const X_REQUEST_ID: &str = "X-Request-ID";
}

pub mod methods {
    pub const GET: &str = "GET";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
    pub const DELETE: &str = "DELETE";
}

pub fn create_path() -> String {
    format!("{}/create", FORM_DESIGN_BASE_PATH)
}

pub fn update_path(id: i64) -> String {
    format!("{}/update/{}", FORM_DESIGN_BASE_PATH, id)
}

pub fn delete_path(id: i64) -> String {
    format!("{}/delete/{}", FORM_DESIGN_BASE_PATH, id)
}

pub fn list_path() -> String {
    format!("{}/list", FORM_DESIGN_BASE_PATH)
}

pub fn detail_path(id: i64) -> String {
    format!("{}/detail/{}", FORM_DESIGN_BASE_PATH, id)
}

pub fn publish_path(id: i64) -> String {
    format!("{}/publish/{}", FORM_DESIGN_BASE_PATH, id)
}

pub fn clone_path(id: i64) -> String {
    format!("{}/clone/{}", FORM_DESIGN_BASE_PATH, id)
}

pub fn preview_path(id: i64) -> String {
    format!("{}/preview/{}", FORM_DESIGN_BASE_PATH, id)
}

/// Join the configured API base and an endpoint path
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
