use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use shared_types::AppError;
use std::any::Any;
use std::collections::HashMap;

use crate::pricing::PricingError;
use crate::templates::TemplateError;

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let message = err.to_string();
        match err.field() {
            Some(field) => AppError::invalid_pricing_input(message.clone()).with_field(field, message),
            None => AppError::invalid_pricing_input(message),
        }
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        AppError::invalid_template_key(err.to_string())
    }
}

/// Map a JSON body rejection. Bodies that decode but carry a wrong or missing
/// field go through `on_data`; unparseable bodies are `BadRequest`.
pub fn json_rejection<F>(rejection: JsonRejection, on_data: F) -> AppError
where
    F: FnOnce(String) -> AppError,
{
    match rejection {
        JsonRejection::JsonDataError(e) => on_data(e.body_text()),
        other => AppError::bad_request(other.body_text()),
    }
}

/// Decode failures on a JSON body that has no domain-specific error kind.
pub fn json_data_invalid(message: String) -> AppError {
    AppError::validation(message, HashMap::new())
}

pub fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}

/// Response for a handler panic, installed via `CatchPanicLayer::custom`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    tracing::error!(%detail, "handler panicked");
    AppError::internal("internal server error").into_response()
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
