use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::response::ErrorBody;

type PanicPayload = Box<dyn Any + Send + 'static>;

pub fn catch_panic_layer() -> CatchPanicLayer<fn(PanicPayload) -> Response> {
    CatchPanicLayer::custom(panic_response)
}

fn panic_response(payload: PanicPayload) -> Response {
    let details = panic_details(payload.as_ref());
    tracing::error!(panic = details, "request handler panicked");

    // Release builds never echo panic text to clients.
    let message = if cfg!(debug_assertions) {
        format!("internal server error: {details}")
    } else {
        "internal server error".to_string()
    };
    ErrorBody::new(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

fn panic_details(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
        .unwrap_or("unknown panic")
}
