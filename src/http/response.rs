//! Pipeline results as HTTP responses.
//!
//! # Design Decisions
//! - Pages are always `text/html; charset=utf-8`
//! - Redirects carry a `Location` header
//! - Render failures become a fixed 500 body; details go to the log only

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::observability::metrics;
use crate::pipeline::{RenderedPage, SsrError};

const HTML: &str = "text/html; charset=utf-8";

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        let mut response = (self.status, [(header::CONTENT_TYPE, HTML)], self.body).into_response();

        if let Some(location) = self.location {
            match HeaderValue::from_str(&location) {
                Ok(value) => {
                    response.headers_mut().insert(header::LOCATION, value);
                }
                Err(_) => {
                    tracing::warn!(
                        location = %location,
                        "Redirect target is not a valid header value"
                    );
                }
            }
        }

        response
    }
}

impl IntoResponse for SsrError {
    fn into_response(self) -> Response {
        tracing::error!(url = %self.url(), error = %self, "Server-side render failed");
        metrics::record_render_failure();

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
