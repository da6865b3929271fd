//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, one-shot path
//! resolution, and routing on (method, classification). All per-request
//! state lives in a `RequestContext` passed explicitly down the call chain;
//! nothing is stored on a long-lived handler.

use crate::config::AppState;
use crate::fs::resolver::{self, Classification};
use crate::handler::fs_ops;
use crate::http;
use crate::logger::{self, OperationLogEntry};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

/// Per-request context, created once per request and discarded with the
/// response.
pub struct RequestContext<'a> {
    /// Absolute filesystem path the URL resolved to
    pub path: PathBuf,
    /// Target classification, computed exactly once before dispatch
    pub classification: Classification,
    pub method: &'a Method,
    pub is_head: bool,
    /// Operation log switch and format, from configuration
    pub op_log: bool,
    pub log_format: &'a str,
}

impl RequestContext<'_> {
    /// Emit one operation log line for this request's outcome
    pub fn log(&self, operation: Option<&'static str>, status: u16, error: Option<String>) {
        if !self.op_log {
            return;
        }
        let mut entry = OperationLogEntry::new(
            self.path.display().to_string(),
            self.method.to_string(),
            status,
        );
        entry.operation = operation;
        entry.error = error;
        logger::log_operation(&entry, self.log_format);
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let url_path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&method, state.config.http.enable_cors) {
        return Ok(resp);
    }

    // 2. Check declared body size
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return Ok(resp);
    }

    // 3. Resolve and classify the target, once
    let resolved = match resolver::resolve(&state.root, &url_path) {
        Ok(resolved) => resolved,
        Err(err) => {
            // Escaping path: nothing on disk is touched, every method gets 404
            log_rejected(&state, &url_path, &method, &err);
            return Ok(http::build_not_found_response());
        }
    };

    let cause = resolved.cause;
    let ctx = RequestContext {
        path: resolved.path,
        classification: resolved.classification,
        method: &method,
        is_head,
        op_log: state.config.logging.operation_log,
        log_format: &state.config.logging.format,
    };

    // 4. Dispatch on (method, classification)
    let response = match (&method, ctx.classification) {
        (&Method::GET | &Method::HEAD, Classification::File) => fs_ops::serve_file(&ctx).await,
        (&Method::GET | &Method::HEAD, Classification::Directory) => {
            fs_ops::serve_listing(&ctx).await
        }
        (&Method::GET | &Method::HEAD, Classification::Absent) => {
            fs_ops::absent_target(&ctx, cause)
        }
        (&Method::POST, Classification::File | Classification::Directory) => {
            fs_ops::create_conflict(&ctx)
        }
        (&Method::POST, Classification::Absent) => {
            match req.into_body().collect().await {
                Ok(collected) => fs_ops::create_entry(&ctx, &collected.to_bytes()).await,
                Err(err) => {
                    ctx.log(None, 400, Some(err.to_string()));
                    http::build_bad_request_response()
                }
            }
        }
        (&Method::PUT | &Method::DELETE, _) => fs_ops::unimplemented(&ctx),
        // check_http_method already rejected everything else
        _ => http::build_method_not_allowed_response(),
    };

    Ok(response)
}

/// Check HTTP method and answer OPTIONS/unknown methods without dispatching
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD | &Method::POST | &Method::PUT | &Method::DELETE => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_method_not_allowed_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_payload_too_large_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Log a path rejected by the resolver before any dispatch happened
fn log_rejected(state: &AppState, url_path: &str, method: &Method, err: &std::io::Error) {
    if !state.config.logging.operation_log {
        return;
    }
    let mut entry = OperationLogEntry::new(url_path.to_string(), method.to_string(), 404);
    entry.error = Some(err.to_string());
    logger::log_operation(&entry, &state.config.logging.format);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_http_method_filters() {
        assert!(check_http_method(&Method::GET, false).is_none());
        assert!(check_http_method(&Method::HEAD, false).is_none());
        assert!(check_http_method(&Method::POST, false).is_none());
        assert!(check_http_method(&Method::PUT, false).is_none());
        assert!(check_http_method(&Method::DELETE, false).is_none());

        let resp = check_http_method(&Method::OPTIONS, false).unwrap();
        assert_eq!(resp.status(), 204);

        let resp = check_http_method(&Method::PATCH, false).unwrap();
        assert_eq!(resp.status(), 405);
    }
}
