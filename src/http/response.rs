//! HTTP response building module
//!
//! Builders for every status the dispatcher can produce, decoupled from the
//! filesystem logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response carrying a file's bytes
pub fn build_file_response(data: Vec<u8>, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "application/octet-stream")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a newline-delimited directory listing
pub fn build_listing_response(listing: Vec<u8>, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = listing.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(listing)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 201 Created response (empty body)
pub fn build_created_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(201)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("201", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_not_found_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("not found\n")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("not found\n")))
        })
}

/// Build 409 Conflict response
pub fn build_conflict_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(409)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("conflict\n")))
        .unwrap_or_else(|e| {
            log_build_error("409", &e);
            Response::new(Full::new(Bytes::from("conflict\n")))
        })
}

/// Build 400 Bad Request response
pub fn build_bad_request_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("bad request\n")))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::from("bad request\n")))
        })
}

/// Build 501 Not Implemented response (empty body)
pub fn build_not_implemented_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(501)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("501", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_method_not_allowed_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, POST, PUT, DELETE, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, POST, PUT, DELETE, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header(
                "Access-Control-Allow-Methods",
                "GET, HEAD, POST, PUT, DELETE, OPTIONS",
            )
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_payload_too_large_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_not_found_response().status(), 404);
        assert_eq!(build_conflict_response().status(), 409);
        assert_eq!(build_bad_request_response().status(), 400);
        assert_eq!(build_not_implemented_response().status(), 501);
        assert_eq!(build_method_not_allowed_response().status(), 405);
        assert_eq!(build_payload_too_large_response().status(), 413);
    }

    #[test]
    fn test_head_suppresses_body_but_keeps_length() {
        let resp = build_file_response(b"hello\n".to_vec(), true);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "6");
    }

    #[test]
    fn test_options_with_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert!(resp.headers().contains_key("Access-Control-Allow-Origin"));

        let resp = build_options_response(false);
        assert!(!resp.headers().contains_key("Access-Control-Allow-Origin"));
    }
}
