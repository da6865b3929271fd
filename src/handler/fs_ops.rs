//! Filesystem operation execution module
//!
//! Runs the UNIX-style operation the dispatcher selected and maps the
//! outcome onto an HTTP response plus one operation log line.

use crate::fs::ops;
use crate::handler::dispatcher::RequestContext;
use crate::http::{self, form};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};
use std::io;

/// `cat`: serve a regular file's bytes
pub async fn serve_file(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    match ops::cat(&ctx.path).await {
        Ok(data) => {
            ctx.log(Some("cat"), 200, None);
            http::build_file_response(data, ctx.is_head)
        }
        // the file can vanish between classification and read
        Err(err) => not_found(ctx, &err),
    }
}

/// `ls`: serve a directory listing, one name per line
pub async fn serve_listing(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    match ops::ls(&ctx.path).await {
        Ok(listing) => {
            ctx.log(Some("ls"), 200, None);
            http::build_listing_response(listing, ctx.is_head)
        }
        Err(err) => not_found(ctx, &err),
    }
}

/// GET/HEAD on a path that classified Absent
pub fn absent_target(
    ctx: &RequestContext<'_>,
    cause: Option<io::Error>,
) -> Response<Full<Bytes>> {
    let cause = cause.map_or_else(|| "no such file or directory".to_string(), |e| e.to_string());
    ctx.log(None, 404, Some(cause));
    http::build_not_found_response()
}

/// POST on an already-existing file or directory
pub fn create_conflict(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    ctx.log(None, 409, Some("file or directory exists".to_string()));
    http::build_conflict_response()
}

/// POST on an absent path: create what the form's `type` field asks for
pub async fn create_entry(ctx: &RequestContext<'_>, body: &[u8]) -> Response<Full<Bytes>> {
    let kind = form::form_value(body, "type").unwrap_or_default();
    match kind.as_str() {
        "" => {
            ctx.log(None, 400, Some("type missing".to_string()));
            http::build_bad_request_response()
        }
        "file" => touch_file(ctx).await,
        "dir" => {
            // mkdir is an extension point, answered with a stable 501
            ctx.log(Some("mkdir"), 501, Some("not implemented".to_string()));
            http::build_not_implemented_response()
        }
        _ => {
            ctx.log(None, 400, Some("wrong type".to_string()));
            http::build_bad_request_response()
        }
    }
}

/// PUT and DELETE are extension points, answered with a stable 501
pub fn unimplemented(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let operation = if ctx.method == Method::PUT {
        "put"
    } else {
        "delete"
    };
    ctx.log(Some(operation), 501, Some("not implemented".to_string()));
    http::build_not_implemented_response()
}

/// `touch`: create an empty file with the atomic create-if-absent primitive
async fn touch_file(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    match ops::touch(&ctx.path).await {
        Ok(()) => {
            ctx.log(Some("touch"), 201, None);
            http::build_created_response()
        }
        // AlreadyExists here means a concurrent create won the race
        Err(err) => {
            ctx.log(Some("touch"), 409, Some(err.to_string()));
            http::build_conflict_response()
        }
    }
}

fn not_found(ctx: &RequestContext<'_>, err: &io::Error) -> Response<Full<Bytes>> {
    ctx.log(None, 404, Some(err.to_string()));
    http::build_not_found_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::resolver::{self, Classification};
    use tempfile::{tempdir, TempDir};

    fn context<'a>(
        base: &TempDir,
        url_path: &str,
        method: &'a Method,
    ) -> RequestContext<'a> {
        let resolved = resolver::resolve(base.path(), url_path).unwrap();
        RequestContext {
            path: resolved.path,
            classification: resolved.classification,
            method,
            is_head: false,
            op_log: false,
            log_format: "kv",
        }
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        use http_body_util::BodyExt;
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_serve_file_returns_exact_bytes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();

        let ctx = context(&dir, "/notes.txt", &Method::GET);
        assert_eq!(ctx.classification, Classification::File);

        let resp = serve_file(&ctx).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(body_bytes(resp).await.as_ref(), b"hello\n");
    }

    #[tokio::test]
    async fn test_listing_names_direct_children() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();

        let ctx = context(&dir, "/", &Method::GET);
        let resp = serve_listing(&ctx).await;
        assert_eq!(resp.status(), 200);

        let body = body_bytes(resp).await;
        let mut names: Vec<&str> = std::str::from_utf8(&body).unwrap().lines().collect();
        names.sort_unstable();
        assert_eq!(names, ["drafts", "notes.txt"]);
    }

    #[tokio::test]
    async fn test_serve_file_vanished_is_not_found() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();

        let ctx = context(&dir, "/notes.txt", &Method::GET);
        // target removed between classification and read
        std::fs::remove_file(dir.path().join("notes.txt")).unwrap();

        let resp = serve_file(&ctx).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_serve_listing_empty_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();

        let ctx = context(&dir, "/drafts", &Method::GET);
        let resp = serve_listing(&ctx).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "0");
    }

    #[tokio::test]
    async fn test_get_absent_is_not_found() {
        let dir = tempdir().unwrap();

        let resolved = resolver::resolve(dir.path(), "/missing.txt").unwrap();
        let method = Method::GET;
        let ctx = RequestContext {
            path: resolved.path,
            classification: resolved.classification,
            method: &method,
            is_head: false,
            op_log: false,
            log_format: "kv",
        };

        let resp = absent_target(&ctx, resolved.cause);
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn test_create_file_then_conflict() {
        let dir = tempdir().unwrap();

        let ctx = context(&dir, "/new.txt", &Method::POST);
        assert_eq!(ctx.classification, Classification::Absent);

        let resp = create_entry(&ctx, b"type=file").await;
        assert_eq!(resp.status(), 201);

        let meta = std::fs::metadata(dir.path().join("new.txt")).unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.len(), 0);

        // same path again: the create-new primitive reports the conflict
        let resp = create_entry(&ctx, b"type=file").await;
        assert_eq!(resp.status(), 409);
    }

    #[tokio::test]
    async fn test_create_dir_is_unimplemented_and_creates_nothing() {
        let dir = tempdir().unwrap();

        let ctx = context(&dir, "/newdir", &Method::POST);
        let resp = create_entry(&ctx, b"type=dir").await;
        assert_eq!(resp.status(), 501);
        assert!(!dir.path().join("newdir").exists());
    }

    #[tokio::test]
    async fn test_create_with_bad_type_is_rejected() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "/new.txt", &Method::POST);

        let resp = create_entry(&ctx, b"type=socket").await;
        assert_eq!(resp.status(), 400);

        let resp = create_entry(&ctx, b"type=").await;
        assert_eq!(resp.status(), 400);

        let resp = create_entry(&ctx, b"name=new.txt").await;
        assert_eq!(resp.status(), 400);

        assert!(!dir.path().join("new.txt").exists());
    }

    #[tokio::test]
    async fn test_post_on_existing_target_conflicts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let ctx = context(&dir, "/notes.txt", &Method::POST);
        assert_eq!(ctx.classification, Classification::File);

        let resp = create_conflict(&ctx);
        assert_eq!(resp.status(), 409);
    }

    #[tokio::test]
    async fn test_put_and_delete_are_unimplemented() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let ctx = context(&dir, "/notes.txt", &Method::PUT);
        assert_eq!(unimplemented(&ctx).status(), 501);

        let ctx = context(&dir, "/notes.txt", &Method::DELETE);
        assert_eq!(unimplemented(&ctx).status(), 501);
        assert!(dir.path().join("notes.txt").exists());
    }
}
