//! `tiny_http` server adapter
//!
//! Handles routing, body parsing, and response conversion for `tiny_http`.
//! Requests are served one at a time, so board mutations never overlap.

use std::io::Cursor;
use std::io::Read as _;

use log::{debug, info, warn};
use percent_encoding::percent_decode_str;
use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

use crate::api::{
    self, ApiError, ApiResponse, BoardSession, ColumnRequest, CreateTaskRequest, DragStartRequest,
    UpdateTaskRequest,
};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// A routed reply before it becomes an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Content type
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl Reply {
    fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }

    fn json<T: Serialize>(data: &T, status: u16) -> Self {
        let body =
            serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn into_response(self) -> Response<Cursor<Vec<u8>>> {
        let mut response =
            Response::from_data(self.body.into_bytes()).with_status_code(StatusCode(self.status));
        if let Ok(header) = Header::from_bytes("Content-Type", self.content_type) {
            response.add_header(header);
        }
        response
    }
}

// =============================================================================
// SERVER LOOP
// =============================================================================

/// Serve the board UI on `port` until the process is stopped
pub fn serve(mut session: BoardSession, port: u16) -> anyhow::Result<()> {
    let addr = format!("127.0.0.1:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    info!("Board UI listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let body = match read_body(&mut request) {
            Ok(body) => body,
            Err(e) => {
                let _ = request.respond(error_reply(&e).into_response());
                continue;
            },
        };
        let reply = route(&mut session, request.method(), request.url(), &body);
        debug!("{} {} -> {}", request.method(), request.url(), reply.status);
        if let Err(e) = request.respond(reply.into_response()) {
            warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

fn read_body(request: &mut Request) -> Result<String, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route one request
///
/// API paths are accepted under both `/api/v1` and `/api`.
pub fn route(session: &mut BoardSession, method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or(url);

    if *method == Method::Get && (path == "/" || path == "/index.html") {
        return Reply::html(INDEX_HTML);
    }

    let Some(api_path) = path.strip_prefix("/api/v1").or_else(|| path.strip_prefix("/api"))
    else {
        return not_found(method, path);
    };

    match (method, api_path) {
        (&Method::Get, "/board") => success(&api::get_board(session)),
        (&Method::Get, "/notifications") => success(&api::take_notifications(session)),

        (&Method::Post, "/tasks") => {
            with_body::<CreateTaskRequest, _, _>(body, |req| api::create_task(session, &req))
        },

        (&Method::Post, "/drag/start") => {
            with_body::<DragStartRequest, _, _>(body, |req| api::drag_start(session, &req))
        },
        (&Method::Post, "/drag/hover") => {
            with_body::<ColumnRequest, _, _>(body, |req| api::drag_hover(session, &req))
        },
        (&Method::Post, "/drag/drop") => {
            with_body::<ColumnRequest, _, _>(body, |req| api::drag_drop(session, &req))
        },
        (&Method::Post, "/drag/leave") => success(&api::drag_leave(session)),
        (&Method::Post, "/drag/cancel") => success(&api::drag_cancel(session)),

        // POST /tasks/{id}/move
        _ if *method == Method::Post && api_path.ends_with("/move") => {
            match task_id(api_path.strip_suffix("/move").unwrap_or_default()) {
                Some(id) => {
                    with_body::<ColumnRequest, _, _>(body, |req| api::move_task(session, &id, &req))
                },
                None => not_found(method, path),
            }
        },

        // PATCH /tasks/{id}
        _ if *method == Method::Patch => match task_id(api_path) {
            Some(id) => {
                with_body::<UpdateTaskRequest, _, _>(body, |req| api::update_task(session, &id, &req))
            },
            None => not_found(method, path),
        },

        // DELETE /tasks/{id}
        _ if *method == Method::Delete => match task_id(api_path) {
            Some(id) => handle_result(api::delete_task(session, &id)),
            None => not_found(method, path),
        },

        _ => not_found(method, path),
    }
}

/// `/tasks/{id}` -> decoded `{id}`, rejecting nested paths
///
/// The segment is split before decoding, so an id may contain `%2F`.
fn task_id(api_path: &str) -> Option<String> {
    let raw = api_path
        .strip_prefix("/tasks/")
        .filter(|id| !id.is_empty() && !id.contains('/'))?;
    match percent_decode_str(raw).decode_utf8() {
        Ok(id) => Some(id.into_owned()),
        Err(e) => {
            debug!("Rejected task id '{raw}': {e}");
            None
        },
    }
}

fn with_body<T, R, F>(body: &str, handler: F) -> Reply
where
    T: DeserializeOwned,
    R: Serialize,
    F: FnOnce(T) -> Result<R, ApiError>,
{
    match serde_json::from_str::<T>(body) {
        Ok(req) => handle_result(handler(req)),
        Err(e) => error_reply(&ApiError::bad_request(format!("Invalid JSON: {e}"))),
    }
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Reply {
    match result {
        Ok(data) => success(&data),
        Err(e) => error_reply(&e),
    }
}

fn success<T: Serialize>(data: &T) -> Reply {
    Reply::json(&ApiResponse::success(data), 200)
}

fn error_reply(error: &ApiError) -> Reply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    Reply::json(&response, error.status_code())
}

fn not_found(method: &Method, path: &str) -> Reply {
    error_reply(&ApiError::not_found(format!("API endpoint not found: {method} {path}")))
}
