//! Tests for the HTTP-agnostic API layer and the router

use taskboard::api::{
    self, ApiError, BoardSession, ColumnRequest, CreateTaskRequest, DragStartRequest, ErrorCode,
    UpdateTaskRequest,
};
use taskboard::adapters::{MemoryStorage, ToastQueue};
use taskboard::core::models::{Status, TaskId};
use taskboard::core::services::{BoardError, DragState};

use crate::common::{TestBoard, sample_tasks};

/// Shared handles to what the session's board writes to
struct Handles {
    storage: MemoryStorage,
    toasts: ToastQueue,
}

impl Handles {
    fn messages(&self) -> Vec<String> {
        self.toasts.drain().into_iter().map(|n| n.message).collect()
    }
}

fn session() -> (BoardSession, Handles) {
    let TestBoard {
        board,
        storage,
        toasts,
    } = TestBoard::with_tasks(sample_tasks());
    let session = BoardSession::new(board, toasts.clone());
    (session, Handles { storage, toasts })
}

fn column(status: &str) -> ColumnRequest {
    ColumnRequest {
        status: status.to_string(),
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_error_codes() {
    assert_eq!(ApiError::not_found("x").status_code(), 404);
    assert_eq!(ApiError::bad_request("x").status_code(), 400);
    assert_eq!(ApiError::internal("x").status_code(), 500);
    assert_eq!(ErrorCode::Internal.as_str(), "INTERNAL_ERROR");
}

#[test]
fn test_board_errors_map_to_http() {
    let err = ApiError::from(BoardError::NameRequired);
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert_eq!(err.message, "Task must always have a Name");
}

// =============================================================================
// HANDLERS
// =============================================================================

#[test]
fn test_get_board() {
    let (session, _) = session();
    let data = api::get_board(&session);

    assert_eq!(data.total, 4);
    assert_eq!(data.drag, DragState::Idle);
    assert_eq!(data.board.column(Status::Todo).unwrap().count, 2);
}

#[test]
fn test_create_task_defaults_to_todo() {
    let (mut session, handles) = session();
    let req = CreateTaskRequest {
        name: "Write docs".to_string(),
        description: None,
        status: None,
    };

    let data = api::create_task(&mut session, &req).unwrap();

    assert_eq!(data.task.id, TaskId::Number(5));
    assert_eq!(data.task.status, Status::Todo);
    assert_eq!(handles.storage.stored().len(), 5);
    assert_eq!(handles.messages(), ["Task Added"]);
}

#[test]
fn test_create_task_rejects_bad_input() {
    let (mut session, _) = session();

    let blank = CreateTaskRequest {
        name: "  ".to_string(),
        description: None,
        status: None,
    };
    assert_eq!(
        api::create_task(&mut session, &blank).unwrap_err().code,
        ErrorCode::BadRequest
    );

    let bad_status = CreateTaskRequest {
        name: "Ok".to_string(),
        description: None,
        status: Some("blocked".to_string()),
    };
    let err = api::create_task(&mut session, &bad_status).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.contains("Invalid status"));
}

#[test]
fn test_update_task_keeps_declined_fields() {
    let (mut session, _) = session();
    let req = UpdateTaskRequest {
        name: None,
        description: Some(String::new()),
    };

    let data = api::update_task(&mut session, "1", &req).unwrap();

    assert!(data.changed);
    assert_eq!(data.task.name, "Draft outline");
    assert_eq!(data.task.description, "");
}

#[test]
fn test_update_task_with_empty_name_is_rejected() {
    let (mut session, handles) = session();
    let req = UpdateTaskRequest {
        name: Some(String::new()),
        description: None,
    };

    let data = api::update_task(&mut session, "3", &req).unwrap();

    assert!(data.name_rejected);
    assert!(!data.changed);
    assert_eq!(handles.messages(), ["Task must always have a Name"]);
}

#[test]
fn test_missing_task_is_not_found() {
    let (mut session, _) = session();

    let err = api::delete_task(&mut session, "99").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    let err = api::move_task(&mut session, "99", &column("archived")).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    let err = api::update_task(&mut session, "99", &UpdateTaskRequest::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[test]
fn test_move_and_delete() {
    let (mut session, handles) = session();

    let moved = api::move_task(&mut session, "1", &column("in-progress")).unwrap();
    assert_eq!((moved.from, moved.to), (Status::Todo, Status::InProgress));

    let removed = api::delete_task(&mut session, "2").unwrap();
    assert_eq!(removed.task.name, "Build parser");

    assert_eq!(handles.messages(), ["Task Moved", "Task Removed"]);
    assert_eq!(session.board.tasks().len(), 3);
}

#[test]
fn test_drag_flow() {
    let (mut session, handles) = session();

    let data = api::drag_start(&mut session, &DragStartRequest { id: TaskId::Number(3) }).unwrap();
    assert!(data.board.column(Status::Todo).unwrap().tasks[1].in_flight);

    let data = api::drag_hover(&mut session, &column("archived")).unwrap();
    assert!(data.board.column(Status::Archived).unwrap().armed);

    let data = api::drag_leave(&mut session);
    assert!(!data.board.column(Status::Archived).unwrap().armed);

    let dropped = api::drag_drop(&mut session, &column("archived")).unwrap();
    assert!(dropped.moved);
    assert_eq!(dropped.board.drag, DragState::Idle);
    assert_eq!(dropped.board.board.column(Status::Archived).unwrap().count, 2);

    let toasts = api::take_notifications(&session);
    assert_eq!(toasts.notifications.len(), 1);
    assert!(handles.toasts.is_empty());
}

#[test]
fn test_drop_of_vanished_task_is_silent() {
    let (mut session, handles) = session();
    api::drag_start(&mut session, &DragStartRequest { id: TaskId::Number(42) }).unwrap();

    let dropped = api::drag_drop(&mut session, &column("todo")).unwrap();

    assert!(!dropped.moved);
    assert_eq!(handles.storage.save_count(), 0);
    assert!(handles.messages().is_empty());
}

#[test]
fn test_drag_cancel_returns_to_idle() {
    let (mut session, _) = session();
    api::drag_start(&mut session, &DragStartRequest { id: TaskId::Number(1) }).unwrap();

    let data = api::drag_cancel(&mut session);

    assert_eq!(data.drag, DragState::Idle);
    assert_eq!(session.board.tasks(), sample_tasks());
}

#[test]
fn test_storage_failure_is_internal_error() {
    let (mut session, handles) = session();
    handles.storage.set_fail_saves(true);

    let err = api::move_task(&mut session, "1", &column("archived")).unwrap_err();

    assert_eq!(err.code, ErrorCode::Internal);
    assert_eq!(session.board.tasks(), sample_tasks());
    assert_eq!(handles.messages(), ["Could not save tasks"]);
}

// =============================================================================
// ROUTER
// =============================================================================

#[cfg(feature = "ui")]
mod routing {
    use taskboard::api::BoardSession;
    use taskboard::core::models::Task;
    use taskboard::server::tiny_http::route;
    use tiny_http::Method;

    use super::session;
    use crate::common::TestBoard;

    fn json(body: &str) -> serde_json::Value {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_index_page() {
        let (mut session, _) = session();
        let reply = route(&mut session, &Method::Get, "/", "");
        assert_eq!(reply.status, 200);
        assert!(reply.content_type.starts_with("text/html"));
    }

    #[test]
    fn test_board_under_both_prefixes() {
        let (mut session, _) = session();
        for url in ["/api/board", "/api/v1/board?fresh=1"] {
            let reply = route(&mut session, &Method::Get, url, "");
            assert_eq!(reply.status, 200);
            let body = json(&reply.body);
            assert_eq!(body["success"], true);
            assert_eq!(body["data"]["total"], 4);
            assert_eq!(body["data"]["drag"]["state"], "idle");
        }
    }

    #[test]
    fn test_create_edit_move_delete() {
        let (mut session, handles) = session();

        let reply = route(
            &mut session,
            &Method::Post,
            "/api/tasks",
            r#"{"name":"New","status":"in-progress"}"#,
        );
        assert_eq!(reply.status, 200);
        assert_eq!(json(&reply.body)["data"]["task"]["id"], 5);

        let reply = route(&mut session, &Method::Patch, "/api/tasks/5", r#"{"name":"Renamed"}"#);
        assert_eq!(json(&reply.body)["data"]["task"]["name"], "Renamed");

        let reply = route(
            &mut session,
            &Method::Post,
            "/api/tasks/5/move",
            r#"{"status":"archived"}"#,
        );
        assert_eq!(json(&reply.body)["data"]["to"], "archived");

        let reply = route(&mut session, &Method::Delete, "/api/tasks/5", "");
        assert_eq!(reply.status, 200);

        assert_eq!(handles.storage.stored().len(), 4);
    }

    #[test]
    fn test_errors_use_envelope() {
        let (mut session, _) = session();

        let reply = route(&mut session, &Method::Delete, "/api/tasks/99", "");
        assert_eq!(reply.status, 404);
        let body = json(&reply.body);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let reply = route(&mut session, &Method::Post, "/api/tasks", "{not json");
        assert_eq!(reply.status, 400);

        let reply = route(&mut session, &Method::Get, "/api/nowhere", "");
        assert_eq!(reply.status, 404);

        let reply = route(&mut session, &Method::Delete, "/api/tasks/1/extra", "");
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn test_drag_endpoints() {
        let (mut session, _) = session();

        route(&mut session, &Method::Post, "/api/drag/start", r#"{"id":2}"#);
        let reply = route(&mut session, &Method::Post, "/api/drag/hover", r#"{"status":"todo"}"#);
        assert_eq!(json(&reply.body)["data"]["drag"]["over"], "todo");

        let reply = route(&mut session, &Method::Post, "/api/drag/drop", r#"{"status":"todo"}"#);
        let body = json(&reply.body);
        assert_eq!(body["data"]["moved"], true);
        assert_eq!(body["data"]["board"]["board"]["columns"][0]["count"], 3);

        let reply = route(&mut session, &Method::Get, "/api/notifications", "");
        let body = json(&reply.body);
        assert_eq!(body["data"]["notifications"][0]["message"], "Task Moved");
    }

    #[test]
    fn test_encoded_task_ids_are_decoded() {
        let TestBoard { board, toasts, .. } = TestBoard::with_tasks(vec![
            Task::new("my task", "A"),
            Task::new("a/b", "B"),
            Task::new("état", "C"),
        ]);
        let mut session = BoardSession::new(board, toasts);

        let reply = route(
            &mut session,
            &Method::Patch,
            "/api/v1/tasks/my%20task",
            r#"{"name":"Renamed"}"#,
        );
        assert_eq!(reply.status, 200);
        assert_eq!(json(&reply.body)["data"]["task"]["name"], "Renamed");

        let reply = route(
            &mut session,
            &Method::Post,
            "/api/tasks/%C3%A9tat/move",
            r#"{"status":"archived"}"#,
        );
        assert_eq!(reply.status, 200);

        let reply = route(&mut session, &Method::Delete, "/api/tasks/a%2Fb", "");
        assert_eq!(reply.status, 200);
        assert_eq!(json(&reply.body)["data"]["task"]["name"], "B");

        let reply = route(&mut session, &Method::Delete, "/api/v1/tasks/my%20task", "");
        assert_eq!(reply.status, 200);
        assert_eq!(session.board.tasks().len(), 1);
    }
}
