//! Record-replay integration tests driving the controller.
//!
//! 1. Build a cassette for the "create a task on an empty board" scenario.
//! 2. Replay it through `ServiceContext::replaying()` and a controller.
//! 3. Re-record the replayed session and replay that, asserting identical state.

use std::path::Path;

use serde_json::{json, Value};

use taskboard::adapters::recording::RecordingTaskApi;
use taskboard::cassette::recorder::CassetteRecorder;
use taskboard::cassette::session::{RecordingSession, TASK_API_CASSETTE};
use taskboard::context::ServiceContext;
use taskboard::controller::{TaskListController, DELETE_FAILED};
use taskboard::model::TaskStatus;

fn buy_milk() -> Value {
    json!({
        "id": "1",
        "task_detail": "buy milk",
        "task_status": "pending",
        "created_at": "2025-03-15T14:30:00Z",
        "updated_at": "2025-03-15T14:30:00Z"
    })
}

fn empty_list() -> Value {
    json!({"Ok": {"count": 0, "next": null, "previous": null, "data": []}})
}

fn zero_stats() -> Value {
    json!({"Ok": {"total": 0, "by_status": {"pending": 0, "in_progress": 0, "completed": 0}}})
}

/// Cassette for: load an empty board, create "buy milk", refetch.
fn write_create_scenario(path: &Path) {
    let mut recorder = CassetteRecorder::new(path, "create-scenario", "http://localhost:8000/api");
    recorder.record("task_api", "list_tasks", json!({}), empty_list());
    recorder.record("task_api", "get_stats", json!({}), zero_stats());
    recorder.record(
        "task_api",
        "create_task",
        json!({"task_detail": "buy milk"}),
        json!({"Ok": buy_milk()}),
    );
    recorder.record(
        "task_api",
        "list_tasks",
        json!({}),
        json!({"Ok": {"count": 1, "next": null, "previous": null, "data": [buy_milk()]}}),
    );
    recorder.record(
        "task_api",
        "get_stats",
        json!({}),
        json!({"Ok": {"total": 1, "by_status": {"pending": 1, "in_progress": 0, "completed": 0}}}),
    );
    recorder.finish().expect("recording should succeed");
}

/// Runs the scenario and returns (task count, detail of first task, stats total).
async fn run_create_scenario(mut controller: TaskListController) -> (usize, String, u64) {
    assert!(controller.refresh().await, "initial refresh: {:?}", controller.last_error());
    assert!(controller.tasks().is_empty());
    assert_eq!(controller.stats().total, 0);

    assert!(controller.create("buy milk").await, "create: {:?}", controller.last_error());
    assert_eq!(controller.tasks()[0].task_status, TaskStatus::Pending);
    (controller.tasks().len(), controller.tasks()[0].task_detail.clone(), controller.stats().total)
}

#[tokio::test]
async fn create_on_empty_board_replays_to_one_task() {
    let dir = std::env::temp_dir().join("taskboard_replay_create_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette_path = dir.join("create.cassette.yaml");
    write_create_scenario(&cassette_path);

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let (len, detail, total) = run_create_scenario(ctx.controller()).await;
    assert_eq!(len, 1);
    assert_eq!(detail, "buy milk");
    assert_eq!(total, 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn re_recorded_session_replays_identically() {
    let dir = std::env::temp_dir().join("taskboard_rerecord_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let source = dir.join("source.cassette.yaml");
    write_create_scenario(&source);

    // --- Phase 1: record a session whose "server" is the source cassette ---
    let session_dir = dir.join("session");
    let session = RecordingSession::at(&session_dir, "http://localhost:8000/api").unwrap();
    let first = {
        let inner = ServiceContext::replaying(&source).unwrap().api;
        let recording = RecordingTaskApi::new(inner, session.recorder());
        let ctx = ServiceContext { api: std::sync::Arc::new(recording) };
        run_create_scenario(ctx.controller()).await
    };
    let out = session.finish().unwrap();
    let recorded = out.join(TASK_API_CASSETTE);
    assert!(recorded.exists());

    // --- Phase 2: replay the recording twice — determinism check ---
    for _ in 0..2 {
        let ctx = ServiceContext::replaying(&recorded).unwrap();
        assert_eq!(run_create_scenario(ctx.controller()).await, first);
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn rejected_delete_leaves_tasks_untouched() {
    let dir = std::env::temp_dir().join("taskboard_replay_delete_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("delete.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "delete-rejected", "http://localhost:8000/api");
    recorder.record(
        "task_api",
        "list_tasks",
        json!({}),
        json!({"Ok": {"count": 1, "next": null, "previous": null, "data": [buy_milk()]}}),
    );
    recorder.record("task_api", "get_stats", json!({}), json!({"Ok": {"total": 1, "by_status": {"pending": 1}}}));
    recorder.record(
        "task_api",
        "delete_task",
        json!({"id": "1"}),
        json!({"Err": {"resource": "task-delete", "id": "1", "reason": "HTTP 500"}}),
    );
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&path).unwrap();
    let mut controller = ctx.controller();
    assert!(controller.refresh().await);
    let before = controller.tasks().to_vec();

    assert!(!controller.remove("1").await);
    assert_eq!(controller.last_error(), Some(DELETE_FAILED));
    assert_eq!(controller.tasks(), before.as_slice());

    let _ = std::fs::remove_dir_all(&dir);
}
