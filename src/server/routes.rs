use super::auth::Owner;
use super::AppState;
use crate::db::history::HistoryRecord;
use crate::libs::clock::parse_day;
use crate::libs::error::StoreError;
use crate::libs::insights::{self, Report};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

pub async fn health() -> &'static str {
    "Backend is running"
}

pub async fn list_tasks(State(state): State<AppState>, Extension(Owner(owner)): Extension<Owner>) -> Result<Json<Vec<Task>>, StoreError> {
    let tasks = state.store.lock().list(&owner)?;
    Ok(Json(tasks))
}

#[derive(Debug, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub text: Option<String>,
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(Owner(owner)): Extension<Owner>,
    Json(body): Json<CreateTask>,
) -> Result<Json<Task>, StoreError> {
    let text = body.text.unwrap_or_default();
    let task = state.store.lock().create(&owner, &text)?;
    info!(owner, task_id = task.id, "task created");
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Extension(Owner(owner)): Extension<Owner>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, StoreError> {
    let task = state.store.lock().toggle(&owner, id)?;
    info!(owner, task_id = id, completed = task.completed, streak = task.streak, "task toggled");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(Owner(owner)): Extension<Owner>,
    Path(id): Path<TaskId>,
) -> Result<Json<Value>, StoreError> {
    state.store.lock().delete(&owner, id)?;
    info!(owner, task_id = id, "task deleted");
    Ok(Json(json!({ "msg": "Task removed" })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn history(
    State(state): State<AppState>,
    Extension(Owner(owner)): Extension<Owner>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRecord>>, StoreError> {
    let (Some(start), Some(end)) = (query.start_date, query.end_date) else {
        return Err(StoreError::Validation(Message::HistoryRangeRequired.to_string()));
    };
    let start_day = parse_day(&start).ok_or_else(|| StoreError::Validation(Message::InvalidDate(start.clone()).to_string()))?;
    let end_day = parse_day(&end).ok_or_else(|| StoreError::Validation(Message::InvalidDate(end.clone()).to_string()))?;

    let records = state.store.lock().history(&owner, start_day, end_day)?;
    Ok(Json(records))
}

pub async fn stats(State(state): State<AppState>, Extension(Owner(owner)): Extension<Owner>) -> Result<Json<Report>, StoreError> {
    let report = {
        let store = state.store.lock();
        let tasks = store.list(&owner)?;
        insights::report(&tasks, store.today())
    };
    Ok(Json(report))
}
