//! In-memory stand-in for a json-server `/todos` collection.
//!
//! Ids come from a counter starting at 1 and the collection keeps insertion
//! order, so `GET /todos` lists todos oldest first the way json-server does.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub content: String,
    pub completed: bool,
}

/// Body accepted by both `POST /todos` and `PUT /todos/{id}`. An `id` in the
/// body is ignored; the path or the counter decides it.
#[derive(Deserialize)]
pub struct TodoInput {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct Collection {
    next_id: u64,
    todos: Vec<Todo>,
}

impl Collection {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        Self { next_id, todos }
    }

    fn insert(&mut self, input: TodoInput) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            content: input.content,
            completed: input.completed,
        };
        self.todos.push(todo.clone());
        todo
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }
}

pub type Db = Arc<RwLock<Collection>>;

pub fn app() -> Router {
    app_with_todos(Vec::new())
}

/// Router pre-seeded with `todos`, like starting json-server on a `db.json`.
pub fn app_with_todos(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Collection::with_todos(todos)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let db = db.read().await;
    Json(db.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoInput>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input);
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let db = db.read().await;
    db.todos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TodoInput>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let index = db.position(id).ok_or(StatusCode::NOT_FOUND)?;
    let todo = &mut db.todos[index];
    todo.content = input.content;
    todo.completed = input.completed;
    tracing::debug!(id, completed = todo.completed, "replaced todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, StatusCode> {
    let mut db = db.write().await;
    let index = db.position(id).ok_or(StatusCode::NOT_FOUND)?;
    let removed = db.todos.remove(index);
    tracing::debug!(id, "deleted todo");
    Ok(Json(removed))
}
