//! Rendering of the todo list into fixed document regions.
//!
//! The page is addressed by a fixed selector contract (`.todo-list`,
//! `.completed-todo-list`, `.input`, `.status`). Every render replaces the
//! inner HTML of both list regions wholesale; there is no diffing.

use std::fmt;

use crate::error::ApiError;
use crate::types::Todo;

pub const EMPTY_PLACEHOLDER: &str = "<h4>no task to display!</h4>";

/// Class of the per-item delete button.
pub const DELETE_BTN: &str = "delete-btn";
/// Class of the per-item toggle button.
pub const COMPLETE_BTN: &str = "complete-btn";
/// Class of the form's submit button.
pub const SUBMIT_BTN: &str = "submit-btn";

/// Regions of the page whose content the view rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TodoList,
    CompletedTodoList,
    Status,
}

impl Region {
    pub fn selector(self) -> &'static str {
        match self {
            Region::TodoList => ".todo-list",
            Region::CompletedTodoList => ".completed-todo-list",
            Region::Status => ".status",
        }
    }
}

/// The surface the view draws on and the controller reads input from.
pub trait Document {
    fn set_inner_html(&mut self, region: Region, html: String);
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
}

/// Both list fragments produced by one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub active: String,
    pub completed: String,
}

/// Partition `todos` by `completed` into two HTML fragments, keeping order.
pub fn render(todos: &[Todo]) -> Rendered {
    let mut rendered = Rendered::default();
    for todo in todos {
        let item = render_item(todo);
        if todo.completed {
            rendered.completed.push_str(&item);
        } else {
            rendered.active.push_str(&item);
        }
    }
    if todos.is_empty() {
        rendered.active = EMPTY_PLACEHOLDER.to_string();
    }
    rendered
}

/// Write a fresh render into `document` and clear any failure message.
pub fn render_into<D: Document + ?Sized>(document: &mut D, todos: &[Todo]) {
    let Rendered { active, completed } = render(todos);
    document.set_inner_html(Region::TodoList, active);
    document.set_inner_html(Region::CompletedTodoList, completed);
    document.set_inner_html(Region::Status, String::new());
}

/// Visible failure state for the `.status` region.
pub fn render_error(err: &ApiError) -> String {
    format!(
        r#"<p class="error">{}</p>"#,
        escape_html(&failure_message(err))
    )
}

fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "could not reach the todo server".to_string(),
        ApiError::NotFound => "that todo no longer exists".to_string(),
        ApiError::Server { status, .. } => format!("the todo server failed ({status})"),
        ApiError::Deserialization(_) | ApiError::Serialization(_) => {
            "unexpected data from the todo server".to_string()
        }
    }
}

fn render_item(todo: &Todo) -> String {
    let toggle_label = if todo.completed { "undo" } else { "done" };
    format!(
        r#"<li><span>{content}</span><button class="{COMPLETE_BTN}" id="{id}">{toggle_label}</button><button class="{DELETE_BTN}" id="{id}">delete</button></li>"#,
        content = escape_html(&todo.content),
        id = todo.id,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// In-memory document: one string per region plus the input box value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub todo_list: String,
    pub completed_todo_list: String,
    pub status: String,
    pub input: String,
}

impl Page {
    pub fn region(&self, region: Region) -> &str {
        match region {
            Region::TodoList => &self.todo_list,
            Region::CompletedTodoList => &self.completed_todo_list,
            Region::Status => &self.status,
        }
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }
}

impl Document for Page {
    fn set_inner_html(&mut self, region: Region, html: String) {
        match region {
            Region::TodoList => self.todo_list = html,
            Region::CompletedTodoList => self.completed_todo_list = html,
            Region::Status => self.status = html,
        }
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for region in [Region::TodoList, Region::CompletedTodoList, Region::Status] {
            let html = self.region(region);
            if region == Region::Status && html.is_empty() {
                continue;
            }
            writeln!(f, "{}", region.selector())?;
            writeln!(f, "  {html}")?;
        }
        Ok(())
    }
}
