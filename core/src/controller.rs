//! Event wiring between the document, the todo store and the state.
//!
//! Every handler follows the same loop: read the document or the state, make
//! one API call, derive the next todo sequence from the result and assign it
//! to the state container, whose subscriber re-renders the document. On
//! failure the state is left alone and the error is shown in `.status`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::client::TodoApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::state::State;
use crate::types::{NewTodo, Todo, TodoId};
use crate::view::{self, Document, Region, COMPLETE_BTN, DELETE_BTN, SUBMIT_BTN};

/// A user interaction the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Submit,
    Delete(TodoId),
    Toggle(TodoId),
    Refresh,
}

impl Event {
    /// Resolve a delegated click from the target's class and id attributes.
    /// Clicks on anything else yield `None`.
    pub fn from_click(class_name: &str, element_id: &str) -> Option<Self> {
        match class_name {
            SUBMIT_BTN => Some(Event::Submit),
            DELETE_BTN => element_id.trim().parse().ok().map(Event::Delete),
            COMPLETE_BTN => element_id.trim().parse().ok().map(Event::Toggle),
            _ => None,
        }
    }
}

pub struct Controller<T, D> {
    api: TodoApi<T>,
    state: State<Vec<Todo>>,
    document: Rc<RefCell<D>>,
}

impl<T, D> Controller<T, D>
where
    T: Transport,
    D: Document + 'static,
{
    pub fn new(api: TodoApi<T>, document: D) -> Self {
        Self {
            api,
            state: State::default(),
            document: Rc::new(RefCell::new(document)),
        }
    }

    pub fn document(&self) -> Rc<RefCell<D>> {
        Rc::clone(&self.document)
    }

    pub fn todos(&self) -> Rc<Vec<Todo>> {
        self.state.get()
    }

    /// Subscribe the renderer to the state, then load the list.
    pub fn bootstrap(&mut self) -> Result<(), ApiError> {
        let document = Rc::clone(&self.document);
        self.state.subscribe(move |todos: &Vec<Todo>| {
            view::render_into(&mut *document.borrow_mut(), todos);
        });
        self.refresh()
    }

    /// Re-fetch the whole list, newest first.
    pub fn refresh(&mut self) -> Result<(), ApiError> {
        let mut todos = self.api.list().map_err(|e| self.report(e))?;
        todos.reverse();
        tracing::debug!(count = todos.len(), "loaded todos");
        self.state.set(todos);
        Ok(())
    }

    /// Create a todo from the input box and put the server's copy on top.
    pub fn submit(&mut self) -> Result<Todo, ApiError> {
        let content = self.document.borrow().input_value();
        let created = self
            .api
            .create(&NewTodo::new(content))
            .map_err(|e| self.report(e))?;
        tracing::debug!(id = created.id, "created todo");

        let head = created.clone();
        self.state.update(|todos| {
            std::iter::once(head)
                .chain(todos.iter().cloned())
                .collect()
        });
        self.document.borrow_mut().clear_input();
        Ok(created)
    }

    /// Delete on the server, then drop exactly that id from the list.
    pub fn delete(&mut self, id: TodoId) -> Result<(), ApiError> {
        self.api.delete(id).map_err(|e| self.report(e))?;
        tracing::debug!(id, "deleted todo");
        self.state
            .update(|todos| todos.iter().filter(|t| t.id != id).cloned().collect());
        Ok(())
    }

    /// Flip `completed` on the server and swap in the server's copy, which
    /// moves the item to the opposite list on the next render.
    pub fn toggle(&mut self, id: TodoId) -> Result<Todo, ApiError> {
        let current = self.state.get();
        let Some(todo) = current.iter().find(|t| t.id == id) else {
            return Err(self.report(ApiError::NotFound));
        };
        let updated = self
            .api
            .update(id, &todo.toggled())
            .map_err(|e| self.report(e))?;
        tracing::debug!(id, completed = updated.completed, "toggled todo");

        let replacement = updated.clone();
        self.state.update(|todos| {
            todos
                .iter()
                .map(|t| if t.id == id { replacement.clone() } else { t.clone() })
                .collect()
        });
        Ok(updated)
    }

    pub fn dispatch(&mut self, event: Event) -> Result<(), ApiError> {
        match event {
            Event::Submit => self.submit().map(drop),
            Event::Delete(id) => self.delete(id),
            Event::Toggle(id) => self.toggle(id).map(drop),
            Event::Refresh => self.refresh(),
        }
    }

    fn report(&self, err: ApiError) -> ApiError {
        tracing::warn!(error = %err, "todo request failed");
        self.document
            .borrow_mut()
            .set_inner_html(Region::Status, view::render_error(&err));
        err
    }
}
