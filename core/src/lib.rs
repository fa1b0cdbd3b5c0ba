//! Client core for a todo list kept in a remote JSON store.
//!
//! # Overview
//! One state container holds the current todos and notifies a single
//! subscriber, the renderer, whenever it is reassigned. The controller turns
//! user events into store calls and feeds the results back into that state.
//!
//! # Design
//! - Host-does-IO: `TodoClient` only builds `HttpRequest` values and parses
//!   `HttpResponse` values; a [`Transport`] supplied by the host runs them.
//! - Failures are explicit `ApiError` results and are rendered into the
//!   page's `.status` region.
//! - The page is reached through the [`Document`] trait; [`Page`] is the
//!   in-memory implementation used by the terminal host and the tests.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod state;
pub mod types;
pub mod view;

pub use client::{TodoApi, TodoClient};
pub use controller::{Controller, Event};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use state::State;
pub use types::{NewTodo, Todo, TodoId};
pub use view::{Document, Page, Region};
