//! Taskboard: a minimal task-list web application.
//!
//! This crate provides a small CRUD surface over a single domain entity,
//! the task: list tasks, show a task, create a task from a form, and mark
//! a task finished.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, database)
//!
//! # Modules
//!
//! - [`task`]: Task domain model, persistence port and adapters, lifecycle
//!   service
//! - [`web`]: Route table, handlers, HTML views, and server configuration

pub mod task;
pub mod web;
