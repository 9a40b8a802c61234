//! Taskboard: a minimal task-management web application.
//!
//! Users create, list, complete, and delete tasks through HTML forms
//! backed by a relational table. The crate follows hexagonal architecture
//! principles:
//!
//! - **Domain**: validated task records with no infrastructure dependencies
//! - **Ports**: abstract trait interfaces for persistence
//! - **Adapters**: concrete implementations of ports (`PostgreSQL`,
//!   in-memory)
//!
//! # Modules
//!
//! - [`config`]: environment-driven application settings
//! - [`task`]: task domain, persistence, and services
//! - [`web`]: HTTP surface — handlers, forms, flash messages, templates

pub mod config;
pub mod task;
pub mod web;
