//! Task manager - interactive task assignment with a login gate
//!
//! A single-user terminal program: authenticate against the credential
//! store, then drive a role-appropriate menu of task operations. All
//! durable state lives in two line-oriented text files owned by the
//! `recordstore` crate; this crate adds identity, business rules, and the
//! read-eval loop on top.
//!
//! # Modules
//!
//! - [`auth`] - login and session identity
//! - [`service`] - task operations and derived due-date status
//! - [`menu`] - interactive menu controller
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod auth;
pub mod cli;
pub mod config;
pub mod menu;
pub mod service;

// Re-export commonly used types
pub use auth::{AuthError, Role, Session};
pub use config::Config;
pub use menu::MenuSession;
pub use service::{DueStatus, ListedTask, Stats, TaskError, TaskService};
