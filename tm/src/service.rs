//! Task operations over the record store
//!
//! The service layer enforces the business rules the stores deliberately
//! don't: an assignee must be registered, a due date must parse, and every
//! listing recomputes due-date status against the current day.

use std::fmt;

use chrono::{Local, NaiveDate};
use recordstore::{CredentialStore, DATE_FORMAT, StoreError, TaskRecord, TaskStore};
use thiserror::Error;
use tracing::info;

use crate::auth::Session;

/// Derived due-date state, recomputed on every listing and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due in N whole days; 0 means due today
    DueInDays(i64),
    /// Past due by N whole days
    OverdueByDays(i64),
    /// The stored due-date text does not parse
    InvalidDate,
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DueInDays(days) => write!(f, "{days} days remaining"),
            Self::OverdueByDays(days) => write!(f, "OVERDUE by {days} days"),
            Self::InvalidDate => write!(f, "Invalid date format"),
        }
    }
}

/// One entry of a task listing, in file order
#[derive(Debug)]
pub enum ListedTask {
    /// A well-formed record with its freshly computed status
    Task { record: TaskRecord, status: DueStatus },
    /// A stored line that failed to decode; `entry` is its 1-based position
    Malformed { entry: usize, error: StoreError },
}

/// Totals for the statistics screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub user_count: usize,
    pub task_count: usize,
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("no registered user named {0:?}")]
    UnknownUser(String),

    #[error("{0:?} is not a valid due date (expected a date like \"10 Sep 2025\")")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Business operations over the task record store
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Assign a task to a registered user.
    ///
    /// Any logged-in role may assign to any registered user. The assigned
    /// date is stamped with today; the record is written with
    /// `completed = false` and appended before returning.
    pub fn assign_task(
        &self,
        credentials: &CredentialStore,
        session: &Session,
        assignee: &str,
        title: &str,
        description: &str,
        due_date: &str,
    ) -> Result<TaskRecord, TaskError> {
        if !credentials.contains(assignee) {
            return Err(TaskError::UnknownUser(assignee.to_string()));
        }
        if NaiveDate::parse_from_str(due_date, DATE_FORMAT).is_err() {
            return Err(TaskError::InvalidDate(due_date.to_string()));
        }

        let record = TaskRecord {
            assignee: assignee.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            assigned_date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            due_date: due_date.to_string(),
            completed: false,
        };
        self.store.append(&record)?;

        info!(assignee, title, by = %session.username, "task assigned");
        Ok(record)
    }

    /// Every stored line in file order, statuses computed against today.
    ///
    /// Malformed lines surface as [`ListedTask::Malformed`] markers so the
    /// rest of the file still lists.
    pub fn list_all(&self) -> Result<Vec<ListedTask>, TaskError> {
        let today = Local::now().date_naive();
        let listed = self
            .store
            .load()?
            .into_iter()
            .enumerate()
            .map(|(index, decoded)| match decoded {
                Ok(record) => {
                    let status = due_status(&record.due_date, today);
                    ListedTask::Task { record, status }
                }
                Err(error) => ListedTask::Malformed {
                    entry: index + 1,
                    error,
                },
            })
            .collect();
        Ok(listed)
    }

    /// Tasks assigned to `username`, in file order.
    ///
    /// Malformed lines carry no attributable assignee and are omitted here;
    /// view-all is where they surface.
    pub fn list_for(&self, username: &str) -> Result<Vec<ListedTask>, TaskError> {
        let listed = self
            .list_all()?
            .into_iter()
            .filter(|item| matches!(item, ListedTask::Task { record, .. } if record.assignee == username))
            .collect();
        Ok(listed)
    }

    /// Totals for the statistics screen.
    ///
    /// Counts every loaded credential and every non-blank task line,
    /// malformed ones included. Role gating happens at the menu layer.
    pub fn statistics(&self, credentials: &CredentialStore) -> Result<Stats, TaskError> {
        Ok(Stats {
            user_count: credentials.len(),
            task_count: self.store.load()?.len(),
        })
    }
}

/// Whole-day distance from `today` to a stored due-date text
pub fn due_status(due_date: &str, today: NaiveDate) -> DueStatus {
    match NaiveDate::parse_from_str(due_date, DATE_FORMAT) {
        Ok(due) => {
            let days = (due - today).num_days();
            if days < 0 {
                DueStatus::OverdueByDays(-days)
            } else {
                DueStatus::DueInDays(days)
            }
        }
        Err(_) => DueStatus::InvalidDate,
    }
}
