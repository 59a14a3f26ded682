//! RecordStore - line-oriented credential and task record stores
//!
//! The durable layer of the task manager: two append-only UTF-8 text files,
//! one record per line, fields joined by `", "` in fixed positional order.
//! There is no header and no schema versioning; the codec is the schema.
//!
//! # File formats
//!
//! ```text
//! user.txt     <username>, <password>
//! tasks.txt    <assignee>, <title>, <description>, <assigned>, <due>, <Yes|No>
//! ```
//!
//! # Example
//!
//! ```ignore
//! use recordstore::{CredentialStore, TaskStore};
//!
//! let creds = CredentialStore::open("user.txt")?;
//! assert!(creds.verify("admin", "adm1n"));
//!
//! let tasks = TaskStore::open("tasks.txt")?;
//! for decoded in tasks.load()? {
//!     match decoded {
//!         Ok(record) => println!("{}", record.title),
//!         Err(e) => eprintln!("bad line: {}", e),
//!     }
//! }
//! ```

pub mod codec;
mod credentials;
mod tasks;

pub use codec::{COMPLETED_NO, COMPLETED_YES, DATE_FORMAT, FIELD_DELIMITER, StoreError};
pub use credentials::{Credential, CredentialStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USER};
pub use tasks::{TaskRecord, TaskStore};

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append one encoded record, preceded by a newline when the file already
/// holds content. Records never carry a trailing newline of their own.
pub(crate) fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;

    let size = file.metadata().map_err(|e| StoreError::io(path, e))?.len();
    if size > 0 {
        file.write_all(b"\n").map_err(|e| StoreError::io(path, e))?;
    }
    file.write_all(line.as_bytes()).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}
