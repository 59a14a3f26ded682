//! Record codec for the delimited line format
//!
//! Pure encode/decode functions, one pair per record type. Decoding returns
//! a result per line so a malformed record never aborts processing of the
//! rest of a file. Fields are positional and unescaped: a field that itself
//! contains the delimiter corrupts the line on reload. The original file
//! format has this flaw and the codec preserves it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::credentials::Credential;
use crate::tasks::TaskRecord;

/// Field separator used by both backing files
pub const FIELD_DELIMITER: &str = ", ";

/// Textual date format for assigned/due dates, e.g. `10 Sep 2025`
pub const DATE_FORMAT: &str = "%d %b %Y";

/// Literal stored for a completed task
pub const COMPLETED_YES: &str = "Yes";

/// Literal stored for an open task
pub const COMPLETED_NO: &str = "No";

const TASK_FIELD_COUNT: usize = 6;

/// Errors from the record stores and the line codec
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("completed flag must be \"Yes\" or \"No\", found {found:?}")]
    CompletedFlag { found: String },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Decode one credential line into a (username, password) pair.
///
/// Splits on the first delimiter, so a password may itself contain `", "`.
pub fn decode_credential(line: &str) -> Result<Credential, StoreError> {
    let (username, password) = line.split_once(FIELD_DELIMITER).ok_or(StoreError::FieldCount {
        expected: 2,
        found: 1,
    })?;

    Ok(Credential {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Encode a credential as one line
pub fn encode_credential(credential: &Credential) -> String {
    format!("{}{}{}", credential.username, FIELD_DELIMITER, credential.password)
}

/// Decode one task line into its six positional fields.
///
/// The date fields are kept as stored text; only the field count and the
/// completed flag are validated here. Date validity is a display-time
/// concern, not a load-time one.
pub fn decode_task(line: &str) -> Result<TaskRecord, StoreError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != TASK_FIELD_COUNT {
        return Err(StoreError::FieldCount {
            expected: TASK_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let completed = match fields[5] {
        COMPLETED_YES => true,
        COMPLETED_NO => false,
        other => {
            return Err(StoreError::CompletedFlag {
                found: other.to_string(),
            });
        }
    };

    Ok(TaskRecord {
        assignee: fields[0].to_string(),
        title: fields[1].to_string(),
        description: fields[2].to_string(),
        assigned_date: fields[3].to_string(),
        due_date: fields[4].to_string(),
        completed,
    })
}

/// Encode a task record as one line
pub fn encode_task(task: &TaskRecord) -> String {
    let completed = if task.completed { COMPLETED_YES } else { COMPLETED_NO };
    [
        task.assignee.as_str(),
        task.title.as_str(),
        task.description.as_str(),
        task.assigned_date.as_str(),
        task.due_date.as_str(),
        completed,
    ]
    .join(FIELD_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_round_trip() {
        let credential = Credential {
            username: "bob".to_string(),
            password: "pw1".to_string(),
        };
        let line = encode_credential(&credential);
        assert_eq!(line, "bob, pw1");
        assert_eq!(decode_credential(&line).unwrap(), credential);
    }

    #[test]
    fn credential_without_delimiter_is_malformed() {
        let err = decode_credential("justonefield").unwrap_err();
        assert!(matches!(err, StoreError::FieldCount { expected: 2, found: 1 }));
    }

    #[test]
    fn task_round_trip_preserves_every_field() {
        let line = "bob, Report, Write it, 10 Sep 2025, 15 Dec 2030, No";
        let task = decode_task(line).unwrap();

        assert_eq!(task.assignee, "bob");
        assert_eq!(task.title, "Report");
        assert_eq!(task.description, "Write it");
        assert_eq!(task.assigned_date, "10 Sep 2025");
        assert_eq!(task.due_date, "15 Dec 2030");
        assert!(!task.completed);

        assert_eq!(encode_task(&task), line);
    }

    #[test]
    fn completed_flag_round_trips_as_yes() {
        let line = "bob, Report, Write it, 10 Sep 2025, 15 Dec 2030, Yes";
        let task = decode_task(line).unwrap();
        assert!(task.completed);
        assert_eq!(encode_task(&task), line);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = decode_task("bob, Report, 10 Sep 2025, No").unwrap_err();
        assert!(matches!(err, StoreError::FieldCount { expected: 6, found: 4 }));
    }

    #[test]
    fn unknown_completed_flag_is_malformed() {
        let err = decode_task("bob, Report, Write it, 10 Sep 2025, 15 Dec 2030, Maybe").unwrap_err();
        assert!(matches!(err, StoreError::CompletedFlag { found } if found == "Maybe"));
    }

    #[test]
    fn unparsable_date_still_decodes() {
        let task = decode_task("bob, Report, Write it, 10 Sep 2025, someday, No").unwrap();
        assert_eq!(task.due_date, "someday");
    }
}
