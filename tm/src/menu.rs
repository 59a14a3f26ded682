//! Interactive menu controller
//!
//! Owns the read-eval loop: the login gate first, then the role-appropriate
//! menu until the user exits. The controller holds the session for the
//! process run and passes it explicitly to every service call; nothing is
//! global.

use colored::Colorize;
use eyre::Result;
use recordstore::{COMPLETED_NO, COMPLETED_YES, Credential, CredentialStore, TaskRecord};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::auth::{self, AuthError, Role, Session};
use crate::service::{DueStatus, ListedTask, TaskError, TaskService};

/// Interactive menu session
pub struct MenuSession {
    editor: DefaultEditor,
    credentials: CredentialStore,
    service: TaskService,
}

/// Result of dispatching one menu selection
enum MenuResult {
    Continue,
    Quit,
}

impl MenuSession {
    pub fn new(credentials: CredentialStore, service: TaskService) -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        Ok(Self {
            editor,
            credentials,
            service,
        })
    }

    /// Run the login gate and the menu loop until exit
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let Some(session) = self.login()? else {
            // End of input before anyone logged in.
            return Ok(());
        };

        loop {
            self.print_menu(session.role);
            let Some(choice) = self.prompt(":  ")? else {
                break;
            };

            match self.dispatch(&session, choice.trim().to_lowercase().as_str())? {
                MenuResult::Continue => continue,
                MenuResult::Quit => break,
            }
        }

        println!("Exiting the task manager. Goodbye!");
        Ok(())
    }

    /// Prompt for credentials until a pair verifies. No lockout, no attempt
    /// limit. Returns `None` on end of input.
    fn login(&mut self) -> Result<Option<Session>> {
        loop {
            let Some(username) = self.prompt("Enter your username: ")? else {
                return Ok(None);
            };
            let Some(password) = self.prompt("Enter your password: ")? else {
                return Ok(None);
            };

            match auth::login(&self.credentials, username.trim(), password.trim()) {
                Ok(session) => {
                    println!(
                        "{}",
                        format!("Hi, {} you are logged in successfully", session.username).green()
                    );
                    return Ok(Some(session));
                }
                Err(AuthError::InvalidCredentials) => {
                    println!("{}", "Incorrect login details, please try again".red());
                }
            }
        }
    }

    /// Read one line, mapping Ctrl-C to a fresh prompt and Ctrl-D to `None`
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(text) {
                Ok(line) => return Ok(Some(line)),
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(eyre::eyre!("Readline error: {}", e)),
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Task Manager".bright_cyan().bold());
        println!("Sign in to continue.");
        println!();
    }

    fn print_menu(&self, role: Role) {
        println!();
        println!("{}", "Select one of the following options:".bright_cyan());
        if role == Role::Admin {
            println!("  {:4} register a user", "r".yellow());
        }
        println!("  {:4} add a task", "a".yellow());
        println!("  {:4} view all tasks", "va".yellow());
        println!("  {:4} view my tasks", "vm".yellow());
        if role == Role::Admin {
            println!("  {:4} display statistics", "ds".yellow());
        }
        println!("  {:4} exit", "e".yellow());
    }

    fn dispatch(&mut self, session: &Session, choice: &str) -> Result<MenuResult> {
        match choice {
            "r" => {
                self.register_user(session)?;
                Ok(MenuResult::Continue)
            }
            "a" => {
                self.add_task(session)?;
                Ok(MenuResult::Continue)
            }
            "va" => {
                self.view_all()?;
                Ok(MenuResult::Continue)
            }
            "vm" => {
                self.view_mine(session)?;
                Ok(MenuResult::Continue)
            }
            "ds" if session.role == Role::Admin => {
                self.display_statistics()?;
                Ok(MenuResult::Continue)
            }
            "e" => Ok(MenuResult::Quit),
            other => {
                debug!(choice = other, "unrecognized menu option");
                println!("{}", "Invalid option. Please try again.".red());
                Ok(MenuResult::Continue)
            }
        }
    }

    fn register_user(&mut self, session: &Session) -> Result<()> {
        // Unreachable from the standard menu, but checked anyway.
        if session.role != Role::Admin {
            println!("{}", "Only admins are authorized to register users.".red());
            return Ok(());
        }

        let Some(username) = self.prompt("Enter the new user's username: ")? else {
            return Ok(());
        };
        let username = username.trim().to_string();
        if self.credentials.contains(&username) {
            println!("{}", "Username already exists. Please try a different username.".red());
            return Ok(());
        }

        let Some(password) = self.prompt("Enter the new user's password: ")? else {
            return Ok(());
        };
        let Some(confirmed) = self.prompt("Confirm the new user's password: ")? else {
            return Ok(());
        };
        if password != confirmed {
            println!("{}", "Passwords do not match. Please try again.".red());
            return Ok(());
        }

        self.credentials.insert(Credential {
            username: username.clone(),
            password,
        })?;
        println!("{} User {} registered successfully.", "✓".green(), username.cyan());
        Ok(())
    }

    fn add_task(&mut self, session: &Session) -> Result<()> {
        let Some(assignee) = self.prompt("Enter the username of the user to assign the task to: ")? else {
            return Ok(());
        };
        let assignee = assignee.trim().to_string();
        if !self.credentials.contains(&assignee) {
            println!("{}", "User not found.".red());
            return Ok(());
        }

        let Some(title) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(());
        };

        // The date prompt loops until the input parses.
        loop {
            let Some(due_date) = self.prompt("Enter task due date (e.g. 10 Sep 2025): ")? else {
                return Ok(());
            };

            match self.service.assign_task(
                &self.credentials,
                session,
                &assignee,
                title.trim(),
                description.trim(),
                due_date.trim(),
            ) {
                Ok(record) => {
                    println!("{} Task successfully added for {}.", "✓".green(), record.assignee.cyan());
                    return Ok(());
                }
                Err(TaskError::InvalidDate(_)) => {
                    println!("{}", "Invalid date format. Please use a date like '10 Sep 2025'.".red());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn view_all(&mut self) -> Result<()> {
        let listed = self.service.list_all()?;

        println!();
        println!("{}", "All tasks:".bright_cyan());
        if listed.is_empty() {
            println!("No tasks found. Please add tasks first.");
            return Ok(());
        }

        for item in listed {
            match item {
                ListedTask::Task { record, status } => print_task(&record, status, true),
                ListedTask::Malformed { entry, error } => {
                    println!("{}", format!("[record {entry}] unreadable task line: {error}").dimmed());
                }
            }
        }
        Ok(())
    }

    fn view_mine(&mut self, session: &Session) -> Result<()> {
        let listed = self.service.list_for(&session.username)?;

        println!();
        println!("{}", format!("My tasks for {}:", session.username).bright_cyan());
        if listed.is_empty() {
            println!("No tasks found. Please add tasks first.");
            return Ok(());
        }

        for item in listed {
            if let ListedTask::Task { record, status } = item {
                print_task(&record, status, false);
            }
        }
        Ok(())
    }

    fn display_statistics(&mut self) -> Result<()> {
        let stats = self.service.statistics(&self.credentials)?;

        println!();
        println!("{}", "Statistics:".bright_cyan());
        println!("Total number of users: {}", stats.user_count);
        println!("Total number of tasks: {}", stats.task_count);
        Ok(())
    }
}

/// Print one task in the fixed block layout
fn print_task(record: &TaskRecord, status: DueStatus, with_assignee: bool) {
    let status_text = match status {
        DueStatus::OverdueByDays(_) => status.to_string().red().to_string(),
        DueStatus::InvalidDate => status.to_string().yellow().to_string(),
        DueStatus::DueInDays(_) => status.to_string(),
    };

    println!();
    println!("Task:           {}", record.title);
    if with_assignee {
        println!("Assigned to:    {}", record.assignee);
    }
    println!("Date assigned:  {}", record.assigned_date);
    println!("Due date:       {} ({})", record.due_date, status_text);
    println!("Completed:      {}", if record.completed { COMPLETED_YES } else { COMPLETED_NO });
    println!("Description:    {}", record.description);
    println!("-------------------------");
}
