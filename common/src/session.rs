//! Lifecycle of the supplier editor dialog.
//!
//! ```text
//! Closed -> Loading (edit only) -> Open -> Submitting -> Closed
//!                                   ^           |
//!                                   +-- error --+
//! ```
//!
//! `Loading` and `Submitting` wait on the network. Each wait hands out a
//! `Ticket`; a result presented with a stale ticket (the dialog was closed or
//! reopened meanwhile) is dropped.

use log::debug;

use crate::editor::AggregateEditor;
use crate::editor::validation::ValidationErrors;
use crate::error::{ApiError, SyncError};
use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Closed,
    Loading(RecordId),
    Open(AggregateEditor),
    Submitting(AggregateEditor),
}

/// What the caller should do after a submit result was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; the dialog closed and the list must be reloaded.
    Saved { supplier_id: RecordId, created: bool },
    /// The dialog stays open showing this message.
    Failed(String),
    /// No submit was pending; the result belongs to an abandoned session.
    Ignored,
}

/// Identifies one pending load or submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    state: SessionState,
    field_errors: ValidationErrors,
    error: Option<String>,
    generation: u64,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            state: SessionState::Closed,
            field_errors: ValidationErrors::default(),
            error: None,
            generation: 0,
        }
    }
}

impl EditSession {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, SessionState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting(_))
    }

    /// The aggregate shown in the dialog while it is open or submitting.
    pub fn editor(&self) -> Option<&AggregateEditor> {
        match &self.state {
            SessionState::Open(editor) | SessionState::Submitting(editor) => Some(editor),
            _ => None,
        }
    }

    /// Mutable access, only while the user may edit.
    pub fn editor_mut(&mut self) -> Option<&mut AggregateEditor> {
        match &mut self.state {
            SessionState::Open(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Opens the dialog on an empty aggregate.
    pub fn open_new(&mut self) {
        self.reset(SessionState::Open(AggregateEditor::new_aggregate()));
    }

    /// Starts fetching an existing supplier.
    pub fn start_loading(&mut self, supplier_id: RecordId) -> Ticket {
        self.reset(SessionState::Loading(supplier_id));
        Ticket(self.generation)
    }

    /// Applies the fetch started by `start_loading`. Returns the message to
    /// report when the fetch failed; the dialog then stays closed.
    pub fn finish_loading(
        &mut self,
        ticket: Ticket,
        result: Result<AggregateEditor, ApiError>,
    ) -> Option<String> {
        if ticket != Ticket(self.generation) || !self.is_loading() {
            debug!("Dropping stale supplier load");
            return None;
        }
        match result {
            Ok(editor) => {
                self.reset(SessionState::Open(editor));
                None
            }
            Err(err) => {
                self.reset(SessionState::Closed);
                Some(format!("Error loading customer data: {}", err))
            }
        }
    }

    /// Validates and moves to `Submitting`, returning the aggregate to save.
    /// On validation errors the dialog stays open with the fields flagged.
    pub fn begin_submit(&mut self) -> Option<(Ticket, AggregateEditor)> {
        let SessionState::Open(editor) = &self.state else {
            return None;
        };
        let errors = editor.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            return None;
        }
        let editor = editor.clone();
        self.field_errors = ValidationErrors::default();
        self.error = None;
        self.state = SessionState::Submitting(editor.clone());
        self.generation += 1;
        Some((Ticket(self.generation), editor))
    }

    /// Applies the result of the save started by `begin_submit`.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<RecordId, SyncError>,
    ) -> SubmitOutcome {
        let SessionState::Submitting(editor) = &self.state else {
            debug!("Dropping save result for a closed editor");
            return SubmitOutcome::Ignored;
        };
        if ticket != Ticket(self.generation) {
            debug!("Dropping stale save result");
            return SubmitOutcome::Ignored;
        }
        let editor = editor.clone();
        match result {
            Ok(supplier_id) => {
                let created = !editor.is_editing();
                self.reset(SessionState::Closed);
                SubmitOutcome::Saved {
                    supplier_id,
                    created,
                }
            }
            Err(err) => {
                let message = err.to_string();
                self.state = SessionState::Open(editor);
                match err {
                    SyncError::Validation(errors) => self.field_errors = errors,
                    _ => self.error = Some(message.clone()),
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Discards the aggregate. Pending results will be ignored.
    pub fn close(&mut self) {
        self.reset(SessionState::Closed);
    }

    fn reset(&mut self, state: SessionState) {
        self.generation += 1;
        self.state = state;
        self.field_errors = ValidationErrors::default();
        self.error = None;
    }
}
