//! Session controller.
//!
//! [`RosterController`] is the single owner of everything a running session
//! holds: the roster store, the view state and the add-employee form. Front
//! ends translate user input into [`UiEvent`]s and render from [`Screen`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use roster_core::employee::Employee;
use roster_core::error::Result;
use roster_core::roster::{Roster, RosterRepository};
use roster_core::view::{select_rows, Row, ViewAction, ViewMode, ViewState};

use crate::form::{EmployeeForm, FormField};
use crate::roster_store::RosterStore;

pub const APP_TITLE: &str = "Employee Management Tool";

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiEvent {
    /// "List" button.
    ClickList,
    /// "Sort" button.
    ClickSort,
    /// New contents of the search box.
    SearchInput(String),
    /// New contents of the department filter box.
    FilterInput(String),
    /// New contents of one form input.
    EditField(FormField, String),
    /// "Add" button.
    SubmitForm,
}

/// What the front end should do after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Feedback {
    /// Re-render from the current state.
    Rendered,
    /// Show a blocking notification, then re-render.
    Alert(String),
}

/// Everything needed to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub title: String,
    pub mode: ViewMode,
    pub search_text: String,
    pub filter_text: String,
    pub form: EmployeeForm,
    pub rows: Vec<Row>,
    pub employee_count: usize,
}

pub struct RosterController {
    store: RosterStore,
    view: ViewState,
    form: EmployeeForm,
}

impl RosterController {
    /// Starts a session on `repository`, in the list view with an empty form.
    pub fn open(repository: Arc<dyn RosterRepository>) -> Result<Self> {
        Ok(Self::new(RosterStore::open(repository)?))
    }

    pub fn new(store: RosterStore) -> Self {
        Self {
            store,
            view: ViewState::default(),
            form: EmployeeForm::default(),
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<Feedback> {
        match event {
            UiEvent::ClickList => self.apply_view(ViewAction::ShowList),
            UiEvent::ClickSort => self.apply_view(ViewAction::ShowSort),
            UiEvent::SearchInput(text) => self.apply_view(ViewAction::SearchInput(text)),
            UiEvent::FilterInput(text) => self.apply_view(ViewAction::FilterInput(text)),
            UiEvent::EditField(field, value) => {
                self.form.set(field, value);
                Ok(Feedback::Rendered)
            }
            UiEvent::SubmitForm => {
                let feedback = self.add_employee(self.form.to_employee())?;
                if feedback == Feedback::Rendered {
                    self.form.clear();
                }
                Ok(feedback)
            }
        }
    }

    /// Adds `employee` directly, bypassing the form draft.
    ///
    /// Missing required fields come back as [`Feedback::Alert`]; storage
    /// failures are returned as errors.
    pub fn add_employee(&mut self, employee: Employee) -> Result<Feedback> {
        match self.store.append(employee) {
            Ok(()) => Ok(Feedback::Rendered),
            Err(err) if err.is_validation() => {
                tracing::debug!(error = %err, "Add rejected");
                Ok(Feedback::Alert(err.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    fn apply_view(&mut self, action: ViewAction) -> Result<Feedback> {
        let previous = std::mem::take(&mut self.view);
        self.view = previous.apply(action);
        tracing::debug!(mode = %self.view.mode(), "View changed");
        Ok(Feedback::Rendered)
    }

    pub fn roster(&self) -> &Roster {
        self.store.roster()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    /// Rows for the current view.
    pub fn rows(&self) -> Vec<Row> {
        select_rows(self.store.roster().as_slice(), &self.view)
    }

    pub fn snapshot(&self) -> Screen {
        Screen {
            title: APP_TITLE.to_string(),
            mode: self.view.mode(),
            search_text: self.view.search_text().to_string(),
            filter_text: self.view.filter_text().to_string(),
            form: self.form.clone(),
            rows: self.rows(),
            employee_count: self.store.roster().len(),
        }
    }
}
