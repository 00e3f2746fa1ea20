//! One roster editing session.
//!
//! # Responsibility
//! - Own the store and the stateful presenters; no global lookup.
//! - Apply user commands and keep the rendered page current.
//!
//! # Invariants
//! - The page is re-rendered before the next command is applied whenever
//!   the store published a change or presenter-local state changed.
//! - Commands that change nothing do not trigger a re-render.

use crate::command::{Command, HELP_TEXT};
use crate::config::SessionConfig;
use crate::model::record::RecordId;
use crate::presenter::debug::DebugPresenter;
use crate::presenter::filter::select_filter;
use crate::presenter::form::{FormPresenter, SubmitOutcome};
use crate::presenter::list::{apply_row_action, RowAction};
use crate::presenter::page_view;
use crate::render::render_page;
use crate::store::record_store::{RecordStore, StoreChange, SubscriptionId};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// What the caller should do after one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// Show this text to the user, then keep reading.
    Message(String),
    /// End the session.
    Quit,
}

pub struct RosterSession {
    store: RecordStore,
    form: FormPresenter,
    debug: DebugPresenter,
    changes: Rc<RefCell<Vec<StoreChange>>>,
    subscription: SubscriptionId,
    local_dirty: bool,
    frame: String,
    renders: usize,
}

impl RosterSession {
    /// Starts a session over the seed roster.
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_store(RecordStore::new(), config)
    }

    /// Starts a session over a caller-provided store.
    pub fn with_store(mut store: RecordStore, config: &SessionConfig) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let subscription = store.subscribe(Box::new(move |change: &StoreChange, _: &RecordStore| {
            sink.borrow_mut().push(*change);
        }));

        info!(
            "event=session_start module=session status=ok records={} show_json={}",
            store.records().len(),
            config.show_json
        );

        let mut session = Self {
            store,
            form: FormPresenter::new(),
            debug: DebugPresenter::new(config.show_json),
            changes,
            subscription,
            local_dirty: false,
            frame: String::new(),
            renders: 0,
        };
        session.render();
        session
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormPresenter {
        &self.form
    }

    pub fn debug(&self) -> &DebugPresenter {
        &self.debug
    }

    /// Ends the session and hands back the store, detached from the page.
    pub fn into_store(mut self) -> RecordStore {
        self.store.unsubscribe(self.subscription);
        self.store
    }

    /// Number of page renders so far, including the initial one.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Applies one user command.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetField(field, value) => {
                if self.form.field(field) != value {
                    self.form.set_field(field, value);
                    self.local_dirty = true;
                }
            }
            Command::SetRole(role) => {
                if self.form.role() != role {
                    self.form.set_role(role);
                    self.local_dirty = true;
                }
            }
            Command::Submit => {
                let had_input = !self.form.is_empty();
                let outcome = self.form.submit(&mut self.store);
                self.local_dirty |= had_input;
                if outcome == SubmitOutcome::UpdateSkipped {
                    return Outcome::Message(
                        "no user updated: the edit target no longer exists".to_string(),
                    );
                }
            }
            Command::Toggle(id) => {
                if !apply_row_action(&mut self.store, RowAction::Toggle(id)) {
                    return unknown_record(id);
                }
            }
            Command::Edit(id) => {
                if self.store.record(id).is_none() {
                    return unknown_record(id);
                }
                apply_row_action(&mut self.store, RowAction::StartEdit(id));
            }
            Command::Filter(filter) => {
                select_filter(&mut self.store, filter);
            }
            Command::ToggleJson => {
                self.debug.toggle();
                self.local_dirty = true;
            }
            Command::Help => return Outcome::Message(HELP_TEXT.to_string()),
            Command::Quit => {
                info!(
                    "event=session_end module=session status=ok records={} renders={}",
                    self.store.records().len(),
                    self.renders
                );
                return Outcome::Quit;
            }
        }
        Outcome::Continue
    }

    /// Re-renders if anything changed since the last render.
    ///
    /// Returns the new page, or `None` when the current page is still valid.
    pub fn refresh(&mut self) -> Option<&str> {
        if !self.local_dirty && self.changes.borrow().is_empty() {
            return None;
        }
        self.render();
        Some(&self.frame)
    }

    /// Current page, re-rendered first if stale.
    pub fn frame(&mut self) -> &str {
        self.refresh();
        &self.frame
    }

    fn render(&mut self) {
        let page = page_view(&self.store, &self.form, &self.debug);
        self.frame = render_page(&page);
        self.renders += 1;
        self.local_dirty = false;
        self.changes.borrow_mut().clear();
    }
}

impl std::fmt::Debug for RosterSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterSession")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("debug", &self.debug)
            .field("renders", &self.renders)
            .finish()
    }
}

fn unknown_record(id: RecordId) -> Outcome {
    Outcome::Message(format!("no user with id {id}"))
}
