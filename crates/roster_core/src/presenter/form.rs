//! Create/edit form.
//!
//! # Responsibility
//! - Hold transient input values until the user commits.
//! - On submit, call `create` or `update` depending on the store's mode.
//!
//! # Invariants
//! - Inputs are independent of the store until submit.
//! - Every submit clears all four inputs, whichever branch ran.
//! - An edit-mode submit always returns the store to create mode.

use crate::model::record::{RecordFields, RecordId, Role};
use crate::model::view_state::EditMode;
use crate::store::record_store::RecordStore;
use log::info;

pub const ROLE_PLACEHOLDER: &str = "--Please choose a role--";

/// Free-text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    First,
    Last,
    Email,
}

impl FormField {
    /// Label shown before the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::First => "first:",
            Self::Last => "last:",
            Self::Email => "email:",
        }
    }
}

/// Result of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// Edit target was unset or missing; the store was left unchanged.
    UpdateSkipped,
}

/// One entry of the role selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleOption {
    pub role: Option<Role>,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub first: String,
    pub last: String,
    pub email: String,
    pub role_options: Vec<RoleOption>,
    pub mode: EditMode,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPresenter {
    first: String,
    last: String,
    email: String,
    role: Option<Role>,
}

impl FormPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::First => &self.first,
            FormField::Last => &self.last,
            FormField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::First => self.first = value,
            FormField::Last => self.last = value,
            FormField::Email => self.email = value,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn set_role(&mut self, role: Option<Role>) {
        self.role = role;
    }

    /// Current inputs as a store request.
    pub fn fields(&self) -> RecordFields {
        RecordFields::new(
            self.first.clone(),
            self.last.clone(),
            self.email.clone(),
            self.role,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty() && self.email.is_empty() && self.role.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Commits the inputs to the store and resets the form.
    pub fn submit(&mut self, store: &mut RecordStore) -> SubmitOutcome {
        let fields = std::mem::take(self).fields();
        match store.edit_mode() {
            EditMode::Create => {
                let id = store.create(fields);
                info!("event=form_submit module=presenter status=ok action=create id={id}");
                SubmitOutcome::Created(id)
            }
            EditMode::Edit => {
                let target = store.edit_target();
                let updated = store.update(fields);
                store.set_edit_mode(EditMode::Create);
                match target {
                    Some(id) if updated => {
                        info!(
                            "event=form_submit module=presenter status=ok action=update id={id}"
                        );
                        SubmitOutcome::Updated(id)
                    }
                    _ => {
                        info!("event=form_submit module=presenter status=skipped action=update");
                        SubmitOutcome::UpdateSkipped
                    }
                }
            }
        }
    }

    pub fn view(&self, store: &RecordStore) -> FormView {
        let mut role_options = vec![RoleOption {
            role: None,
            label: ROLE_PLACEHOLDER,
            selected: self.role.is_none(),
        }];
        role_options.extend(Role::all().into_iter().map(|role| RoleOption {
            role: Some(role),
            label: role.label(),
            selected: self.role == Some(role),
        }));

        FormView {
            first: self.first.clone(),
            last: self.last.clone(),
            email: self.email.clone(),
            role_options,
            mode: store.edit_mode(),
            submit_label: store.submit_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormField, FormPresenter, SubmitOutcome};
    use crate::model::record::Role;
    use crate::model::view_state::EditMode;
    use crate::store::record_store::RecordStore;

    fn filled_form() -> FormPresenter {
        let mut form = FormPresenter::new();
        form.set_field(FormField::First, "Ada");
        form.set_field(FormField::Last, "Lovelace");
        form.set_field(FormField::Email, "ada@cuny.edu");
        form.set_role(Some(Role::Professor));
        form
    }

    #[test]
    fn create_submit_appends_and_clears() {
        let mut store = RecordStore::new();
        let mut form = filled_form();

        assert_eq!(form.submit(&mut store), SubmitOutcome::Created(3));
        assert!(form.is_empty());
        let created = store.record(3).expect("created record");
        assert_eq!(created.first, "Ada");
        assert_eq!(created.role, Some(Role::Professor));
    }

    #[test]
    fn empty_form_still_creates_a_record() {
        let mut store = RecordStore::new();
        let mut form = FormPresenter::new();

        assert_eq!(form.submit(&mut store), SubmitOutcome::Created(3));
        let created = store.record(3).expect("created record");
        assert_eq!(created.first, "");
        assert_eq!(created.role, None);
    }

    #[test]
    fn edit_submit_with_stale_target_resets_mode() {
        let mut store = RecordStore::new();
        store.set_edit_mode(EditMode::Edit);
        store.set_edit_target(Some(42));
        let before = store.records().to_vec();
        let mut form = filled_form();

        assert_eq!(form.submit(&mut store), SubmitOutcome::UpdateSkipped);
        assert_eq!(store.records(), before.as_slice());
        assert_eq!(store.edit_mode(), EditMode::Create);
        assert!(form.is_empty());
    }

    #[test]
    fn view_reflects_inputs_and_mode() {
        let mut store = RecordStore::new();
        let form = filled_form();
        store.set_edit_mode(EditMode::Edit);

        let view = form.view(&store);
        assert_eq!(view.first, "Ada");
        assert_eq!(view.submit_label, "Update User");
        let selected: Vec<_> = view
            .role_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.role)
            .collect();
        assert_eq!(selected, vec![Some(Role::Professor)]);
        assert_eq!(view.role_options[0].label, "--Please choose a role--");
    }
}
