//! Record store with explicit subscribers.
//!
//! # Responsibility
//! - Assign record ids and apply create/update/toggle mutations.
//! - Hold filter, edit mode and edit target, and derive views from them.
//! - Notify subscribers synchronously after every effective change.
//!
//! # Invariants
//! - Ids increase monotonically from the seed count and are never reused.
//! - `update` and `toggle_active` on a missing id are silent no-ops.
//! - Listeners run in subscription order before the mutating call returns.

use crate::model::record::{seed_records, Record, RecordFields, RecordId};
use crate::model::view_state::{EditMode, Filter};
use crate::store::snapshot::StoreSnapshot;
use log::debug;
use std::fmt::{Debug, Formatter};

/// Change published to subscribers after an effective mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    RecordCreated { id: RecordId },
    RecordUpdated { id: RecordId },
    ActiveToggled { id: RecordId, active: bool },
    FilterChanged(Filter),
    EditModeChanged(EditMode),
    EditTargetChanged(Option<RecordId>),
}

/// Handle returned by `RecordStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Subscriber callback. Receives the change and the already-mutated store.
pub type Listener = Box<dyn FnMut(&StoreChange, &RecordStore)>;

/// Single owner of canonical roster state.
pub struct RecordStore {
    records: Vec<Record>,
    filter: Filter,
    edit_mode: EditMode,
    edit_target: Option<RecordId>,
    next_id: RecordId,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl RecordStore {
    /// Creates a store holding the three seed records.
    pub fn new() -> Self {
        Self::with_records(seed_records())
    }

    /// Creates a store over caller-provided records.
    ///
    /// The next assigned id is one past the largest existing id, or `0` for
    /// an empty list.
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .map(|record| record.id + 1)
            .max()
            .unwrap_or(0);
        Self {
            records,
            filter: Filter::default(),
            edit_mode: EditMode::default(),
            edit_target: None,
            next_id,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Finds one record by id.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn edit_target(&self) -> Option<RecordId> {
        self.edit_target
    }

    /// Id the next `create` call will assign.
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }

    /// Records visible under the current filter, in insertion order.
    pub fn filtered_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| self.filter.matches(record))
            .collect()
    }

    /// Number of active records, independent of the current filter.
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|record| record.active).count()
    }

    /// Label of the form's submit control.
    pub fn submit_label(&self) -> &'static str {
        self.edit_mode.submit_label()
    }

    /// Appends a new inactive record and returns its id.
    pub fn create(&mut self, fields: RecordFields) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Record::new(id, fields));
        debug!("event=record_created module=store status=ok id={id}");
        self.publish(StoreChange::RecordCreated { id });
        id
    }

    /// Overwrites the edit target's fields in place.
    ///
    /// Returns `false` without touching state when no target is set or the
    /// target id is not in the store.
    pub fn update(&mut self, fields: RecordFields) -> bool {
        let Some(target) = self.edit_target else {
            debug!("event=record_update module=store status=skipped reason=no_target");
            return false;
        };
        let Some(record) = self.records.iter_mut().find(|record| record.id == target) else {
            debug!("event=record_update module=store status=skipped reason=not_found id={target}");
            return false;
        };

        record.apply(fields);
        debug!("event=record_updated module=store status=ok id={target}");
        self.publish(StoreChange::RecordUpdated { id: target });
        true
    }

    /// Flips the active flag of one record.
    ///
    /// Returns `false` without touching state when the id is not found.
    pub fn toggle_active(&mut self, id: RecordId) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            debug!("event=record_toggle module=store status=skipped reason=not_found id={id}");
            return false;
        };

        let active = record.toggle_active();
        debug!("event=record_toggled module=store status=ok id={id} active={active}");
        self.publish(StoreChange::ActiveToggled { id, active });
        true
    }

    /// Sets the list filter. Returns whether the value changed.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        debug!("event=filter_changed module=store status=ok filter={filter}");
        self.publish(StoreChange::FilterChanged(filter));
        true
    }

    /// Sets the form mode. Returns whether the value changed.
    pub fn set_edit_mode(&mut self, mode: EditMode) -> bool {
        if self.edit_mode == mode {
            return false;
        }
        self.edit_mode = mode;
        debug!("event=edit_mode_changed module=store status=ok mode={mode:?}");
        self.publish(StoreChange::EditModeChanged(mode));
        true
    }

    /// Sets the record targeted by `update`. Returns whether the value changed.
    ///
    /// The id is not checked against the store; a stale target makes the
    /// next `update` a no-op.
    pub fn set_edit_target(&mut self, id: Option<RecordId>) -> bool {
        if self.edit_target == id {
            return false;
        }
        self.edit_target = id;
        debug!("event=edit_target_changed module=store status=ok id={id:?}");
        self.publish(StoreChange::EditTargetChanged(id));
        true
    }

    /// Registers a listener called after every effective mutation.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` for an unknown handle.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns an owned copy of the full observable state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            records: self.records.clone(),
            filter: self.filter,
            edit_mode: self.edit_mode,
            edit_target_id: self.edit_target,
            next_id: self.next_id,
        }
    }

    fn publish(&mut self, change: StoreChange) {
        // Listeners only see `&RecordStore`, so none can subscribe while
        // the list is detached.
        let mut listeners = std::mem::take(&mut self.listeners);
        for (_, listener) in listeners.iter_mut() {
            listener(&change, self);
        }
        self.listeners = listeners;
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for RecordStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.records)
            .field("filter", &self.filter)
            .field("edit_mode", &self.edit_mode)
            .field("edit_target", &self.edit_target)
            .field("next_id", &self.next_id)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordStore, StoreChange};
    use crate::model::record::{Record, RecordFields};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_store_starts_ids_at_zero() {
        let mut store = RecordStore::with_records(Vec::new());
        assert_eq!(store.create(RecordFields::default()), 0);
        assert_eq!(store.create(RecordFields::default()), 1);
    }

    #[test]
    fn next_id_follows_largest_existing_id() {
        let records = vec![
            Record::new(4, RecordFields::default()),
            Record::new(9, RecordFields::default()),
        ];
        let store = RecordStore::with_records(records);
        assert_eq!(store.next_id(), 10);
    }

    #[test]
    fn listener_sees_mutated_state() {
        let mut store = RecordStore::new();
        let observed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&observed);
        store.subscribe(Box::new(move |change: &StoreChange, store: &RecordStore| {
            sink.borrow_mut().push((*change, store.records().len()));
        }));

        store.create(RecordFields::default());

        assert_eq!(
            observed.borrow().as_slice(),
            &[(StoreChange::RecordCreated { id: 3 }, 4)]
        );
    }

    #[test]
    fn setters_skip_unchanged_values() {
        let mut store = RecordStore::new();
        let count = Rc::new(RefCell::new(0_usize));
        let sink = Rc::clone(&count);
        store.subscribe(Box::new(move |_, _| *sink.borrow_mut() += 1));

        assert!(!store.set_filter(store.filter()));
        assert!(!store.set_edit_mode(store.edit_mode()));
        assert!(!store.set_edit_target(None));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn unsubscribe_unknown_handle_returns_false() {
        let mut store = RecordStore::new();
        let id = store.subscribe(Box::new(|_, _| {}));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.subscriber_count(), 0);
    }
}
