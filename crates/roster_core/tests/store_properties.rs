use roster_core::{EditMode, Filter, FormPresenter, RecordFields, RecordStore, Role, StoreChange};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn fields(first: &str, role: Option<Role>) -> RecordFields {
    RecordFields::new(first, "Last", format!("{first}@cuny.edu"), role)
}

fn ids(records: &[&roster_core::Record]) -> Vec<u64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn create_assigns_strictly_increasing_unused_ids() {
    let mut store = RecordStore::new();
    let mut seen: HashSet<u64> = store.records().iter().map(|record| record.id).collect();
    let mut last = 2;

    for n in 0..20 {
        let id = store.create(fields(&format!("user{n}"), None));
        assert!(id > last, "id {id} should exceed {last}");
        assert!(seen.insert(id), "id {id} was reused");
        last = id;
    }
    assert_eq!(store.records().len(), 23);
}

#[test]
fn all_filter_is_full_list_in_insertion_order() {
    let mut store = RecordStore::new();
    store.create(fields("a", None));
    store.toggle_active(1);
    store.create(fields("b", Some(Role::Student)));

    assert_eq!(store.filter(), Filter::All);
    assert_eq!(ids(&store.filtered_records()), vec![0, 1, 2, 3, 4]);
}

#[test]
fn active_and_inactive_filters_partition_records() {
    let mut store = RecordStore::new();
    store.create(fields("a", None));
    store.toggle_active(0);
    store.toggle_active(3);

    store.set_filter(Filter::Active);
    let active = ids(&store.filtered_records());
    assert_eq!(active, vec![0, 3]);
    assert_eq!(store.active_count(), active.len());

    store.set_filter(Filter::Inactive);
    let inactive = ids(&store.filtered_records());
    assert_eq!(inactive, vec![1, 2]);
    assert_eq!(store.active_count(), 2);
}

#[test]
fn toggle_twice_restores_active_flag() {
    let mut store = RecordStore::new();
    for id in 0..3 {
        let before = store.record(id).unwrap().active;
        assert!(store.toggle_active(id));
        assert!(store.toggle_active(id));
        assert_eq!(store.record(id).unwrap().active, before);
    }
}

#[test]
fn update_with_missing_target_changes_nothing() {
    let mut store = RecordStore::new();
    let before = store.records().to_vec();

    assert!(!store.update(fields("ghost", None)));

    store.set_edit_mode(EditMode::Edit);
    store.set_edit_target(Some(99));
    assert!(!store.update(fields("ghost", None)));

    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn toggle_missing_id_is_silent() {
    let mut store = RecordStore::new();
    let before = store.records().to_vec();
    assert!(!store.toggle_active(42));
    assert_eq!(store.records(), before.as_slice());
}

#[test]
fn scenario_create_gets_id_three() {
    let mut store = RecordStore::new();
    let id = store.create(RecordFields::new("A", "B", "a@b.com", Some(Role::Student)));

    assert_eq!(id, 3);
    let created = store.record(3).unwrap();
    assert!(!created.active);
    assert_eq!(created.email, "a@b.com");
    assert_eq!(store.records().len(), 4);
}

#[test]
fn scenario_edit_and_update_record_one() {
    let mut store = RecordStore::new();
    store.set_edit_mode(EditMode::Edit);
    store.set_edit_target(Some(1));

    let mut form = FormPresenter::new();
    form.set_field(roster_core::FormField::First, "Benjamin");
    form.set_field(roster_core::FormField::Last, "Bitdiddle");
    form.set_field(roster_core::FormField::Email, "ben@cuny.edu");
    form.set_role(Some(Role::Professor));
    form.submit(&mut store);

    let updated = store.record(1).unwrap();
    assert_eq!(updated.first, "Benjamin");
    assert_eq!(updated.role, Some(Role::Professor));
    assert!(!updated.active);
    assert_eq!(store.edit_mode(), EditMode::Create);
    assert_eq!(store.records().len(), 3);
}

#[test]
fn scenario_active_filter_then_toggle() {
    let mut store = RecordStore::new();
    store.set_filter(Filter::Active);
    assert!(store.filtered_records().is_empty());

    store.toggle_active(0);
    assert_eq!(ids(&store.filtered_records()), vec![0]);
}

#[test]
fn subscribers_get_one_event_per_effective_mutation() {
    let mut store = RecordStore::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let subscription = store.subscribe(Box::new(move |change: &StoreChange, _: &RecordStore| {
        sink.borrow_mut().push(*change);
    }));

    store.create(fields("a", None));
    store.toggle_active(7);
    store.toggle_active(3);
    store.set_filter(Filter::Active);
    store.set_filter(Filter::Active);
    store.set_edit_mode(EditMode::Edit);
    store.set_edit_target(Some(3));
    store.update(fields("b", Some(Role::Professor)));

    assert_eq!(
        events.borrow().as_slice(),
        &[
            StoreChange::RecordCreated { id: 3 },
            StoreChange::ActiveToggled {
                id: 3,
                active: true
            },
            StoreChange::FilterChanged(Filter::Active),
            StoreChange::EditModeChanged(EditMode::Edit),
            StoreChange::EditTargetChanged(Some(3)),
            StoreChange::RecordUpdated { id: 3 },
        ]
    );

    assert!(store.unsubscribe(subscription));
    store.toggle_active(3);
    assert_eq!(events.borrow().len(), 6);
}

#[test]
fn subscribers_run_in_subscription_order() {
    let mut store = RecordStore::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for name in ["first", "second"] {
        let sink = Rc::clone(&order);
        store.subscribe(Box::new(move |_: &StoreChange, _: &RecordStore| {
            sink.borrow_mut().push(name);
        }));
    }

    store.toggle_active(0);
    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}
