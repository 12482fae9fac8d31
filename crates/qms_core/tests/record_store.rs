use chrono::NaiveDate;
use qms_core::model::capa::{CapaRecord, CapaSource, CapaStatus};
use qms_core::model::common::Priority;
use qms_core::{Clock, Entry, FeatureArea, FixedClock, RecordId, RecordStore};
use std::collections::HashSet;
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(day(2024, 12, 1)))
}

fn capa(number: &str, status: CapaStatus) -> CapaRecord {
    CapaRecord {
        capa_number: number.to_string(),
        title: "Torque spec exceeded on line 3".to_string(),
        description: "Fasteners torqued above the drawing limit".to_string(),
        root_cause: "Wrench calibration drift".to_string(),
        corrective_action: "Recalibrate wrenches".to_string(),
        preventive_action: String::new(),
        assigned_to: "Dana Lee".to_string(),
        due_date: day(2024, 12, 20),
        priority: Priority::High,
        status,
        source: CapaSource::InternalAudit,
        department: "Production".to_string(),
        closed_on: None,
        effective: None,
        follow_up_date: None,
        attachments: Vec::new(),
    }
}

fn store() -> RecordStore<CapaRecord> {
    RecordStore::new(FeatureArea::Capa, clock())
}

#[test]
fn insert_prepends_and_stamps_creation_date() {
    let mut store = store();
    let first = store.insert(capa("CAPA-1", CapaStatus::Open));
    let second = store.insert(capa("CAPA-2", CapaStatus::Open));

    assert_eq!(store.len(), 2);
    assert_eq!(store.all()[0].id(), second);
    assert_eq!(store.all()[1].id(), first);
    assert_eq!(store.get(first).unwrap().created_on(), day(2024, 12, 1));
}

#[test]
fn insert_assigns_unique_ids() {
    let mut store = store();
    let ids: HashSet<RecordId> = (0..50)
        .map(|i| store.insert(capa(&format!("CAPA-{i}"), CapaStatus::Open)))
        .collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn update_replaces_fields_but_keeps_identity() {
    let mut store = store();
    let id = store.insert(capa("CAPA-1", CapaStatus::Open));
    let created = store.get(id).unwrap().created_on();

    let mut changed = capa("CAPA-1", CapaStatus::InProgress);
    changed.assigned_to = "Sam Ortiz".to_string();
    assert!(store.update(id, changed));

    let entry = store.get(id).unwrap();
    assert_eq!(entry.id(), id);
    assert_eq!(entry.created_on(), created);
    assert_eq!(entry.record().status, CapaStatus::InProgress);
    assert_eq!(entry.record().assigned_to, "Sam Ortiz");
    assert_eq!(store.len(), 1);
}

#[test]
fn update_and_modify_ignore_unknown_ids() {
    let mut store = store();
    store.insert(capa("CAPA-1", CapaStatus::Open));
    let before: Vec<CapaRecord> = store.all().iter().map(|e| e.record().clone()).collect();

    let missing = RecordId::new_v4();
    assert!(!store.update(missing, capa("CAPA-X", CapaStatus::Closed)));
    assert!(!store.modify(missing, |r| r.status = CapaStatus::Closed));

    let after: Vec<CapaRecord> = store.all().iter().map(|e| e.record().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = store();
    let keep = store.insert(capa("CAPA-1", CapaStatus::Open));
    let drop = store.insert(capa("CAPA-2", CapaStatus::Open));

    let removed = store.delete(drop).unwrap();
    assert_eq!(removed.record().capa_number, "CAPA-2");
    assert_eq!(store.len(), 1);
    assert!(store.get(drop).is_none());
    assert!(store.get(keep).is_some());

    assert!(store.delete(drop).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn from_entries_keeps_order_and_drops_duplicate_ids() {
    let shared = RecordId::new_v4();
    let entries = vec![
        Entry::new(shared, day(2024, 11, 2), capa("CAPA-B", CapaStatus::Open)),
        Entry::new(RecordId::new_v4(), day(2024, 11, 1), capa("CAPA-A", CapaStatus::Open)),
        Entry::new(shared, day(2024, 10, 1), capa("CAPA-DUP", CapaStatus::Open)),
    ];
    let store = RecordStore::from_entries(FeatureArea::Capa, clock(), entries);

    let numbers: Vec<&str> = store
        .all()
        .iter()
        .map(|e| e.record().capa_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["CAPA-B", "CAPA-A"]);
}

#[test]
fn entries_serialize_with_identity_envelope() {
    let mut store = store();
    let id = store.insert(capa("CAPA-1", CapaStatus::Open));

    let value = serde_json::to_value(store.get(id).unwrap()).unwrap();
    assert_eq!(value["id"], serde_json::json!(id.to_string()));
    assert_eq!(value["created_on"], "2024-12-01");
    assert_eq!(value["record"]["status"], "open");
}
