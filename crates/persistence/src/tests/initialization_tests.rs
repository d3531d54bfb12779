// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_seeded_persistence;
use crate::{EXPECTED_TABLES, Persistence, PersistenceError, SeedData};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_keys_are_enforced() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_migrations_create_every_table() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let tables = persistence.list_tables().unwrap();

    for expected in EXPECTED_TABLES {
        assert!(tables.iter().any(|t| t == expected), "missing {expected}");
    }
    assert!(persistence.verify_schema().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut seeded = create_seeded_persistence();
    let mut empty = Persistence::new_in_memory().unwrap();

    assert!(seeded.get_job(100).unwrap().is_some());
    assert!(empty.get_job(100).unwrap().is_none());
}

#[test]
fn test_seed_with_dangling_reference_writes_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let seed = SeedData::from_json(
        r#"{
            "organizations": [{ "id": 1, "name": "Acme" }],
            "companies": [{ "id": 10, "name": "Acme", "identity_organization_id": 99 }]
        }"#,
    )
    .unwrap();

    assert!(persistence.load_seed(&seed).is_err());
    assert!(persistence.get_company(10).unwrap().is_none());
}

#[test]
fn test_malformed_seed_is_rejected() {
    let result = SeedData::from_json(r#"{ "jobs": [{ "id": "not-a-number" }] }"#);
    assert!(matches!(result, Err(PersistenceError::SeedFailed(_))));
}
