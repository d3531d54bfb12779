// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::RunQueryDsl;

use super::{create_seeded_persistence, create_test_actor};
use crate::{JOB_NOT_FOUND_OR_DENIED, JobChanges, NewJob, Persistence, PersistenceError};
use splits_domain::{
    EmploymentType, JobRequirement, JobStatus, PreScreenQuestion, QuestionType, RequirementType,
};
use splits_events::JobEvent;

fn create_test_requirements() -> Vec<JobRequirement> {
    vec![
        JobRequirement {
            requirement_type: RequirementType::Preferred,
            description: String::from("Diesel experience"),
            sort_order: 2,
        },
        JobRequirement {
            requirement_type: RequirementType::Mandatory,
            description: String::from("Five years of Rust"),
            sort_order: 1,
        },
    ]
}

fn create_test_question() -> PreScreenQuestion {
    PreScreenQuestion {
        question: String::from("Preferred working model?"),
        question_type: QuestionType::Select,
        is_required: true,
        options: vec![String::from("remote"), String::from("hybrid")],
        sort_order: 0,
    }
}

#[test]
fn test_create_job_round_trips_every_field() {
    let mut persistence = create_seeded_persistence();
    let mut new_job = NewJob::new(String::from("Platform Engineer"), 10);
    new_job.status = JobStatus::Active;
    new_job.salary_min = Some(80_000);
    new_job.salary_max = Some(95_000);
    new_job.employment_type = Some(EmploymentType::TempToHire);
    new_job.fee_percentage = Some(18.5);
    new_job.job_owner_recruiter_id = Some(1);
    new_job.requirements = create_test_requirements();
    new_job.pre_screen_questions = vec![create_test_question()];

    let (job, events) = persistence.create_job(&new_job, |_| Vec::new()).unwrap();

    assert!(events.is_empty());
    assert_eq!(job.title, "Platform Engineer");
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.employment_type, Some(EmploymentType::TempToHire));
    assert_eq!(job.fee_percentage, Some(18.5));
    assert_eq!(job.job_owner_recruiter_id, Some(1));
    assert_eq!(job.created_at, job.updated_at);
    assert!(job.created_at.ends_with('Z'));
    assert!(!job.is_deleted());

    let requirements = persistence.get_requirements(job.id).unwrap();
    assert_eq!(requirements.len(), 2);
    assert_eq!(requirements[0].description, "Five years of Rust");

    let questions = persistence.get_pre_screen_questions(job.id).unwrap();
    assert_eq!(questions, vec![create_test_question()]);
}

#[test]
fn test_create_job_for_unknown_company_fails() {
    let mut persistence = create_seeded_persistence();
    let result = persistence.create_job(&NewJob::new(String::from("Ghost"), 999), |_| Vec::new());
    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_update_touches_only_supplied_fields() {
    let mut persistence = create_seeded_persistence();
    let before = persistence.get_job(100).unwrap().unwrap();

    let changes = JobChanges {
        title: Some(String::from("Principal Rust Engineer")),
        status: Some(JobStatus::Paused),
        ..JobChanges::default()
    };
    let after = persistence.update_job(100, &changes, &[]).unwrap();

    assert_eq!(after.title, "Principal Rust Engineer");
    assert_eq!(after.status, JobStatus::Paused);
    assert_eq!(after.salary_min, before.salary_min);
    assert_eq!(after.location, before.location);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn test_update_replaces_requirements_wholesale() {
    let mut persistence = create_seeded_persistence();
    persistence
        .update_job(
            101,
            &JobChanges {
                requirements: Some(create_test_requirements()),
                ..JobChanges::default()
            },
            &[],
        )
        .unwrap();
    persistence
        .update_job(
            101,
            &JobChanges {
                requirements: Some(Vec::new()),
                ..JobChanges::default()
            },
            &[],
        )
        .unwrap();

    assert!(persistence.get_requirements(101).unwrap().is_empty());
}

#[test]
fn test_update_of_deleted_job_is_not_found() {
    let mut persistence = create_seeded_persistence();
    let result = persistence.update_job(104, &JobChanges::default(), &[]);

    assert_eq!(
        result,
        Err(PersistenceError::NotFound(JOB_NOT_FOUND_OR_DENIED.to_string()))
    );
}

#[test]
fn test_soft_delete_hides_job() {
    let mut persistence = create_seeded_persistence();

    persistence.soft_delete_job(101, &[]).unwrap();

    assert!(persistence.get_job(101).unwrap().is_none());
    assert!(matches!(
        persistence.soft_delete_job(101, &[]),
        Err(PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_changed_fields_follow_column_order() {
    let changes = JobChanges {
        salary_max: Some(1),
        title: Some(String::from("x")),
        pre_screen_questions: Some(Vec::new()),
        ..JobChanges::default()
    };
    assert_eq!(
        changes.changed_fields(),
        vec!["title", "salary_max", "pre_screen_questions"]
    );
}

#[test]
fn test_get_company() {
    let mut persistence = create_seeded_persistence();
    let company = persistence.get_company(20).unwrap().unwrap();

    assert_eq!(company.name, "Globex");
    assert_eq!(company.identity_organization_id, Some(2));
    assert!(persistence.get_company(404).unwrap().is_none());
}

#[test]
fn test_create_records_events_built_from_stored_job() {
    let mut persistence = create_seeded_persistence();

    let (job, events) = persistence
        .create_job(&NewJob::new(String::from("Site Reliability Engineer"), 10), |job| {
            vec![JobEvent::Created {
                job_id: job.id,
                company_id: job.company_id,
                status: job.status,
                actor: create_test_actor(),
            }]
        })
        .unwrap();

    assert_eq!(events[0].job_id(), job.id);
    let records = persistence.list_job_events(job.id).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].event_name, "job.created");
}

/// Makes every outbox insert abort.
fn break_outbox(persistence: &mut Persistence) {
    diesel::sql_query(
        "CREATE TRIGGER reject_job_events BEFORE INSERT ON job_events \
         BEGIN SELECT RAISE(ABORT, 'outbox unavailable'); END",
    )
    .execute(&mut persistence.conn)
    .unwrap();
}

#[test]
fn test_failed_outbox_write_rolls_back_update() {
    let mut persistence = create_seeded_persistence();
    let before = persistence.get_job(100).unwrap().unwrap();
    break_outbox(&mut persistence);

    let changes = JobChanges {
        status: Some(JobStatus::Paused),
        requirements: Some(create_test_requirements()),
        ..JobChanges::default()
    };
    let events = vec![JobEvent::Updated {
        job_id: 100,
        changed_fields: changes.changed_fields(),
        actor: create_test_actor(),
    }];

    assert!(persistence.update_job(100, &changes, &events).is_err());
    assert_eq!(persistence.get_job(100).unwrap().unwrap(), before);
    assert!(persistence.get_requirements(100).unwrap().is_empty());
}

#[test]
fn test_failed_outbox_write_rolls_back_create_and_delete() {
    let mut persistence = create_seeded_persistence();
    break_outbox(&mut persistence);
    let actor = create_test_actor();

    let created = persistence.create_job(&NewJob::new(String::from("Orphan"), 10), |job| {
        vec![JobEvent::Created {
            job_id: job.id,
            company_id: job.company_id,
            status: job.status,
            actor: actor.clone(),
        }]
    });
    let deleted = persistence.soft_delete_job(
        101,
        &[JobEvent::Deleted {
            job_id: 101,
            actor: create_test_actor(),
        }],
    );

    assert!(created.is_err());
    assert!(deleted.is_err());
    assert!(persistence.get_job(101).unwrap().is_some());
    let mut query = super::create_base_query();
    query.search_terms = vec![String::from("orphan")];
    assert!(super::job_ids(&mut persistence, &query).is_empty());
}
