// Copyright (C) 2026 Splits Network
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Splits Network jobs service.
//!
//! This crate stores jobs, their requirements and pre-screen questions, the
//! referenced identity and network entities, and the job event outbox. It is
//! built on Diesel with a bundled `SQLite`.
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own shared in-memory database
//! - Migrations are embedded and applied on open
//! - Foreign key enforcement is verified on open, never assumed

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use splits_core::{AccessContext, AccessResolver, CompanyRef, JobQuery, ScopeLookups};
use splits_domain::{Job, JobRequirement, PreScreenQuestion};
use splits_events::JobEvent;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::{EXPECTED_TABLES, MIGRATIONS};
pub use data_models::{CompanyData, JobChanges, JobEventRecord, JobPage, NewJob};
pub use error::PersistenceError;
pub use mutations::jobs::JOB_NOT_FOUND_OR_DENIED;
pub use mutations::seed::{
    SeedApplication, SeedCandidate, SeedCompany, SeedData, SeedJob, SeedMembership,
    SeedOrganization, SeedPlacement, SeedRecruiter, SeedRecruiterCompany, SeedUser,
};

/// A small network of organizations, companies, people and jobs used by
/// tests and by `splits-server --seed demo`.
pub const DEMO_SEED_JSON: &str = include_str!("../fixtures/demo.json");

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_splits_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    /// Checks that every expected table exists and no foreign key is violated.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn verify_schema(&mut self) -> Result<(), PersistenceError> {
        backend::verify_schema(&mut self.conn)
    }

    /// Lists the tables present in the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog query fails.
    pub fn list_tables(&mut self) -> Result<Vec<String>, PersistenceError> {
        backend::list_tables(&mut self.conn)
    }

    // ========================================================================
    // Seed
    // ========================================================================

    /// Loads a seed document in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any row violates a constraint.
    pub fn load_seed(&mut self, seed: &SeedData) -> Result<(), PersistenceError> {
        mutations::seed::load_seed(&mut self.conn, seed)
    }

    // ========================================================================
    // Jobs
    // ========================================================================

    /// Runs a planned job query.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_jobs(&mut self, query: &JobQuery) -> Result<JobPage, PersistenceError> {
        queries::jobs::list_jobs(&mut self.conn, query)
    }

    /// Retrieves a job that has not been soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_job(&mut self, job_id: i64) -> Result<Option<Job>, PersistenceError> {
        queries::jobs::get_job(&mut self.conn, job_id)
    }

    /// Retrieves a job's requirements.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_requirements(&mut self, job_id: i64) -> Result<Vec<JobRequirement>, PersistenceError> {
        queries::jobs::get_requirements(&mut self.conn, job_id)
    }

    /// Retrieves a job's pre-screen questions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_pre_screen_questions(
        &mut self,
        job_id: i64,
    ) -> Result<Vec<PreScreenQuestion>, PersistenceError> {
        queries::jobs::get_pre_screen_questions(&mut self.conn, job_id)
    }

    /// Retrieves a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_company(&mut self, company_id: i64) -> Result<Option<CompanyData>, PersistenceError> {
        queries::jobs::get_company(&mut self.conn, company_id)
    }

    /// Inserts a job and appends the events `events_for` builds from it to
    /// the outbox, atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert or the outbox append fails.
    pub fn create_job<F>(
        &mut self,
        new_job: &NewJob,
        events_for: F,
    ) -> Result<(Job, Vec<JobEvent>), PersistenceError>
    where
        F: FnOnce(&Job) -> Vec<JobEvent>,
    {
        mutations::jobs::create_job(&mut self.conn, new_job, events_for)
    }

    /// Applies a partial update to a live job and appends `events` to the
    /// outbox, atomically.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no live job matched, or an
    /// error if a write fails.
    pub fn update_job(
        &mut self,
        job_id: i64,
        changes: &JobChanges,
        events: &[JobEvent],
    ) -> Result<Job, PersistenceError> {
        mutations::jobs::update_job(&mut self.conn, job_id, changes, events)
    }

    /// Soft-deletes a live job and appends `events` to the outbox,
    /// atomically.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no live job matched, or an
    /// error if a write fails.
    pub fn soft_delete_job(
        &mut self,
        job_id: i64,
        events: &[JobEvent],
    ) -> Result<(), PersistenceError> {
        mutations::jobs::soft_delete_job(&mut self.conn, job_id, events)
    }

    /// Returns true if an identity user with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn identity_user_exists(&mut self, user_id: i64) -> Result<bool, PersistenceError> {
        queries::identity::identity_user_exists(&mut self.conn, user_id)
    }

    /// Returns true if a recruiter with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn recruiter_exists(&mut self, recruiter_id: i64) -> Result<bool, PersistenceError> {
        queries::identity::recruiter_exists(&mut self.conn, recruiter_id)
    }

    // ========================================================================
    // Event Outbox
    // ========================================================================

    /// Appends events to the outbox.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails.
    pub fn append_job_events(&mut self, events: &[JobEvent]) -> Result<Vec<i64>, PersistenceError> {
        mutations::events::append_job_events(&mut self.conn, events)
    }

    /// Lists the outbox entries for a job in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_job_events(&mut self, job_id: i64) -> Result<Vec<JobEventRecord>, PersistenceError> {
        queries::events::list_job_events(&mut self.conn, job_id)
    }
}

impl AccessResolver for Persistence {
    type Error = PersistenceError;

    fn resolve_access_context(
        &mut self,
        clerk_user_id: &str,
    ) -> Result<AccessContext, Self::Error> {
        queries::identity::resolve_access_context(&mut self.conn, clerk_user_id)
    }
}

impl ScopeLookups for Persistence {
    type Error = PersistenceError;

    fn company_ids_for_organizations(
        &mut self,
        organization_ids: &[i64],
    ) -> Result<Vec<i64>, Self::Error> {
        queries::scope::company_ids_for_organizations(&mut self.conn, organization_ids)
    }

    fn recruiter_application_job_ids(
        &mut self,
        recruiter_id: i64,
        stages: &[&str],
    ) -> Result<Vec<i64>, Self::Error> {
        queries::scope::recruiter_application_job_ids(&mut self.conn, recruiter_id, stages)
    }

    fn recruiter_placement_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error> {
        queries::scope::recruiter_placement_job_ids(&mut self.conn, recruiter_id)
    }

    fn recruiter_owned_job_ids(&mut self, recruiter_id: i64) -> Result<Vec<i64>, Self::Error> {
        queries::scope::recruiter_owned_job_ids(&mut self.conn, recruiter_id)
    }

    fn company(&mut self, company_id: i64) -> Result<Option<CompanyRef>, Self::Error> {
        queries::scope::company_ref(&mut self.conn, company_id)
    }

    fn recruiter_can_manage_company(
        &mut self,
        recruiter_id: i64,
        company_id: i64,
    ) -> Result<bool, Self::Error> {
        queries::scope::recruiter_can_manage_company(&mut self.conn, recruiter_id, company_id)
    }
}
