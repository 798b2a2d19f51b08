//! Department seeding.

use crate::catalog::{COMMON_DEPARTMENTS, DepartmentTemplate};
use crate::error::Result;
use crate::models::department::{CreateDepartment, Department};
use crate::store::{DepartmentStore, MemoryDepartmentStore};
use tracing::{debug, error, info};

/// Counts from a completed seeding pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedResult {
    pub created: usize,
    pub skipped: usize,
    pub duration_secs: f64,
}

impl SeedResult {
    /// Get summary message.
    pub fn summary(&self) -> String {
        format!(
            "Created: {}, Skipped: {} (took {:.1}s)",
            self.created, self.skipped, self.duration_secs
        )
    }
}

/// Outcome of a best-effort seeding pass.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Seeded(SeedResult),
    Failed { reason: String },
}

impl SeedOutcome {
    pub fn is_seeded(&self) -> bool {
        matches!(self, SeedOutcome::Seeded(_))
    }

    /// Get summary message.
    pub fn summary(&self) -> String {
        match self {
            SeedOutcome::Seeded(result) => result.summary(),
            SeedOutcome::Failed { reason } => format!("Seeding failed: {reason}"),
        }
    }
}

/// Creates missing template departments. Creation only: existing rows are
/// never updated or removed.
pub struct DepartmentSeeder<'a, S> {
    store: &'a S,
    templates: &'a [DepartmentTemplate],
}

impl<'a, S: DepartmentStore> DepartmentSeeder<'a, S> {
    /// Seeder over the common department list.
    pub fn new(store: &'a S) -> Self {
        Self::with_templates(store, COMMON_DEPARTMENTS)
    }

    pub fn with_templates(store: &'a S, templates: &'a [DepartmentTemplate]) -> Self {
        Self { store, templates }
    }

    /// Seed every template, never failing.
    ///
    /// Errors abort the pass and are logged; rows created before the error
    /// stay in place. Callers are free to ignore the outcome.
    pub async fn seed_all(&self) -> SeedOutcome {
        match self.try_seed_all().await {
            Ok(result) => {
                info!("Department seeding complete: {}", result.summary());
                SeedOutcome::Seeded(result)
            }
            Err(e) => {
                error!("Department seeding failed, continuing without it: {e}");
                SeedOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    /// Seed every template, stopping at the first store error.
    pub async fn try_seed_all(&self) -> Result<SeedResult> {
        let start = std::time::Instant::now();
        info!("Seeding {} common departments", self.templates.len());

        let mut created = 0;
        let mut skipped = 0;

        for template in self.templates {
            if self.exists(template).await? {
                debug!("Department {} ({}) already present", template.code, template.name);
                skipped += 1;
                continue;
            }

            let saved = self.store.save(CreateDepartment::from(template)).await?;
            debug!("Created department {} ({}) with id {}", saved.code, saved.name, saved.id);
            created += 1;
        }

        Ok(SeedResult {
            created,
            skipped,
            duration_secs: start.elapsed().as_secs_f64(),
        })
    }

    /// A template counts as present if its code or its name is taken.
    async fn exists(&self, template: &DepartmentTemplate) -> Result<bool> {
        if self.store.exists_by_code(template.code).await? {
            return Ok(true);
        }
        Ok(self.store.find_by_name(template.name).await?.is_some())
    }
}

/// Dry run of a seeding pass against a snapshot of stored departments.
///
/// Returns the outcome and the departments that would be created, in template
/// order. `existing` is left as is.
pub async fn plan(existing: &[Department], templates: &[DepartmentTemplate]) -> (SeedOutcome, Vec<Department>) {
    let store = MemoryDepartmentStore::with_departments(existing.to_vec());
    let outcome = DepartmentSeeder::with_templates(&store, templates).seed_all().await;
    let planned = store.departments().into_iter().skip(existing.len()).collect();
    (outcome, planned)
}
