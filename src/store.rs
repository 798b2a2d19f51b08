//! Department storage abstraction used by the seeder.

use std::sync::{Mutex, MutexGuard};

use sea_orm::DatabaseConnection;

use crate::db::department;
use crate::error::Result;
use crate::models::department::{CreateDepartment, Department};

/// Minimal department store contract.
///
/// Each call is atomic on its own; no transaction spans several calls.
pub trait DepartmentStore: Send + Sync {
    fn exists_by_code(&self, code: &str) -> impl Future<Output = Result<bool>> + Send;
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<Department>>> + Send;
    fn save(&self, department: CreateDepartment) -> impl Future<Output = Result<Department>> + Send;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct SeaOrmDepartmentStore {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DepartmentStore for SeaOrmDepartmentStore {
    async fn exists_by_code(&self, code: &str) -> Result<bool> {
        Ok(department::exists_by_code(&self.db, code).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>> {
        Ok(department::find_by_name(&self.db, name).await?.map(Department::from))
    }

    async fn save(&self, data: CreateDepartment) -> Result<Department> {
        data.validate()?;
        Ok(department::create(&self.db, data).await?.into())
    }
}

/// In-process store, used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryDepartmentStore {
    departments: Mutex<Vec<Department>>,
}

impl MemoryDepartmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of departments.
    pub fn with_departments(departments: Vec<Department>) -> Self {
        Self {
            departments: Mutex::new(departments),
        }
    }

    /// Snapshot of stored departments, in insertion order.
    pub fn departments(&self) -> Vec<Department> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Department>> {
        self.departments.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DepartmentStore for MemoryDepartmentStore {
    async fn exists_by_code(&self, code: &str) -> Result<bool> {
        Ok(self.lock().iter().any(|d| d.code == code))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>> {
        Ok(self.lock().iter().find(|d| d.name == name).cloned())
    }

    async fn save(&self, data: CreateDepartment) -> Result<Department> {
        data.validate()?;
        let mut departments = self.lock();
        let id = departments.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        let department = Department {
            id,
            name: data.name,
            code: data.code,
            description: data.description,
            is_active: data.is_active,
        };
        departments.push(department.clone());
        Ok(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, code: &str) -> CreateDepartment {
        CreateDepartment {
            name: name.to_string(),
            code: code.to_string(),
            description: String::new(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_memory_store_save_assigns_ids() {
        let store = MemoryDepartmentStore::new();
        let first = store.save(create("Front Office", "FO")).await.unwrap();
        let second = store.save(create("Housekeeping", "HK")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.departments().len(), 2);
    }

    #[tokio::test]
    async fn test_memory_store_lookups() {
        let store = MemoryDepartmentStore::new();
        store.save(create("Front Office", "FO")).await.unwrap();

        assert!(store.exists_by_code("FO").await.unwrap());
        assert!(!store.exists_by_code("fo").await.unwrap());
        assert_eq!(
            store.find_by_name("Front Office").await.unwrap().map(|d| d.code),
            Some("FO".to_string())
        );
        assert!(store.find_by_name("Kitchen").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_rejects_blank_code() {
        let store = MemoryDepartmentStore::new();
        assert!(store.save(create("Finance", "")).await.is_err());
        assert!(store.departments().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_continues_ids_after_snapshot() {
        let store = MemoryDepartmentStore::with_departments(vec![Department {
            id: 40,
            name: "Kitchen".to_string(),
            code: "KIT".to_string(),
            description: String::new(),
            is_active: false,
        }]);
        let saved = store.save(create("Finance", "FIN")).await.unwrap();
        assert_eq!(saved.id, 41);
    }
}
