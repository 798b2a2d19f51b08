//! Department records and DTOs.

use crate::catalog::DepartmentTemplate;
use crate::entities::departments;
use crate::error::{AppError, Result};
use serde::Serialize;

/// A stored department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
}

/// DTO for creating a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDepartment {
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
}

impl CreateDepartment {
    /// Validate required fields.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Department name cannot be empty"));
        }
        if self.code.trim().is_empty() {
            return Err(AppError::validation("Department code cannot be empty"));
        }
        Ok(())
    }
}

impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
            description: model.description,
            is_active: model.is_active,
        }
    }
}

impl From<&DepartmentTemplate> for CreateDepartment {
    /// New departments created from a template start out active.
    fn from(template: &DepartmentTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            code: template.code.to_string(),
            description: template.description.to_string(),
            is_active: true,
        }
    }
}
