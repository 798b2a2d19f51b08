//! Department repository.

use crate::entities::{departments, prelude::*};
use crate::models::department::CreateDepartment;
use chrono::Utc;
use sea_orm::*;

/// List all departments ordered by name.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<departments::Model>, DbErr> {
    Departments::find()
        .order_by_asc(departments::Column::Name)
        .all(db)
        .await
}

/// List only active departments.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<departments::Model>, DbErr> {
    Departments::find()
        .filter(departments::Column::IsActive.eq(true))
        .order_by_asc(departments::Column::Name)
        .all(db)
        .await
}

/// Find the first department with the given name.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<departments::Model>, DbErr> {
    Departments::find()
        .filter(departments::Column::Name.eq(name))
        .order_by_asc(departments::Column::Id)
        .one(db)
        .await
}

/// Check if a department with this code exists.
pub async fn exists_by_code(db: &DatabaseConnection, code: &str) -> Result<bool, DbErr> {
    let count = Departments::find()
        .filter(departments::Column::Code.eq(code))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Create a new department.
pub async fn create(db: &DatabaseConnection, data: CreateDepartment) -> Result<departments::Model, DbErr> {
    let model = departments::ActiveModel {
        name: Set(data.name),
        code: Set(data.code),
        description: Set(data.description),
        is_active: Set(data.is_active),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    model.insert(db).await
}
