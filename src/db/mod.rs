//! Database connection pool and operations.

pub mod connection;
pub mod department;

pub use connection::{
    connect, count_departments, departments_table_exists, ensure_schema, get_version, test_connection,
};
