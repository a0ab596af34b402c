//! Domain layer for the grid engine.
//!
//! Core data types with no dependency on rendering or interaction state.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`field`]: Column definitions and field type tags
//! - [`row`]: Row records, path lookup, and row identity
//!
//! # Examples
//!
//! ```
//! use gridview::domain::{FieldDefinition, FieldType, Result};
//!
//! fn leave_columns() -> Result<Vec<FieldDefinition>> {
//!     Ok(vec![
//!         FieldDefinition::new("employee.name", "Employee").freezed(),
//!         FieldDefinition::new("status", "Status").with_type(FieldType::Dropdown).sortable(),
//!     ])
//! }
//! ```

pub mod error;
pub mod field;
pub mod row;

pub use error::{GridError, Result};
pub use field::{ColumnWidth, FieldDefinition, FieldType};
pub use row::{
    is_blank, is_truthy, resolve_path, value_to_date, value_to_number, value_to_text, Row,
    RowKey, RowKeyFn,
};
