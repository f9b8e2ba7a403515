//! # Reserved Columns
//!
//! Some storage backends keep bookkeeping columns of their own next to user data
//! (`_id`, `_version`, `rowid`, ...). A record carrying a key with one of those
//! names cannot be written as is, so before insert every colliding key is renamed
//! by appending a trailing underscore.
//!
//! A key collides when it is one of [`RESERVED_COLUMNS`] followed by zero or more
//! underscores. Suffixed names are renamed too (`_id_` becomes `_id__`), which keeps
//! a record holding both `_id` and `_id_` free of duplicate keys after the rename.
//!
//! ## Example
//!
//! ```
//! use reserved_columns::fix_reserved_columns;
//! use serde_json::json;
//!
//! let record = json!({"name": "a", "_id": 5});
//! let record = record.as_object().cloned().unwrap();
//!
//! let fixed = fix_reserved_columns(record);
//! assert_eq!(serde_json::Value::Object(fixed), json!({"name": "a", "_id_": 5}));
//! ```
//!
//! The rename is not idempotent: running a record through twice appends two
//! underscores. Callers sanitize once, right before the record is persisted.

pub mod errors;
pub mod json;
pub mod record;
pub mod reserved;

pub use errors::SanitizeError;
pub use json::{
    fix_reserved_columns_in_rows, fix_reserved_columns_in_value,
    fix_reserved_columns_in_value_with_count,
};
pub use record::{fix_reserved_columns, fix_reserved_columns_with_count, KeyedRecord};
pub use reserved::{fix_key, is_reserved_column, RESERVED_COLUMNS, RESERVED_SUFFIX};
