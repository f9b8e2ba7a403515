//! String-keyed records and the rename pass over them.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};
use tracing::debug;

use crate::reserved::{fix_key, is_reserved_column};

/// A record whose columns are keyed by name.
///
/// The rename consumes the record into `(key, value)` pairs and rebuilds it from them,
/// so implementors are also expected to be `IntoIterator` and `FromIterator` over
/// those pairs. Values are moved through untouched.
pub trait KeyedRecord {
    fn column_names(&self) -> impl Iterator<Item = &str>;

    fn column_count(&self) -> usize {
        self.column_names().count()
    }
}

impl KeyedRecord for Map<String, Value> {
    fn column_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

impl<V, S> KeyedRecord for HashMap<String, V, S>
where
    S: BuildHasher + Default,
{
    fn column_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

impl<V> KeyedRecord for BTreeMap<String, V> {
    fn column_names(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

impl<V> KeyedRecord for Vec<(String, V)> {
    fn column_names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key.as_str())
    }

    fn column_count(&self) -> usize {
        self.len()
    }
}

/// Renames every key of `record` that collides with a reserved column.
///
/// Returns `record` itself when nothing collides, so the common case costs a single
/// scan over the keys and no allocation. Otherwise the record is rebuilt in its
/// original iteration order with each colliding key suffixed once.
///
/// The rename never merges two columns: a suffixed key is again reserved, so it is
/// itself renamed whenever it shares a record with its shorter form.
pub fn fix_reserved_columns<R, V>(record: R) -> R
where
    R: KeyedRecord + IntoIterator<Item = (String, V)> + FromIterator<(String, V)>,
{
    fix_reserved_columns_with_count(record).0
}

/// Same as [`fix_reserved_columns`], also returning how many keys were renamed.
pub fn fix_reserved_columns_with_count<R, V>(record: R) -> (R, usize)
where
    R: KeyedRecord + IntoIterator<Item = (String, V)> + FromIterator<(String, V)>,
{
    if !record.column_names().any(is_reserved_column) {
        return (record, 0);
    }

    let column_count = record.column_count();
    let mut renamed = 0usize;
    let fixed: R = record
        .into_iter()
        .map(|(key, value)| {
            if is_reserved_column(&key) {
                renamed += 1;
            }
            (fix_key(key), value)
        })
        .collect();

    debug_assert_eq!(fixed.column_count(), column_count);
    debug!(renamed, "Renamed reserved columns");

    (fixed, renamed)
}
