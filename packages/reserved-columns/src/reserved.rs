/// Column names the storage layer reserves for its own bookkeeping.
///
/// Exported so callers validating their own schemas can check against the same list.
pub const RESERVED_COLUMNS: [&str; 5] = ["_id", "_item", "_version", "_commit", "rowid"];

/// Character appended to a reserved key to move it out of the way.
pub const RESERVED_SUFFIX: char = '_';

/// Checks if a key collides with a reserved column name.
///
/// A key collides when it is exactly one of [`RESERVED_COLUMNS`], optionally followed
/// by any number of [`RESERVED_SUFFIX`] characters. The comparison is anchored on both
/// ends and case sensitive, so `_idx`, `my_id` and `_ID` do not collide.
pub fn is_reserved_column(key: &str) -> bool {
    // None of the reserved names end with the suffix, so stripping every trailing
    // suffix char leaves the base name for both `_id` and `_id___`.
    let base = key.trim_end_matches(RESERVED_SUFFIX);
    RESERVED_COLUMNS.contains(&base)
}

/// Returns the key under which a column is stored.
///
/// Colliding keys gain exactly one trailing [`RESERVED_SUFFIX`], anything else is
/// returned untouched.
pub fn fix_key(mut key: String) -> String {
    if is_reserved_column(&key) {
        key.push(RESERVED_SUFFIX);
    }
    key
}
