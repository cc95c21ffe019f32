//! Process-wide, read-only localization table.
//!
//! Display summaries pull their list separator and unit labels from here. A
//! host application may [`install`] a replacement table (JSON object of
//! string key/value pairs) once at startup, before any lookup; after first
//! use the table is frozen. Missing keys fall back to the built-in English
//! table, and missing built-in keys fall back to the key itself, so summary
//! rendering can never fail.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
struct StringTable(HashMap<String, String>);

static INSTALLED: OnceCell<StringTable> = OnceCell::new();
static BUILTIN: OnceCell<StringTable> = OnceCell::new();

const BUILTIN_JSON: &str = include_str!("strings/en.json");

/// Failure to install a replacement string table.
#[derive(Error, Debug)]
pub enum InstallError {
    /// The table document was not a JSON object of strings.
    #[error("invalid string table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A table has already been installed (or defaulted) for this process.
    #[error("a string table is already installed")]
    AlreadyInstalled,
}

fn builtin() -> &'static StringTable {
    BUILTIN.get_or_init(|| serde_json::from_str(BUILTIN_JSON).unwrap_or_default())
}

/// Installs a replacement string table from a JSON object document.
///
/// May be called at most once per process, before summaries are rendered.
pub fn install(json: &str) -> Result<(), InstallError> {
    let table: StringTable = serde_json::from_str(json)?;
    INSTALLED
        .set(table)
        .map_err(|_| InstallError::AlreadyInstalled)
}

/// Looks up a display string, falling back to the built-in English table and
/// finally to the key itself.
pub fn lookup(key: &str) -> &str {
    if let Some(value) = INSTALLED.get().and_then(|table| table.0.get(key)) {
        return value;
    }
    match builtin().0.get(key) {
        Some(value) => value,
        None => key,
    }
}

/// The locale-aware separator placed between summary fragments.
pub fn list_separator() -> &'static str {
    match INSTALLED.get().and_then(|table| table.0.get("list-separator")) {
        Some(value) => value,
        None => builtin()
            .0
            .get("list-separator")
            .map(String::as_str)
            .unwrap_or(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_provides_the_separator() {
        assert_eq!(list_separator(), ", ");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key_itself() {
        assert_eq!(lookup("no-such-key"), "no-such-key");
    }

    #[test]
    fn builtin_units_are_present() {
        assert_eq!(lookup("unit.kilograms"), " kg");
        assert_eq!(lookup("unit.mmol-per-l"), " mmol/L");
    }
}
