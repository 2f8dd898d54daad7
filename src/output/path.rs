//! Output path template expansion
//!
//! A user-supplied template names the destination file with literal tokens
//! expanded from the export parameters:
//!
//! | Token | Expansion |
//! |-------|-----------|
//! | `@c@` | currency code |
//! | `@Y@` | 4-digit year |
//! | `@y@` | 2-digit year |
//! | `@m@` | zero-padded month |
//! | `@t@` | format type (`csv` / `pdf`) |
//!
//! Unknown tokens are left verbatim. Expansion is pure and idempotent; the
//! parent directory is created separately via [`ensure_parent_dir`] before
//! any writer opens the file.

use std::path::{Path, PathBuf};

use super::{OutputError, OutputResult};

/// Expand a path template with the export parameters
///
/// # Arguments
/// * `template` - Path template, e.g. `"export_@Y@-@m@_@c@.@t@"`
/// * `currency` - ISO currency code
/// * `year` - Calendar year
/// * `month` - Calendar month (1-12)
/// * `kind` - Format type token (`"csv"` or `"pdf"`)
pub fn resolve_template(
    template: &str,
    currency: &str,
    year: i32,
    month: u32,
    kind: &str,
) -> PathBuf {
    let expanded = template
        .replace("@c@", currency)
        .replace("@Y@", &format!("{year:04}"))
        .replace("@y@", &format!("{:02}", year.rem_euclid(100)))
        .replace("@m@", &format!("{month:02}"))
        .replace("@t@", kind);

    PathBuf::from(expanded)
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::IoError(format!(
                    "failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
