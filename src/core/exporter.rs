//! Writes the bound document to disk under a normalized file name.

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::slug;
use crate::utils::io;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOutcome {
    pub file_name: String,
    pub path: String,
    pub bytes: usize,
}

/// Write `document` into `out_dir` as `<normalized-name>.html`.
///
/// The file name derives from the display name through [`slug::normalize`].
/// Names that normalize to nothing are rejected rather than producing a
/// bare `.html` file.
pub fn export(document: &str, display_name: &str, out_dir: &Path) -> Result<ExportOutcome> {
    let stem = slug::normalize(display_name);
    if stem.is_empty() {
        return Err(Error::validation_invalid_argument(
            "name",
            "Name must contain at least one letter or number",
            Some(display_name.to_string()),
            None,
        ));
    }

    let file_name = format!("{}.html", stem);
    let path = out_dir.join(&file_name);
    io::write_file(&path, document, "write signature")?;

    Ok(ExportOutcome {
        file_name,
        path: path.display().to_string(),
        bytes: document.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn export_writes_normalized_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = export("<html></html>", "Çağrı Güngör", dir.path()).unwrap();

        assert_eq!(outcome.file_name, "cagri-gungor.html");
        let written = fs::read_to_string(dir.path().join("cagri-gungor.html")).unwrap();
        assert_eq!(written, "<html></html>");
    }

    #[test]
    fn export_reports_byte_count() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = export("abcd", "Ayşe Kaya", dir.path()).unwrap();
        assert_eq!(outcome.bytes, 4);
    }

    #[test]
    fn export_rejects_name_with_no_usable_characters() {
        let dir = tempfile::tempdir().unwrap();
        let err = export("<html></html>", "!!!", dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_argument");
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        export("first", "Ayşe Kaya", dir.path()).unwrap();
        export("second", "Ayşe Kaya", dir.path()).unwrap();

        let written = fs::read_to_string(dir.path().join("ayse-kaya.html")).unwrap();
        assert_eq!(written, "second");
    }

    #[test]
    fn export_fails_for_missing_directory() {
        let err = export("x", "Ayşe Kaya", Path::new("/nonexistent/dir")).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
