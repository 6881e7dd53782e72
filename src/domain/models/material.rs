//! Teaching Material Domain Model
//!
//! Files uploaded by a teacher for one of their courses.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::ids::{CourseId, MaterialId, UserId};
use crate::shared::errors::DomainError;

lazy_static! {
    static ref UNSAFE_FILENAME_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.-]").expect("valid regex");
}

/// Reduce a client-supplied file name to a safe, flat ASCII name.
///
/// Compatibility decomposition (NFKD) runs first so accented letters keep
/// their base letter. Path separators become spaces, whitespace runs become a single `_`,
/// anything outside `[A-Za-z0-9_.-]` is dropped and leading/trailing
/// dots and underscores are stripped, so `../../etc/passwd` becomes
/// `etc_passwd`.
///
/// # Errors
///
/// Returns `DomainError::InvalidFileName` if nothing usable is left.
pub fn secure_filename(raw: &str) -> Result<String, DomainError> {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let without_separators = ascii.replace(['/', '\\'], " ");
    let joined = without_separators.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        return Err(DomainError::InvalidFileName(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Data required to record an uploaded material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaterial {
    pub course_id: CourseId,
    pub file_name: String,
    pub stored_path: String,
    pub size_bytes: i64,
    pub uploaded_by: UserId,
}

/// Material domain entity
#[derive(Debug, Clone)]
pub struct Material {
    id: MaterialId,
    course_id: CourseId,
    file_name: String,
    stored_path: String,
    size_bytes: i64,
    uploaded_by: UserId,
    uploaded_at: DateTime<Utc>,
}

impl Material {
    /// Restore a Material from persisted data
    #[must_use]
    pub fn restore(
        id: MaterialId,
        course_id: CourseId,
        file_name: String,
        stored_path: String,
        size_bytes: i64,
        uploaded_by: UserId,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_id,
            file_name,
            stored_path,
            size_bytes,
            uploaded_by,
            uploaded_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn stored_path(&self) -> &str {
        &self.stored_path
    }

    #[must_use]
    pub fn size_bytes(&self) -> i64 {
        self.size_bytes
    }

    #[must_use]
    pub fn uploaded_by(&self) -> UserId {
        self.uploaded_by
    }

    #[must_use]
    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_filename_keeps_simple_names() {
        assert_eq!(secure_filename("test_material.txt").unwrap(), "test_material.txt");
    }

    #[test]
    fn test_secure_filename_collapses_whitespace() {
        assert_eq!(secure_filename("My cool   movie.mov").unwrap(), "My_cool_movie.mov");
    }

    #[test]
    fn test_secure_filename_strips_traversal() {
        assert_eq!(secure_filename("../../../etc/passwd").unwrap(), "etc_passwd");
        assert_eq!(secure_filename("..\\windows\\system32.dll").unwrap(), "windows_system32.dll");
    }

    #[test]
    fn test_secure_filename_folds_accents() {
        assert_eq!(secure_filename("résumé.pdf").unwrap(), "resume.pdf");
        assert_eq!(secure_filename("Ångström notes.txt").unwrap(), "Angstrom_notes.txt");
        assert_eq!(secure_filename("ﬁle.txt").unwrap(), "file.txt");
    }

    #[test]
    fn test_secure_filename_rejects_empty_result() {
        assert!(secure_filename("").is_err());
        assert!(secure_filename("../..").is_err());
        assert!(secure_filename("文件").is_err());
    }
}
