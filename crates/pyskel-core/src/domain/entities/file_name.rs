use crate::domain::error::DomainError;

/// Source/test file names derived from one logical file name.
///
/// Invariants:
/// - `source_name` always ends with the extension.
/// - `test_name == "test_" + source_name`.
/// - `stem` is `source_name` without the extension and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNamePair {
    source_name: String,
    test_name: String,
    stem: String,
}

impl FileNamePair {
    /// Derive the pair for `logical`, adding `extension` unless already present.
    ///
    /// `derive("foo", ".py")` and `derive("foo.py", ".py")` are identical.
    pub fn derive(logical: &str, extension: &str) -> Result<Self, DomainError> {
        if logical.is_empty() {
            return Err(DomainError::InvalidName {
                name: logical.into(),
                reason: "name cannot be empty",
            });
        }
        if logical.contains('/') || logical.contains('\\') {
            return Err(DomainError::InvalidName {
                name: logical.into(),
                reason: "name cannot contain path separators",
            });
        }

        let source_name = if logical.ends_with(extension) {
            logical.to_string()
        } else {
            format!("{logical}{extension}")
        };

        let stem = source_name[..source_name.len() - extension.len()].to_string();
        if stem.is_empty() {
            return Err(DomainError::InvalidName {
                name: logical.into(),
                reason: "name has nothing before the extension",
            });
        }

        Ok(Self {
            test_name: format!("test_{source_name}"),
            source_name,
            stem,
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }
}
