/// Errors from the manifest lookup layer.
use thiserror::Error;

/// Errors that can end a manifest lookup.
///
/// Unreadable or malformed candidate files are not errors; the locator skips
/// them. Only the overall outcome is reported here.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No package name was given and `./package.json` is missing or unusable.
    #[error("Package.json not found in current directory")]
    CurrentDirNotFound,

    /// No candidate location held a usable manifest for the named package.
    #[error("Package '{name}' not found.")]
    PackageNotFound {
        /// The requested package name.
        name: String,
    },

    /// The current working directory could not be determined.
    #[error("Cannot determine current directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

/// Exit code mapping for `ManifestError` variants.
impl ManifestError {
    /// Return the CLI exit code for this error.
    ///
    /// A failed lookup is reported on stderr but is not a process failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CurrentDirNotFound | Self::PackageNotFound { .. } => 0,
            Self::WorkingDir(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ManifestError::CurrentDirNotFound.to_string(),
            "Package.json not found in current directory"
        );
        let err = ManifestError::PackageNotFound {
            name: "@itwin/core-common".to_owned(),
        };
        assert_eq!(err.to_string(), "Package '@itwin/core-common' not found.");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ManifestError::CurrentDirNotFound.exit_code(), 0);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ManifestError::from(io).exit_code(), 1);
    }
}
