/// Serializable output types.
///
/// These are what gets written for the JSON formats. They are decoupled from
/// the internal `Manifest` so field absence is explicit in the output.
use serde::{Deserialize, Serialize};

use crate::manifest::{DependencyEntry, Located, ManifestError};

/// Summary of a located manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    /// Package name, or null when the manifest has no usable name.
    pub name: Option<String>,
    /// Absolute path of the manifest file.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The `type` field (e.g., "module").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    /// `repository.url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Peer dependencies in declaration order.
    pub peer_dependencies: Vec<DependencyOutput>,
    /// Regular dependencies; only present when requested with `--deps`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<DependencyOutput>>,
}

/// One dependency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyOutput {
    pub name: String,
    pub range: String,
}

impl From<DependencyEntry> for DependencyOutput {
    fn from(entry: DependencyEntry) -> Self {
        Self {
            name: entry.name,
            range: entry.range,
        }
    }
}

impl SummaryOutput {
    /// Build the summary for a located manifest.
    #[must_use]
    pub fn from_located(found: &Located, include_dependencies: bool) -> Self {
        let m = &found.manifest;
        let convert = |entries: Vec<DependencyEntry>| -> Vec<DependencyOutput> {
            entries.into_iter().map(DependencyOutput::from).collect()
        };
        Self {
            name: m.display_name(),
            path: found.path.display().to_string(),
            version: m.version().map(str::to_owned),
            module_type: m.module_type().map(str::to_owned),
            repository: m.repository_url().map(str::to_owned),
            peer_dependencies: convert(m.peer_dependencies()),
            dependencies: include_dependencies.then(|| convert(m.dependencies())),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The requested package, for lookups by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

impl ErrorOutput {
    /// Construct from a `ManifestError`.
    #[must_use]
    pub fn from_manifest_error(err: &ManifestError) -> Self {
        let (code, package) = match err {
            ManifestError::CurrentDirNotFound => ("manifest_not_found", None),
            ManifestError::PackageNotFound { name } => ("package_not_found", Some(name.clone())),
            ManifestError::WorkingDir(_) => ("working_dir_error", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                package,
            },
        }
    }
}
