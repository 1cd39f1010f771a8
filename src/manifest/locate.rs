/// Manifest lookup: find the `package.json` a query refers to.
///
/// Lookup strategy:
///
/// 1. **No package name**: read `package.json` in the starting directory only.
/// 2. **Package name**: at each directory level, from the starting directory up
///    to the filesystem root, try every entry of [`CANDIDATE_PREFIXES`] in order.
///    The first usable manifest wins, so shallower levels beat deeper ones and
///    earlier candidates beat later ones at the same level.
///
/// A candidate that is missing, unreadable or malformed is skipped silently.
use std::env;
use std::path::{Path, PathBuf};

use super::errors::ManifestError;
use super::model::Manifest;
use super::read::{MANIFEST_FILE_NAME, read_manifest};

/// Relative directories (joined before the package name) probed at every level.
///
/// Covers the package itself, a plain `node_modules` install, the `@itwin` and
/// `@bentley` scopes, and the same three inside the pnpm hoisted store.
pub const CANDIDATE_PREFIXES: [&[&str]; 7] = [
    &[],
    &["node_modules"],
    &["node_modules", "@itwin"],
    &["node_modules", "@bentley"],
    &["node_modules", ".pnpm", "node_modules"],
    &["node_modules", ".pnpm", "node_modules", "@itwin"],
    &["node_modules", ".pnpm", "node_modules", "@bentley"],
];

/// A manifest together with the absolute path it was read from.
#[derive(Debug, Clone)]
pub struct Located {
    pub manifest: Manifest,
    pub path: PathBuf,
}

/// Locate a manifest starting from the current working directory.
///
/// `probe` is called with every path that is about to be read. Without a
/// package name, an unavailable working directory still reads `./package.json`
/// (the returned path is then relative).
///
/// # Errors
///
/// - `ManifestError::WorkingDir`: a package name was given and the current
///   directory is unavailable, so there is nothing to walk up from
/// - `ManifestError::CurrentDirNotFound`: no name given and no usable `./package.json`
/// - `ManifestError::PackageNotFound`: no candidate matched up to the root
pub fn locate(
    package: Option<&str>,
    probe: &mut dyn FnMut(&Path),
) -> Result<Located, ManifestError> {
    match (env::current_dir(), package) {
        (Ok(cwd), _) => locate_from(&cwd, package, probe),
        (Err(_), None) => locate_from(Path::new("."), None, probe),
        (Err(err), Some(_)) => Err(ManifestError::WorkingDir(err)),
    }
}

/// Locate a manifest starting from `start`.
///
/// `start` should be absolute; the returned path is built by joining onto it.
///
/// # Errors
///
/// Same as [`locate`], minus `WorkingDir`.
pub fn locate_from(
    start: &Path,
    package: Option<&str>,
    probe: &mut dyn FnMut(&Path),
) -> Result<Located, ManifestError> {
    let Some(name) = package else {
        let path = start.join(MANIFEST_FILE_NAME);
        probe(&path);
        return read_manifest(&path)
            .map(|manifest| Located { manifest, path })
            .ok_or(ManifestError::CurrentDirNotFound);
    };

    let mut dir = Some(start);
    while let Some(current) = dir {
        for prefix in CANDIDATE_PREFIXES {
            let path = candidate_path(current, prefix, name);
            probe(&path);
            if let Some(manifest) = read_manifest(&path) {
                return Ok(Located { manifest, path });
            }
        }
        dir = current.parent();
    }

    Err(ManifestError::PackageNotFound {
        name: name.to_owned(),
    })
}

fn candidate_path(dir: &Path, prefix: &[&str], name: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    path.extend(prefix);
    path.push(name);
    path.push(MANIFEST_FILE_NAME);
    path
}
