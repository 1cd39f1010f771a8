/// Command dispatch: routes parsed arguments to their implementation.
pub mod summary;

use crate::cli::{Cli, OutputCtx};
use crate::manifest::ManifestError;

/// Dispatch parsed CLI arguments.
///
/// # Errors
///
/// Returns `ManifestError` on any command failure.
pub fn dispatch(cli: &Cli, ctx: &OutputCtx) -> Result<(), ManifestError> {
    summary::run(cli.package.as_deref(), cli.deps, ctx)
}
