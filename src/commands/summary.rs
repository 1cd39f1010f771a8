/// Locate a manifest and print its summary.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::output::write_summary;
use crate::manifest::{ManifestError, locate};
use crate::types::SummaryOutput;

/// Run `peerscope [PACKAGE] [--deps]`.
///
/// # Errors
///
/// Returns `ManifestError` when no manifest is found or the working
/// directory is unavailable.
pub fn run(package: Option<&str>, deps: bool, ctx: &OutputCtx) -> Result<(), ManifestError> {
    let t_locate = ctx.timer("locate");
    let found = locate(package, &mut |path: &Path| ctx.probe(path))?;
    drop(t_locate);

    let _t_render = ctx.timer("render");
    let summary = SummaryOutput::from_located(&found, deps);
    write_summary(&summary, ctx);
    Ok(())
}
