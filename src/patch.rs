use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{map_io_err, PatchResult};

/// A single literal rewrite applied to file contents
///
/// Plain substring semantics: every non-overlapping occurrence of `from` is
/// replaced by `to`, scanning left to right. No regex, no word boundaries,
/// no case folding, so `response.hashes` becomes `response.ides`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub from: &'static str,
    pub to: &'static str,
}

impl Rewrite {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Apply the rewrite to a content string, returning the new content
    pub fn apply(&self, content: &str) -> String {
        content.replace(self.from, self.to)
    }
}

/// What happened to a single path during a patch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// File existed and was rewritten (even if nothing matched)
    Updated,
    /// Path was absent on disk, nothing was touched
    Skipped,
}

/// Patch a single file in place
///
/// A missing path is a silent skip, not an error. An existing file is always
/// read in full, rewritten in full, and reported as `Updated`, whether or not
/// the rewrite matched anything. The write overwrites the file directly with
/// no rename-swap or backup, so a failure mid-run leaves earlier files
/// already patched.
pub fn patch_file(path: &Path, rewrite: &Rewrite) -> PatchResult<PatchOutcome> {
    if !path.exists() {
        debug!("Skipping missing file: {}", path.display());
        return Ok(PatchOutcome::Skipped);
    }

    let content = fs::read_to_string(path).map_err(map_io_err(path))?;
    let patched = rewrite.apply(&content);
    fs::write(path, &patched).map_err(map_io_err(path))?;

    info!(
        "Patched {} ({} -> {})",
        path.display(),
        rewrite.from,
        rewrite.to
    );
    Ok(PatchOutcome::Updated)
}
