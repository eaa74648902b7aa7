use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use svcpatch::patch::{patch_file, PatchOutcome, Rewrite};

/// The service sources touched by the response.hash -> response.id rename,
/// patched in this order.
const SERVICE_FILES: [&str; 3] = [
    "Blendv3/Services/PoolService.swift",
    "Blendv3/Services/BackstopContractService.swift",
    "Blendv3/Services/BlendOracleService.swift",
];

const REWRITE: Rewrite = Rewrite::new("response.hash", "response.id");

fn main() -> Result<()> {
    svcpatch::init_logging().context("Failed to initialize logging")?;

    info!("Patching {} service files", SERVICE_FILES.len());

    for service_file in SERVICE_FILES {
        let outcome = patch_file(Path::new(service_file), &REWRITE)
            .with_context(|| format!("Failed to patch {}", service_file))?;

        if outcome == PatchOutcome::Updated {
            println!("Updated {}", service_file);
        }
    }

    println!("All services updated!");

    Ok(())
}
