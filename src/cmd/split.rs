use crate::executor;
use crate::executor::SplitSummary;
use crate::plan::{SplitConfig, SplitPlan};
use crate::utils::display_bytes;
use anyhow::Context;
use byte_unit::Byte;
use std::path::Path;
use tracing::info;

pub fn split(source: &Path, dest_dir: &Path, chunk_size: Byte) -> anyhow::Result<SplitSummary> {
    let config = SplitConfig::new(chunk_size.as_u64())?;

    let metadata = std::fs::metadata(source)
        .with_context(|| format!("Failed to read source file {source:?}"))?;
    let source_size = metadata.len();

    info!("Source size: {:#.1}", display_bytes(source_size));
    info!("Chunk size : {:#.1}", display_bytes(config.chunk_size()));

    let plan = SplitPlan::compute(source_size, config);
    info!(
        "Planned {} chunks covering {:#.1}",
        plan.len(),
        display_bytes(plan.total_size())
    );

    let summary = executor::execute(&plan, source, dest_dir)?;
    info!(
        "Wrote {} chunks ({:#.1}) to {}",
        summary.chunk_count,
        display_bytes(summary.bytes_written),
        dest_dir.display()
    );
    Ok(summary)
}
