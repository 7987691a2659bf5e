use crate::chunk::ChunkTask;
use crate::error::SplitError;
use crate::plan::SplitPlan;
use crate::progress::progress_parallel_collect;
use anyhow::{anyhow, Context};
use itertools::Itertools;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use std::path::Path;
use std::thread::available_parallelism;
use tracing::{debug, info};

// Chunk tasks spend most of their time blocked on disk, so the pool is
// oversubscribed relative to the core count.
pub const IO_WORKERS_PER_CORE: usize = 4;

#[derive(Debug, Default, Eq, PartialEq)]
pub struct SplitSummary {
    pub chunk_count: usize,
    pub bytes_written: u64,
}

/// Writes every chunk of the plan on a bounded worker pool and waits for all
/// of them. All tasks run to completion even when a sibling fails; the first
/// error in chunk index order wins.
pub fn execute(plan: &SplitPlan, source: &Path, dest_dir: &Path) -> anyhow::Result<SplitSummary> {
    if plan.is_empty() {
        info!("Nothing to split, no chunks planned");
        return Ok(SplitSummary::default());
    }

    let source_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("Invalid source file name: {source:?}"))?;

    let tasks = plan
        .chunks()
        .iter()
        .map(|spec| ChunkTask::new(spec, source, source_name, dest_dir))
        .collect_vec();

    let workers = worker_count(tasks.len());
    debug!("Using {workers} workers for {} chunks", tasks.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("Failed to build worker pool")?;

    // An indexed collect keeps the results in chunk order, so the scan below
    // reports the lowest failing index regardless of completion order.
    let results: Vec<Result<u64, SplitError>> = pool.install(|| {
        progress_parallel_collect("Writing chunks", tasks.par_iter().map(ChunkTask::write))
    });

    let mut bytes_written = 0;
    let mut first_error = None;
    for result in results {
        match result {
            Ok(written) => bytes_written += written,
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }
    if let Some(error) = first_error {
        return Err(error.into());
    }

    Ok(SplitSummary {
        chunk_count: tasks.len(),
        bytes_written,
    })
}

fn worker_count(task_count: usize) -> usize {
    let max_workers = available_parallelism().map_or(1, NonZeroUsize::get) * IO_WORKERS_PER_CORE;
    task_count.min(max_workers)
}
