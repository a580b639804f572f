use rayon::prelude::*;

use crate::{
    compose::composer::{Choreography, FrameSnapshot},
    foundation::error::{ChoreoError, ChoreoResult},
};

/// Options controlling batch frame sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SampleOpts {
    /// Evaluate frames on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// `steps + 1` evenly spaced progress values covering `[from, to]` inclusive.
pub fn progress_range(from: f64, to: f64, steps: usize) -> ChoreoResult<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        return Err(ChoreoError::validation("progress range bounds must be finite"));
    }
    if steps == 0 {
        return Ok(vec![from]);
    }
    let step = (to - from) / steps as f64;
    Ok((0..=steps)
        .map(|i| if i == steps { to } else { from + step * i as f64 })
        .collect())
}

/// Evaluate many progress values into snapshots, preserving input order.
///
/// Stages are pure, so parallel and serial sampling produce identical output.
#[tracing::instrument(skip(choreo, progresses), fields(frames = progresses.len()))]
pub fn sample_frames(
    choreo: &Choreography,
    progresses: &[f64],
    opts: SampleOpts,
) -> ChoreoResult<Vec<FrameSnapshot>> {
    if !opts.parallel {
        return Ok(progresses.iter().map(|&p| choreo.snapshot(p)).collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    Ok(pool.install(|| {
        progresses
            .par_iter()
            .map(|&p| choreo.snapshot(p))
            .collect()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> ChoreoResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ChoreoError::validation(
            "sample 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ChoreoError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/sample.rs"]
mod tests;
