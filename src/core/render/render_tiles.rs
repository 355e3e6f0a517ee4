use rayon::prelude::*;

use crate::core::render::ports::pixel_kernel::PixelKernel;
use crate::core::render::tile_job::{TileJob, TilePatch};

/// Runs a batch of tile jobs on rayon's work-stealing pool and joins the
/// results. The call returns only once every job has finished. Patches come
/// back in job order; the first failure wins and discards the rest of the
/// batch.
pub fn render_tiles<K>(jobs: Vec<TileJob<K>>) -> Result<Vec<TilePatch>, K::Failure>
where
    K: PixelKernel + Send,
    K::Failure: Send,
{
    jobs.into_par_iter().map(|job| job.run()).collect()
}
