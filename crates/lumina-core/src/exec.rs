//! Row-level execution strategy shared by all pixel transforms.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How a transform walks the rows of its output buffer.
///
/// Every transform reads only from an immutable source, so both
/// strategies produce bit-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Execution {
    /// One row after another on the calling thread.
    Sequential,
    /// Rows distributed over the rayon thread pool.
    #[default]
    Parallel,
}

impl Execution {
    pub fn from_parallel_flag(parallel: bool) -> Self {
        if parallel {
            Self::Parallel
        } else {
            Self::Sequential
        }
    }

    /// Run `f(y, row)` for every `stride`-sized row of `data`.
    pub fn for_each_row<F>(self, data: &mut [u8], stride: usize, f: F)
    where
        F: Fn(usize, &mut [u8]) + Send + Sync,
    {
        if stride == 0 {
            return;
        }
        match self {
            Self::Sequential => data
                .chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row)),
            Self::Parallel => data
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row)),
        }
    }
}
