//! Column-parallel fill of dense column-major buffers.

use rayon::prelude::*;


/// Buffers with fewer elements than this are filled on the calling thread.
/// A typical fitting ROI (tens to hundreds of pixels) never reaches it.
pub const PARALLEL_MIN_LEN: usize = 1 << 14;

/// Multiplier for number of chunks relative to CPU threads.
const CHUNKS_PER_THREAD: usize = 3;

#[inline]
fn columns_per_chunk(num_columns: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (num_columns / num_chunks).max(1)
}

/// Calls `f(column_index, column)` for every `column_len`-long column of `data`.
///
/// Each column is handed to exactly one call, so the result does not depend on
/// whether the work ran on the rayon pool or inline. Empty buffers and a zero
/// `column_len` are no-ops.
pub fn for_each_column<T, F>(data: &mut [T], column_len: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if data.is_empty() || column_len == 0 {
        return;
    }
    debug_assert_eq!(
        data.len() % column_len,
        0,
        "buffer length must be a multiple of column_len"
    );

    if data.len() < PARALLEL_MIN_LEN {
        for (c, column) in data.chunks_mut(column_len).enumerate() {
            f(c, column);
        }
        return;
    }

    let per_chunk = columns_per_chunk(data.len() / column_len);
    data.par_chunks_mut(per_chunk * column_len)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let first = chunk_idx * per_chunk;
            for (i, column) in chunk.chunks_mut(column_len).enumerate() {
                f(first + i, column);
            }
        });
}
