use thiserror::Error;

use crate::heap::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Extraction (or peeking) on a heap whose `heap_size` is zero.
    #[error("heap underflow")]
    Underflow,
    #[error("invalid key {key} at index {index}: new key is smaller than current key {current}")]
    InvalidKey { index: usize, current: Key, key: Key },
}
