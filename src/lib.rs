#[macro_use]
extern crate log;

mod error;
pub mod heap;
mod heapsort;

pub use crate::error::HeapError;
pub use crate::heap::{left, parent, right, HeapCapable, Key};
pub use crate::heapsort::heap_sort;
