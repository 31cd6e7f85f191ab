// Indices in a heap
//           0
//     1            2
//  3     4      5     6
// 7 8   9 10  11 12 13 14
//
// Only [0, heap_size) takes part in the heap, the rest of the storage is left alone.

use std::ops::{Index, IndexMut};

use crate::error::HeapError;

pub type Key = i64;

#[inline]
pub fn left(i: usize) -> usize {
    i.wrapping_mul(2).wrapping_add(1)
}

#[inline]
pub fn right(i: usize) -> usize {
    i.wrapping_mul(2).wrapping_add(2)
}

/// Returns `None` for the root.
#[inline]
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapCapable {
    data: Vec<Key>,
    heap_size: usize,
}

impl HeapCapable {
    pub fn new(data: Vec<Key>) -> Self {
        let heap_size = data.len();
        Self { data, heap_size }
    }

    pub fn heap_size(&self) -> usize {
        self.heap_size
    }

    pub fn set_heap_size(&mut self, heap_size: usize) {
        assert!(
            heap_size <= self.data.len(),
            "heap size {} exceeds array length {}",
            heap_size,
            self.data.len()
        );
        self.heap_size = heap_size;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.data
    }

    pub fn heap_slice(&self) -> &[Key] {
        &self.data[..self.heap_size]
    }

    pub fn into_vec(self) -> Vec<Key> {
        self.data
    }

    /// Appends to the backing storage without touching `heap_size`.
    pub fn push(&mut self, key: Key) {
        self.data.push(key);
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    pub fn is_max_heap(&self) -> bool {
        let n = self.heap_size;
        (1..n).all(|i| match parent(i) {
            Some(p) => self.data[i] <= self.data[p],
            None => true,
        })
    }

    // Ties keep the parent in place, then prefer the left child.
    pub fn max_heapify(&mut self, start: usize) {
        let end = self.heap_size;
        let mut i = start;
        while i < end {
            let mut largest = i;
            let l = left(i);
            let r = right(i);
            if l < end && self.data[l] > self.data[largest] {
                largest = l;
            }
            if r < end && self.data[r] > self.data[largest] {
                largest = r;
            }
            if largest == i {
                return;
            }
            trace!("sift down {} -> {}", i, largest);
            self.data.swap(largest, i);
            i = largest;
        }
    }

    pub fn build_max_heap(&mut self) {
        self.heap_size = self.data.len();
        for i in (0..self.heap_size / 2).rev() {
            self.max_heapify(i);
        }
    }

    pub fn heap_max(&self) -> Result<Key, HeapError> {
        if self.heap_size == 0 {
            return Err(HeapError::Underflow);
        }
        Ok(self.data[0])
    }

    pub fn heap_extract_max(&mut self) -> Result<Key, HeapError> {
        if self.heap_size < 1 {
            warn!("extract-max on empty heap");
            return Err(HeapError::Underflow);
        }
        let max = self.data[0];
        let last = self.heap_size - 1;
        self.data[0] = self.data[last];
        self.heap_size = last;
        self.max_heapify(0);
        debug!("extracted max {}, heap size now {}", max, self.heap_size);
        Ok(max)
    }

    /// Panics if `i` is outside the logical heap.
    pub fn heap_increase_key(&mut self, i: usize, key: Key) -> Result<(), HeapError> {
        assert!(
            i < self.heap_size,
            "index {} out of heap of size {}",
            i,
            self.heap_size
        );
        let current = self.data[i];
        if key < current {
            warn!("rejected key {} at {}: smaller than {}", key, i, current);
            return Err(HeapError::InvalidKey {
                index: i,
                current,
                key,
            });
        }
        self.data[i] = key;
        self.sift_up(i);
        Ok(())
    }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(p) = parent(i) {
            if self.data[p] >= self.data[i] {
                break;
            }
            trace!("sift up {} -> {}", i, p);
            self.data.swap(i, p);
            i = p;
        }
    }

    /// Reuses the slot at `heap_size` if there is one, otherwise grows the
    /// backing storage by one.
    pub fn max_heap_insert(&mut self, key: Key) {
        let i = self.heap_size;
        if i == self.data.len() {
            self.data.push(key);
        } else {
            self.data[i] = key;
        }
        self.heap_size += 1;
        debug!("insert {} at {}", key, i);
        self.sift_up(i);
    }

    pub fn heap_sort(&mut self) {
        crate::heapsort::heap_sort(self)
    }
}

impl From<Vec<Key>> for HeapCapable {
    fn from(data: Vec<Key>) -> Self {
        Self::new(data)
    }
}

impl FromIterator<Key> for HeapCapable {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for HeapCapable {
    type Output = Key;

    fn index(&self, i: usize) -> &Key {
        &self.data[i]
    }
}

impl IndexMut<usize> for HeapCapable {
    fn index_mut(&mut self, i: usize) -> &mut Key {
        &mut self.data[i]
    }
}
