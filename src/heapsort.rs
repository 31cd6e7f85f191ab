use crate::heap::HeapCapable;

/// Sorts `heap` ascending in place. Not stable.
///
/// Leaves `heap_size` at zero: the whole array is the sorted tail afterwards.
pub fn heap_sort(heap: &mut HeapCapable) {
    debug!("heap sort over {} keys", heap.len());
    heap.build_max_heap();
    for i in (1..heap.len()).rev() {
        // heap[..=i] is a max-heap, heap[i+1..] is sorted
        heap.swap(0, i);
        heap.set_heap_size(i);
        heap.max_heapify(0);
    }
    heap.set_heap_size(0);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::heap_sort;
    use crate::heap::HeapCapable;

    fn sort(v: Vec<i64>) -> Vec<i64> {
        let mut heap = HeapCapable::new(v);
        heap_sort(&mut heap);
        assert_eq!(heap.heap_size(), 0);
        heap.into_vec()
    }

    #[test]
    fn sorts_duplicates() {
        assert_eq!(sort(vec![3, 1, 2, 1, 3, 0]), vec![0, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn empty_array() {
        assert_eq!(sort(vec![]), Vec::<i64>::new());
    }

    #[test]
    fn single_element() {
        assert_eq!(sort(vec![77]), vec![77]);
    }

    #[test]
    fn two_elements() {
        assert_eq!(sort(vec![8, 3]), vec![3, 8]);
    }

    #[test]
    fn already_sorted() {
        assert_eq!(sort(vec![1, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_sorted() {
        assert_eq!(
            sort(vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn extremes() {
        assert_eq!(
            sort(vec![i64::MAX, -1, i64::MIN, 0]),
            vec![i64::MIN, -1, 0, i64::MAX]
        );
    }

    #[test]
    fn ignores_previous_heap_size() {
        let mut heap = HeapCapable::new(vec![4, 2, 9, 1]);
        heap.set_heap_size(1);
        heap.heap_sort();
        assert_eq!(heap.as_slice(), &[1, 2, 4, 9]);
        assert_eq!(heap.heap_size(), 0);
    }

    proptest! {
        #[test]
        fn sorts_like_std(v in proptest::collection::vec(any::<i64>(), 0..500)) {
            let mut expected = v.clone();
            expected.sort_unstable();
            prop_assert_eq!(sort(v), expected);
        }
    }
}
