use std::cmp::Ordering;
use std::marker::PhantomData;

// =============================================================================
// Ordering strategy
// =============================================================================

/// Ranking used by [`Heap`]. The element that compares `Greater` sits closer
/// to the root.
pub trait HeapOrder<T> {
    fn compare(a: &T, b: &T) -> Ordering;

    fn should_swap(parent: &T, child: &T) -> bool {
        Self::compare(parent, child) == Ordering::Less
    }
}

// =============================================================================
// Array-backed binary max-heap
// =============================================================================

pub struct Heap<T, Order> {
    items: Vec<T>,
    _order: PhantomData<Order>,
}

impl<T, Order: HeapOrder<T>> Heap<T, Order> {
    pub fn new() -> Self {
        Heap {
            items: Vec::new(),
            _order: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Heap {
            items: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Elements in array order, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Mutable view for changes that keep the relative ranking of every
    /// element intact. Anything else breaks the heap.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left_child(i: usize) -> usize {
        2 * i + 1
    }

    fn right_child(i: usize) -> usize {
        2 * i + 2
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = Self::parent(i);
            if !Order::should_swap(&self.items[parent], &self.items[i]) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = Self::left_child(i);
            let right = Self::right_child(i);
            let mut swap_with = i;

            if left < len && Order::should_swap(&self.items[swap_with], &self.items[left]) {
                swap_with = left;
            }
            if right < len && Order::should_swap(&self.items[swap_with], &self.items[right]) {
                swap_with = right;
            }

            if swap_with == i {
                break;
            }

            self.items.swap(i, swap_with);
            i = swap_with;
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let result = self.items.pop();

        if self.items.len() > 1 {
            self.sift_down(0);
        }

        result
    }

    /// Overwrites the element at `index` and moves it to wherever its new
    /// rank belongs. Returns the old element.
    pub fn replace(&mut self, index: usize, item: T) -> T {
        let old = std::mem::replace(&mut self.items[index], item);
        let settled = self.sift_up(index);
        if settled == index {
            self.sift_down(index);
        }
        old
    }
}

impl<T, Order: HeapOrder<T>> Default for Heap<T, Order> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, Order> Clone for Heap<T, Order> {
    fn clone(&self) -> Self {
        Heap {
            items: self.items.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: std::fmt::Debug, Order> std::fmt::Debug for Heap<T, Order> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
