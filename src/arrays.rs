//! Slice helpers for moving bytes in and out of a ring of storage.

/// Allocate a zero-filled byte array of a given length.
///
/// Allocation failure is not recoverable here; it is routed to the global allocation error handler.
pub fn allocate(len: usize) -> Box<[u8]> {
    vec![0; len].into_boxed_slice()
}

/// Copy as many elements as possible from one slice to another.
///
/// Returns the number of elements copied.
#[inline]
pub fn copy<T: Copy>(src: &[T], dest: &mut [T]) -> usize {
    let len = src.len().min(dest.len());
    dest[..len].copy_from_slice(&src[..len]);
    len
}

/// Copy as many elements as possible from a sequence of slices into a single destination, in order.
///
/// Returns the number of elements copied.
pub fn copy_from_seq<T: Copy>(seq: &[&[T]], dest: &mut [T]) -> usize {
    let mut copied = 0;

    for slice in seq {
        if copied < dest.len() {
            copied += copy(slice, &mut dest[copied..]);
        } else {
            break;
        }
    }

    copied
}

/// Copy as many elements as possible from a single source into a sequence of destination slices, filling each one
/// before moving on to the next.
///
/// Returns the number of elements copied.
pub fn copy_to_seq<T: Copy>(src: &[T], seq: &mut [&mut [T]]) -> usize {
    let mut copied = 0;

    for slice in seq.iter_mut() {
        if copied < src.len() {
            copied += copy(&src[copied..], slice);
        } else {
            break;
        }
    }

    copied
}

/// Extension trait for slices for working with wrapping ranges.
///
/// A range from `from` to `to` covers `from..len` followed by `0..to` whenever `to <= from`. In particular a range
/// where `from == to` covers the entire slice; callers must rule out the empty case themselves.
pub trait WrappingSlice<T> {
    /// Gets a pair of slices in the given range, wrapping around length.
    fn wrapping_range(&self, from: usize, to: usize) -> (&[T], &[T]);

    /// Gets a pair of mutable slices in the given range, wrapping around length.
    fn wrapping_range_mut(&mut self, from: usize, to: usize) -> (&mut [T], &mut [T]);
}

impl<T> WrappingSlice<T> for [T] {
    fn wrapping_range(&self, from: usize, to: usize) -> (&[T], &[T]) {
        if from < to {
            (&self[from..to], &[])
        } else {
            (&self[from..], &self[..to])
        }
    }

    fn wrapping_range_mut(&mut self, from: usize, to: usize) -> (&mut [T], &mut [T]) {
        if from < to {
            (&mut self[from..to], &mut [])
        } else {
            let (left, right) = self.split_at_mut(from);
            (right, &mut left[..to])
        }
    }
}
