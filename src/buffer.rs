use crate::arrays::{self, WrappingSlice};
use crate::error::{Error, Result};
use std::fmt;

/// Growable circular byte buffer.
///
/// Optimized for repeatedly appending bytes to the back and removing bytes from the front, such as when framing
/// messages read off of a socket. When a write does not fit in the free space the backing array is doubled until it
/// does, so writes never come up short.
///
/// The buffer is a plain single-owner value with no internal synchronization. Sharing it between threads requires
/// wrapping it in a lock.
///
/// Views returned by [`peek`](RingBuffer::peek) and [`peek_all`](RingBuffer::peek_all) borrow the backing array
/// directly, so the buffer cannot be mutated (or grown) while any of them are alive.
#[derive(Clone)]
pub struct RingBuffer {
    /// Backing array where bytes are stored. Never empty.
    array: Box<[u8]>,

    /// Index of the first unread byte. Always less than the capacity.
    read: usize,

    /// Index where the next written byte will be stored. Always less than the capacity.
    write: usize,

    /// Whether the buffer holds no bytes.
    ///
    /// `read == write` holds both when the buffer is empty and when it is completely full, so this flag is the only
    /// thing telling the two apart. Every method that moves a cursor keeps it in sync.
    empty: bool,
}

impl Default for RingBuffer {
    fn default() -> RingBuffer {
        RingBuffer::new()
    }
}

impl RingBuffer {
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Smallest capacity a buffer will be created with.
    pub const MIN_CAPACITY: usize = 1;

    /// Create a new buffer with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a new buffer with the given capacity pre-allocated.
    ///
    /// A capacity of zero is raised to [`MIN_CAPACITY`](RingBuffer::MIN_CAPACITY).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            array: arrays::allocate(capacity.max(Self::MIN_CAPACITY)),
            read: 0,
            write: 0,
            empty: true,
        }
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns `true` if every byte of capacity is in use.
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.empty && self.read == self.write
    }

    /// Returns the number of unread bytes in the buffer.
    pub fn len(&self) -> usize {
        if self.empty {
            0
        } else if self.write > self.read {
            self.write - self.read
        } else {
            self.capacity() - self.read + self.write
        }
    }

    /// Returns the number of bytes that can be written without growing the buffer.
    pub fn available(&self) -> usize {
        if self.empty {
            self.capacity()
        } else if self.write > self.read {
            self.capacity() - self.write + self.read
        } else {
            self.read - self.write
        }
    }

    /// Returns the current capacity of the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.len()
    }

    /// Mark the buffer as empty and move both cursors back to the start.
    ///
    /// The backing array is kept as is.
    pub fn reset(&mut self) {
        self.empty = true;
        self.read = 0;
        self.write = 0;
    }

    /// Pull bytes from the front of the buffer into the given location, up to the length of the destination buffer.
    ///
    /// Returns the number of bytes pulled, which is less than `dest.len()` when fewer bytes are stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `dest` has zero length and [`Error::BufferEmpty`] if there is nothing to read.
    /// The buffer is left untouched in both cases.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize> {
        if dest.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.empty {
            return Err(Error::BufferEmpty);
        }

        let count = self.copy_to(dest);
        self.advance(count);

        Ok(count)
    }

    /// Append all of the given bytes to the back of the buffer, growing it first if they do not fit.
    ///
    /// Returns the number of bytes written, which is always `src.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `src` has zero length.
    pub fn write(&mut self, src: &[u8]) -> Result<usize> {
        if src.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(self.push(src))
    }

    /// Discard up to `count` bytes from the front of the buffer without copying them anywhere.
    ///
    /// Returns the number of bytes discarded, which may be less than `count` if `count` was greater than the number
    /// of bytes in the buffer.
    ///
    /// This operation has a runtime cost of `O(1)`.
    pub fn discard(&mut self, count: usize) -> usize {
        let count = count.min(self.len());

        if count > 0 {
            self.advance(count);
        }

        count
    }

    /// Get every unread byte without consuming any of them.
    ///
    /// The first slice starts at the front of the buffer. The second slice is only non-empty when the unread bytes
    /// wrap around the end of the backing array, in which case it holds the remainder.
    pub fn peek_all(&self) -> (&[u8], &[u8]) {
        if self.empty {
            return (&[], &[]);
        }

        self.array.wrapping_range(self.read, self.write)
    }

    /// Get up to `count` bytes from the front of the buffer without consuming any of them.
    ///
    /// Follows the same split as [`peek_all`](RingBuffer::peek_all).
    pub fn peek(&self, count: usize) -> (&[u8], &[u8]) {
        let count = count.min(self.len());

        if count == 0 {
            return (&[], &[]);
        }

        let end = (self.read + count) % self.capacity();
        self.array.wrapping_range(self.read, end)
    }

    /// Copy bytes from the front of the buffer into the given slice without consuming them.
    ///
    /// Returns the number of bytes copied. If there are less bytes in the buffer than the length of `dest`, then only
    /// part of `dest` will be written to.
    pub fn copy_to(&self, dest: &mut [u8]) -> usize {
        let (head, tail) = self.peek(dest.len());
        arrays::copy_from_seq(&[head, tail], dest)
    }

    /// Copy every unread byte into a new vector, in order.
    pub fn to_vec(&self) -> Vec<u8> {
        let (head, tail) = self.peek_all();
        let mut vec = Vec::with_capacity(head.len() + tail.len());
        vec.extend_from_slice(head);
        vec.extend_from_slice(tail);
        vec
    }

    /// Double the capacity of the buffer if at least half of it is in use.
    ///
    /// Does nothing while less than half of the capacity is occupied. Writes do not rely on this check and grow
    /// whenever they need to.
    pub fn expand(&mut self) {
        if self.len() * 2 < self.capacity() {
            log::trace!(
                "not expanding ring buffer: {} of {} bytes in use",
                self.len(),
                self.capacity()
            );
            return;
        }

        self.grow();
    }

    /// Append bytes to the back of the buffer, growing it as needed.
    pub(crate) fn push(&mut self, src: &[u8]) -> usize {
        if src.is_empty() {
            return 0;
        }

        while self.available() < src.len() {
            self.grow();
        }

        let (read, write) = (self.read, self.write);
        let (head, tail) = self.array.wrapping_range_mut(write, read);
        let pushed = arrays::copy_to_seq(src, &mut [head, tail]);
        debug_assert_eq!(pushed, src.len());

        self.write = (write + pushed) % self.capacity();
        self.empty = false;

        pushed
    }

    /// Move the read cursor forward by `count` bytes, which must not exceed the length.
    fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.len());

        self.read = (self.read + count) % self.capacity();

        if self.read == self.write {
            self.empty = true;
        }
    }

    /// Double the capacity, moving the unread bytes to the start of the new array.
    fn grow(&mut self) {
        let capacity = self
            .capacity()
            .checked_mul(2)
            .expect("ring buffer capacity overflow");

        let mut array = arrays::allocate(capacity);
        let len = self.copy_to(&mut array);
        debug_assert_eq!(len, self.len());

        log::debug!(
            "growing ring buffer from {} to {} bytes ({} in use)",
            self.capacity(),
            capacity,
            len
        );

        self.read = 0;
        self.write = len;
        self.array = array;
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("empty", &self.empty)
            .finish()
    }
}

impl Extend<u8> for RingBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let bytes: Vec<u8> = iter.into_iter().collect();
        self.push(&bytes);
    }
}

impl<'a> Extend<&'a u8> for RingBuffer {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
