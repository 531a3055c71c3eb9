//! A growable circular byte buffer for framing byte streams.
//!
//! [`RingBuffer`] stores bytes in FIFO order in a fixed array treated as a ring, doubling the array whenever a write
//! would not fit. Bytes can be read out by copying, inspected in place with [`peek`](RingBuffer::peek), and skipped
//! with [`discard`](RingBuffer::discard). It also implements the standard and `futures` I/O traits so it can sit
//! between a socket and a frame parser.
//!
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer = RingBuffer::with_capacity(8);
//! buffer.write(b"len:5;hello").unwrap();
//!
//! let (head, _) = buffer.peek(6);
//! assert_eq!(head, b"len:5;");
//! buffer.discard(6);
//!
//! let mut body = [0; 5];
//! assert_eq!(buffer.read(&mut body), Ok(5));
//! assert_eq!(&body, b"hello");
//! ```
mod arrays;
pub mod buffer;
pub mod error;
mod io;

pub use crate::buffer::RingBuffer;
pub use crate::error::{Error, Result};
