//! Byte stream trait implementations for [`RingBuffer`].
//!
//! The buffer lives entirely in memory, so the asynchronous traits are always ready and behave exactly like their
//! blocking counterparts. An empty buffer reads as end-of-stream rather than as an error.

use crate::buffer::RingBuffer;
use futures_io::{AsyncBufRead, AsyncRead, AsyncWrite};
use std::io::{self, BufRead, Read, Write};
use std::pin::Pin;
use std::task::{Context, Poll};

impl Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = self.copy_to(buf);
        Ok(self.discard(len))
    }
}

impl BufRead for RingBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.peek_all().0)
    }

    fn consume(&mut self, amt: usize) {
        self.discard(amt);
    }
}

impl Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.push(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsyncRead for RingBuffer {
    fn poll_read(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut [u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Read::read(self.get_mut(), buf))
    }
}

impl AsyncBufRead for RingBuffer {
    fn poll_fill_buf(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<&[u8]>> {
        Poll::Ready(BufRead::fill_buf(self.get_mut()))
    }

    fn consume(self: Pin<&mut Self>, amt: usize) {
        BufRead::consume(self.get_mut(), amt)
    }
}

impl AsyncWrite for RingBuffer {
    fn poll_write(self: Pin<&mut Self>, _: &mut Context<'_>, buf: &[u8]) -> Poll<io::Result<usize>> {
        Poll::Ready(Write::write(self.get_mut(), buf))
    }

    fn poll_flush(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<io::Result<()>> {
        Poll::Ready(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn read_write() {
        let mut buffer = RingBuffer::with_capacity(4);

        assert_eq!(Write::write(&mut buffer, b"hello world").unwrap(), 11);

        let mut buf = [0; 11];
        assert_eq!(Read::read(&mut buffer, &mut buf).unwrap(), 11);
        assert_eq!(&buf, b"hello world");
    }

    #[test]
    fn read_empty_returns_zero() {
        let mut buffer = RingBuffer::with_capacity(4);

        let mut buf = [0; 4];
        assert_eq!(Read::read(&mut buffer, &mut buf).unwrap(), 0);
        assert_eq!(Write::write(&mut buffer, &[]).unwrap(), 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn read_to_end_across_wrap() {
        let mut buffer = RingBuffer::with_capacity(8);
        buffer.write_all(b"abcdef").unwrap();
        buffer.discard(4);
        buffer.write_all(b"ghij").unwrap();
        assert_eq!(buffer.capacity(), 8);

        let mut out = Vec::new();
        buffer.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"efghij");
        assert!(buffer.is_empty());
    }

    #[test]
    fn read_lines() {
        let mut buffer = RingBuffer::with_capacity(8);
        buffer.write_all(b"one\ntwo\nthree").unwrap();

        let lines = buffer.lines().collect::<io::Result<Vec<_>>>().unwrap();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn io_copy_drains_buffer() {
        let mut buffer = RingBuffer::with_capacity(16);
        buffer.write_all(&[7; 40]).unwrap();

        let mut sink = Vec::new();
        assert_eq!(io::copy(&mut buffer, &mut sink).unwrap(), 40);
        assert_eq!(sink, vec![7; 40]);
    }

    #[test]
    fn async_read_write() {
        use futures::io::{AsyncReadExt, AsyncWriteExt};

        block_on(async {
            let mut buffer = RingBuffer::with_capacity(4);

            AsyncWriteExt::write_all(&mut buffer, b"hello").await.unwrap();
            AsyncWriteExt::flush(&mut buffer).await.unwrap();

            let mut dest = [0; 5];
            AsyncReadExt::read_exact(&mut buffer, &mut dest).await.unwrap();
            assert_eq!(&dest, b"hello");

            assert_eq!(AsyncReadExt::read(&mut buffer, &mut dest).await.unwrap(), 0);
        })
    }

    #[test]
    fn async_read_until() {
        use futures::io::{AsyncBufReadExt, AsyncWriteExt};

        block_on(async {
            let mut buffer = RingBuffer::with_capacity(4);
            AsyncWriteExt::write_all(&mut buffer, b"frame;rest").await.unwrap();

            let mut frame = Vec::new();
            AsyncBufReadExt::read_until(&mut buffer, b';', &mut frame).await.unwrap();
            assert_eq!(frame, b"frame;");
            assert_eq!(buffer.to_vec(), b"rest");
        })
    }
}
