use bytes::Buf;

use crate::{PktBuf, PktBufMut};

/// A mutable window over a byte slice.
///
/// The window starts out covering the whole slice. Advancing it leaves
/// headroom in front that later headers can be prepended into.
#[derive(Debug)]
pub struct CursorMut<'a> {
    buf: &'a mut [u8],
    start: usize,
}

impl<'a> CursorMut<'a> {
    /// Create a cursor covering all of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        CursorMut { buf, start: 0 }
    }

    /// The whole underlying slice, headroom included.
    #[inline]
    pub fn buf(&self) -> &[u8] {
        &self.buf[..]
    }

    /// Offset of the window start in the underlying slice.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.start
    }

    /// Consume the cursor, returning the current window.
    #[inline]
    pub fn into_chunk(self) -> &'a mut [u8] {
        let CursorMut { buf, start } = self;
        &mut buf[start..]
    }
}

impl<'a> Buf for CursorMut<'a> {
    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.start
    }

    #[inline]
    fn chunk(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    #[inline]
    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.remaining());
        self.start += cnt;
    }
}

impl<'a> PktBuf for CursorMut<'a> {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        assert!(cnt <= self.start);
        self.start -= cnt;
    }
}

impl<'a> PktBufMut for CursorMut<'a> {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.start..]
    }

    #[inline]
    fn chunk_headroom(&self) -> usize {
        self.start
    }
}
