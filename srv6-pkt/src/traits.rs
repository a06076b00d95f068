pub use bytes::Buf;

/// A buffer whose readable window can grow backward into its headroom.
///
/// Headers are built back to front: the payload is written first, then each
/// header is prepended in front of it.
pub trait PktBuf: Buf {
    /// Move the start of the readable window `cnt` bytes back.
    fn move_back(&mut self, cnt: usize);
}

/// A [`PktBuf`] that can be written through.
pub trait PktBufMut: PktBuf {
    /// Number of bytes available in front of the current window.
    fn chunk_headroom(&self) -> usize;

    /// The current window as a mutable slice.
    fn chunk_mut(&mut self) -> &mut [u8];
}

impl<T: PktBuf + ?Sized> PktBuf for &mut T {
    #[inline]
    fn move_back(&mut self, cnt: usize) {
        (**self).move_back(cnt)
    }
}

impl<T: PktBufMut + ?Sized> PktBufMut for &mut T {
    #[inline]
    fn chunk_mut(&mut self) -> &mut [u8] {
        (**self).chunk_mut()
    }

    #[inline]
    fn chunk_headroom(&self) -> usize {
        (**self).chunk_headroom()
    }
}
