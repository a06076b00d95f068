//! Options controlling how headers are written.

/// Options passed to the header serializers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Recompute the length and count fields from the segment list before
    /// writing.
    pub fix_lengths: bool,
}

impl SerializeOptions {
    /// Options that write every field exactly as stored.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether length fields are recomputed.
    #[inline]
    pub fn with_fix_lengths(mut self, fix_lengths: bool) -> Self {
        self.fix_lengths = fix_lengths;
        self
    }
}
