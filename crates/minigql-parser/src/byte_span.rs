/// Compact byte-offset span.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text a token was lexed from. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, which is far beyond anything
/// a query transport will hand to the parser.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte of the token (0-based, inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the token (0-based, exclusive).
    pub end: u32,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a zero-length span positioned at `offset`.
    pub fn empty_at(offset: u32) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `source` this span covers, or `None` if the span
    /// does not fall on valid boundaries of `source`.
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start as usize..self.end as usize)
    }
}

impl std::fmt::Display for ByteSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
