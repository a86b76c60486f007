use std::ops::Range;

use crate::error::DecodeError;

/// A bounds-checked region of a captured frame.
///
/// Offsets are absolute positions in the frame, so byte ranges reported to the tree line up no
/// matter how deeply a view is nested. A view knows two lengths: the *declared* length, which is
/// what the protocol says should be there, and the *available* length, which is what was actually
/// captured. The two differ for truncated captures.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'tvb> {
    data: &'tvb [u8],
    start: usize,
    end: usize,
}

impl<'tvb> ByteView<'tvb> {
    /// A view over a fully captured frame.
    pub fn new(data: &'tvb [u8]) -> Self {
        ByteView {
            data,
            start: 0,
            end: data.len(),
        }
    }

    /// A view over a frame whose reported length may exceed what was captured.
    pub fn with_reported_len(data: &'tvb [u8], reported_len: usize) -> Self {
        ByteView {
            data,
            start: 0,
            end: reported_len,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// End of the declared region.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn declared_len(&self) -> usize {
        self.end - self.start
    }

    /// End of the bytes that can actually be read.
    pub fn available_end(&self) -> usize {
        self.end.min(self.data.len()).max(self.start)
    }

    pub fn available_len(&self) -> usize {
        self.available_end() - self.start
    }

    pub fn is_truncated(&self) -> bool {
        self.available_end() < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Declared bytes left from `offset` to the end of the view.
    pub fn remaining(&self, offset: usize) -> usize {
        self.end.saturating_sub(offset)
    }

    /// Captured bytes left from `offset` to the end of the view.
    pub fn available_from(&self, offset: usize) -> usize {
        self.available_end().saturating_sub(offset)
    }

    /// A nested view. The range is clamped to this view, so a child can never see past its parent.
    pub fn subview(&self, range: Range<usize>) -> ByteView<'tvb> {
        let start = range.start.clamp(self.start, self.end);
        let end = range.end.clamp(start, self.end);
        ByteView {
            data: self.data,
            start,
            end,
        }
    }

    pub fn get_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.bytes(offset..offset + 1).map(|b| b[0])
    }

    /// Reads a 24-bit big-endian integer, like a vendor OUI.
    pub fn get_ntoh24(&self, offset: usize) -> Result<u32, DecodeError> {
        let b = self.bytes(offset..offset + 3)?;
        Ok(u32::from_be_bytes([0, b[0], b[1], b[2]]))
    }

    /// All of `range`, or an error saying how much of it was captured.
    pub fn bytes(&self, range: Range<usize>) -> Result<&'tvb [u8], DecodeError> {
        let available = self.available_bytes(range.clone());
        let declared = range.end.saturating_sub(range.start);
        if available.len() < declared {
            return Err(DecodeError::TruncatedValue {
                declared,
                available: available.len(),
            });
        }
        Ok(available)
    }

    /// Whatever part of `range` lies inside this view and was captured.
    pub fn available_bytes(&self, range: Range<usize>) -> &'tvb [u8] {
        let end = range.end.min(self.available_end());
        let start = range.start.clamp(self.start, end.max(self.start));
        if start >= end {
            return &[];
        }
        &self.data[start..end]
    }
}

#[cfg(test)]
mod test_byte_view {
    use super::*;

    #[test]
    fn declared_and_available_differ_when_truncated() {
        let data = [1, 2, 3];
        let view = ByteView::with_reported_len(&data, 5);
        assert_eq!(view.declared_len(), 5);
        assert_eq!(view.available_len(), 3);
        assert!(view.is_truncated());
        assert!(!ByteView::new(&data).is_truncated());
    }

    #[test]
    fn reads_are_bounds_checked() {
        let data = [0x00, 0x00, 0x0c, 0x0a];
        let view = ByteView::new(&data);
        assert_eq!(view.get_ntoh24(0), Ok(0x00000c));
        assert_eq!(view.get_u8(3), Ok(0x0a));
        assert_eq!(
            view.get_ntoh24(2),
            Err(DecodeError::TruncatedValue {
                declared: 3,
                available: 2
            })
        );
        assert!(view.get_u8(10).is_err());
    }

    #[test]
    fn subviews_are_clamped_to_the_parent() {
        let data = [0u8; 10];
        let view = ByteView::new(&data).subview(2..6);
        assert_eq!(view.range(), 2..6);
        assert_eq!(view.subview(4..100).range(), 4..6);
        assert_eq!(view.subview(0..3).range(), 2..3);
        assert_eq!(view.subview(8..9).range(), 6..6);
    }

    #[test]
    fn subviews_keep_offsets_absolute() {
        let data = [9, 8, 7, 6, 5];
        let view = ByteView::new(&data).subview(2..5);
        assert_eq!(view.get_u8(2), Ok(7));
        // Outside the subview even though the frame has it.
        assert!(view.get_u8(1).is_err());
        assert_eq!(view.available_bytes(0..4), &[7, 6]);
    }

    #[test]
    fn partial_reads() {
        let data = [1, 2, 3];
        let view = ByteView::with_reported_len(&data, 6);
        assert_eq!(view.available_bytes(1..6), &[2, 3]);
        assert_eq!(view.remaining(4), 2);
        assert_eq!(view.available_from(4), 0);
        assert_eq!(
            view.bytes(1..6),
            Err(DecodeError::TruncatedValue {
                declared: 5,
                available: 2
            })
        );
    }
}
