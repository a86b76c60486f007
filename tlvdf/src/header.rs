//! Tag/length header readers for the two wire formats.

use crate::error::DecodeError;
use crate::field::{Tag, TagClass};
use crate::tvb::ByteView;

/// A tag/length pair as seen by the walker, whatever the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub tag: Tag,
    pub constructed: bool,
    /// Bytes taken by the tag and length themselves.
    pub header_len: usize,
    /// Declared length of the value.
    pub length: usize,
}

impl Header {
    pub fn total_len(&self) -> usize {
        self.header_len.saturating_add(self.length)
    }
}

/// A wire format the walker can be instantiated with.
pub trait HeaderFormat {
    const NAME: &'static str;

    fn read(view: &ByteView<'_>, offset: usize) -> Result<Header, DecodeError>;
}

/// DOCSIS style TLVs: one type byte, one length byte.
#[derive(Debug, Clone, Copy)]
pub struct Tlv8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    pub typ: u8,
    pub length: u8,
}

impl TlvHeader {
    pub const SIZE: usize = 2;
}

pub fn read_tlv_header(view: &ByteView<'_>, offset: usize) -> Result<TlvHeader, DecodeError> {
    let typ = header_byte(view, offset, offset, TlvHeader::SIZE)?;
    let length = header_byte(view, offset, offset + 1, TlvHeader::SIZE)?;
    Ok(TlvHeader { typ, length })
}

impl HeaderFormat for Tlv8 {
    const NAME: &'static str = "TLV";

    fn read(view: &ByteView<'_>, offset: usize) -> Result<Header, DecodeError> {
        let tlv = read_tlv_header(view, offset)?;
        Ok(Header {
            tag: Tag::context(u32::from(tlv.typ)),
            constructed: false,
            header_len: TlvHeader::SIZE,
            length: usize::from(tlv.length),
        })
    }
}

/// X.690 identifier and definite-length octets.
#[derive(Debug, Clone, Copy)]
pub struct Ber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BerHeader {
    pub class: TagClass,
    pub constructed: bool,
    pub number: u32,
    pub length: usize,
    pub header_len: usize,
}

const TAG_NUMBER_MASK: u8 = 0x1f;
const CONSTRUCTED: u8 = 0x20;
const MORE_OCTETS: u8 = 0x80;
const LONG_FORM: u8 = 0x80;
/// 0xFF as a length octet is reserved by X.690.
const RESERVED_LENGTH_OCTETS: usize = 0x7f;

pub fn read_ber_header(view: &ByteView<'_>, offset: usize) -> Result<BerHeader, DecodeError> {
    let first = header_byte(view, offset, offset, 2)?;
    let class = TagClass::from_bits(first >> 6);
    let constructed = first & CONSTRUCTED != 0;

    let mut pos = offset + 1;
    let mut number = u32::from(first & TAG_NUMBER_MASK);
    if number == u32::from(TAG_NUMBER_MASK) {
        number = 0;
        loop {
            // At least one length octet still has to follow.
            let b = header_byte(view, offset, pos, pos - offset + 2)?;
            pos += 1;
            if number > u32::MAX >> 7 {
                return Err(DecodeError::invalid("tag number does not fit in 32 bits"));
            }
            number = (number << 7) | u32::from(b & !MORE_OCTETS);
            if b & MORE_OCTETS == 0 {
                break;
            }
        }
    }

    let first_len = header_byte(view, offset, pos, pos - offset + 1)?;
    pos += 1;
    let length = if first_len & LONG_FORM == 0 {
        usize::from(first_len)
    } else {
        let octets = usize::from(first_len & !LONG_FORM);
        if octets == 0 {
            return Err(DecodeError::IndefiniteLengthNotSupported);
        }
        if octets == RESERVED_LENGTH_OCTETS || octets > std::mem::size_of::<usize>() {
            return Err(DecodeError::LengthTooLarge { octets });
        }
        let needed = pos - offset + octets;
        let mut length = 0usize;
        for i in 0..octets {
            let b = header_byte(view, offset, pos + i, needed)?;
            length = (length << 8) | usize::from(b);
        }
        pos += octets;
        length
    };

    Ok(BerHeader {
        class,
        constructed,
        number,
        length,
        header_len: pos - offset,
    })
}

impl HeaderFormat for Ber {
    const NAME: &'static str = "BER";

    fn read(view: &ByteView<'_>, offset: usize) -> Result<Header, DecodeError> {
        let ber = read_ber_header(view, offset)?;
        Ok(Header {
            tag: Tag::new(ber.class, ber.number),
            constructed: ber.constructed,
            header_len: ber.header_len,
            length: ber.length,
        })
    }
}

/// Reads byte `at` of a header starting at `start`, where the header is known to need at least
/// `needed` bytes.
fn header_byte(
    view: &ByteView<'_>,
    start: usize,
    at: usize,
    needed: usize,
) -> Result<u8, DecodeError> {
    view.get_u8(at)
        .map_err(|_| DecodeError::TruncatedHeader {
            needed,
            available: view.available_from(start),
        })
}

#[cfg(test)]
mod test_headers {
    use super::*;

    #[test]
    fn tlv_header() {
        let data = [0x0a, 0x01, 0x05];
        let view = ByteView::new(&data);
        assert_eq!(
            read_tlv_header(&view, 0),
            Ok(TlvHeader {
                typ: 0x0a,
                length: 1
            })
        );
        let header = Tlv8::read(&view, 0).unwrap();
        assert_eq!(header.tag, Tag::context(10));
        assert_eq!(header.total_len(), 3);
    }

    #[test]
    fn tlv_header_needs_two_bytes() {
        let data = [0x0a, 0x01, 0x05];
        let view = ByteView::new(&data);
        assert_eq!(
            read_tlv_header(&view, 2),
            Err(DecodeError::TruncatedHeader {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(
            read_tlv_header(&view, 3),
            Err(DecodeError::TruncatedHeader {
                needed: 2,
                available: 0
            })
        );
    }

    #[test]
    fn ber_short_and_long_lengths() {
        let mut short = vec![0x04, 0x05];
        short.extend([0xaa; 5]);
        let header = read_ber_header(&ByteView::new(&short), 0).unwrap();
        assert_eq!(header.length, 5);
        assert_eq!(header.header_len, 2);
        assert_eq!(header.class, TagClass::Universal);
        assert_eq!(header.number, 4);
        assert!(!header.constructed);

        let mut long = vec![0x04, 0x81, 0x80];
        long.extend([0xaa; 128]);
        let header = read_ber_header(&ByteView::new(&long), 0).unwrap();
        assert_eq!(header.length, 128);
        assert_eq!(header.header_len, 3);

        let two_octets = [0x30, 0x82, 0x01, 0x00];
        let header = read_ber_header(&ByteView::new(&two_octets), 0).unwrap();
        assert_eq!(header.length, 256);
        assert_eq!(header.header_len, 4);
        assert!(header.constructed);
    }

    #[test]
    fn ber_high_tag_numbers() {
        // [APPLICATION 31] constructed, length 0.
        let data = [0x7f, 0x1f, 0x00];
        let header = read_ber_header(&ByteView::new(&data), 0).unwrap();
        assert_eq!(header.class, TagClass::Application);
        assert_eq!(header.number, 31);
        assert_eq!(header.header_len, 3);

        // [91] needs one extension octet, [128] needs two.
        let data = [0xbf, 0x5b, 0x00];
        let header = Ber::read(&ByteView::new(&data), 0).unwrap();
        assert_eq!(header.tag, Tag::context(91));
        let data = [0x9f, 0x81, 0x00, 0x00];
        let header = Ber::read(&ByteView::new(&data), 0).unwrap();
        assert_eq!(header.tag, Tag::context(128));
        assert_eq!(header.header_len, 4);
    }

    #[test]
    fn ber_indefinite_length_is_rejected() {
        let data = [0x30, 0x80, 0x00, 0x00];
        assert_eq!(
            read_ber_header(&ByteView::new(&data), 0),
            Err(DecodeError::IndefiniteLengthNotSupported)
        );
    }

    #[test]
    fn ber_oversized_lengths_are_rejected() {
        let data = [0x04, 0xff];
        assert_eq!(
            read_ber_header(&ByteView::new(&data), 0),
            Err(DecodeError::LengthTooLarge { octets: 127 })
        );
        let data = [0x04, 0x89, 1, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            read_ber_header(&ByteView::new(&data), 0),
            Err(DecodeError::LengthTooLarge { octets: 9 })
        );
    }

    #[test]
    fn ber_truncated_headers() {
        let tests: [(&[u8], usize); 4] = [
            (&[0x30], 2),
            (&[0x1f, 0x81], 4),
            (&[0x04, 0x82, 0x01], 4),
            (&[], 2),
        ];
        for (data, needed) in tests {
            let err = read_ber_header(&ByteView::new(data), 0).unwrap_err();
            assert_eq!(
                err,
                DecodeError::TruncatedHeader {
                    needed,
                    available: data.len()
                },
                "{data:02x?}"
            );
        }
    }

    #[test]
    fn headers_respect_the_view_end() {
        // The second byte exists in the frame but not in the view.
        let data = [0x0a, 0x01];
        let view = ByteView::new(&data).subview(0..1);
        assert!(matches!(
            Tlv8::read(&view, 0),
            Err(DecodeError::TruncatedHeader { .. })
        ));
    }
}
