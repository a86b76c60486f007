//! Leaf decoders. They only look at the value bytes; length rules and truncation are handled by
//! the walker before they are called.

use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DecodeError;
use crate::field::Encoding;
use crate::value::{FieldValue, GeneralizedTime};

pub fn decode(encoding: Encoding, bytes: &[u8]) -> Result<FieldValue<'_>, DecodeError> {
    match encoding {
        Encoding::Uint => decode_uint(bytes).map(FieldValue::Uint),
        Encoding::Int => decode_int(bytes).map(FieldValue::Int),
        Encoding::Bool => decode_bool(bytes).map(FieldValue::Bool),
        Encoding::Bytes => Ok(FieldValue::Bytes(bytes)),
        Encoding::Utf8 => decode_utf8(bytes).map(FieldValue::Str),
        Encoding::Ascii => decode_ascii(bytes).map(FieldValue::Str),
        Encoding::Ipv4 => decode_ipv4(bytes).map(FieldValue::Ipv4),
        Encoding::Ipv6 => decode_ipv6(bytes).map(FieldValue::Ipv6),
        Encoding::IpAddr => match bytes.len() {
            4 => decode_ipv4(bytes).map(FieldValue::Ipv4),
            16 => decode_ipv6(bytes).map(FieldValue::Ipv6),
            n => Err(DecodeError::invalid(format!(
                "{n} bytes is neither an IPv4 nor an IPv6 address"
            ))),
        },
        Encoding::GeneralizedTime => decode_generalized_time(bytes).map(FieldValue::Time),
        Encoding::BitString => {
            decode_bit_string(bytes).map(|(unused, data)| FieldValue::Bits { unused, data })
        }
        Encoding::RelativeOid => decode_relative_oid(bytes).map(FieldValue::Oid),
        Encoding::ObjectId => decode_object_id(bytes).map(FieldValue::Oid),
        Encoding::Null => match bytes {
            [] => Ok(FieldValue::None),
            _ => Err(DecodeError::invalid("NULL with contents")),
        },
    }
}

pub fn decode_uint(bytes: &[u8]) -> Result<u64, DecodeError> {
    check_int_len(bytes)?;
    Ok(bytes.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
}

/// Two's complement, as in BER INTEGER.
pub fn decode_int(bytes: &[u8]) -> Result<i64, DecodeError> {
    check_int_len(bytes)?;
    let init: i64 = if bytes[0] & 0x80 != 0 { -1 } else { 0 };
    Ok(bytes
        .iter()
        .fold(init, |acc, b| (acc << 8) | i64::from(*b)))
}

fn check_int_len(bytes: &[u8]) -> Result<(), DecodeError> {
    match bytes.len() {
        0 => Err(DecodeError::invalid("empty integer")),
        1..=8 => Ok(()),
        n => Err(DecodeError::invalid(format!(
            "{n}-byte integer does not fit in 64 bits"
        ))),
    }
}

pub fn decode_bool(bytes: &[u8]) -> Result<bool, DecodeError> {
    match bytes {
        [b] => Ok(*b != 0),
        _ => Err(DecodeError::invalid(format!(
            "BOOLEAN must be 1 byte, not {}",
            bytes.len()
        ))),
    }
}

pub fn decode_utf8(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|e| DecodeError::invalid(format!("invalid UTF-8: {e}")))
}

pub fn decode_ascii(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    match bytes.iter().position(|b| !b.is_ascii()) {
        Some(pos) => Err(DecodeError::invalid(format!(
            "non-ASCII byte 0x{:02x} at position {pos}",
            bytes[pos]
        ))),
        // ASCII is valid UTF-8.
        None => decode_utf8(bytes),
    }
}

pub fn decode_ipv4(bytes: &[u8]) -> Result<Ipv4Addr, DecodeError> {
    let octets: [u8; 4] = bytes.try_into().map_err(|_| {
        DecodeError::invalid(format!("IPv4 address must be 4 bytes, not {}", bytes.len()))
    })?;
    Ok(Ipv4Addr::from(octets))
}

pub fn decode_ipv6(bytes: &[u8]) -> Result<Ipv6Addr, DecodeError> {
    let octets: [u8; 16] = bytes.try_into().map_err(|_| {
        DecodeError::invalid(format!(
            "IPv6 address must be 16 bytes, not {}",
            bytes.len()
        ))
    })?;
    Ok(Ipv6Addr::from(octets))
}

/// Parses `YYYYMMDDHH[MM[SS[(.|,)fff]]][Z|(+|-)hhmm]`.
pub fn decode_generalized_time(bytes: &[u8]) -> Result<GeneralizedTime, DecodeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| DecodeError::invalid("GeneralizedTime is not ASCII"))?;
    let bad = || DecodeError::invalid(format!("malformed GeneralizedTime {text:?}"));

    let (body, offset) = if let Some(body) = text.strip_suffix('Z') {
        (body, FixedOffset::east_opt(0))
    } else if let Some(pos) = text.rfind(['+', '-']) {
        let zone = &text[pos + 1..];
        if zone.len() != 4 {
            return Err(bad());
        }
        let hours = digits(zone, 0, 2).ok_or_else(bad)?;
        let minutes = digits(zone, 2, 2).ok_or_else(bad)?;
        let secs = i32::try_from(hours * 3600 + minutes * 60).map_err(|_| bad())?;
        let offset = if text.as_bytes()[pos] == b'-' {
            FixedOffset::west_opt(secs)
        } else {
            FixedOffset::east_opt(secs)
        };
        (&text[..pos], Some(offset.ok_or_else(bad)?))
    } else {
        (text, None)
    };

    let (whole, fraction) = match body.find(['.', ',']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };
    if !matches!(whole.len(), 10 | 12 | 14) {
        return Err(bad());
    }

    let year = digits(whole, 0, 4).ok_or_else(bad)?;
    let month = digits(whole, 4, 2).ok_or_else(bad)?;
    let day = digits(whole, 6, 2).ok_or_else(bad)?;
    let hour = digits(whole, 8, 2).ok_or_else(bad)?;
    let mut minute = if whole.len() >= 12 {
        digits(whole, 10, 2).ok_or_else(bad)?
    } else {
        0
    };
    let mut second = if whole.len() == 14 {
        digits(whole, 12, 2).ok_or_else(bad)?
    } else {
        0
    };

    // The fraction belongs to the last unit present: hour, minute or second.
    let mut nanos = 0;
    match fraction {
        None => {}
        Some(f) if f.is_empty() || f.len() > 9 => return Err(bad()),
        Some(f) => {
            let value = digits(f, 0, f.len()).ok_or_else(bad)?;
            let unit: u64 = match whole.len() {
                10 => 3_600_000_000_000,
                12 => 60_000_000_000,
                _ => 1_000_000_000,
            };
            let scaled = u128::from(value) * u128::from(unit) / 10u128.pow(f.len() as u32);
            let extra = u64::try_from(scaled).map_err(|_| bad())?;
            minute += u32::try_from(extra / 60_000_000_000).map_err(|_| bad())?;
            second += u32::try_from(extra / 1_000_000_000 % 60).map_err(|_| bad())?;
            nanos = u32::try_from(extra % 1_000_000_000).map_err(|_| bad())?;
        }
    }

    let date = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, day))
        .ok_or_else(bad)?;
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos).ok_or_else(bad)?;
    Ok(GeneralizedTime {
        datetime: NaiveDateTime::new(date, time),
        offset,
    })
}

fn digits(s: &str, start: usize, len: usize) -> Option<u32> {
    let part = s.get(start..start + len)?;
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Returns the unused-bit count and the bits themselves.
pub fn decode_bit_string(bytes: &[u8]) -> Result<(u8, &[u8]), DecodeError> {
    match bytes {
        [] => Err(DecodeError::invalid("BIT STRING without unused-bits octet")),
        [unused, ..] if *unused > 7 => Err(DecodeError::invalid(format!(
            "{unused} unused bits in BIT STRING"
        ))),
        [unused] if *unused != 0 => Err(DecodeError::invalid(
            "empty BIT STRING with unused bits",
        )),
        [unused, data @ ..] => Ok((*unused, data)),
    }
}

/// Splits base-128 subidentifiers.
pub fn decode_relative_oid(bytes: &[u8]) -> Result<Vec<u64>, DecodeError> {
    let mut arcs = Vec::new();
    let mut arc: u64 = 0;
    let mut in_arc = false;
    for b in bytes {
        if !in_arc && *b == 0x80 {
            return Err(DecodeError::invalid("subidentifier with leading 0x80"));
        }
        if arc > u64::MAX >> 7 {
            return Err(DecodeError::invalid("subidentifier does not fit in 64 bits"));
        }
        arc = (arc << 7) | u64::from(b & 0x7f);
        in_arc = b & 0x80 != 0;
        if !in_arc {
            arcs.push(arc);
            arc = 0;
        }
    }
    if in_arc {
        return Err(DecodeError::invalid("last subidentifier is unterminated"));
    }
    if arcs.is_empty() {
        return Err(DecodeError::invalid("empty object identifier"));
    }
    Ok(arcs)
}

/// Like a relative OID, except the first subidentifier packs the first two arcs.
pub fn decode_object_id(bytes: &[u8]) -> Result<Vec<u64>, DecodeError> {
    let sub = decode_relative_oid(bytes)?;
    let (first, second) = match sub[0] {
        x if x < 40 => (0, x),
        x if x < 80 => (1, x - 40),
        x => (2, x - 80),
    };
    let mut arcs = Vec::with_capacity(sub.len() + 1);
    arcs.push(first);
    arcs.push(second);
    arcs.extend_from_slice(&sub[1..]);
    Ok(arcs)
}

#[cfg(test)]
mod test_primitives {
    use super::*;

    #[test]
    fn unsigned_integers() {
        let tests: [(&[u8], u64); 4] = [
            (&[0x05], 5),
            (&[0x00, 0x0c], 12),
            (&[0xff, 0xff, 0xff], 0xffffff),
            (&[0xff; 8], u64::MAX),
        ];
        for (tt, want) in tests {
            assert_eq!(decode_uint(tt), Ok(want));
        }
        assert!(decode_uint(&[]).is_err());
        assert!(decode_uint(&[0; 9]).is_err());
    }

    #[test]
    fn signed_integers() {
        let tests: [(&[u8], i64); 5] = [
            (&[0x00], 0),
            (&[0x7f], 127),
            (&[0x80], -128),
            (&[0x00, 0x80], 128),
            (&[0xff, 0x7f], -129),
        ];
        for (tt, want) in tests {
            assert_eq!(decode_int(tt), Ok(want));
        }
    }

    #[test]
    fn booleans() {
        assert_eq!(decode_bool(&[0x00]), Ok(false));
        assert_eq!(decode_bool(&[0xff]), Ok(true));
        assert!(decode_bool(&[0x01, 0x00]).is_err());
    }

    #[test]
    fn strings() {
        assert_eq!(decode_utf8(b"internet").unwrap(), "internet");
        assert!(decode_utf8(&[0xc3, 0x28]).is_err());
        assert_eq!(decode_ascii(b"001010123456789").unwrap(), "001010123456789");
        assert!(decode_ascii("é".as_bytes()).is_err());
    }

    #[test]
    fn ip_addresses() {
        assert_eq!(
            decode(Encoding::IpAddr, &[192, 0, 2, 1]),
            Ok(FieldValue::Ipv4(Ipv4Addr::new(192, 0, 2, 1)))
        );
        let mut v6 = [0u8; 16];
        v6[15] = 1;
        assert_eq!(
            decode(Encoding::IpAddr, &v6),
            Ok(FieldValue::Ipv6(Ipv6Addr::LOCALHOST))
        );
        assert!(decode(Encoding::IpAddr, &[1, 2, 3]).is_err());
        assert!(decode_ipv4(&v6).is_err());
    }

    #[test]
    fn generalized_times() {
        let t = decode_generalized_time(b"20240301123005Z").unwrap();
        assert_eq!(t.to_string(), "2024-03-01 12:30:05 UTC");

        let t = decode_generalized_time(b"20240301123005.25+0130").unwrap();
        assert_eq!(t.to_string(), "2024-03-01 12:30:05.250 +01:30");

        let t = decode_generalized_time(b"2024030112").unwrap();
        assert_eq!(t.offset, None);
        assert_eq!(t.to_string(), "2024-03-01 12:00:00");

        let t = decode_generalized_time(b"2024030112.5Z").unwrap();
        assert_eq!(t.to_string(), "2024-03-01 12:30:00 UTC");

        let t = decode_generalized_time(b"202403011230.5Z").unwrap();
        assert_eq!(t.to_string(), "2024-03-01 12:30:30 UTC");

        let t = decode_generalized_time(b"2024030112,25").unwrap();
        assert_eq!(t.to_string(), "2024-03-01 12:15:00");

        let bad: [&[u8]; 6] = [
            b"",
            b"2024",
            b"20241301123005Z",
            b"2024030112300Z",
            b"20240301123005+01",
            b"20240301123005.Z",
        ];
        for tt in bad {
            assert!(decode_generalized_time(tt).is_err(), "{tt:?}");
        }
    }

    #[test]
    fn bit_strings() {
        assert_eq!(decode_bit_string(&[0x04, 0x12, 0x30]), Ok((4, &[0x12, 0x30][..])));
        assert_eq!(decode_bit_string(&[0x00]), Ok((0, &[][..])));
        assert!(decode_bit_string(&[]).is_err());
        assert!(decode_bit_string(&[0x08, 0x00]).is_err());
        assert!(decode_bit_string(&[0x03]).is_err());
    }

    #[test]
    fn object_identifiers() {
        assert_eq!(decode_relative_oid(&[0x04, 0x02, 0x02]), Ok(vec![4, 2, 2]));
        assert_eq!(decode_relative_oid(&[0x81, 0x00, 0x05]), Ok(vec![128, 5]));
        assert!(decode_relative_oid(&[0x81]).is_err());
        assert!(decode_relative_oid(&[0x80, 0x01]).is_err());
        assert!(decode_relative_oid(&[]).is_err());

        // 0.4.0.2.2 is the ETSI LI branch.
        assert_eq!(
            decode_object_id(&[0x04, 0x00, 0x02, 0x02]),
            Ok(vec![0, 4, 0, 2, 2])
        );
        assert_eq!(decode_object_id(&[0x2b, 0x06]), Ok(vec![1, 3, 6]));
        assert_eq!(decode_object_id(&[0x88, 0x37]), Ok(vec![2, 999]));
    }

    #[test]
    fn null() {
        assert_eq!(decode(Encoding::Null, &[]), Ok(FieldValue::None));
        assert!(decode(Encoding::Null, &[0]).is_err());
    }
}
