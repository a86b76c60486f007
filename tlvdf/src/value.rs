use std::borrow::Cow;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{FixedOffset, NaiveDateTime};

/// A decoded leaf value. Byte and string values borrow from the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'tvb> {
    /// Subtree roots and NULL.
    None,
    Uint(u64),
    Int(i64),
    Bool(bool),
    Bytes(&'tvb [u8]),
    Str(Cow<'tvb, str>),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Time(GeneralizedTime),
    Bits { unused: u8, data: &'tvb [u8] },
    Oid(Vec<u64>),
}

impl FieldValue<'_> {
    /// The value as a signed integer, for value-string lookups.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            FieldValue::Int(v) => Some(v),
            FieldValue::Uint(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::None => Ok(()),
            FieldValue::Uint(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => f.write_str(if *v { "True" } else { "False" }),
            FieldValue::Bytes(b) if b.is_empty() => f.write_str("<MISSING>"),
            FieldValue::Bytes(b) => f.write_str(&hex::encode(b)),
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::Ipv4(a) => write!(f, "{a}"),
            FieldValue::Ipv6(a) => write!(f, "{a}"),
            FieldValue::Time(t) => write!(f, "{t}"),
            FieldValue::Bits { unused, data } => {
                write!(f, "{} ({} unused bits)", hex::encode(data), unused)
            }
            FieldValue::Oid(arcs) => {
                let arcs = arcs.iter().map(u64::to_string).collect::<Vec<_>>();
                f.write_str(&arcs.join("."))
            }
        }
    }
}

/// An ASN.1 GeneralizedTime. Without a suffix the time is local to some unstated zone, so the
/// offset is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralizedTime {
    pub datetime: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl fmt::Display for GeneralizedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:%M:%S%.f"))?;
        match self.offset {
            Some(offset) if offset.local_minus_utc() == 0 => f.write_str(" UTC"),
            Some(offset) => write!(f, " {offset}"),
            None => Ok(()),
        }
    }
}
