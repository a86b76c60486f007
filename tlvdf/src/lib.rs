//! **tlvdf** (**TLV** **D**issector **F**ramework) walks tag-length-value byte streams with
//! static tables of field descriptors, and reports what it finds to a protocol tree. It ships two
//! dissectors built on it: DOCSIS vendor specific encodings ([`docsis`]) and the 3GPP LI X2 xIRI
//! payload ([`lix2`]).
//!
//! * [Getting started](#getting-started)
//! * [Tables](#tables)
//!     * [Entry attributes](#entry-attributes)
//!     * [Table attributes](#table-attributes)
//! * [Malformed input](#malformed-input)
//!
//! # Getting started
//!
//! Every dissector implements [`Protocol`]. The quickest way to run one is [`dissect`], which
//! records the result in a [`RecordingTree`].
//!
//! ```rust
//! use tlvdf::{docsis::DocsisVsif, ByteView, DissectorOptions, FieldValue};
//!
//! let data = [0x08, 0x03, 0x00, 0x00, 0x0c, 0x0a, 0x01, 0x05];
//! let tree = tlvdf::dissect::<DocsisVsif>(ByteView::new(&data), &DissectorOptions::default());
//!
//! let phones = tree.find("docsis_vsif.cisco.num_phones").unwrap();
//! assert_eq!(phones.value(), Some(&FieldValue::Uint(5)));
//! ```
//!
//! # Tables
//!
//! A table is a fieldless enum deriving [`FieldTable`]. Each variant is one tag.
//!
//! ```rust
//! use tlvdf::FieldTable;
//!
//! #[derive(FieldTable)]
//! #[tlvdf(prefix = "demo.ip_prec")]
//! enum IpPrecedence {
//!     #[tlvdf(tag = 1, typ = "uint", len = 1)]
//!     Value,
//!     #[tlvdf(tag = 2, typ = "uint", len = 4, rename = "Bandwidth")]
//!     Bw,
//! }
//!
//! #[derive(FieldTable)]
//! #[tlvdf(prefix = "demo")]
//! enum Demo {
//!     #[tlvdf(tag = 0x0b, nested = "IpPrecedence")]
//!     IpPrecedence,
//! }
//!
//! assert_eq!(Demo::FIELDS[0].abbrev, "demo.ip_precedence");
//! assert_eq!(IpPrecedence::Bw.descriptor().name, "Bandwidth");
//! assert!(matches!(IpPrecedence::from_tag(tlvdf::Tag::context(1)), Some(IpPrecedence::Value)));
//! ```
//!
//! ## Entry attributes
//!
//! | attribute | meaning |
//! | --- | --- |
//! | `tag = N` | tag number, required |
//! | `class = "..."` | `"context"` (default), `"universal"`, `"application"` or `"private"` |
//! | `typ = "..."` | a leaf: `uint`, `int`, `enum`, `bool`, `bytes`, `string`, `ascii`, `ipv4`, `ipv6`, `ip`, `time`, `bits`, `relative_oid`, `oid` or `null` |
//! | `nested = "Type"` | decode with another table |
//! | `seq_of = "Type"`, `set_of = "Type"` | repeated elements of another table |
//! | `len = N`, `len = [N, M]` | allowed lengths |
//! | `min_len`, `max_len` | allowed length range |
//! | `values = "PATH"` | labels for integer values |
//! | `rename = "..."` | display name |
//!
//! Doc comments on a variant become the field's blurb.
//!
//! ## Table attributes
//!
//! | attribute | meaning |
//! | --- | --- |
//! | `kind = "choice"` | exactly one alternative, instead of a sequence of fields |
//! | `prefix = "..."` | filter prefix for the entries, defaults to the snake cased type name |
//! | `rename_all = "asn1"` | entry names in ASN.1 style (`pDUSessionEstablishment`) |
//! | `rename = "..."` | display name when the table is a list element |
//!
//! # Malformed input
//!
//! Nothing in a dissection is fatal. Each problem becomes a [`Diagnostic`] on the node it concerns
//! and the walk carries on using the length on the wire. Truncated captures can be expressed with
//! [`ByteView::with_reported_len`].

// Lets the derive macro's `tlvdf::` paths resolve inside this crate too.
extern crate self as tlvdf;

use tracing::debug_span;

pub mod config;
pub mod docsis;
pub mod error;
pub mod field;
pub mod header;
pub mod lix2;
pub mod primitive;
pub mod registry;
pub mod tree;
pub mod tvb;
pub mod value;
pub mod walker;

pub use config::DissectorOptions;
pub use error::{DecodeError, Diagnostic, Severity};
pub use field::{
    lookup, Decoder, Encoding, FieldDescriptor, FieldTable, LengthRule, Tag, TagClass,
    ValueStrings,
};
pub use header::{Ber, Header, HeaderFormat, Tlv8};
pub use registry::FieldRegistry;
pub use tree::{Node, NodeId, NodeKind, ProtoTree, RecordingTree};
pub use tvb::ByteView;
pub use value::{FieldValue, GeneralizedTime};
pub use walker::DissectorArgs;

pub use tlvdf_derive::FieldTable;

/// Names a protocol goes by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub name: &'static str,
    pub short_name: &'static str,
    /// Filter prefix shared by all of the protocol's fields.
    pub filter: &'static str,
}

pub trait Protocol {
    const INFO: ProtocolInfo;

    /// Registers every field the protocol can produce.
    fn register(registry: &mut FieldRegistry);

    /// Dissects all of `view`, adding items under `parent`. Returns the number of bytes consumed.
    fn dissect<'tvb, T>(
        view: &ByteView<'tvb>,
        opts: &DissectorOptions,
        tree: &mut T,
        parent: NodeId,
    ) -> usize
    where
        T: ProtoTree<'tvb> + ?Sized;
}

/// Runs `P` over `view` and keeps the result.
pub fn dissect<'tvb, P: Protocol>(
    view: ByteView<'tvb>,
    opts: &DissectorOptions,
) -> RecordingTree<'tvb> {
    let span = debug_span!("dissect", protocol = P::INFO.short_name, len = view.declared_len());
    let _enter = span.enter();

    let mut tree = RecordingTree::new(view.range());
    let root = tree.root();
    P::dissect(&view, opts, &mut tree, root);
    tree
}

#[cfg(test)]
mod compile_tests {
    #[test]
    fn run_all() {
        let t = trybuild::TestCases::new();
        t.pass("tests/should_pass/*.rs");
    }
}
