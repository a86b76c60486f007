//! The recursive walk shared by every protocol: read a header, find the descriptor for its tag,
//! then either decode a leaf or recurse into the value, and move on by the declared length.

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::DissectorOptions;
use crate::error::{DecodeError, Diagnostic};
use crate::field::{lookup, Decoder, FieldDescriptor};
use crate::header::{Header, HeaderFormat};
use crate::primitive;
use crate::tree::{NodeId, ProtoTree};
use crate::tvb::ByteView;
use crate::value::FieldValue;

/// Shown for tags with no entry in the table being walked.
pub static UNKNOWN_FIELD: FieldDescriptor =
    FieldDescriptor::bytes("Unknown field", "tlvdf.unknown");

/// Shown for bytes after the single alternative of a CHOICE.
pub static TRAILING_DATA: FieldDescriptor =
    FieldDescriptor::bytes("Trailing data", "tlvdf.trailing_data");

/// Where the walk currently is. Cheap to copy, so each recursion gets its own.
#[derive(Clone, Copy)]
pub struct DissectorArgs<'a, 'tvb> {
    /// The region being walked. Nothing outside it is read.
    pub view: ByteView<'tvb>,

    /// Offset at which the next header is expected.
    pub offset: usize,

    /// Node under which the next field is added.
    pub parent: NodeId,

    /// Structural levels entered so far.
    pub depth: usize,

    pub opts: &'a DissectorOptions,
}

impl<'a, 'tvb> DissectorArgs<'a, 'tvb> {
    /// Arguments for walking all of `view` under `parent`.
    pub fn new(view: ByteView<'tvb>, parent: NodeId, opts: &'a DissectorOptions) -> Self {
        DissectorArgs {
            view,
            offset: view.start(),
            parent,
            depth: 0,
            opts,
        }
    }

    pub fn at(&self, offset: usize) -> Self {
        DissectorArgs { offset, ..*self }
    }

    pub fn end(&self) -> usize {
        self.view.end()
    }

    fn enter(&self, range: Range<usize>, parent: NodeId) -> Self {
        DissectorArgs {
            view: self.view.subview(range.clone()),
            offset: range.start,
            parent,
            depth: self.depth + 1,
            opts: self.opts,
        }
    }
}

/// Walks tagged fields from `args.offset` to the end of the region, looking each tag up in
/// `fields`. Returns the offset the walk stopped at.
pub fn dissect_fields<'tvb, F, T>(
    args: &DissectorArgs<'_, 'tvb>,
    fields: &'static [FieldDescriptor],
    tree: &mut T,
) -> usize
where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    let mut offset = args.offset;
    while offset < args.end() {
        let header = match read_header::<F, T>(&args.at(offset), tree) {
            Some(header) => header,
            None => return args.end(),
        };
        offset = match lookup(fields, header.tag) {
            Some(field) => dissect_field::<F, T>(&args.at(offset), &header, field, tree),
            None => dissect_unknown(
                &args.at(offset),
                &header,
                DecodeError::UnknownTag { tag: header.tag },
                tree,
            ),
        };
    }
    offset
}

/// Dissects one field whose header has already been read at `args.offset`. Returns the offset
/// just past it.
pub fn dissect_field<'tvb, F, T>(
    args: &DissectorArgs<'_, 'tvb>,
    header: &Header,
    field: &'static FieldDescriptor,
    tree: &mut T,
) -> usize
where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    let (range, overrun) = field_range(args, header);
    let value_range = range.start + header.header_len..range.end;

    let node = if !field.length.accepts(header.length) {
        let node = add_raw(args, tree, range.clone(), value_range, field);
        let err = DecodeError::WrongLength {
            field: field.name,
            expected: field.length,
            actual: header.length,
        };
        report(tree, node, range.clone(), err);
        node
    } else {
        match field.decoder {
            Decoder::Primitive(enc) => match args.view.bytes(value_range.clone()) {
                Ok(bytes) => match primitive::decode(enc, bytes) {
                    Ok(value) => tree.add_field(args.parent, range.clone(), field, value),
                    Err(err) => {
                        let node = tree.add_field(
                            args.parent,
                            range.clone(),
                            field,
                            FieldValue::Bytes(bytes),
                        );
                        report(tree, node, range.clone(), err);
                        node
                    }
                },
                Err(err) => {
                    let node = add_raw(args, tree, range.clone(), value_range, field);
                    report(tree, node, range.clone(), err);
                    node
                }
            },
            _ if args.depth >= args.opts.max_depth => {
                let node = add_raw(args, tree, range.clone(), value_range, field);
                let err = DecodeError::DepthExceeded {
                    max: args.opts.max_depth,
                };
                report(tree, node, range.clone(), err);
                node
            }
            decoder => {
                let node = tree.add_subtree(args.parent, range.clone(), field);
                let child = args.enter(value_range, node);
                dissect_value::<F, T>(&child, decoder, tree);
                node
            }
        }
    };

    if let Some(err) = overrun {
        report(tree, node, range.clone(), err);
    }
    range.end
}

/// Walks a region holding the value of a structural decoder.
pub fn dissect_value<'tvb, F, T>(args: &DissectorArgs<'_, 'tvb>, decoder: Decoder, tree: &mut T)
where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    match decoder {
        Decoder::Sequence(fields) => {
            dissect_fields::<F, T>(args, fields, tree);
        }
        Decoder::Choice(alternatives) => dissect_choice::<F, T>(args, alternatives, tree),
        Decoder::SequenceOf(element) | Decoder::SetOf(element) => {
            dissect_elements::<F, T>(args, element, tree)
        }
        // Leaves never get a region of their own.
        Decoder::Primitive(_) => {}
    }
}

/// Walks an explicitly tagged CHOICE: exactly one alternative, matched on its own tag.
pub fn dissect_choice<'tvb, F, T>(
    args: &DissectorArgs<'_, 'tvb>,
    alternatives: &'static [FieldDescriptor],
    tree: &mut T,
) where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    if args.offset >= args.end() {
        report(
            tree,
            args.parent,
            args.view.range(),
            DecodeError::invalid("CHOICE without an alternative"),
        );
        return;
    }
    let header = match read_header::<F, T>(args, tree) {
        Some(header) => header,
        None => return,
    };
    let next = dispatch_alternative::<F, T>(args, &header, alternatives, tree);

    if next < args.end() {
        let range = next..args.end();
        let node = if args.opts.unknown_as_bytes {
            let bytes = args.view.available_bytes(range.clone());
            tree.add_field(args.parent, range.clone(), &TRAILING_DATA, FieldValue::Bytes(bytes))
        } else {
            args.parent
        };
        report(tree, node, range.clone(), DecodeError::TrailingData(range.len()));
    }
}

/// Walks the elements of a SEQUENCE OF or SET OF in wire order.
pub fn dissect_elements<'tvb, F, T>(
    args: &DissectorArgs<'_, 'tvb>,
    element: &'static FieldDescriptor,
    tree: &mut T,
) where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    let mut offset = args.offset;
    while offset < args.end() {
        let here = args.at(offset);
        let header = match read_header::<F, T>(&here, tree) {
            Some(header) => header,
            None => return,
        };
        offset = match element.decoder {
            // An untagged CHOICE element carries the tag of its alternative.
            Decoder::Choice(alternatives) => {
                dispatch_alternative::<F, T>(&here, &header, alternatives, tree)
            }
            _ if header.tag == element.tag => dissect_field::<F, T>(&here, &header, element, tree),
            _ => dissect_unknown(
                &here,
                &header,
                DecodeError::UnexpectedTag {
                    expected: element.tag,
                    found: header.tag,
                },
                tree,
            ),
        };
    }
}

fn dispatch_alternative<'tvb, F, T>(
    args: &DissectorArgs<'_, 'tvb>,
    header: &Header,
    alternatives: &'static [FieldDescriptor],
    tree: &mut T,
) -> usize
where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    match lookup(alternatives, header.tag) {
        Some(alt) => {
            debug!(tag = %header.tag, alternative = alt.name, "choice");
            dissect_field::<F, T>(args, header, alt, tree)
        }
        None => dissect_unknown(
            args,
            header,
            DecodeError::UnknownChoiceTag { tag: header.tag },
            tree,
        ),
    }
}

/// Skips a field nothing knows about, leaving an opaque item and a diagnostic behind.
pub fn dissect_unknown<'tvb, T>(
    args: &DissectorArgs<'_, 'tvb>,
    header: &Header,
    err: DecodeError,
    tree: &mut T,
) -> usize
where
    T: ProtoTree<'tvb> + ?Sized,
{
    let (range, overrun) = field_range(args, header);
    let node = if args.opts.unknown_as_bytes {
        let value_range = range.start + header.header_len..range.end;
        add_raw(args, tree, range.clone(), value_range, &UNKNOWN_FIELD)
    } else {
        args.parent
    };
    report(tree, node, range.clone(), err);
    if let Some(err) = overrun {
        report(tree, node, range.clone(), err);
    }
    range.end
}

/// Reads the header at `args.offset`. A header that cannot be read makes the rest of the region
/// undecodable, so the failure is reported over all of it.
fn read_header<'tvb, F, T>(args: &DissectorArgs<'_, 'tvb>, tree: &mut T) -> Option<Header>
where
    F: HeaderFormat,
    T: ProtoTree<'tvb> + ?Sized,
{
    match F::read(&args.view, args.offset) {
        Ok(header) => {
            trace!(
                format = F::NAME,
                offset = args.offset,
                tag = %header.tag,
                length = header.length,
                "header"
            );
            Some(header)
        }
        Err(err) => {
            report(tree, args.parent, args.offset..args.end(), err);
            None
        }
    }
}

/// The bytes a field covers, clamped to the enclosing region.
fn field_range(
    args: &DissectorArgs<'_, '_>,
    header: &Header,
) -> (Range<usize>, Option<DecodeError>) {
    let start = args.offset;
    let declared_end = start.saturating_add(header.total_len());
    if declared_end <= args.end() {
        return (start..declared_end, None);
    }
    let err = DecodeError::LengthOverrun {
        length: header.length,
        remaining: args.end().saturating_sub(start + header.header_len),
    };
    (start..args.end(), Some(err))
}

/// Adds whatever part of the value was captured, as raw bytes.
fn add_raw<'tvb, T>(
    args: &DissectorArgs<'_, 'tvb>,
    tree: &mut T,
    range: Range<usize>,
    value_range: Range<usize>,
    field: &'static FieldDescriptor,
) -> NodeId
where
    T: ProtoTree<'tvb> + ?Sized,
{
    let bytes = args.view.available_bytes(value_range);
    tree.add_field(args.parent, range, field, FieldValue::Bytes(bytes))
}

pub(crate) fn report<'tvb, T>(tree: &mut T, node: NodeId, range: Range<usize>, err: DecodeError)
where
    T: ProtoTree<'tvb> + ?Sized,
{
    let diag = Diagnostic::new(range, err);
    debug!(severity = %diag.severity, range = ?diag.range, "{}", diag.error);
    tree.add_diagnostic(node, diag);
}

#[cfg(test)]
mod test_walker {
    use super::*;
    use crate::field::{Encoding, LengthRule, Tag};
    use crate::header::{Ber, Tlv8};
    use crate::tree::RecordingTree;

    const fn leaf(number: u32, abbrev: &'static str, encoding: Encoding) -> FieldDescriptor {
        FieldDescriptor {
            tag: Tag::context(number),
            name: abbrev,
            abbrev,
            blurb: None,
            decoder: Decoder::Primitive(encoding),
            length: LengthRule::Any,
            values: None,
        }
    }

    const INNER: &[FieldDescriptor] = &[leaf(1, "inner.a", Encoding::Uint)];

    const FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor {
            length: LengthRule::Exact(1),
            ..leaf(1, "a", Encoding::Uint)
        },
        leaf(2, "b", Encoding::Utf8),
        FieldDescriptor {
            decoder: Decoder::Sequence(INNER),
            ..leaf(3, "nested", Encoding::Bytes)
        },
    ];

    fn walk<'a, F: HeaderFormat>(data: &'a [u8], opts: &DissectorOptions) -> RecordingTree<'a> {
        let view = ByteView::new(data);
        let mut tree = RecordingTree::new(view.range());
        let root = tree.root();
        let args = DissectorArgs::new(view, root, opts);
        let end = dissect_fields::<F, _>(&args, FIELDS, &mut tree);
        assert_eq!(end, data.len());
        tree
    }

    #[test]
    fn leaves_and_subtrees() {
        let data = [0x01, 0x01, 0x05, 0x02, 0x02, b'h', b'i', 0x03, 0x03, 0x01, 0x01, 0x07];
        let tree = walk::<Tlv8>(&data, &DissectorOptions::default());
        assert_eq!(tree.find("a").unwrap().value(), Some(&FieldValue::Uint(5)));
        assert_eq!(tree.find("b").unwrap().value(), Some(&FieldValue::Str("hi".into())));
        let nested = tree.find("nested").unwrap();
        assert_eq!(nested.range, 7..12);
        assert_eq!(tree.find("inner.a").unwrap().range, 9..12);
        assert_eq!(tree.diagnostics().count(), 0);
    }

    #[test]
    fn wrong_length_shows_raw_bytes_and_moves_on() {
        let data = [0x01, 0x02, 0x00, 0x05, 0x02, 0x01, b'x'];
        let tree = walk::<Tlv8>(&data, &DissectorOptions::default());
        let a = tree.find("a").unwrap();
        assert_eq!(a.value(), Some(&FieldValue::Bytes(&[0x00, 0x05])));
        assert!(matches!(
            a.diagnostics[0].error,
            DecodeError::WrongLength { actual: 2, .. }
        ));
        assert!(tree.find("b").is_some());
    }

    #[test]
    fn unknown_tags_are_skipped() {
        let data = [0x09, 0x01, 0xff, 0x01, 0x01, 0x05];
        let tree = walk::<Tlv8>(&data, &DissectorOptions::default());
        let unknown = tree.find("tlvdf.unknown").unwrap();
        assert_eq!(unknown.range, 0..3);
        assert_eq!(
            unknown.diagnostics[0].error,
            DecodeError::UnknownTag {
                tag: Tag::context(9)
            }
        );
        assert!(tree.find("a").is_some());

        let opts = DissectorOptions {
            unknown_as_bytes: false,
            ..Default::default()
        };
        let tree = walk::<Tlv8>(&data, &opts);
        assert!(tree.find("tlvdf.unknown").is_none());
        assert_eq!(tree.node(tree.root()).diagnostics.len(), 1);
    }

    #[test]
    fn overlong_fields_are_clamped() {
        let data = [0x01, 0x01, 0x05, 0x02, 0x09, b'a', b'b'];
        let tree = walk::<Tlv8>(&data, &DissectorOptions::default());
        let b = tree.find("b").unwrap();
        assert_eq!(b.range, 3..7);
        assert!(b
            .diagnostics
            .iter()
            .any(|d| d.error == DecodeError::LengthOverrun { length: 9, remaining: 2 }));
    }

    #[test]
    fn truncated_headers_end_the_region() {
        let data = [0x01, 0x01, 0x05, 0x02];
        let tree = walk::<Tlv8>(&data, &DissectorOptions::default());
        let diags = &tree.node(tree.root()).diagnostics;
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range, 3..4);
        assert!(matches!(diags[0].error, DecodeError::TruncatedHeader { .. }));
    }

    #[test]
    fn depth_guard() {
        let data = [0x03, 0x03, 0x01, 0x01, 0x07];
        let opts = DissectorOptions {
            max_depth: 0,
            ..Default::default()
        };
        let tree = walk::<Tlv8>(&data, &opts);
        let nested = tree.find("nested").unwrap();
        assert_eq!(nested.value(), Some(&FieldValue::Bytes(&[0x01, 0x01, 0x07])));
        assert_eq!(nested.diagnostics[0].error, DecodeError::DepthExceeded { max: 0 });
        assert!(tree.find("inner.a").is_none());
    }

    const ALTERNATIVES: &[FieldDescriptor] = &[
        leaf(1, "alt.one", Encoding::Uint),
        leaf(2, "alt.two", Encoding::Bool),
    ];
    static LIST_ELEMENT: FieldDescriptor = FieldDescriptor {
        tag: Tag::universal(0),
        name: "element",
        abbrev: "element",
        blurb: None,
        decoder: Decoder::Choice(ALTERNATIVES),
        length: LengthRule::Any,
        values: None,
    };

    #[test]
    fn choice_takes_one_alternative() {
        let data = [0x81, 0x01, 0x07, 0x82, 0x01, 0xff];
        let view = ByteView::new(&data);
        let mut tree = RecordingTree::new(view.range());
        let root = tree.root();
        let opts = DissectorOptions::default();
        dissect_choice::<Ber, _>(&DissectorArgs::new(view, root, &opts), ALTERNATIVES, &mut tree);
        assert_eq!(tree.find("alt.one").unwrap().value(), Some(&FieldValue::Uint(7)));
        assert!(tree.find("alt.two").is_none());
        let trailing = tree.find("tlvdf.trailing_data").unwrap();
        assert_eq!(trailing.range, 3..6);
        assert_eq!(trailing.diagnostics[0].error, DecodeError::TrailingData(3));
    }

    #[test]
    fn untagged_choice_elements() {
        let data = [0x81, 0x01, 0x07, 0x82, 0x01, 0xff, 0x83, 0x00, 0x81, 0x01, 0x08];
        let view = ByteView::new(&data);
        let mut tree = RecordingTree::new(view.range());
        let root = tree.root();
        let opts = DissectorOptions::default();
        let args = DissectorArgs::new(view, root, &opts);
        dissect_elements::<Ber, _>(&args, &LIST_ELEMENT, &mut tree);
        let ones: Vec<_> = tree
            .find_all("alt.one")
            .iter()
            .map(|n| n.value().cloned())
            .collect();
        assert_eq!(ones, [Some(FieldValue::Uint(7)), Some(FieldValue::Uint(8))]);
        assert_eq!(
            tree.find("alt.two").unwrap().value(),
            Some(&FieldValue::Bool(true))
        );
        let unknown = tree.find("tlvdf.unknown").unwrap();
        assert_eq!(
            unknown.diagnostics[0].error,
            DecodeError::UnknownChoiceTag {
                tag: Tag::context(3)
            }
        );
    }
}
