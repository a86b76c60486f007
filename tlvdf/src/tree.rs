//! The sink a dissection writes into, and an in-memory implementation of it.

use std::fmt::Write as _;
use std::ops::Range;

use crate::error::Diagnostic;
use crate::field::FieldDescriptor;
use crate::value::FieldValue;

/// Handle to a node previously added to a [`ProtoTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A protocol tree, as far as the walkers are concerned. Ranges are absolute frame offsets.
pub trait ProtoTree<'tvb> {
    /// Adds a leaf under `parent`.
    fn add_field(
        &mut self,
        parent: NodeId,
        range: Range<usize>,
        field: &'static FieldDescriptor,
        value: FieldValue<'tvb>,
    ) -> NodeId;

    /// Adds a node which later fields can be added under.
    fn add_subtree(
        &mut self,
        parent: NodeId,
        range: Range<usize>,
        field: &'static FieldDescriptor,
    ) -> NodeId;

    /// Marks a node as malformed.
    fn add_diagnostic(&mut self, node: NodeId, diagnostic: Diagnostic);
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<'tvb> {
    Root,
    Field(FieldValue<'tvb>),
    Subtree,
}

#[derive(Debug, Clone)]
pub struct Node<'tvb> {
    pub parent: Option<NodeId>,
    pub range: Range<usize>,
    pub field: Option<&'static FieldDescriptor>,
    pub kind: NodeKind<'tvb>,
    pub diagnostics: Vec<Diagnostic>,
    pub children: Vec<NodeId>,
}

impl<'tvb> Node<'tvb> {
    pub fn name(&self) -> &'static str {
        self.field.map_or("root", |f| f.name)
    }

    pub fn abbrev(&self) -> Option<&'static str> {
        self.field.map(|f| f.abbrev)
    }

    pub fn value(&self) -> Option<&FieldValue<'tvb>> {
        match &self.kind {
            NodeKind::Field(v) => Some(v),
            _ => None,
        }
    }

    /// The value as it would be shown, with its label if the field has one.
    pub fn display_value(&self) -> Option<String> {
        let value = self.value()?;
        let label = self
            .field
            .zip(value.as_i64())
            .and_then(|(field, v)| field.value_label(v));
        Some(match label {
            Some(label) => format!("{label} ({value})"),
            None => value.to_string(),
        })
    }
}

/// Keeps everything it is given. Nodes are stored in the order they were added, which for the
/// walkers is depth-first wire order.
#[derive(Debug, Clone)]
pub struct RecordingTree<'tvb> {
    nodes: Vec<Node<'tvb>>,
}

impl<'tvb> RecordingTree<'tvb> {
    pub fn new(range: Range<usize>) -> Self {
        RecordingTree {
            nodes: vec![Node {
                parent: None,
                range,
                field: None,
                kind: NodeKind::Root,
                diagnostics: Vec::new(),
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node<'tvb> {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node<'tvb>> + '_ {
        self.nodes[id.0].children.iter().map(|c| &self.nodes[c.0])
    }

    /// Number of nodes added, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<'tvb>> + '_ {
        self.nodes.iter()
    }

    /// First node added for a filter abbreviation.
    pub fn find(&self, abbrev: &str) -> Option<&Node<'tvb>> {
        self.nodes.iter().find(|n| n.abbrev() == Some(abbrev))
    }

    pub fn find_all(&self, abbrev: &str) -> Vec<&Node<'tvb>> {
        self.nodes
            .iter()
            .filter(|n| n.abbrev() == Some(abbrev))
            .collect()
    }

    /// Every diagnostic in the tree, in the order the nodes were added.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.nodes.iter().flat_map(|n| n.diagnostics.iter())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics()
            .any(|d| d.severity == crate::Severity::Error)
    }

    /// An indented text dump, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for child in &self.nodes[0].children {
            self.render_node(*child, 0, &mut out);
        }
        for diag in &self.nodes[0].diagnostics {
            let _ = writeln!(out, "! {diag}");
        }
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = &self.nodes[id.0];
        let indent = "    ".repeat(depth);
        match node.display_value() {
            Some(value) => {
                let _ = writeln!(out, "{indent}{}: {value}", node.name());
            }
            None => {
                let _ = writeln!(out, "{indent}{}", node.name());
            }
        }
        for diag in &node.diagnostics {
            let _ = writeln!(out, "{indent}    ! {diag}");
        }
        for child in &node.children {
            self.render_node(*child, depth + 1, out);
        }
    }

    fn push(
        &mut self,
        parent: NodeId,
        range: Range<usize>,
        field: &'static FieldDescriptor,
        kind: NodeKind<'tvb>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            range,
            field: Some(field),
            kind,
            diagnostics: Vec::new(),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

impl<'tvb> ProtoTree<'tvb> for RecordingTree<'tvb> {
    fn add_field(
        &mut self,
        parent: NodeId,
        range: Range<usize>,
        field: &'static FieldDescriptor,
        value: FieldValue<'tvb>,
    ) -> NodeId {
        self.push(parent, range, field, NodeKind::Field(value))
    }

    fn add_subtree(
        &mut self,
        parent: NodeId,
        range: Range<usize>,
        field: &'static FieldDescriptor,
    ) -> NodeId {
        self.push(parent, range, field, NodeKind::Subtree)
    }

    fn add_diagnostic(&mut self, node: NodeId, diagnostic: Diagnostic) {
        self.nodes[node.0].diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod test_recording_tree {
    use super::*;
    use crate::error::DecodeError;
    use crate::field::{Decoder, Encoding, LengthRule, Tag};

    static PHONES: FieldDescriptor = FieldDescriptor {
        tag: Tag::context(10),
        name: "Number of phone lines",
        abbrev: "test.num_phones",
        blurb: None,
        decoder: Decoder::Primitive(Encoding::Uint),
        length: LengthRule::Exact(1),
        values: None,
    };
    static STATE: FieldDescriptor = FieldDescriptor {
        tag: Tag::context(2),
        name: "State",
        abbrev: "test.state",
        blurb: None,
        decoder: Decoder::Primitive(Encoding::Int),
        length: LengthRule::Any,
        values: Some(&[(1, "activated"), (2, "deactivated")]),
    };
    static VENDOR: FieldDescriptor = FieldDescriptor {
        tag: Tag::context(8),
        name: "Cisco",
        abbrev: "test.cisco",
        blurb: None,
        decoder: Decoder::Sequence(&[]),
        length: LengthRule::Any,
        values: None,
    };

    fn sample() -> RecordingTree<'static> {
        let mut tree = RecordingTree::new(0..8);
        let root = tree.root();
        let vendor = tree.add_subtree(root, 0..8, &VENDOR);
        tree.add_field(vendor, 2..5, &PHONES, FieldValue::Uint(5));
        let state = tree.add_field(vendor, 5..8, &STATE, FieldValue::Int(2));
        tree.add_diagnostic(
            state,
            Diagnostic::new(5..8, DecodeError::TrailingData(1)),
        );
        tree
    }

    #[test]
    fn nodes_link_to_their_parents() {
        let tree = sample();
        assert_eq!(tree.len(), 3);
        assert!(!tree.is_empty());
        assert!(RecordingTree::new(0..0).is_empty());
        assert_eq!(RecordingTree::new(0..0).len(), 0);
        let vendor = tree.find("test.cisco").unwrap();
        assert_eq!(vendor.parent, Some(tree.root()));
        assert_eq!(vendor.children.len(), 2);
        let names: Vec<_> = tree.children(tree.root()).map(|n| n.name()).collect();
        assert_eq!(names, ["Cisco"]);
        assert_eq!(tree.children(vendor.children[0]).count(), 0);
    }

    #[test]
    fn lookups_by_abbrev() {
        let tree = sample();
        let phones = tree.find("test.num_phones").unwrap();
        assert_eq!(phones.value(), Some(&FieldValue::Uint(5)));
        assert_eq!(phones.range, 2..5);
        assert_eq!(tree.find_all("test.state").len(), 1);
        assert!(tree.find("test.missing").is_none());
    }

    #[test]
    fn values_show_their_labels() {
        let tree = sample();
        let state = tree.find("test.state").unwrap();
        assert_eq!(state.display_value().as_deref(), Some("deactivated (2)"));
    }

    #[test]
    fn diagnostics_are_collected() {
        let tree = sample();
        let diags: Vec<_> = tree.diagnostics().collect();
        assert_eq!(diags.len(), 1);
        assert!(!tree.has_errors());
    }

    #[test]
    fn render() {
        let want = "\
Cisco
    Number of phone lines: 5
    State: deactivated (2)
        ! [Warning] 1 bytes of trailing data (bytes 5..8)
";
        assert_eq!(sample().render(), want);
    }
}
