use std::collections::HashMap;

use tracing::warn;

use crate::field::{Decoder, FieldDescriptor};
use crate::Protocol;

/// Indices for every field a protocol can produce, keyed by filter abbreviation. Filling it in is
/// what a host does once at startup before any packet is seen.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    indices: HashMap<&'static str, usize>,
    fields: Vec<&'static FieldDescriptor>,
    conflicts: Vec<&'static str>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding everything `P` registers.
    pub fn for_protocol<P: Protocol>() -> Self {
        let mut registry = Self::new();
        P::register(&mut registry);
        registry
    }

    /// Registers a field and everything reachable from its decoder. If the abbreviation is
    /// already known, simply returns its index.
    pub fn register_field(&mut self, field: &'static FieldDescriptor) -> usize {
        if let Some(&idx) = self.indices.get(field.abbrev) {
            let existing = self.fields[idx];
            if existing.name != field.name || existing.tag != field.tag {
                warn!(
                    abbrev = field.abbrev,
                    existing = existing.name,
                    new = field.name,
                    "filter abbreviation registered twice"
                );
                self.conflicts.push(field.abbrev);
            }
            return idx;
        }

        let idx = self.fields.len();
        self.fields.push(field);
        self.indices.insert(field.abbrev, idx);

        match field.decoder {
            Decoder::Sequence(fields) | Decoder::Choice(fields) => self.register_table(fields),
            Decoder::SequenceOf(element) | Decoder::SetOf(element) => {
                self.register_field(element);
            }
            Decoder::Primitive(_) => (),
        }
        idx
    }

    pub fn register_table(&mut self, fields: &'static [FieldDescriptor]) {
        for field in fields {
            self.register_field(field);
        }
    }

    pub fn get(&self, abbrev: &str) -> Option<usize> {
        self.indices.get(abbrev).copied()
    }

    pub fn field(&self, idx: usize) -> Option<&'static FieldDescriptor> {
        self.fields.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Registered fields in index order.
    pub fn iter(&self) -> impl Iterator<Item = &'static FieldDescriptor> + '_ {
        self.fields.iter().copied()
    }

    /// Abbreviations that were registered by two different fields.
    pub fn conflicts(&self) -> &[&'static str] {
        &self.conflicts
    }
}

#[cfg(test)]
mod test_registry {
    use super::*;
    use crate::field::{Encoding, LengthRule, Tag};

    const INNER: &[FieldDescriptor] = &[
        FieldDescriptor {
            tag: Tag::context(1),
            name: "Value",
            abbrev: "test.outer.value",
            blurb: None,
            decoder: Decoder::Primitive(Encoding::Uint),
            length: LengthRule::Exact(1),
            values: None,
        },
        FieldDescriptor::bytes("Bandwidth", "test.outer.bw"),
    ];
    static OUTER: FieldDescriptor = FieldDescriptor {
        tag: Tag::context(11),
        name: "Outer",
        abbrev: "test.outer",
        blurb: None,
        decoder: Decoder::Sequence(INNER),
        length: LengthRule::Any,
        values: None,
    };

    #[test]
    fn registers_reachable_fields() {
        let mut registry = FieldRegistry::new();
        let idx = registry.register_field(&OUTER);
        assert_eq!(idx, 0);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("test.outer.bw"), Some(2));
        assert_eq!(registry.field(1).map(|f| f.name), Some("Value"));
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = FieldRegistry::new();
        let first = registry.register_field(&OUTER);
        let second = registry.register_field(&OUTER);
        registry.register_table(INNER);
        assert_eq!(first, second);
        assert_eq!(registry.len(), 3);
        assert!(registry.conflicts().is_empty());
    }

    #[test]
    fn clashing_abbrevs_are_noticed() {
        static CLASH: FieldDescriptor = FieldDescriptor::bytes("Something else", "test.outer.bw");
        let mut registry = FieldRegistry::new();
        registry.register_field(&OUTER);
        registry.register_field(&CLASH);
        assert_eq!(registry.conflicts(), ["test.outer.bw"]);
    }
}
