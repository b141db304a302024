//! Declarative field tables and the generic engine that walks them.
//!
//! A message is a slice of [`FieldSpec`]s. Each entry names a field, gives
//! its context tag (or `None` for application tagging), its kind and whether
//! it may be absent. [`decode_fields`] turns bytes into a [`Record`] and
//! [`encode_fields`] writes a record back, recomputing every header.

pub mod codec;
pub mod registry;
pub mod value;

pub use codec::{decode_fields, encode_fields, encode_to_vec, encoded_len};
pub use registry::{PropertyKind, PropertySchema, StandardSchema, RELINQUISH};
pub use value::{Record, Value};

use crate::encoding::tag::DataType;
use crate::types::EnumKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub tag: Option<u8>,
    pub kind: FieldKind,
    pub optional: bool,
}

impl FieldSpec {
    pub const fn context(name: &'static str, tag: u8, kind: FieldKind) -> Self {
        Self {
            name,
            tag: Some(tag),
            kind,
            optional: false,
        }
    }

    pub const fn application(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            tag: None,
            kind,
            optional: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(DataType),
    /// Any application-tagged primitive; wrapped in opening/closing tags
    /// when the field is context tagged.
    AnyApplication,
    Enum(EnumKind),
    /// Nested fields, wrapped in opening/closing tags when tagged.
    Sequence(&'static [FieldSpec]),
    /// Elements up to the closing tag of the field (when tagged) or of the
    /// enclosing constructed value.
    List(&'static FieldSpec),
    /// Alternative chosen by peeking the next header.
    Choice(&'static [FieldSpec]),
    /// Constructed data interpreted through the schema, keyed by the named
    /// sibling fields.
    PropertyValue {
        object_id: &'static str,
        property: &'static str,
        array_index: &'static str,
    },
}
