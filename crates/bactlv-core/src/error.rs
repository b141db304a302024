use alloc::boxed::Box;
use alloc::vec::Vec;
use thiserror::Error;

use crate::encoding::tag::TagClass;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("buffer too small")]
    BufferTooSmall,
    #[error("value out of range")]
    ValueOutOfRange,
    #[error("invalid length")]
    InvalidLength,
    #[error("operation unsupported")]
    Unsupported,
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
    #[error("value does not match the field kind")]
    ValueMismatch,
    #[error("no constructed data decoder for object type {object_type}, property {property}")]
    UnknownConstructedData { object_type: u32, property: u32 },
    #[error("error serializing '{field}': {source}")]
    Field {
        field: &'static str,
        source: Box<EncodeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid tag")]
    InvalidTag,
    #[error("invalid length")]
    InvalidLength,
    #[error("invalid value")]
    InvalidValue,
    #[error("operation unsupported")]
    Unsupported,
    #[error("validation failed: {0}")]
    Validation(&'static str),
    #[error("tag number mismatch: expected {expected}, found {found}")]
    TagNumberMismatch { expected: u8, found: u8 },
    #[error("tag class mismatch: expected {expected:?}, found {found:?}")]
    TagClassMismatch { expected: TagClass, found: TagClass },
    #[error("unbalanced closing tag: expected {expected}, found {found}")]
    UnbalancedClosingTag { expected: u8, found: u8 },
    #[error("unmapped integer length {0}")]
    UnmappedIntegerLength(u32),
    #[error("no constructed data decoder for object type {object_type}, property {property}")]
    UnknownConstructedData { object_type: u32, property: u32 },
    #[error("error parsing '{field}': {source}")]
    Field {
        field: &'static str,
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Wraps `self` with the name of the field that was being parsed.
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    /// The innermost error of a field breadcrumb chain.
    pub fn root_cause(&self) -> &DecodeError {
        let mut current = self;
        while let Self::Field { source, .. } = current {
            current = source;
        }
        current
    }

    /// Field names from the outermost to the innermost failing field.
    pub fn path(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut current = self;
        while let Self::Field { field, source } = current {
            out.push(*field);
            current = source;
        }
        out
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.root_cause(), Self::UnexpectedEof)
    }

    /// Structural mismatches and truncation. Optional-field and array probes
    /// turn these into "absent"/"stop"; everything else must propagate.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::UnexpectedEof
                | Self::InvalidTag
                | Self::InvalidLength
                | Self::Validation(_)
                | Self::TagNumberMismatch { .. }
                | Self::TagClassMismatch { .. }
                | Self::UnbalancedClosingTag { .. }
                | Self::UnmappedIntegerLength(_)
                | Self::UnknownConstructedData { .. }
        )
    }
}

impl EncodeError {
    pub fn in_field(self, field: &'static str) -> Self {
        Self::Field {
            field,
            source: Box::new(self),
        }
    }

    pub fn root_cause(&self) -> &EncodeError {
        let mut current = self;
        while let Self::Field { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn path(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        let mut current = self;
        while let Self::Field { field, source } = current {
            out.push(*field);
            current = source;
        }
        out
    }
}

/// Attaches a field name to the error of a decode or encode step.
pub trait FieldContext {
    fn field(self, name: &'static str) -> Self;
}

impl<T> FieldContext for Result<T, DecodeError> {
    fn field(self, name: &'static str) -> Self {
        self.map_err(|e| e.in_field(name))
    }
}

impl<T> FieldContext for Result<T, EncodeError> {
    fn field(self, name: &'static str) -> Self {
        self.map_err(|e| e.in_field(name))
    }
}
