//! In-memory element tree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry;

/// How an element's payload is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Payload is a sequence of child elements
    Container,

    /// Big-endian unsigned integer
    UnsignedInt,

    /// IEEE-754 float, 4 or 8 bytes
    Float,

    /// Strings, binary blobs, dates and unknown ids, kept verbatim
    Opaque,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Container => write!(f, "container"),
            ElementKind::UnsignedInt => write!(f, "uint"),
            ElementKind::Float => write!(f, "float"),
            ElementKind::Opaque => write!(f, "opaque"),
        }
    }
}

/// Unsigned integer payload.
///
/// Kept as the original big-endian bytes so leading zero padding survives a
/// rewrite untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedInt(Vec<u8>);

impl UnsignedInt {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    /// Minimal big-endian encoding of `value` (one byte for zero).
    pub fn new(value: u64) -> Self {
        let width = (8 - value.leading_zeros() as usize / 8).max(1);
        Self(value.to_be_bytes()[8 - width..].to_vec())
    }

    /// Numeric value, or `None` if the significant bytes exceed 64 bits.
    pub fn value(&self) -> Option<u64> {
        let significant: &[u8] = match self.0.iter().position(|&b| b != 0) {
            Some(first) => &self.0[first..],
            None => &[],
        };
        if significant.len() > 8 {
            return None;
        }
        Some(
            significant
                .iter()
                .fold(0u64, |acc, &byte| acc * 256 + u64::from(byte)),
        )
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Float payload. The width read from the file is kept on rewrite.
#[derive(Debug, Clone, PartialEq)]
pub enum Float {
    F32(f32),
    F64(f64),

    /// Payload of a width other than 4 or 8, kept until overwritten
    Raw(Vec<u8>),
}

impl Float {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match bytes.len() {
            4 => Float::F32(f32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
            8 => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(bytes);
                Float::F64(f64::from_be_bytes(buf))
            }
            _ => Float::Raw(bytes.to_vec()),
        }
    }

    /// Numeric value. An empty payload reads as zero; other odd widths are
    /// unreadable.
    pub fn value(&self) -> Option<f64> {
        match self {
            Float::F32(v) => Some(f64::from(*v)),
            Float::F64(v) => Some(*v),
            Float::Raw(bytes) if bytes.is_empty() => Some(0.0),
            Float::Raw(_) => None,
        }
    }

    /// Overwrite the value, keeping a 4-byte width if that is what was read.
    pub fn set(&mut self, value: f64) {
        *self = if matches!(self, Float::F32(_)) {
            Float::F32(value as f32)
        } else {
            Float::F64(value)
        };
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Float::F32(v) => v.to_be_bytes().to_vec(),
            Float::F64(v) => v.to_be_bytes().to_vec(),
            Float::Raw(bytes) => bytes.clone(),
        }
    }
}

/// Decoded payload of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementValue {
    Container(Vec<Element>),
    UnsignedInt(UnsignedInt),
    Float(Float),
    Opaque(Vec<u8>),
}

impl ElementValue {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementValue::Container(_) => ElementKind::Container,
            ElementValue::UnsignedInt(_) => ElementKind::UnsignedInt,
            ElementValue::Float(_) => ElementKind::Float,
            ElementValue::Opaque(_) => ElementKind::Opaque,
        }
    }
}

/// One element: a marker-stripped id and its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: u64,
    pub value: ElementValue,
}

impl Element {
    pub fn new(id: u64, value: ElementValue) -> Self {
        Self { id, value }
    }

    pub fn container(id: u64, children: Vec<Element>) -> Self {
        Self::new(id, ElementValue::Container(children))
    }

    pub fn unsigned(id: u64, value: u64) -> Self {
        Self::new(id, ElementValue::UnsignedInt(UnsignedInt::new(value)))
    }

    /// New 8-byte float element.
    pub fn float(id: u64, value: f64) -> Self {
        Self::new(id, ElementValue::Float(Float::F64(value)))
    }

    pub fn opaque(id: u64, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(id, ElementValue::Opaque(bytes.into()))
    }

    pub fn kind(&self) -> ElementKind {
        self.value.kind()
    }

    pub fn name(&self) -> &'static str {
        registry::name_of(self.id)
    }

    pub fn children(&self) -> Option<&[Element]> {
        match &self.value {
            ElementValue::Container(children) => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.value {
            ElementValue::Container(children) => Some(children),
            _ => None,
        }
    }

    /// First direct child with the given id.
    pub fn child(&self, id: u64) -> Option<&Element> {
        find(self.children()?, id)
    }

    pub fn child_mut(&mut self, id: u64) -> Option<&mut Element> {
        find_mut(self.children_mut()?, id)
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        match &self.value {
            ElementValue::UnsignedInt(v) => v.value(),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match &self.value {
            ElementValue::Float(v) => v.value(),
            _ => None,
        }
    }
}

/// First element in `elements` with the given id.
pub fn find(elements: &[Element], id: u64) -> Option<&Element> {
    elements.iter().find(|el| el.id == id)
}

pub fn find_mut(elements: &mut [Element], id: u64) -> Option<&mut Element> {
    elements.iter_mut().find(|el| el.id == id)
}
