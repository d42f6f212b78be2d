//! Element tree serializer.
//!
//! An element's length precedes its payload, and a container's payload length
//! depends on every descendant. Sizes are therefore computed for the whole
//! tree first ([`encoded_len`]), then a buffer of exactly that size is filled
//! ([`serialize`]).

use crate::element::{Element, ElementValue};
use crate::error::Result;
use crate::vint;

/// Payload length of one element, without its id and length header.
pub fn payload_len(element: &Element) -> Result<u64> {
    Ok(match &element.value {
        ElementValue::Container(children) => encoded_len(children)?,
        ElementValue::UnsignedInt(v) => v.as_bytes().len() as u64,
        ElementValue::Float(v) => v.to_bytes().len() as u64,
        ElementValue::Opaque(bytes) => bytes.len() as u64,
    })
}

/// Total bytes one element occupies: id, length and payload.
pub fn element_len(element: &Element) -> Result<u64> {
    let payload = payload_len(element)?;
    Ok(vint::encoded_width(element.id)? as u64 + vint::encoded_width(payload)? as u64 + payload)
}

/// Bytes [`serialize`] will produce for this sequence of siblings.
pub fn encoded_len(elements: &[Element]) -> Result<u64> {
    elements
        .iter()
        .try_fold(0u64, |total, element| Ok(total + element_len(element)?))
}

/// Serialize a sequence of sibling elements.
pub fn serialize(elements: &[Element]) -> Result<Vec<u8>> {
    let len = encoded_len(elements)?;
    let mut buf = Vec::with_capacity(len as usize);
    write_elements(elements, &mut buf)?;
    debug_assert_eq!(buf.len() as u64, len);
    Ok(buf)
}

fn write_elements(elements: &[Element], buf: &mut Vec<u8>) -> Result<()> {
    for element in elements {
        write_element(element, buf)?;
    }
    Ok(())
}

fn write_element(element: &Element, buf: &mut Vec<u8>) -> Result<()> {
    vint::encode(element.id, buf)?;
    vint::encode(payload_len(element)?, buf)?;

    match &element.value {
        ElementValue::Container(children) => write_elements(children, buf)?,
        ElementValue::UnsignedInt(v) => buf.extend_from_slice(v.as_bytes()),
        ElementValue::Float(v) => buf.extend_from_slice(&v.to_bytes()),
        ElementValue::Opaque(bytes) => buf.extend_from_slice(bytes),
    }

    Ok(())
}
