//! Element tree parser.

use crate::element::{Element, ElementKind, ElementValue, Float, UnsignedInt};
use crate::error::Result;
use crate::registry;
use crate::vint;

/// Containers nested deeper than this are kept opaque.
pub const MAX_DEPTH: usize = 64;

/// Parse `bytes` as a sequence of sibling elements.
///
/// Lengths running past the end of the buffer are clamped to it, and ids
/// missing from the registry are kept opaque. The only failures are VINTs
/// that cannot be decoded at all.
pub fn parse(bytes: &[u8]) -> Result<Vec<Element>> {
    parse_level(bytes, 0)
}

fn parse_level(bytes: &[u8], depth: usize) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let (id, id_width) = vint::decode(bytes, cursor)?;
        cursor += id_width;
        let (length, length_width) = vint::decode(bytes, cursor)?;
        cursor += length_width;

        let remaining = (bytes.len() - cursor) as u64;
        let end = cursor + length.min(remaining) as usize;
        let payload = &bytes[cursor..end];

        elements.push(parse_element(id, payload, depth)?);
        cursor = end;
    }

    Ok(elements)
}

fn parse_element(id: u64, payload: &[u8], depth: usize) -> Result<Element> {
    let value = match registry::kind_of(id) {
        ElementKind::Container if depth < MAX_DEPTH => {
            ElementValue::Container(parse_level(payload, depth + 1)?)
        }
        ElementKind::Container => {
            log::warn!(
                "{} nested deeper than {} levels, keeping it opaque",
                registry::name_of(id),
                MAX_DEPTH
            );
            ElementValue::Opaque(payload.to_vec())
        }
        ElementKind::UnsignedInt => ElementValue::UnsignedInt(UnsignedInt::from_bytes(payload)),
        ElementKind::Float => ElementValue::Float(Float::from_bytes(payload)),
        ElementKind::Opaque => ElementValue::Opaque(payload.to_vec()),
    };
    Ok(Element::new(id, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    // EBML header { DocType "webm" } then Segment { Info { TimecodeScale 1ms } }
    const MINIMAL: &[u8] = &[
        0x1a, 0x45, 0xdf, 0xa3, 0x87, // EBML, 7 bytes
        0x42, 0x82, 0x84, b'w', b'e', b'b', b'm', // DocType
        0x18, 0x53, 0x80, 0x67, 0x8c, // Segment, 12 bytes
        0x15, 0x49, 0xa9, 0x66, 0x87, // Info, 7 bytes
        0x2a, 0xd7, 0xb1, 0x83, 0x0f, 0x42, 0x40, // TimecodeScale
    ];

    #[test]
    fn test_parse_minimal_header() {
        let elements = parse(MINIMAL).unwrap();
        assert_eq!(elements.len(), 2);

        let ebml = &elements[0];
        assert_eq!(ebml.name(), "EBML");
        assert_eq!(
            ebml.child(0x282).map(|el| &el.value),
            Some(&ElementValue::Opaque(b"webm".to_vec()))
        );

        let scale = elements[1]
            .child(registry::INFO)
            .and_then(|info| info.child(registry::TIMECODE_SCALE))
            .and_then(Element::as_unsigned);
        assert_eq!(scale, Some(1_000_000));
    }

    #[test]
    fn test_parse_clamps_overlong_length() {
        // Segment of unknown size, as MediaRecorder writes it
        let mut bytes = vec![0x18, 0x53, 0x80, 0x67];
        bytes.extend_from_slice(&[0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        bytes.extend_from_slice(&[0x15, 0x49, 0xa9, 0x66, 0x80]);

        let elements = parse(&bytes).unwrap();
        let segment = elements[0].children().unwrap();
        assert_eq!(segment.len(), 1);
        assert_eq!(segment[0].id, registry::INFO);
    }

    #[test]
    fn test_parse_unknown_id_is_opaque() {
        let bytes = [0x4f, 0xff, 0x82, 0xde, 0xad];
        let elements = parse(&bytes).unwrap();
        assert_eq!(elements[0].kind(), ElementKind::Opaque);
        assert_eq!(elements[0].value, ElementValue::Opaque(vec![0xde, 0xad]));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_truncated_header_fails() {
        assert!(matches!(
            parse(&[0x18, 0x53]),
            Err(Error::Truncated { .. })
        ));
        assert!(matches!(
            parse(&[0x00, 0x80]),
            Err(Error::InvalidVintMarker { .. })
        ));
    }

    #[test]
    fn test_parse_depth_limit() {
        // Segments nested well past the depth limit
        let mut bytes = Vec::new();
        for _ in 0..MAX_DEPTH + 4 {
            let mut outer = vec![0x18, 0x53, 0x80, 0x67];
            vint::encode(bytes.len() as u64, &mut outer).unwrap();
            outer.extend_from_slice(&bytes);
            bytes = outer;
        }

        let mut level = parse(&bytes).unwrap();
        let mut depth = 0;
        while let Some(ElementValue::Container(children)) = level.pop().map(|el| el.value) {
            level = children;
            depth += 1;
        }
        assert_eq!(depth, MAX_DEPTH);
    }
}
