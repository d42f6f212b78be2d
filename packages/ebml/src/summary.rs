//! Serializable outline of an element tree, for inspecting recorder output.

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementKind, ElementValue};
use crate::error::Result;
use crate::writer;

/// Scalar value shown in a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Unsigned(u64),
    Float(f64),
}

/// One element of the outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSummary {
    /// Marker-stripped id, e.g. `0x8538067`
    pub id: String,

    /// Registry name, `Unknown` for unregistered ids
    pub name: String,

    pub kind: ElementKind,

    /// Payload size in bytes as it would be written
    pub size: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<SummaryValue>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<ElementSummary>,
}

impl ElementSummary {
    pub fn from_element(element: &Element) -> Result<Self> {
        let (value, children) = match &element.value {
            ElementValue::Container(children) => (None, summarize(children)?),
            ElementValue::UnsignedInt(v) => (v.value().map(SummaryValue::Unsigned), Vec::new()),
            ElementValue::Float(v) => (v.value().map(SummaryValue::Float), Vec::new()),
            ElementValue::Opaque(_) => (None, Vec::new()),
        };

        Ok(Self {
            id: format!("{:#x}", element.id),
            name: element.name().to_string(),
            kind: element.kind(),
            size: writer::payload_len(element)?,
            value,
            children,
        })
    }
}

/// Outline every element in `elements`.
pub fn summarize(elements: &[Element]) -> Result<Vec<ElementSummary>> {
    elements.iter().map(ElementSummary::from_element).collect()
}

/// Outline rendered as pretty-printed JSON.
pub fn to_json(elements: &[Element]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summarize(elements)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DURATION, INFO, SEGMENT, TIMECODE_SCALE};

    fn sample() -> Vec<Element> {
        vec![Element::container(
            SEGMENT,
            vec![
                Element::container(
                    INFO,
                    vec![
                        Element::unsigned(TIMECODE_SCALE, 1_000_000),
                        Element::float(DURATION, 5000.0),
                    ],
                ),
                Element::opaque(0x3fff_0001, vec![1, 2, 3]),
            ],
        )]
    }

    #[test]
    fn test_summarize_tree() {
        let summary = summarize(&sample()).unwrap();
        assert_eq!(summary.len(), 1);

        let segment = &summary[0];
        assert_eq!(segment.id, "0x8538067");
        assert_eq!(segment.name, "Segment");
        assert_eq!(segment.kind, ElementKind::Container);

        let info = &segment.children[0];
        assert_eq!(info.children[0].value, Some(SummaryValue::Unsigned(1_000_000)));
        assert_eq!(info.children[1].value, Some(SummaryValue::Float(5000.0)));
        assert_eq!(info.children[1].size, 8);

        let unknown = &segment.children[1];
        assert_eq!(unknown.name, "Unknown");
        assert_eq!(unknown.kind, ElementKind::Opaque);
        assert_eq!(unknown.size, 3);
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&sample()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[0]["name"], "Segment");
        assert_eq!(parsed[0]["kind"], "container");
        assert_eq!(parsed[0]["children"][0]["children"][0]["value"], 1_000_000);
        assert!(parsed[0]["children"][1].get("value").is_none());
        assert!(parsed[0]["children"][1].get("children").is_none());
    }
}
