use crate::eagle::domain::child_text;
use xmltree::Element;

/// One named reading within a component. The protocol has two shapes for a
/// `Variable` node: a structured node with name/value/units/description
/// children, and — only in `device_details` responses — a bare text value
/// with no metadata. Which shape applies is decided once, up front, by
/// inspecting the node's direct text content.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Text(String),
    Reading(Reading),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Reading {
    pub name: Option<String>,
    pub value: Option<String>,
    pub units: Option<String>,
    pub description: Option<String>,
}

impl Variable {
    pub fn from_xml(node: &Element) -> Variable {
        let text = node.get_text().map(|text| text.trim().to_string()).unwrap_or_default();
        if !text.is_empty() {
            return Variable::Text(text);
        }

        Variable::Reading(Reading {
            name: child_text(node, "Name"),
            value: child_text(node, "Value"),
            units: child_text(node, "Units"),
            description: child_text(node, "Description"),
        })
    }

    pub fn as_reading(&self) -> Option<&Reading> {
        match self {
            Variable::Reading(reading) => Some(reading),
            Variable::Text(_) => None,
        }
    }
}
