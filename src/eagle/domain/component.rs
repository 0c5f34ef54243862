use crate::eagle::domain::{child_text, children, Variable};
use xmltree::Element;

/// A logical sub-unit of a device, e.g. the metering component of an
/// electricity meter, holding an ordered list of variables.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Component {
    pub name: Option<String>,
    pub fixed_id: Option<String>,
    pub hardware_id: Option<String>,
    pub variables: Vec<Variable>,
}

impl Component {
    pub fn from_xml(node: &Element) -> Component {
        let variables = node
            .get_child("Variables")
            .map(|variables| children(variables, "Variable").map(Variable::from_xml).collect())
            .unwrap_or_default();

        Component {
            name: child_text(node, "Name"),
            fixed_id: child_text(node, "FixedId"),
            hardware_id: child_text(node, "HardwareId"),
            variables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eagle::domain::Reading;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_xml_decodes_fields_and_variables_in_order() {
        let node = Element::parse(
            "<Component>\
               <Name>Main</Name>\
               <FixedId>0</FixedId>\
               <HardwareId>0x00078d0000af29d6</HardwareId>\
               <Variables>\
                 <Variable><Name>zigbee:InstantaneousDemand</Name><Value>1.5</Value></Variable>\
                 <Variable><Name>zigbee:Multiplier</Name><Value>1</Value></Variable>\
               </Variables>\
             </Component>"
                .as_bytes(),
        )
        .unwrap();

        let component = Component::from_xml(&node);

        assert_eq!(component.name, Some("Main".to_string()));
        assert_eq!(component.fixed_id, Some("0".to_string()));
        assert_eq!(component.hardware_id, Some("0x00078d0000af29d6".to_string()));
        assert_eq!(
            component.variables,
            vec![
                Variable::Reading(Reading {
                    name: Some("zigbee:InstantaneousDemand".to_string()),
                    value: Some("1.5".to_string()),
                    units: None,
                    description: None,
                }),
                Variable::Reading(Reading {
                    name: Some("zigbee:Multiplier".to_string()),
                    value: Some("1".to_string()),
                    units: None,
                    description: None,
                }),
            ]
        );
    }

    #[test]
    fn from_xml_without_variables_tag_yields_no_variables() {
        let node = Element::parse("<Component><Name>Main</Name></Component>".as_bytes()).unwrap();

        let component = Component::from_xml(&node);

        assert_eq!(component.variables, vec![]);
    }
}
