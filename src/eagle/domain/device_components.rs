use crate::eagle::domain::{children, Component, Device};
use xmltree::Element;

/// The result of a `device_details` or `device_query` call: one device
/// snapshot paired with its components. Constructed fresh per call, never
/// persisted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DeviceComponents {
    pub device: Device,
    pub components: Vec<Component>,
}

impl DeviceComponents {
    pub fn from_xml(node: &Element) -> DeviceComponents {
        let device = node.get_child("DeviceDetails").map(Device::from_xml).unwrap_or_default();
        let components = node
            .get_child("Components")
            .map(|components| children(components, "Component").map(Component::from_xml).collect())
            .unwrap_or_default();

        DeviceComponents { device, components }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_xml_pairs_the_device_with_its_components() {
        let node = Element::parse(
            "<DeviceQuery>\
               <DeviceDetails>\
                 <Name>Power Meter</Name>\
                 <HardwareAddress>0x00078d0000af29d6</HardwareAddress>\
               </DeviceDetails>\
               <Components>\
                 <Component><Name>Main</Name></Component>\
                 <Component><Name>Secondary</Name></Component>\
               </Components>\
             </DeviceQuery>"
                .as_bytes(),
        )
        .unwrap();

        let result = DeviceComponents::from_xml(&node);

        assert_eq!(result.device.name, Some("Power Meter".to_string()));
        assert_eq!(result.components.len(), 2);
        assert_eq!(result.components[0].name, Some("Main".to_string()));
        assert_eq!(result.components[1].name, Some("Secondary".to_string()));
    }

    #[test]
    fn from_xml_tolerates_missing_sections() {
        let node = Element::parse("<DeviceQuery/>".as_bytes()).unwrap();

        let result = DeviceComponents::from_xml(&node);

        assert_eq!(result.device, Device::default());
        assert_eq!(result.components, vec![]);
    }
}
