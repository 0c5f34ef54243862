use crate::eagle::domain::child_text;
use xmltree::Element;

/// Identity and connectivity snapshot of one unit behind the Eagle. Every
/// field is optional because the gateway omits tags depending on the device
/// firmware revision.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Device {
    pub name: Option<String>,
    pub hardware_address: Option<String>,
    pub protocol: Option<String>,
    pub model_id: Option<String>,
    pub manufacturer: Option<String>,
    pub install_code: Option<String>,
    pub last_contact: Option<LastContact>,
    pub connection_status: Option<String>,
    pub network_address: Option<String>,
}

impl Device {
    pub fn from_xml(node: &Element) -> Device {
        Device {
            name: child_text(node, "Name"),
            hardware_address: child_text(node, "HardwareAddress"),
            protocol: child_text(node, "Protocol"),
            model_id: child_text(node, "ModelId"),
            manufacturer: child_text(node, "Manufacturer"),
            install_code: child_text(node, "InstallCode"),
            last_contact: child_text(node, "LastContact").map(|text| LastContact::parse(&text)),
            connection_status: child_text(node, "ConnectionStatus"),
            network_address: child_text(node, "NetworkAddress"),
        }
    }
}

/// The Eagle reports the last contact time as a hexadecimal counter, but some
/// firmware revisions return values that are not hex at all. Those are kept
/// verbatim instead of being treated as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LastContact {
    Timestamp(u64),
    Raw(String),
}

impl LastContact {
    pub fn parse(text: &str) -> LastContact {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        match u64::from_str_radix(digits, 16) {
            Ok(timestamp) => LastContact::Timestamp(timestamp),
            Err(_) => LastContact::Raw(text.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            LastContact::Timestamp(timestamp) => Some(*timestamp as f64),
            LastContact::Raw(raw) => raw.trim().parse::<f64>().ok().filter(|value| value.is_finite()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse_element(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn from_xml_decodes_all_fields() {
        let node = parse_element(
            "<Device>\
               <Name>Power Meter</Name>\
               <HardwareAddress>0x00078d0000af29d6</HardwareAddress>\
               <Protocol>Zigbee</Protocol>\
               <ModelId>electric_meter</ModelId>\
               <Manufacturer>Generic</Manufacturer>\
               <InstallCode>1122</InstallCode>\
               <LastContact>1a2b</LastContact>\
               <ConnectionStatus>Connected</ConnectionStatus>\
               <NetworkAddress>0x9f32</NetworkAddress>\
             </Device>",
        );

        assert_eq!(
            Device::from_xml(&node),
            Device {
                name: Some("Power Meter".to_string()),
                hardware_address: Some("0x00078d0000af29d6".to_string()),
                protocol: Some("Zigbee".to_string()),
                model_id: Some("electric_meter".to_string()),
                manufacturer: Some("Generic".to_string()),
                install_code: Some("1122".to_string()),
                last_contact: Some(LastContact::Timestamp(6699)),
                connection_status: Some("Connected".to_string()),
                network_address: Some("0x9f32".to_string()),
            }
        );
    }

    #[test]
    fn from_xml_leaves_absent_tags_unset() {
        let node = parse_element("<Device><Name>Power Meter</Name></Device>");

        let device = Device::from_xml(&node);

        assert_eq!(device.name, Some("Power Meter".to_string()));
        assert_eq!(device.hardware_address, None);
        assert_eq!(device.last_contact, None);
        assert_eq!(device.connection_status, None);
    }

    #[rstest]
    #[case("1a2b", LastContact::Timestamp(6699))]
    #[case("0x1a2b", LastContact::Timestamp(6699))]
    #[case("0", LastContact::Timestamp(0))]
    #[case("not-hex", LastContact::Raw("not-hex".to_string()))]
    #[case("", LastContact::Raw("".to_string()))]
    fn parse_last_contact(#[case] input: &str, #[case] expected: LastContact) {
        assert_eq!(LastContact::parse(input), expected);
    }

    #[rstest]
    #[case(LastContact::Timestamp(6699), Some(6699.0))]
    #[case(LastContact::Raw("12.5".to_string()), Some(12.5))]
    #[case(LastContact::Raw("not-hex".to_string()), None)]
    fn last_contact_as_f64(#[case] input: LastContact, #[case] expected: Option<f64>) {
        assert_eq!(input.as_f64(), expected);
    }
}
