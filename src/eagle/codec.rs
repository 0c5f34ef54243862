use thiserror::Error;
use xmltree::{Element, XMLNode};

/// An outbound command envelope for the Eagle's `/cgi-bin/post_manager`
/// endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    name: String,
    hardware_address: Option<String>,
    components: Option<ComponentSelection>,
}

/// The `Components` sub-tree of a command. The protocol allows exactly one of
/// three forms: an "all components" marker, a set of variable names to read,
/// or a set of variable values to write.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSelection {
    /// `<All>Y</All>`: request every variable of every component.
    All,
    /// Read the named variables per component, optionally forcing the device
    /// to take a fresh reading instead of returning a cached one.
    Read {
        components: Vec<(String, Vec<String>)>,
        refresh: bool,
    },
    /// Write variable values per component (`device_control`).
    Write {
        components: Vec<(String, Vec<(String, String)>)>,
    },
}

impl Command {
    pub fn new(name: &str) -> Command {
        Command {
            name: name.to_string(),
            hardware_address: None,
            components: None,
        }
    }

    pub fn hardware_address(mut self, hardware_address: &str) -> Command {
        self.hardware_address = Some(hardware_address.to_string());
        self
    }

    pub fn components(mut self, selection: ComponentSelection) -> Command {
        self.components = Some(selection);
        self
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut buffer = Vec::new();
        self.to_xml().write(&mut buffer)?;
        Ok(buffer)
    }

    fn to_xml(&self) -> Element {
        let mut command = Element::new("Command");
        command.children.push(XMLNode::Element(text_element("Name", &self.name)));

        if let Some(hardware_address) = &self.hardware_address {
            let mut details = Element::new("DeviceDetails");
            details
                .children
                .push(XMLNode::Element(text_element("HardwareAddress", hardware_address)));
            command.children.push(XMLNode::Element(details));
        }

        if let Some(selection) = &self.components {
            command.children.push(XMLNode::Element(selection.to_xml()));
        }

        command
    }
}

impl ComponentSelection {
    fn to_xml(&self) -> Element {
        let mut components = Element::new("Components");
        match self {
            ComponentSelection::All => {
                components.children.push(XMLNode::Element(text_element("All", "Y")));
            }
            ComponentSelection::Read {
                components: requested,
                refresh,
            } => {
                for (component_name, variable_names) in requested {
                    let mut variables = Element::new("Variables");
                    for variable_name in variable_names {
                        let mut variable = Element::new("Variable");
                        variable.children.push(XMLNode::Element(text_element("Name", variable_name)));
                        if *refresh {
                            variable.children.push(XMLNode::Element(text_element("Refresh", "Y")));
                        }
                        variables.children.push(XMLNode::Element(variable));
                    }
                    components
                        .children
                        .push(XMLNode::Element(component_element(component_name, variables)));
                }
            }
            ComponentSelection::Write { components: writes } => {
                for (component_name, assignments) in writes {
                    let mut variables = Element::new("Variables");
                    for (variable_name, value) in assignments {
                        let mut variable = Element::new("Variable");
                        variable.children.push(XMLNode::Element(text_element("Name", variable_name)));
                        variable.children.push(XMLNode::Element(text_element("Value", value)));
                        variables.children.push(XMLNode::Element(variable));
                    }
                    components
                        .children
                        .push(XMLNode::Element(component_element(component_name, variables)));
                }
            }
        }
        components
    }
}

fn text_element(name: &str, text: &str) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text.to_string()));
    element
}

fn component_element(name: &str, variables: Element) -> Element {
    let mut component = Element::new("Component");
    component.children.push(XMLNode::Element(text_element("Name", name)));
    component.children.push(XMLNode::Element(variables));
    component
}

/// Parses a response body into an element tree.
///
/// The Eagle-200 returns unescaped ampersands in text content, which is not
/// well-formed XML. Only ` & ` occurrences (ampersand surrounded by spaces)
/// are repaired before parsing; broader repairs are unverified against real
/// device output.
pub fn parse_response(body: &str) -> Result<Element, ProtocolError> {
    let repaired = body.replace(" & ", " &amp; ");
    Ok(Element::parse(repaired.as_bytes())?)
}

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] xmltree::ParseError),
    #[error("could not serialize command: {0}")]
    Serialize(#[from] xmltree::Error),
}
