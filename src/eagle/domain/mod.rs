mod component;
mod device;
mod device_components;
mod variable;

pub use component::Component;
pub use device::{Device, LastContact};
pub use device_components::DeviceComponents;
pub use variable::{Reading, Variable};

use xmltree::Element;

/// Returns the text content of the first child tag with the given name, or
/// `None` when the tag is absent. Absent tags are the norm: the Eagle omits
/// tags inconsistently across firmware revisions.
pub(crate) fn child_text(node: &Element, tag_name: &str) -> Option<String> {
    node.get_child(tag_name)
        .and_then(|tag| tag.get_text())
        .map(|text| text.into_owned())
}

/// Iterates over the direct element children with the given name.
pub(crate) fn children<'a>(node: &'a Element, tag_name: &'a str) -> impl Iterator<Item = &'a Element> {
    node.children
        .iter()
        .filter_map(|child| child.as_element())
        .filter(move |child| child.name == tag_name)
}
