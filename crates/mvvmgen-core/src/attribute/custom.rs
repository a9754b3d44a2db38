use super::{CUSTOM_ATTRIBUTE_ATTRIBUTE, filter_by_class};
use mvvmgen_host::prelude::*;

/// Attribute lines forwarded verbatim onto the generated property.
#[must_use]
pub fn custom_attributes(attributes: &[AttributeData]) -> Vec<String> {
    filter_by_class(attributes, CUSTOM_ATTRIBUTE_ATTRIBUTE)
        .filter_map(|attribute| attribute.constructor_arguments.first()?.as_str())
        .filter_map(bracketed)
        .collect()
}

// bracketed
// text already starting with '[' or ending with ']' is taken as written
fn bracketed(text: &str) -> Option<String> {
    let text = text.trim();

    if text.is_empty() {
        None
    } else if text.starts_with('[') || text.ends_with(']') {
        Some(text.to_string())
    } else {
        Some(format!("[{text}]"))
    }
}
