use super::{LOCALIZE_ATTRIBUTE, find_by_simple_name};
use mvvmgen_host::{host::file_name, prelude::*};

/// The resource file name from `[Localize("...")]`, directory part removed.
/// `None` when there is no marker or the name is empty.
#[must_use]
pub fn localize_resource(attributes: &[AttributeData]) -> Option<String> {
    let attribute = find_by_simple_name(attributes, LOCALIZE_ATTRIBUTE)?;

    let path = attribute
        .constructor_arguments
        .iter()
        .rev()
        .find_map(TypedConstant::as_str)?;

    let name = file_name(path.trim());

    (!name.is_empty()).then(|| name.to_string())
}
