use super::{ALSO_NOTIFY_ATTRIBUTE, filter_by_class};
use indexmap::IndexSet;
use mvvmgen_host::prelude::*;

/// Names from every `[AlsoNotify(...)]` on a member, in first-occurrence
/// order with duplicates and empty strings removed.
#[must_use]
pub fn also_notify_names(attributes: &[AttributeData]) -> IndexSet<String> {
    let mut names = IndexSet::new();

    for attribute in filter_by_class(attributes, ALSO_NOTIFY_ATTRIBUTE) {
        let Some(first) = attribute.constructor_arguments.first() else {
            continue;
        };

        let values = match first {
            TypedConstant::Array(values) => values.as_slice(),
            single => std::slice::from_ref(single),
        };

        names.extend(
            values
                .iter()
                .filter_map(TypedConstant::as_str)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string),
        );
    }

    names
}
