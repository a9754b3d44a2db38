//! Attribute-data normalization.
//!
//! Every recognized attribute is reduced once into a typed record here; no
//! later stage looks at raw `AttributeData` again.

mod also_notify;
mod custom;
mod localize;
mod notify;

#[cfg(test)]
mod tests;

pub use also_notify::also_notify_names;
pub use custom::custom_attributes;
pub use localize::localize_resource;
pub use notify::NotifyArgs;

use mvvmgen_host::prelude::*;

pub const NOTIFY_ATTRIBUTE: &str = "Minimal.Mvvm.NotifyAttribute";
pub const ALSO_NOTIFY_ATTRIBUTE: &str = "Minimal.Mvvm.AlsoNotifyAttribute";
pub const CUSTOM_ATTRIBUTE_ATTRIBUTE: &str = "Minimal.Mvvm.CustomAttributeAttribute";
pub const LOCALIZE_ATTRIBUTE: &str = "Minimal.Mvvm.LocalizeAttribute";
pub const NOTIFY_DATA_ERROR_INFO_ATTRIBUTE: &str = "Minimal.Mvvm.NotifyDataErrorInfoAttribute";

// simple_name
fn simple_name(metadata_name: &str) -> &str {
    metadata_name.rsplit('.').next().unwrap_or(metadata_name)
}

/// First attribute whose simple class name matches `metadata_name`'s.
#[must_use]
pub fn find_by_simple_name<'a>(
    attributes: &'a [AttributeData],
    metadata_name: &str,
) -> Option<&'a AttributeData> {
    let name = simple_name(metadata_name);

    attributes.iter().find(|attr| attr.name() == name)
}

/// Every attribute whose fully qualified class is `metadata_name`.
pub fn filter_by_class<'a>(
    attributes: &'a [AttributeData],
    metadata_name: &'a str,
) -> impl Iterator<Item = &'a AttributeData> + 'a {
    attributes.iter().filter(move |attr| attr.is(metadata_name))
}
