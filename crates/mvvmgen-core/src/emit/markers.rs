use crate::emit::unit::{HINT_SUFFIX, SourceUnit};

// (type name, declaration), in emission order
const MARKERS: [(&str, &str); 6] = [
    ("AccessModifier", include_str!("templates/AccessModifier.cs")),
    ("NotifyAttribute", include_str!("templates/NotifyAttribute.cs")),
    ("AlsoNotifyAttribute", include_str!("templates/AlsoNotifyAttribute.cs")),
    (
        "CustomAttributeAttribute",
        include_str!("templates/CustomAttributeAttribute.cs"),
    ),
    ("LocalizeAttribute", include_str!("templates/LocalizeAttribute.cs")),
    (
        "NotifyDataErrorInfoAttribute",
        include_str!("templates/NotifyDataErrorInfoAttribute.cs"),
    ),
];

/// The marker declarations every pass emits first, unconditionally.
#[must_use]
pub fn marker_units() -> Vec<SourceUnit> {
    MARKERS
        .iter()
        .map(|(name, source)| SourceUnit::new(format!("{name}{HINT_SUFFIX}"), *source))
        .collect()
}
