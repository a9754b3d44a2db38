use super::*;
use crate::access::AccessModifier;

fn notify() -> AttributeData {
    AttributeData::new(NOTIFY_ATTRIBUTE)
}

fn also_notify(names: &[&str]) -> AttributeData {
    AttributeData::new(ALSO_NOTIFY_ATTRIBUTE).with_arg(TypedConstant::Array(
        names.iter().map(|n| TypedConstant::from(*n)).collect(),
    ))
}

fn custom(text: &str) -> AttributeData {
    AttributeData::new(CUSTOM_ATTRIBUTE_ATTRIBUTE).with_arg(text)
}

#[test]
fn positional_property_name_is_read() {
    let args = NotifyArgs::from_attribute(&notify().with_arg("MyName"));

    assert_eq!(args.property_name_override(), Some("MyName"));
}

#[test]
fn named_property_name_wins_over_positional() {
    let attr = notify()
        .with_arg("MyDescription")
        .with_named("PropertyName", "MyDescription2");

    let args = NotifyArgs::from_attribute(&attr);

    assert_eq!(args.property_name_override(), Some("MyDescription2"));
}

#[test]
fn blank_property_name_counts_as_absent() {
    let args = NotifyArgs::from_attribute(&notify().with_arg("   "));

    assert_eq!(args.property_name.as_deref(), Some("   "));
    assert_eq!(args.property_name_override(), None);
}

#[test]
fn missing_flags_stay_unset() {
    let args = NotifyArgs::from_attribute(&notify());

    assert_eq!(args, NotifyArgs::default());
    assert_eq!(args.prefer_callback_with_parameter, None);
    assert_eq!(args.getter, None);
}

#[test]
fn explicit_values_are_distinct_from_unset() {
    let attr = notify()
        .with_named("PreferCallbackWithParameter", false)
        .with_named("Getter", 0_i64)
        .with_named("Setter", 1_i64)
        .with_named("UseCommandManager", true)
        .with_named("CallbackName", "OnChanged");

    let args = NotifyArgs::from_attribute(&attr);

    assert_eq!(args.prefer_callback_with_parameter, Some(false));
    assert_eq!(args.getter, Some(AccessModifier::Default));
    assert_eq!(args.setter, Some(AccessModifier::Private));
    assert_eq!(args.use_command_manager, Some(true));
    assert_eq!(args.callback_name(), Some("OnChanged"));
}

#[test]
fn unknown_named_arguments_are_ignored() {
    let attr = notify()
        .with_named("IsVirtual", true)
        .with_named("PropertyName", "Title");

    let args = NotifyArgs::from_attribute(&attr);

    assert_eq!(args.property_name_override(), Some("Title"));
}

#[test]
fn out_of_range_access_values_are_unset() {
    let args = NotifyArgs::from_attribute(&notify().with_named("Getter", 42_i64));

    assert_eq!(args.getter, None);
}

#[test]
fn also_notify_deduplicates_in_first_occurrence_order() {
    let attrs = [
        also_notify(&["B", "A", "", "B"]),
        notify(),
        also_notify(&["C", "A"]),
    ];

    let names = also_notify_names(&attrs).into_iter().collect::<Vec<_>>();

    assert_eq!(names, ["B", "A", "C"]);
}

#[test]
fn also_notify_requires_the_qualified_class() {
    let attrs = [AttributeData::new("Other.AlsoNotifyAttribute")
        .with_arg(TypedConstant::Array(vec!["X".into()]))];

    assert!(also_notify_names(&attrs).is_empty());
}

#[test]
fn custom_attributes_are_bracketed() {
    let attrs = [
        custom("JsonIgnore"),
        custom("  [Browsable(false)]  "),
        custom("   "),
        custom("Obsolete]"),
        AttributeData::new("global::Minimal.Mvvm.CustomAttributeAttribute")
            .with_arg("System.Text.Json.Serialization.JsonPropertyName(\"n\")"),
    ];

    assert_eq!(
        custom_attributes(&attrs),
        [
            "[JsonIgnore]",
            "[Browsable(false)]",
            "Obsolete]",
            "[System.Text.Json.Serialization.JsonPropertyName(\"n\")]",
        ]
    );
}

#[test]
fn localize_takes_the_file_name_only() {
    let attrs = [AttributeData::new(LOCALIZE_ATTRIBUTE).with_arg("Resources/strings.json")];

    assert_eq!(localize_resource(&attrs).as_deref(), Some("strings.json"));
}

#[test]
fn localize_matches_by_simple_name() {
    let attrs = [AttributeData::new("LocalizeAttribute").with_arg("a.json")];

    assert_eq!(localize_resource(&attrs).as_deref(), Some("a.json"));
}

#[test]
fn localize_without_a_name_is_none() {
    let empty = [AttributeData::new(LOCALIZE_ATTRIBUTE).with_arg("")];
    let missing = [AttributeData::new(LOCALIZE_ATTRIBUTE)];

    assert_eq!(localize_resource(&empty), None);
    assert_eq!(localize_resource(&missing), None);
    assert_eq!(localize_resource(&[]), None);
}
