use super::*;
use crate::{
    access::AccessModifier,
    attribute::{ALSO_NOTIFY_ATTRIBUTE, CUSTOM_ATTRIBUTE_ATTRIBUTE},
};

fn notify() -> AttributeData {
    AttributeData::new(NOTIFY_ATTRIBUTE)
}

fn owner() -> TypeSymbol {
    TypeSymbol::class(Some("App"), "MainViewModel")
        .with_base("Minimal.Mvvm.BindableBase")
        .with_method(MethodSymbol::new("OnNameChanged", TypeRef::void()))
}

fn host() -> SymbolTable {
    SymbolTable::new()
        .with_nullable(NullableContext::Enabled)
        .with_type(owner())
}

#[test]
fn field_decision_uses_the_field_as_backing() {
    let field = FieldSymbol::new("_name", TypeRef::new("string")).with_attribute(notify());
    let decision = NotifyDecision::for_field(&host(), Some(&owner()), &field).expect("decision");

    assert_eq!(decision.property_name, "Name");
    assert_eq!(decision.backing_field_name, "_name");
    assert_eq!(decision.value_type, "string");
    assert_eq!(decision.backing, Backing::Field);
    assert_eq!(decision.accessibility, AccessorSplit::property_only(AccessModifier::Public));
    assert!(!decision.is_method_backed());
    assert!(!decision.has_set_side_effects());
}

#[test]
fn nullable_field_type_keeps_its_annotation() {
    let field =
        FieldSymbol::new("_description", TypeRef::nullable("string")).with_attribute(notify());
    let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

    assert_eq!(decision.value_type, "string?");
}

#[test]
fn explicit_name_and_resolved_callback() {
    let field = FieldSymbol::new("_name", TypeRef::new("string")).with_attribute(
        notify()
            .with_arg("MyName")
            .with_named("CallbackName", "OnNameChanged"),
    );
    let decision = NotifyDecision::for_field(&host(), Some(&owner()), &field).expect("decision");

    assert_eq!(decision.property_name, "MyName");
    assert_eq!(
        decision.callback,
        Some(Callback {
            name: "OnNameChanged".to_string(),
            has_value_parameter: false,
        })
    );
}

#[test]
fn property_name_equal_to_field_is_rejected() {
    let field = FieldSymbol::new("Name", TypeRef::new("string")).with_attribute(notify());
    let err = NotifyDecision::for_field(&host(), None, &field).unwrap_err();

    assert!(matches!(err, DecisionError::NameCollision { .. }));
}

#[test]
fn invalid_override_is_rejected() {
    let field = FieldSymbol::new("_name", TypeRef::new("string"))
        .with_attribute(notify().with_arg("my name"));
    let err = NotifyDecision::for_field(&host(), None, &field).unwrap_err();

    assert!(matches!(err, DecisionError::InvalidIdentifier { .. }));
}

#[test]
fn keyword_override_is_rejected_unless_verbatim() {
    let field = FieldSymbol::new("_name", TypeRef::new("string"))
        .with_attribute(notify().with_arg("class"));
    let err = NotifyDecision::for_field(&host(), None, &field).unwrap_err();

    assert!(matches!(
        err,
        DecisionError::InvalidIdentifier { ref name, .. } if name == "class"
    ));

    let field = FieldSymbol::new("_name", TypeRef::new("string"))
        .with_attribute(notify().with_arg("@class"));
    let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

    assert_eq!(decision.property_name, "@class");
}

#[test]
fn verbatim_command_name_backs_onto_a_plain_field() {
    let method = MethodSymbol::new("Raise", TypeRef::void())
        .with_attribute(notify().with_arg("@event"));
    let decision = NotifyDecision::for_method(&host(), None, &method).expect("decision");

    assert_eq!(decision.property_name, "@event");
    assert_eq!(decision.backing_field_name, "_event");
}

#[test]
fn decision_errors_convert_into_the_crate_error() {
    fn build(field: &FieldSymbol) -> Result<NotifyDecision, crate::Error> {
        Ok(NotifyDecision::for_field(&host(), None, field)?)
    }

    let field = FieldSymbol::new("_name", TypeRef::new("string"));
    let err = build(&field).unwrap_err();

    assert!(matches!(
        err,
        crate::Error::DecisionError(DecisionError::MissingNotifyAttribute { .. })
    ));
}

#[test]
fn underscore_only_field_without_override_is_rejected() {
    let field = FieldSymbol::new("__", TypeRef::new("int")).with_attribute(notify());

    assert!(NotifyDecision::for_field(&host(), None, &field).is_err());
}

#[test]
fn missing_marker_is_reported() {
    let field = FieldSymbol::new("_name", TypeRef::new("string"));
    let err = NotifyDecision::for_field(&host(), None, &field).unwrap_err();

    assert!(matches!(err, DecisionError::MissingNotifyAttribute { .. }));
}

#[test]
fn also_notify_and_custom_attributes_are_collected() {
    let field = FieldSymbol::new("_first", TypeRef::new("string"))
        .with_attribute(notify())
        .with_attribute(
            AttributeData::new(ALSO_NOTIFY_ATTRIBUTE)
                .with_arg(TypedConstant::Array(vec!["FullName".into(), "FullName".into()])),
        )
        .with_attribute(AttributeData::new(CUSTOM_ATTRIBUTE_ATTRIBUTE).with_arg("JsonIgnore"));
    let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

    assert_eq!(decision.also_notify.iter().collect::<Vec<_>>(), ["FullName"]);
    assert_eq!(decision.custom_attributes, ["[JsonIgnore]"]);
    assert!(decision.has_set_side_effects());
}

#[test]
fn command_manager_needs_a_command_type() {
    let attr = notify().with_named("UseCommandManager", true);
    let plain = FieldSymbol::new("_title", TypeRef::new("string")).with_attribute(attr.clone());
    let command = FieldSymbol::new(
        "_save",
        TypeRef::nullable("global::System.Windows.Input.ICommand"),
    )
    .with_attribute(attr);

    let h = host();
    assert!(!NotifyDecision::for_field(&h, None, &plain).expect("plain").use_command_manager);
    assert!(NotifyDecision::for_field(&h, None, &command).expect("command").use_command_manager);
}

#[test]
fn method_decision_synthesizes_a_command() {
    let method = MethodSymbol::new("ShowAsync", TypeRef::task())
        .with_param("token", TypeRef::cancellation_token())
        .with_attribute(notify());
    let decision = NotifyDecision::for_method(&host(), None, &method).expect("decision");

    assert_eq!(decision.property_name, "ShowCommand");
    assert_eq!(decision.backing_field_name, "_showCommand");
    assert_eq!(decision.value_type, "global::Minimal.Mvvm.IAsyncCommand?");
    assert!(decision.is_method_backed());
    assert!(decision.command().is_some_and(|shape| shape.cancellable));
}

#[test]
fn method_command_type_has_no_marker_without_annotations() {
    let method = MethodSymbol::new("Show", TypeRef::void()).with_attribute(notify());
    let h = SymbolTable::new();
    let decision = NotifyDecision::for_method(&h, None, &method).expect("decision");

    assert_eq!(decision.value_type, "global::System.Windows.Input.ICommand");
}

#[test]
fn unsupported_command_signature_is_rejected() {
    let method = MethodSymbol::new("Show", TypeRef::void())
        .with_param("token", TypeRef::cancellation_token())
        .with_attribute(notify());
    let err = NotifyDecision::for_method(&host(), None, &method).unwrap_err();

    assert!(matches!(err, DecisionError::UnsupportedCommandSignature { .. }));
}

#[test]
fn accessor_requests_are_resolved() {
    let field = FieldSymbol::new("_id", TypeRef::new("int")).with_attribute(
        notify()
            .with_named("Getter", i64::from(AccessModifier::Internal.rank()))
            .with_named("Setter", i64::from(AccessModifier::Protected.rank())),
    );
    let decision = NotifyDecision::for_field(&host(), None, &field).expect("decision");

    assert_eq!(
        decision.accessibility,
        AccessorSplit::with_setter(AccessModifier::ProtectedInternal, AccessModifier::Protected)
    );
}
