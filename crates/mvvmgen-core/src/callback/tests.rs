use super::*;

const VALUE: &str = "global::App.Dog";

fn host() -> SymbolTable {
    SymbolTable::new()
        .with_type(TypeSymbol::class(Some("App"), "Animal"))
        .with_type(TypeSymbol::class(Some("App"), "Dog").with_base("App.Animal"))
}

fn no_param(name: &str) -> MethodSymbol {
    MethodSymbol::new(name, TypeRef::void())
}

fn with_param(name: &str, ty: &str) -> MethodSymbol {
    MethodSymbol::new(name, TypeRef::void()).with_param("value", TypeRef::new(ty))
}

fn owner(methods: Vec<MethodSymbol>) -> TypeSymbol {
    methods
        .into_iter()
        .fold(TypeSymbol::class(Some("App"), "Vm"), TypeSymbol::with_method)
}

fn resolve(ty: &TypeSymbol, prefer: Option<bool>) -> bool {
    Callback::resolve(&host(), Some(ty), "OnChanged", &TypeRef::new(VALUE), prefer)
        .has_value_parameter
}

#[test]
fn missing_member_is_trusted_as_unparameterized() {
    let ty = owner(vec![no_param("Other")]);
    let callback = Callback::resolve(&host(), Some(&ty), "OnChanged", &TypeRef::new(VALUE), None);

    assert_eq!(callback.name, "OnChanged");
    assert!(!callback.has_value_parameter);
}

#[test]
fn unknown_enclosing_type_is_trusted() {
    let callback =
        Callback::resolve::<_, TypeSymbol>(&host(), None, "OnChanged", &TypeRef::new(VALUE), None);

    assert!(!callback.has_value_parameter);
}

#[test]
fn single_overload_decides_the_shape() {
    assert!(!resolve(&owner(vec![no_param("OnChanged")]), None));
    assert!(resolve(&owner(vec![with_param("OnChanged", VALUE)]), None));
}

#[test]
fn parameter_may_be_a_base_type() {
    assert!(resolve(&owner(vec![with_param("OnChanged", "global::App.Animal")]), None));
    assert!(resolve(&owner(vec![with_param("OnChanged", "object")]), None));
}

#[test]
fn unassignable_parameter_does_not_qualify() {
    let ty = owner(vec![with_param("OnChanged", "int")]);

    assert!(!resolve(&ty, None));
    assert!(!resolve(&ty, Some(true)));
}

#[test]
fn unassignable_overload_leaves_the_other_as_single_match() {
    let ty = owner(vec![
        with_param("OnChanged", "int"),
        with_param("OnChanged", VALUE),
    ]);

    assert!(resolve(&ty, None));
}

#[test]
fn mixed_overloads_default_to_unparameterized() {
    let ty = owner(vec![no_param("OnChanged"), with_param("OnChanged", VALUE)]);

    assert!(!resolve(&ty, None));
    assert!(!resolve(&ty, Some(false)));
}

#[test]
fn prefer_flag_picks_parameterized_when_any_exists() {
    let ty = owner(vec![no_param("OnChanged"), with_param("OnChanged", VALUE)]);

    assert!(resolve(&ty, Some(true)));
}

#[test]
fn all_parameterized_overloads_pick_parameterized() {
    let ty = owner(vec![
        with_param("OnChanged", VALUE),
        with_param("OnChanged", "global::App.Animal"),
    ]);

    assert!(resolve(&ty, None));
}

#[test]
fn non_void_and_wide_overloads_do_not_qualify() {
    let returns_int = MethodSymbol::new("OnChanged", TypeRef::new("int"))
        .with_param("value", TypeRef::new(VALUE));
    let two_params = with_param("OnChanged", VALUE).with_param("extra", TypeRef::new("int"));
    let ty = owner(vec![returns_int, two_params]);

    assert!(!resolve(&ty, Some(true)));
}

#[test]
fn same_named_field_is_not_a_callback() {
    let ty = TypeSymbol::class(Some("App"), "Vm")
        .with_field(FieldSymbol::new("OnChanged", TypeRef::new("int")))
        .with_method(with_param("OnChanged", VALUE));

    assert!(resolve(&ty, None));
}
