#![allow(dead_code)]

use mvvmgen_core::{
    attribute::{ALSO_NOTIFY_ATTRIBUTE, NOTIFY_ATTRIBUTE},
    pass::DEFAULT_OBSERVABLE_BASE,
    prelude::*,
};
use std::sync::Once;

pub const VIEW_MODEL: &str = "App.MainViewModel";
pub const VIEW_MODEL_HINT: &str = "App.MainViewModel.g.cs";

static TRACING: Once = Once::new();

/// Route pass diagnostics to the test writer; `RUST_LOG`-style filtering is
/// left to the default level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

pub fn options() -> Options {
    Options {
        tool_name: "Minimal.Mvvm.SourceGenerator".to_string(),
        tool_version: "1.0.0".to_string(),
        ..Options::default()
    }
}

pub fn view_model() -> TypeSymbol {
    TypeSymbol::class(Some("App"), "MainViewModel").with_base(DEFAULT_OBSERVABLE_BASE)
}

pub fn notify() -> AttributeData {
    AttributeData::new(NOTIFY_ATTRIBUTE)
}

pub fn also_notify(names: &[&str]) -> AttributeData {
    AttributeData::new(ALSO_NOTIFY_ATTRIBUTE).with_arg(TypedConstant::Array(
        names.iter().map(|name| TypedConstant::from(*name)).collect(),
    ))
}

pub fn field(name: &str, ty: TypeRef, attributes: Vec<AttributeData>) -> Candidate {
    let mut field = FieldSymbol::new(name, ty);
    for attribute in attributes {
        field = field.with_attribute(attribute);
    }

    Candidate::field(NOTIFY_ATTRIBUTE, VIEW_MODEL, field)
}

pub fn method(method: MethodSymbol) -> Candidate {
    Candidate::method(NOTIFY_ATTRIBUTE, VIEW_MODEL, method.with_attribute(notify()))
}

pub fn generate(host: &SymbolTable, candidates: &[Candidate]) -> GeneratorOutput {
    init_tracing();

    Generator::new(options())
        .run(host, candidates, &NeverCancelled)
        .expect("generation pass")
}

pub fn view_model_text(output: &GeneratorOutput) -> &str {
    &output.unit(VIEW_MODEL_HINT).expect("view model unit").text
}
