use crate::{
    access::AccessModifier,
    decision::NotifyDecision,
    emit::{EmitContext, command_manager::MANAGER_TYPE, unit::TypeUnit, writer::CodeWriter},
};

const ACTION_TYPE: &str = "global::System.Action";
const OLD_VALUE: &str = "oldValue";

/// Write one observable property in this order: cached callback field,
/// synthesized backing field, doc comment, forwarded attributes, the
/// property with its accessors, and for commands the factory method.
pub fn emit_property(unit: &mut TypeUnit, decision: &NotifyDecision, ctx: &mut EmitContext<'_>) {
    let marker = ctx.marker();
    let w = unit.begin_member();

    let callback_field = decision.callback.as_ref().map(|callback| {
        let field = format!("{}ChangedCallback", decision.backing_field_name);
        let generic = if callback.has_value_parameter {
            format!("<{}>", decision.value_type)
        } else {
            String::new()
        };

        w.write_line(&format!("private {ACTION_TYPE}{generic}{marker} {field};"));
        w.blank_line();

        format!("{field} ??= {}", callback.name)
    });

    if decision.is_method_backed() {
        w.write_line(&format!(
            "private {} {};",
            decision.value_type, decision.backing_field_name
        ));
    }

    for line in decision.doc_comment.iter().flatten() {
        w.write_line(&format!("/// {line}"));
    }

    for attribute in &decision.custom_attributes {
        w.write_line(attribute);
    }

    let split = decision.accessibility;
    w.write_line(&format!(
        "{}{} {}",
        prefix(split.property().keyword()),
        decision.value_type,
        decision.property_name
    ));
    w.open_block();

    w.write_line(&format!(
        "{}get => {};",
        prefix(split.getter().and_then(AccessModifier::keyword)),
        decision.backing_field_name
    ));

    let set_call = set_property_call(decision, callback_field.as_deref(), ctx);
    let setter = prefix(split.setter().and_then(AccessModifier::keyword));

    if decision.has_set_side_effects() {
        w.write_line(&format!("{setter}set"));
        w.open_block();
        write_setter_body(w, decision, &set_call, ctx);
        w.close_block();
    } else {
        w.write_line(&format!("{setter}set => {set_call};"));
    }

    w.close_block();

    if let Some(shape) = decision.command() {
        w.blank_line();
        w.write_line(&format!(
            "private {} Create{}() => {};",
            shape.interface_type(),
            decision.property_name,
            shape.construction()
        ));
    }
}

// set_property_call
// registers the property's own token before any also-notify token
fn set_property_call(
    decision: &NotifyDecision,
    callback: Option<&str>,
    ctx: &mut EmitContext<'_>,
) -> String {
    let mut args = vec![format!("ref {}", decision.backing_field_name), "value".to_string()];

    if ctx.event_args.is_active() {
        args.push(ctx.event_args.register(&decision.property_name));
    }
    if let Some(callback) = callback {
        args.push(callback.to_string());
    }

    format!("SetProperty({})", args.join(", "))
}

// write_setter_body
fn write_setter_body(
    w: &mut CodeWriter,
    decision: &NotifyDecision,
    set_call: &str,
    ctx: &mut EmitContext<'_>,
) {
    if decision.use_command_manager {
        ctx.command_manager.mark_used();
        w.write_line(&format!("var {OLD_VALUE} = {};", decision.backing_field_name));
    }

    w.write_line(&format!("if ({set_call})"));
    w.open_block();

    if decision.use_command_manager {
        w.write_line(&format!("{MANAGER_TYPE}.RemoveHandler({OLD_VALUE});"));
        w.write_line(&format!("{MANAGER_TYPE}.AddHandler(value);"));
    }

    let names = decision
        .also_notify
        .iter()
        .map(|name| ctx.event_args.argument(name))
        .collect::<Vec<_>>();

    match names.as_slice() {
        [] => {}
        [single] => w.write_line(&format!("RaisePropertyChanged({single});")),
        many => w.write_line(&format!("RaisePropertiesChanged({});", many.join(", "))),
    }

    w.close_block();
}

// prefix
// "keyword " or nothing
fn prefix(keyword: Option<&str>) -> String {
    keyword.map(|k| format!("{k} ")).unwrap_or_default()
}
