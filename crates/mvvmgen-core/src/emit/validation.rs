use crate::emit::{template, unit::TypeUnit};

const SCAFFOLD_TEMPLATE: &str = include_str!("templates/validation_scaffold.cs");

/// The fixed `INotifyDataErrorInfo` member block; the nullable marker is
/// its only variable.
pub fn emit_validation_scaffold(unit: &mut TypeUnit, nullable: &str) {
    let source = template::substitute(SCAFFOLD_TEMPLATE, nullable);

    template::write_relative(unit.begin_member(), &source);
}
