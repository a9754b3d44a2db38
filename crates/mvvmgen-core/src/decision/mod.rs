#[cfg(test)]
mod tests;

use crate::{
    ThisError,
    access::AccessorSplit,
    attribute::{self, NOTIFY_ATTRIBUTE, NotifyArgs},
    callback::Callback,
    command::{self, CommandShape},
    names,
};
use indexmap::IndexSet;
use mvvmgen_host::prelude::*;
use tracing::debug;

///
/// DecisionError
///
/// Reasons a candidate that passed eligibility still cannot produce a
/// property. The pass logs these and moves on.
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum DecisionError {
    #[error("'{member}': property name '{name}' is not a valid identifier")]
    InvalidIdentifier { member: String, name: String },

    #[error("'{member}' has no Notify attribute")]
    MissingNotifyAttribute { member: String },

    #[error("'{member}': property name '{name}' collides with its backing field")]
    NameCollision { member: String, name: String },

    #[error("'{member}': no command can wrap this method signature")]
    UnsupportedCommandSignature { member: String },
}

///
/// Backing
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Backing {
    /// The annotated user field stores the value.
    Field,

    /// A synthesized field stores a command wrapping the annotated method.
    Command(CommandShape),
}

///
/// NotifyDecision
///
/// Everything the member emitter needs for one property, resolved once.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NotifyDecision {
    pub property_name: String,
    pub backing_field_name: String,

    /// Fully qualified display text, nullable annotation included.
    pub value_type: String,

    pub callback: Option<Callback>,
    pub also_notify: IndexSet<String>,
    pub custom_attributes: Vec<String>,
    pub accessibility: AccessorSplit,
    pub use_command_manager: bool,
    pub backing: Backing,
    pub doc_comment: Option<Vec<String>>,
}

impl NotifyDecision {
    pub fn for_field<H>(
        host: &H,
        owner: Option<&TypeSymbol>,
        field: &FieldSymbol,
    ) -> Result<Self, DecisionError>
    where
        H: Host + ?Sized,
    {
        let args = notify_args(&field.name, &field.attributes)?;

        let property_name = match args.property_name_override() {
            Some(name) => name.to_string(),
            None => names::property_name_from_field(&field.name).ok_or_else(|| {
                DecisionError::InvalidIdentifier {
                    member: field.name.clone(),
                    name: String::new(),
                }
            })?,
        };

        let callback = args.callback_name().map(|name| {
            Callback::resolve(
                host,
                owner,
                name,
                &field.ty,
                args.prefer_callback_with_parameter,
            )
        });

        let use_command_manager = args.use_command_manager == Some(true)
            && command_manager_applies(host, &field.name, &field.ty);

        Self {
            property_name,
            backing_field_name: field.name.clone(),
            value_type: field.ty.display(),
            callback,
            also_notify: attribute::also_notify_names(&field.attributes),
            custom_attributes: attribute::custom_attributes(&field.attributes),
            accessibility: AccessorSplit::resolve(args.getter, args.setter),
            use_command_manager,
            backing: Backing::Field,
            doc_comment: field.doc_comment.clone(),
        }
        .validated(&field.name)
    }

    pub fn for_method<H>(
        host: &H,
        owner: Option<&TypeSymbol>,
        method: &MethodSymbol,
    ) -> Result<Self, DecisionError>
    where
        H: Host + ?Sized,
    {
        let args = notify_args(&method.name, &method.attributes)?;

        let shape = CommandShape::infer(method).ok_or_else(|| {
            DecisionError::UnsupportedCommandSignature {
                member: method.name.clone(),
            }
        })?;

        let property_name = args.property_name_override().map_or_else(
            || names::property_name_from_method(&method.name),
            ToString::to_string,
        );
        let backing_field_name = names::backing_field_from_property(&property_name);

        let value_type = TypeRef {
            name: shape.interface_type(),
            nullable: host.nullable_context().has_annotations(),
        };

        let callback = args.callback_name().map(|name| {
            Callback::resolve(
                host,
                owner,
                name,
                &value_type,
                args.prefer_callback_with_parameter,
            )
        });

        Self {
            property_name,
            backing_field_name,
            value_type: value_type.display(),
            callback,
            also_notify: attribute::also_notify_names(&method.attributes),
            custom_attributes: attribute::custom_attributes(&method.attributes),
            accessibility: AccessorSplit::resolve(args.getter, args.setter),
            use_command_manager: args.use_command_manager == Some(true),
            backing: Backing::Command(shape),
            doc_comment: method.doc_comment.clone(),
        }
        .validated(&method.name)
    }

    #[must_use]
    pub const fn is_method_backed(&self) -> bool {
        matches!(self.backing, Backing::Command(_))
    }

    #[must_use]
    pub const fn command(&self) -> Option<&CommandShape> {
        match &self.backing {
            Backing::Command(shape) => Some(shape),
            Backing::Field => None,
        }
    }

    /// Whether the setter needs a block rather than an expression body.
    #[must_use]
    pub fn has_set_side_effects(&self) -> bool {
        self.use_command_manager || !self.also_notify.is_empty()
    }

    // validated
    fn validated(self, member: &str) -> Result<Self, DecisionError> {
        if !names::is_identifier(&self.property_name) {
            return Err(DecisionError::InvalidIdentifier {
                member: member.to_string(),
                name: self.property_name,
            });
        }

        if self.property_name == self.backing_field_name {
            return Err(DecisionError::NameCollision {
                member: member.to_string(),
                name: self.property_name,
            });
        }

        Ok(self)
    }
}

// notify_args
fn notify_args(member: &str, attributes: &[AttributeData]) -> Result<NotifyArgs, DecisionError> {
    attribute::find_by_simple_name(attributes, NOTIFY_ATTRIBUTE)
        .map(NotifyArgs::from_attribute)
        .ok_or_else(|| DecisionError::MissingNotifyAttribute {
            member: member.to_string(),
        })
}

// command_manager_applies
fn command_manager_applies<H>(host: &H, member: &str, ty: &TypeRef) -> bool
where
    H: Host + ?Sized,
{
    let applies = command::is_command_type(host, ty);

    if !applies {
        debug!(member, ty = %ty.display(), "UseCommandManager ignored for a non-command type");
    }

    applies
}
