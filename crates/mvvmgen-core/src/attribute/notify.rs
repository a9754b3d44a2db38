use crate::access::AccessModifier;
use mvvmgen_host::prelude::*;
use tracing::warn;

///
/// NotifyArgs
///
/// The `[Notify]` arguments as written. `None` means the argument was not
/// given at all, which the resolvers treat differently from an explicit
/// `false` or `AccessModifier.Default`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotifyArgs {
    pub property_name: Option<String>,
    pub callback_name: Option<String>,
    pub prefer_callback_with_parameter: Option<bool>,
    pub getter: Option<AccessModifier>,
    pub setter: Option<AccessModifier>,
    pub use_command_manager: Option<bool>,
}

impl NotifyArgs {
    /// Positional arguments first, then named ones, so a named
    /// `PropertyName` overrides the constructor argument.
    #[must_use]
    pub fn from_attribute(attribute: &AttributeData) -> Self {
        let mut args = Self::default();

        if let Some(TypedConstant::Str(name)) = attribute.constructor_arguments.first() {
            args.property_name = Some(name.clone());
        }

        for (name, value) in &attribute.named_arguments {
            match name.as_str() {
                "PropertyName" => args.property_name = value.as_str().map(ToString::to_string),
                "CallbackName" => args.callback_name = value.as_str().map(ToString::to_string),
                "PreferCallbackWithParameter" => {
                    args.prefer_callback_with_parameter = value.as_bool();
                }
                "Getter" => args.getter = access_modifier(name, value),
                "Setter" => args.setter = access_modifier(name, value),
                "UseCommandManager" => args.use_command_manager = value.as_bool(),
                _ => warn!(argument = %name, "unexpected Notify argument, ignored"),
            }
        }

        args
    }

    /// The property-name override, unless blank.
    #[must_use]
    pub fn property_name_override(&self) -> Option<&str> {
        self.property_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// The callback name, unless blank.
    #[must_use]
    pub fn callback_name(&self) -> Option<&str> {
        self.callback_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

// access_modifier
fn access_modifier(name: &str, value: &TypedConstant) -> Option<AccessModifier> {
    let raw = value.as_int()?;
    let access = AccessModifier::from_value(raw);

    if access.is_none() {
        warn!(argument = %name, value = raw, "unknown AccessModifier value, treated as unset");
    }

    access
}
