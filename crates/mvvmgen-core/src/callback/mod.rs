#[cfg(test)]
mod tests;

use mvvmgen_host::prelude::*;

///
/// Callback
///
/// A change callback as the setter will invoke it: `Action` when
/// `has_value_parameter` is false, `Action<T>` otherwise.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Callback {
    pub name: String,
    pub has_value_parameter: bool,
}

impl Callback {
    /// Resolve `name` against the overloads declared on the enclosing type.
    ///
    /// An overload qualifies when it returns void and takes no parameter, or
    /// one parameter that `value_type` is assignable to. With several
    /// qualifying overloads the parameterized shape is chosen only if every
    /// one is parameterized, or if any is and `prefer_parameter` is
    /// explicitly true. A name with no members at all is trusted as an
    /// unparameterized callback declared elsewhere.
    #[must_use]
    pub fn resolve<H, L>(
        host: &H,
        lookup: Option<&L>,
        name: &str,
        value_type: &TypeRef,
        prefer_parameter: Option<bool>,
    ) -> Self
    where
        H: Host + ?Sized,
        L: MemberLookup,
    {
        let qualifying = lookup
            .map(|lookup| {
                lookup
                    .members_named(name)
                    .filter_map(MemberSymbol::as_method)
                    .filter_map(|method| qualifying_shape(host, method, value_type))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let has_value_parameter = match qualifying.as_slice() {
            [] => false,
            [single] => *single,
            many if prefer_parameter == Some(true) => many.iter().any(|p| *p),
            many => many.iter().all(|p| *p),
        };

        Self {
            name: name.to_string(),
            has_value_parameter,
        }
    }
}

// qualifying_shape
// Some(has_parameter) when the overload can serve as the callback
fn qualifying_shape<H>(host: &H, method: &MethodSymbol, value_type: &TypeRef) -> Option<bool>
where
    H: Host + ?Sized,
{
    if !method.returns_void() {
        return None;
    }

    match method.parameters.as_slice() {
        [] => Some(false),
        [param] if host.is_assignable(value_type, &param.ty) => Some(true),
        _ => None,
    }
}
