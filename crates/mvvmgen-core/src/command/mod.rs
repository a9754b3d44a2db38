
use mvvmgen_host::prelude::*;

pub const ICOMMAND: &str = "global::System.Windows.Input.ICommand";
pub const ICOMMAND_GENERIC: &str = "global::Minimal.Mvvm.ICommand";
pub const IASYNC_COMMAND: &str = "global::Minimal.Mvvm.IAsyncCommand";
pub const RELAY_COMMAND: &str = "global::Minimal.Mvvm.RelayCommand";
pub const ASYNC_COMMAND: &str = "global::Minimal.Mvvm.AsyncCommand";

// command types recognized without asking the host, generic arity ignored
const KNOWN_COMMAND_TYPES: [&str; 6] = [
    "System.Windows.Input.ICommand",
    "Minimal.Mvvm.ICommand",
    "Minimal.Mvvm.IAsyncCommand",
    "Minimal.Mvvm.IRelayCommand",
    "Minimal.Mvvm.RelayCommand",
    "Minimal.Mvvm.AsyncCommand",
];

///
/// CommandKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandKind {
    Relay,
    Async,
}

///
/// CommandShape
///
/// What a method-backed member wraps: sync or async, the optional command
/// parameter, and whether the wrapper forwards a cancellation token.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandShape {
    pub kind: CommandKind,
    pub parameter: Option<TypeRef>,
    pub cancellable: bool,
    pub method_name: String,
}

impl CommandShape {
    /// `None` for signatures no command can wrap: other return types, more
    /// than one value parameter, or a token on a void method.
    #[must_use]
    pub fn infer(method: &MethodSymbol) -> Option<Self> {
        let (cancellable, values) = match method.parameters.split_last() {
            Some((last, rest)) if last.ty.is_cancellation_token() => (true, rest),
            _ => (false, method.parameters.as_slice()),
        };

        let kind = if method.returns_void() {
            CommandKind::Relay
        } else if method.return_type.is_task() {
            CommandKind::Async
        } else {
            return None;
        };

        if cancellable && kind == CommandKind::Relay {
            return None;
        }

        let parameter = match values {
            [] => None,
            [param] => Some(param.ty.clone()),
            _ => return None,
        };

        Some(Self {
            kind,
            parameter,
            cancellable,
            method_name: method.name.clone(),
        })
    }

    /// The property type, without a nullable annotation.
    #[must_use]
    pub fn interface_type(&self) -> String {
        match (self.kind, &self.parameter) {
            (CommandKind::Relay, None) => ICOMMAND.to_string(),
            (CommandKind::Relay, Some(p)) => format!("{ICOMMAND_GENERIC}<{}>", p.display()),
            (CommandKind::Async, None) => IASYNC_COMMAND.to_string(),
            (CommandKind::Async, Some(p)) => format!("{IASYNC_COMMAND}<{}>", p.display()),
        }
    }

    /// The expression constructing the concrete wrapper around the method.
    #[must_use]
    pub fn construction(&self) -> String {
        let wrapper = match self.kind {
            CommandKind::Relay => RELAY_COMMAND,
            CommandKind::Async => ASYNC_COMMAND,
        };
        let generic = self
            .parameter
            .as_ref()
            .map(|p| format!("<{}>", p.display()))
            .unwrap_or_default();
        let method = &self.method_name;

        let target = match (self.cancellable, self.parameter.is_some()) {
            (false, _) => method.clone(),
            (true, false) => format!("cancellationToken => {method}(cancellationToken)"),
            (true, true) => format!(
                "(parameter, cancellationToken) => {method}(parameter, cancellationToken)"
            ),
        };

        format!("new {wrapper}{generic}({target})")
    }
}

/// Whether values of `ty` are commands, so re-subscribing the command
/// manager on change makes sense.
#[must_use]
pub fn is_command_type<H>(host: &H, ty: &TypeRef) -> bool
where
    H: Host + ?Sized,
{
    let id = ty.id();
    let open = id.split('<').next().unwrap_or(id.as_str());

    KNOWN_COMMAND_TYPES.contains(&open)
        || host.implements(&id, &TypeId::new("System.Windows.Input.ICommand"))
}
