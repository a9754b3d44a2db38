//! Identifier derivation shared by the decision builders and emitters.


const ASYNC_SUFFIX: &str = "Async";
const COMMAND_SUFFIX: &str = "Command";

// reserved C# keywords, sorted for binary search
const KEYWORDS: [&str; 77] = [
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class",
    "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event",
    "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
    "implicit", "in", "int", "interface", "internal", "is", "lock", "long", "namespace", "new",
    "null", "object", "operator", "out", "override", "params", "private", "protected", "public",
    "readonly", "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static",
    "string", "struct", "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong",
    "unchecked", "unsafe", "ushort", "using", "virtual", "void", "volatile", "while",
];

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `_name` and `__name` become `Name`. `None` for names made only of
/// underscores.
#[must_use]
pub fn property_name_from_field(field: &str) -> Option<String> {
    let trimmed = field.trim_start_matches('_');

    (!trimmed.is_empty()).then(|| upper_first(trimmed))
}

/// `ShowAsync` and `show` become `ShowCommand`.
#[must_use]
pub fn property_name_from_method(method: &str) -> String {
    let stem = match method.strip_suffix(ASYNC_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem,
        _ => method,
    };

    format!("{}{COMMAND_SUFFIX}", upper_first(stem))
}

/// `ShowCommand` becomes `_showCommand`; `@class` becomes `_class`.
#[must_use]
pub fn backing_field_from_property(property: &str) -> String {
    format!("_{}", lower_first(notification_name(property)))
}

/// The name a property raises change notifications under: a verbatim
/// identifier loses its `@`.
#[must_use]
pub fn notification_name(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

/// Whether `s` is a C# identifier. Reserved keywords only pass in their
/// verbatim `@` form.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let (verbatim, s) = match s.strip_prefix('@') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let mut chars = s.chars();

    let well_formed = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric());

    well_formed && (verbatim || !is_keyword(s))
}

/// Whether `s` is a reserved C# keyword.
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.binary_search(&s).is_ok()
}

/// Map arbitrary text onto an identifier fragment: every character that
/// cannot appear in an identifier becomes `_`, and a leading digit is
/// prefixed with `_`.
#[must_use]
pub fn sanitize_identifier(s: &str) -> String {
    let mut out: String = s
        .chars()
        .map(|c| if c == '_' || c.is_alphanumeric() { c } else { '_' })
        .collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}

/// Property name for a localization key. The key is trimmed, the first
/// character uppercased if it is a letter and replaced by `_` otherwise, and
/// every later non-alphanumeric character replaced by `_`.
#[must_use]
pub fn localized_property_name(key: &str) -> Option<String> {
    let mut chars = key.trim().chars();
    let first = chars.next()?;

    let mut name = if first.is_alphabetic() {
        first.to_uppercase().collect::<String>()
    } else {
        "_".to_string()
    };
    name.extend(chars.map(|c| if c.is_alphanumeric() { c } else { '_' }));

    Some(name)
}
