use serde_json::Value;

// C# line terminators that pass through JSON escaping untouched
const LINE_TERMINATORS: [(char, &str); 3] = [
    ('\u{85}', "\\u0085"),
    ('\u{2028}', "\\u2028"),
    ('\u{2029}', "\\u2029"),
];

/// A quoted C# regular string literal for `value`.
#[must_use]
pub fn string_literal(value: &str) -> String {
    spell_line_terminators(&Value::String(value.to_string()).to_string())
}

/// XML-escaped text that stays on one `///` doc line.
#[must_use]
pub fn doc_escape(value: &str) -> String {
    let text = value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("\r\n", "\\r\\n")
        .replace('\r', "\\r")
        .replace('\n', "\\n");

    spell_line_terminators(&text)
}

// spell_line_terminators
fn spell_line_terminators(text: &str) -> String {
    LINE_TERMINATORS
        .iter()
        .fold(text.to_string(), |text, (c, escape)| text.replace(*c, escape))
}
