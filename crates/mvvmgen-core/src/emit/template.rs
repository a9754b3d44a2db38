use crate::emit::writer::CodeWriter;

const NULLABLE_PLACEHOLDER: &str = "{{nullable}}";
const SPACES_PER_LEVEL: usize = 4;

/// Replace the single substitution point of a fixed template.
#[must_use]
pub fn substitute(template: &str, nullable: &str) -> String {
    template.replace(NULLABLE_PLACEHOLDER, nullable)
}

/// Write `source` line by line, re-indenting each line relative to the
/// writer's current level. Leading spaces count four per level; blank
/// lines are written without indentation.
pub fn write_relative(w: &mut CodeWriter, source: &str) {
    for line in source.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            w.blank_line();
            continue;
        }

        let spaces = line.len() - line.trim_start().len();
        w.write_line_at(spaces / SPACES_PER_LEVEL, trimmed);
    }
}
