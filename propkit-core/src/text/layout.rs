//! Naming and indentation helpers shared by the classifier and emitters.

/// Upper-cases the first character: `count` -> `Count`.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character: `Count` -> `count`.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonical backing field for a property: `DisplayName` -> `_displayName`.
pub fn field_name_for(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 1);
    out.push('_');
    out.push_str(&lower_camel(property));
    out
}

/// Prefixes every line of `text` with `indent`.
///
/// Empty lines are indented too, so the output keeps exactly the shape of
/// the input.
pub fn reindent(text: &str, indent: &str) -> String {
    if indent.is_empty() {
        return text.to_owned();
    }

    let lines = text.split('\n').count();
    let mut out = String::with_capacity(text.len() + lines * indent.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(indent);
        out.push_str(line);
    }
    out
}
