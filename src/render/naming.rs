//! Item names derived from an error name.

/// Strict and reserved keywords, in every edition.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

pub fn payload_type_name(error_name: &str) -> String {
    format!("{}Payload", error_name)
}

pub fn id_const_name(error_name: &str) -> String {
    format!("ERR_ID_{}", to_snake_case(error_name).to_ascii_uppercase())
}

pub fn constructor_name(error_name: &str) -> String {
    format!("new_{}", to_snake_case(error_name))
}

/// Field name as written in the payload struct, or `None` when the name
/// cannot be expressed as a Rust field.
pub fn field_ident(field_name: &str) -> Option<String> {
    if !is_identifier(field_name) {
        return None;
    }
    let snake = to_snake_case(field_name);
    if NON_RAW_KEYWORDS.contains(&snake.as_str()) || snake == "_" {
        return None;
    }
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        return Some(format!("r#{}", snake));
    }
    Some(snake)
}

/// Error names become type names verbatim, so they must start with an
/// uppercase ASCII letter and stay clear of keywords.
pub fn is_type_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && is_identifier(name)
        && !RUST_KEYWORDS.contains(&name)
}

pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `NotFound` -> `not_found`, `HTTPError` -> `http_error`, `Namespace` -> `namespace`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev = if i > 0 { Some(chars[i - 1]) } else { None };
            let next = chars.get(i + 1).copied();
            let starts_word = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if starts_word && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
