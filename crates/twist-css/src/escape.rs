//! CSS class-name escaping.
//!
//! Turns a raw class-name fragment into a string that is safe inside a
//! class selector: characters outside `[A-Za-z0-9_-]` are backslash-escaped
//! and a leading digit becomes a code-point escape.

/// Escape a class-name fragment for use in a selector.
///
/// `duration-1/2` → `duration-1\/2`, `2xl` → `\32 xl`.
pub fn escape_class_name(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    let mut chars = fragment.chars();

    if let Some(first) = chars.next() {
        if first.is_ascii_digit() {
            // Code-point escape; the trailing space terminates it.
            escaped.push_str(&format!("\\{:x} ", first as u32));
        } else {
            push_escaped(&mut escaped, first);
        }
    }
    for ch in chars {
        push_escaped(&mut escaped, ch);
    }

    escaped
}

fn push_escaped(out: &mut String, ch: char) {
    if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || !ch.is_ascii() {
        out.push(ch);
    } else {
        out.push('\\');
        out.push(ch);
    }
}
