//! Shared naming utilities.

/// Converts a schema name to a C identifier (hyphens become underscores).
#[must_use]
pub fn to_c_identifier(s: &str) -> String {
    s.replace('-', "_")
}

/// Converts a snake_case name to camelCase, or PascalCase when
/// `first_upper` is set. Used by the output consumer for namespace and
/// class names.
#[must_use]
pub fn to_camel_case(s: &str, first_upper: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = first_upper;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
