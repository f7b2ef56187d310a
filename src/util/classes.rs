//! Class-list editing on a raw `class` attribute.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Replace class `from` with `to`, keeping its position.
///
/// Returns `None` when `from` is not present, leaving the element untouched.
/// Duplicate tokens are collapsed, as `DOMTokenList.replace` does.
#[must_use]
pub fn replace_class(class_attr: &str, from: &str, to: &str) -> Option<String> {
    let tokens: Vec<&str> = class_attr.split_ascii_whitespace().collect();
    if !tokens.contains(&from) {
        return None;
    }
    let mut out: Vec<&str> = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = if token == from { to } else { token };
        if !out.contains(&token) {
            out.push(token);
        }
    }
    Some(out.join(" "))
}
