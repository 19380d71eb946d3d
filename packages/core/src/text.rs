//! Small text helpers for UI copy.

/// Append a plural "s" when `count` is greater than one.
pub fn pluralize(noun: &str, count: usize) -> String {
    if count > 1 {
        format!("{noun}s")
    } else {
        noun.to_string()
    }
}
