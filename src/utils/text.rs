/// Keep only printable ASCII (bytes 32..127)
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(|c| (' '..='~').contains(c)).collect()
}

/// Cut a sanitized name to at most `max` characters
pub fn truncate(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}
