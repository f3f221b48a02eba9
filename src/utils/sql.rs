/// Builds a `LIKE` pattern matching any value that contains `needle`.
/// Wildcards in the needle are escaped so they match literally; PostgreSQL
/// uses `\` as the default escape character.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
