/// Normalize an area or district name for joining: trim surrounding whitespace and lowercase.
pub fn normalize_area(name: &str) -> String {
    name.trim().to_lowercase()
}
