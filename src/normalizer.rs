/// Strip surrounding whitespace and uppercase everything in between.
///
/// Whitespace is Unicode `White_Space` plus the information separators
/// U+001C..=U+001F. Case mapping is full Unicode, so the result can be longer
/// than the input (`"ß"` becomes `"SS"`). Interior whitespace is left alone.
pub fn process(data: &str) -> String {
    data.trim_matches(is_edge_space).to_uppercase()
}

fn is_edge_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
