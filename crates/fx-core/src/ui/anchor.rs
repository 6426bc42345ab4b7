/// Selector for an in-page anchor's target, or `None` for a bare `#`.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        s if s.starts_with('#') => Some(s),
        _ => None,
    }
}
