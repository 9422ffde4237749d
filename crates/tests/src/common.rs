/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}
