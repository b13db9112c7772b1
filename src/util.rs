use std::fmt::{self, Write};

/// Separator used by the lists' `Display` impls and by callers without a preference.
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Renders `items` as `[a<sep>b<sep>c]`, with no trailing separator.
pub(crate) fn render_list<'a, T, I>(items: I, sep: &str) -> String
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        // Writing into a `String` can't fail.
        let _ = write!(out, "{item}");
    }
    out.push(']');
    out
}

/// Renders `items` with a single space after each one, `a b c `.
pub(crate) fn render_spaced<'a, T, I>(items: I) -> String
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::new();
    for item in items {
        let _ = write!(out, "{item} ");
    }
    out
}
