/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Only for patterns written in the source; caller-supplied text goes through
/// `Regex::new` so the error can be reported.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
