//! Line-break normalization (final stage of the pipeline)
//!
//! By this point the only newlines left in the fragment are the ones
//! blank source lines produced; every other line's terminator was
//! consumed when its block was wrapped. Each survivor becomes a
//! `<br />` tag so the fragment comes out newline-free.

/// Replace every remaining `\n` with `<br />`.
pub fn normalize_breaks(fragment: &str) -> String {
    fragment.replace('\n', "<br />")
}
