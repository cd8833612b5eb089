//! Shared fixtures for the render tests.
//!
//! The sources here mimic what the analysis backend actually sends back:
//! a titled report with a handful of sections, flat lists and a little
//! emphasis. Tests that care about one construct build their own minimal
//! input instead.

/// A realistic analysis report in the backend's dialect.
pub fn sample_report() -> &'static str {
    "# Resume Analysis Result\n\
     \n\
     ## Overall Impression\n\
     A solid mid-level profile with a clear systems focus.\n\
     \n\
     ## Strengths\n\
     * **Rust** and systems programming background\n\
     * Led a migration to *async* services\n\
     * Clear, quantified impact statements\n\
     \n\
     ## Areas to Improve\n\
     1. Add dates to the education section\n\
     2. Tighten the summary to three lines\n\
     3. List concrete team sizes\n\
     \n\
     Overall: strong candidate, minor formatting issues."
}

/// A short verdict-style report used by the export tests.
pub fn short_verdict() -> &'static str {
    "## Verdict\n* **Hire**"
}
