//! Domain-specific assertion macros for logcheck harnesses.
//!
//! These add context-rich failure messages that make it clear which test
//! record produced the unexpected verdict.

/// Assert that running a test case passes.
///
/// ```rust
/// assert_passes!(ws.case(":1:sample.log:Hello World"));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($case:expr) => {{
        let case: logcheck_core::TestCase = $case;
        match logcheck_core::run(&case) {
            Ok(outcome) if outcome.passed => {}
            Ok(outcome) => panic!(
                "assert_passes! failed:\n  record:   {}\n  found:    {}\n  expected: {}",
                case, outcome.count, outcome.expected
            ),
            Err(err) => panic!("assert_passes! failed:\n  record: {}\n  error:  {}", case, err),
        }
    }};
}

/// Assert that running a test case fails with the given diagnostic.
#[macro_export]
macro_rules! assert_fails_with {
    ($case:expr, $diagnostic:expr) => {{
        let case: logcheck_core::TestCase = $case;
        match logcheck_core::run(&case) {
            Ok(outcome) if !outcome.passed => {
                pretty_assertions::assert_eq!(outcome.diagnostic, $diagnostic, "record: {}", case)
            }
            Ok(outcome) => panic!(
                "assert_fails_with! failed: test passed.\n  record: {}\n  found:  {}",
                case, outcome.count
            ),
            Err(err) => panic!("assert_fails_with! failed:\n  record: {}\n  error:  {}", case, err),
        }
    }};
}
