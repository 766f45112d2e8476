//! Enforcement of internal consistency guarantees.
//!
//! Operations whose result domain is fixed by the type signature re-validate
//! the raw value they produce. A failed check means the closure rules or the
//! primitive arithmetic (overflow, `0 * inf`) broke the guarantee, which is
//! not something a caller can recover from.

/// Unwraps a re-validated result, panicking if the guarantee did not hold.
#[track_caller]
pub(crate) fn hold<T>(checked: Option<T>, operation: &'static str, domain: &'static str) -> T {
    match checked {
        Some(value) => value,
        None => {
            tracing::error!(operation, domain, "invariant violated");
            panic!("invariant violated: `{operation}` produced a value outside {domain}");
        }
    }
}
