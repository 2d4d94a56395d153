//! Exit code constants for the relay CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or unparsable file)
//! - 2: Configuration error (dangling reference, missing default agent)
//! - 3: Duplicate id within one collection
//! - 4: Lint warnings present while warnings are denied

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable file, or malformed YAML.
pub const USER_ERROR: i32 = 1;

/// Configuration error: a graph definition failed validation.
pub const CONFIGURATION_ERROR: i32 = 2;

/// Duplicate id: two entries of one collection share an id.
pub const DUPLICATE_ID: i32 = 3;

/// Lint failure: warnings were reported and `--deny-warnings` is in effect.
pub const LINT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIGURATION_ERROR,
            DUPLICATE_ID,
            LINT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
