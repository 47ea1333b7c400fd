//! Exit code constants for the readmequick CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing session, unknown section)
//! - 2: Validation failure (missing project fields, bad section selection)
//! - 3: Configuration error (bad config file, missing API key)
//! - 4: I/O failure (session or README could not be read/written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid session state.
pub const USER_ERROR: i32 = 1;

/// Validation failure: project metadata or section selection rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Configuration error: config file or credentials unusable.
pub const CONFIG_ERROR: i32 = 3;

/// I/O failure while reading or writing files.
pub const IO_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, CONFIG_ERROR, IO_FAILURE];
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
