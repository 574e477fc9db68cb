//! Exit code constants for the dotairc CLI.
//!
//! - 0: Success (missing templates are warnings and still exit 0)
//! - 1: User error (missing or empty `--stack`, bad config)
//! - 2: I/O failure (template directory or output file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure while reading templates or writing the output.
pub const IO_FAILURE: i32 = 2;
