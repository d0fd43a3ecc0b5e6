//! Stable string codes for every error, for callers that need to branch
//! or report without matching on enum shape.

pub const QUERY_FAILED: &str = "QUERY_FAILED";
pub const CONNECTION_FAILED: &str = "CONNECTION_FAILED";
pub const PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";
pub const UNEXPECTED_RESULT: &str = "UNEXPECTED_RESULT";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Maps an error onto one of the codes above.
pub trait DataMapperErrorCode {
    fn error_code(&self) -> &'static str;
}
