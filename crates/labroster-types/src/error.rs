use std::fmt;

/// Result type for labroster-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Course key did not carry a known `course-v1:` / `ccx-v1:` prefix
    InvalidCourseKey(String),

    /// Page numbers start at 1
    InvalidPage(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCourseKey(key) => write!(
                f,
                "Invalid course key '{}': expected a 'course-v1:' or 'ccx-v1:' prefix",
                key
            ),
            Error::InvalidPage(page) => write!(f, "Invalid page number {}: pages start at 1", page),
        }
    }
}

impl std::error::Error for Error {}
