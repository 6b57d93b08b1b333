use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

const COURSE_PREFIX: &str = "course-v1:";
const CLASS_PREFIX: &str = "ccx-v1:";

/// Course identifier, distinguished by key prefix.
///
/// Regular courses (`course-v1:`) list their roster through the enrollment
/// API; classes (`ccx-v1:`, custom child courses) go through the course
/// operations students API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseKey {
    Course(String),
    Class(String),
}

impl CourseKey {
    pub fn parse(raw: &str) -> Result<Self> {
        let key = raw.trim();
        if key.starts_with(COURSE_PREFIX) {
            Ok(CourseKey::Course(key.to_string()))
        } else if key.starts_with(CLASS_PREFIX) {
            Ok(CourseKey::Class(key.to_string()))
        } else {
            Err(Error::InvalidCourseKey(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CourseKey::Course(key) | CourseKey::Class(key) => key,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, CourseKey::Class(_))
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CourseKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        CourseKey::parse(&value)
    }
}

impl From<CourseKey> for String {
    fn from(key: CourseKey) -> Self {
        match key {
            CourseKey::Course(key) | CourseKey::Class(key) => key,
        }
    }
}

impl std::str::FromStr for CourseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CourseKey::parse(s)
    }
}
