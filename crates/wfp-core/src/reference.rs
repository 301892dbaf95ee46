use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

pub const FILE_SCHEME: &str = "file://";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Reference {
    pub file: String,
    pub pointer: Option<String>,
}

impl Reference {
    pub fn new(file: impl Into<String>, pointer: Option<String>) -> Self {
        Self {
            file: file.into(),
            pointer,
        }
    }

    pub fn file_uri(&self) -> String {
        format!("{FILE_SCHEME}{}", self.file)
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{FILE_SCHEME}{}", self.file)?;
        if let Some(pointer) = &self.pointer {
            write!(f, "#{pointer}")?;
        }
        Ok(())
    }
}

fn dotted_name_regex() -> &'static Regex {
    static DOTTED_NAME: OnceLock<Regex> = OnceLock::new();
    DOTTED_NAME.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*(\.[A-Za-z_][A-Za-z0-9_-]*)+$")
            .expect("dotted name regex must compile")
    })
}

pub fn parse_reference(raw: &str) -> Option<Reference> {
    let stripped = raw.strip_prefix(FILE_SCHEME)?;
    if let Some((file, pointer)) = stripped.rsplit_once('#') {
        return Some(Reference::new(file, Some(pointer.to_string())));
    }
    // Legacy dotted fully-qualified names carry their pointer after the
    // final `.` instead of a `#` fragment.
    if dotted_name_regex().is_match(stripped) {
        if let Some((file, pointer)) = stripped.rsplit_once('.') {
            return Some(Reference::new(file, Some(pointer.to_string())));
        }
    }
    Some(Reference::new(stripped, None))
}

pub fn strip_scheme(raw: &str) -> &str {
    raw.strip_prefix(FILE_SCHEME).unwrap_or(raw)
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod tests;
