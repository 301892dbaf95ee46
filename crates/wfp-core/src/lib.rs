pub mod issues;
pub mod reference;
pub mod run_field;

pub use issues::{IssueSeverity, PreProcessIssue};
pub use reference::{parse_reference, strip_scheme, Reference, FILE_SCHEME};
pub use run_field::{collect_run_strings, map_run_strings, RUN_KEY};
