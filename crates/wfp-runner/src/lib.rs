mod cli;
mod run;

pub use cli::{Cli, Commands, FlattenCommand};
pub use run::{execute_flatten, RunnerError};
