//! Interactive generator flow built on cliclack prompts and spinners

mod prompts;

pub use prompts::{run, CreateArgs};
