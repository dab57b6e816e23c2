pub mod dry_run;
pub mod system;
mod r#trait;

pub use self::r#trait::{create_command_runner, CommandRunner};

#[cfg(test)]
pub mod mock;
