use crate::error::{LayoutError, Result};
use std::process::Command;
use tracing::debug;

use super::r#trait::CommandRunner;

pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Запуск: {} {:?}", program, args);

        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!("{} вернул ошибку: {}", program, stderr);
            return Err(LayoutError::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
