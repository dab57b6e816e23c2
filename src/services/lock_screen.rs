use crate::config::LockConfig;
use crate::error::Result;
use crate::layout_error;
use crate::services::command_runner::CommandRunner;
use std::sync::Arc;
use tracing::info;

/// Блокировка экрана через менеджер входа (по умолчанию `dm-tool switch-to-greeter`)
pub struct LockScreen {
    command: Vec<String>,
    runner: Arc<dyn CommandRunner>,
}

impl LockScreen {
    pub fn new(config: &LockConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            command: config.command.clone(),
            runner,
        }
    }

    pub fn lock(&self) -> Result<()> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| layout_error!(internal, "Команда блокировки не задана"))?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        info!("Блокировка экрана: {} {}", program, args.join(" "));
        self.runner.run(program, &args)?;
        Ok(())
    }
}
