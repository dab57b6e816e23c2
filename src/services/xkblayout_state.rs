use crate::error::Result;
use crate::services::command_runner::CommandRunner;
use std::sync::Arc;

pub const XKBLAYOUT_STATE: &str = "xkblayout-state";

/// Обёртка над `xkblayout-state`
pub struct XkbLayoutState {
    runner: Arc<dyn CommandRunner>,
}

impl XkbLayoutState {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Код активной раскладки без пробельных символов по краям
    pub fn current_symbol(&self) -> Result<String> {
        let output = self.runner.run(XKBLAYOUT_STATE, &["print", "%s"])?;
        Ok(output.trim().to_string())
    }

    pub fn set_next(&self) -> Result<()> {
        self.runner.run(XKBLAYOUT_STATE, &["set", "+1"])?;
        Ok(())
    }
}
