use crate::config::WidgetConfig;
use std::sync::Arc;

/// Trait for executing external utilities (setxkbmap, xkblayout-state, dm-tool)
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning stdout on a zero exit status
    fn run(&self, program: &str, args: &[&str]) -> crate::error::Result<String>;
}

/// Factory function to create an appropriate command runner based on the dry_run flag
pub fn create_command_runner(config: &WidgetConfig, dry_run: bool) -> Arc<dyn CommandRunner> {
    if dry_run {
        Arc::new(super::dry_run::DryRunCommandRunner::new(
            config.configured_layouts.clone(),
        ))
    } else {
        Arc::new(super::system::SystemCommandRunner::new())
    }
}
