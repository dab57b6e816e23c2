use crate::config::WidgetConfig;
use crate::error::Result;
use crate::services::command_runner::create_command_runner;
use std::time::Duration;

/// Trait for status-bar widgets driven by an external polling loop
pub trait PollWidget: Send {
    /// Validate the environment and apply the configuration; errors are fatal
    fn start(&mut self, config: &WidgetConfig) -> Result<()>;

    /// Current display string
    fn poll(&self) -> String;

    /// Click or keybinding activation
    fn on_activate(&self);

    fn update_interval(&self) -> Duration;
}

/// Factory function to create the keyboard layout widget based on the dry_run flag
pub fn create_widget(config: &WidgetConfig, dry_run: bool) -> Box<dyn PollWidget> {
    let runner = create_command_runner(config, dry_run);
    Box::new(super::keyboard_layout::KeyboardLayoutWidget::new(
        config, runner, dry_run,
    ))
}
