use crate::config::WidgetConfig;
use crate::error::Result;
use crate::hotkeys::resolve_switch_option;
use crate::services::command_runner::CommandRunner;
use crate::services::LayoutController;
use crate::utils::environment::check_environment;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::r#trait::PollWidget;

pub struct KeyboardLayoutWidget {
    controller: LayoutController,
    runner: Arc<dyn CommandRunner>,
    update_interval: Duration,
    // В dry-run окружение не проверяется: утилиты эмулируются
    skip_environment_check: bool,
}

impl KeyboardLayoutWidget {
    pub fn new(config: &WidgetConfig, runner: Arc<dyn CommandRunner>, skip_environment_check: bool) -> Self {
        info!("Инициализация KeyboardLayoutWidget");
        Self {
            controller: LayoutController::new(config, runner.clone()),
            runner,
            update_interval: config.update_interval(),
            skip_environment_check,
        }
    }
}

impl PollWidget for KeyboardLayoutWidget {
    fn start(&mut self, config: &WidgetConfig) -> Result<()> {
        if self.skip_environment_check {
            warn!("Проверка окружения пропущена");
        } else {
            check_environment()?;
        }

        let option = resolve_switch_option(config)?;

        self.controller = LayoutController::new(config, self.runner.clone());
        self.update_interval = config.update_interval();
        self.controller
            .configure(self.controller.configured_layouts(), option.as_deref());

        info!(
            "KeyboardLayoutWidget запущен: {} раскладок, интервал {:?}",
            config.configured_layouts.len(),
            self.update_interval
        );
        Ok(())
    }

    fn poll(&self) -> String {
        self.controller.display_item().to_string()
    }

    fn on_activate(&self) {
        self.controller.advance_layout();
    }

    fn update_interval(&self) -> Duration {
        self.update_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayMode, HotkeySource};
    use crate::error::LayoutError;
    use crate::services::command_runner::mock::MockCommandRunner;
    use crate::services::command_runner::dry_run::DryRunCommandRunner;
    use std::path::PathBuf;

    fn config(layouts: &[&str]) -> WidgetConfig {
        WidgetConfig {
            configured_layouts: layouts.iter().map(|s| s.to_string()).collect(),
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_start_configures_layouts() {
        let mut config = config(&["us", "ru"]);
        config.switch_hotkey = "Ctrl+Shift".to_string();
        let runner = Arc::new(MockCommandRunner::new());
        let mut widget = KeyboardLayoutWidget::new(&config, runner.clone(), true);

        widget.start(&config).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0][0], "setxkbmap");
        assert_eq!(
            calls[1],
            vec!["setxkbmap", "-layout", "us,ru", "-option", "grp:ctrl_shift_toggle"]
        );
    }

    #[test]
    fn test_start_fails_on_unknown_hotkey() {
        let mut config = config(&["us"]);
        config.switch_hotkey = "Left Pinky".to_string();
        let runner = Arc::new(MockCommandRunner::new());
        let mut widget = KeyboardLayoutWidget::new(&config, runner.clone(), true);

        let result = widget.start(&config);

        assert!(matches!(result, Err(LayoutError::UnknownHotkey(_))));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_start_fails_on_missing_rules_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(&["us"]);
        config.switch_hotkey = "Alt+Shift".to_string();
        config.hotkey_source = HotkeySource::RulesFile;
        config.rules_file = dir.path().join("base.lst");
        let runner = Arc::new(MockCommandRunner::new());
        let mut widget = KeyboardLayoutWidget::new(&config, runner, true);

        assert!(matches!(widget.start(&config), Err(LayoutError::Io(_))));
    }

    #[test]
    fn test_dry_run_poll_and_activate() {
        let mut config = config(&["us", "de"]);
        config.display_map.insert("us".to_string(), "EN".to_string());
        let runner = Arc::new(DryRunCommandRunner::new(config.configured_layouts.clone()));
        let mut widget = KeyboardLayoutWidget::new(&config, runner, true);
        widget.start(&config).unwrap();

        assert_eq!(widget.poll(), "EN");
        widget.on_activate();
        assert_eq!(widget.poll(), "DE");
        assert_eq!(widget.poll(), "DE");
        widget.on_activate();
        assert_eq!(widget.poll(), "EN");
    }

    #[test]
    fn test_flag_mode_poll_prints_path() {
        let mut config = config(&["us"]);
        config.mode = DisplayMode::Flag;
        config.flag_basedir = Some(PathBuf::from("/opt/flags"));
        config.display_map.insert("us".to_string(), "us.svg".to_string());
        let runner = Arc::new(DryRunCommandRunner::new(config.configured_layouts.clone()));
        let mut widget = KeyboardLayoutWidget::new(&config, runner, true);
        widget.start(&config).unwrap();

        assert_eq!(widget.poll(), "/opt/flags/us.svg");
    }

    #[test]
    fn test_update_interval_from_config() {
        let mut config = config(&["us"]);
        config.update_interval = 0.5;
        let widget = KeyboardLayoutWidget::new(&config, Arc::new(MockCommandRunner::new()), true);
        assert_eq!(widget.update_interval(), Duration::from_millis(500));
    }
}
