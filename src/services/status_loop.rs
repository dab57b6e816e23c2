use crate::debug_if_enabled;
use crate::error::Result;
use crate::widget::PollWidget;
use std::io::Write;
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Цикл опроса: печатает строку виджета при каждом изменении
pub struct StatusLoop<W: Write> {
    widget: Box<dyn PollWidget>,
    output: W,
    last_line: Option<String>,
}

impl<W: Write> StatusLoop<W> {
    pub fn new(widget: Box<dyn PollWidget>, output: W) -> Self {
        Self {
            widget,
            output,
            last_line: None,
        }
    }

    /// Опросить виджет; возвращает true, если строка изменилась и была выведена
    pub fn render(&mut self) -> Result<bool> {
        let line = self.widget.poll();
        if self.last_line.as_deref() == Some(line.as_str()) {
            return Ok(false);
        }

        debug_if_enabled!("Новое значение виджета: {}", line);
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        self.last_line = Some(line);
        Ok(true)
    }

    /// Переключить раскладку и сразу показать результат
    pub fn activate(&mut self) -> Result<bool> {
        self.widget.on_activate();
        self.render()
    }

    /// SIGUSR1 переключает раскладку, Ctrl+C и SIGTERM завершают цикл
    pub async fn run(mut self) -> Result<()> {
        let mut ticker = interval(self.widget.update_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut activate = signal(SignalKind::user_defined1())?;
        let mut terminate = signal(SignalKind::terminate())?;

        info!("Цикл опроса запущен (интервал {:?})", self.widget.update_interval());

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.render()?;
                }
                Some(()) = activate.recv() => {
                    info!("Получен SIGUSR1: переключаем раскладку");
                    self.activate()?;
                }
                result = tokio::signal::ctrl_c() => {
                    result?;
                    info!("Получен сигнал завершения (Ctrl+C)");
                    break;
                }
                Some(()) = terminate.recv() => {
                    info!("Получен SIGTERM");
                    break;
                }
            }
        }

        info!("Цикл опроса остановлен");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;
    use crate::services::command_runner::dry_run::DryRunCommandRunner;
    use crate::widget::keyboard_layout::KeyboardLayoutWidget;
    use std::sync::Arc;

    fn started_widget(layouts: &[&str]) -> Box<dyn PollWidget> {
        let config = WidgetConfig {
            configured_layouts: layouts.iter().map(|s| s.to_string()).collect(),
            ..WidgetConfig::default()
        };
        let runner = Arc::new(DryRunCommandRunner::new(config.configured_layouts.clone()));
        let mut widget = KeyboardLayoutWidget::new(&config, runner, true);
        widget.start(&config).unwrap();
        Box::new(widget)
    }

    #[test]
    fn test_render_prints_only_changes() {
        let mut status = StatusLoop::new(started_widget(&["us", "de"]), Vec::new());

        assert!(status.render().unwrap());
        assert!(!status.render().unwrap());
        assert!(status.activate().unwrap());
        assert!(!status.render().unwrap());

        assert_eq!(String::from_utf8(status.output).unwrap(), "US\nDE\n");
    }

    #[test]
    fn test_activate_with_single_layout_prints_nothing_new() {
        let mut status = StatusLoop::new(started_widget(&["us"]), Vec::new());

        assert!(status.render().unwrap());
        assert!(!status.activate().unwrap());
        assert_eq!(String::from_utf8(status.output).unwrap(), "US\n");
    }
}
