use crate::config::{DisplayMode, WidgetConfig};
use crate::error::LayoutError;
use crate::layout::{LayoutDisplay, LayoutState};
use crate::services::command_runner::CommandRunner;
use crate::services::setxkbmap::Setxkbmap;
use crate::services::xkblayout_state::XkbLayoutState;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Настройка, опрос и переключение раскладки через внешние утилиты.
///
/// Между вызовами состояния нет: каждый опрос заново спрашивает xkblayout-state.
/// Ошибки выполнения команд логируются и не пробрасываются наружу.
pub struct LayoutController {
    configured_layouts: Vec<String>,
    display_map: BTreeMap<String, String>,
    mode: DisplayMode,
    flag_basedir: Option<PathBuf>,
    setxkbmap: Setxkbmap,
    xkblayout_state: XkbLayoutState,
}

impl LayoutController {
    pub fn new(config: &WidgetConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            configured_layouts: config.configured_layouts.clone(),
            display_map: config.display_map.clone(),
            mode: config.mode,
            flag_basedir: config.flag_basedir.clone(),
            setxkbmap: Setxkbmap::new(runner.clone()),
            xkblayout_state: XkbLayoutState::new(runner),
        }
    }

    pub fn configured_layouts(&self) -> &[String] {
        &self.configured_layouts
    }

    /// Сбросить старые настройки и применить список раскладок с опцией переключения
    pub fn configure(&self, layouts: &[String], option: Option<&str>) {
        if let Err(e) = self.setxkbmap.clear() {
            log_command_error("Не удалось сбросить старые настройки раскладки", &e);
        }

        match self.setxkbmap.apply(layouts, option) {
            Ok(()) => info!(
                "Раскладки настроены: {} (опция: {})",
                layouts.join(","),
                option.unwrap_or("-")
            ),
            Err(e) => log_command_error("Не удалось изменить раскладку клавиатуры", &e),
        }
    }

    pub fn current_layout(&self) -> LayoutState {
        match self.xkblayout_state.current_symbol() {
            Ok(symbol) => {
                let state = LayoutState::from_symbol(&symbol, &self.configured_layouts);
                if state == LayoutState::Unknown {
                    debug!("Раскладка '{}' не входит в настроенный список", symbol);
                }
                state
            }
            Err(e) => {
                log_command_error("Не удалось получить раскладку клавиатуры", &e);
                LayoutState::Unknown
            }
        }
    }

    pub fn advance_layout(&self) {
        if let Err(e) = self.xkblayout_state.set_next() {
            log_command_error("Не удалось переключить раскладку на следующую", &e);
        }
    }

    /// Значение из display_map, иначе код раскладки в верхнем регистре
    pub fn display_text(&self) -> String {
        let layout = self.current_layout();
        self.text_for(&layout)
    }

    /// В режиме `flag` запись display_map считается путём к изображению флага
    pub fn display_item(&self) -> LayoutDisplay {
        if self.mode == DisplayMode::Default {
            return LayoutDisplay::Text(self.display_text());
        }

        let layout = self.current_layout();
        match self.display_map.get(layout.as_str()) {
            Some(image) => LayoutDisplay::Flag(self.flag_path(image)),
            None => LayoutDisplay::Text(self.text_for(&layout)),
        }
    }

    fn text_for(&self, layout: &LayoutState) -> String {
        match self.display_map.get(layout.as_str()) {
            Some(text) => text.clone(),
            None => layout.as_str().to_uppercase(),
        }
    }

    fn flag_path(&self, image: &str) -> PathBuf {
        let image = PathBuf::from(image);
        match &self.flag_basedir {
            Some(basedir) if image.is_relative() => basedir.join(image),
            _ => image,
        }
    }
}

fn log_command_error(context: &str, e: &LayoutError) {
    match e {
        LayoutError::Io(io) => error!("{}: проверьте, что утилита доступна: {}", context, io),
        other => error!("{}: {}", context, other),
    }
}
