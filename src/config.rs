use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_RULES_FILE: &str = "/usr/share/X11/xkb/rules/base.lst";
pub const DEFAULT_SWITCH_HOTKEY: &str = "grp:lalt_shift_toggle";
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(1);
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub widget: WidgetConfig,
    pub lock: LockConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Настройки виджета раскладки
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WidgetConfig {
    /// Интервал опроса в секундах
    pub update_interval: f64,
    pub configured_layouts: Vec<String>,
    #[serde(default)]
    pub display_map: BTreeMap<String, String>,
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default)]
    pub flag_basedir: Option<PathBuf>,
    /// Либо `grp:...`, либо человекочитаемое имя вроде `Alt+Shift`.
    /// Пустая строка означает "не трогать опцию переключения".
    pub switch_hotkey: String,
    #[serde(default)]
    pub hotkey_source: HotkeySource,
    pub rules_file: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Default,
    Flag,
}

/// Откуда брать соответствие "имя клавиши -> grp:опция"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeySource {
    #[default]
    Table,
    RulesFile,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LockConfig {
    pub command: Vec<String>,
}

impl WidgetConfig {
    /// Непроверенное значение не приводит к панике: берётся интервал по умолчанию
    pub fn update_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.update_interval)
            .unwrap_or(DEFAULT_UPDATE_INTERVAL)
            .max(MIN_UPDATE_INTERVAL)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            update_interval: 1.0,
            configured_layouts: vec!["us".to_string()],
            display_map: BTreeMap::new(),
            mode: DisplayMode::Default,
            flag_basedir: None,
            switch_hotkey: DEFAULT_SWITCH_HOTKEY.to_string(),
            hotkey_source: HotkeySource::Table,
            rules_file: PathBuf::from(DEFAULT_RULES_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            widget: WidgetConfig::default(),
            lock: LockConfig {
                command: vec!["dm-tool".to_string(), "switch-to-greeter".to_string()],
            },
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("XKBSTATE_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        // tokio::time::interval паникует на нулевом периоде
        let interval = self.widget.update_interval;
        match Duration::try_from_secs_f64(interval) {
            Ok(duration) if duration >= MIN_UPDATE_INTERVAL => {}
            _ => anyhow::bail!(
                "update_interval должно быть не меньше {:?} и представимо как Duration, получено {}",
                MIN_UPDATE_INTERVAL,
                interval
            ),
        }

        if self.widget.configured_layouts.is_empty() {
            anyhow::bail!("configured_layouts не может быть пустым");
        }

        for (i, layout) in self.widget.configured_layouts.iter().enumerate() {
            if layout.trim().is_empty() {
                anyhow::bail!("Пустая раскладка в configured_layouts #{}", i + 1);
            }
            // setxkbmap принимает список через запятую
            if layout.contains(',') {
                anyhow::bail!("Раскладка '{}' не должна содержать запятых", layout);
            }
        }

        if self.lock.command.is_empty() || self.lock.command[0].trim().is_empty() {
            anyhow::bail!("lock.command не может быть пустым");
        }

        Ok(())
    }
}
