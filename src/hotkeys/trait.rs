use crate::config::{HotkeySource, WidgetConfig};
use crate::error::Result;
use tracing::debug;

pub const GROUP_OPTION_PREFIX: &str = "grp:";

/// Trait for strategies that map a human-readable hotkey to an X11 `grp:` option
pub trait HotkeyResolver: Send + Sync {
    /// Resolve the hotkey name, failing with `UnknownHotkey` when it is not known
    fn resolve(&self, hotkey: &str) -> Result<String>;
}

/// Factory function to create the resolver selected in the configuration
pub fn create_hotkey_resolver(config: &WidgetConfig) -> Box<dyn HotkeyResolver> {
    match config.hotkey_source {
        HotkeySource::Table => Box::new(super::hotkey_table::TableResolver),
        HotkeySource::RulesFile => Box::new(super::rules_file::RulesFileResolver::new(
            config.rules_file.clone(),
        )),
    }
}

/// Селектор с префиксом `grp:` возвращается без изменений, остальное ищется резолвером
pub fn resolve_option(selector: &str, resolver: &dyn HotkeyResolver) -> Result<String> {
    if selector.starts_with(GROUP_OPTION_PREFIX) {
        return Ok(selector.to_string());
    }

    let option = resolver.resolve(selector)?;
    debug!("Горячая клавиша '{}' -> {}", selector, option);
    Ok(option)
}

/// Итоговая опция для setxkbmap: `None`, если переключение не настроено
pub fn resolve_switch_option(config: &WidgetConfig) -> Result<Option<String>> {
    let selector = config.switch_hotkey.trim();
    if selector.is_empty() {
        return Ok(None);
    }

    let resolver = create_hotkey_resolver(config);
    let option = resolve_option(selector, resolver.as_ref())?;

    Ok(Some(option).filter(|option| !option.is_empty()))
}
