use crate::error::{LayoutError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::r#trait::HotkeyResolver;

/// Названия совпадают с описаниями из `/usr/share/X11/xkb/rules/base.lst`
static HOTKEY_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Переключение на время удержания
        ("Right Alt (while pressed)", "grp:switch"),
        ("Left Alt (while pressed)", "grp:lswitch"),
        ("Left Win (while pressed)", "grp:lwin_switch"),
        ("Right Win (while pressed)", "grp:rwin_switch"),
        ("Any Win (while pressed)", "grp:win_switch"),
        ("Right Ctrl (while pressed)", "grp:rctrl_switch"),
        // Одиночные клавиши
        ("Right Alt", "grp:toggle"),
        ("Left Alt", "grp:lalt_toggle"),
        ("Caps Lock", "grp:caps_toggle"),
        ("Menu", "grp:menu_toggle"),
        ("Left Win", "grp:lwin_toggle"),
        ("Right Win", "grp:rwin_toggle"),
        ("Left Shift", "grp:lshift_toggle"),
        ("Right Shift", "grp:rshift_toggle"),
        ("Left Ctrl", "grp:lctrl_toggle"),
        ("Right Ctrl", "grp:rctrl_toggle"),
        ("Scroll Lock", "grp:sclk_toggle"),
        // Сочетания
        ("Shift+Caps Lock", "grp:shift_caps_toggle"),
        ("Alt+Caps Lock", "grp:alt_caps_toggle"),
        ("Both Alts together", "grp:alts_toggle"),
        ("Both Shifts together", "grp:shifts_toggle"),
        ("Both Ctrls together", "grp:ctrls_toggle"),
        ("Ctrl+Shift", "grp:ctrl_shift_toggle"),
        ("Left Ctrl+Left Shift", "grp:lctrl_lshift_toggle"),
        ("Right Ctrl+Right Shift", "grp:rctrl_rshift_toggle"),
        ("Alt+Ctrl", "grp:ctrl_alt_toggle"),
        ("Alt+Shift", "grp:alt_shift_toggle"),
        ("Left Alt+Left Shift", "grp:lalt_lshift_toggle"),
        ("Right Alt+Right Shift", "grp:ralt_rshift_toggle"),
        ("Alt+Space", "grp:alt_space_toggle"),
        ("Win+Space", "grp:win_space_toggle"),
        ("Ctrl+Space", "grp:ctrl_space_toggle"),
        ("Left Ctrl+Left Win", "grp:lctrl_lwin_toggle"),
    ])
});

/// Статическая таблица "человекочитаемое имя -> grp:опция"
pub struct HotkeyTable;

impl HotkeyTable {
    /// Получить опцию по имени горячей клавиши
    pub fn translate(hotkey: &str) -> Option<&'static str> {
        HOTKEY_TABLE.get(hotkey).copied()
    }

    /// Все известные пары, отсортированные по имени
    pub fn entries() -> Vec<(&'static str, &'static str)> {
        let mut entries: Vec<_> = HOTKEY_TABLE.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort_unstable();
        entries
    }
}

/// Резолвер на основе встроенной таблицы
pub struct TableResolver;

impl HotkeyResolver for TableResolver {
    fn resolve(&self, hotkey: &str) -> Result<String> {
        match HotkeyTable::translate(hotkey) {
            Some(option) => Ok(option.to_string()),
            None => LayoutError::unknown_hotkey(hotkey),
        }
    }
}
