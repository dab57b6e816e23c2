//! Разрешение горячей клавиши переключения раскладки в X11 опцию `grp:...`
//!
//! Человекочитаемое имя (`Alt+Shift`, `Caps Lock`) переводится в опцию
//! через одну из стратегий: встроенную таблицу или системный файл правил
//! `base.lst`. Строка, уже начинающаяся с `grp:`, передаётся как есть.

mod hotkey_table;
mod rules_file;
mod r#trait;

pub use self::hotkey_table::HotkeyTable;
pub use self::r#trait::resolve_switch_option;
