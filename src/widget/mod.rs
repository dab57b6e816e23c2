//! Виджет раскладки для статус-бара
//!
//! Виджет ничего не знает о планировщике: его вызывает цикл опроса
//! (`services::status_loop`) или разовые команды CLI.

pub mod keyboard_layout;
mod r#trait;

pub use self::r#trait::{create_widget, PollWidget};
