use std::fmt;
use std::path::PathBuf;

pub const UNKNOWN_LAYOUT: &str = "unknown";

/// Состояние раскладки, полученное от xkblayout-state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutState {
    /// Код из списка настроенных раскладок
    Known(String),
    /// Утилита недоступна или вернула раскладку вне списка
    Unknown,
}

impl LayoutState {
    /// Принять код только если он входит в настроенный набор
    pub fn from_symbol(symbol: &str, configured: &[String]) -> Self {
        if configured.iter().any(|layout| layout == symbol) {
            LayoutState::Known(symbol.to_string())
        } else {
            LayoutState::Unknown
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LayoutState::Known(code) => code,
            LayoutState::Unknown => UNKNOWN_LAYOUT,
        }
    }
}

impl fmt::Display for LayoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Что показывать в статус-баре
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDisplay {
    Text(String),
    Flag(PathBuf),
}

impl fmt::Display for LayoutDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutDisplay::Text(text) => f.write_str(text),
            LayoutDisplay::Flag(path) => write!(f, "{}", path.display()),
        }
    }
}
