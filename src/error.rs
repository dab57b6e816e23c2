use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Неподдерживаемое окружение: {0}")]
    UnsupportedBackend(String),

    #[error("Требуется утилита {0}, но она не найдена в PATH")]
    MissingUtility(String),

    #[error("Неизвестная горячая клавиша: {0}")]
    UnknownHotkey(String),

    #[error("{program} завершился с ошибкой ({status}): {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl LayoutError {
    pub fn unknown_hotkey<T>(hotkey: impl Into<String>) -> Result<T> {
        Err(LayoutError::UnknownHotkey(hotkey.into()))
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! layout_error {
    (unsupported_backend, $($arg:tt)*) => {
        $crate::error::LayoutError::UnsupportedBackend(format!($($arg)*))
    };
    (internal, $($arg:tt)*) => {
        $crate::error::LayoutError::Internal(format!($($arg)*))
    };
}
