use crate::error::{LayoutError, Result};
use crate::layout_error;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Утилиты, без которых виджет не может работать
pub const REQUIRED_PROGRAMS: [&str; 2] = ["setxkbmap", "xkblayout-state"];

/// Проверить окружение перед настройкой раскладок
pub fn check_environment() -> Result<()> {
    info!("Проверка окружения...");

    check_x11_backend(|name| std::env::var(name).ok())?;
    check_required_programs(&REQUIRED_PROGRAMS, std::env::var_os("PATH").as_deref())?;

    info!("Проверка окружения завершена успешно");
    Ok(())
}

/// Бэкенд определяется по XDG_SESSION_TYPE, с запасным вариантом через DISPLAY
pub fn check_x11_backend<F>(env: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let session = env("XDG_SESSION_TYPE").unwrap_or_default();

    match session.as_str() {
        "x11" => Ok(()),
        "wayland" => Err(layout_error!(unsupported_backend, "сессия wayland, требуется x11")),
        other => {
            if env("DISPLAY").is_some_and(|display| !display.is_empty()) {
                if !other.is_empty() {
                    warn!("Неизвестный XDG_SESSION_TYPE '{}', но DISPLAY задан", other);
                }
                Ok(())
            } else {
                Err(layout_error!(
                    unsupported_backend,
                    "X11 сервер не найден (XDG_SESSION_TYPE='{}', DISPLAY не задан)",
                    other
                ))
            }
        }
    }
}

pub fn check_required_programs(programs: &[&str], path: Option<&std::ffi::OsStr>) -> Result<()> {
    for program in programs {
        match find_program(program, path) {
            Some(location) => info!("{} найден: {}", program, location.display()),
            None => return Err(LayoutError::MissingUtility(program.to_string())),
        }
    }
    Ok(())
}

/// Поиск исполняемого файла в каталогах PATH
pub fn find_program(program: &str, path: Option<&std::ffi::OsStr>) -> Option<PathBuf> {
    let path = path?;
    std::env::split_paths(path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_x11_session_accepted() {
        assert!(check_x11_backend(env_of(&[("XDG_SESSION_TYPE", "x11")])).is_ok());
        assert!(check_x11_backend(env_of(&[("DISPLAY", ":0")])).is_ok());
    }

    #[test]
    fn test_wayland_session_rejected() {
        let result = check_x11_backend(env_of(&[("XDG_SESSION_TYPE", "wayland"), ("DISPLAY", ":0")]));
        assert!(matches!(result, Err(LayoutError::UnsupportedBackend(_))));
    }

    #[test]
    fn test_no_display_rejected() {
        let result = check_x11_backend(env_of(&[("XDG_SESSION_TYPE", "tty")]));
        assert!(matches!(result, Err(LayoutError::UnsupportedBackend(_))));
    }

    fn make_program(dir: &Path, name: &str, mode: u32) {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_required_programs_found() {
        let dir = tempfile::tempdir().unwrap();
        make_program(dir.path(), "setxkbmap", 0o755);
        make_program(dir.path(), "xkblayout-state", 0o755);

        let path = std::env::join_paths([dir.path()]).unwrap();
        assert!(check_required_programs(&REQUIRED_PROGRAMS, Some(path.as_os_str())).is_ok());
    }

    #[test]
    fn test_missing_program_reported() {
        let dir = tempfile::tempdir().unwrap();
        make_program(dir.path(), "setxkbmap", 0o755);
        // Файл без права на исполнение не считается утилитой
        make_program(dir.path(), "xkblayout-state", 0o644);

        let path = std::env::join_paths([dir.path()]).unwrap();
        let result = check_required_programs(&REQUIRED_PROGRAMS, Some(path.as_os_str()));
        assert!(matches!(result, Err(LayoutError::MissingUtility(name)) if name == "xkblayout-state"));
    }

    #[test]
    fn test_no_path_means_not_found() {
        assert_eq!(find_program("setxkbmap", None), None);
    }
}
