use crate::error::Result;
use crate::layout_error;
use parking_lot::RwLock;
use tracing::info;

use super::r#trait::CommandRunner;

/// Эмуляция setxkbmap/xkblayout-state в памяти для режима сухого запуска
pub struct DryRunCommandRunner {
    state: RwLock<DryRunState>,
}

#[derive(Debug)]
struct DryRunState {
    layouts: Vec<String>,
    current: usize,
}

impl DryRunCommandRunner {
    pub fn new(layouts: Vec<String>) -> Self {
        info!("Dry-run режим - внешние утилиты эмулируются");
        Self {
            state: RwLock::new(DryRunState { layouts, current: 0 }),
        }
    }

    fn setxkbmap(&self, args: &[&str]) -> Result<String> {
        if let Some(pos) = args.iter().position(|arg| *arg == "-layout") {
            let value = args
                .get(pos + 1)
                .ok_or_else(|| layout_error!(internal, "setxkbmap: нет значения для -layout"))?;

            let layouts: Vec<String> = value
                .split(',')
                .filter(|layout| !layout.is_empty())
                .map(str::to_string)
                .collect();

            // Пустой -layout только сбрасывает настройки, эмулируемый список не трогаем
            if !layouts.is_empty() {
                info!("Dry-run: setxkbmap -layout {}", value);
                let mut state = self.state.write();
                state.layouts = layouts;
                state.current = 0;
            }
        }
        Ok(String::new())
    }

    fn xkblayout_state(&self, args: &[&str]) -> Result<String> {
        match args {
            ["print", "%s"] => {
                let state = self.state.read();
                Ok(state.layouts.get(state.current).cloned().unwrap_or_default())
            }
            ["set", "+1"] => {
                let mut state = self.state.write();
                if !state.layouts.is_empty() {
                    state.current = (state.current + 1) % state.layouts.len();
                }
                info!("Dry-run: переключение на раскладку #{}", state.current);
                Ok(String::new())
            }
            _ => Err(layout_error!(internal, "xkblayout-state: неподдерживаемые аргументы {:?}", args)),
        }
    }
}

impl CommandRunner for DryRunCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        match program {
            "setxkbmap" => self.setxkbmap(args),
            "xkblayout-state" => self.xkblayout_state(args),
            _ => {
                info!("Dry-run: пропускаем {} {:?}", program, args);
                Ok(String::new())
            }
        }
    }
}
