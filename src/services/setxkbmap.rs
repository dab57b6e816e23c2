use crate::error::Result;
use crate::services::command_runner::CommandRunner;
use std::sync::Arc;

pub const SETXKBMAP: &str = "setxkbmap";

/// Обёртка над `setxkbmap`
pub struct Setxkbmap {
    runner: Arc<dyn CommandRunner>,
}

impl Setxkbmap {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Сбросить раскладки, варианты и опции. Пустые аргументы передаются явно,
    /// иначе setxkbmap дописывает новые опции к старым
    pub fn clear(&self) -> Result<()> {
        self.runner
            .run(SETXKBMAP, &["-layout", "", "-variant", "", "-option", ""])?;
        Ok(())
    }

    pub fn apply(&self, layouts: &[String], option: Option<&str>) -> Result<()> {
        let joined = layouts.join(",");
        let mut args = vec!["-layout", joined.as_str()];
        if let Some(option) = option {
            args.extend(["-option", option]);
        }

        self.runner.run(SETXKBMAP, &args)?;
        Ok(())
    }
}
