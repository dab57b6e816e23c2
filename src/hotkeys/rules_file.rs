use crate::error::{LayoutError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

use super::r#trait::{HotkeyResolver, GROUP_OPTION_PREFIX};

/// Резолвер, читающий описания опций из `base.lst`
pub struct RulesFileResolver {
    path: PathBuf,
}

impl RulesFileResolver {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Найти первую `grp:` опцию, описание которой совпадает с `hotkey`
    pub fn find_option<R: BufRead>(reader: R, hotkey: &str) -> Result<Option<String>> {
        for line in reader.lines() {
            let line = line?;
            let Some((option, description)) = line.trim().split_once(char::is_whitespace) else {
                continue;
            };

            if option.starts_with(GROUP_OPTION_PREFIX) && description.trim() == hotkey {
                return Ok(Some(option.to_string()));
            }
        }

        Ok(None)
    }
}

impl HotkeyResolver for RulesFileResolver {
    fn resolve(&self, hotkey: &str) -> Result<String> {
        debug!("Ищем '{}' в {:?}", hotkey, self.path);

        let file = File::open(&self.path)?;
        Self::find_option(BufReader::new(file), hotkey)?
            .ok_or_else(|| LayoutError::UnknownHotkey(hotkey.to_string()))
    }
}
