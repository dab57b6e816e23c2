use crate::error::{LayoutError, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

use super::r#trait::CommandRunner;

/// Записывает все вызовы и отвечает заготовленными результатами
#[derive(Default)]
pub struct MockCommandRunner {
    calls: Mutex<Vec<Vec<String>>>,
    responses: Mutex<HashMap<String, Vec<std::result::Result<String, String>>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ответ для "program arg1 arg2"; последний ответ повторяется бесконечно
    pub fn respond(&self, command: &str, output: &str) {
        self.responses
            .lock()
            .entry(command.to_string())
            .or_default()
            .push(Ok(output.to_string()));
    }

    pub fn fail(&self, command: &str, stderr: &str) {
        self.responses
            .lock()
            .entry(command.to_string())
            .or_default()
            .push(Err(stderr.to_string()));
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|arg| arg.to_string()));
        let key = call.join(" ");
        self.calls.lock().push(call);

        let mut responses = self.responses.lock();
        let Some(queue) = responses.get_mut(&key) else {
            return Err(LayoutError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} не найден", program),
            )));
        };

        let response = if queue.len() > 1 { queue.remove(0) } else { queue[0].clone() };
        response.map_err(|stderr| LayoutError::CommandFailed {
            program: program.to_string(),
            status: "exit status: 1".to_string(),
            stderr,
        })
    }
}
