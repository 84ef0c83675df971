use std::sync::Arc;

/// A logger type which is called with various information messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences scheduling behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which discards all messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}
