use std::path::PathBuf;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
    pub directory: Option<PathBuf>,
}

impl TracingConfig {
    pub fn default_directives(&self) -> String {
        format!("{},pdfchat=debug,tower_http=debug", self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            level: "info".to_string(),
            json_format: false,
            directory: None,
        }
    }
}
