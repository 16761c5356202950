use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// How the input is split into requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The whole input is one JSON request
    #[default]
    Single,
    /// JSON Lines: one request per non-blank line
    Lines,
}

impl InputMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(InputMode::Single),
            "lines" | "jsonl" => Some(InputMode::Lines),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Request file; `None` reads stdin
    pub input: Option<PathBuf>,
    pub mode: InputMode,
    /// Maximum calculations in flight in lines mode
    pub workers: usize,
    pub pretty: bool,
    /// Default tracing directive when `RUST_LOG` is unset
    pub log_directive: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: None,
            mode: InputMode::Single,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            pretty: false,
            log_directive: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Read `MATCHUP_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("MATCHUP_INPUT").filter(|p| !p.trim().is_empty()) {
            config.input = Some(PathBuf::from(path));
        }

        if let Some(mode) = lookup("MATCHUP_MODE") {
            config.mode = InputMode::parse(&mode)
                .with_context(|| format!("MATCHUP_MODE must be 'single' or 'lines', got {mode:?}"))?;
        }

        if let Some(workers) = lookup("MATCHUP_WORKERS") {
            let workers: usize = workers
                .trim()
                .parse()
                .with_context(|| format!("MATCHUP_WORKERS is not a number: {workers:?}"))?;
            if workers == 0 {
                bail!("MATCHUP_WORKERS must be at least 1");
            }
            config.workers = workers;
        }

        if let Some(pretty) = lookup("MATCHUP_PRETTY") {
            config.pretty = matches!(pretty.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(directive) = lookup("MATCHUP_LOG").filter(|d| !d.trim().is_empty()) {
            config.log_directive = directive;
        }

        Ok(config)
    }

    /// A positional argument overrides `MATCHUP_INPUT`; `-` means stdin
    pub fn with_input_arg(mut self, arg: Option<String>) -> Self {
        match arg.as_deref() {
            Some("-") => self.input = None,
            Some(path) => self.input = Some(PathBuf::from(path)),
            None => {}
        }
        self
    }
}
