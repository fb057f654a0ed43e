use std::fmt;

#[derive(Debug)]
pub enum BenchError {
    Io(std::io::Error),
    Config(String),
    Clock(String),
    Affinity(usize),
    /// Two runs that must agree produced different outcomes.
    Mismatch {
        strategy: String,
        expected: String,
        actual: String,
    },
    Render(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Io(e) => write!(f, "io error: {e}"),
            BenchError::Config(msg) => write!(f, "invalid config: {msg}"),
            BenchError::Clock(msg) => write!(f, "clock unavailable: {msg}"),
            BenchError::Affinity(core) => write!(f, "cannot pin to core {core}"),
            BenchError::Mismatch {
                strategy,
                expected,
                actual,
            } => write!(
                f,
                "strategy `{strategy}` disagrees: expected {expected}, got {actual}"
            ),
            BenchError::Render(msg) => write!(f, "render failed: {msg}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BenchError {
    fn from(e: std::io::Error) -> Self {
        BenchError::Io(e)
    }
}

impl From<toml::de::Error> for BenchError {
    fn from(e: toml::de::Error) -> Self {
        BenchError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::Render(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
