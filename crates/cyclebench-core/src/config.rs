use std::path::Path;

use cyclebench_dsa::InputSet;
use serde::Deserialize;

use crate::clock::ClockKind;
use crate::error::{BenchError, Result};

/// Whether the `no check` baseline joins the default validation strategies.
pub const BASELINE_BY_DEFAULT: bool = cfg!(feature = "baseline");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSelection {
    Mixed,
    Valid,
    All,
}

impl Default for InputSelection {
    fn default() -> Self {
        if cfg!(feature = "valid-inputs") {
            InputSelection::Valid
        } else {
            InputSelection::All
        }
    }
}

impl InputSelection {
    pub fn sets(self) -> &'static [InputSet] {
        match self {
            InputSelection::Mixed => &[InputSet::Mixed],
            InputSelection::Valid => &[InputSet::Valid],
            InputSelection::All => &InputSet::ALL,
        }
    }

    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "mixed" => Ok(InputSelection::Mixed),
            "valid" => Ok(InputSelection::Valid),
            "all" => Ok(InputSelection::All),
            other => Err(BenchError::Config(format!("unknown input set `{other}`"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Run parameters shared by both drivers.
///
/// Defaults reproduce a single cold pass over every strategy. Empty strategy
/// lists mean "all of them".
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub inputs: InputSelection,
    pub validation: Vec<String>,
    pub lookup: Vec<String>,
    pub iterations: usize,
    pub warmup: usize,
    pub clock: ClockKind,
    pub pin_core: Option<usize>,
    pub format: OutputFormat,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            inputs: InputSelection::default(),
            validation: Vec::new(),
            lookup: Vec::new(),
            iterations: 1,
            warmup: 0,
            clock: ClockKind::Auto,
            pin_core: None,
            format: OutputFormat::Human,
        }
    }
}

impl BenchConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: BenchConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading bench config");
        Self::from_toml_str(&src)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::Config("iterations must be at least 1".into()));
        }
        Ok(())
    }
}
