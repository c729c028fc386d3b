//! Batches of named inputs loaded from TOML or JSON and evaluated independently.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{RunError, ScenarioError};
use crate::window::longest_achievable_run;

// =============================================================================
// Scenarios
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub sequence: Vec<i64>,
    pub k: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<usize>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, sequence: Vec<i64>, k: i64) -> Self {
        Self {
            name: name.into(),
            sequence,
            k,
            expected: None,
        }
    }

    pub fn expecting(mut self, expected: usize) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn evaluate(&self) -> Outcome {
        let verdict = match longest_achievable_run(&self.sequence, self.k) {
            Err(err) => Verdict::Rejected(err),
            Ok(actual) => match self.expected {
                Some(expected) if expected != actual => Verdict::Mismatch { expected, actual },
                _ => Verdict::Pass(actual),
            },
        };
        debug!("scenario '{}': {verdict}", self.name);
        Outcome {
            name: self.name.clone(),
            verdict,
        }
    }
}

// =============================================================================
// Outcomes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass(usize),
    Mismatch { expected: usize, actual: usize },
    Rejected(RunError),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass(actual) => write!(f, "L = {actual}"),
            Verdict::Mismatch { expected, actual } => {
                write!(f, "L = {actual}, expected {expected}")
            }
            Verdict::Rejected(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub name: String,
    pub verdict: Verdict,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Pass(_))
    }
}

// =============================================================================
// Scenario files
// =============================================================================

fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    #[serde(default, rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioFile {
    pub fn parse_json(content: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn parse_toml(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// Picks the format from the extension, falling back to sniffing the content.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let file = match format.as_deref() {
            Some("json") => Self::parse_json(&content),
            Some("toml") => Self::parse_toml(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') || trimmed.starts_with('[') {
                    Self::parse_json(&content)
                } else {
                    Self::parse_toml(&content)
                }
            }
        }?;
        info!(
            "loaded {} scenarios from {}",
            file.scenarios.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn builtin() -> Self {
        Self {
            parallel: true,
            scenarios: vec![
                Scenario::new("two runs, k=2", vec![1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 0], 2)
                    .expecting(6),
                Scenario::new(
                    "four runs, k=3",
                    vec![0, 0, 1, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1],
                    3,
                )
                .expecting(10),
                Scenario::new("empty", vec![], 5).expecting(0),
                Scenario::new("all zeros, k=0", vec![0, 0, 0], 0).expecting(0),
                Scenario::new("all ones, k=0", vec![1, 1, 1], 0).expecting(3),
                Scenario::new("alternating, k=1", vec![1, 0, 1, 0, 1], 1).expecting(3),
            ],
        }
    }

    /// Evaluates every scenario; outcomes keep the input order either way.
    pub fn evaluate(&self) -> Vec<Outcome> {
        if self.parallel {
            self.scenarios.par_iter().map(Scenario::evaluate).collect()
        } else {
            self.scenarios.iter().map(Scenario::evaluate).collect()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
