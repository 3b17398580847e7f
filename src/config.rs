//! Inference settings and whole-controller documents.
//!
//! A controller can be described in TOML (or JSON) instead of code:
//!
//! ```toml
//! rules = ["IF temp is hot THEN fan is fast"]
//!
//! [inference]
//! resolution = 200
//!
//! [[inputs]]
//! name = "temp"
//! range = [0.0, 40.0]
//! membership_functions = [
//!     { type = "triangular", name = "hot", params = { a = 20.0, b = 40.0, c = 40.0 } },
//! ]
//!
//! [[outputs]]
//! name = "fan"
//! range = [0.0, 100.0]
//! membership_functions = [
//!     { type = "trapezoidal", name = "fast", params = { a = 50.0, b = 80.0, c = 100.0, d = 100.0 } },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inference::{EngineBuilder, InferenceEngine};
use crate::rules::FuzzyRule;
use crate::variable::{FuzzyVariable, VariableExport};

pub const DEFAULT_RESOLUTION: usize = 200;

/// Discretisation used by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Sample points over an output universe when computing the centroid.
    pub resolution: usize,
    /// Sample points for [`InferenceEngine::sample_aggregated_curve_default`].
    pub curve_points: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            curve_points: DEFAULT_RESOLUTION,
        }
    }
}

impl InferenceConfig {
    pub fn validate(&self) -> Result<()> {
        for resolution in [self.resolution, self.curve_points] {
            if resolution < 2 {
                return Err(Error::InvalidResolution { resolution });
            }
        }

        Ok(())
    }
}

/// A complete controller: variables, rule base and inference settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Rules in their canonical `IF .. THEN ..` form.
    pub rules: Vec<String>,
    pub inputs: Vec<VariableExport>,
    pub outputs: Vec<VariableExport>,
    #[serde(default)]
    pub inference: InferenceConfig,
}

impl ControllerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn build(self) -> Result<InferenceEngine> {
        let mut builder = EngineBuilder::new().config(self.inference);

        for export in self.inputs {
            builder = builder.input(FuzzyVariable::try_from(export)?);
        }
        for export in self.outputs {
            builder = builder.output(FuzzyVariable::try_from(export)?);
        }
        for text in &self.rules {
            builder = builder.rule(text.parse::<FuzzyRule>()?);
        }

        builder.build()
    }
}
