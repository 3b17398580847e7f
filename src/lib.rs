//! Mamdani fuzzy inference.
//!
//! Crisp inputs are fuzzified against the terms of their variables, rules
//! combine the degrees with min, rule consequences sharing a term are
//! aggregated with max, and each output is defuzzified by a discrete centre
//! of gravity over its universe of discourse.
//!
//! ```
//! use fuzzy_mamdani::controllers::washing_machine;
//! use fuzzy_mamdani::Inputs;
//!
//! let engine = washing_machine()?;
//! let result = engine.infer(&Inputs::from([("dirt", 50.), ("grease", 30.)]));
//! let minutes = result.output("wash_time").unwrap_or_default();
//!
//! assert!(minutes > 0. && minutes < 25.);
//! # Ok::<(), fuzzy_mamdani::Error>(())
//! ```

pub mod config;
pub mod controllers;
pub mod dsl;
pub mod error;
mod inference;
mod inputs;
mod linspace;
pub mod membership;
pub mod ops;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use config::{ControllerConfig, InferenceConfig};
pub use error::{Error, Result};
pub use inference::{EngineBuilder, InferenceEngine};
pub use inputs::Inputs;
pub use linspace::Linspace;
pub use membership::{MembershipFunction, TermExport};
pub use outputs::{Degrees, InferenceResult, RuleActivation};
pub use rules::{FuzzyRule, Rules};
pub use terms::Terms;
pub use variable::{FuzzyVariable, VariableBuilder, VariableExport, VariableKey, Variables};
