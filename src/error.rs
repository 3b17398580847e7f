//! Configuration errors for fuzzy variables, rules and engines.
//!
//! Inference itself is total: unknown names degrade to "contributes nothing".
//! Everything here is raised while a configuration is being assembled, so a
//! built `InferenceEngine` never returns one of these.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("break points of '{shape}' are not ordered: {points:?}")]
    #[diagnostic(
        code(fuzzy::membership::unordered),
        help("Triangular needs a <= b <= c, trapezoidal needs a <= b <= c <= d.")
    )]
    UnorderedBreakPoints { shape: &'static str, points: Vec<f64> },

    #[error("break points of '{shape}' must be finite: {points:?}")]
    #[diagnostic(code(fuzzy::membership::non_finite))]
    NonFiniteBreakPoint { shape: &'static str, points: Vec<f64> },

    #[error("variable '{variable}' has an invalid range [{min}, {max}]")]
    #[diagnostic(
        code(fuzzy::variable::range),
        help("The range must be finite with min < max.")
    )]
    InvalidRange { variable: String, min: f64, max: f64 },

    #[error("variable '{variable}' has no terms")]
    #[diagnostic(
        code(fuzzy::variable::empty),
        help("Add at least one membership function before building the variable.")
    )]
    EmptyVariable { variable: String },

    #[error("term '{term}' is defined twice on variable '{variable}'")]
    #[diagnostic(code(fuzzy::variable::duplicate_term))]
    DuplicateTerm { variable: String, term: String },

    #[error("'{name}' cannot be used as a variable or term name")]
    #[diagnostic(
        code(fuzzy::variable::invalid_name),
        help("Names must be non-empty, contain no whitespace and not be one of IF, IS, AND, THEN.")
    )]
    InvalidName { name: String },

    #[error("variable '{variable}' is registered more than once")]
    #[diagnostic(
        code(fuzzy::engine::duplicate_variable),
        help("Input and output variables share one namespace.")
    )]
    DuplicateVariable { variable: String },

    #[error("unknown variable '{variable}'")]
    #[diagnostic(code(fuzzy::engine::unknown_variable))]
    UnknownVariable { variable: String },

    #[error("variable '{variable}' has no term '{term}'")]
    #[diagnostic(code(fuzzy::variable::unknown_term))]
    UnknownTerm { variable: String, term: String },

    #[error("rule '{rule}' uses '{variable}' on the wrong side")]
    #[diagnostic(
        code(fuzzy::rule::misplaced_variable),
        help("Antecedents must name input variables and the consequent an output variable.")
    )]
    MisplacedVariable { rule: String, variable: String },

    #[error("rule has no antecedents")]
    #[diagnostic(code(fuzzy::rule::empty))]
    EmptyRule,

    #[error("cannot parse rule '{text}': {message}")]
    #[diagnostic(
        code(fuzzy::rule::syntax),
        help("Rules read like 'IF dirt is SD AND grease is NG THEN wash_time is VS'.")
    )]
    RuleSyntax { text: String, message: String },

    #[error("term '{term}' has params that do not match type '{kind}'")]
    #[diagnostic(code(fuzzy::export::params))]
    InvalidParams { term: String, kind: &'static str },

    #[error("resolution must be at least 2 sample points, got {resolution}")]
    #[diagnostic(code(fuzzy::config::resolution))]
    InvalidResolution { resolution: usize },

    #[error(transparent)]
    #[diagnostic(code(fuzzy::config::toml))]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    #[diagnostic(code(fuzzy::config::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
