use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::{ControllerConfig, InferenceConfig};
use crate::error::{Error, Result};
use crate::inputs::Inputs;
use crate::ops::{centroid, clip, firing_strength, or_max, union_into};
use crate::outputs::{Degrees, InferenceResult, RuleActivation};
use crate::rules::{FuzzyRule, Rules};
use crate::variable::{FuzzyVariable, Variables};

/// Mamdani inference: min for premises, max for aggregation, centre of
/// gravity for defuzzification.
///
/// An engine is immutable once built; `infer` only reads it, so one instance
/// can serve any number of threads.
#[derive(Clone, Debug)]
pub struct InferenceEngine {
    inputs: Variables,
    outputs: Variables,
    rules: Rules,
    config: InferenceConfig,
}

impl InferenceEngine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn infer(&self, inputs: &Inputs) -> InferenceResult {
        // Fuzzificate Facts
        let mut fuzzified_inputs: IndexMap<String, Degrees> = IndexMap::with_capacity(self.inputs.len());

        for var in self.inputs.iter() {
            if let Some(value) = inputs.get(var.name()) {
                fuzzified_inputs.insert(var.name().to_owned(), var.fuzzify(value));
            }
        }

        for name in inputs.0.keys().filter(|name| !self.inputs.contains(name)) {
            trace!(variable = %name, "ignoring input for unregistered variable");
        }

        // Evaluate rules and aggregate their consequences
        let mut rule_activations = Vec::with_capacity(self.rules.len());
        let mut aggregated: IndexMap<String, Degrees> = IndexMap::new();

        for rule in self.rules.iter() {
            // Propositions on variables without a fact do not constrain the rule
            let strength = firing_strength(rule.antecedents().filter_map(|(var, term)| {
                fuzzified_inputs.get(var).map(|degrees| degrees.get(term).unwrap_or(0.))
            }));
            let (out_var, out_term) = rule.consequent();

            trace!(rule = %rule, strength, "rule evaluated");

            let levels = aggregated.entry(out_var.to_owned()).or_default();
            let level = levels.get(out_term).map_or(strength, |level| or_max(level, strength));

            levels.set(out_term, level);
            rule_activations.push(RuleActivation {
                rule: rule.to_string(),
                firing_strength: strength,
                consequent: (out_var.to_owned(), out_term.to_owned()),
            });
        }

        // Defuzzificate
        let crisp: IndexMap<String, f64> = aggregated
            .iter()
            .filter_map(|(name, levels)| {
                let var = self.outputs.get(name)?;

                Some((name.clone(), self.defuzzify(var, levels)))
            })
            .collect();

        debug!(
            facts = fuzzified_inputs.len(),
            rules = rule_activations.len(),
            outputs = crisp.len(),
            "fuzzy inference complete"
        );

        InferenceResult {
            crisp,
            fuzzified_inputs,
            rule_activations,
            aggregated,
        }
    }

    fn defuzzify(&self, var: &FuzzyVariable, levels: &Degrees) -> f64 {
        let (universe, membership) = envelope(var, levels, self.config.resolution);

        centroid(&universe, &membership).unwrap_or_else(|| {
            debug!(variable = var.name(), "no aggregated mass, falling back to range midpoint");
            var.midpoint()
        })
    }

    /// The clipped and unioned output curve for plotting; empty when `output`
    /// is not a registered output variable.
    pub fn sample_aggregated_curve(&self, output: &str, levels: &Degrees, num_points: usize) -> (Vec<f64>, Vec<f64>) {
        match self.outputs.get(output) {
            Some(var) => envelope(var, levels, num_points),
            None => (Vec::new(), Vec::new()),
        }
    }

    pub fn sample_aggregated_curve_default(&self, output: &str, levels: &Degrees) -> (Vec<f64>, Vec<f64>) {
        self.sample_aggregated_curve(output, levels, self.config.curve_points)
    }

    pub fn input_variables(&self) -> &Variables {
        &self.inputs
    }

    pub fn output_variables(&self) -> &Variables {
        &self.outputs
    }

    pub fn input(&self, name: &str) -> Option<&FuzzyVariable> {
        self.inputs.get(name)
    }

    pub fn output(&self, name: &str) -> Option<&FuzzyVariable> {
        self.outputs.get(name)
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn rule_texts(&self) -> Vec<String> {
        self.rules.iter().map(ToString::to_string).collect()
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// The whole engine as a document [`ControllerConfig::build`] accepts.
    pub fn export(&self) -> ControllerConfig {
        ControllerConfig {
            rules: self.rule_texts(),
            inputs: self.inputs.iter().map(FuzzyVariable::export).collect(),
            outputs: self.outputs.iter().map(FuzzyVariable::export).collect(),
            inference: self.config,
        }
    }
}

/// Each term truncated at its level, then unioned, over `num_points` samples.
fn envelope(var: &FuzzyVariable, levels: &Degrees, num_points: usize) -> (Vec<f64>, Vec<f64>) {
    let universe = var.universe(num_points);
    let mut membership = vec![0.; universe.len()];

    for (term, level) in levels.iter() {
        if let Some(mf) = var.term(term) {
            union_into(&mut membership, clip(universe.iter().map(|y| mf.membership(*y)), level));
        }
    }

    (universe, membership)
}

/// Assembles and validates an [`InferenceEngine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    inputs: Vec<FuzzyVariable>,
    outputs: Vec<FuzzyVariable>,
    rules: Rules,
    config: InferenceConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, variable: FuzzyVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    pub fn output(mut self, variable: FuzzyVariable) -> Self {
        self.outputs.push(variable);
        self
    }

    pub fn rule(mut self, rule: FuzzyRule) -> Self {
        self.rules.add(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = FuzzyRule>) -> Self {
        for rule in rules {
            self.rules.add(rule);
        }
        self
    }

    pub fn config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Rejects duplicate variable names across inputs and outputs, and rules
    /// naming variables or terms that are not registered on the right side.
    pub fn build(self) -> Result<InferenceEngine> {
        self.config.validate()?;

        let mut inputs = Variables::new();
        let mut outputs = Variables::new();

        for var in self.inputs {
            inputs.add(var)?;
        }
        for var in self.outputs {
            if inputs.contains(var.name()) {
                return Err(Error::DuplicateVariable {
                    variable: var.name().to_owned(),
                });
            }
            outputs.add(var)?;
        }

        for rule in self.rules.iter() {
            if rule.premise.is_empty() {
                return Err(Error::EmptyRule);
            }
            for (var, term) in rule.antecedents() {
                check_proposition(rule, &inputs, &outputs, var, term)?;
            }

            let (var, term) = rule.consequent();

            check_proposition(rule, &outputs, &inputs, var, term)?;
        }

        debug!(
            inputs = inputs.len(),
            outputs = outputs.len(),
            rules = self.rules.len(),
            "fuzzy engine built"
        );

        Ok(InferenceEngine {
            inputs,
            outputs,
            rules: self.rules,
            config: self.config,
        })
    }
}

fn check_proposition(rule: &FuzzyRule, side: &Variables, other: &Variables, var: &str, term: &str) -> Result<()> {
    match side.get(var) {
        Some(v) if v.term(term).is_some() => Ok(()),
        Some(_) => Err(Error::UnknownTerm {
            variable: var.to_owned(),
            term: term.to_owned(),
        }),
        None if other.contains(var) => Err(Error::MisplacedVariable {
            rule: rule.to_string(),
            variable: var.to_owned(),
        }),
        None => Err(Error::UnknownVariable {
            variable: var.to_owned(),
        }),
    }
}
