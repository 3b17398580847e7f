use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Degrees of membership keyed by term name, in a fixed order.
///
/// Used for fuzzified inputs (variable term order) and aggregated outputs
/// (order of first appearance in the rule base). Serializes as a map with
/// that order preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(IndexMap<String, f64>);

impl Degrees {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    /// Sets `term` to `degree`. A new term goes last, an existing one keeps
    /// its position.
    pub fn set(&mut self, term: &str, degree: f64) {
        match self.0.get_mut(term) {
            Some(d) => *d = degree,
            None => {
                self.0.insert(term.to_owned(), degree);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(t, d)| (t.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Degrees {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(term, degree)| (term.into(), degree)).collect())
    }
}

/// One rule's contribution to an inference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuleActivation {
    pub rule: String,
    pub firing_strength: f64,
    pub consequent: (String, String),
}

/// Everything an inference produced, stage by stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InferenceResult {
    #[serde(rename = "output")]
    pub(crate) crisp: IndexMap<String, f64>,
    pub(crate) fuzzified_inputs: IndexMap<String, Degrees>,
    pub(crate) rule_activations: Vec<RuleActivation>,
    #[serde(rename = "aggregated_output")]
    pub(crate) aggregated: IndexMap<String, Degrees>,
}

impl InferenceResult {
    /// Defuzzified value of an output variable.
    pub fn output(&self, variable: &str) -> Option<f64> {
        self.crisp.get(variable).copied()
    }

    pub fn outputs(&self) -> impl Iterator<Item = (&str, f64)> {
        self.crisp.iter().map(|(v, y)| (v.as_str(), *y))
    }

    pub fn fuzzified(&self, variable: &str) -> Option<&Degrees> {
        self.fuzzified_inputs.get(variable)
    }

    pub fn fuzzified_inputs(&self) -> impl Iterator<Item = (&str, &Degrees)> {
        self.fuzzified_inputs.iter().map(|(v, d)| (v.as_str(), d))
    }

    /// Every rule in rule base order, including the ones that did not fire.
    pub fn rule_activations(&self) -> &[RuleActivation] {
        &self.rule_activations
    }

    pub fn aggregated(&self, variable: &str) -> Option<&Degrees> {
        self.aggregated.get(variable)
    }

    pub fn aggregated_outputs(&self) -> impl Iterator<Item = (&str, &Degrees)> {
        self.aggregated.iter().map(|(v, d)| (v.as_str(), d))
    }
}
