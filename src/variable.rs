use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::dsl::is_valid_name;
use crate::error::{Error, Result};
use crate::linspace::Linspace;
use crate::membership::{MembershipFunction, TermExport};
use crate::outputs::Degrees;
use crate::terms::Terms;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// A named group of membership functions over one universe of discourse.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyVariable {
    name: String,
    min_u: f64,
    max_u: f64,
    terms: Terms,
}

impl FuzzyVariable {
    pub fn builder(name: impl Into<String>, universe_range: RangeInclusive<f64>) -> VariableBuilder {
        VariableBuilder {
            name: name.into(),
            min_u: *universe_range.start(),
            max_u: *universe_range.end(),
            terms: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min_u, self.max_u)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_u + self.max_u) / 2.
    }

    pub fn terms(&self) -> &Terms {
        &self.terms
    }

    pub fn term(&self, name: &str) -> Option<&MembershipFunction> {
        self.terms.get(name)
    }

    /// Degree of membership of `x` in every term, in term order.
    ///
    /// Values outside of the range are still evaluated.
    pub fn fuzzify(&self, x: f64) -> Degrees {
        self.terms.iter().map(|(name, mf)| (name, mf.membership(x))).collect()
    }

    /// Evaluates one term over a caller supplied grid.
    pub fn sample(&self, term: &str, xs: &[f64]) -> Result<Vec<f64>> {
        let mf = self.terms.get(term).ok_or_else(|| Error::UnknownTerm {
            variable: self.name.clone(),
            term: term.to_owned(),
        })?;

        Ok(xs.iter().map(|x| mf.membership(*x)).collect())
    }

    /// Every term evaluated over `xs`, for plotting.
    pub fn curves(&self, xs: &[f64]) -> Vec<(String, Vec<f64>)> {
        self.terms
            .iter()
            .map(|(name, mf)| (name.to_owned(), xs.iter().map(|x| mf.membership(*x)).collect()))
            .collect()
    }

    /// `num` equally spaced points over the range.
    pub fn universe(&self, num: usize) -> Vec<f64> {
        Linspace::new(self.min_u, self.max_u, num).collect()
    }

    pub fn export(&self) -> VariableExport {
        VariableExport {
            name: self.name.clone(),
            range: [self.min_u, self.max_u],
            membership_functions: self.terms.iter().map(|(name, mf)| TermExport::new(name, mf)).collect(),
        }
    }
}

impl TryFrom<VariableExport> for FuzzyVariable {
    type Error = Error;

    fn try_from(export: VariableExport) -> Result<Self> {
        let [min, max] = export.range;
        let mut builder = FuzzyVariable::builder(export.name, min..=max);

        for term in &export.membership_functions {
            builder = builder.term(term.name.clone(), term.to_function()?);
        }

        builder.build()
    }
}

/// Collects terms and validates them when the variable is built.
#[derive(Debug)]
pub struct VariableBuilder {
    name: String,
    min_u: f64,
    max_u: f64,
    terms: Vec<(String, MembershipFunction)>,
}

impl VariableBuilder {
    pub fn term(mut self, name: impl Into<String>, function: MembershipFunction) -> Self {
        self.terms.push((name.into(), function));
        self
    }

    /// Errors on unordered break points are deferred to [`VariableBuilder::build`].
    pub fn triangular(self, name: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
        self.term(name, MembershipFunction::Triangular { a, b, c })
    }

    pub fn trapezoidal(self, name: impl Into<String>, a: f64, b: f64, c: f64, d: f64) -> Self {
        self.term(name, MembershipFunction::Trapezoidal { a, b, c, d })
    }

    pub fn build(self) -> Result<FuzzyVariable> {
        let Self {
            name,
            min_u,
            max_u,
            terms: start_terms,
        } = self;

        if !is_valid_name(&name) {
            return Err(Error::InvalidName { name });
        }
        if !(min_u.is_finite() && max_u.is_finite() && min_u < max_u) {
            return Err(Error::InvalidRange {
                variable: name,
                min: min_u,
                max: max_u,
            });
        }
        if start_terms.is_empty() {
            return Err(Error::EmptyVariable { variable: name });
        }

        let mut terms = Terms::new();

        for (term, membership) in start_terms {
            if !is_valid_name(&term) {
                return Err(Error::InvalidName { name: term });
            }
            membership.validate()?;

            if let Err(term) = terms.insert(term, membership) {
                return Err(Error::DuplicateTerm { variable: name, term });
            }
        }

        Ok(FuzzyVariable {
            name,
            min_u,
            max_u,
            terms,
        })
    }
}

/// `{"name": .., "range": [min, max], "membership_functions": [..]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableExport {
    pub name: String,
    pub range: [f64; 2],
    pub membership_functions: Vec<TermExport>,
}

/// Variables in registration order, addressable by key or by name.
#[derive(Clone, Debug, Default)]
pub struct Variables {
    slots: SlotMap<VariableKey, FuzzyVariable>,
    by_name: HashMap<String, VariableKey>,
}

impl Variables {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            by_name: HashMap::new(),
        }
    }

    pub(crate) fn add(&mut self, variable: FuzzyVariable) -> Result<VariableKey> {
        if self.by_name.contains_key(variable.name()) {
            return Err(Error::DuplicateVariable {
                variable: variable.name,
            });
        }

        let name = variable.name.clone();
        let key = self.slots.insert(variable);

        self.by_name.insert(name, key);

        Ok(key)
    }

    pub fn key(&self, name: &str) -> Option<VariableKey> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, name: &str) -> Option<&FuzzyVariable> {
        self.key(name).and_then(|key| self.slots.get(key))
    }

    pub fn get_by_key(&self, key: VariableKey) -> Option<&FuzzyVariable> {
        self.slots.get(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Variables in the order they were added. Nothing is ever removed, so
    /// slot order is insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FuzzyVariable> {
        self.slots.values()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
