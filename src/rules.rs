use std::fmt;

/// `IF v1 is c1 AND v2 is c2 THEN vo is co`
///
/// The premise is a conjunction of (input variable, term) propositions; the
/// consequence names a single output variable and term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuzzyRule {
    pub(crate) premise: Vec<(String, String)>,
    pub(crate) consequence: (String, String),
}

impl FuzzyRule {
    pub fn new<V, T>(premise: impl IntoIterator<Item = (V, T)>, consequence: (V, T)) -> Self
    where
        V: Into<String>,
        T: Into<String>,
    {
        Self {
            premise: premise.into_iter().map(|(v, t)| (v.into(), t.into())).collect(),
            consequence: (consequence.0.into(), consequence.1.into()),
        }
    }

    pub fn antecedents(&self) -> impl Iterator<Item = (&str, &str)> {
        self.premise.iter().map(|(v, t)| (v.as_str(), t.as_str()))
    }

    pub fn consequent(&self) -> (&str, &str) {
        (&self.consequence.0, &self.consequence.1)
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IF ")?;

        for (i, (var, term)) in self.premise.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{var} is {term}")?;
        }

        write!(f, " THEN {} is {}", self.consequence.0, self.consequence.1)
    }
}

/// The rule base, in the order rules were added.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules(pub(crate) Vec<FuzzyRule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, rule: FuzzyRule) {
        self.0.push(rule);
    }

    pub fn iter(&self) -> impl Iterator<Item = &FuzzyRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_rule_display() {
    let rule = FuzzyRule::new([("dirt", "SD"), ("grease", "NG")], ("wash_time", "VS"));

    assert_eq!(rule.to_string(), "IF dirt is SD AND grease is NG THEN wash_time is VS");
    assert_eq!(rule.consequent(), ("wash_time", "VS"));
    assert_eq!(rule.antecedents().collect::<Vec<_>>(), [("dirt", "SD"), ("grease", "NG")]);

    let single = FuzzyRule::new([("x", "low")], ("y", "high"));

    assert_eq!(single.to_string(), "IF x is low THEN y is high");
}
