use std::str::FromStr;

use crate::error::Error;
use crate::rules::FuzzyRule;

/// A conjunction of propositions waiting for its consequence.
///
/// ```
/// use fuzzy_mamdani::dsl::is;
///
/// let rule = is("dirt", "SD").and("grease", "NG").then("wash_time", "VS");
///
/// assert_eq!(rule.to_string(), "IF dirt is SD AND grease is NG THEN wash_time is VS");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Premise(Vec<(String, String)>);

pub fn is(variable: impl Into<String>, term: impl Into<String>) -> Premise {
    Premise(vec![(variable.into(), term.into())])
}

impl Premise {
    pub fn and(mut self, variable: impl Into<String>, term: impl Into<String>) -> Self {
        self.0.push((variable.into(), term.into()));
        self
    }

    pub fn then(self, variable: impl Into<String>, term: impl Into<String>) -> FuzzyRule {
        FuzzyRule {
            premise: self.0,
            consequence: (variable.into(), term.into()),
        }
    }
}

/// Parses the form produced by `Display`; keywords are case insensitive.
impl FromStr for FuzzyRule {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        let syntax = |message: &str| Error::RuleSyntax {
            text: text.to_owned(),
            message: message.to_owned(),
        };
        let tokens: Vec<&str> = text.split_whitespace().collect();

        match tokens.first() {
            Some(kw) if kw.eq_ignore_ascii_case("if") => (),
            _ => return Err(syntax("expected 'IF'")),
        }

        let then = tokens
            .iter()
            .position(|t| t.eq_ignore_ascii_case("then"))
            .ok_or_else(|| syntax("expected 'THEN'"))?;
        let mut premise = Vec::new();

        for clause in tokens[1..then].split(|t| t.eq_ignore_ascii_case("and")) {
            premise.push(proposition(clause).ok_or_else(|| syntax("expected '<variable> is <term>' before THEN"))?);
        }

        let consequence =
            proposition(&tokens[then + 1..]).ok_or_else(|| syntax("expected '<variable> is <term>' after THEN"))?;

        Ok(FuzzyRule { premise, consequence })
    }
}

const KEYWORDS: [&str; 4] = ["if", "is", "and", "then"];

/// Whether `name` survives a trip through the canonical rule text.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_whitespace)
        && !KEYWORDS.iter().any(|kw| name.eq_ignore_ascii_case(kw))
}

fn proposition(tokens: &[&str]) -> Option<(String, String)> {
    match tokens {
        [var, is, term] if is.eq_ignore_ascii_case("is") => Some((var.to_string(), term.to_string())),
        _ => None,
    }
}
