use indexmap::IndexMap;

use crate::membership::MembershipFunction;

/// Linguistic terms of one variable, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Terms(pub(crate) IndexMap<String, MembershipFunction>);

impl Terms {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Returns the rejected name if the term already exists.
    pub(crate) fn insert(&mut self, name: String, function: MembershipFunction) -> Result<(), String> {
        if self.contains(&name) {
            return Err(name);
        }

        self.0.insert(name, function);

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MembershipFunction> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MembershipFunction)> {
        self.0.iter().map(|(n, mf)| (n.as_str(), mf))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn test_terms_keep_insertion_order() {
    let mut terms = Terms::new();

    terms.insert("VS".into(), MembershipFunction::triangular(0., 0., 10.).unwrap()).unwrap();
    terms.insert("S".into(), MembershipFunction::triangular(0., 10., 25.).unwrap()).unwrap();
    terms.insert("M".into(), MembershipFunction::triangular(10., 25., 40.).unwrap()).unwrap();

    assert_eq!(terms.names().collect::<Vec<_>>(), ["VS", "S", "M"]);
    assert_eq!(
        terms.insert("S".into(), MembershipFunction::triangular(0., 1., 2.).unwrap()),
        Err("S".to_owned())
    );
    assert_eq!(terms.len(), 3);
    assert_eq!(terms.get("S"), MembershipFunction::triangular(0., 10., 25.).ok().as_ref());
    assert!(terms.get("L").is_none());
}
