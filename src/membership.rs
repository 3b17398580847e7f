use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shape of a fuzzy set over a one dimensional universe.
///
/// The peak (triangular `b`) and the plateau (trapezoidal `[b, c]`) always
/// evaluate to one. Everywhere else the function is right-open at its outer
/// break points: `x <= a` and `x >= c` (or `d`) evaluate to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MembershipFunction {
    Triangular { a: f64, b: f64, c: f64 },
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self> {
        let this = Self::Triangular { a, b, c };

        this.validate()?;

        Ok(this)
    }

    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        let this = Self::Trapezoidal { a, b, c, d };

        this.validate()?;

        Ok(this)
    }

    /// Checks that the break points are finite and ordered.
    pub fn validate(&self) -> Result<()> {
        let points = self.break_points();
        let shape = self.kind();

        if points.iter().any(|p| !p.is_finite()) {
            return Err(Error::NonFiniteBreakPoint { shape, points });
        }
        if points.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::UnorderedBreakPoints { shape, points });
        }

        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Triangular { .. } => "triangular",
            Self::Trapezoidal { .. } => "trapezoidal",
        }
    }

    pub fn break_points(&self) -> Vec<f64> {
        match *self {
            Self::Triangular { a, b, c } => vec![a, b, c],
            Self::Trapezoidal { a, b, c, d } => vec![a, b, c, d],
        }
    }

    /// Outer break points; membership is zero outside of them.
    pub fn support(&self) -> (f64, f64) {
        match *self {
            Self::Triangular { a, c, .. } => (a, c),
            Self::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    pub fn membership(&self, x: f64) -> f64 {
        if x.is_nan() {
            return 0.;
        }

        match *self {
            Self::Triangular { a, b, c } => triangular(x, a, b, c),
            Self::Trapezoidal { a, b, c, d } => trapezoidal(x, a, b, c, d),
        }
    }
}

fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x == b {
        1.
    } else if x <= a || x >= c {
        0.
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if b <= x && x <= c {
        1.
    } else if x <= a || x >= d {
        0.
    } else if x < b {
        (x - a) / (b - a)
    } else {
        (d - x) / (d - c)
    }
}

/// Exported form of a named membership function:
/// `{"type": "triangular", "name": "SD", "params": {"a": 0, "b": 0, "c": 100}}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TermExport {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub name: String,
    pub params: Params,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangular,
    Trapezoidal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
}

impl TermExport {
    pub fn new(name: &str, function: &MembershipFunction) -> Self {
        let (kind, params) = match *function {
            MembershipFunction::Triangular { a, b, c } => (ShapeKind::Triangular, Params { a, b, c, d: None }),
            MembershipFunction::Trapezoidal { a, b, c, d } => {
                (ShapeKind::Trapezoidal, Params { a, b, c, d: Some(d) })
            }
        };

        Self {
            kind,
            name: name.to_owned(),
            params,
        }
    }

    pub fn to_function(&self) -> Result<MembershipFunction> {
        let Params { a, b, c, d } = self.params;

        match (self.kind, d) {
            (ShapeKind::Triangular, None) => MembershipFunction::triangular(a, b, c),
            (ShapeKind::Trapezoidal, Some(d)) => MembershipFunction::trapezoidal(a, b, c, d),
            (kind, _) => Err(Error::InvalidParams {
                term: self.name.clone(),
                kind: match kind {
                    ShapeKind::Triangular => "triangular",
                    ShapeKind::Trapezoidal => "trapezoidal",
                },
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> impl Iterator<Item = f64> {
        (-50..=250).map(|i| i as f64 * 0.5)
    }

    #[test]
    fn test_triangular_break_points() {
        let mf = MembershipFunction::triangular(0., 100., 200.).unwrap();

        assert_eq!(mf.membership(0.), 0.);
        assert_eq!(mf.membership(100.), 1.);
        assert_eq!(mf.membership(200.), 0.);
        assert_eq!(mf.membership(50.), 0.5);
        assert_eq!(mf.membership(150.), 0.5);
        assert_eq!(mf.membership(-10.), 0.);
        assert_eq!(mf.membership(210.), 0.);
    }

    #[test]
    fn test_triangular_shoulders() {
        let left = MembershipFunction::triangular(0., 0., 100.).unwrap();
        let right = MembershipFunction::triangular(100., 200., 200.).unwrap();

        assert_eq!(left.membership(0.), 1.);
        assert_eq!(left.membership(50.), 0.5);
        assert_eq!(left.membership(100.), 0.);
        assert_eq!(left.membership(-1.), 0.);

        assert_eq!(right.membership(100.), 0.);
        assert_eq!(right.membership(130.), 0.3);
        assert_eq!(right.membership(200.), 1.);
        assert_eq!(right.membership(201.), 0.);
    }

    #[test]
    fn test_trapezoidal_plateau() {
        let mf = MembershipFunction::trapezoidal(10., 20., 30., 50.).unwrap();

        for x in [20., 22.5, 25., 30.] {
            assert_eq!(mf.membership(x), 1.);
        }

        assert_eq!(mf.membership(10.), 0.);
        assert_eq!(mf.membership(15.), 0.5);
        assert_eq!(mf.membership(40.), 0.5);
        assert_eq!(mf.membership(50.), 0.);

        let shoulder = MembershipFunction::trapezoidal(0., 0., 10., 20.).unwrap();

        assert_eq!(shoulder.membership(0.), 1.);
    }

    #[test]
    fn test_membership_stays_in_unit_interval() {
        let shapes = [
            MembershipFunction::triangular(0., 0., 100.).unwrap(),
            MembershipFunction::triangular(3., 7., 11.).unwrap(),
            MembershipFunction::triangular(40., 60., 60.).unwrap(),
            MembershipFunction::trapezoidal(-5., 0., 0., 5.).unwrap(),
            MembershipFunction::trapezoidal(0., 25., 75., 100.).unwrap(),
        ];

        for mf in &shapes {
            for x in grid() {
                let y = mf.membership(x);

                assert!((0. ..=1.).contains(&y), "{mf:?} at {x} gave {y}");
            }
        }

        assert_eq!(shapes[1].membership(f64::NAN), 0.);
        assert_eq!(shapes[1].membership(f64::INFINITY), 0.);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            MembershipFunction::triangular(5., 1., 10.),
            Err(Error::UnorderedBreakPoints { shape: "triangular", .. })
        ));
        assert!(matches!(
            MembershipFunction::trapezoidal(0., 1., 3., 2.),
            Err(Error::UnorderedBreakPoints { shape: "trapezoidal", .. })
        ));
        assert!(matches!(
            MembershipFunction::triangular(0., f64::NAN, 1.),
            Err(Error::NonFiniteBreakPoint { .. })
        ));
        assert!(MembershipFunction::triangular(1., 1., 1.).is_ok());
    }

    #[test]
    fn test_export_round_trip() {
        let shapes = [
            MembershipFunction::triangular(10., 25., 40.).unwrap(),
            MembershipFunction::trapezoidal(0., 10., 20., 60.).unwrap(),
        ];

        for mf in &shapes {
            let json = serde_json::to_string(&TermExport::new("M", mf)).unwrap();
            let back: TermExport = serde_json::from_str(&json).unwrap();
            let rebuilt = back.to_function().unwrap();

            for x in grid() {
                assert_eq!(mf.membership(x), rebuilt.membership(x));
            }
        }
    }

    #[test]
    fn test_export_format() {
        let mf = MembershipFunction::triangular(0., 0., 100.).unwrap();
        let value = serde_json::to_value(TermExport::new("SD", &mf)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"type": "triangular", "name": "SD", "params": {"a": 0.0, "b": 0.0, "c": 100.0}})
        );

        let bad = TermExport {
            kind: ShapeKind::Trapezoidal,
            name: "X".into(),
            params: Params {
                a: 0.,
                b: 1.,
                c: 2.,
                d: None,
            },
        };

        assert!(matches!(bad.to_function(), Err(Error::InvalidParams { .. })));
    }
}
