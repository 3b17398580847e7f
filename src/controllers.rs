//! Ready made controller configurations.
//!
//! Each factory only assembles variables and rules; any other domain can do
//! the same through [`EngineBuilder`] or a [`ControllerConfig`] document.
//!
//! [`ControllerConfig`]: crate::config::ControllerConfig

use crate::dsl::is;
use crate::error::Result;
use crate::inference::{EngineBuilder, InferenceEngine};
use crate::variable::FuzzyVariable;

/// Wash time lookup, rows by dirt (SD, MD, LD), columns by grease (NG, MG, LG).
static WASH_TIME_TABLE: [(&str, [(&str, &str); 3]); 3] = [
    ("SD", [("NG", "VS"), ("MG", "M"), ("LG", "L")]),
    ("MD", [("NG", "S"), ("MG", "M"), ("LG", "L")]),
    ("LD", [("NG", "M"), ("MG", "L"), ("LG", "VL")]),
];

/// `dirt` and `grease` on `[0, 200]`, `wash_time` in minutes on `[0, 60]`.
pub fn washing_machine_variables() -> Result<(FuzzyVariable, FuzzyVariable, FuzzyVariable)> {
    let dirt = FuzzyVariable::builder("dirt", 0. ..=200.)
        .triangular("SD", 0., 0., 100.)
        .triangular("MD", 0., 100., 200.)
        .triangular("LD", 100., 200., 200.)
        .build()?;
    let grease = FuzzyVariable::builder("grease", 0. ..=200.)
        .triangular("NG", 0., 0., 100.)
        .triangular("MG", 0., 100., 200.)
        .triangular("LG", 100., 200., 200.)
        .build()?;
    let wash_time = FuzzyVariable::builder("wash_time", 0. ..=60.)
        .triangular("VS", 0., 0., 10.)
        .triangular("S", 0., 10., 25.)
        .triangular("M", 10., 25., 40.)
        .triangular("L", 25., 40., 60.)
        .triangular("VL", 40., 60., 60.)
        .build()?;

    Ok((dirt, grease, wash_time))
}

/// Washing machine controller choosing a wash time from dirt and grease
/// readings, with one rule per cell of the 3x3 lookup table.
pub fn washing_machine() -> Result<InferenceEngine> {
    let (dirt, grease, wash_time) = washing_machine_variables()?;
    let rules = WASH_TIME_TABLE.iter().flat_map(|(dirt_term, row)| {
        row.iter().map(move |&(grease_term, time_term)| {
            is("dirt", *dirt_term)
                .and("grease", grease_term)
                .then("wash_time", time_term)
        })
    });

    EngineBuilder::new()
        .input(dirt)
        .input(grease)
        .output(wash_time)
        .rules(rules)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;
    use crate::inputs::Inputs;

    fn infer(dirt: f64, grease: f64) -> crate::outputs::InferenceResult {
        washing_machine().unwrap().infer(&[("dirt", dirt), ("grease", grease)].into())
    }

    #[test]
    fn test_rule_base() {
        let engine = washing_machine().unwrap();
        let texts = engine.rule_texts();

        assert_eq!(texts.len(), 9);
        assert_eq!(texts[0], "IF dirt is SD AND grease is NG THEN wash_time is VS");
        assert_eq!(texts[4], "IF dirt is MD AND grease is MG THEN wash_time is M");
        assert_eq!(texts[8], "IF dirt is LD AND grease is LG THEN wash_time is VL");
        assert_eq!(
            engine.output("wash_time").unwrap().terms().names().collect::<Vec<_>>(),
            ["VS", "S", "M", "L", "VL"]
        );
    }

    #[test]
    fn test_light_load() {
        let result = infer(50., 30.);
        let dirt = result.fuzzified("dirt").unwrap();
        let grease = result.fuzzified("grease").unwrap();

        assert_eq!(dirt.iter().collect::<Vec<_>>(), [("SD", 0.5), ("MD", 0.5), ("LD", 0.)]);
        assert_eq!(grease.iter().collect::<Vec<_>>(), [("NG", 0.7), ("MG", 0.3), ("LG", 0.)]);

        let strongest = result
            .rule_activations()
            .iter()
            .map(|a| a.firing_strength)
            .fold(0., f64::max);
        let first = &result.rule_activations()[0];

        assert_eq!(first.rule, "IF dirt is SD AND grease is NG THEN wash_time is VS");
        assert_eq!(first.firing_strength, 0.5);
        assert_eq!(strongest, 0.5);

        let wash_time = result.output("wash_time").unwrap();

        assert!(wash_time > 0. && wash_time < 25., "wash_time = {wash_time}");
    }

    #[test]
    fn test_heavy_load() {
        let result = infer(200., 200.);

        assert_eq!(result.fuzzified("dirt").unwrap().get("LD"), Some(1.));
        assert_eq!(result.fuzzified("dirt").unwrap().get("MD"), Some(0.));
        assert_eq!(result.fuzzified("grease").unwrap().get("LG"), Some(1.));

        for activation in result.rule_activations() {
            let expected = if activation.consequent.1 == "VL" { 1. } else { 0. };

            assert_eq!(activation.firing_strength, expected, "{}", activation.rule);
        }

        let wash_time = result.output("wash_time").unwrap();

        assert!(wash_time > 50. && wash_time <= 60., "wash_time = {wash_time}");
    }

    #[test]
    fn test_wash_time_grows_with_load() {
        let light = infer(50., 30.).output("wash_time").unwrap();
        let medium = infer(120., 140.).output("wash_time").unwrap();
        let heavy = infer(180., 180.).output("wash_time").unwrap();

        assert!(light < medium && medium < heavy, "{light} {medium} {heavy}");
    }

    #[test]
    fn test_partial_inputs() {
        let engine = washing_machine().unwrap();
        let mut inputs = Inputs::new();

        inputs.add("dirt", 200.);

        let result = engine.infer(&inputs);

        // Without grease every LD rule fires fully
        let fired = result
            .rule_activations()
            .iter()
            .filter(|a| a.firing_strength == 1.)
            .count();

        assert_eq!(fired, 3);
        assert!(result.fuzzified("grease").is_none());
    }

    #[test]
    fn test_exported_document_rebuilds_same_engine() {
        let engine = washing_machine().unwrap();
        let toml = toml::to_string(&engine.export()).unwrap();
        let rebuilt = ControllerConfig::from_toml_str(&toml).unwrap().build().unwrap();

        assert_eq!(rebuilt.rule_texts(), engine.rule_texts());

        for (dirt, grease) in [(0., 0.), (50., 30.), (120., 140.), (199., 3.)] {
            let inputs: Inputs = [("dirt", dirt), ("grease", grease)].into();

            assert_eq!(rebuilt.infer(&inputs), engine.infer(&inputs));
        }
    }

    #[test]
    fn test_result_serializes_every_stage() {
        let value = serde_json::to_value(infer(50., 30.)).unwrap();

        assert_eq!(value["fuzzified_inputs"]["grease"]["NG"], 0.7);
        assert_eq!(value["rule_activations"].as_array().map(Vec::len), Some(9));
        assert_eq!(value["rule_activations"][0]["consequent"], serde_json::json!(["wash_time", "VS"]));
        assert_eq!(value["aggregated_output"]["wash_time"]["M"], 0.3);
        assert!(value["output"]["wash_time"].is_f64());
    }
}
