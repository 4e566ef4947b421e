use crate::{
    DecisionSynthesizer, DependencyEdge, EngineConfig, FallbackPolicy, Reason, SentenceAnalysis,
    StabilityLabel,
};

fn edge(head: &str, dependent: &str) -> DependencyEdge {
    DependencyEdge::new(head, "dep", dependent)
}

fn trace(text: &str, edges: &[DependencyEdge]) -> String {
    DecisionSynthesizer::default().analyze(text, edges).to_string()
}

#[test]
fn test_solvent_and_collapse_without_edges_stays_default() {
    insta::assert_snapshot!(trace("The solvent was removed and the framework collapsed.", &[]), @r###"
    collapse: ["collaps"]
    stable:   []
    solvent:  ["solvent", "remov"]
    => 0 "default" solvent=true stability=true
    "###);
}

#[test]
fn test_always_fallback_labels_solvent_sentences() {
    let engine = DecisionSynthesizer::default().fallback(FallbackPolicy::Always);
    let result = engine
        .classify("The solvent was removed and the framework collapsed.", &[])
        .unwrap();
    assert_eq!(result.label, StabilityLabel::Unstable);
    assert_eq!(result.reason, Reason::HasCollapse);
    assert!(result.solvent_present);

    let config = EngineConfig::from_toml_str(r#"fallback = "always""#).unwrap();
    assert_eq!(
        DecisionSynthesizer::new(&config).classify("The solvent was removed and the framework collapsed.", &[]),
        Some(result)
    );
}

#[test]
fn test_negated_stable_cue() {
    insta::assert_snapshot!(
        trace(
            "After solvent removal the framework was not stable.",
            &[edge("stable", "not")]
        ),
        @r###"
    collapse: []
    stable:   [" stable"]
    solvent:  ["solvent", "remov"]
    negated:  ["stable", "not"]
    => -1 "negation with stable kw" solvent=true stability=true
    "###
    );
}

#[test]
fn test_negated_collapse_cue() {
    let result = DecisionSynthesizer::default()
        .classify("There was no collapse upon desolvation.", &[edge("collapse", "no")])
        .unwrap();
    assert_eq!(result.label, StabilityLabel::Stable);
    assert_eq!(result.reason, Reason::NegatedCollapse);
}

#[test]
fn test_water_edge_remaps_to_undetermined_without_solvent() {
    insta::assert_snapshot!(
        trace(
            "The framework is stable in the presence of water after solvent removal.",
            &[edge("stable", "water")]
        ),
        @r###"
    collapse: []
    stable:   [" stable"]
    solvent:  ["solvent", "remov", "water"]
    => 0 "water stability" solvent=false stability=true
    "###
    );
}

#[test]
fn test_solvent_degradation_is_off_topic() {
    let result = DecisionSynthesizer::default()
        .classify(
            "The solvent degrades while the framework retains crystallinity.",
            &[edge("degrades", "solvent")],
        )
        .unwrap();
    assert_eq!(result.label, StabilityLabel::Undetermined);
    assert_eq!(result.reason, Reason::SolventMoleculeStability);
    assert!(!result.solvent_present);
    assert!(result.stability_present);
}

#[test]
fn test_multistep_and_loss_confound() {
    let engine = DecisionSynthesizer::default().fallback(FallbackPolicy::Always);

    let multistep = engine
        .classify(
            "The framework collapsed above 350 C after solvent removal.",
            &[edge("collapsed", "above")],
        )
        .unwrap();
    assert_eq!(multistep.label, StabilityLabel::Undetermined);
    assert_eq!(multistep.reason, Reason::MultistepTga);

    let confound = engine
        .classify(
            "The loss of guest molecules preserved the crystallinity.",
            &[edge("loss", "molecules")],
        )
        .unwrap();
    assert_eq!(confound.label, StabilityLabel::Undetermined);
    assert_eq!(confound.reason, Reason::LossConfound);
}

#[test]
fn test_single_stable_cue_without_solvent() {
    let result = DecisionSynthesizer::default()
        .classify("The framework shows high crystallinity.", &[])
        .unwrap();
    assert_eq!(result.label, StabilityLabel::Stable);
    assert_eq!(result.reason, Reason::HasStable);
    assert!(!result.solvent_present);
}

#[test]
fn test_both_keyword_kinds_without_solvent() {
    let result = DecisionSynthesizer::default()
        .classify("Partial collapse occurred but crystallinity was high.", &[])
        .unwrap();
    assert_eq!(result.label, StabilityLabel::Undetermined);
    assert_eq!(result.reason, Reason::HasBoth);
}

#[test]
fn test_discarded_sentence_names_rule() {
    insta::assert_snapshot!(
        trace("Its air stability and crystallinity after solvent removal are high.", &[]),
        @"discarded: air stability phrasing"
    );
}

#[test]
fn test_root_edges_and_empty_edges_never_fail() {
    let engine = DecisionSynthesizer::default();
    let text = "The guest was removed and porosity was retained.";
    let with_root = engine.classify(text, &[DependencyEdge::root("removed")]);
    let without = engine.classify(text, &[]);
    assert_eq!(with_root, without);
    assert_eq!(without.unwrap().reason, Reason::Default);
}

#[test]
fn test_classification_is_deterministic() {
    let engine = DecisionSynthesizer::default();
    let edges = [edge("stable", "not"), edge("framework", "the")];
    let text = "After solvent removal the framework was not stable.";
    assert_eq!(engine.analyze(text, &edges), engine.analyze(text, &edges));
}

#[test]
fn test_every_emitted_result_has_reason() {
    let engine = DecisionSynthesizer::default();
    let sentences = [
        "The solvent was removed and the framework collapsed.",
        "The framework shows high crystallinity.",
        "Thermogravimetric analysis indicates integrity up to 400 C.",
        "Partial collapse occurred but crystallinity was high.",
        "Upon evacuation the material became amorphous.",
        "Nothing relevant here.",
        "",
    ];
    for text in sentences {
        if let SentenceAnalysis::Classified { result, .. } = engine.analyze(text, &[]) {
            assert!(!result.reason.as_str().is_empty(), "{}", text);
            assert!((-1..=1).contains(&result.label.code()));
        }
    }
}

#[test]
fn test_analysis_serializes_with_codes() {
    let analysis = DecisionSynthesizer::default().analyze("The framework shows high crystallinity.", &[]);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["outcome"], "classified");
    assert_eq!(json["detail"]["result"]["label"], 1);
    assert_eq!(json["detail"]["result"]["reason"], "has stable kw");
}
