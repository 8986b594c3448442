use zapbase::application::services::{
    CorrectionRule, DEFAULT_CORRECTIONS, PatternError, TextNormalizer, default_correction_rules,
};

#[test]
fn given_mixed_case_and_punctuation_when_normalizing_then_returns_clean_lowercase() {
    let normalizer = TextNormalizer::default();

    let result = normalizer.normalize("  Send, 0.5 ETH to Alice!  ");

    assert_eq!(result, "send 0.5 eth to alice");
}

#[test]
fn given_spoken_dots_when_normalizing_then_name_is_joined() {
    let normalizer = TextNormalizer::default();

    let result = normalizer.normalize("send 1 eth to bob dot base dot eth");

    assert_eq!(result, "send 1 eth to bob.base.eth");
}

#[test]
fn given_number_glued_to_eth_when_normalizing_then_unit_is_split_off() {
    let normalizer = TextNormalizer::default();

    assert_eq!(normalizer.normalize("send 0.5.eth to carol"), "send 0.5 eth to carol");
    assert_eq!(normalizer.normalize("send 2.th to carol"), "send 2 eth to carol");
}

#[test]
fn given_misheard_unit_when_normalizing_then_becomes_eth() {
    let normalizer = TextNormalizer::default();

    assert_eq!(normalizer.normalize("send 3 ether to dan"), "send 3 eth to dan");
    assert_eq!(normalizer.normalize("send 3 mth to dan"), "send 3 eth to dan");
    assert_eq!(normalizer.normalize("send 3 earth to dan"), "send 3 eth to dan");
}

#[test]
fn given_misheard_base_suffix_when_normalizing_then_suffix_is_repaired() {
    let normalizer = TextNormalizer::default();

    assert_eq!(
        normalizer.normalize("send 1 eth to erin.bass.eth"),
        "send 1 eth to erin.base.eth"
    );
    assert_eq!(
        normalizer.normalize("send 1 eth to erin.base eth"),
        "send 1 eth to erin.base.eth"
    );
    assert_eq!(normalizer.normalize("send 1 eth to erin.88"), "send 1 eth to erin.eth");
}

#[test]
fn given_base_name_when_normalizing_then_suffix_survives() {
    let normalizer = TextNormalizer::default();

    let result = normalizer.normalize("Send 0.88 ETH to frank.base.eth.");

    assert_eq!(result, "send 0.88 eth to frank.base.eth");
}

#[test]
fn given_normalized_text_when_normalizing_again_then_nothing_changes() {
    let normalizer = TextNormalizer::default();
    let inputs = [
        "Send 0.5.eth to bob dot base dot eth",
        "send 1 ethereum to erin.bays.eth",
        "hello world",
        "Send 0.001 eth to 0x742d35Cc6634C0532925a3b844Bc454e4438f44e.",
    ];

    for input in inputs {
        let once = normalizer.normalize(input);
        assert_eq!(normalizer.normalize(&once), once, "input: {}", input);
    }
}

#[test]
fn given_extra_rule_when_normalizing_then_applies_after_defaults() {
    let mut rules = default_correction_rules();
    rules.push(CorrectionRule::new(r"\bfredmitonga\b", "fredgitonga"));
    let normalizer = TextNormalizer::new(&rules).unwrap();

    let result = normalizer.normalize("send 1 eth to fredmitonga");

    assert_eq!(result, "send 1 eth to fredgitonga");
    assert_eq!(normalizer.rule_count(), DEFAULT_CORRECTIONS.len() + 1);
}

#[test]
fn given_ordered_rules_when_normalizing_then_earlier_rule_feeds_later_one() {
    let rules = vec![
        CorrectionRule::new("alpha", "beta"),
        CorrectionRule::new("beta", "gamma"),
    ];
    let normalizer = TextNormalizer::new(&rules).unwrap();

    assert_eq!(normalizer.normalize("alpha"), "gamma");
}

#[test]
fn given_invalid_regex_when_building_normalizer_then_returns_pattern_error() {
    let rules = vec![CorrectionRule::new("(unclosed", "x")];

    let result = TextNormalizer::new(&rules);

    assert!(matches!(result, Err(PatternError::InvalidRegex { .. })));
}
