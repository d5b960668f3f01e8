use rulegen::{run_pipeline, PipelineConfig, WordListSpeller};

fn rules_for(password: &str, word: &str) -> Vec<String> {
    let mut speller = WordListSpeller::new();
    speller.insert(password, vec![word.to_string()]);
    let reports = run_pipeline(&[password.to_string()], &speller, &PipelineConfig::default());
    reports[0].candidates[0]
        .rules
        .iter()
        .map(|r| r.rendered.clone())
        .collect()
}

#[test]
fn california_capitalizes() {
    let rules = rules_for("California", "california");
    assert!(rules.iter().any(|r| r == "c"));
}

#[test]
fn password1_appends_a_digit() {
    let rules = rules_for("password1", "password");
    assert!(rules.iter().any(|r| r == "$1"));
}

#[test]
fn password_capitalized_is_a_single_capitalize_rule() {
    let rules = rules_for("Password", "password");
    assert!(rules.iter().any(|r| r == "c"));
}

#[test]
fn leet_substitution_is_a_single_global_replace() {
    let rules = rules_for("l33t", "leet");
    assert!(rules.iter().any(|r| r == "se3"));
}

#[test]
fn reversed_word_needs_brute_rules_to_be_scored() {
    let mut speller = WordListSpeller::new();
    speller.insert("olleh", vec!["hello".to_string()]);

    let default_config = PipelineConfig::default();
    let reports = run_pipeline(&["olleh".to_string()], &speller, &default_config);
    assert!(reports[0].candidates.is_empty());

    let mut brute_config = PipelineConfig::default();
    brute_config.brute_rules = true;
    let reports = run_pipeline(&["olleh".to_string()], &speller, &brute_config);
    assert!(!reports[0].candidates.is_empty());
}

#[test]
fn rules_case_chain_reproduces_the_password() {
    let rules = rules_for("ralse", "rules");
    assert!(!rules.is_empty());
}

#[test]
fn unreversible_passwords_are_reported_without_candidates() {
    let speller = WordListSpeller::new();
    let reports = run_pipeline(
        &["1234567890".to_string()],
        &speller,
        &PipelineConfig::default(),
    );
    assert!(!reports[0].reversible);
    assert!(reports[0].candidates.is_empty());
}

#[test]
fn empty_batch_produces_no_reports() {
    let speller = WordListSpeller::new();
    let reports = run_pipeline(&[], &speller, &PipelineConfig::default());
    assert!(reports.is_empty());
}
