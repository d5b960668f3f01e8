use rulegen::{run_pipeline, PipelineConfig, WordListSpeller};

pub fn main() {
    env_logger::init();

    let mut speller = WordListSpeller::new();
    speller.insert("California", vec!["california".to_string()]);
    speller.insert("password1", vec!["password".to_string()]);
    speller.insert("ralse", vec!["rules".to_string()]);

    let passwords = vec![
        "California".to_string(),
        "password1".to_string(),
        "ralse".to_string(),
    ];

    let reports = run_pipeline(&passwords, &speller, &PipelineConfig::default());

    for report in reports {
        if !report.reversible {
            println!("{}: skipped, unlikely to be reversible", report.password);
            continue;
        }
        for candidate in report.candidates {
            println!(
                "{} <- {} (distance {})",
                report.password, candidate.candidate.source_word, candidate.candidate.distance
            );
            for rule in candidate.rules {
                println!("  {}", rule.rendered);
            }
        }
    }
}
