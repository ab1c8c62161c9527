use clap::Parser;
use lungscan_insight::cli::{Cli, Commands, parse_gender};
use lungscan_insight::scores::Gender;

#[test]
fn run_defaults() {
    let cli = Cli::parse_from([
        "lungscan-insight",
        "run",
        "--image",
        "scan.ppm",
        "--out",
        "out",
        "--age",
        "52",
    ]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.clinical.gender, Gender::Female);
            assert!(!args.json);
            assert!(!args.no_highlight);
            assert!(!args.simulate_latency);
            assert_eq!(args.seed, None);
            let record = args.clinical.to_record();
            assert_eq!(record.age, 52);
            assert!(!record.smoking_history);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn clinical_flags_map_to_record() {
    let cli = Cli::parse_from([
        "lungscan-insight",
        "validate",
        "--image",
        "scan.ppm",
        "--age",
        "70",
        "--gender",
        "male",
        "--smoking",
        "--cough",
        "--breathless",
        "--chest-pain",
    ]);
    match cli.command {
        Commands::Validate(args) => {
            let record = args.clinical.to_record();
            assert_eq!(record.gender, Gender::Male);
            assert!(record.smoking_history);
            assert!(record.chronic_cough);
            assert!(record.shortness_of_breath);
            assert!(record.chest_pain);
        }
        _ => panic!("expected validate command"),
    }
}

#[test]
fn age_is_required() {
    let res = Cli::try_parse_from(["lungscan-insight", "run", "--image", "a.ppm", "--out", "o"]);
    assert!(res.is_err());
}

#[test]
fn gender_accepts_form_flags() {
    let cli = Cli::parse_from([
        "lungscan-insight",
        "validate",
        "--image",
        "scan.ppm",
        "--age",
        "40",
        "--gender",
        "1",
    ]);
    match cli.command {
        Commands::Validate(args) => assert_eq!(args.clinical.to_record().gender, Gender::Male),
        _ => panic!("expected validate command"),
    }

    assert_eq!(parse_gender("0"), Ok(Gender::Female));
    assert_eq!(parse_gender("Male"), Ok(Gender::Male));
    assert!(parse_gender("2").is_err());
    assert!(parse_gender("other").is_err());
}

#[test]
fn bad_gender_flag_is_rejected() {
    let res = Cli::try_parse_from([
        "lungscan-insight",
        "validate",
        "--image",
        "scan.ppm",
        "--age",
        "40",
        "--gender",
        "2",
    ]);
    assert!(res.is_err());
}
