//! End-to-end tests: CSV in, ranking report out

use std::fs;

use popu_ranking::{
    Generation, GenerationRanking, InvalidValuePolicy, RankingConfig, RankingError, run,
};

use crate::utils::{full_census, to_csv, total_row};

fn config_in(dir: &std::path::Path) -> RankingConfig {
    RankingConfig {
        source_path: dir.join("popu_source.csv"),
        output_path: dir.join("popu_ranking.txt"),
        ..RankingConfig::default()
    }
}

#[test]
fn test_default_config() {
    let config = RankingConfig::default();
    assert_eq!(config.source_path.to_str(), Some("popu_source.csv"));
    assert_eq!(config.output_path.to_str(), Some("popu_ranking.txt"));
    assert!(config.has_headers);
    assert_eq!(config.population_unit, 1000);
    assert_eq!(config.invalid_population, InvalidValuePolicy::FailFast);
    assert!(config.atomic_write);
    assert!(config.to_string().contains("popu_source.csv"));
}

#[test]
fn test_two_row_scenario() {
    let records = vec![total_row("0歳", "894"), total_row("100歳以上", "69")];

    let ranking = GenerationRanking::from_records(&records, &RankingConfig::default()).unwrap();

    assert_eq!(ranking.render(), "1位: 10歳未満 894000\n2位: 100歳以上 69000\n");
    assert_eq!(ranking.stats().rows_selected, 2);
    assert_eq!(ranking.stats().total_population, 963_000);
}

#[test]
fn test_full_census_has_eleven_generations() {
    let records = full_census();

    let ranking = GenerationRanking::from_records(&records, &RankingConfig::default()).unwrap();

    let stats = ranking.stats();
    assert_eq!(stats.records_read, 104);
    assert_eq!(stats.rows_selected, 101);
    assert_eq!(stats.generation_count, 11);
    // Ten decades of a million people tie; the stable sort keeps them
    // youngest first, and the 100+ bucket trails with 69 000
    let order: Vec<Generation> = ranking.entries().iter().map(|e| e.generation).collect();
    assert_eq!(order, Generation::all().to_vec());
    assert!(ranking.entries()[..10].iter().all(|e| e.population == 1_000_000));
    assert_eq!(ranking.entries()[10].population, 69_000);
}

#[test]
fn test_run_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let records = vec![
        total_row("総数", "126167"),
        total_row("45歳", "1900"),
        total_row("0歳", "894"),
        total_row("100歳以上", "69"),
        total_row("52歳", "1700"),
    ];
    fs::write(&config.source_path, to_csv(&records)).unwrap();

    let ranking = run(&config).unwrap();

    let report = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(
        report,
        "1位: 40代 1900000\n2位: 50代 1700000\n3位: 10歳未満 894000\n4位: 100歳以上 69000\n"
    );
    assert_eq!(report, ranking.render());
    assert!(!dir.path().join("popu_ranking.txt.tmp").exists());
}

#[test]
fn test_run_overwrites_previous_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = RankingConfig {
        atomic_write: false,
        ..config_in(dir.path())
    };
    fs::write(&config.output_path, "stale\nstale\nstale\n").unwrap();
    fs::write(&config.source_path, to_csv(&[total_row("20歳", "1")])).unwrap();

    run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "1位: 20代 1000\n"
    );
}

#[test]
fn test_failed_run_leaves_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let records = vec![total_row("0歳", "894"), total_row("1歳", "x")];
    fs::write(&config.source_path, to_csv(&records)).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, RankingError::InvalidPopulation { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_skip_policy_ranks_remaining_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = RankingConfig {
        invalid_population: InvalidValuePolicy::SkipAndWarn,
        ..config_in(dir.path())
    };
    let records = vec![total_row("0歳", "894"), total_row("1歳", "x")];
    fs::write(&config.source_path, to_csv(&records)).unwrap();

    let ranking = run(&config).unwrap();

    assert_eq!(ranking.stats().rows_skipped, 1);
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "1位: 10歳未満 894000\n"
    );
}

#[test]
fn test_unknown_age_label_aborts() {
    let records = vec![total_row("不詳", "12")];

    let err = GenerationRanking::from_records(&records, &RankingConfig::default()).unwrap_err();

    assert!(matches!(err, RankingError::UnknownAgeLabel(label) if label == "不詳"));
}

#[test]
fn test_grand_total_overflow_is_reported() {
    // Each generation fits in u64 on its own, their sum does not
    let records = vec![
        total_row("0歳", "10000000000000000"),
        total_row("20歳", "10000000000000000"),
    ];

    let err = GenerationRanking::from_records(&records, &RankingConfig::default()).unwrap_err();

    assert!(matches!(err, RankingError::Overflow(label) if label == "all generations"));
}

#[test]
fn test_failed_rename_removes_temporary_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::create_dir(&config.output_path).unwrap();
    fs::write(config.output_path.join("keep.txt"), "occupied").unwrap();
    fs::write(&config.source_path, to_csv(&[total_row("0歳", "894")])).unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, RankingError::Io { .. }));
    assert!(!dir.path().join("popu_ranking.txt.tmp").exists());
    assert!(config.output_path.join("keep.txt").exists());
}

#[test]
fn test_malformed_csv_aborts_without_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::write(&config.source_path, b"h\n\xff\xfe,x\n").unwrap();

    let err = run(&config).unwrap_err();

    assert!(matches!(err, RankingError::Csv(_)));
    assert!(!config.output_path.exists());
    assert!(!dir.path().join("popu_ranking.txt.tmp").exists());
}
