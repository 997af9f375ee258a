mod common;

use common::{answers_csv, questions_csv, Fixture};
use indoc::indoc;
use pretty_assertions::assert_eq;
use qstats::commands::{run_report, run_summary, ReportConfig};
use qstats::formatting::FormattingConfig;
use qstats::{
    category_total, read_statistics, Category, Dataset, DatasetStatistics, StatValue, StatsError,
};

fn plain_config(fixture: &Fixture) -> ReportConfig {
    ReportConfig {
        paths: fixture.paths(),
        formatting: FormattingConfig::plain(),
    }
}

#[test]
fn test_scenario_output_file() {
    let fixture = Fixture::scenario();

    run_report(&plain_config(&fixture), Vec::new()).unwrap();

    assert_eq!(
        fixture.read_output(),
        indoc! {"
            Metric,Value,Category
            Total Questions,2,Basic Counts
            Total Answer Options,3,Basic Counts
            Average Answers per Question,1.50,Basic Counts
            Questions with 1 answers,1,Answer Distribution
            Questions with 2 answers,1,Answer Distribution
            Published: True,1,Published Status
            Published: False,1,Published Status
            Deleted: False,1,Deleted Status
            Deleted: True,1,Deleted Status
            Language: en,2,Language
            Type: single,1,Question Type
            Type: multi,1,Question Type
            Difficulty: easy,1,Difficulty
            Difficulty: hard,1,Difficulty
            Has Previous Version: False,1,Version Status
            Has Previous Version: True,1,Version Status
        "}
    );
}

#[test]
fn test_console_report_mentions_export() {
    let fixture = Fixture::scenario();

    let mut console = Vec::new();
    run_report(&plain_config(&fixture), &mut console).unwrap();
    let console = String::from_utf8(console).unwrap();

    assert!(console.contains("Total questions: 2"));
    assert!(console.contains("Total answer options: 3"));
    assert!(console.contains("Average answers per question: 1.50"));
    assert!(console.contains("Bulk-deleted questions: 0"));
    assert!(console.contains(&format!(
        "Statistics exported to {}",
        fixture.output_path().display()
    )));
}

#[test]
fn test_average_of_two_three_four_answers() {
    let fixture = Fixture::new(
        &questions_csv(&[("en", ""), ("en", ""), ("de", "")]),
        &answers_csv(&[("1", 2), ("2", 3), ("3", 4)]),
    );

    let entries = run_report(&plain_config(&fixture), Vec::new()).unwrap();

    let average = entries
        .iter()
        .find(|e| e.metric == "Average Answers per Question")
        .unwrap();
    assert_eq!(average.value, StatValue::Text("3.00".into()));
    assert_eq!(category_total(&entries, Category::AnswerDistribution), 3);
}

#[test]
fn test_question_dimensions_sum_to_total() {
    let fixture = Fixture::new(
        &questions_csv(&[("en", ""), ("de", "x"), ("", ""), ("en", "y"), ("fr", "")]),
        &answers_csv(&[("1", 1)]),
    );

    let entries = run_report(&plain_config(&fixture), Vec::new()).unwrap();

    for category in [
        Category::PublishedStatus,
        Category::DeletedStatus,
        Category::Language,
        Category::QuestionType,
        Category::Difficulty,
        Category::VersionStatus,
    ] {
        assert_eq!(category_total(&entries, category), 5, "{category}");
    }
    assert!(entries.iter().any(|e| e.metric == "Language: nan"));
}

#[test]
fn test_reloaded_deleted_status_matches_direct_computation() {
    let fixture = Fixture::new(
        &questions_csv(&[("en", ""), ("en", "2024-01-01"), ("en", "2024-01-01"), ("de", "")]),
        &answers_csv(&[("1", 2)]),
    );

    run_report(&plain_config(&fixture), Vec::new()).unwrap();
    let reloaded = read_statistics(&fixture.output_path()).unwrap();

    let paths = fixture.paths();
    let dataset = Dataset::load(&paths.answers, &paths.questions).unwrap();
    let stats = DatasetStatistics::compute(&dataset);

    let count_of = |metric: &str| {
        reloaded
            .iter()
            .find(|e| e.category == Category::DeletedStatus && e.metric == metric)
            .and_then(|e| e.value.as_count())
    };
    assert_eq!(count_of("Deleted: True"), Some(stats.deleted.count_of(&"True".to_string())));
    assert_eq!(count_of("Deleted: False"), Some(stats.deleted.count_of(&"False".to_string())));
    assert_eq!(category_total(&reloaded, Category::DeletedStatus), 4);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let fixture = Fixture::new(
        &questions_csv(&[("en", ""), ("de", ""), ("fr", ""), ("de", "z")]),
        &answers_csv(&[("1", 3), ("2", 3), ("4", 1)]),
    );

    run_report(&plain_config(&fixture), Vec::new()).unwrap();
    let first = std::fs::read(fixture.output_path()).unwrap();
    run_report(&plain_config(&fixture), Vec::new()).unwrap();
    let second = std::fs::read(fixture.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_is_overwritten() {
    let fixture = Fixture::scenario();
    std::fs::write(fixture.output_path(), "stale contents that are much longer than needed\n".repeat(100))
        .unwrap();

    run_report(&plain_config(&fixture), Vec::new()).unwrap();

    assert!(fixture.read_output().starts_with("Metric,Value,Category\n"));
    assert!(!fixture.read_output().contains("stale"));
}

#[test]
fn test_missing_column_fails_without_output() {
    let fixture = Fixture::new("ID,IsPublished\n1,true\n", &answers_csv(&[("1", 1)]));

    let err = run_report(&plain_config(&fixture), Vec::new()).unwrap_err();

    let cause = err.downcast_ref::<StatsError>().unwrap();
    assert!(matches!(cause, StatsError::MissingColumn { column, .. } if column == "Deleted"));
    assert!(!fixture.output_path().exists());
}

#[test]
fn test_summary_json() {
    let fixture = Fixture::new(
        &questions_csv(&[("en", "2024-03-03"), ("en", "2024-03-03"), ("en", "2024-04-04")]),
        &answers_csv(&[("1", 2)]),
    );
    let paths = fixture.paths();

    let mut out = Vec::new();
    let summary = run_summary(&paths.answers, &paths.questions, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(summary.bulk_deletes, 2);
    assert_eq!(json["totalQuestions"], 3);
    assert_eq!(json["deletedQuestions"], 3);
    assert_eq!(json["bulkDeletes"], 2);
    assert_eq!(json["publishedQuestions"], 3);
    assert_eq!(json["totalAnswers"], 2);
}
