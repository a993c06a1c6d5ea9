use job_insights::{
    filter_by_salary_range, matches_salary_range, salary_range, InsightsError, Record,
};

fn job(min: i64, max: i64) -> Record {
    Record::new()
        .with("min_salary", min)
        .with("max_salary", max)
}

#[test]
fn test_matches_exactly_the_closed_interval() {
    let bounds = [(0, 0), (10, 20), (40_000, 60_000), (-5, 5)];
    for (min, max) in bounds {
        let record = job(min, max);
        for salary in (min - 3)..=(max + 3) {
            let expected = min <= salary && salary <= max;
            assert_eq!(
                matches_salary_range(&record, salary).unwrap(),
                expected,
                "salary {} against [{}, {}]",
                salary,
                min,
                max
            );
        }
    }
}

#[test]
fn test_each_validation_failure_is_distinct() {
    let missing = Record::new().with("max_salary", 10);
    assert!(matches!(
        matches_salary_range(&missing, 5),
        Err(InsightsError::MissingField { .. })
    ));

    let text_bound = Record::new()
        .with("min_salary", 1)
        .with("max_salary", "10");
    assert!(matches!(
        matches_salary_range(&text_bound, 5),
        Err(InsightsError::InvalidType { .. })
    ));

    assert!(matches!(
        matches_salary_range(&job(10, 1), 5),
        Err(InsightsError::InvalidRange { min: 10, max: 1 })
    ));

    assert!(matches!(
        matches_salary_range(&job(1, 10), "5"),
        Err(InsightsError::InvalidType { .. })
    ));
}

#[test]
fn test_salary_range_exposes_validated_bounds() {
    let range = salary_range(&job(100, 200)).unwrap();
    assert_eq!(range.min(), 100);
    assert_eq!(range.max(), 200);
    assert!(salary_range(&job(200, 100)).is_err());
}

#[test]
fn test_filter_example_scenario() {
    let jobs = vec![job(40_000, 60_000), job(70_000, 90_000)];
    assert_eq!(filter_by_salary_range(&jobs, 50_000), vec![&jobs[0]]);
}

#[test]
fn test_filter_mixed_validity_never_errors() {
    let jobs = vec![
        job(0, 10),
        Record::new(),
        Record::new().with("min_salary", "0").with("max_salary", "10"),
        job(10, 0),
        Record::new().with("min_salary", 5).with("max_salary", 5),
        job(3, 8).with("job_type", "FULL_TIME"),
        Record::new().with("max_salary", 10),
    ];

    let result = filter_by_salary_range(&jobs, 5);
    assert_eq!(result, vec![&jobs[0], &jobs[4], &jobs[5]]);

    let expected: Vec<&Record> = jobs
        .iter()
        .filter(|j| matches!(matches_salary_range(j, 5), Ok(true)))
        .collect();
    assert_eq!(result, expected);
}
