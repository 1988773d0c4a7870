//! Integration tests for the full console run.

use oddstop_cli::config::DemoConfig;
use oddstop_generator::application::driver::StopReason;
use oddstop_test_support::{FixedRng, SequenceRng};

fn lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_forced_four_four_four_seven_scenario() {
    let mut out = Vec::new();

    let report =
        oddstop_cli::run_with_source(SequenceRng::new(vec![4, 4, 4, 7]), &mut out).unwrap();

    let lines = lines(&out);
    assert_eq!(
        lines,
        vec![
            "Demo: Random number generator [1..256]",
            "The coroutine stops when an odd number is generated.",
            "",
            "Generated: 4",
            "Generated: 4",
            "Generated: 4",
            "Generated: 7",
            "",
            "Odd number detected → Coroutine stopped by controller.",
            "",
            "Queue contents:",
            "4 4 4 7 ",
        ]
    );
    assert_eq!(report.drained, vec![4, 4, 4, 7]);
}

#[test]
fn test_forced_three_scenario() {
    let mut out = Vec::new();

    let report = oddstop_cli::run_with_source(FixedRng(3), &mut out).unwrap();

    let lines = lines(&out);
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("Generated:")).count(),
        1
    );
    assert!(lines.contains(&"Generated: 3".to_owned()));
    assert!(lines.contains(&"Odd number detected → Coroutine stopped by controller.".to_owned()));
    assert_eq!(lines.last().map(String::as_str), Some("3 "));
    assert_eq!(report.stop, StopReason::StoppedByController(3));
}

#[test]
fn test_same_seed_reproduces_output_and_queue() {
    let config = DemoConfig { seed: Some(2026) };
    let mut first = Vec::new();
    let mut second = Vec::new();

    let first_report = oddstop_cli::run(&config, &mut first).unwrap();
    let second_report = oddstop_cli::run(&config, &mut second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn test_os_seeded_runs_satisfy_range_parity_and_fifo() {
    for _ in 0..100 {
        let mut out = Vec::new();

        let report = oddstop_cli::run(&DemoConfig::default(), &mut out).unwrap();

        let (last, head) = report.produced.split_last().unwrap();
        assert_eq!(last % 2, 1);
        assert!(head.iter().all(|v| v % 2 == 0));
        assert!(report.produced.iter().all(|v| (1..=256).contains(v)));
        assert_eq!(report.drained, report.produced);
        assert_eq!(report.stop, StopReason::StoppedByController(*last));

        let expected_queue: String = report.produced.iter().map(|v| format!("{v} ")).collect();
        assert_eq!(lines(&out).last(), Some(&expected_queue));
    }
}

#[test]
fn test_invalid_seed_value_still_runs_to_completion() {
    let config = DemoConfig::from_seed_var(Some("x"));
    let mut out = Vec::new();

    let report = oddstop_cli::run(&config, &mut out).unwrap();

    assert_eq!(config.seed, None);
    assert!(matches!(report.stop, StopReason::StoppedByController(_)));
    assert_eq!(report.drained, report.produced);
    let lines = lines(&out);
    assert_eq!(lines[0], "Demo: Random number generator [1..256]");
    assert!(lines.contains(&"Queue contents:".to_owned()));
}
