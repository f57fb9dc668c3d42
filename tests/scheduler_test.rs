/*!
 * Scheduler Metric Tests
 * End-to-end scenarios for every policy, checked against known averages
 */

use pretty_assertions::assert_eq;
use sched_sim::{Policy, Process, Scheduler};

/// P1..P5 with mixed arrivals and priorities; total execution time 14
fn case_1() -> Vec<Process> {
    vec![
        Process::new("P1", 5, 2, 0).unwrap(),
        Process::new("P2", 2, 3, 0).unwrap(),
        Process::new("P3", 4, 1, 1).unwrap(),
        Process::new("P4", 1, 4, 3).unwrap(),
        Process::new("P5", 2, 5, 5).unwrap(),
    ]
}

/// Two simultaneous arrivals mid-run; total execution time 17
fn case_2() -> Vec<Process> {
    vec![
        Process::new("P1", 5, 3, 0).unwrap(),
        Process::new("P2", 4, 2, 2).unwrap(),
        Process::new("P3", 3, 1, 2).unwrap(),
        Process::new("P4", 4, 4, 4).unwrap(),
        Process::new("P5", 1, 5, 4).unwrap(),
    ]
}

/// Staggered arrivals; total execution time 16
fn case_3() -> Vec<Process> {
    vec![
        Process::new("P1", 5, 1, 0).unwrap(),
        Process::new("P2", 2, 1, 1).unwrap(),
        Process::new("P3", 4, 3, 2).unwrap(),
        Process::new("P4", 3, 5, 3).unwrap(),
        Process::new("P5", 2, 4, 5).unwrap(),
    ]
}

fn assert_metrics(
    policy: Policy,
    processes: Vec<Process>,
    expected_wait: f64,
    expected_turnaround: f64,
    expected_total: u32,
) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut scheduler = Scheduler::new(policy, processes).unwrap();

    assert_eq!(scheduler.total_execution_time(), expected_total);
    assert_eq!(scheduler.average_wait_time().unwrap(), expected_wait);
    assert_eq!(
        scheduler.average_turnaround_time().unwrap(),
        expected_turnaround
    );
}

#[test]
fn test_first_come_first_serve_metrics() {
    let policy = Policy::FirstComeFirstServe;

    assert_metrics(policy, case_1(), 5.2, 8.0, 14);
    assert_metrics(policy, case_2(), 6.0, 9.4, 17);
    assert_metrics(policy, case_3(), 5.2, 8.4, 16);
}

#[test]
fn test_shortest_job_first_metrics() {
    let policy = Policy::ShortestJobFirst;

    assert_metrics(policy, case_1(), 3.0, 5.8, 14);
    assert_metrics(policy, case_2(), 4.2, 7.6, 17);
    assert_metrics(policy, case_3(), 4.4, 7.6, 16);
}

#[test]
fn test_shortest_remaining_time_first_metrics() {
    let policy = Policy::ShortestRemainingTimeFirst;

    assert_metrics(policy, case_1(), 2.6, 5.4, 14);
    assert_metrics(policy, case_2(), 4.2, 7.6, 17);
    assert_metrics(policy, case_3(), 3.6, 6.8, 16);
}

#[test]
fn test_round_robin_metrics() {
    let policy = Policy::round_robin_default();

    assert_metrics(policy, case_1(), 5.6, 8.4, 14);
    assert_metrics(policy, case_2(), 8.2, 11.6, 17);
    assert_metrics(policy, case_3(), 6.8, 10.0, 16);
}

#[test]
fn test_priority_cooperative_metrics() {
    let policy = Policy::priority_cooperative_default();

    assert_metrics(policy, case_1(), 3.8, 6.6, 14);
    assert_metrics(policy, case_2(), 4.6, 8.0, 17);
    assert_metrics(policy, case_3(), 5.2, 8.4, 16);
}

#[test]
fn test_priority_preemptive_metrics() {
    let policy = Policy::priority_preemptive_default();

    assert_metrics(policy, case_1(), 2.8, 5.6, 14);
    assert_metrics(policy, case_2(), 5.2, 8.6, 17);
    assert_metrics(policy, case_3(), 5.4, 8.6, 16);
}

#[test]
fn test_sjf_beats_fcfs_on_wait_time() {
    let mut fcfs = Scheduler::new(Policy::FirstComeFirstServe, case_1()).unwrap();
    let mut sjf = Scheduler::new(Policy::ShortestJobFirst, case_1()).unwrap();

    assert!(sjf.average_wait_time().unwrap() <= fcfs.average_wait_time().unwrap());
}
