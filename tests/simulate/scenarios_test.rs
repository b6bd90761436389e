/*!
 * Scenario Tests
 * Known timelines and metrics for every scheduling policy
 */

use cpu_sched_sim::{
    compare, simulate, Occupant, Policy, ProcessSpec, Report, Segment, SimEvent, SimParams,
};
use pretty_assertions::assert_eq;

fn spec(id: u32, arrival: i64, burst: i64) -> ProcessSpec {
    ProcessSpec::new(id, arrival, burst)
}

fn prio(id: u32, arrival: i64, burst: i64, priority: i32) -> ProcessSpec {
    ProcessSpec::new(id, arrival, burst).with_priority(priority)
}

fn run(specs: &[ProcessSpec], policy: Policy) -> Report {
    simulate(specs, policy, SimParams::default()).unwrap()
}

fn run_rr(specs: &[ProcessSpec], quantum: i64) -> Report {
    simulate(specs, Policy::RoundRobin, SimParams::with_quantum(quantum)).unwrap()
}

fn waits(report: &Report) -> Vec<(u32, u64)> {
    report.processes.iter().map(|p| (p.id, p.waiting)).collect()
}

fn classic_mix() -> Vec<ProcessSpec> {
    vec![spec(1, 0, 7), spec(2, 2, 4), spec(3, 4, 1), spec(4, 5, 4)]
}

#[test]
fn test_fcfs_scenario() {
    let report = run(
        &[
            ProcessSpec::named(1, "A", 0, 4),
            ProcessSpec::named(2, "B", 1, 3),
            ProcessSpec::named(3, "C", 2, 2),
        ],
        Policy::Fcfs,
    );

    assert_eq!(report.timeline_line(), "P1:0-4 P2:4-7 P3:7-9");
    assert_eq!(waits(&report), vec![(1, 0), (2, 3), (3, 5)]);
    let turnarounds: Vec<_> = report.processes.iter().map(|p| p.turnaround).collect();
    assert_eq!(turnarounds, vec![4, 6, 7]);
    assert_eq!(report.metrics.total_time, 9);
    assert_eq!(report.metrics.avg_waiting, 8.0 / 3.0);
}

#[test]
fn test_round_robin_scenario() {
    let report = run_rr(&[spec(1, 0, 4), spec(2, 0, 3)], 2);

    assert_eq!(report.timeline_line(), "P1:0-2 P2:2-4 P1:4-6 P2:6-7");
    assert_eq!(report.metrics.total_time, 7);
    assert_eq!(report.quantum.map(|q| q.ticks()), Some(2));
}

#[test]
fn test_round_robin_arrivals_queue_ahead_of_requeued() {
    let report = run_rr(&[spec(1, 0, 5), spec(2, 1, 3), spec(3, 3, 1)], 2);

    assert_eq!(
        report.timeline_line(),
        "P1:0-2 P2:2-4 P1:4-6 P3:6-7 P2:7-8 P1:8-9"
    );
    assert_eq!(report.metrics.total_time, 9);
}

#[test]
fn test_round_robin_idle_gap() {
    let report = run_rr(&[spec(1, 0, 1), spec(2, 4, 2)], 2);
    assert_eq!(report.timeline_line(), "P1:0-1 IDLE:1-4 P2:4-6");
    assert_eq!(report.metrics.idle_time, 3);
}

#[test]
fn test_round_robin_default_quantum() {
    let report = run(&[spec(1, 0, 5)], Policy::RoundRobin);
    assert_eq!(report.timeline_line(), "P1:0-2 P1:2-4 P1:4-5");
    assert_eq!(report.metrics.context_switches, 0);
}

#[test]
fn test_srtf_scenario() {
    let report = run(&[spec(1, 0, 5), spec(2, 2, 2)], Policy::Srtf);

    assert_eq!(report.timeline_line(), "P1:0-2 P2:2-4 P1:4-7");
    assert_eq!(report.metrics.total_time, 7);

    let a = report.process(1).unwrap();
    assert_eq!(a.turnaround, 7);
    assert_eq!(a.waiting, 2);
    assert_eq!(report.metrics.preemptions, 1);
}

#[test]
fn test_srtf_classic_mix() {
    let report = run(&classic_mix(), Policy::Srtf);

    assert_eq!(
        report.timeline_line(),
        "P1:0-2 P2:2-4 P3:4-5 P2:5-7 P4:7-11 P1:11-16"
    );
    assert_eq!(waits(&report), vec![(1, 9), (2, 1), (3, 0), (4, 2)]);
    assert_eq!(report.metrics.avg_waiting, 3.0);
}

#[test]
fn test_sjf_classic_mix() {
    let report = run(&classic_mix(), Policy::Sjf);

    assert_eq!(report.timeline_line(), "P1:0-7 P3:7-8 P2:8-12 P4:12-16");
    assert_eq!(waits(&report), vec![(1, 0), (2, 6), (3, 3), (4, 7)]);
    assert_eq!(report.metrics.avg_waiting, 4.0);
}

#[test]
fn test_idle_gap_scenario() {
    for policy in Policy::ALL {
        let report = run(&[ProcessSpec::named(1, "A", 5, 2)], policy);

        assert_eq!(
            report.timeline,
            vec![
                Segment::new(Occupant::Idle, 0, 5),
                Segment::new(Occupant::Process(1), 5, 7),
            ],
            "policy {}",
            policy
        );
        assert_eq!(report.processes[0].waiting, 0);
        assert_eq!(report.processes[0].turnaround, 2);
    }
}

#[test]
fn test_priority_tie_scenario() {
    let specs = [prio(1, 0, 3, 2), prio(2, 0, 3, 2)];
    for policy in [Policy::Priority, Policy::Focus, Policy::PriorityPreemptive] {
        let report = run(&specs, policy);
        assert_eq!(report.timeline_line(), "P1:0-3 P2:3-6", "policy {}", policy);
    }
}

#[test]
fn test_priority_registration_order_vs_focus_id_order() {
    let specs = [prio(2, 0, 3, 1), prio(1, 0, 2, 1), prio(3, 0, 1, 0)];

    let priority = run(&specs, Policy::Priority);
    assert_eq!(priority.timeline_line(), "P3:0-1 P2:1-4 P1:4-6");

    let focus = run(&specs, Policy::Focus);
    assert_eq!(focus.timeline_line(), "P3:0-1 P1:1-3 P2:3-6");
}

#[test]
fn test_priority_preemptive() {
    let report = run(
        &[prio(1, 0, 4, 3), prio(2, 1, 2, 1), prio(3, 2, 3, 2)],
        Policy::PriorityPreemptive,
    );

    assert_eq!(report.timeline_line(), "P1:0-1 P2:1-3 P3:3-6 P1:6-9");
    assert_eq!(waits(&report), vec![(1, 5), (2, 0), (3, 1)]);
    assert_eq!(report.process(1).unwrap().response, 0);
}

#[test]
fn test_focus_preemptive_vs_priority_preemptive() {
    let specs = [prio(1, 0, 5, 1), prio(2, 1, 2, 1), prio(3, 2, 1, 2)];

    let focus = run(&specs, Policy::FocusPreemptive);
    assert_eq!(focus.timeline_line(), "P1:0-1 P2:1-3 P1:3-7 P3:7-8");

    let priority = run(&specs, Policy::PriorityPreemptive);
    assert_eq!(priority.timeline_line(), "P1:0-5 P2:5-7 P3:7-8");
}

#[test]
fn test_focus_preemptive_full_tie_keeps_incumbent() {
    // At t=1 both processes have priority 1 and 3 ticks remaining
    let specs = [prio(1, 0, 4, 1), prio(2, 1, 3, 1)];
    let report = run(&specs, Policy::FocusPreemptive);

    assert_eq!(report.timeline_line(), "P1:0-4 P2:4-7");
    assert_eq!(report.metrics.preemptions, 0);
    assert_eq!(report.metrics.context_switches, 1);
    assert!(report
        .events
        .iter()
        .all(|e| !matches!(e, SimEvent::Preempted { .. })));
}

#[test]
fn test_event_stream() {
    let report = run(&[spec(1, 0, 5), spec(2, 2, 2)], Policy::Srtf);

    assert_eq!(
        report.events,
        vec![
            SimEvent::Dispatched { pid: 1, at: 0, remaining: 5 },
            SimEvent::Preempted { pid: 1, at: 2, remaining: 3 },
            SimEvent::Dispatched { pid: 2, at: 2, remaining: 2 },
            SimEvent::Completed { pid: 2, at: 4 },
            SimEvent::Dispatched { pid: 1, at: 4, remaining: 3 },
            SimEvent::Completed { pid: 1, at: 7 },
        ]
    );
}

#[test]
fn test_input_is_not_mutated() {
    let specs = classic_mix();
    let before = specs.clone();

    let first = run(&specs, Policy::Srtf);
    let second = run(&specs, Policy::Srtf);

    assert_eq!(specs, before);
    assert_eq!(first, second);
}

#[test]
fn test_deterministic_serialization() {
    let specs = classic_mix();
    for policy in Policy::ALL {
        let a = serde_json::to_string(&run(&specs, policy)).unwrap();
        let b = serde_json::to_string(&run(&specs, policy)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_compare_runs_every_policy() {
    let specs = classic_mix();
    let reports = compare(&specs, SimParams::with_quantum(3)).unwrap();

    let policies: Vec<_> = reports.iter().map(|r| r.policy).collect();
    assert_eq!(policies, Policy::ALL.to_vec());

    for report in &reports {
        assert_eq!(report, &simulate(&specs, report.policy, SimParams::with_quantum(3)).unwrap());
        assert_eq!(report.metrics.total_time, 16);
    }
}

#[test]
fn test_report_json_shape() {
    let report = run(&[spec(1, 2, 1)], Policy::Fcfs);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["policy"], "fcfs");
    assert_eq!(json["timeline"][0]["occupant"], "IDLE");
    assert_eq!(json["timeline"][1]["occupant"], 1);
    assert_eq!(json["events"][0]["event"], "idle");
    assert!(json.get("quantum").is_none());
}
