/*!
 * Property Tests
 * Timeline and metric invariants that hold for every policy and workload
 */

use cpu_sched_sim::timeline::is_contiguous;
use cpu_sched_sim::{simulate, Policy, ProcessSpec, Report, SimParams};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec((0i64..20, 1i64..8, 0i32..4), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(i as u32 + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    })
}

fn check_invariants(specs: &[ProcessSpec], report: &Report) {
    let policy = report.policy;

    // Contiguous from zero, no overlaps, totals agree
    assert!(is_contiguous(&report.timeline), "{}: timeline not contiguous", policy);
    let last_end = report.timeline.last().map(|s| s.end).unwrap_or(0);
    assert_eq!(report.metrics.total_time, last_end);
    let total: u64 = report.timeline.iter().map(|s| s.duration()).sum();
    assert_eq!(total, report.metrics.total_time);

    assert_eq!(report.processes.len(), specs.len());
    let last_completion = report.processes.iter().map(|p| p.completion).max();
    assert_eq!(last_completion, Some(report.metrics.total_time));

    for (spec, result) in specs.iter().zip(&report.processes) {
        assert_eq!(result.id, spec.id);
        assert_eq!(result.turnaround, result.waiting + result.burst);
        assert_eq!(result.turnaround, result.completion - result.arrival);
        assert_eq!(report.time_for(spec.id), spec.burst as u64, "{}: P{}", policy, spec.id);
        assert!(result.response <= result.waiting);

        // Nothing runs before it arrives
        assert!(report
            .segments_for(spec.id)
            .all(|s| s.start >= result.arrival));
    }

    // The processor only idles when nothing unfinished has arrived
    for idle in report.timeline.iter().filter(|s| s.occupant.is_idle()) {
        for p in &report.processes {
            assert!(
                p.arrival >= idle.end || p.completion <= idle.start,
                "{}: idle {} while P{} was ready",
                policy,
                idle,
                p.id
            );
        }
    }

    // Run-to-completion policies never split a burst
    if !policy.is_preemptive() {
        for p in &report.processes {
            assert_eq!(report.segments_for(p.id).count(), 1);
            assert_eq!(p.waiting, p.response);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_policy_upholds_invariants(specs in workload(), quantum in 1i64..5) {
        for policy in Policy::ALL {
            let params = SimParams::with_quantum(quantum);
            let report = simulate(&specs, policy, params).unwrap();
            check_invariants(&specs, &report);

            let again = simulate(&specs, policy, params).unwrap();
            prop_assert_eq!(&report, &again);
        }
    }

    #[test]
    fn prop_work_conserving_policies_share_makespan(specs in workload()) {
        let baseline = simulate(&specs, Policy::Fcfs, SimParams::default()).unwrap();
        for policy in Policy::ALL {
            let report = simulate(&specs, policy, SimParams::default()).unwrap();
            prop_assert_eq!(report.metrics.total_time, baseline.metrics.total_time);
            prop_assert_eq!(report.metrics.idle_time, baseline.metrics.idle_time);
        }
    }
}
