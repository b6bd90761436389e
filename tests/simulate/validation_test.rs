/*!
 * Validation Tests
 * Invalid input is rejected before any run starts
 */

use cpu_sched_sim::{simulate, simulate_named, Policy, ProcessSpec, SimError, SimParams};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_process_set() {
    for policy in Policy::ALL {
        assert_eq!(
            simulate(&[], policy, SimParams::default()),
            Err(SimError::EmptyWorkload)
        );
    }
}

#[test]
fn test_non_positive_burst() {
    let specs = [ProcessSpec::new(1, 0, 3), ProcessSpec::new(2, 1, 0)];
    assert_eq!(
        simulate(&specs, Policy::Fcfs, SimParams::default()),
        Err(SimError::InvalidBurst { pid: 2, burst: 0 })
    );

    let specs = [ProcessSpec::new(1, 0, -2)];
    assert!(simulate(&specs, Policy::Srtf, SimParams::default()).is_err());
}

#[test]
fn test_negative_arrival() {
    let specs = [ProcessSpec::new(4, -1, 3)];
    let err = simulate(&specs, Policy::Sjf, SimParams::default()).unwrap_err();
    assert_eq!(err, SimError::NegativeArrival { pid: 4, arrival: -1 });
    assert!(err.is_invalid_input());
}

#[test]
fn test_round_robin_quantum() {
    let specs = [ProcessSpec::new(1, 0, 3)];

    for quantum in [0, -1] {
        assert_eq!(
            simulate(&specs, Policy::RoundRobin, SimParams::with_quantum(quantum)),
            Err(SimError::InvalidQuantum(quantum))
        );
    }

    // Only round-robin consumes the quantum
    assert!(simulate(&specs, Policy::Fcfs, SimParams::with_quantum(0)).is_ok());
}

#[test]
fn test_unknown_policy() {
    let specs = [ProcessSpec::new(1, 0, 3)];
    assert_eq!(
        simulate_named(&specs, "lottery", SimParams::default()),
        Err(SimError::UnknownPolicy("lottery".into()))
    );
    assert!(simulate_named(&specs, "sjf_preemptive", SimParams::default()).is_ok());
}

#[test]
fn test_duplicate_ids() {
    let specs = [ProcessSpec::new(1, 0, 3), ProcessSpec::new(1, 2, 1)];
    assert_eq!(
        simulate(&specs, Policy::Fcfs, SimParams::default()),
        Err(SimError::DuplicatePid(1))
    );
}

#[test]
fn test_workload_json_is_not_coerced() {
    let parsed = serde_json::from_str::<Vec<ProcessSpec>>(r#"[{"id": 1, "arrival": "0", "burst": 2}]"#);
    assert!(parsed.is_err());
}

#[test]
fn test_schedule_end_must_fit_the_clock() {
    let specs = [
        ProcessSpec::new(1, 0, i64::MAX),
        ProcessSpec::new(2, 0, i64::MAX),
        ProcessSpec::new(3, 0, 2),
    ];
    for policy in Policy::ALL {
        assert_eq!(
            simulate(&specs, policy, SimParams::default()),
            Err(SimError::HorizonOverflow { pid: 3 })
        );
    }

    // Large but representable horizons still run to completion
    let specs = [ProcessSpec::new(1, 0, i64::MAX), ProcessSpec::new(2, 0, 2)];
    let report = simulate(&specs, Policy::Fcfs, SimParams::default()).unwrap();
    assert_eq!(report.metrics.total_time, i64::MAX as u64 + 2);
    assert_eq!(report.process(2).unwrap().waiting, i64::MAX as u64);
}
