use sortviz_core::{Algorithm, Color, Dataset, StepResult};
use sortviz_test_fixtures::traces::{self, Trace};

fn algorithm_of(trace: &Trace) -> Algorithm {
    match trace.algorithm.as_str() {
        "bubble" => Algorithm::Bubble,
        "insertion" => Algorithm::Insertion,
        "quick" => Algorithm::Quick,
        other => panic!("unknown algorithm '{other}' in trace {}", trace.name),
    }
}

fn color_of(name: &str) -> Color {
    match name {
        "red" => Color::RED,
        "green" => Color::GREEN,
        other => panic!("unknown color '{other}'"),
    }
}

fn replay(trace: &Trace) {
    let mut data = Dataset::replace(trace.input.clone()).expect("trace input non-empty");
    let mut gen = algorithm_of(trace).generator(&data);

    for (n, expected) in trace.steps.iter().enumerate() {
        let highlight = match gen.resume(&mut data) {
            StepResult::Continue(h) => h,
            StepResult::Done => panic!("{}: finished early at step {n}", trace.name),
        };
        assert_eq!(
            highlight.len(),
            expected.len(),
            "{}: step {n} marks {:?}",
            trace.name,
            highlight.sorted_marks()
        );
        for mark in expected {
            assert_eq!(
                highlight.get(mark.index),
                Some(color_of(&mark.color)),
                "{}: step {n} index {}",
                trace.name,
                mark.index
            );
        }
    }

    assert_eq!(gen.resume(&mut data), StepResult::Done, "{}: extra steps", trace.name);
    assert_eq!(gen.steps(), trace.steps.len());
    assert_eq!(data.values(), trace.sorted.as_slice(), "{}", trace.name);
}

#[test]
fn every_manifest_trace_replays_exactly() {
    let keys = traces::keys();
    assert!(!keys.is_empty(), "manifest lists traces");
    for key in keys {
        let trace = traces::load(&key).expect("trace loads");
        replay(&trace);
    }
}

#[test]
fn quick_reference_trace_partitions_right_first() {
    let trace = traces::load("quick_reference").expect("trace loads");
    assert_eq!(trace.input, vec![5, 3, 8, 1, 9, 2]);
    // First partition: pivot 2 lands at index 1, red marks the range bound 5.
    let first = &trace.steps[0];
    assert!(first.iter().any(|m| m.index == 5 && m.color == "red"));
    assert!(first.iter().any(|m| m.index == 1 && m.color == "green"));
    replay(&trace);
}

#[test]
fn unknown_trace_is_an_error() {
    let err = traces::load("does_not_exist").unwrap_err();
    assert!(err.to_string().contains("unknown trace fixture"));
}
