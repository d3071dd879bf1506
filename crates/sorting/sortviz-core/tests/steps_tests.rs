use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sortviz_core::steps::{QuickSort, SubRange};
use sortviz_core::{Algorithm, Color, Dataset, StepGenerator, StepResult};

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn inversions(values: &[i64]) -> usize {
    let mut count = 0;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                count += 1;
            }
        }
    }
    count
}

fn random_inputs() -> Vec<Vec<i64>> {
    let mut rng = SmallRng::seed_from_u64(0x50_27);
    let mut cases = vec![
        vec![1],
        vec![2, 1],
        vec![1, 2, 3, 4],
        vec![9, 7, 5, 3, 1],
        vec![4, 4, 4, 4],
        vec![3, -1, 3, -1, 0],
    ];
    for len in [7usize, 16, 33, 50] {
        cases.push((0..len).map(|_| rng.gen_range(-20..=20)).collect());
    }
    cases
}

/// it should leave every input sorted and a permutation of the original, for every algorithm
#[test]
fn all_algorithms_sort_and_preserve_multiset() {
    for input in random_inputs() {
        for algorithm in Algorithm::ALL {
            let mut data = Dataset::replace(input.clone()).unwrap();
            let mut gen = algorithm.generator(&data);
            let mut guard = 0usize;
            loop {
                match gen.resume(&mut data) {
                    StepResult::Continue(_) => {
                        // Every paused state is a permutation of the input.
                        assert_eq!(sorted_copy(data.values()), sorted_copy(&input));
                    }
                    StepResult::Done => break,
                }
                guard += 1;
                assert!(guard < 10_000, "{algorithm} did not terminate on {input:?}");
            }
            assert!(data.is_sorted(), "{algorithm} left {:?}", data.values());
            assert_eq!(data.values(), sorted_copy(&input).as_slice());
            // Bounds never move during a sort.
            assert_eq!(data.min(), *input.iter().min().unwrap());
            assert_eq!(data.max(), *input.iter().max().unwrap());
        }
    }
}

#[test]
fn bubble_steps_equal_inversions() {
    for input in random_inputs() {
        let mut data = Dataset::replace(input.clone()).unwrap();
        let steps = Algorithm::Bubble.generator(&data).drain(&mut data);
        assert_eq!(steps, inversions(&input), "input {input:?}");
    }
}

#[test]
fn bubble_on_sorted_input_is_silent() {
    let mut data = Dataset::replace((0..40).collect()).unwrap();
    let mut gen = Algorithm::Bubble.generator(&data);
    assert_eq!(gen.resume(&mut data), StepResult::Done);
}

#[test]
fn bubble_highlights_swapped_pair() {
    let mut data = Dataset::replace(vec![1, 5, 4]).unwrap();
    let mut gen = Algorithm::Bubble.generator(&data);
    let StepResult::Continue(h) = gen.resume(&mut data) else {
        panic!("expected a swap");
    };
    assert_eq!(h.sorted_marks(), vec![(1, Color::RED), (2, Color::GREEN)]);
    assert_eq!(data.values(), &[1, 4, 5]);
}

#[test]
fn insertion_steps_are_two_per_key() {
    for input in random_inputs() {
        let mut data = Dataset::replace(input.clone()).unwrap();
        let steps = Algorithm::Insertion.generator(&data).drain(&mut data);
        assert_eq!(steps, 2 * (input.len() - 1), "input {input:?}");
    }
}

#[test]
fn insertion_alternates_red_pickup_and_green_landing() {
    let mut data = Dataset::replace(vec![4, 3, 2, 10]).unwrap();
    let mut gen = Algorithm::Insertion.generator(&data);
    let mut colors = Vec::new();
    while let StepResult::Continue(h) = gen.resume(&mut data) {
        assert_eq!(h.len(), 1);
        colors.push(h.sorted_marks()[0]);
    }
    assert_eq!(
        colors,
        vec![
            (1, Color::RED),
            (0, Color::GREEN),
            (2, Color::RED),
            (0, Color::GREEN),
            (3, Color::RED),
            (3, Color::GREEN),
        ]
    );
}

#[test]
fn quick_reference_input() {
    let mut data = Dataset::replace(vec![5, 3, 8, 1, 9, 2]).unwrap();
    let mut gen = QuickSort::new(&data);

    let StepResult::Continue(first) = gen.resume(&mut data) else {
        panic!("expected a partition step");
    };
    assert_eq!(gen.pivots(), &[2]);
    assert_eq!(first.get(5), Some(Color::RED));
    assert_eq!(first.get(1), Some(Color::GREEN));

    gen.drain(&mut data);
    assert_eq!(data.values(), &[1, 2, 3, 5, 8, 9]);
}

#[test]
fn quick_processes_right_range_before_left() {
    // Pivot 5 lands in the middle, leaving both sides non-trivial.
    let mut data = Dataset::replace(vec![9, 1, 8, 2, 5]).unwrap();
    let mut gen = QuickSort::new(&data);
    gen.resume(&mut data);
    assert_eq!(
        gen.pending(),
        &[SubRange { low: 0, high: 1 }, SubRange { low: 3, high: 4 }]
    );
    let StepResult::Continue(h) = gen.resume(&mut data) else {
        panic!("expected the right range next");
    };
    assert_eq!(h.get(4), Some(Color::RED));
    assert_eq!(gen.pending(), &[SubRange { low: 0, high: 1 }]);
}

#[test]
fn quick_covers_whole_dataset_not_a_fixed_bound() {
    let input: Vec<i64> = (0..120).rev().collect();
    let mut data = Dataset::replace(input).unwrap();
    Algorithm::Quick.generator(&data).drain(&mut data);
    assert!(data.is_sorted());
    assert_eq!(data.get(119), Some(119));
}

#[test]
fn resume_after_done_stays_done() {
    for algorithm in Algorithm::ALL {
        let mut data = Dataset::replace(vec![2, 1]).unwrap();
        let mut gen = algorithm.generator(&data);
        gen.drain(&mut data);
        let before = data.clone();
        assert!(gen.resume(&mut data).is_done());
        assert_eq!(data, before);
    }
}
