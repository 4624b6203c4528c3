//! Integration test: the allocator agrees with the reference model on
//! arbitrary add/remove/has scripts, and drives its recycler strictly FIFO.

use census_core::Member;
use census_pool::{Population, PopulationConfig};
use census_test_utils::{pop_ops, ModelPopulation, PopOp, RecordingRecycler, RecyclerEvent};
use proptest::prelude::*;

enum Entity {}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn population_matches_model(script in pop_ops(400)) {
        let mut pop = Population::<Entity>::new();
        let mut model = ModelPopulation::new();
        let mut issued: Vec<Member<Entity>> = Vec::new();

        for op in script {
            match op {
                PopOp::Add => {
                    let m = pop.add();
                    let expected: Member<Entity> = model.add();
                    prop_assert_eq!(m, expected);
                    prop_assert!(!m.is_zero());
                    issued.push(m);
                }
                PopOp::Remove(_) => {
                    if let Some(m) = op.pick(&issued) {
                        prop_assert_eq!(pop.remove(m), model.remove(m));
                    }
                }
                PopOp::Has(_) => {
                    if let Some(m) = op.pick(&issued) {
                        prop_assert_eq!(pop.has(m), model.has(m));
                    }
                }
            }

            prop_assert_eq!(pop.alive(), model.alive());
            prop_assert_eq!(pop.capacity(), model.capacity());
            prop_assert_eq!(pop.free_count() as usize, model.freed().len());
            prop_assert_eq!(pop.alive(), pop.capacity() - pop.free_count());
        }

        // Every handle ever issued is live iff the model says so.
        for &m in &issued {
            prop_assert_eq!(pop.has(m), model.has(m));
        }
    }

    #[test]
    fn generations_never_decrease(script in pop_ops(200)) {
        let mut pop = Population::<Entity>::new();
        let mut issued: Vec<Member<Entity>> = Vec::new();
        let mut seen: Vec<u32> = Vec::new();

        for op in script {
            match op {
                PopOp::Add => issued.push(pop.add()),
                PopOp::Remove(_) => {
                    if let Some(m) = op.pick(&issued) {
                        pop.remove(m);
                    }
                }
                PopOp::Has(_) => {}
            }
            for index in 0..pop.capacity() {
                let generation = pop.generation_of(index).unwrap();
                if let Some(prev) = seen.get(index as usize).copied() {
                    prop_assert!(generation >= prev);
                    seen[index as usize] = generation;
                } else {
                    prop_assert_eq!(generation, 1);
                    seen.push(generation);
                }
            }
        }
    }

    #[test]
    fn recycler_is_used_fifo(script in pop_ops(200)) {
        let mut pop = Population::<Entity, RecordingRecycler>::with_recycler(
            RecordingRecycler::new(),
            PopulationConfig::default(),
        )
        .unwrap();
        let mut model = ModelPopulation::new();
        let mut issued: Vec<Member<Entity>> = Vec::new();

        for op in script {
            match op {
                PopOp::Add => {
                    let m = pop.add();
                    let expected: Member<Entity> = model.add();
                    prop_assert_eq!(m, expected);
                    issued.push(m);
                }
                PopOp::Remove(_) => {
                    if let Some(m) = op.pick(&issued) {
                        pop.remove(m);
                        model.remove(m);
                    }
                }
                PopOp::Has(_) => {}
            }
        }

        // Each successful removal pushes once and bumps its slot's generation once.
        let pushes = pop
            .recycler()
            .events()
            .iter()
            .filter(|e| matches!(e, RecyclerEvent::Push(_)))
            .count();
        let bumps: usize = (0..pop.capacity())
            .map(|i| (pop.generation_of(i).unwrap() - 1) as usize)
            .sum();
        prop_assert_eq!(pushes, bumps);
        prop_assert_eq!(pop.recycler().queued(), model.freed().to_vec());
    }
}

#[test]
fn popped_indices_come_out_in_push_order() {
    let mut pop = Population::<Entity, RecordingRecycler>::with_recycler(
        RecordingRecycler::new(),
        PopulationConfig::default(),
    )
    .unwrap();
    let members: Vec<_> = (0..5).map(|_| pop.add()).collect();
    for i in [3, 1, 4] {
        assert!(pop.remove(members[i]));
    }
    assert_eq!(pop.recycler().queued(), vec![3, 1, 4]);

    let reissued: Vec<_> = (0..3).map(|_| pop.add().index()).collect();
    assert_eq!(reissued, vec![3, 1, 4]);

    let events = pop.recycler().events();
    let pops: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            RecyclerEvent::Pop(index) => Some(*index),
            RecyclerEvent::Push(_) => None,
        })
        .collect();
    // Five initial adds each find the recycler empty, then three reuses.
    assert_eq!(
        pops,
        vec![None, None, None, None, None, Some(3), Some(1), Some(4)]
    );
}
