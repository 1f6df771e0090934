use calotrig_core::config::params::{AlgoMode, ClusterConfig, StitchPredicate};
use calotrig_core::frame::{pack_frame, process_batch, process_frame};
use calotrig_core::link::N_INPUT_LINKS;
use calotrig_core::stats::counters::Counters;
use calotrig_core::synth::{synth_frame, Lcg};
use calotrig_core::FrameProcessor;

fn frames(seed: u64, n: usize) -> Vec<Vec<Vec<u64>>> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| pack_frame(&synth_frame(&mut rng, 24)))
        .collect()
}

#[test]
fn batch_matches_frame_by_frame() {
    let input = frames(11, 40);
    for config in [
        ClusterConfig::default(),
        ClusterConfig {
            predicate: StitchPredicate::BoundaryOnly,
            ..ClusterConfig::default()
        },
    ] {
        let (results, counters) = process_batch(&config, &input).expect("batch");
        assert_eq!(results.len(), input.len());

        let mut proc = FrameProcessor::new(config).expect("processor");
        for (links, got) in input.iter().zip(&results) {
            assert_eq!(&process_frame(&config, links).expect("frame"), got);
            proc.process_links(links).expect("frame");
        }
        assert_eq!(counters, proc.stats);
        assert_eq!(counters.frames, 40);
    }
}

#[test]
fn synthetic_showers_exercise_stitching() {
    let (_, counters) = process_batch(&ClusterConfig::default(), &frames(3, 200)).expect("batch");
    assert!(counters.merges() > 0);
}

#[test]
fn counters_absorb() {
    let input = frames(5, 10);
    let config = ClusterConfig::default();
    let (_, all) = process_batch(&config, &input).expect("all");
    let (_, a) = process_batch(&config, &input[..4]).expect("a");
    let (_, b) = process_batch(&config, &input[4..]).expect("b");

    let mut sum = Counters::default();
    sum.absorb(&a);
    sum.absorb(&b);
    assert_eq!(sum, all);
}

#[test]
fn passthrough_batch_counts_frames() {
    let config = ClusterConfig {
        mode: AlgoMode::Passthrough,
        ..ClusterConfig::default()
    };
    let (results, counters) = process_batch(&config, &frames(8, 5)).expect("batch");
    assert!(results.iter().all(|r| r.towers.is_none()));
    assert_eq!(counters.frames, 5);
    assert_eq!(counters.passthrough_frames, 5);
    assert_eq!(counters.merges(), 0);
}

#[test]
fn bad_frame_fails_the_batch() {
    let mut input = frames(9, 3);
    input[1].truncate(N_INPUT_LINKS - 2);
    assert!(process_batch(&ClusterConfig::default(), &input).is_err());
}

#[test]
fn empty_batch() {
    let (results, counters) = process_batch(&ClusterConfig::default(), &[]).expect("batch");
    assert!(results.is_empty());
    assert_eq!(counters, Counters::default());
}
