use crate::{
    SeqExt,
    seq::Seq,
    source::{from_iter, from_slice, from_slice_reverse, from_slice_shuffle_seeded, from_vec},
    transform::{concat, reverse},
};

fn random_vec(rng: &mut fastrand::Rng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.i64(-1000..1000)).collect()
}

#[test]
fn test_random_slice_round_trip() {
    let mut rng = fastrand::Rng::with_seed(12345);
    for _ in 0..50 {
        let len = rng.usize(0..200);
        let data = random_vec(&mut rng, len);
        assert_eq!(from_slice(&data).to_vec(), data);
        assert_eq!(from_slice(&data).count(), data.len());
        assert_eq!(from_vec(data.clone()).to_vec(), data);
    }
}

#[test]
fn test_double_reverse_is_identity() {
    let mut rng = fastrand::Rng::with_seed(777);
    for _ in 0..30 {
        let len = rng.usize(0..100);
        let data = random_vec(&mut rng, len);
        assert_eq!(reverse(reverse(from_slice(&data))).to_vec(), data);
        assert_eq!(
            reverse(from_slice(&data)).to_vec(),
            from_slice_reverse(&data).to_vec()
        );
    }
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = fastrand::Rng::with_seed(42);
    for round in 0..20 {
        let len = rng.usize(0..64);
        let data = random_vec(&mut rng, len);
        let shuffled = from_slice_shuffle_seeded(&data, round);
        let mut first = shuffled.to_vec();
        assert_eq!(shuffled.to_vec(), first);

        let mut expected = data.clone();
        first.sort_unstable();
        expected.sort_unstable();
        assert_eq!(first, expected);
    }
}

#[test]
fn test_aggregates_match_naive() {
    let mut rng = fastrand::Rng::with_seed(2024);
    for _ in 0..50 {
        let len = rng.usize(1..100);
        let data = random_vec(&mut rng, len);
        let seq = from_slice(&data);
        assert_eq!(seq.min().must(), *data.iter().min().unwrap());
        assert_eq!(seq.max().must(), *data.iter().max().unwrap());
        let naive = data.iter().sum::<i64>() as f64 / data.len() as f64;
        assert!((seq.avg() - naive).abs() < 1e-9);
        let idx = rng.usize(0..len);
        assert_eq!(seq.at(idx as isize).must(), data[idx]);
    }
}

#[test]
fn test_skip_limit_match_iterator() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..100 {
        let len = rng.usize(0..50);
        let data = random_vec(&mut rng, len);
        let skip = rng.isize(-5..60);
        let limit = rng.isize(-5..60);
        let expected: Vec<i64> = data
            .iter()
            .copied()
            .skip(skip.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();
        assert_eq!(from_slice(&data).skip(skip).limit(limit).to_vec(), expected);
    }
}

#[test]
fn test_at_over_concat_and_filter() {
    let parts: Vec<Vec<i32>> = (0..4).map(|i| (i * 100..(i + 1) * 100).collect()).collect();
    let seq = concat(parts.iter().map(|p| from_slice(p)));
    assert_eq!(seq.at(150).must(), 150);
    assert_eq!(seq.count(), 400);
    assert!(seq.at(400).is_empty());

    let multiples_of_five = from_iter(0..100).filter(|v| v % 5 == 0);
    assert_eq!(multiples_of_five.at(5).must(), 25);

    let odd_squares = from_iter(1..100).filter(|v| v % 2 == 1).map(|v| v * v);
    assert_eq!(odd_squares.at(2).must(), 25);
}

#[test]
fn test_pull_out_lengths() {
    let seq = from_iter(0..100);
    for n in [0isize, 1, 50, 99, 100, 101, 1000] {
        assert_eq!(seq.pull_out(n).len(), (n as usize).min(100));
    }
    assert_eq!(seq.pull_out(-1).len(), 100);
}

#[test]
fn test_dyn_seq_composition() {
    let sources: Vec<Box<dyn Seq<Item = i32>>> = vec![
        Box::new(from_iter(0..3)),
        Box::new(from_iter(10..13).filter(|v| *v != 11)),
        Box::new(from_slice(&[7, 7]).replace_all(7, 8)),
    ];
    let all = concat(sources);
    assert_eq!(all.to_vec(), vec![0, 1, 2, 10, 12, 8, 8]);
    assert_eq!(all.reverse().head(), Some(8));
}
