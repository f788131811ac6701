use super::*;

#[test]
fn sequence_is_seed_deterministic() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SplitMix64::new(1);
    let mut b = SplitMix64::new(2);
    let same = (0..8).filter(|_| a.next_u64() == b.next_u64()).count();
    assert_eq!(same, 0);
}

#[test]
fn zero_seed_still_mixes() {
    let mut rng = SplitMix64::new(0);
    let first = rng.next_u64();
    let second = rng.next_u64();
    assert_ne!(first, 0);
    assert_ne!(first, second);
}
