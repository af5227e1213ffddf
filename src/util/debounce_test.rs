use super::*;

#[test]
fn only_last_armed_generation_is_current() {
    let d = Debouncer::new();

    // Five keystrokes in quick succession.
    let generations: Vec<u64> = (0..5).map(|_| d.arm()).collect();

    let fired: Vec<u64> = generations
        .iter()
        .copied()
        .filter(|g| d.is_current(*g))
        .collect();

    assert_eq!(fired, vec![generations[4]]);
}

#[test]
fn clones_share_the_counter() {
    let a = Debouncer::new();
    let b = a.clone();

    let g1 = a.arm();
    let g2 = b.arm();

    assert!(!a.is_current(g1));
    assert!(a.is_current(g2));
}

#[test]
fn rearming_after_fire_starts_fresh() {
    let d = Debouncer::new();
    let g1 = d.arm();
    assert!(d.is_current(g1));

    let g2 = d.arm();
    assert!(!d.is_current(g1));
    assert!(d.is_current(g2));
}
