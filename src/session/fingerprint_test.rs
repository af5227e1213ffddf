use super::*;
use crate::session::substrate::MemoryStore;

#[test]
fn repeated_calls_return_the_same_value() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let first = get_or_create(&durable, &cookies);
    let second = get_or_create(&durable, &cookies);

    assert_eq!(first, second);
}

#[test]
fn generated_value_is_uuid_v4_shaped() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let fp = get_or_create(&durable, &cookies);
    let bytes: Vec<char> = fp.chars().collect();

    assert_eq!(bytes.len(), 36);
    assert_eq!(bytes[14], '4');
    assert!(matches!(bytes[19], '8' | '9' | 'a' | 'b'));
    for i in [8, 13, 18, 23] {
        assert_eq!(bytes[i], '-');
    }
}

#[test]
fn cookie_mirror_is_written_on_every_call() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let fp = get_or_create(&durable, &cookies);
    assert_eq!(cookies.get(FINGERPRINT_KEY), Some(fp.clone()));

    cookies.remove(FINGERPRINT_KEY);
    let again = get_or_create(&durable, &cookies);
    assert_eq!(again, fp);
    assert_eq!(cookies.get(FINGERPRINT_KEY), Some(fp));
}

#[test]
fn identity_recovers_from_cookie_after_durable_store_is_cleared() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let original = get_or_create(&durable, &cookies);

    // Simulate clearing site data but not cookies.
    durable.remove(FINGERPRINT_KEY);
    assert!(durable.get(FINGERPRINT_KEY).is_none());

    let recovered = get_or_create(&durable, &cookies);
    assert_eq!(recovered, original);
    assert_eq!(durable.get(FINGERPRINT_KEY), Some(original));
}

#[test]
fn clearing_both_substrates_mints_a_new_identity() {
    let durable = MemoryStore::new();
    let cookies = MemoryStore::new();

    let first = get_or_create(&durable, &cookies);
    durable.remove(FINGERPRINT_KEY);
    cookies.remove(FINGERPRINT_KEY);

    let second = get_or_create(&durable, &cookies);
    assert_ne!(first, second);
}
