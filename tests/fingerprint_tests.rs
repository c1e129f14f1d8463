// Fingerprint determinism: the cache key must be a pure function of the
// source content.

use podnote::{AudioSource, Fingerprint};

#[test]
fn identical_bytes_digest_identically() {
    assert_eq!(
        Fingerprint::of_bytes(b"AAAA"),
        Fingerprint::of_bytes(b"AAAA")
    );
}

#[test]
fn distinct_payloads_digest_pairwise_distinct() {
    let a = Fingerprint::of_bytes(b"AAAA");
    let b = Fingerprint::of_bytes(b"BBBB");
    let c = Fingerprint::of_bytes(b"podcast episode 42");

    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn url_fingerprints_are_deterministic() {
    let first = Fingerprint::of_url("https://example.com/ep1.mp3");
    let again = Fingerprint::of_url("https://example.com/ep1.mp3");

    assert_eq!(first, again);
    assert_ne!(first, Fingerprint::of_url("https://example.com/ep2.mp3"));
}

#[test]
fn fingerprint_renders_as_lowercase_hex() {
    let fp = Fingerprint::of_bytes(b"AAAA");

    assert_eq!(fp.as_str().len(), 64);
    assert!(fp
        .as_str()
        .chars()
        .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(fp.to_string(), fp.as_str());
}

#[test]
fn source_fingerprint_matches_its_content_domain() {
    let upload = AudioSource::from_bytes(b"AAAA".to_vec());
    let remote = AudioSource::from_url("https://example.com/ep1.mp3");

    assert_eq!(upload.fingerprint(), Fingerprint::of_bytes(b"AAAA"));
    assert_eq!(
        remote.fingerprint(),
        Fingerprint::of_url("https://example.com/ep1.mp3")
    );
    assert!(remote.is_remote());
    assert!(!upload.is_remote());
}
