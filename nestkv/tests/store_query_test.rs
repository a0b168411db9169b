//! GET / COUNTS / FIND behaviour against the visible store

#[path = "testutils/mod.rs"]
mod testutils;

use testutils::test_fixture::TestFixture;

#[test]
fn test_get_returns_latest_value() {
    let mut fixture = TestFixture::new();

    fixture.run_silent(&["SET k v"]);
    assert_eq!(fixture.get("k"), "v");

    fixture.run_silent(&["SET k v2"]);
    assert_eq!(fixture.get("k"), "v2");

    fixture.run_silent(&["UNSET k"]);
    assert_eq!(fixture.get("k"), "NULL");
}

#[test]
fn test_get_never_set_key_is_null() {
    let mut fixture = TestFixture::new();
    assert_eq!(fixture.get("ghost"), "NULL");
}

#[test]
fn test_unset_absent_key_is_noop() {
    let mut fixture = TestFixture::with_data(&[("a", "1")]);
    let before = fixture.store().clone();

    fixture.run_silent(&["UNSET missing"]);

    assert_eq!(fixture.store(), &before);
}

#[test]
fn test_counts_tracks_current_values() {
    let mut fixture = TestFixture::with_data(&[("a", "1"), ("b", "1"), ("c", "2")]);
    assert_eq!(fixture.printed("COUNTS 1"), "2");
    assert_eq!(fixture.printed("COUNTS 2"), "1");
    assert_eq!(fixture.printed("COUNTS 9"), "0");

    fixture.run_silent(&["SET b 2"]);
    assert_eq!(fixture.printed("COUNTS 1"), "1");
    assert_eq!(fixture.printed("COUNTS 2"), "2");
}

#[test]
fn test_find_uses_insertion_order() {
    let mut fixture = TestFixture::new();
    fixture.run_silent(&["SET z x", "SET a x", "SET m y", "SET b x"]);

    assert_eq!(fixture.printed("FIND x"), "z, a, b");
    assert_eq!(fixture.printed("FIND y"), "m");
    assert_eq!(fixture.printed("FIND nothing"), "");
}

#[test]
fn test_keys_and_values_are_case_sensitive() {
    let mut fixture = TestFixture::new();
    fixture.run_silent(&["set Name Alice", "SET name alice"]);

    assert_eq!(fixture.get("Name"), "Alice");
    assert_eq!(fixture.get("name"), "alice");
    assert_eq!(fixture.printed("counts Alice"), "1");
}

#[test]
fn test_arguments_may_contain_punctuation() {
    let mut fixture = TestFixture::new();
    fixture.run_silent(&["SET user:1 {\"id\":1}", "SET path /tmp/a,b"]);

    assert_eq!(fixture.get("user:1"), "{\"id\":1}");
    assert_eq!(fixture.printed("FIND /tmp/a,b"), "path");
}
