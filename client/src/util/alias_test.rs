use super::*;

#[test]
fn generate_alias_has_fixed_length() {
    assert_eq!(generate_alias().len(), ALIAS_LEN);
}

#[test]
fn generate_alias_uses_alphanumeric_alphabet() {
    for _ in 0..50 {
        let alias = generate_alias();
        assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()), "unexpected char in {alias}");
    }
}

#[test]
fn generate_alias_varies_between_calls() {
    let first = generate_alias();
    assert!((0..20).any(|_| generate_alias() != first));
}

#[test]
fn alias_from_entropy_maps_bytes_modulo_alphabet() {
    assert_eq!(alias_from_entropy(&[0, 1, 25, 26, 61, 62]), "abzA9a");
}

#[test]
fn alias_from_entropy_ignores_extra_bytes() {
    assert_eq!(alias_from_entropy(&[0; 16]), "aaaaaa");
}

#[test]
fn alias_from_entropy_short_input_gives_short_alias() {
    assert_eq!(alias_from_entropy(&[2, 3]), "cd");
}
