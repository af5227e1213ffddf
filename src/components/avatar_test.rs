use super::initials;

#[test]
fn takes_the_first_letter_of_each_name() {
    assert_eq!(initials("Ada", "Lovelace"), "AL");
}

#[test]
fn uppercases_lowercase_names() {
    assert_eq!(initials("ada", "lovelace"), "AL");
}

#[test]
fn tolerates_a_missing_name() {
    assert_eq!(initials("Ada", ""), "A");
    assert_eq!(initials("", ""), "");
}
