use super::validate_step;
use crate::net::types::RegistrationForm;

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "correct-horse".to_owned(),
        confirm_password: "correct-horse".to_owned(),
        phone: None,
        enable_2fa: false,
    }
}

#[test]
fn a_complete_form_passes_every_step() {
    let form = valid_form();
    assert_eq!(validate_step(1, &form), None);
    assert_eq!(validate_step(2, &form), None);
    assert_eq!(validate_step(3, &form), None);
}

#[test]
fn step_one_requires_names_and_a_plausible_email() {
    let mut form = valid_form();
    form.first_name = "  ".to_owned();
    assert!(validate_step(1, &form).is_some());

    let mut form = valid_form();
    form.email = "not-an-email".to_owned();
    assert!(validate_step(1, &form).is_some());
}

#[test]
fn step_two_rejects_short_or_mismatched_passwords() {
    let mut form = valid_form();
    form.password = "short".to_owned();
    form.confirm_password = "short".to_owned();
    assert!(validate_step(2, &form).is_some());

    let mut form = valid_form();
    form.confirm_password = "different-pass".to_owned();
    assert_eq!(validate_step(2, &form), Some("Passwords do not match."));
}
