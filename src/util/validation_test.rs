use super::*;

fn signup(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: password.to_owned(),
        password_confirm: confirm.to_owned(),
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_required_then_shape() {
    assert_eq!(check_email(""), Some(EMAIL_REQUIRED));
    assert_eq!(check_email("ada"), Some(EMAIL_INVALID));
    assert_eq!(check_email("@example.com"), Some(EMAIL_INVALID));
    assert_eq!(check_email("ada@"), Some(EMAIL_INVALID));
    assert_eq!(check_email("ada @example.com"), Some(EMAIL_INVALID));
    assert_eq!(check_email("ada@example.com"), None);
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn short_password_reports_length_error() {
    assert_eq!(check_new_password("abc"), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn password_must_cover_every_character_class() {
    assert_eq!(check_new_password("abcdef"), Some(PASSWORD_WEAK));
    assert_eq!(check_new_password("Abcdef"), Some(PASSWORD_WEAK));
    assert_eq!(check_new_password("Abcdef1"), Some(PASSWORD_WEAK));
    assert_eq!(check_new_password("abcdef1!"), Some(PASSWORD_WEAK));
    assert_eq!(check_new_password("Abcdef1?"), Some(PASSWORD_WEAK));
    assert_eq!(check_new_password("Abcdef1!"), None);
}

#[test]
fn confirmation_must_match() {
    assert_eq!(check_confirmation("Abcdef1!", ""), Some(CONFIRM_REQUIRED));
    assert_eq!(check_confirmation("Abcdef1!", "Abcdef1?"), Some(CONFIRM_MISMATCH));
    assert_eq!(check_confirmation("Abcdef1!", "Abcdef1!"), None);
}

// =============================================================
// Forms
// =============================================================

#[test]
fn signup_rejects_short_password_without_payload() {
    let errors = signup("abc", "abc").validate().unwrap_err();
    assert_eq!(errors.password, Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.name, None);
    assert_eq!(errors.email, None);
}

#[test]
fn signup_accepts_strong_password() {
    let request = signup("Abcdef1!", "Abcdef1!").validate().unwrap();
    assert_eq!(request.password, "Abcdef1!");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.name, "Ada Lovelace");
}

#[test]
fn signup_reports_every_failing_field() {
    let errors = SignupForm::default().validate().unwrap_err();
    assert_eq!(errors.name, Some(NAME_REQUIRED));
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
    assert_eq!(errors.password_confirm, Some(CONFIRM_REQUIRED));
}

#[test]
fn signup_trims_name() {
    let mut form = signup("Abcdef1!", "Abcdef1!");
    form.name = "  Ada  ".to_owned();
    assert_eq!(form.validate().unwrap().name, "Ada");

    form.name = "   ".to_owned();
    assert_eq!(form.validate().unwrap_err().name, Some(NAME_REQUIRED));
}

#[test]
fn login_requires_both_fields() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(errors.email, Some(EMAIL_REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_REQUIRED));
}

#[test]
fn login_does_not_apply_signup_password_rules() {
    let form = LoginForm { email: "ada@example.com".to_owned(), password: "x".to_owned() };
    let creds = form.validate().unwrap();
    assert_eq!(creds.email, "ada@example.com");
    assert_eq!(creds.password, "x");
}
