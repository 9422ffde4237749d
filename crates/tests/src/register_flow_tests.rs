use pretty_assertions::assert_eq;
use shared_types::{failure_notice, register, AuthAction, NoticeKind, RegisterRequest};

fn request(password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        email: "jordan@example.com".to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}

#[test]
fn mismatch_never_navigates_and_always_errors() {
    let cases = [
        ("a", "b"),
        ("password1", "password2"),
        ("Password", "password"),
        ("trailing ", "trailing"),
        ("", "x"),
        ("x", ""),
        ("pässwörd", "passwörd"),
    ];
    for (password, confirm) in cases {
        let result = register(&request(password, confirm));
        let err = match result {
            Ok(success) => panic!("{password:?}/{confirm:?} navigated to {}", success.redirect),
            Err(err) => err,
        };
        let notice = failure_notice(AuthAction::Register, &err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Passwords do not match");
        assert_eq!(
            err.field_error("confirm_password"),
            Some("Passwords do not match"),
            "mismatch should flag the confirmation field"
        );
    }
}

#[test]
fn matching_passwords_always_succeed_and_go_to_login() {
    for password in ["a", "correct horse battery staple", "pässwörd", ""] {
        let success = register(&request(password, password)).expect("matching passwords");
        assert_eq!(success.redirect, "/login");
        assert_eq!(success.notice.kind, NoticeKind::Success);
        assert_eq!(success.notice.title, "Registration successful! Please log in.");
    }
}

#[test]
fn email_does_not_affect_the_password_check() {
    let mut req = request("same", "same");
    req.email = String::new();
    assert!(register(&req).is_ok());
}
