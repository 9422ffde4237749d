use pretty_assertions::assert_eq;
use shared_types::{
    failure_notice, login, logout, AppError, AuthAction, LoginRequest, NoticeKind, UserRole,
    ALL_ROLES,
};

#[test]
fn login_lands_on_each_roles_dashboard() {
    for role in ALL_ROLES {
        let req = LoginRequest {
            email: "sam@example.com".to_string(),
            password: "secret".to_string(),
            role: *role,
        };
        let success = login(&req).expect("stubbed login succeeds");
        assert_eq!(success.redirect, role.home_path());
        assert_eq!(success.notice.kind, NoticeKind::Success);
    }
}

#[test]
fn default_login_goes_to_agent_dashboard() {
    let success = login(&LoginRequest::default()).unwrap();
    assert_eq!(success.redirect, "/agent/dashboard");
}

#[test]
fn admin_login_goes_to_admin_dashboard() {
    let req = LoginRequest {
        role: UserRole::Admin,
        ..LoginRequest::default()
    };
    assert_eq!(login(&req).unwrap().redirect, "/admin/dashboard");
}

#[test]
fn unexpected_failures_show_generic_message() {
    let err = AppError::internal("toast provider missing");
    assert_eq!(
        failure_notice(AuthAction::Login, &err).title,
        "An error occurred during sign in"
    );
    assert_eq!(
        failure_notice(AuthAction::Register, &err).title,
        "An error occurred during registration"
    );
}

#[test]
fn logout_returns_to_root_with_notice() {
    let out = logout();
    assert_eq!(out.redirect, "/");
    assert_eq!(out.notice.kind, NoticeKind::Info);
}
