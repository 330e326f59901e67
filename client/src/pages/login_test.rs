use super::*;

#[test]
fn submit_label_reflects_pending() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

#[test]
fn field_input_types_match_browser_hints() {
    assert_eq!(field_input_type(CredentialField::Email), "email");
    assert_eq!(field_input_type(CredentialField::Password), "password");
}

#[test]
fn inputs_are_named_after_wire_keys() {
    let names: Vec<&str> = CredentialField::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["email", "password"]);
}

// =============================================================
// Server-rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;

    use super::*;
    use crate::net::error::LoginError;

    fn render(state: LoginState) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let login = RwSignal::new(state);
            let on_action = UnsyncCallback::new(|_: LoginAction| {});
            view! { <LoginForm login=login on_action=on_action/> }.to_html()
        })
    }

    fn submitted() -> LoginState {
        let mut state = LoginState::default();
        state.apply(LoginAction::Submit);
        state
    }

    #[test]
    fn idle_form_has_no_banner_and_enabled_submit() {
        let html = render(LoginState::default());
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("disabled"));
        assert!(!html.contains("Logging in..."));
    }

    #[test]
    fn pending_form_disables_submit() {
        let html = render(submitted());
        assert!(html.contains("disabled"));
        assert!(html.contains("Logging in..."));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn failed_form_shows_error_banner() {
        let mut state = submitted();
        state.apply(LoginAction::Resolved {
            seq: 1,
            result: Err(LoginError::Rejected {
                status: 401,
                status_text: "Unauthorized".to_owned(),
                message: "invalid credentials".to_owned(),
            }),
        });
        let html = render(state);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Error"));
        assert!(html.contains("401 - Unauthorized - invalid credentials"));
        assert!(!html.contains("disabled"));
    }
}
