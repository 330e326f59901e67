//! Email/password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` owns the form's `LoginState` signal and executes the
//! reducer's `LoginCommand`s (spawn the request in the browser, navigate on
//! success). `LoginForm` only renders that signal and turns DOM events into
//! `LoginAction`s. The auth origin comes from the `ClientConfig` context
//! provided by `App`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
use crate::config::ClientConfig;
use crate::net::types::CredentialField;
use crate::state::login::{FORGOT_PASSWORD_HREF, LoginAction, LoginCommand, LoginState, SIGN_UP_PATH};

fn submit_label(pending: bool) -> &'static str {
    if pending { "Logging in..." } else { "Login" }
}

fn field_input_type(field: CredentialField) -> &'static str {
    match field {
        CredentialField::Email => "email",
        CredentialField::Password => "password",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let login = RwSignal::new(LoginState::default());
    let navigate = use_navigate();

    let on_action = UnsyncCallback::new(move |action: LoginAction| {
        let command = login
            .try_update(|state| state.apply(action))
            .unwrap_or(LoginCommand::None);
        run_command(command, login, &config, &navigate);
    });

    view! {
        <Title text="Login"/>
        <LoginForm login=login on_action=on_action/>
    }
}

/// Login card: credential inputs, submit, inert Google button, sign-up link.
#[component]
pub fn LoginForm(login: RwSignal<LoginState>, on_action: UnsyncCallback<LoginAction>) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_action.run(LoginAction::Submit);
    };
    let on_field = move |field: CredentialField| {
        move |ev: leptos::ev::Event| {
            on_action.run(LoginAction::FieldInput { field, value: event_target_value(&ev) });
        }
    };

    let pending = move || login.with(LoginState::is_pending);
    let error_text = Signal::derive(move || login.with(|s| s.error_message().unwrap_or_default()));

    view! {
        <div class="login-page">
            <div class="card login-card">
                <div class="card__header">
                    <h1 class="card__title">"Login"</h1>
                    <p class="card__description">"Enter your email below to login to your account"</p>
                    <Show when=move || login.with(|s| s.error().is_some())>
                        <Alert title="Error" description=error_text/>
                    </Show>
                </div>
                <div class="card__content">
                    <form class="login-form" on:submit=on_submit>
                        <div class="login-form__field">
                            <label for=CredentialField::Email.name()>"Email"</label>
                            <input
                                class="login-input"
                                id=CredentialField::Email.name()
                                name=CredentialField::Email.name()
                                type=field_input_type(CredentialField::Email)
                                placeholder="m@example.com"
                                required=true
                                prop:value=move || login.with(|s| s.credentials.email.clone())
                                on:input=on_field(CredentialField::Email)
                            />
                        </div>
                        <div class="login-form__field">
                            <div class="login-form__label-row">
                                <label for=CredentialField::Password.name()>"Password"</label>
                                <a href=FORGOT_PASSWORD_HREF class="login-form__forgot">
                                    "Forgot your password?"
                                </a>
                            </div>
                            <input
                                class="login-input"
                                id=CredentialField::Password.name()
                                name=CredentialField::Password.name()
                                type=field_input_type(CredentialField::Password)
                                required=true
                                prop:value=move || login.with(|s| s.credentials.password.clone())
                                on:input=on_field(CredentialField::Password)
                            />
                        </div>
                        <button class="button button--primary" type="submit" disabled=pending>
                            {move || submit_label(pending())}
                        </button>
                        <button
                            class="button button--outline"
                            type="button"
                            on:click=move |_| on_action.run(LoginAction::GoogleLogin)
                        >
                            "Login with Google"
                        </button>
                    </form>
                    <p class="login-card__footer">
                        "Don't have an account? "
                        <a href=SIGN_UP_PATH class="login-card__link">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn run_command<N>(command: LoginCommand, login: RwSignal<LoginState>, config: &ClientConfig, navigate: &N)
where
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    match command {
        LoginCommand::None => {}
        LoginCommand::Navigate(path) => navigate(path, NavigateOptions::default()),
        LoginCommand::Send(ticket) => {
            leptos::logging::log!("login submission {} started", ticket.seq);
            #[cfg(feature = "hydrate")]
            {
                use crate::net::api::run_submission;
                use crate::net::transport::BrowserTransport;

                let config = config.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let resolved = run_submission(&BrowserTransport, &config, ticket).await;
                    // A disposed signal means the page is gone; nothing left to update.
                    let command = login
                        .try_update(|state| state.apply(resolved))
                        .unwrap_or(LoginCommand::None);
                    run_command(command, login, &config, &navigate);
                });
            }
        }
    }
}
