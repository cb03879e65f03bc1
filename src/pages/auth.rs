//! Credential form page serving both the log-in and sign-up routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form toggles between modes in place; the `/signup` route only
//! pre-selects sign-up. A successful login commits the session and leaves
//! for the dashboard; a successful sign-up flips back to log-in mode.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, Session};
use crate::util::guard::{self, Target};

/// Client-side sign-up validation; runs before any network call.
fn validate_signup(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match!");
    }
    Ok(())
}

/// Credential form page. `signup` selects the initial mode.
#[component]
pub fn AuthPage(#[prop(optional)] signup: bool) -> impl IntoView {
    let session_ctx = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    guard::install_guard(
        if signup { Target::Signup } else { Target::Login },
        session_ctx,
        navigate,
    );

    let signup_mode = RwSignal::new(signup);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let clear_form = move || {
        username.set(String::new());
        email.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
    };

    let on_log_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        busy.set(true);
        let username_value = username.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::login(&username_value, &password_value).await {
                Ok(fresh) => {
                    if let Some((credential, label)) = fresh.parts() {
                        // The installed guard sees the committed session and
                        // leaves for the dashboard.
                        session_ctx.set(session::commit(credential, label));
                    }
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());
        info.set(String::new());
        if let Err(message) = validate_signup(&password.get(), &confirm_password.get()) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        let username_value = username.get();
        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::auth::register(&username_value, &email_value, &password_value).await
            {
                Ok(()) => {
                    clear_form();
                    signup_mode.set(false);
                    info.set("Sign-up successful. Please log in.".to_owned());
                }
                Err(message) => error.set(message),
            }
            busy.set(false);
        });
    };

    let switch_mode = move |to_signup: bool| {
        signup_mode.set(to_signup);
        error.set(String::new());
        info.set(String::new());
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>{move || if signup_mode.get() { "Sign Up" } else { "Log In" }}</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__info">{move || info.get()}</p>
                </Show>
                <Show
                    when=move || signup_mode.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_log_in>
                                <input
                                    class="auth-input"
                                    type="text"
                                    placeholder="Username"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                                <input
                                    class="auth-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <button class="auth-button" type="submit" disabled=move || busy.get()>
                                    "Log In"
                                </button>
                            </form>
                            <button class="auth-switch" on:click=move |_| switch_mode(true)>
                                "Don't have an account?"
                            </button>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_sign_up>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm Password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            "Sign Up"
                        </button>
                    </form>
                    <button class="auth-switch" on:click=move |_| switch_mode(false)>
                        "Already have an account?"
                    </button>
                </Show>
            </div>
        </div>
    }
}
