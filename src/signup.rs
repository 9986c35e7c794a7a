//! Sign-up page. A successful registration returns a session token, so the
//! new user is signed straight in and sent to the home page.

use crate::auth::{AuthService, SignupData};
use crate::session;
use crate::theme::use_theme;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;

/// First validation failure for the sign-up form, if any.
pub fn validate(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Option<&'static str> {
    if username.trim().len() < 3 {
        return Some("Username must be at least 3 characters");
    }
    if !email.contains('@') || !email.contains('.') {
        return Some("Please enter a valid e-mail address");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    if password != confirm {
        return Some("Passwords do not match");
    }
    None
}

fn redirect(path: &str) {
    if let Err(err) = window().location().set_href(path) {
        error!("redirect to {path} failed: {err:?}");
    }
}

#[component]
pub fn Signup() -> impl IntoView {
    let theme = use_theme();
    if session::is_authenticated() {
        redirect("/profile");
    }

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (error_msg, set_error_msg) = create_signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        if let Some(problem) = validate(&user, &mail, &pass, &confirm.get_untracked()) {
            set_error_msg.set(problem.to_owned());
            return;
        }
        set_busy.set(true);
        set_error_msg.set(String::new());
        spawn_local(async move {
            let service = AuthService::new();
            let outcome = async {
                let response = service
                    .signup(&SignupData {
                        username: user.trim().to_owned(),
                        email: mail.trim().to_owned(),
                        password: pass,
                        first_name: None,
                        last_name: None,
                    })
                    .await?;
                response.into_data()
            }
            .await;
            match outcome {
                Ok(data) => {
                    session::store_session(&data.token, &data.user.to_stored());
                    redirect("/");
                }
                Err(err) => {
                    error!("sign-up failed: {err}");
                    set_error_msg.set(err.to_string());
                    set_busy.set(false);
                }
            }
        });
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-slate-500/40 bg-transparent text-sm focus:outline-none focus:ring-2 focus:ring-cyan-400/50";

    view! {
        <div class=move || {
            format!("{} flex items-center justify-center px-4", theme.page_class())
        }>
            <div class=move || {
                format!("{} rounded-3xl p-8 w-full max-w-md", theme.glass_card_class())
            }>
                <h1 class="text-3xl font-bold mb-2 text-center">
                    <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                        "Create Your Account"
                    </span>
                </h1>
                <p class=move || {
                    format!("text-sm {} text-center mb-8", theme.muted_class())
                }>"Track your projects from anywhere"</p>
                <form class="space-y-4" on:submit=submit>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Username"
                        prop:value=username
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_error_msg.set(String::new());
                        }
                    />
                    <input
                        type="email"
                        class=input_class
                        placeholder="E-mail address"
                        prop:value=email
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_error_msg.set(String::new());
                        }
                    />
                    <input
                        type="password"
                        class=input_class
                        placeholder="Password"
                        prop:value=password
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_error_msg.set(String::new());
                        }
                    />
                    <input
                        type="password"
                        class=input_class
                        placeholder="Confirm password"
                        prop:value=confirm
                        on:input=move |ev| {
                            set_confirm.set(event_target_value(&ev));
                            set_error_msg.set(String::new());
                        }
                    />
                    {move || {
                        let message = error_msg.get();
                        (!message.is_empty())
                            .then(|| view! { <p class="text-sm text-red-400">{message}</p> })
                    }}
                    <button
                        type="submit"
                        class="w-full px-6 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold disabled:opacity-60 disabled:cursor-not-allowed hover:shadow-xl hover:shadow-cyan-500/30 transition-all"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="mt-8 text-sm text-center opacity-70">
                    "Already have an account? "
                    <a href="/signin" class="text-cyan-400 hover:text-cyan-300 font-semibold">
                        "Sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_fields_are_validated_in_order() {
        assert_eq!(
            validate("ab", "a@b.com", "secret1", "secret1"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(
            validate("nadia", "not-an-email", "secret1", "secret1"),
            Some("Please enter a valid e-mail address")
        );
        assert_eq!(
            validate("nadia", "a@b.com", "short", "short"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(
            validate("nadia", "a@b.com", "secret1", "secret2"),
            Some("Passwords do not match")
        );
        assert_eq!(validate("nadia", "a@b.com", "secret1", "secret1"), None);
    }
}
