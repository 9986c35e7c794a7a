//! Sign-in page: local validation, the auth API call, cookie persistence and
//! redirect. Also hosts the OAuth initiation buttons and the forgot-password
//! request.

use crate::auth::{AuthService, SigninCredentials};
use crate::session;
use crate::theme::use_theme;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;

/// First validation failure for the sign-in form, if any.
pub fn validate(username: &str, password: &str) -> Option<&'static str> {
    if username.trim().is_empty() {
        return Some("Username is required");
    }
    if password.is_empty() {
        return Some("Password is required");
    }
    if username.trim().len() < 3 {
        return Some("Username must be at least 3 characters");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters");
    }
    None
}

fn redirect(path: &str) {
    if let Err(err) = window().location().set_href(path) {
        error!("redirect to {path} failed: {err:?}");
    }
}

#[component]
pub fn Signin() -> impl IntoView {
    let theme = use_theme();
    // Already signed in: straight to the profile.
    if session::is_authenticated() {
        redirect("/profile");
    }

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (show_password, set_show_password) = create_signal(false);
    let (busy, set_busy) = create_signal(false);
    let (error_msg, set_error_msg) = create_signal(String::new());
    let (notice, set_notice) = create_signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if let Some(problem) = validate(&user, &pass) {
            set_error_msg.set(problem.to_owned());
            return;
        }
        set_busy.set(true);
        set_error_msg.set(String::new());
        set_notice.set(String::new());
        spawn_local(async move {
            session::clear_session();
            let service = AuthService::new();
            let outcome = async {
                let response = service
                    .signin(&SigninCredentials {
                        username: user.trim().to_owned(),
                        password: pass,
                    })
                    .await?;
                response.into_data()
            }
            .await;
            match outcome {
                Ok(data) => {
                    log!("signed in as {} ({})", data.user.username, data.user.role);
                    session::store_session(&data.token, &data.user.to_stored());
                    if session::is_authenticated() {
                        redirect("/");
                    } else {
                        set_error_msg
                            .set("Failed to establish authenticated session".to_owned());
                        set_busy.set(false);
                    }
                }
                Err(err) => {
                    error!("sign-in failed: {err}");
                    set_error_msg.set(err.to_string());
                    set_busy.set(false);
                }
            }
        });
    };

    let oauth = move |provider: &'static str| {
        move |_| {
            if busy.get_untracked() {
                return;
            }
            set_busy.set(true);
            set_error_msg.set(String::new());
            spawn_local(async move {
                match AuthService::new().oauth_redirect(provider).await {
                    Ok(response) => match response.data {
                        Some(data) => redirect(&data.redirect_url),
                        None => {
                            set_error_msg.set(
                                response
                                    .message
                                    .unwrap_or_else(|| "Sign-in is unavailable right now".to_owned()),
                            );
                            set_busy.set(false);
                        }
                    },
                    Err(err) => {
                        error!("{provider} OAuth initiation failed: {err}");
                        set_error_msg.set(err.to_string());
                        set_busy.set(false);
                    }
                }
            });
        }
    };

    let forgot_password = move |_| {
        let user = username.get_untracked();
        if user.trim().is_empty() {
            set_error_msg.set("Enter your username first, then retry".to_owned());
            return;
        }
        spawn_local(async move {
            match AuthService::new().forgot_password(user.trim()).await {
                Ok(response) => set_notice.set(response.message.unwrap_or_else(|| {
                    "If that account exists, a reset link is on its way.".to_owned()
                })),
                Err(err) => set_error_msg.set(err.to_string()),
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
                        "Welcome Back"
                    </span>
                </h1>
                <p class=move || {
                    format!("text-sm {} text-center mb-8", theme.muted_class())
                }>"Sign in to your client portal"</p>
                <form class="space-y-4" on:submit=submit>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Username or e-mail"
                        prop:value=username
                        on:input=move |ev| {
                            set_username.set(event_target_value(&ev));
                            set_error_msg.set(String::new());
                        }
                    />
                    <div class="relative">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            class=input_class
                            placeholder="Password"
                            prop:value=password
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error_msg.set(String::new());
                            }
                        />
                        <button
                            type="button"
                            class="absolute right-3 top-1/2 -translate-y-1/2 text-sm opacity-60 hover:opacity-100"
                            aria-label="Toggle password visibility"
                            on:click=move |_| set_show_password.update(|show| *show = !*show)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || {
                        let message = error_msg.get();
                        (!message.is_empty())
                            .then(|| view! { <p class="text-sm text-red-400">{message}</p> })
                    }}
                    {move || {
                        let message = notice.get();
                        (!message.is_empty())
                            .then(|| view! { <p class="text-sm text-emerald-400">{message}</p> })
                    }}
                    <button
                        type="submit"
                        class="w-full px-6 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold disabled:opacity-60 disabled:cursor-not-allowed hover:shadow-xl hover:shadow-cyan-500/30 transition-all"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <button
                    class="mt-3 w-full text-sm text-cyan-400 hover:text-cyan-300"
                    on:click=forgot_password
                >
                    "Forgot password?"
                </button>
                <div class="my-6 flex items-center">
                    <div class="flex-1 border-t border-slate-500/30"></div>
                    <span class="px-3 text-xs opacity-60">"or continue with"</span>
                    <div class="flex-1 border-t border-slate-500/30"></div>
                </div>
                <div class="grid grid-cols-2 gap-3">
                    <button
                        class="px-4 py-2.5 rounded-lg border border-slate-500/40 hover:border-cyan-400/60 text-sm font-medium transition-all disabled:opacity-60"
                        disabled=move || busy.get()
                        on:click=oauth("google")
                    >
                        "Google"
                    </button>
                    <button
                        class="px-4 py-2.5 rounded-lg border border-slate-500/40 hover:border-cyan-400/60 text-sm font-medium transition-all disabled:opacity-60"
                        disabled=move || busy.get()
                        on:click=oauth("facebook")
                    >
                        "Facebook"
                    </button>
                </div>
                <p class="mt-8 text-sm text-center opacity-70">
                    "New to the portal? "
                    <a href="/signup" class="text-cyan-400 hover:text-cyan-300 font-semibold">
                        "Create an account"
                    </a>
                </p>
                <p class="mt-2 text-sm text-center">
                    <a href="/" class="opacity-60 hover:opacity-100">"← Back to home"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_checked_before_any_network_call() {
        assert_eq!(validate("", "secret1"), Some("Username is required"));
        assert_eq!(validate("nadia", ""), Some("Password is required"));
        assert_eq!(
            validate("ab", "secret1"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(
            validate("nadia", "short"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(validate("nadia", "secret1"), None);
    }
}
