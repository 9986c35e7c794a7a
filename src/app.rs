//! Application root: provides the theme context, finishes any OAuth callback
//! the current URL carries, and dispatches on the pathname.

use crate::auth::AuthService;
use crate::dashboard::Dashboard;
use crate::profile::ProfilePage;
use crate::session;
use crate::signin::Signin;
use crate::signup::Signup;
use crate::theme::Theme;
use leptos::logging::{error, log};
use leptos::*;

/// `code`/`state`/`provider` of an OAuth provider callback, if the query
/// string carries one.
fn oauth_callback_params(search: &str) -> Option<(String, String, String)> {
    let url = url::Url::parse(&format!("http://someUrl.com{search}")).ok()?;
    let mut code = None;
    let mut state = None;
    let mut provider = None;
    for (key, value) in url.query_pairs() {
        match &key[..] {
            "code" => code = Some(value.to_string()),
            "state" => state = Some(value.to_string()),
            "provider" => provider = Some(value.to_string()),
            other => log!("unexpected query param {other}: {value}"),
        }
    }
    Some((code?, state?, provider.unwrap_or_else(|| "google".to_owned())))
}

fn finish_oauth_callback(code: String, state: String, provider: String) {
    spawn_local(async move {
        let outcome = async {
            AuthService::new()
                .oauth_callback(&provider, &code, &state)
                .await?
                .into_data()
        }
        .await;
        match outcome {
            Ok(data) => {
                session::store_session(&data.token, &data.user.to_stored());
                log!("{provider} OAuth sign-in complete for {}", data.user.username);
            }
            Err(err) => error!("{provider} OAuth callback failed: {err}"),
        }
        // Strip the query either way so a reload cannot replay the code.
        let location = window().location();
        let protocol = location.protocol().expect("protocol");
        let host = location.host().expect("host");
        location.set_href(&format!("{protocol}//{host}/")).expect("set href");
    });
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(Theme::init());

    if let Ok(search) = window().location().search() {
        if !search.is_empty() {
            if let Some((code, state, provider)) = oauth_callback_params(&search) {
                finish_oauth_callback(code, state, provider);
            }
        }
    }

    let path = window().location().pathname().unwrap_or_else(|_| "/".to_owned());
    match path.as_str() {
        "/signin" => view! { <Signin /> }.into_view(),
        "/signup" => view! { <Signup /> }.into_view(),
        "/profile" => view! { <ProfilePage /> }.into_view(),
        _ => view! { <Dashboard /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_params_require_code_and_state() {
        assert_eq!(oauth_callback_params("?code=abc"), None);
        assert_eq!(oauth_callback_params("?state=xyz"), None);
        assert_eq!(
            oauth_callback_params("?code=abc&state=xyz"),
            Some(("abc".to_owned(), "xyz".to_owned(), "google".to_owned()))
        );
    }

    #[test]
    fn callback_provider_overrides_the_default() {
        assert_eq!(
            oauth_callback_params("?provider=facebook&code=abc&state=xyz"),
            Some(("abc".to_owned(), "xyz".to_owned(), "facebook".to_owned()))
        );
    }
}
