mod app;
mod assistant;
mod auth;
mod chatbot;
mod config;
mod contact;
mod dashboard;
mod header;
mod hero;
mod loading;
mod pagination;
mod particles;
mod profile;
mod projects;
mod services_section;
mod session;
mod signin;
mod signup;
mod theme;

use app::*;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App /> }
    })
}
