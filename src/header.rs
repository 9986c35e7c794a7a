//! Fixed page header: company mark, anchored section links, theme toggle,
//! and session-aware account buttons.

use crate::config::COMPANY;
use crate::session;
use crate::theme::use_theme;
use leptos::*;

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/#home"),
    ("Services", "/#services"),
    ("Projects", "/#projects"),
    ("Contact", "/#contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let (menu_open, set_menu_open) = create_signal(false);
    let signed_in = session::is_authenticated();

    let account_links = move || {
        if signed_in {
            view! {
                <a
                    href="/profile"
                    class="px-4 py-2 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold hover:shadow-lg hover:shadow-cyan-500/30 transition-all"
                >
                    "Profile"
                </a>
            }
            .into_view()
        } else {
            view! {
                <a href="/signin" class="px-4 py-2 font-medium hover:text-cyan-400 transition-colors">
                    "Sign In"
                </a>
                <a
                    href="/signup"
                    class="px-4 py-2 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold hover:shadow-lg hover:shadow-cyan-500/30 transition-all"
                >
                    "Sign Up"
                </a>
            }
            .into_view()
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 inset-x-0 z-40 {} border-b border-cyan-400/10",
                theme.glass_card_class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between h-16">
                <a href="/" class="text-xl font-bold">
                    <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                        {COMPANY.name}
                    </span>
                </a>
                <nav class="hidden md:flex items-center space-x-6">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm font-medium hover:text-cyan-400 transition-colors"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="hidden md:flex items-center space-x-2">
                    <ThemeToggle />
                    {account_links}
                </div>
                <button
                    class="md:hidden p-2"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <svg viewBox="0 0 10 8" width="20">
                        <path
                            d="M1 1h8M1 4h8M1 7h8"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                        />
                    </svg>
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden px-4 pb-4 flex flex-col space-y-2">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="py-2 font-medium hover:text-cyan-400 transition-colors"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="flex items-center space-x-2 pt-2">
                        <ThemeToggle />
                        {account_links}
                    </div>
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            class="p-2 rounded-lg hover:bg-white/10 transition-colors"
            aria-label="Toggle dark mode"
            on:click=move |_| theme.toggle()
        >
            {move || if theme.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
