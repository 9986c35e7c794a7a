//! Process-wide theme state, provided as a Leptos context from [`crate::app::App`].
//!
//! Initial value follows the system `prefers-color-scheme`; an explicit
//! toggle sets the manual-override flag and wins from then on.

use leptos::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
pub struct Theme {
    is_dark: RwSignal<bool>,
    manual_override: RwSignal<bool>,
}

impl Theme {
    pub fn init() -> Self {
        let is_dark = create_rw_signal(true);
        let manual_override = create_rw_signal(false);
        if let Ok(Some(query)) = window().match_media("(prefers-color-scheme: dark)") {
            is_dark.set(query.matches());
            // Track system preference until the user toggles by hand.
            let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |event: web_sys::MediaQueryListEvent| {
                    if !manual_override.get_untracked() {
                        is_dark.set(event.matches());
                    }
                },
            );
            query.set_onchange(Some(on_change.as_ref().unchecked_ref()));
            on_change.forget();
        }
        Self {
            is_dark,
            manual_override,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        self.manual_override.set(true);
        self.is_dark.update(|dark| *dark = !*dark);
    }

    pub fn glass_card_class(&self) -> &'static str {
        if self.is_dark() {
            "bg-white/5 backdrop-blur-sm border border-white/10"
        } else {
            "bg-white backdrop-blur-sm border border-gray-200 shadow-lg"
        }
    }

    pub fn page_class(&self) -> &'static str {
        if self.is_dark() {
            "min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-white"
        } else {
            "min-h-screen bg-gradient-to-br from-orange-50 via-white to-amber-50 text-gray-800"
        }
    }

    pub fn muted_class(&self) -> &'static str {
        if self.is_dark() {
            "text-gray-300"
        } else {
            "text-gray-600"
        }
    }
}

pub fn use_theme() -> Theme {
    expect_context::<Theme>()
}
