//! Hero section: rotating slideshow backdrop, headline, call-to-action
//! buttons, and the stats band underneath.

use crate::config::COMPANY;
use crate::theme::use_theme;
use leptos::*;
use std::time::Duration;

const SLIDESHOW_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1541888946425-d81bb19240f5?w=1600&fit=crop",
    "https://images.unsplash.com/photo-1503387762-592deb58ef4e?w=1600&fit=crop",
    "https://images.unsplash.com/photo-1431576901776-e539bd916ba2?w=1600&fit=crop",
    "https://images.unsplash.com/photo-1429497419816-9ca5cfb4571a?w=1600&fit=crop",
];

const SLIDE_INTERVAL: Duration = Duration::from_secs(6);

const STATS: &[(&str, &str, &str)] = &[
    ("200+", "Construction Projects", "+12%"),
    ("25+", "Years in Innovation", "reliable"),
    ("20+", "Construction Experts", "+8%"),
    ("100%", "Success Rate", "+2%"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let (slide, set_slide) = create_signal(0usize);
    if let Ok(handle) = set_interval_with_handle(
        move || set_slide.update(|s| *s = (*s + 1) % SLIDESHOW_IMAGES.len()),
        SLIDE_INTERVAL,
    ) {
        on_cleanup(move || handle.clear());
    }

    view! {
        <section id="home" class="relative pt-16 overflow-hidden">
            <div class="absolute inset-0 -z-10">
                {SLIDESHOW_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <div
                                class=move || {
                                    format!(
                                        "absolute inset-0 bg-cover bg-center transition-opacity duration-1000 {}",
                                        if slide.get() == index { "opacity-30" } else { "opacity-0" },
                                    )
                                }
                                style=format!("background-image: url('{src}')")
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-slate-950/60"></div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-28 text-center">
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    "Building Tomorrow, "
                    <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                        "Today"
                    </span>
                </h1>
                <p class=move || {
                    format!("text-xl md:text-2xl {} max-w-3xl mx-auto mb-10", theme.muted_class())
                }>{COMPANY.tagline}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="/#projects"
                        class="px-8 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold hover:shadow-xl hover:shadow-cyan-500/30 transition-all"
                    >
                        "Explore Projects"
                    </a>
                    <a
                        href="/#contact"
                        class=move || {
                            format!(
                                "px-8 py-3 rounded-lg {} border border-cyan-400/30 font-semibold hover:border-cyan-400/60 transition-all",
                                theme.glass_card_class(),
                            )
                        }
                    >
                        "Get a Quote"
                    </a>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pb-20">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6">
                    {STATS
                        .iter()
                        .map(|(number, label, change)| {
                            view! {
                                <div class=move || {
                                    format!("{} rounded-2xl p-6 text-center", theme.glass_card_class())
                                }>
                                    <div class="text-3xl font-bold text-cyan-400 mb-1">{*number}</div>
                                    <div class=move || {
                                        format!("text-sm {}", theme.muted_class())
                                    }>{*label}</div>
                                    <div class="text-xs text-emerald-400 mt-1">{*change}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
