//! Static marketing sections: the services catalogue and the innovation list.

use crate::theme::use_theme;
use leptos::*;

struct Service {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
    metric: &'static str,
    growth: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Commercial Construction Services",
        description: "Full-scale commercial building solutions including planning, design, engineering, and high-quality construction work.",
        features: [
            "Complete Project Planning",
            "Energy-Efficient Designs",
            "High-Quality Finishes",
        ],
        metric: "200+ Completed Projects",
        growth: "+12%",
    },
    Service {
        title: "Residential Construction Services",
        description: "Expert residential construction services delivering custom homes, durable structures, and sustainable living spaces.",
        features: ["Custom Home Design", "Eco-Friendly Materials", "Secure Structures"],
        metric: "50+ Homes Built",
        growth: "+34%",
    },
    Service {
        title: "Infrastructure Construction Services",
        description: "Development of large-scale infrastructure projects including roads, bridges, and public utility facilities.",
        features: [
            "Road and Highway Construction",
            "Bridge Building",
            "Utility Installations",
        ],
        metric: "20+ Infrastructure Projects",
        growth: "+18%",
    },
    Service {
        title: "Renovation & Retrofitting Services",
        description: "Specialized renovation and retrofitting services to restore, upgrade, and modernize existing structures.",
        features: ["Structural Repairs", "Interior Upgrades", "Exterior Refurbishments"],
        metric: "15+ Renovations Completed",
        growth: "+41%",
    },
];

const INNOVATIONS: &[(&str, &str)] = &[
    (
        "Energy-Efficient Building Design",
        "Design solutions that reduce energy consumption and operational costs",
    ),
    (
        "Sustainable Material Usage",
        "Utilizing renewable and recyclable materials for eco-friendly construction",
    ),
    (
        "Integrated Infrastructure Planning",
        "Coordinated development of buildings with surrounding roads, utilities, and public spaces",
    ),
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    let theme = use_theme();
    view! {
        <section id="services" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-cyan-400 to-purple-400 bg-clip-text text-transparent">
                            "Our Services"
                        </span>
                    </h2>
                    <p class=move || format!("text-xl {} max-w-3xl mx-auto", theme.muted_class())>
                        "From smart commercial spaces to sustainable homes, we build for the future"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-8">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "{} rounded-3xl p-8 hover:shadow-2xl hover:shadow-cyan-500/20 transition-all duration-500",
                                        theme.glass_card_class(),
                                    )
                                }>
                                    <h3 class="text-2xl font-bold mb-3">{service.title}</h3>
                                    <p class=move || {
                                        format!("{} mb-4", theme.muted_class())
                                    }>{service.description}</p>
                                    <ul class="space-y-2 mb-6">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center text-sm">
                                                        <span class="text-emerald-400 mr-2">"✓"</span>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <div class="flex justify-between items-center pt-4 border-t border-gray-200/10 text-sm">
                                        <span class="text-cyan-400 font-semibold">{service.metric}</span>
                                        <span class="text-emerald-400">{service.growth}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="grid md:grid-cols-3 gap-6 mt-16">
                    {INNOVATIONS
                        .iter()
                        .map(|(title, description)| {
                            view! {
                                <div class=move || {
                                    format!(
                                        "{} rounded-2xl p-6 border-l-4 border-emerald-400/60",
                                        theme.glass_card_class(),
                                    )
                                }>
                                    <h4 class="font-bold mb-2">{*title}</h4>
                                    <p class=move || {
                                        format!("text-sm {}", theme.muted_class())
                                    }>{*description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
