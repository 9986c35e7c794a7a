//! Gated profile page: the stored user's details, a paginated list of their
//! projects and of available services, and sign-out. Entry requires a valid
//! session; the stored token is re-verified in the background.

use crate::auth::AuthService;
use crate::config::COMPANY;
use crate::header::Header;
use crate::loading::Loading;
use crate::pagination::{Pager, PaginationControls};
use crate::session::{self, StoredUser};
use crate::theme::use_theme;
use leptos::logging::{log, warn};
use leptos::*;

#[derive(Clone)]
struct ClientProject {
    name: &'static str,
    status: &'static str,
    progress: u8,
    budget: &'static str,
    completion: &'static str,
}

const CLIENT_PROJECTS: &[ClientProject] = &[
    ClientProject {
        name: "Luxury Villa - Beverly Hills",
        status: "Construction Phase",
        progress: 75,
        budget: "$850K",
        completion: "Mar 2025",
    },
    ClientProject {
        name: "Office Complex Downtown",
        status: "Design Review",
        progress: 45,
        budget: "$1.2M",
        completion: "Jun 2025",
    },
    ClientProject {
        name: "Smart Home Project",
        status: "Planning",
        progress: 20,
        budget: "$380K",
        completion: "Aug 2025",
    },
    ClientProject {
        name: "Corporate Headquarters",
        status: "Foundation",
        progress: 35,
        budget: "$2.1M",
        completion: "Oct 2025",
    },
    ClientProject {
        name: "Eco-Friendly Residence",
        status: "Design Phase",
        progress: 15,
        budget: "$650K",
        completion: "Dec 2025",
    },
    ClientProject {
        name: "Tech Campus Extension",
        status: "Planning",
        progress: 10,
        budget: "$1.8M",
        completion: "Feb 2026",
    },
];

const CLIENT_SERVICES: &[(&str, &str)] = &[
    ("AI Project Analysis", "Smart analytics & predictions"),
    ("Virtual 3D Tours", "Immersive project previews"),
    ("Real-time Updates", "Live progress tracking"),
    ("Expert Consultation", "Direct architect access"),
    ("Smart Building Tech", "IoT & automation solutions"),
    ("Sustainable Design", "Eco-friendly architecture"),
    ("Project Management", "End-to-end coordination"),
    ("Quality Assurance", "Premium quality control"),
];

const PROJECT_PAGE_SIZES: &[usize] = &[3, 5, 10];
const SERVICE_PAGE_SIZES: &[usize] = &[5, 8];

fn redirect(path: &str) {
    let _ = window().location().set_href(path);
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let theme = use_theme();
    let active = session::auth_token().zip(session::stored_user());
    match active {
        None => {
            redirect("/signin");
            view! {
                <div class=move || theme.page_class()>
                    <Loading label="Redirecting to sign in..." />
                </div>
            }
            .into_view()
        }
        Some((token, user)) => {
            // Background token check; a definitive rejection ends the session.
            spawn_local(async move {
                let service = AuthService::new();
                let verdict = service.verify_token(&token).await;
                if !verdict.valid {
                    warn!("stored token rejected; signing out");
                    session::clear_session();
                    redirect("/signin");
                    return;
                }
                log!("session token verified");
                // Refresh the cached record from the server's copy.
                match service.get_profile(&token).await {
                    Ok(profile) if profile.success => {
                        if let Some(data) = profile.data {
                            session::store_session(
                                &token,
                                &StoredUser {
                                    id: data.id,
                                    username: data.username,
                                    email: data.email,
                                    role: data.role,
                                },
                            );
                        }
                    }
                    Ok(_) => {}
                    Err(err) => warn!("profile refresh failed: {err}"),
                }
            });
            view! { <ProfileContent user /> }.into_view()
        }
    }
}

#[component]
fn ProfileContent(user: StoredUser) -> impl IntoView {
    let theme = use_theme();
    let project_pager = create_rw_signal(Pager::new(3));
    let service_pager = create_rw_signal(Pager::new(5));
    let project_count = Signal::derive(|| CLIENT_PROJECTS.len());
    let service_count = Signal::derive(|| CLIENT_SERVICES.len());

    let sign_out = move |_| {
        let token = session::auth_token();
        spawn_local(async move {
            // Best effort; the cookies go away either way.
            if let Some(token) = token {
                if let Err(err) = AuthService::new().signout(&token).await {
                    warn!("server sign-out failed: {err}");
                }
            }
            session::clear_session();
            redirect("/signin");
        });
    };

    let username = user.username.clone();
    let initial = username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned());

    view! {
        <div class=move || theme.page_class()>
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-24 pb-16">
                <a href="/" class="text-sm opacity-60 hover:opacity-100">"← Back to home"</a>
                <div class="grid lg:grid-cols-3 gap-8 mt-6">
                    <div class=move || {
                        format!("{} rounded-3xl p-8 text-center h-fit", theme.glass_card_class())
                    }>
                        <div class="w-20 h-20 mx-auto mb-4 rounded-full bg-gradient-to-r from-cyan-500 to-emerald-500 flex items-center justify-center text-3xl font-bold text-white">
                            {initial}
                        </div>
                        <h1 class="text-2xl font-bold mb-1">{username.clone()}</h1>
                        <p class=move || format!("text-sm {} mb-1", theme.muted_class())>
                            {user.email.clone()}
                        </p>
                        <span class="inline-block px-3 py-1 rounded-full text-xs bg-cyan-500/20 text-cyan-400 uppercase tracking-wide">
                            {user.role.clone()}
                        </span>
                        <div class="mt-6 space-y-2 text-sm text-left">
                            <p class="opacity-70">{format!("Client of {}", COMPANY.name)}</p>
                            <p class="opacity-70">{format!("Support: {}", COMPANY.phone)}</p>
                        </div>
                        <button
                            class="mt-8 w-full px-4 py-2.5 rounded-lg border border-red-400/40 text-red-400 hover:bg-red-500/10 font-medium transition-all"
                            on:click=sign_out
                        >
                            "Sign Out"
                        </button>
                    </div>

                    <div class="lg:col-span-2 space-y-8">
                        <section class=move || {
                            format!("{} rounded-3xl p-8", theme.glass_card_class())
                        }>
                            <h2 class="text-xl font-bold mb-6">"Your Projects"</h2>
                            <div class="space-y-4">
                                {move || {
                                    let pager = project_pager.get();
                                    pager
                                        .visible(CLIENT_PROJECTS)
                                        .iter()
                                        .cloned()
                                        .map(|project| {
                                            view! {
                                                <div class="p-4 rounded-xl bg-white/5 border border-white/10">
                                                    <div class="flex justify-between items-center mb-2">
                                                        <span class="font-semibold">{project.name}</span>
                                                        <span class="text-xs px-2 py-1 rounded-full bg-cyan-500/20 text-cyan-400">
                                                            {project.status}
                                                        </span>
                                                    </div>
                                                    <div class="w-full bg-gray-700/40 rounded-full h-2 overflow-hidden mb-2">
                                                        <div
                                                            class="bg-gradient-to-r from-cyan-400 to-emerald-400 h-full rounded-full"
                                                            style=format!("width: {}%", project.progress)
                                                        ></div>
                                                    </div>
                                                    <div class="flex justify-between text-xs opacity-70">
                                                        <span>{format!("{}% complete", project.progress)}</span>
                                                        <span>{project.budget}</span>
                                                        <span>{format!("Due {}", project.completion)}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <PaginationControls
                                pager=project_pager
                                total_items=project_count
                                page_size_options=PROJECT_PAGE_SIZES
                                noun="projects"
                                show_info=false
                                on_change=|_page, _size| {}
                            />
                        </section>

                        <section class=move || {
                            format!("{} rounded-3xl p-8", theme.glass_card_class())
                        }>
                            <h2 class="text-xl font-bold mb-6">"Available Services"</h2>
                            <div class="space-y-3">
                                {move || {
                                    let pager = service_pager.get();
                                    pager
                                        .visible(CLIENT_SERVICES)
                                        .iter()
                                        .map(|(label, description)| {
                                            view! {
                                                <div class="flex items-center justify-between p-3 rounded-xl bg-white/5 border border-white/10">
                                                    <span class="font-medium">{*label}</span>
                                                    <span class="text-sm opacity-60">{*description}</span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                            <PaginationControls
                                pager=service_pager
                                total_items=service_count
                                page_size_options=SERVICE_PAGE_SIZES
                                noun="services"
                                show_info=false
                                on_change=|_page, _size| {}
                            />
                        </section>
                    </div>
                </div>
            </main>
        </div>
    }
}
