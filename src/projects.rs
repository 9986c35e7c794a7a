//! Project records and the featured-projects gallery.
//!
//! Records live in a hosted Supabase table; the client only ever reads them,
//! newest first, through the REST endpoint. Without a configured Supabase
//! URL the gallery falls back to the built-in showcase list.

use crate::config::{COMPANY, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::loading::Loading;
use crate::pagination::{Pager, PaginationControls};
use crate::theme::{use_theme, Theme};
use chrono::{DateTime, Utc};
use leptos::logging::{error, log};
use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "text-emerald-400",
            ProjectStatus::InProgress => "text-cyan-400",
            ProjectStatus::Planning => "text-purple-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: ProjectStatus,
    pub rating: f32,
    pub investment: String,
    pub progress: u8,
    pub tech: Vec<String>,
    pub completion: String,
    pub image: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum FetchError {
    #[error("the project service returned status {0}")]
    Status(u16),
    #[error("could not reach the project service")]
    Network,
    #[error("the project service answered with an unexpected shape")]
    Decode,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode
        } else {
            FetchError::Network
        }
    }
}

/// All projects, newest first. Falls back to the built-in showcase when no
/// Supabase endpoint is configured at build time.
pub async fn fetch_projects() -> Result<Vec<Project>, FetchError> {
    let (Some(base), Some(key)) = (SUPABASE_URL, SUPABASE_ANON_KEY) else {
        log!("no project store configured; using showcase projects");
        return Ok(showcase_projects());
    };
    let url = format!("{base}/rest/v1/prj?select=*&order=created_at.desc");
    let response = reqwest::Client::new()
        .get(&url)
        .header("apikey", key)
        .bearer_auth(key)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        error!("project query rejected with status {status}");
        return Err(FetchError::Status(status.as_u16()));
    }
    let rows: Vec<Project> = response.json().await?;
    log!("fetched {} projects", rows.len());
    Ok(rows)
}

/// Built-in flagship projects, shown when the remote store is absent.
pub fn showcase_projects() -> Vec<Project> {
    let project = |id: &str,
                   title: &str,
                   category: &str,
                   description: &str,
                   tech: &[&str],
                   status: ProjectStatus,
                   completion: &str,
                   progress: u8,
                   investment: &str,
                   rating: f32,
                   image: &str| Project {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        status,
        rating,
        investment: investment.to_owned(),
        progress,
        tech: tech.iter().map(|t| (*t).to_owned()).collect(),
        completion: completion.to_owned(),
        image: image.to_owned(),
        created_at: None,
        updated_at: None,
    };
    vec![
        project(
            "showcase-1",
            "Colombo Tech Hub 2030 - Detailed Construction",
            "Smart Commercial",
            "Fully detailed construction plan for a 60-story AI-powered smart building with renewable energy systems.",
            &["AI-Driven Detailing", "Solar Integration", "Smart HVAC Layout"],
            ProjectStatus::InProgress,
            "2026",
            65,
            "$250M",
            4.9,
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=600&h=400&fit=crop",
        ),
        project(
            "showcase-2",
            "Kandy Green Residences - Detailed Eco Design",
            "Eco-Living",
            "Carbon-neutral residential project with detailed construction drawings, vertical gardens, and smart home plans.",
            &["Vertical Garden Detailing", "Community Energy Grid Plans", "Smart Home Layouts"],
            ProjectStatus::Completed,
            "2024",
            100,
            "$180M",
            4.8,
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=600&h=400&fit=crop",
        ),
        project(
            "showcase-3",
            "Galle Smart Bridge - Construction Detailing",
            "Infrastructure",
            "IoT-enabled bridge project with detailed structural drawings, adaptive lighting plans, and transportation integration.",
            &["IoT Sensor Placement Plans", "LED Lighting Layout", "Traffic AI Systems"],
            ProjectStatus::Planning,
            "2027",
            25,
            "$95M",
            4.7,
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&h=400&fit=crop",
        ),
    ]
}

const GALLERY_PAGE_SIZES: &[usize] = &[3, 6, 9, 12];
const GALLERY_DEFAULT_PAGE_SIZE: usize = 6;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let theme = use_theme();
    let (reload, set_reload) = create_signal(0u32);
    let projects = create_resource(
        move || reload.get(),
        |_| async move { fetch_projects().await },
    );
    let pager = create_rw_signal(Pager::new(GALLERY_DEFAULT_PAGE_SIZE));
    let (active_project, set_active_project) = create_signal(0usize);

    let retry = move |_| set_reload.update(|n| *n += 1);

    view! {
        <section id="projects" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-emerald-400 to-cyan-400 bg-clip-text text-transparent">
                            "Featured Projects"
                        </span>
                    </h2>
                    <p class=move || format!("text-xl {} max-w-3xl mx-auto", theme.muted_class())>
                        "Showcasing our commitment to innovation and excellence in every smart building we create"
                    </p>
                </div>
                <Suspense fallback=move || {
                    view! { <Loading label="Loading amazing projects..." /> }
                }>
                    {move || {
                        projects
                            .get()
                            .map(|result| match result {
                                Ok(projects) => {
                                    view! {
                                        <GalleryGrid
                                            projects
                                            pager
                                            active_project
                                            set_active_project
                                        />
                                    }
                                        .into_view()
                                }
                                Err(err) => {
                                    view! {
                                        <div class=move || {
                                            format!(
                                                "text-center py-20 {} rounded-3xl border border-red-400/30",
                                                theme.glass_card_class(),
                                            )
                                        }>
                                            <h3 class="text-2xl font-bold mb-4">"Unable to Load Projects"</h3>
                                            <p class="text-lg text-red-400 mb-4">{err.to_string()}</p>
                                            <p class=move || format!("{} mb-6", theme.muted_class())>
                                                "We're experiencing difficulties connecting to our project database. Please check your internet connection and try again."
                                            </p>
                                            <button
                                                class="inline-flex items-center px-6 py-3 bg-gradient-to-r from-cyan-500 to-emerald-500 hover:from-cyan-600 hover:to-emerald-600 text-white font-semibold rounded-lg transition-all duration-300 shadow-lg"
                                                on:click=retry
                                            >
                                                "Retry Loading"
                                            </button>
                                        </div>
                                    }
                                        .into_view()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </section>
    }
}

#[component]
fn GalleryGrid(
    projects: Vec<Project>,
    pager: RwSignal<Pager>,
    active_project: ReadSignal<usize>,
    set_active_project: WriteSignal<usize>,
) -> impl IntoView {
    let theme = use_theme();
    let total = projects.len();
    let store = store_value(projects);
    let total_items = Signal::derive(move || store.with_value(|p| p.len()));

    if total == 0 {
        empty_state(theme)
    } else {
        grid_view(store, total_items, pager, active_project, set_active_project)
    }
}

fn empty_state(theme: Theme) -> View {
    view! {
        <div class="text-center py-20">
            <h3 class="text-2xl font-bold mb-4">"No Projects Available"</h3>
            <p class=move || theme.muted_class()>
                "We're currently working on exciting new projects. Check back soon to see our latest innovations!"
            </p>
        </div>
    }
    .into_view()
}

fn grid_view(
    store: StoredValue<Vec<Project>>,
    total_items: Signal<usize>,
    pager: RwSignal<Pager>,
    active_project: ReadSignal<usize>,
    set_active_project: WriteSignal<usize>,
) -> View {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            {move || {
                let p = pager.get();
                let start = store.with_value(|projects| p.start_index(projects.len()));
                store
                    .with_value(|projects| p.visible(projects).to_vec())
                    .into_iter()
                    .enumerate()
                    .map(|(offset, project)| {
                        let index = start + offset;
                        view! {
                            <ProjectCard
                                project
                                highlighted=Signal::derive(move || active_project.get() == index)
                                on_hover=move |_| set_active_project.set(index)
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
        {move || {
            (total_items.get() > pager.get().page_size())
                .then(|| {
                    view! {
                        <PaginationControls
                            pager
                            total_items
                            page_size_options=GALLERY_PAGE_SIZES
                            noun="projects"
                            on_change=move |_page, _size| set_active_project.set(0)
                        />
                    }
                })
        }}
    }
    .into_view()
}

#[component]
fn ProjectCard<F>(project: Project, highlighted: Signal<bool>, on_hover: F) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let theme = use_theme();
    let status = project.status;
    view! {
        <article
            class=move || {
                format!(
                    "group relative {} rounded-3xl overflow-hidden transition-all duration-500 {}",
                    theme.glass_card_class(),
                    if highlighted.get() { "ring-2 ring-cyan-400/50 shadow-xl shadow-cyan-500/30" } else { "" },
                )
            }
            on:mouseenter=on_hover
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=format!("{} project showcase", project.title)
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-700"
                    loading="lazy"
                />
                <div class="absolute top-4 left-4 flex space-x-2">
                    <div class="px-3 py-1 bg-black/50 backdrop-blur-sm rounded-full text-sm">
                        <span class=status.badge_class()>{status.label()}</span>
                    </div>
                    <div class="px-3 py-1 bg-black/50 backdrop-blur-sm rounded-full text-sm text-yellow-400">
                        {format!("★ {:.1}", project.rating)}
                    </div>
                </div>
                <div class="absolute top-4 right-4 px-3 py-1 bg-black/50 backdrop-blur-sm rounded-full text-sm text-emerald-400 font-semibold">
                    {project.investment.clone()}
                </div>
            </div>
            <div class="p-8">
                <div class="text-sm text-cyan-400 font-semibold mb-2 uppercase tracking-wide">
                    {project.category.clone()}
                </div>
                <h3 class="text-xl font-bold mb-3">{project.title.clone()}</h3>
                <p class=move || format!("{} mb-4 text-sm leading-relaxed", theme.muted_class())>
                    {project.description.clone()}
                </p>
                <div class="mb-4">
                    <div class="flex justify-between items-center mb-2">
                        <span class="text-sm font-medium opacity-70">"Progress"</span>
                        <span class="text-sm font-bold text-cyan-400">
                            {format!("{}%", project.progress)}
                        </span>
                    </div>
                    <div class="w-full bg-gray-700/40 rounded-full h-2.5 overflow-hidden">
                        <div
                            class="bg-gradient-to-r from-cyan-400 to-emerald-400 h-full rounded-full transition-all duration-1000 ease-out"
                            style=format!("width: {}%", project.progress.min(100))
                            role="progressbar"
                        ></div>
                    </div>
                </div>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 bg-white/10 rounded-lg text-xs text-emerald-400 border border-emerald-400/20">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="flex justify-between items-center pt-4 border-t border-gray-200/10">
                    <div class="flex flex-col">
                        <span class="text-sm opacity-70 font-medium">"Completion"</span>
                        <span class="text-sm font-semibold text-cyan-400">
                            {project.completion.clone()}
                        </span>
                    </div>
                    <a
                        href=format!("mailto:{}?subject=Project enquiry: {}", COMPANY.email, project.title)
                        class="text-cyan-400 hover:text-cyan-300 font-semibold text-sm"
                    >
                        "View Details →"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_rows_decode_from_the_store_shape() {
        let row = r#"{
            "id": "a1",
            "title": "Harbour Terminal",
            "description": "Automated cargo terminal.",
            "category": "Infrastructure",
            "status": "In Progress",
            "rating": 4.5,
            "investment": "$40M",
            "progress": 55,
            "tech": ["IoT", "BIM"],
            "completion": "2026",
            "image": "https://example.test/img.jpg",
            "created_at": "2025-03-01T10:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(row).unwrap();
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.progress, 55);
        assert_eq!(project.tech, vec!["IoT", "BIM"]);
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_none());
    }

    #[test]
    fn status_round_trips_with_display_labels() {
        for status in [
            ProjectStatus::Planning,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
            assert_eq!(serde_json::from_str::<ProjectStatus>(&json).unwrap(), status);
        }
    }

    #[test]
    fn showcase_list_is_well_formed() {
        let projects = showcase_projects();
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p.progress <= 100));
        assert!(projects.iter().all(|p| !p.tech.is_empty()));
    }
}
