//! Home page: every marketing section plus the chat widget, composed in
//! order under the fixed header.

use crate::chatbot::ChatBot;
use crate::config::COMPANY;
use crate::contact::Contact;
use crate::header::Header;
use crate::hero::Hero;
use crate::particles::Particles;
use crate::projects::ProjectGallery;
use crate::services_section::ServicesSection;
use crate::theme::use_theme;
use leptos::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || theme.page_class()>
            <Particles />
            <Header />
            <main>
                <Hero />
                <ServicesSection />
                <ProjectGallery />
                <Contact />
            </main>
            <footer class="py-8 text-center text-sm opacity-60 border-t border-cyan-400/10">
                {format!("© 2025 {}. Building the future since {}.", COMPANY.name, COMPANY.founded)}
            </footer>
            <ChatBot />
        </div>
    }
}
