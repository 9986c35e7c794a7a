//! Contact section: company details plus a client-validated enquiry form.
//! Invalid input never leaves the page; a valid submission is acknowledged
//! inline.

use crate::config::COMPANY;
use crate::theme::use_theme;
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::*;

/// First validation failure for the enquiry form, if any.
fn validate(name: &str, email: &str, message: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("Please tell us your name");
    }
    if email.trim().is_empty() || !is_plausible_email(email) {
        return Some("Please enter a valid e-mail address");
    }
    if message.trim().is_empty() {
        return Some("Please describe your project");
    }
    None
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

const PROJECT_TYPES: &[&str] = &[
    "Commercial Construction",
    "Residential Construction",
    "Infrastructure",
    "Renovation & Retrofitting",
];

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<&'static str>);
    let (sent, set_sent) = create_signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match validate(&name.get_untracked(), &email.get_untracked(), &message.get_untracked()) {
            Some(problem) => set_error.set(Some(problem)),
            None => {
                set_error.set(None);
                set_sent.set(true);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
        }
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-slate-500/40 bg-transparent text-sm focus:outline-none focus:ring-2 focus:ring-cyan-400/50";

    view! {
        <section id="contact" class="py-24 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12">
                <div>
                    <h2 class="text-5xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                            "Let's Build Together"
                        </span>
                    </h2>
                    <p class=move || format!("text-xl {} mb-8", theme.muted_class())>
                        "Tell us about your project and our team will get back to you within one business day."
                    </p>
                    <ul class="space-y-4 text-sm">
                        <li class="flex items-center">
                            <span class="text-cyan-400 mr-3">"📞"</span>
                            <a href=format!("tel:{}", COMPANY.phone)>{COMPANY.phone}</a>
                        </li>
                        <li class="flex items-center">
                            <span class="text-cyan-400 mr-3">"📧"</span>
                            <a href=format!("mailto:{}", COMPANY.email)>{COMPANY.email}</a>
                        </li>
                        <li class="flex items-center">
                            <span class="text-cyan-400 mr-3">"📍"</span>
                            {COMPANY.address}
                        </li>
                    </ul>
                </div>
                <form
                    class=move || format!("{} rounded-3xl p-8 space-y-4", theme.glass_card_class())
                    on:submit=submit
                >
                    <input
                        type="text"
                        class=input_class
                        placeholder="Your name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        class=input_class
                        placeholder="Your e-mail"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <select class=input_class>
                        <option value="">"Project Type"</option>
                        {PROJECT_TYPES
                            .iter()
                            .map(|kind| view! { <option value=*kind>{*kind}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <textarea
                        class=input_class
                        rows="4"
                        placeholder="Tell us about your project..."
                        prop:value=message
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                    {move || {
                        error.get().map(|problem| {
                            view! { <p class="text-sm text-red-400">{problem}</p> }
                        })
                    }}
                    {move || {
                        sent.get()
                            .then(|| {
                                view! {
                                    <p class="text-sm text-emerald-400">
                                        "Thanks! Your enquiry has been recorded. We'll be in touch shortly."
                                    </p>
                                }
                            })
                    }}
                    <button
                        type="submit"
                        class="w-full px-6 py-3 rounded-lg bg-gradient-to-r from-cyan-500 to-emerald-500 text-white font-semibold hover:shadow-xl hover:shadow-cyan-500/30 transition-all"
                    >
                        "Send Enquiry"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected_before_anything_else_happens() {
        assert!(validate("", "a@b.com", "hi").is_some());
        assert!(validate("Ana", "", "hi").is_some());
        assert!(validate("Ana", "a@b.com", "  ").is_some());
        assert!(validate("Ana", "a@b.com", "build me a bridge").is_none());
    }

    #[test]
    fn email_plausibility() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("  user@sub.example.org "));
        assert!(!is_plausible_email("user"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email("user@.com"));
        assert!(!is_plausible_email("user@com."));
    }
}
