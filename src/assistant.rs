//! Completion backend for the chat widget.
//!
//! With an API key configured, prompts go to the Gemini generateContent
//! endpoint under a bounded wait; without one, or on timeout, the
//! keyword-matched canned table answers instead. A hard failure of the
//! remote call is surfaced so the widget can substitute its fixed apology
//! message.

use crate::config::{
    self, CHAT_API_KEY, CHAT_API_URL, CHAT_HISTORY_WINDOW, CHAT_MAX_TOKENS, CHAT_TEMPERATURE,
    CHAT_TIMEOUT_MS,
};
use futures::future::{select, Either};
use leptos::logging::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion request returned status {0}")]
    Status(u16),
    #[error("completion response carried no text")]
    Empty,
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiReplyContent>,
}

#[derive(Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

pub struct Assistant {
    client: reqwest::Client,
    api_url: &'static str,
    api_key: Option<&'static str>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Assistant {
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: CHAT_API_URL,
            api_key: CHAT_API_KEY.filter(|key| !key.trim().is_empty()),
        }
    }

    /// One raw response per call. Without an API key the canned table
    /// answers; a timed-out remote call also falls back to it. A failed
    /// remote call is the caller's problem.
    pub async fn reply(&self, text: &str, history: &[ChatTurn]) -> Result<String, CompletionError> {
        let Some(key) = self.api_key else {
            return Ok(canned_reply(text));
        };
        let prompt = build_prompt(text, history);
        let request = Box::pin(self.complete(key, &prompt));
        let deadline = Box::pin(sleep(CHAT_TIMEOUT_MS));
        let reply = match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                warn!("chat completion timed out after {CHAT_TIMEOUT_MS}ms");
                Ok(canned_reply(text))
            }
        };
        reply
    }

    async fn complete(&self, key: &str, prompt: &str) -> Result<String, CompletionError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_owned(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: CHAT_TEMPERATURE,
                max_output_tokens: CHAT_MAX_TOKENS,
            },
        };
        let response = self
            .client
            .post(format!("{}?key={key}", self.api_url))
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }
        let decoded: GeminiResponse = response.json().await?;
        decoded
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .find(|text| !text.trim().is_empty())
            .ok_or(CompletionError::Empty)
    }
}

/// System instructions, the trailing conversation window, then the new
/// message, as one `User:`/`Assistant:` transcript.
pub fn build_prompt(text: &str, history: &[ChatTurn]) -> String {
    let mut prompt = String::from(system_prompt());
    prompt.push_str("\n\n");
    let start = history.len().saturating_sub(CHAT_HISTORY_WINDOW);
    for turn in &history[start..] {
        let speaker = match turn.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        prompt.push_str(&format!("{speaker}: {}\n", turn.content));
    }
    prompt.push_str(&format!("User: {text}\nAssistant:"));
    prompt
}

fn system_prompt() -> String {
    let company = &config::COMPANY;
    format!(
        "You are {bot}, a helpful AI assistant for {name}, a cutting-edge construction \
company in Sri Lanka specializing in smart buildings and sustainable technology.\n\
\n\
COMPANY INFORMATION:\n\
- {name} has been innovating since {founded}\n\
- Services: Smart commercial spaces, future living homes, digital infrastructure, and adaptive renovation\n\
- Technologies: AI integration, IoT systems, BIM (Building Information Modeling), and green technology\n\
- Notable projects: Colombo Tech Hub 2030, Kandy Green Residences, and Galle Smart Bridge\n\
- Contact: {phone}, {email}\n\
\n\
YOUR ROLE:\n\
- Be helpful, professional, and knowledgeable about construction and technology\n\
- Focus on {name}'s services and capabilities\n\
- Keep responses concise but informative (under 150 words)\n\
- If asked about topics outside construction, politely redirect to construction-related topics\n\
\n\
Remember: you represent {name}'s innovative and forward-thinking brand.",
        bot = config::BOT_NAME,
        name = company.name,
        founded = company.founded,
        phone = company.phone,
        email = company.email,
    )
}

/// Keep at most the first two sentences of a raw reply, splitting on `". "`.
pub fn shape_reply(raw: &str) -> String {
    let mut sentences = raw.split(". ");
    let first = sentences.next().unwrap_or_default();
    match sentences.next() {
        Some(second) => {
            let mut shaped = format!("{first}. {second}");
            if !shaped.ends_with('.') {
                shaped.push('.');
            }
            shaped
        }
        None => first.to_owned(),
    }
}

/// Offline answer table, matched on lowercase keywords in the order listed.
pub fn canned_reply(text: &str) -> String {
    let message = text.to_lowercase();
    let company = &config::COMPANY;
    let matches = |keywords: &[&str]| keywords.iter().any(|keyword| message.contains(keyword));

    if matches(&["hello", "hi", "hey", "start"]) {
        return format!(
            "Hello! I'm {}, your AI helper for all things construction and smart buildings. \
{} has been pioneering innovative building solutions since {}. How can I help you today?",
            config::BOT_NAME,
            company.name,
            company.founded
        );
    }
    if matches(&["service", "what do you do", "offer"]) {
        return "We offer four main services: smart commercial spaces with AI integration, \
future living homes with automation, digital infrastructure for smart cities, and adaptive \
renovation using cutting-edge technology. All our projects focus on sustainability and innovation!"
            .to_owned();
    }
    if matches(&["project", "portfolio", "work"]) {
        return "Our flagship projects include Colombo Tech Hub 2030, an AI-powered smart \
building, Kandy Green Residences with carbon-neutral homes, and the IoT-enabled Galle Smart \
Bridge. Each one showcases our commitment to innovation and sustainability."
            .to_owned();
    }
    if matches(&["technology", "ai", "smart", "iot"]) {
        return "We integrate BIM, IoT automation, AI building management, green tech and \
energy optimization systems. These technologies create buildings that adapt, learn, and evolve \
with their users!"
            .to_owned();
    }
    if matches(&["contact", "phone", "email", "reach"]) {
        return format!(
            "You can reach {} at {} or {}, and visit us at {}. We're here to help with your \
construction and smart building needs!",
            company.name, company.phone, company.email, company.address
        );
    }
    if matches(&["price", "cost", "quote", "budget"]) {
        return format!(
            "Project costs vary with building size, smart technology features, sustainability \
requirements and timeline. I'd recommend contacting our team at {} for a detailed consultation \
and personalized quote.",
            company.phone
        );
    }
    if matches(&["sustainable", "green", "environment", "eco"]) {
        return "Sustainability is core to our mission: renewable energy systems, carbon-neutral \
materials, energy-efficient AI management, vertical gardens and smart water management. Our goal \
is to build the future while protecting our environment."
            .to_owned();
    }
    if matches(&["time", "duration", "how long"]) {
        return "Timelines depend on complexity: residential projects run 6-18 months, commercial \
buildings 12-36 months, infrastructure 18-48 months and renovations 3-12 months. We use advanced \
project management and BIM technology to ensure timely delivery!"
            .to_owned();
    }
    if matches(&["location", "where", "sri lanka"]) {
        return format!(
            "{} operates throughout Sri Lanka, with headquarters in Colombo, a regional office \
in Kandy and a coastal projects division in Galle. We're expanding our smart building expertise \
across the country!",
            company.name
        );
    }
    if matches(&["team", "staff", "engineer", "architect"]) {
        return "Our team includes certified construction engineers, smart building architects, \
IoT and AI specialists, sustainability consultants and project management experts with 25+ years \
of experience."
            .to_owned();
    }
    format!(
        "That's a great question! I'm here to help you learn about {}'s innovative building \
solutions, smart technologies, and sustainable practices. Feel free to ask about our services, \
projects, timelines or costs!",
        company.name
    )
}

/// Fixed message shown when a send fails outright.
pub const FALLBACK_MESSAGE: &str = "I'm experiencing some technical difficulties. Let me try to \
help you with our construction services instead! Feel free to ask about our smart building \
solutions.";

/// Resolves after `ms` milliseconds via the browser's `setTimeout`.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_replies_shrink_to_two_sentences() {
        assert_eq!(
            shape_reply("First point. Second point. Third point. Fourth"),
            "First point. Second point."
        );
    }

    #[test]
    fn short_replies_pass_through() {
        assert_eq!(
            shape_reply("Just one sentence without a period"),
            "Just one sentence without a period"
        );
        assert_eq!(shape_reply("Ends with a period."), "Ends with a period.");
        assert_eq!(shape_reply(""), "");
    }

    #[test]
    fn two_sentence_replies_keep_a_single_terminator() {
        assert_eq!(shape_reply("One. Two."), "One. Two.");
        assert_eq!(shape_reply("One. Two"), "One. Two.");
    }

    #[test]
    fn canned_table_matches_keywords_case_insensitively() {
        assert!(canned_reply("HELLO there").contains("How can I help you today?"));
        assert!(canned_reply("what services do you offer?").contains("four main services"));
        assert!(canned_reply("show me your portfolio").contains("Colombo Tech Hub 2030"));
        assert!(canned_reply("how can I reach you").contains(crate::config::COMPANY.phone));
        assert!(canned_reply("quantum entanglement?").contains("great question"));
    }

    #[test]
    fn contact_reply_uses_the_consolidated_record() {
        let reply = canned_reply("contact");
        assert!(reply.contains(crate::config::COMPANY.email));
        assert!(reply.contains(crate::config::COMPANY.address));
    }

    #[test]
    fn prompt_carries_only_the_trailing_window() {
        let history: Vec<ChatTurn> = (0..8)
            .map(|i| ChatTurn {
                role: if i % 2 == 0 { Role::User } else { Role::Assistant },
                content: format!("turn-{i}"),
            })
            .collect();
        let prompt = build_prompt("latest", &history);
        assert!(!prompt.contains("turn-0"));
        assert!(!prompt.contains("turn-2"));
        assert!(prompt.contains("User: turn-4"));
        assert!(prompt.contains("Assistant: turn-7"));
        assert!(prompt.ends_with("User: latest\nAssistant:"));
        assert!(prompt.contains("COMPANY INFORMATION"));
    }

    #[test]
    fn gemini_response_text_extraction() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi there. More text."}]}}]}"#;
        let decoded: GeminiResponse = serde_json::from_str(body).unwrap();
        let text = decoded
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .find(|text| !text.trim().is_empty());
        assert_eq!(text.as_deref(), Some("Hi there. More text."));
    }
}
