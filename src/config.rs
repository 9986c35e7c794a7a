//! Site-wide configuration.
//!
//! Every component reads contact details from the single [`COMPANY`] record
//! so the site never shows two different phone numbers. Remote endpoints and
//! API keys come from compile-time environment variables; the deployed
//! bundle carries no secrets by default.

pub struct Company {
    pub name: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub founded: &'static str,
}

pub const COMPANY: Company = Company {
    name: "CB Construction",
    tagline: "Building the future with smart, sustainable construction",
    phone: "+94 77 352 8200",
    email: "future@cbconstruction.lk",
    address: "123 Future Avenue, Colombo 03, Sri Lanka",
    founded: "1999",
};

/// Supabase project REST root, e.g. `https://xyz.supabase.co`.
pub const SUPABASE_URL: Option<&str> = option_env!("SUPABASE_URL");
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("SUPABASE_ANON_KEY");

/// Gemini generateContent endpoint. Without a key the assistant answers
/// from the canned-reply table only.
pub const CHAT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent";
pub const CHAT_API_KEY: Option<&str> = option_env!("CHATBOT_API_KEY");
pub const CHAT_MAX_TOKENS: u32 = 150;
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Turns of prior conversation forwarded with each completion request.
pub const CHAT_HISTORY_WINDOW: usize = 5;
/// Bounded wait for the completion call before falling back locally.
pub const CHAT_TIMEOUT_MS: i32 = 10_000;

pub const BOT_NAME: &str = "CB Assistant";
pub const WELCOME_MESSAGE: &str =
    "Hello! I'm CB Assistant, your construction AI helper. How can I assist you today?";
pub const CHAT_PLACEHOLDER: &str =
    "Ask me about our services, projects, or anything construction-related...";

/// Same-origin path of the authentication API.
pub const AUTH_API_PATH: &str = "/api/auth";

/// Cookie lifetime for the signed-in session.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Page-number buttons rendered at once (odd, so windows center cleanly).
pub const MAX_PAGE_BUTTONS: usize = 5;
