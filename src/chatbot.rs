//! Floating chat widget.
//!
//! One conversation per page load, one request in flight at a time. A send
//! appends the user message plus a pending placeholder, then exactly one
//! assistant message replaces the placeholder: the shaped reply on success,
//! [`crate::assistant::FALLBACK_MESSAGE`] if the spawned task observes a
//! failure. Open/minimize/close only toggle visibility; the message list
//! survives until the page unloads.

use crate::assistant::{shape_reply, Assistant, ChatTurn, Role, FALLBACK_MESSAGE};
use crate::config::{BOT_NAME, CHAT_PLACEHOLDER, WELCOME_MESSAGE};
use crate::theme::use_theme;
use chrono::{DateTime, Local, Utc};
use leptos::leptos_dom::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Role,
    pub timestamp: DateTime<Utc>,
    pub pending: bool,
}

impl ChatMessage {
    fn new(id: u64, content: String, sender: Role) -> Self {
        Self {
            id,
            content,
            sender,
            timestamp: Utc::now(),
            pending: false,
        }
    }
}

/// Whether a send is accepted: non-blank text and no request in flight.
fn accepts_send(text: &str, busy: bool) -> bool {
    !text.trim().is_empty() && !busy
}

/// Appends the accepted user message and the pending assistant placeholder.
/// Returns the ids consumed so the caller can keep its counter monotonic.
fn push_exchange(messages: &mut Vec<ChatMessage>, text: &str, next_id: u64) -> u64 {
    messages.push(ChatMessage::new(next_id, text.to_owned(), Role::User));
    messages.push(ChatMessage {
        pending: true,
        ..ChatMessage::new(next_id + 1, String::new(), Role::Assistant)
    });
    next_id + 2
}

/// Replaces the pending placeholder with the final assistant reply.
fn resolve_pending(messages: &mut Vec<ChatMessage>, reply: String, id: u64) {
    messages.retain(|message| !message.pending);
    messages.push(ChatMessage::new(id, reply, Role::Assistant));
}

/// Conversation window forwarded to the generator: settled messages only.
fn history(messages: &[ChatMessage]) -> Vec<ChatTurn> {
    messages
        .iter()
        .filter(|message| !message.pending)
        .map(|message| ChatTurn {
            role: message.sender,
            content: message.content.clone(),
        })
        .collect()
}

fn format_time(timestamp: DateTime<Utc>) -> String {
    DateTime::<Local>::from(timestamp).format("%H:%M").to_string()
}

#[component]
pub fn ChatBot() -> impl IntoView {
    let theme = use_theme();
    let assistant = Rc::new(Assistant::from_env());
    let (open, set_open) = create_signal(false);
    let (minimized, set_minimized) = create_signal(false);
    let messages = create_rw_signal(Vec::<ChatMessage>::new());
    let (input, set_input) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (next_id, set_next_id) = create_signal(0u64);

    let open_chat = move |_| {
        set_open.set(true);
        // Synthetic welcome on first open only.
        if messages.with_untracked(|m| m.is_empty()) {
            let id = next_id.get_untracked();
            messages.update(|m| {
                m.push(ChatMessage::new(id, WELCOME_MESSAGE.to_owned(), Role::Assistant))
            });
            set_next_id.set(id + 1);
        }
    };

    let send = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked().trim().to_owned();
        // One in-flight request per session; extra sends are dropped.
        if !accepts_send(&text, busy.get_untracked()) {
            return;
        }
        set_input.set(String::new());
        set_busy.set(true);
        let context = messages.with_untracked(|m| history(m));
        let id = next_id.get_untracked();
        messages.update(|m| {
            set_next_id.set(push_exchange(m, &text, id));
        });
        let assistant = assistant.clone();
        spawn_local(async move {
            let reply = match assistant.reply(&text, &context).await {
                Ok(raw) => shape_reply(&raw),
                Err(err) => {
                    error!("chat reply failed: {err}");
                    FALLBACK_MESSAGE.to_owned()
                }
            };
            let reply_id = next_id.get_untracked();
            set_next_id.set(reply_id + 1);
            messages.update(|m| resolve_pending(m, reply, reply_id));
            set_busy.set(false);
        });
    };
    let send = Callback::new(send);

    view! {
        <Show when=move || !open.get()>
            <button
                class="fixed bottom-5 left-5 z-50 flex items-center justify-center w-16 h-16 rounded-full bg-gradient-to-r from-cyan-500 to-purple-500 text-white shadow-lg shadow-cyan-500/40 hover:scale-110 transition-transform duration-300"
                aria-label="Open AI Assistant"
                on:click=open_chat
            >
                <svg class="w-8 h-8" viewBox="0 0 24 24" fill="none">
                    <path
                        d="M8 10h.01M12 10h.01M16 10h.01M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                    />
                </svg>
            </button>
        </Show>
        <Show when=move || open.get()>
            <div class=move || {
                format!(
                    "fixed bottom-5 left-5 z-50 w-full sm:w-[400px] flex flex-col {} rounded-2xl overflow-hidden {}",
                    theme.glass_card_class(),
                    if minimized.get() { "h-16" } else { "h-[600px] max-h-[calc(100vh-40px)]" },
                )
            }>
                <div class="flex items-center justify-between px-4 py-3 flex-shrink-0 border-b border-cyan-400/20">
                    <div>
                        <h3 class="text-md font-semibold">{BOT_NAME}</h3>
                        <p class="text-xs opacity-60">"AI Assistant"</p>
                    </div>
                    <div class="flex items-center space-x-1">
                        <button
                            class="p-2 rounded-lg hover:bg-white/10 transition-colors"
                            aria-label=move || {
                                if minimized.get() { "Maximize chat" } else { "Minimize chat" }
                            }
                            on:click=move |_| set_minimized.update(|m| *m = !*m)
                        >
                            {move || if minimized.get() { "▲" } else { "▼" }}
                        </button>
                        <button
                            class="p-2 rounded-lg hover:bg-red-500/20 hover:text-red-400 transition-colors"
                            aria-label="Close chat"
                            on:click=move |_| set_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <Show when=move || !minimized.get()>
                    <div class="flex-1 p-4 space-y-4 overflow-y-auto">
                        {move || {
                            messages
                                .get()
                                .into_iter()
                                .map(|message| view! { <ChatBubble message /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <form
                        class="px-4 py-3 border-t border-cyan-400/20 flex-shrink-0"
                        on:submit=move |ev| send.call(ev)
                    >
                        <div class="flex items-center space-x-2">
                            <input
                                type="text"
                                class="w-full px-4 py-2.5 text-sm rounded-lg border border-slate-500/40 bg-transparent focus:outline-none focus:ring-2 focus:ring-cyan-400/50"
                                placeholder=CHAT_PLACEHOLDER
                                prop:value=input
                                disabled=move || busy.get()
                                on:input=move |ev| set_input.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                class="p-2.5 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || busy.get() || input.get().trim().is_empty()
                                aria-label="Send message"
                            >
                                {move || if busy.get() { "…" } else { "➤" }}
                            </button>
                        </div>
                        <p class="mt-2 text-center text-xs opacity-50">"Powered by AI"</p>
                    </form>
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let from_user = message.sender == Role::User;
    let bubble_class = if from_user {
        "px-4 py-2.5 rounded-xl bg-blue-600 text-white"
    } else {
        "px-4 py-2.5 rounded-xl bg-slate-700/70 text-slate-100"
    };
    let body = if message.pending {
        view! {
            <div class="flex items-center space-x-1.5">
                <div class="w-2 h-2 bg-current rounded-full animate-pulse"></div>
                <div class="w-2 h-2 bg-current rounded-full animate-pulse" style="animation-delay: 0.2s"></div>
                <div class="w-2 h-2 bg-current rounded-full animate-pulse" style="animation-delay: 0.4s"></div>
            </div>
        }
        .into_view()
    } else if from_user {
        view! { <p class="text-sm leading-normal whitespace-pre-wrap">{message.content.clone()}</p> }
            .into_view()
    } else {
        // Assistant replies may carry markdown lists.
        let parser = pulldown_cmark::Parser::new(&message.content);
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, parser);
        view! { <div class="text-sm leading-normal" inner_html=html /> }.into_view()
    };
    view! {
        <div class=move || {
            format!("flex {}", if from_user { "justify-end" } else { "justify-start" })
        }>
            <div class="max-w-[80%]">
                <div class=bubble_class>{body}</div>
                <p class=move || {
                    format!(
                        "text-xs mt-1.5 px-2 opacity-50 {}",
                        if from_user { "text-right" } else { "text-left" },
                    )
                }>{format_time(message.timestamp)}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(messages: &[ChatMessage]) -> Vec<(&str, Role)> {
        messages
            .iter()
            .filter(|m| !m.pending)
            .map(|m| (m.content.as_str(), m.sender))
            .collect()
    }

    #[test]
    fn second_send_is_dropped_while_a_request_is_pending() {
        assert!(accepts_send("hello", false));
        assert!(!accepts_send("hello again", true));
        assert!(!accepts_send("   ", false));
        assert!(!accepts_send("", false));
    }

    #[test]
    fn send_appends_user_message_and_placeholder() {
        let mut messages = Vec::new();
        let next = push_exchange(&mut messages, "hello", 0);
        assert_eq!(next, 2);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Role::User);
        assert_eq!(messages[0].content, "hello");
        assert!(!messages[0].pending);
        assert_eq!(messages[1].sender, Role::Assistant);
        assert!(messages[1].pending);
    }

    #[test]
    fn resolving_removes_placeholder_and_appends_one_reply() {
        let mut messages = Vec::new();
        push_exchange(&mut messages, "hello", 0);
        resolve_pending(&mut messages, "hi there".to_owned(), 2);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| !m.pending));
        assert_eq!(
            settled(&messages),
            vec![("hello", Role::User), ("hi there", Role::Assistant)]
        );
    }

    #[test]
    fn failure_path_appends_the_fixed_fallback_exactly_once() {
        let mut messages = Vec::new();
        push_exchange(&mut messages, "hello", 0);
        resolve_pending(&mut messages, FALLBACK_MESSAGE.to_owned(), 2);
        let fallbacks = messages
            .iter()
            .filter(|m| m.content == FALLBACK_MESSAGE)
            .count();
        assert_eq!(fallbacks, 1);
        assert!(messages.iter().all(|m| !m.pending));
    }

    #[test]
    fn history_skips_the_pending_placeholder() {
        let mut messages = vec![ChatMessage::new(0, "welcome".to_owned(), Role::Assistant)];
        push_exchange(&mut messages, "first question", 1);
        let turns = history(&messages);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::Assistant);
        assert_eq!(turns[1].content, "first question");
    }

    #[test]
    fn message_ids_stay_unique_across_exchanges() {
        let mut messages = Vec::new();
        let mut next = 0;
        for text in ["one", "two", "three"] {
            next = push_exchange(&mut messages, text, next);
            resolve_pending(&mut messages, format!("re: {text}"), next);
            next += 1;
        }
        let mut ids: Vec<u64> = messages.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), messages.len());
    }
}
