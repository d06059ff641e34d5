//! Messages Page
//!
//! NGO pickup messages held in page-local state, seeded once from the
//! fixture after a simulated load. Filter, edit, send and delete are pure
//! local transitions; nothing leaves the view and a reload discards edits.

use leptos::*;

use crate::components::loading::PageLoading;
use crate::fixtures::messages::{seed_messages, Message, MessageStatus};
use crate::timers::view_timeout;

/// Status filter over the message list
#[derive(Clone, Copy, PartialEq, Eq)]
enum StatusFilter {
    All,
    Draft,
    Pending,
    Sent,
}

impl StatusFilter {
    const ALL: [StatusFilter; 4] =
        [StatusFilter::All, StatusFilter::Draft, StatusFilter::Pending, StatusFilter::Sent];

    fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Draft => "Drafts",
            StatusFilter::Pending => "Pending",
            StatusFilter::Sent => "Sent",
        }
    }

    fn empty_text(&self) -> &'static str {
        match self {
            StatusFilter::All => "You don't have any messages yet.",
            StatusFilter::Draft => "You don't have any draft messages.",
            StatusFilter::Pending => "You don't have any pending messages.",
            StatusFilter::Sent => "You don't have any sent messages.",
        }
    }

    fn matches(&self, message: &Message) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => message.status == MessageStatus::Draft,
            StatusFilter::Pending => message.status == MessageStatus::Pending,
            StatusFilter::Sent => message.status == MessageStatus::Sent,
        }
    }
}

/// Non-destructive subset of the list for the active filter
fn filter_messages(messages: &[Message], filter: StatusFilter) -> Vec<Message> {
    messages.iter().filter(|m| filter.matches(m)).cloned().collect()
}

/// Commit an edit: replace the stored text of the message with `id`
fn save_edit(messages: &mut [Message], id: u32, text: &str) {
    if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
        message.text = text.to_string();
    }
}

/// Send a draft: the only transition is draft -> pending. Pending and sent
/// messages are left untouched; no further automatic transition exists in
/// this layer.
fn send_draft(messages: &mut [Message], id: u32) {
    if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
        if message.status == MessageStatus::Draft {
            message.status = MessageStatus::Pending;
        }
    }
}

/// Remove a message unconditionally, no confirmation, no undo
fn delete_message(messages: &mut Vec<Message>, id: u32) {
    messages.retain(|m| m.id != id);
}

/// Messages page component
#[component]
pub fn Messages() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let messages = create_rw_signal(Vec::<Message>::new());
    let (filter, set_filter) = create_signal(StatusFilter::All);
    // Single edit slot: opening a second editor replaces the first
    let editing_id = create_rw_signal(None::<u32>);
    let edit_text = create_rw_signal(String::new());

    // Simulated load, then seed the local list once
    view_timeout(1200, move || {
        messages.set(seed_messages());
        set_loading.set(false);
    });

    view! {
        {move || {
            if loading.get() {
                view! { <PageLoading caption="Loading messages..." /> }.into_view()
            } else {
                view! {
                    <div class="pt-24 pb-20">
                        <div class="container-custom">
                            <div class="text-center max-w-3xl mx-auto mb-10">
                                <h1 class="text-3xl md:text-4xl font-bold mb-4">"NGO Messages"</h1>
                                <p class="text-xl text-gray-600">
                                    "View, edit and send AI-generated messages to NGOs for food pickup"
                                </p>
                            </div>

                            // Filter controls
                            <div class="flex justify-between items-center mb-6">
                                <div class="flex items-center space-x-2 bg-white rounded-lg shadow-sm p-1">
                                    {StatusFilter::ALL.into_iter().map(|f| view! {
                                        <button
                                            on:click=move |_| set_filter.set(f)
                                            class=move || {
                                                let base =
                                                    "px-4 py-2 rounded-md text-sm font-medium transition-colors";
                                                if filter.get() == f {
                                                    format!("{} bg-accent-100 text-accent-700", base)
                                                } else {
                                                    format!("{} text-gray-600 hover:bg-gray-100", base)
                                                }
                                            }
                                        >
                                            {f.label()}
                                        </button>
                                    }).collect_view()}
                                </div>

                                <div class="flex items-center">
                                    <span class="text-gray-500 mr-2">"Sort by:"</span>
                                    <select class="bg-white border border-gray-300 rounded-md px-3 py-1.5 text-sm">
                                        <option>"Newest first"</option>
                                        <option>"Oldest first"</option>
                                        <option>"NGO name"</option>
                                    </select>
                                </div>
                            </div>

                            // Message list
                            <div class="space-y-6">
                                {move || {
                                    let visible = messages.with(|m| filter_messages(m, filter.get()));
                                    if visible.is_empty() {
                                        view! {
                                            <div class="text-center py-10 bg-white rounded-xl shadow-card">
                                                <div class="text-5xl text-gray-300">"💬"</div>
                                                <h3 class="mt-4 text-gray-500">{filter.get().empty_text()}</h3>
                                            </div>
                                        }.into_view()
                                    } else {
                                        visible.into_iter().map(|message| view! {
                                            <MessageCard
                                                message=message
                                                messages=messages
                                                editing_id=editing_id
                                                edit_text=edit_text
                                            />
                                        }).collect_view()
                                    }
                                }}
                            </div>

                            // Generation banner
                            <div class="mt-12 bg-gradient-to-br from-accent-500 to-accent-600 rounded-xl
                                        shadow-card p-8 text-white">
                                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                                    <div class="mb-6 md:mb-0">
                                        <h2 class="text-2xl font-bold mb-2">"Generate New Messages"</h2>
                                        <p class="opacity-90">
                                            "Let our AI draft personalized messages for your surplus food items"
                                        </p>
                                    </div>
                                    <button class="bg-white text-accent-600 px-6 py-3 rounded-lg font-medium shadow-lg">
                                        "Create New Message"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn MessageCard(
    message: Message,
    messages: RwSignal<Vec<Message>>,
    editing_id: RwSignal<Option<u32>>,
    edit_text: RwSignal<String>,
) -> impl IntoView {
    let id = message.id;
    let status = message.status;
    let text_for_edit = message.text.clone();

    let start_edit = move |_| {
        editing_id.set(Some(id));
        edit_text.set(text_for_edit.clone());
    };
    let commit_edit = move |_| {
        messages.update(|m| save_edit(m, id, &edit_text.get()));
        editing_id.set(None);
    };
    let cancel_edit = move |_| editing_id.set(None);
    let send = move |_| messages.update(|m| send_draft(m, id));
    let delete = move |_| messages.update(|m| delete_message(m, id));

    view! {
        <div class="bg-white rounded-xl shadow-card overflow-hidden">
            // Card header
            <div class="border-b border-gray-100 p-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div class="flex items-center mb-4 md:mb-0">
                        <div class="w-10 h-10 rounded-full bg-accent-100 flex items-center justify-center mr-3">
                            "💬"
                        </div>
                        <div>
                            <h3 class="font-semibold text-lg">{message.ngo}</h3>
                            <p class="text-sm text-gray-600">{message.food}</p>
                        </div>
                    </div>
                    <div class="flex items-center space-x-3">
                        <span class=format!(
                            "px-3 py-1 rounded-full text-xs font-medium {}",
                            status.badge_class()
                        )>
                            {status.label()}
                        </span>
                        <span class="text-sm text-gray-500">
                            {message.timestamp.format("%Y-%m-%d %H:%M").to_string()}
                        </span>
                    </div>
                </div>
            </div>

            <div class="p-6">
                {move || {
                    if editing_id.get() == Some(id) {
                        // Edit mode: stage text in the scratch buffer
                        view! {
                            <div class="space-y-4">
                                <textarea
                                    prop:value=move || edit_text.get()
                                    on:input=move |ev| edit_text.set(event_target_value(&ev))
                                    class="w-full border border-gray-300 rounded-lg p-4 min-h-[120px]"
                                />
                                <div class="flex justify-end space-x-3">
                                    <button
                                        on:click=cancel_edit.clone()
                                        class="px-4 py-2 border border-gray-300 rounded-lg text-gray-700
                                               hover:bg-gray-50 transition-colors"
                                    >
                                        "✕ Cancel"
                                    </button>
                                    <button
                                        on:click=commit_edit.clone()
                                        class="px-4 py-2 bg-accent-500 text-white rounded-lg
                                               hover:bg-accent-600 transition-colors"
                                    >
                                        "✓ Save"
                                    </button>
                                </div>
                            </div>
                        }.into_view()
                    } else {
                        let current_text = messages
                            .with(|m| m.iter().find(|m| m.id == id).map(|m| m.text.clone()))
                            .unwrap_or_default();

                        view! {
                            <div>
                                <p class="text-gray-800 mb-6">{current_text}</p>

                                {message.response.map(|response| view! {
                                    <div class="bg-gray-50 rounded-lg p-4 mb-6 border-l-4 border-green-500">
                                        <h4 class="font-medium mb-2 text-green-700">
                                            {format!("Response from {}:", message.ngo)}
                                        </h4>
                                        <p class="text-gray-700">{response}</p>
                                    </div>
                                })}

                                <div class="flex justify-end space-x-3">
                                    {(status == MessageStatus::Draft).then(|| view! {
                                        <button
                                            on:click=start_edit.clone()
                                            class="px-4 py-2 border border-gray-300 rounded-lg text-gray-700
                                                   hover:bg-gray-50 transition-colors"
                                        >
                                            "✏️ Edit"
                                        </button>
                                        <button
                                            on:click=send
                                            class="px-4 py-2 bg-accent-500 text-white rounded-lg
                                                   hover:bg-accent-600 transition-colors"
                                        >
                                            "📤 Send"
                                        </button>
                                    })}
                                    {(status == MessageStatus::Pending).then(|| view! {
                                        <button
                                            on:click=start_edit.clone()
                                            class="px-4 py-2 border border-gray-300 rounded-lg text-gray-700
                                                   hover:bg-gray-50 transition-colors"
                                        >
                                            "✏️ Edit"
                                        </button>
                                    })}
                                    <button
                                        on:click=delete
                                        class="px-4 py-2 border border-gray-300 rounded-lg text-red-600
                                               hover:bg-red-50 transition-colors"
                                    >
                                        "🗑️ Delete"
                                    </button>
                                </div>
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_draft_returns_exactly_the_draft() {
        let messages = seed_messages();
        let drafts = filter_messages(&messages, StatusFilter::Draft);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].status, MessageStatus::Draft);
    }

    #[test]
    fn test_filter_all_is_non_destructive() {
        let messages = seed_messages();
        assert_eq!(filter_messages(&messages, StatusFilter::All).len(), messages.len());
    }

    #[test]
    fn test_send_moves_draft_to_pending_filter() {
        let mut messages = seed_messages();
        let draft_id = messages
            .iter()
            .find(|m| m.status == MessageStatus::Draft)
            .map(|m| m.id)
            .unwrap();

        send_draft(&mut messages, draft_id);

        assert!(filter_messages(&messages, StatusFilter::Draft).is_empty());
        assert!(filter_messages(&messages, StatusFilter::Pending)
            .iter()
            .any(|m| m.id == draft_id));
    }

    #[test]
    fn test_send_leaves_pending_and_sent_untouched() {
        let mut messages = seed_messages();
        for status in [MessageStatus::Pending, MessageStatus::Sent] {
            let id = messages.iter().find(|m| m.status == status).map(|m| m.id).unwrap();
            send_draft(&mut messages, id);
            assert_eq!(messages.iter().find(|m| m.id == id).unwrap().status, status);
        }
    }

    #[test]
    fn test_delete_removes_from_every_filter() {
        let mut messages = seed_messages();
        let id = messages[0].id;

        delete_message(&mut messages, id);

        for filter in StatusFilter::ALL {
            assert!(!filter_messages(&messages, filter).iter().any(|m| m.id == id));
        }
    }

    #[test]
    fn test_save_edit_replaces_stored_text() {
        let mut messages = seed_messages();
        let id = messages[1].id;

        save_edit(&mut messages, id, "Updated pickup details");

        assert_eq!(messages.iter().find(|m| m.id == id).unwrap().text, "Updated pickup details");
    }
}
