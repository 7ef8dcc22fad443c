//! Chat with the AI stylist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::stylist::{
    CHAT_PATH, ChatMessage, ChatRequest, ChatResponse, FAILURE_REPLY, GREETING, Speaker,
};
use crate::ui::http;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn StylistPage() -> impl IntoView {
    let messages = RwSignal::new(vec![ChatMessage::stylist(GREETING)]);
    let input = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move |_| {
        messages.track();
        loading.track();
        #[cfg(not(feature = "ssr"))]
        if let Some(end) = end_ref.get_untracked() {
            end.scroll_into_view();
        }
    });

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() || loading.get_untracked() {
            return;
        }
        // History is everything before this message.
        let body = messages.with_untracked(|previous| ChatRequest::new(&text, previous));
        messages.update(|m| m.push(ChatMessage::user(text)));
        input.set(String::new());
        loading.set(true);

        spawn_local(async move {
            let reply = match http::post_json::<_, ChatResponse>(CHAT_PATH, &body).await {
                Ok(response) => ChatMessage::stylist(response.response),
                Err(_) => ChatMessage::stylist(FAILURE_REPLY),
            };
            messages.update(|m| m.push(reply));
            loading.set(false);
        });
    };

    view! {
        <div class="page stylist-page">
            <section class="panel chat-panel">
                <h1 class="page-title">"🖤 VastraVaani Stylist AI"</h1>

                <div class="chat-window">
                    <For
                        each=move || messages.get()
                        key=|message| message.id
                        children=|message| {
                            let from_user = message.speaker == Speaker::User;
                            view! {
                                <div class="chat-row" class:chat-row-user=from_user>
                                    <div class="chat-bubble" class:chat-bubble-user=from_user>
                                        {message.text}
                                    </div>
                                </div>
                            }
                        }
                    />
                    <Show when=move || loading.get()>
                        <p class="muted chat-typing">"⌛ Your stylist is curating ideas..."</p>
                    </Show>
                    <div node_ref=end_ref></div>
                </div>

                <div class="chat-input">
                    <input
                        type="text"
                        class="input"
                        placeholder="Ask about styling, outfits, or aesthetics..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                send();
                            }
                        }
                    />
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled=move || loading.get() || input.with(|i| i.trim().is_empty())
                        on:click=move |_| send()
                    >
                        <Icon name=icons::SEND class="icon icon-sm"/>
                        "Send"
                    </button>
                </div>
            </section>
        </div>
    }
    .into_any()
}
