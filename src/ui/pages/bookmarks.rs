//! Saved styling notes.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::core::api::bookmarks::{
    ADD_PATH, Bookmark, BookmarkCategory, BookmarkList, LIST_PATH, NewBookmark, delete_path,
};
use crate::core::forms::{PREVIEW_CHARS, truncate_preview, validate_bookmark};
use crate::ui::common::{ErrorMessage, LoadingLabel, OptionSelect, TextAreaField, TextField};
use crate::ui::http;
use crate::ui::icon::{Icon, icons};

async fn fetch_bookmarks(bookmarks: RwSignal<Vec<Bookmark>>) {
    match http::get_json::<BookmarkList>(LIST_PATH, &[]).await {
        Ok(list) => bookmarks.set(list.bookmarks),
        Err(e) => warn!("Error fetching bookmarks: {}", e),
    }
}

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let bookmarks = RwSignal::new(Vec::<Bookmark>::new());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new(BookmarkCategory::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(fetch_bookmarks(bookmarks));
    });

    let add = move |_| {
        let (t, c) = (title.get_untracked(), content.get_untracked());
        if let Err(message) = validate_bookmark(&t, &c) {
            error.set(Some(message));
            return;
        }
        let body = NewBookmark::new(&t, &c, category.get_untracked());

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match http::post_json::<_, Value>(ADD_PATH, &body).await {
                Ok(_) => {
                    title.set(String::new());
                    content.set(String::new());
                    category.set(BookmarkCategory::default());
                    fetch_bookmarks(bookmarks).await;
                }
                Err(e) => error.set(Some(e.detail_or("Error adding bookmark"))),
            }
            loading.set(false);
        });
    };

    let remove = move |index: usize| {
        spawn_local(async move {
            match http::delete(&delete_path(index)).await {
                Ok(()) => fetch_bookmarks(bookmarks).await,
                Err(e) => error.set(Some(e.detail_or("Error deleting bookmark"))),
            }
        });
    };

    view! {
        <div class="page bookmarks-page">
            <h1 class="page-title">"📚 Knowledge Bookmarks"</h1>

            <div class="two-column">
                <section class="panel">
                    <h3>"➕ Save Knowledge"</h3>
                    <TextField label="Title" value=title placeholder="Bookmark Title"/>
                    <TextAreaField
                        label="Content"
                        value=content
                        placeholder="Save your insights or notes..."
                        rows=5
                    />
                    <OptionSelect label="Category" value=category/>
                    <button
                        type="button"
                        class="btn btn-primary btn-block"
                        disabled=move || loading.get()
                        on:click=add
                    >
                        <LoadingLabel loading=loading idle="💾 Save Bookmark" busy="Saving..."/>
                    </button>
                    <ErrorMessage error=error/>
                </section>

                <section class="panel">
                    <h3>{move || format!("📖 My Bookmarks ({})", bookmarks.with(Vec::len))}</h3>
                    <div class="bookmark-list">
                        {move || {
                            let items = bookmarks.get();
                            if items.is_empty() {
                                return view! {
                                    <p class="muted">"No bookmarks yet. Start saving your ideas."</p>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .enumerate()
                                .map(|(index, bookmark)| {
                                    view! {
                                        <article class="card bookmark-card">
                                            <div class="bookmark-header">
                                                <h4>{bookmark.title}</h4>
                                                <button
                                                    type="button"
                                                    class="btn-icon btn-danger-ghost"
                                                    title="Delete bookmark"
                                                    on:click=move |_| remove(index)
                                                >
                                                    <Icon name=icons::TRASH class="icon icon-sm"/>
                                                </button>
                                            </div>
                                            {(!bookmark.category.is_empty())
                                                .then(|| view! { <span class="pill">{bookmark.category}</span> })}
                                            <p class="muted">{truncate_preview(&bookmark.content, PREVIEW_CHARS)}</p>
                                        </article>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </section>
            </div>
        </div>
    }
    .into_any()
}
