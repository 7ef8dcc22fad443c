//! Image picking with a local preview.
//!
//! The picked file lives in a local (non-`Send`) signal because it wraps a
//! browser `File`; create holders with `RwSignal::new_local`.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::core::api::{ApiError, ApiResult};
use crate::ui::icon::{Icon, icons};

#[derive(Debug, Clone)]
pub struct PickedFile {
    pub name: String,
    /// `blob:` URL for `<img>` previews
    pub preview_url: String,
    #[cfg(not(feature = "ssr"))]
    pub file: web_sys::File,
}

#[cfg(not(feature = "ssr"))]
impl PickedFile {
    pub fn from_file(file: web_sys::File) -> Option<Self> {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).ok()?;
        Some(Self {
            name: file.name(),
            preview_url,
            file,
        })
    }

    /// Multipart body with the file under `field` plus extra text fields
    pub fn form_data(
        &self,
        field: &str,
        extra: &[(&str, &str)],
    ) -> ApiResult<web_sys::FormData> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Request("Failed to prepare upload".to_string()))?;
        form.append_with_blob_and_filename(field, &self.file, &self.name)
            .map_err(|_| ApiError::Request("Failed to attach file".to_string()))?;
        for (key, value) in extra {
            form.append_with_str(key, value)
                .map_err(|_| ApiError::Request("Failed to prepare upload".to_string()))?;
        }
        Ok(form)
    }

    /// Free the preview URL
    pub fn release(&self) {
        let _ = web_sys::Url::revoke_object_url(&self.preview_url);
    }
}

#[cfg(feature = "ssr")]
impl PickedFile {
    pub fn release(&self) {}
}

/// Send the file under `field` as a multipart POST
#[cfg(not(feature = "ssr"))]
pub async fn upload<T: serde::de::DeserializeOwned>(
    file: &PickedFile,
    path: &str,
    field: &str,
    extra: &[(&str, &str)],
    timeout_ms: Option<u32>,
) -> ApiResult<T> {
    let form = file.form_data(field, extra)?;
    crate::ui::http::post_multipart(path, form, timeout_ms).await
}

#[cfg(feature = "ssr")]
pub async fn upload<T: serde::de::DeserializeOwned>(
    _file: &PickedFile,
    _path: &str,
    _field: &str,
    _extra: &[(&str, &str)],
    _timeout_ms: Option<u32>,
) -> ApiResult<T> {
    Err(ApiError::Request("Uploads need a browser".to_string()))
}

/// Click-to-upload zone for a single image
#[component]
pub fn FilePicker(
    /// Current file, used for the preview
    file: RwSignal<Option<PickedFile>, LocalStorage>,
    #[prop(default = "Click to upload an image")] prompt: &'static str,
    #[prop(default = "PNG or JPG")] hint: &'static str,
    #[prop(default = "image/*")] accept: &'static str,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(not(feature = "ssr"))]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let picked = input
                .files()
                .and_then(|list| list.get(0))
                .and_then(PickedFile::from_file);
            if let Some(picked) = picked {
                if let Some(previous) = file.get_untracked() {
                    previous.release();
                }
                file.set(Some(picked));
            }
            // Allow picking the same file again.
            input.set_value("");
        }
        #[cfg(feature = "ssr")]
        let _ = ev;
    };

    view! {
        <label class="upload-zone" class:upload-zone-filled=move || file.with(|f| f.is_some())>
            <input type="file" accept=accept class="visually-hidden" on:change=on_change/>
            {move || match file.get() {
                Some(picked) => view! {
                    <img class="upload-preview" src=picked.preview_url.clone() alt=picked.name.clone()/>
                    <span class="upload-name">{picked.name}</span>
                }
                .into_any(),
                None => view! {
                    <Icon name=icons::UPLOAD class="icon icon-lg"/>
                    <span class="upload-prompt">{prompt}</span>
                    <span class="muted">{hint}</span>
                }
                .into_any(),
            }}
        </label>
    }
}
