use leptos::prelude::*;

use crate::core::api::OptionSet;

/// Labelled text input bound to a string signal
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    /// Input type (text, password, email, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = false)] required: bool,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">
                {label}
                {required.then(|| view! { <span class="field-required">"*"</span> })}
            </span>
            <input
                type=input_type
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea
                class="input textarea"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Select over free-form string options
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="input select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let selected = value.get_untracked() == val;
                            view! { <option value=val selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Select over a closed [`OptionSet`]
#[component]
pub fn OptionSelect<T>(label: &'static str, value: RwSignal<T>) -> impl IntoView
where
    T: OptionSet + Send + Sync,
{
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="input select"
                prop:value=move || value.get().key()
                on:change=move |ev| {
                    if let Some(choice) = T::from_key(&event_target_value(&ev)) {
                        value.set(choice);
                    }
                }
            >
                {T::ALL
                    .iter()
                    .map(|choice| {
                        let choice = *choice;
                        view! {
                            <option value=choice.key() selected=move || value.get() == choice>
                                {choice.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// `&'static str` choices shown with their first letter capitalized
pub fn str_options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| {
            let mut chars = v.chars();
            let label = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            (v.to_string(), label)
        })
        .collect()
}

#[component]
pub fn CheckboxField(label: &'static str, checked: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_options_capitalize() {
        assert_eq!(
            str_options(&["summer", "all-season"]),
            vec![
                ("summer".to_string(), "Summer".to_string()),
                ("all-season".to_string(), "All-season".to_string()),
            ]
        );
    }
}
