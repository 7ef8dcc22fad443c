use leptos::prelude::*;

/// Horizontal tab strip over a closed set of keys
#[component]
pub fn Tabs<T>(
    /// `(key, label)` in display order
    tabs: Vec<(T, &'static str)>,
    active: RwSignal<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|(key, label)| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab"
                            class:tab-active=move || active.get() == key
                            aria-selected=move || (active.get() == key).to_string()
                            on:click=move |_| active.set(key)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Numbered progress header of a multi-step wizard
#[component]
pub fn StepIndicator(steps: &'static [&'static str], #[prop(into)] current: Signal<usize>) -> impl IntoView {
    view! {
        <ol class="steps">
            {steps
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    let n = i + 1;
                    view! {
                        <li class=move || step_class(current.get(), n)>
                            <span class="step-number">{n}</span>
                            <span class="step-label">{*label}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

fn step_class(current: usize, n: usize) -> &'static str {
    match current.cmp(&n) {
        std::cmp::Ordering::Equal => "step step-active",
        std::cmp::Ordering::Greater => "step step-done",
        std::cmp::Ordering::Less => "step",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_class_tracks_progress() {
        assert_eq!(step_class(2, 1), "step step-done");
        assert_eq!(step_class(2, 2), "step step-active");
        assert_eq!(step_class(2, 3), "step");
    }
}
