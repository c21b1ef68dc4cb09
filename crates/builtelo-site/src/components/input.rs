//! Form text input with inline error line

use leptos::*;

#[component]
pub fn TextInput(
    placeholder: &'static str,
    input_type: &'static str,
    name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_leave: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="w-full max-w-md">
            <input
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                class=move || {
                    if error.get().is_some() {
                        "w-full rounded-[20px] border border-red-500 bg-sky-100 px-4 py-3 \
                         text-black placeholder-neutral-400 focus:outline-none focus:ring-2 \
                         focus:ring-red-500"
                    } else {
                        "w-full rounded-[20px] bg-sky-100 px-4 py-3 text-black \
                         placeholder-neutral-400 focus:outline-none focus:ring-2 \
                         focus:ring-blue-500"
                    }
                }
                on:input=move |ev| on_edit.call(event_target_value(&ev))
                on:blur=move |_| on_leave.call(())
            />
            <Show when=move || error.get().is_some()>
                <p class="mt-1 text-left text-sm text-red-500">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
