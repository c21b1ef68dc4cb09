//! Call-to-action buttons

use leptos::*;

/// Pill button with a trailing arrow badge that stretches across the
/// button on hover. Used as the hero's scroll cue.
#[component]
pub fn ArrowButton(
    label: &'static str,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="group relative inline-flex h-14 items-center justify-center rounded-full \
                   border-2 border-dashed border-neutral-700 bg-neutral-950 py-1 pl-6 pr-14 \
                   text-neutral-50 transition-colors duration-500 hover:border-neutral-200 \
                   hover:bg-neutral-800"
            on:click=move |_| on_press.call(())
        >
            <span class="z-10 pr-2 font-semibold">{label}</span>
            <div class="absolute right-1 inline-flex h-11 w-12 animate-pulse items-center \
                        justify-end rounded-full bg-sky-100 transition-[width] duration-500 \
                        group-hover:w-[calc(100%-8px)]">
                <svg
                    class="mr-3.5 h-5 w-5 text-black"
                    viewBox="0 0 15 15"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        d="M7.5 2C7.77614 2 8 2.22386 8 2.5V11.2929L11.1464 8.14645C11.3417 7.95118 11.6583 7.95118 11.8536 8.14645C12.0488 8.34171 12.0488 8.65829 11.8536 8.85355L7.85355 12.8536C7.65829 13.0488 7.34171 13.0488 7.14645 12.8536L3.14645 8.85355C2.95118 8.65829 2.95118 8.34171 3.14645 8.14645C3.34171 7.95118 3.65829 7.95118 3.85355 8.14645L7 11.2929V2.5C7 2.22386 7.22386 2 7.5 2Z"
                        fill="currentColor"
                        fill-rule="evenodd"
                        clip-rule="evenodd"
                    ></path>
                </svg>
            </div>
        </button>
    }
}

/// Submit button for the lead-capture form. The label follows the
/// submission state and the control goes inert while a call is in
/// flight, so a second click cannot start another request.
#[component]
pub fn NotifyButton(
    #[prop(into)] label: Signal<&'static str>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || disabled.get()
            class="group relative inline-flex h-12 items-center justify-center overflow-hidden \
                   rounded-full border-2 border-dashed border-neutral-700 bg-neutral-950 px-6 \
                   text-neutral-200 duration-500 hover:border-neutral-200 \
                   disabled:cursor-not-allowed disabled:opacity-60"
        >
            <div class="translate-x-0 font-semibold opacity-100 transition \
                        md:group-hover:-translate-x-[150%] md:group-hover:opacity-0">
                {move || label.get()}
            </div>
            <div class="absolute hidden translate-x-[150%] opacity-0 transition \
                        group-hover:translate-x-0 group-hover:opacity-100 md:block">
                <svg
                    class="h-6 w-6"
                    viewBox="0 0 24 24"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        d="M15.357 20.1758C15.7129 19.6278 15.2374 19 14.584 19H9.41595C8.76251 19 8.28703 19.6278 8.64294 20.1758C9.35604 21.2738 10.5932 22 12 22C13.4067 22 14.6439 21.2738 15.357 20.1758Z"
                        fill="white"
                    ></path>
                    <path
                        d="M20.5858 17H3.40408C2.62863 17 2 16.3714 2 15.5959C2 15.2151 2.15471 14.8506 2.42864 14.586L3.45736 13.5924C3.84919 13.2139 4.06969 12.692 4.06791 12.1473L4.06086 9.99568C4.04641 5.58403 7.61873 2 12.0304 2C16.4319 2 20 5.5681 20 9.96958L20 12.1716C20 12.702 20.2107 13.2107 20.5858 13.5858L21.5858 14.5858C21.851 14.851 22 15.2107 22 15.5858C22 16.3668 21.3668 17 20.5858 17Z"
                        fill="white"
                    ></path>
                </svg>
            </div>
        </button>
    }
}
