//! Pre-launch landing page
//!
//! Two full-viewport sections with vertical scroll snapping: the hero
//! reel with the brand copy, then the lead-capture form. The hero's
//! call-to-action smooth-scrolls down to the form.

use leptos::*;

use builtelo_core::FormConfig;

use crate::components::{ArrowButton, LeadCaptureForm};

const FORM_SECTION_ID: &str = "notify-form";

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll_to_form = move |_: ()| {
        if let Some(section) = document().get_element_by_id(FORM_SECTION_ID) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <div class="snap-y snap-mandatory h-screen overflow-y-scroll">
            // Hero: fixed reel behind the brand copy
            <section class="snap-start h-screen relative flex flex-col items-center justify-center">
                <div class="fixed inset-0 -z-10">
                    <video
                        src="/assets/launch-reel.mp4"
                        autoplay=true
                        loop=true
                        muted=true
                        playsinline=true
                        class="w-full h-full object-cover"
                    ></video>
                    <div class="absolute inset-0 bg-gradient-to-t from-black to-transparent"></div>
                </div>

                <div class="text-white text-center space-y-10 px-4">
                    <div>
                        <h1 class="text-7xl lg:text-9xl font-bold">"builtelo."</h1>
                        <p class="text-xl">"We build technological innovation"</p>
                    </div>
                    <div class="max-w-2xl mx-auto text-xl">
                        <h2>"Something is Cooking"</h2>
                        <p>"We're building something amazing together. Watch this space!"</p>
                    </div>
                    <div>
                        <ArrowButton label="Scroll Down" on_press=scroll_to_form/>
                    </div>
                </div>
            </section>

            // Lead capture
            <section
                id=FORM_SECTION_ID
                class="snap-start h-screen flex flex-col items-center justify-center text-white p-10 space-y-6"
            >
                <div class="text-center">
                    <h2 class="text-3xl font-bold">"Stay Updated"</h2>
                    <p>"Get notified on launch and future updates!"</p>
                </div>
                <p class="text-center max-w-md">
                    "Kindly leave us with your contact details, and we promise not to spam you."
                </p>

                <LeadCaptureForm config=FormConfig::from_build_env()/>
            </section>
        </div>
    }
}
