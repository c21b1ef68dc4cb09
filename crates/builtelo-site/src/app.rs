//! Application shell and routing

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/builtelo.css"/>
        <Title text="builtelo | Coming Soon"/>
        <Meta
            name="description"
            content="builtelo is building technological innovation. Leave your contact details and get notified at launch."
        />

        <Router>
            <main class="bg-black">
                <Routes>
                    <Route path="/" view=HomePage/>
                    // Everything else lands on the launch page too.
                    <Route path="/*any" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
