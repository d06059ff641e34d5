//! App Root Component
//!
//! Main application component with routing and shared chrome.

use leptos::*;
use leptos_router::*;

use crate::components::loading::BootLoading;
use crate::components::{Footer, Nav};
use crate::pages::{AiDecisions, Dashboard, Home, Input, Messages, Settings};
use crate::timers::view_timeout;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Simulated boot: a single timed gate before first render
    let (booting, set_booting) = create_signal(true);
    view_timeout(1500, move || set_booting.set(false));

    view! {
        {move || {
            if booting.get() {
                view! { <BootLoading /> }.into_view()
            } else {
                view! { <Shell /> }.into_view()
            }
        }}
    }
}

/// Router plus shared header/footer around the active page view
#[component]
fn Shell() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                <Nav />

                <main class="flex-grow">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/input" view=Input />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/ai-decisions" view=AiDecisions />
                        <Route path="/messages" view=Messages />
                        <Route path="/settings" view=Settings />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Fallback view for unknown paths
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="pt-24 pb-20 flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn-primary px-6 py-3">
                "Back to Home"
            </A>
        </div>
    }
}
