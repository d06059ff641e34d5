//! Loading Component
//!
//! Spinners for the boot gate and per-page load gates.

use leptos::*;

/// Full-height page loading state with a caption
#[component]
pub fn PageLoading(
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    view! {
        <div class="pt-24 pb-20 flex justify-center items-center min-h-[60vh]">
            <div class="text-center">
                <div class="loading-spinner w-16 h-16 mx-auto" />
                <p class="mt-4 text-gray-600">{caption}</p>
            </div>
        </div>
    }
}

/// Full-screen branded loader shown before first render
#[component]
pub fn BootLoading() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-white">
            <div class="text-center">
                <div class="loading-spinner w-16 h-16 mx-auto" />
                <h2 class="mt-4 text-xl font-semibold text-gradient">"WasteWise"</h2>
                <p class="mt-2 text-gray-600 animate-pulse">"Loading amazing features..."</p>
            </div>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
