//! Score Ring Component
//!
//! SVG circular gauge used for the AI confidence and match score displays.

use leptos::*;

// Circumference of the r=40 gauge circle
const DASH: f64 = 251.2;

/// Circular percentage gauge
#[component]
pub fn ScoreRing(
    /// Value in the 0-100 range
    percent: u8,
    /// Caption shown under the gauge
    #[prop(into)]
    caption: String,
) -> impl IntoView {
    let offset = DASH * (1.0 - percent as f64 / 100.0);

    view! {
        <div>
            <div class="h-32 flex items-center justify-center">
                <div class="relative w-32 h-32">
                    <svg class="w-full h-full" viewBox="0 0 100 100">
                        <circle
                            class="text-gray-200"
                            stroke-width="10"
                            stroke="currentColor"
                            fill="transparent"
                            r="40"
                            cx="50"
                            cy="50"
                        />
                        <circle
                            class="text-secondary-500"
                            stroke-width="10"
                            stroke-dasharray=DASH.to_string()
                            stroke-dashoffset=format!("{:.1}", offset)
                            stroke-linecap="round"
                            stroke="currentColor"
                            fill="transparent"
                            r="40"
                            cx="50"
                            cy="50"
                        />
                    </svg>
                    <div class="absolute top-0 left-0 w-full h-full flex items-center justify-center">
                        <span class="text-2xl font-bold">{format!("{}%", percent)}</span>
                    </div>
                </div>
            </div>
            <p class="text-center text-sm text-gray-600 mt-2">{caption}</p>
        </div>
    }
}
