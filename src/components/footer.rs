//! Footer Component
//!
//! Shared page footer with link sections and the brand blurb.

use chrono::Datelike;
use leptos::*;
use leptos_router::*;

const FOOTER_SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Platform",
        &[
            ("Home", "/"),
            ("Log Food", "/input"),
            ("Dashboard", "/dashboard"),
            ("AI Insights", "/ai-decisions"),
        ],
    ),
    (
        "Resources",
        &[("About Us", "#"), ("Blog", "#"), ("Partners", "#"), ("Contact", "#")],
    ),
    (
        "Legal",
        &[("Privacy Policy", "#"), ("Terms of Service", "#"), ("Cookie Policy", "#")],
    ),
];

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-50 border-t border-gray-200 pt-12 pb-8">
            <div class="container-custom">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-8">
                    // Brand and description
                    <div class="lg:col-span-2">
                        <A href="/" class="flex items-center space-x-2">
                            <span class="w-10 h-10 rounded-full bg-gradient-to-br from-primary-500 to-secondary-500
                                         flex items-center justify-center text-white font-bold text-xl">
                                "W"
                            </span>
                            <span class="font-bold text-xl text-gradient">"WasteWise"</span>
                        </A>
                        <p class="mt-4 text-gray-600 max-w-md">
                            "An AI-powered platform helping reduce food waste through intelligent tracking, "
                            "prediction, and redistribution of surplus food to those in need."
                        </p>
                    </div>

                    // Link sections
                    {FOOTER_SECTIONS.into_iter().map(|(title, links)| view! {
                        <div class="space-y-4">
                            <h3 class="text-lg font-semibold">{title}</h3>
                            <ul class="space-y-2">
                                {links.iter().map(|(name, path)| view! {
                                    <li>
                                        <A href=*path class="text-gray-600 hover:text-primary-500 transition-colors">
                                            {*name}
                                        </A>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                // Copyright
                <div class="mt-12 pt-6 border-t border-gray-200 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-500 text-sm">
                        {format!("© {} WasteWise. All rights reserved.", year)}
                    </p>
                    <p class="text-gray-500 text-sm mt-2 md:mt-0">
                        "Made with 💚 for a sustainable future"
                    </p>
                </div>
            </div>
        </footer>
    }
}
