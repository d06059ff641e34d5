//! Home Page
//!
//! Static landing page: hero, feature grid, how-it-works and call to action.

use leptos::*;
use leptos_router::*;

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "📋",
        "Food Surplus Logging",
        "Easily log leftover food with our simple UI form. Track type, quantity, and storage conditions.",
    ),
    (
        "⏱️",
        "AI Spoilage Prediction",
        "Our AI predicts how long food will remain safe based on type, preparation time, and storage method.",
    ),
    (
        "📊",
        "Waste Analytics Dashboard",
        "Track your waste patterns with ML-powered analytics showing most wasted items and trends over time.",
    ),
    (
        "🔄",
        "AI Redistribution Engine",
        "Automatically match surplus food with local NGOs and food banks based on location and preferences.",
    ),
    (
        "💬",
        "LLM-Generated Messages",
        "AI drafts polite messages to NGOs for food pickup, making communication seamless and efficient.",
    ),
    (
        "🧠",
        "Personalized Waste Reduction Tips",
        "Get AI-powered personalized tips based on your waste history to help reduce future waste.",
    ),
];

const STATS: [(&str, &str); 3] = [
    ("85%", "Waste Reduction"),
    ("250+", "Active NGOs"),
    ("10K+", "Meals Saved"),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Log Surplus Food",
        "Use our simple form to log leftover food, including type, quantity, and storage conditions. \
         Optional photo upload helps our AI better analyze your food.",
    ),
    (
        "AI Analyzes & Predicts",
        "Our AI engine analyzes your food data to predict spoilage time and identifies patterns \
         in your food waste to help you make better decisions.",
    ),
    (
        "Connect with NGOs",
        "Our matching engine automatically connects your surplus food with nearby NGOs and food banks, \
         generating polite messages to facilitate easy pickup and delivery.",
    ),
];

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="pt-16">
            <HeroSection />
            <FeaturesSection />
            <HowItWorksSection />
            <CtaSection />
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden py-12 md:py-20">
            <div class="container-custom py-10 md:py-20">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="text-center lg:text-left">
                        <div class="inline-block px-4 py-1 mb-6 rounded-full bg-primary-50 border border-primary-100">
                            <span class="text-primary-600 font-medium text-sm">
                                "AI-Powered Food Management"
                            </span>
                        </div>

                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-6">
                            <span class="text-gradient">"WasteWise"</span>
                            <br />
                            <span class="text-gray-800">"Intelligent Food Waste Optimization"</span>
                        </h1>

                        <p class="text-lg md:text-xl text-gray-600 mb-8 max-w-xl mx-auto lg:mx-0">
                            "Track surplus food, reduce waste, and intelligently redistribute leftovers "
                            "with our cutting-edge AI technology for a more sustainable future."
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <A href="/input" class="btn-primary px-8 py-3 text-base">
                                "Get Started →"
                            </A>
                            <A href="/dashboard" class="btn-outline px-8 py-3 text-base">
                                "View Dashboard"
                            </A>
                        </div>

                        // Product stats strip
                        <div class="mt-12 grid grid-cols-3 gap-4">
                            {STATS.into_iter().map(|(value, label)| view! {
                                <div class="text-center">
                                    <div class="text-2xl md:text-3xl font-bold text-gradient mb-1">{value}</div>
                                    <div class="text-sm text-gray-500">{label}</div>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>

                    // Preview card with floating badges
                    <div class="relative">
                        <div class="relative bg-white p-6 rounded-2xl shadow-card border border-gray-100">
                            <div class="h-64 rounded-lg bg-gradient-to-br from-primary-50 to-secondary-50
                                        flex items-center justify-center text-6xl">
                                "📊"
                            </div>
                        </div>

                        <div class="absolute -top-6 -right-6 bg-white p-4 rounded-xl shadow-card flex items-center gap-3 border border-gray-50">
                            <span class="text-2xl">"⏱️"</span>
                            <div>
                                <p class="text-sm font-medium">"Food Saved"</p>
                                <p class="text-xl font-bold text-primary-600">"24.5 kg"</p>
                            </div>
                        </div>

                        <div class="absolute -bottom-6 -left-6 bg-white p-4 rounded-xl shadow-card flex items-center gap-3 border border-gray-50">
                            <span class="text-2xl">"🔄"</span>
                            <div>
                                <p class="text-sm font-medium">"NGOs Connected"</p>
                                <p class="text-xl font-bold text-secondary-600">"12"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-gradient-to-b from-white to-gray-50">
            <div class="container-custom">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <div class="inline-block px-4 py-1 mb-6 rounded-full bg-secondary-50 border border-secondary-100">
                        <span class="text-secondary-600 font-medium text-sm">"Cutting-Edge Features"</span>
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"Powered by AI, Driven by Purpose"</h2>
                    <p class="text-xl text-gray-600">
                        "Our platform combines cutting-edge AI technology with a mission to reduce "
                        "food waste and help those in need."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES.into_iter().map(|(icon, title, description)| view! {
                        <div class="card p-8 rounded-2xl border border-gray-100 bg-white">
                            <div class="w-16 h-16 rounded-2xl bg-gray-50 flex items-center justify-center mb-6 text-3xl">
                                {icon}
                            </div>
                            <h3 class="text-xl font-semibold mb-3">{title}</h3>
                            <p class="text-gray-600">{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-white">
            <div class="container-custom">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <div class="inline-block px-4 py-1 mb-6 rounded-full bg-accent-50 border border-accent-100">
                        <span class="text-accent-600 font-medium text-sm">"Simple Process"</span>
                    </div>
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"How WasteWise Works"</h2>
                    <p class="text-xl text-gray-600">
                        "Our intelligent platform makes it easy to track, analyze, and redistribute surplus food."
                    </p>
                </div>

                <div class="space-y-16 max-w-3xl mx-auto">
                    {STEPS.into_iter().enumerate().map(|(i, (title, description))| view! {
                        <div class="flex items-start gap-6">
                            <div class="flex-shrink-0 flex items-center justify-center w-16 h-16 rounded-full
                                        bg-gradient-to-br from-primary-500 to-primary-600 text-white font-bold text-xl">
                                {i + 1}
                            </div>
                            <div>
                                <h3 class="text-2xl font-bold mb-4">{title}</h3>
                                <p class="text-lg text-gray-600">{description}</p>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-br from-primary-600 to-secondary-700">
            <div class="container-custom text-center">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6 text-white">"Ready to Reduce Food Waste?"</h2>
                    <p class="text-xl mb-10 text-white/90">
                        "Join WasteWise today and be part of the solution to global food waste. "
                        "Every meal saved counts!"
                    </p>
                    <A
                        href="/input"
                        class="inline-block bg-white text-primary-600 px-10 py-4 rounded-xl font-semibold shadow-xl"
                    >
                        "Get Started Now"
                    </A>
                    <div class="mt-8">
                        <span class="text-white/70 text-sm">"No credit card required • Free signup"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
