//! AI Decisions Page
//!
//! Two tabs over fixture data: spoilage predictions per food item, and NGO
//! matching. Selecting a list entry drives a detail panel; the only derived
//! value is the hours-to-days label.

use leptos::*;

use crate::components::loading::PageLoading;
use crate::components::{FactorList, ScoreRing};
use crate::fixtures::food::{food_items, FoodItem};
use crate::fixtures::ngos::{ngo_list, pickup_message, Ngo};
use crate::timers::view_timeout;

/// Fixed confidence shown for every spoilage prediction
const PREDICTION_CONFIDENCE: u8 = 85;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Spoilage,
    Matching,
}

/// AI decisions page component
#[component]
pub fn AiDecisions() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (tab, set_tab) = create_signal(Tab::Spoilage);
    let selected_food = create_rw_signal(None::<FoodItem>);
    let selected_ngo = create_rw_signal(None::<Ngo>);

    // Simulated data loading
    view_timeout(1200, move || set_loading.set(false));

    // Switching tabs drops the current selection
    let choose_tab = move |t: Tab| {
        set_tab.set(t);
        selected_food.set(None);
        selected_ngo.set(None);
    };

    view! {
        {move || {
            if loading.get() {
                view! { <PageLoading caption="Loading AI insights..." /> }.into_view()
            } else {
                view! {
                    <div class="pt-24 pb-20">
                        <div class="container-custom">
                            <div class="text-center max-w-3xl mx-auto mb-10">
                                <h1 class="text-3xl md:text-4xl font-bold mb-4">"AI Decision Insights"</h1>
                                <p class="text-xl text-gray-600">
                                    "See how our AI predicts food spoilage and matches surplus food with NGOs"
                                </p>
                            </div>

                            // Tabs
                            <div class="flex justify-center mb-8">
                                <div class="bg-white rounded-lg shadow-sm p-1 inline-flex">
                                    <TabButton
                                        label="⏱️ Spoilage Prediction"
                                        active=Signal::derive(move || tab.get() == Tab::Spoilage)
                                        on_click=move |_| choose_tab(Tab::Spoilage)
                                    />
                                    <TabButton
                                        label="👥 NGO Matching"
                                        active=Signal::derive(move || tab.get() == Tab::Matching)
                                        on_click=move |_| choose_tab(Tab::Matching)
                                    />
                                </div>
                            </div>

                            {move || match tab.get() {
                                Tab::Spoilage => view! { <SpoilageTab selected=selected_food /> }.into_view(),
                                Tab::Matching => view! { <MatchingTab selected=selected_ngo /> }.into_view(),
                            }}
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn TabButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-6 py-2 rounded-md text-sm font-medium transition-colors";
                if active.get() {
                    format!("{} bg-secondary-100 text-secondary-700", base)
                } else {
                    format!("{} text-gray-600 hover:bg-gray-100", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn SpoilageTab(selected: RwSignal<Option<FoodItem>>) -> impl IntoView {
    let items = food_items();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            // Food items list
            <div class="lg:col-span-1">
                <div class="bg-white rounded-xl shadow-card p-6">
                    <h2 class="text-xl font-semibold mb-4">"📦 Food Items"</h2>
                    <div class="space-y-4">
                        {items.into_iter().map(|item| {
                            let item_id = item.id;
                            let on_select = item.clone();
                            view! {
                                <div
                                    on:click=move |_| selected.set(Some(on_select.clone()))
                                    class=move || {
                                        let base = "p-4 rounded-lg cursor-pointer transition-all";
                                        let is_selected = selected
                                            .with(|s| s.as_ref().map(|f| f.id) == Some(item_id));
                                        if is_selected {
                                            format!("{} bg-secondary-50 border-2 border-secondary-200", base)
                                        } else {
                                            format!(
                                                "{} bg-gray-50 hover:bg-gray-100 border border-gray-200",
                                                base
                                            )
                                        }
                                    }
                                >
                                    <div class="flex justify-between items-start">
                                        <div>
                                            <h3 class="font-medium">{item.name}</h3>
                                            <p class="text-sm text-gray-600">
                                                {format!("{} • {}", item.kind, item.quantity)}
                                            </p>
                                        </div>
                                        <div class=format!(
                                            "px-2 py-1 rounded-full text-xs font-medium {}",
                                            item.freshness_class()
                                        )>
                                            {item.time_left()}
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Prediction details
            <div class="lg:col-span-2">
                {move || match selected.get() {
                    Some(item) => view! { <FoodDetail item=item /> }.into_view(),
                    None => view! {
                        <EmptyState
                            icon="⏱️"
                            title="Select a Food Item"
                            text="Choose a food item from the list to see detailed AI spoilage \
                                  predictions and analysis."
                        />
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn FoodDetail(item: FoodItem) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-card overflow-hidden">
            // Banner
            <div class="bg-secondary-500 text-white p-6">
                <div class="flex justify-between items-start">
                    <div>
                        <h2 class="text-2xl font-bold">{item.name}</h2>
                        <p class="opacity-90">{format!("{} • {}", item.kind, item.quantity)}</p>
                    </div>
                    <div class="bg-white text-secondary-700 rounded-full px-4 py-2 text-sm font-bold">
                        {item.time_left()}
                    </div>
                </div>
            </div>

            <div class="p-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                    // Storage conditions
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"🌡️ Storage Conditions"</h3>
                        <div class="space-y-4">
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Storage Method:"</span>
                                <span class="font-medium">{item.storage}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Temperature:"</span>
                                <span class="font-medium">{item.temperature}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">{item.prepared_label()}</span>
                                <span class="font-medium">
                                    {item.prepared_at.format("%b %d, %Y %H:%M").to_string()}
                                </span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Predicted Spoilage:"</span>
                                <span class="font-medium">
                                    {item.spoils_at.format("%b %d, %Y %H:%M").to_string()}
                                </span>
                            </div>
                        </div>
                    </div>

                    // Confidence ring
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"🧠 AI Confidence"</h3>
                        <ScoreRing
                            percent=PREDICTION_CONFIDENCE
                            caption="AI prediction confidence based on historical data and food characteristics"
                        />
                    </div>
                </div>

                <div>
                    <h3 class="text-lg font-semibold mb-4">"🧠 Factors Influencing Prediction"</h3>
                    <FactorList factors=item.factors />
                </div>
            </div>
        </div>
    }
}

#[component]
fn MatchingTab(selected: RwSignal<Option<Ngo>>) -> impl IntoView {
    let ngos = ngo_list();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            // NGO list
            <div class="lg:col-span-1">
                <div class="bg-white rounded-xl shadow-card p-6">
                    <h2 class="text-xl font-semibold mb-4">"👥 Matched NGOs"</h2>
                    <div class="space-y-4">
                        {ngos.into_iter().map(|ngo| {
                            let ngo_id = ngo.id;
                            let on_select = ngo.clone();
                            view! {
                                <div
                                    on:click=move |_| selected.set(Some(on_select.clone()))
                                    class=move || {
                                        let base = "p-4 rounded-lg cursor-pointer transition-all";
                                        let is_selected = selected
                                            .with(|s| s.as_ref().map(|n| n.id) == Some(ngo_id));
                                        if is_selected {
                                            format!("{} bg-secondary-50 border-2 border-secondary-200", base)
                                        } else {
                                            format!(
                                                "{} bg-gray-50 hover:bg-gray-100 border border-gray-200",
                                                base
                                            )
                                        }
                                    }
                                >
                                    <div class="flex justify-between items-start">
                                        <div>
                                            <h3 class="font-medium">{ngo.name}</h3>
                                            <p class="text-sm text-gray-600">
                                                {format!("{} • Available until {}", ngo.distance, ngo.available_until)}
                                            </p>
                                        </div>
                                        <div class="bg-secondary-100 text-secondary-800 px-2 py-1 rounded-full
                                                    text-xs font-medium">
                                            {format!("{}% Match", ngo.match_score)}
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </div>

            // Match details
            <div class="lg:col-span-2">
                {move || match selected.get() {
                    Some(ngo) => view! { <NgoDetail ngo=ngo /> }.into_view(),
                    None => view! {
                        <EmptyState
                            icon="👥"
                            title="Select an NGO"
                            text="Choose an NGO from the list to see detailed AI matching analysis \
                                  and generated messages."
                        />
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn NgoDetail(ngo: Ngo) -> impl IntoView {
    let message = pickup_message(&ngo);

    view! {
        <div class="bg-white rounded-xl shadow-card overflow-hidden">
            // Banner
            <div class="bg-secondary-500 text-white p-6">
                <div class="flex justify-between items-start">
                    <div>
                        <h2 class="text-2xl font-bold">{ngo.name}</h2>
                        <p class="opacity-90">
                            {format!("{} • Available until {}", ngo.distance, ngo.available_until)}
                        </p>
                    </div>
                    <div class="bg-white text-secondary-700 rounded-full px-4 py-2 text-sm font-bold">
                        {format!("{}% Match", ngo.match_score)}
                    </div>
                </div>
            </div>

            <div class="p-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                    // NGO details
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"📍 NGO Details"</h3>
                        <div class="space-y-4">
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Distance:"</span>
                                <span class="font-medium">{ngo.distance}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Available Until:"</span>
                                <span class="font-medium">{ngo.available_until}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Minimum Quantity:"</span>
                                <span class="font-medium">{ngo.min_quantity}</span>
                            </div>
                            <div class="flex justify-between">
                                <span class="text-gray-600">"Food Preferences:"</span>
                                <span class="font-medium">{ngo.preferred_foods_label()}</span>
                            </div>
                        </div>
                    </div>

                    // Match score ring
                    <div>
                        <h3 class="text-lg font-semibold mb-4">"🧠 AI Match Score"</h3>
                        <ScoreRing
                            percent=ngo.match_score
                            caption="AI matching score based on location, time, and food preferences"
                        />
                    </div>
                </div>

                <div>
                    <h3 class="text-lg font-semibold mb-4">"🧠 Factors Influencing Match"</h3>
                    <FactorList factors=ngo.match_factors favorable=true />
                </div>

                // Canned pickup message
                <div class="mt-8">
                    <h3 class="text-lg font-semibold mb-4">"💬 AI-Generated Message"</h3>
                    <div class="bg-gray-50 rounded-lg p-6 border border-gray-200">
                        <div class="flex items-start space-x-4">
                            <div class="flex-shrink-0 w-10 h-10 rounded-full bg-secondary-100
                                        flex items-center justify-center">
                                "🧠"
                            </div>
                            <div>
                                <p class="text-gray-800">{message}</p>
                                <div class="mt-4 flex space-x-2">
                                    <button class="px-4 py-2 bg-secondary-500 text-white rounded-lg text-sm
                                                   font-medium hover:bg-secondary-600 transition-colors">
                                        "Send Message"
                                    </button>
                                    <button class="px-4 py-2 bg-white border border-gray-300 text-gray-700
                                                   rounded-lg text-sm font-medium hover:bg-gray-50 transition-colors">
                                        "Edit Message"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// No-selection placeholder panel
#[component]
fn EmptyState(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-card p-8 flex flex-col items-center justify-center h-full">
            <div class="w-20 h-20 bg-gray-100 rounded-full flex items-center justify-center mb-4 text-3xl">
                {icon}
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 text-center max-w-md">{text}</p>
        </div>
    }
}
