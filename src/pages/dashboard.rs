//! Dashboard Page
//!
//! Waste analytics over literal fixture data: stat cards, charts, spoilage
//! analysis and recent logs across four tabs.

use leptos::*;

use crate::components::loading::PageLoading;
use crate::components::{BarChart, LineChart, PieChart};
use crate::fixtures::analytics;
use crate::timers::view_timeout;

/// The four mutually exclusive display tabs
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Trends,
    Spoilage,
    Logs,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Trends, Tab::Spoilage, Tab::Logs];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trends => "Waste Trends",
            Tab::Spoilage => "Spoilage Analysis",
            Tab::Logs => "Recent Logs",
        }
    }
}

/// Time range selector. Stored but cosmetic: the underlying fixtures do not
/// change with the selected range.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Range {
    Week,
    Month,
    Year,
}

impl Range {
    const ALL: [Range; 3] = [Range::Week, Range::Month, Range::Year];

    fn label(&self) -> &'static str {
        match self {
            Range::Week => "Week",
            Range::Month => "Month",
            Range::Year => "Year",
        }
    }
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (tab, set_tab) = create_signal(Tab::Overview);
    let (range, set_range) = create_signal(Range::Week);

    // Simulated data loading
    view_timeout(1200, move || set_loading.set(false));

    view! {
        {move || {
            if loading.get() {
                view! { <PageLoading caption="Loading your waste analytics..." /> }.into_view()
            } else {
                view! {
                    <div class="pt-24 pb-20">
                        <div class="container-custom">
                            // Header with range selector
                            <div class="flex flex-col md:flex-row md:items-center md:justify-between mb-8">
                                <div>
                                    <h1 class="text-3xl md:text-4xl font-bold mb-2">"Waste Analytics Dashboard"</h1>
                                    <p class="text-gray-600">"Track, analyze, and optimize your food waste patterns"</p>
                                </div>

                                <div class="mt-4 md:mt-0 flex items-center space-x-2 bg-white rounded-lg shadow-sm p-1">
                                    {Range::ALL.into_iter().map(|r| view! {
                                        <button
                                            on:click=move |_| set_range.set(r)
                                            class=move || {
                                                let base = "px-4 py-2 rounded-md text-sm font-medium transition-colors";
                                                if range.get() == r {
                                                    format!("{} bg-primary-100 text-primary-700", base)
                                                } else {
                                                    format!("{} text-gray-600 hover:bg-gray-100", base)
                                                }
                                            }
                                        >
                                            {r.label()}
                                        </button>
                                    }).collect_view()}
                                </div>
                            </div>

                            // Stats cards
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                                {analytics::stat_cards().into_iter().map(|stat| view! {
                                    <div class="bg-white rounded-xl shadow-card p-6">
                                        <div class="flex justify-between items-start mb-4">
                                            <div>
                                                <p class="text-gray-500 text-sm">{stat.title}</p>
                                                <h3 class="text-2xl font-bold mt-1">{stat.value}</h3>
                                            </div>
                                            <div class="w-10 h-10 rounded-full bg-gray-100 flex items-center justify-center">
                                                {stat.icon}
                                            </div>
                                        </div>
                                        <div class="flex items-center">
                                            <span class=if stat.positive {
                                                "text-sm font-medium text-green-600"
                                            } else {
                                                "text-sm font-medium text-red-600"
                                            }>
                                                {stat.change}
                                            </span>
                                            <span class="text-gray-500 text-sm ml-2">{stat.description}</span>
                                        </div>
                                    </div>
                                }).collect_view()}
                            </div>

                            // Tabbed panels
                            <div class="bg-white rounded-xl shadow-card mb-8 overflow-hidden">
                                <div class="border-b border-gray-200">
                                    <nav class="flex -mb-px overflow-x-auto">
                                        {Tab::ALL.into_iter().map(|t| view! {
                                            <button
                                                on:click=move |_| set_tab.set(t)
                                                class=move || {
                                                    let base = "py-4 px-6 text-sm font-medium border-b-2 whitespace-nowrap";
                                                    if tab.get() == t {
                                                        format!("{} border-primary-500 text-primary-600", base)
                                                    } else {
                                                        format!(
                                                            "{} border-transparent text-gray-500 hover:text-gray-700",
                                                            base
                                                        )
                                                    }
                                                }
                                            >
                                                {t.label()}
                                            </button>
                                        }).collect_view()}
                                    </nav>
                                </div>

                                <div class="p-6">
                                    {move || match tab.get() {
                                        Tab::Overview => view! { <OverviewTab /> }.into_view(),
                                        Tab::Trends => view! { <TrendsTab /> }.into_view(),
                                        Tab::Spoilage => view! { <SpoilageTab /> }.into_view(),
                                        Tab::Logs => view! { <LogsTab /> }.into_view(),
                                    }}
                                </div>
                            </div>

                            <RecommendationsSection />
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn OverviewTab() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
            <div>
                <h3 class="text-lg font-semibold mb-4">"🥧 Waste by Food Type"</h3>
                <PieChart series=analytics::waste_by_type() />
            </div>
            <div>
                <h3 class="text-lg font-semibold mb-4">"📊 Spoilage Reasons"</h3>
                <BarChart series=analytics::spoilage_reasons() />
            </div>
        </div>
    }
}

#[component]
fn TrendsTab() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold mb-4">"📉 Waste Trends Over Time"</h3>
            <LineChart labels=analytics::trend_labels() series=analytics::waste_trend() />

            <div class="mt-8 grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="bg-green-50 rounded-lg p-4 border border-green-100">
                    <h4 class="font-medium text-green-800 mb-2">"Most Improved"</h4>
                    <p class="text-green-700">"Bread waste reduced by 35%"</p>
                </div>
                <div class="bg-red-50 rounded-lg p-4 border border-red-100">
                    <h4 class="font-medium text-red-800 mb-2">"Needs Attention"</h4>
                    <p class="text-red-700">"Vegetable waste increased by 12%"</p>
                </div>
                <div class="bg-blue-50 rounded-lg p-4 border border-blue-100">
                    <h4 class="font-medium text-blue-800 mb-2">"Prediction"</h4>
                    <p class="text-blue-700">"Expected 18% reduction next month"</p>
                </div>
            </div>
        </div>
    }
}

const COMMON_FACTORS: [(&str, &str, &str); 4] = [
    ("Improper Storage Temperature", "Affects 45% of your spoiled items", "bg-red-100 text-red-600"),
    ("Purchasing Too Much", "Affects 30% of your spoiled items", "bg-orange-100 text-orange-600"),
    ("Forgetting About Leftovers", "Affects 15% of your spoiled items", "bg-yellow-100 text-yellow-600"),
    ("Poor Packaging", "Affects 10% of your spoiled items", "bg-green-100 text-green-600"),
];

const RECOMMENDATIONS: [(&str, &str); 4] = [
    (
        "Storage Optimization",
        "Store vegetables in the crisper drawer with a damp paper towel to extend freshness by up to 4 days.",
    ),
    (
        "Shopping Habits",
        "Consider buying smaller quantities of bread twice a week instead of a large amount once weekly.",
    ),
    (
        "Meal Planning",
        "Create a designated \"eat soon\" section in your refrigerator for items approaching their use-by date.",
    ),
    (
        "Preservation Methods",
        "Freeze excess milk in ice cube trays for future use in smoothies or cooking.",
    ),
];

#[component]
fn SpoilageTab() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold mb-6">"⚠️ Spoilage Analysis"</h3>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-8">
                // Average time-to-spoilage bars
                <div class="bg-gray-50 rounded-lg p-6">
                    <h4 class="font-medium text-lg mb-4">"Average Time to Spoilage"</h4>
                    <div class="space-y-4">
                        {analytics::spoilage_rows().into_iter().map(|row| view! {
                            <div>
                                <div class="flex justify-between mb-1">
                                    <span class="text-sm font-medium">{row.category}</span>
                                    <span class="text-sm text-gray-600">{format!("{} days", row.days)}</span>
                                </div>
                                <div class="w-full bg-gray-200 rounded-full h-2">
                                    <div
                                        class=format!("h-2 rounded-full {}", row.color_class)
                                        style=format!("width: {}", row.percent)
                                    />
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                // Ranked common factors
                <div class="bg-gray-50 rounded-lg p-6">
                    <h4 class="font-medium text-lg mb-4">"Common Spoilage Factors"</h4>
                    <ul class="space-y-3">
                        {COMMON_FACTORS.into_iter().enumerate().map(|(i, (title, detail, badge))| view! {
                            <li class="flex items-start">
                                <div class=format!(
                                    "flex-shrink-0 w-5 h-5 rounded-full flex items-center justify-center mt-0.5 text-xs {}",
                                    badge
                                )>
                                    {i + 1}
                                </div>
                                <div class="ml-3">
                                    <p class="font-medium">{title}</p>
                                    <p class="text-sm text-gray-600">{detail}</p>
                                </div>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="bg-primary-50 rounded-lg p-6 border border-primary-100">
                <h4 class="font-medium text-lg mb-4 text-primary-800">"AI-Powered Recommendations"</h4>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {RECOMMENDATIONS.into_iter().map(|(title, detail)| view! {
                        <div class="bg-white rounded-lg p-4 shadow-sm">
                            <h5 class="font-medium text-primary-700">{title}</h5>
                            <p class="text-sm text-gray-600 mt-1">{detail}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn LogsTab() -> impl IntoView {
    view! {
        <div>
            <h3 class="text-lg font-semibold mb-6">"📅 Recent Food Logs"</h3>

            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Food Item"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Quantity"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Date"
                            </th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Status"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {analytics::recent_logs().into_iter().map(|log| view! {
                            <tr>
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <div class="text-sm font-medium text-gray-900">{log.name}</div>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <div class="text-sm text-gray-500">{log.quantity}</div>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <div class="text-sm text-gray-500">{log.date}</div>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <span class=format!(
                                        "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                                        log.badge_class
                                    )>
                                        {log.status}
                                    </span>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="mt-8">
                <h4 class="font-medium text-lg mb-4">"AI-Generated Waste Reduction Tips"</h4>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {analytics::waste_tips().into_iter().enumerate().map(|(i, tip)| view! {
                        <div class="bg-white rounded-lg p-4 shadow-sm border border-gray-100">
                            <div class="flex items-start mb-2">
                                <span class="inline-flex items-center justify-center h-6 w-6 rounded-full
                                             bg-primary-100 text-primary-800 text-xs font-medium mr-2">
                                    {i + 1}
                                </span>
                                <h5 class="font-medium text-gray-900">{tip.title}</h5>
                            </div>
                            <p class="text-sm text-gray-600 ml-8">{tip.description}</p>
                            <div class="mt-2 ml-8">
                                <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs
                                             font-medium bg-gray-100 text-gray-800">
                                    {tip.category}
                                </span>
                            </div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

const ACTION_PLAN: [(&str, &str); 3] = [
    ("Meal prep Sunday", "Plan your meals for the week to reduce impulse purchases and food waste."),
    (
        "Inventory check Wednesday",
        "Mid-week check of your refrigerator to use items approaching expiration.",
    ),
    ("Freezer Friday", "Freeze any unused perishables before the weekend to extend their life."),
];

const SHOPPING_TIPS: [(&str, &str); 3] = [
    (
        "Buy smaller quantities more frequently",
        "Based on your waste patterns, consider smaller, more frequent purchases of fresh produce.",
    ),
    (
        "Use a shopping list app",
        "Your unplanned purchases are 40% more likely to be wasted. Stick to a list!",
    ),
    (
        "Consider frozen alternatives",
        "For items you frequently waste, try frozen versions that last longer.",
    ),
];

#[component]
fn RecommendationsSection() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-card p-8 mb-8">
            <div class="mb-6">
                <h2 class="text-2xl font-bold mb-2">"Personalized Recommendations"</h2>
                <p class="text-gray-600">"AI-powered suggestions based on your waste patterns"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="bg-primary-50 rounded-lg p-6 border border-primary-100">
                    <h3 class="text-lg font-semibold mb-4 text-primary-800">"Weekly Action Plan"</h3>
                    <NumberedList items=&ACTION_PLAN badge_class="bg-primary-200 text-primary-700" />
                </div>

                <div class="bg-secondary-50 rounded-lg p-6 border border-secondary-100">
                    <h3 class="text-lg font-semibold mb-4 text-secondary-800">"Smart Shopping Tips"</h3>
                    <NumberedList items=&SHOPPING_TIPS badge_class="bg-secondary-200 text-secondary-700" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn NumberedList(
    items: &'static [(&'static str, &'static str)],
    badge_class: &'static str,
) -> impl IntoView {
    view! {
        <ul class="space-y-4">
            {items.iter().enumerate().map(|(i, (title, detail))| view! {
                <li class="flex items-start">
                    <div class=format!(
                        "flex-shrink-0 h-6 w-6 rounded-full flex items-center justify-center mr-3 mt-0.5 \
                         text-sm font-bold {}",
                        badge_class
                    )>
                        {i + 1}
                    </div>
                    <div>
                        <p class="font-medium">{*title}</p>
                        <p class="text-sm text-gray-600">{*detail}</p>
                    </div>
                </li>
            }).collect_view()}
        </ul>
    }
}
