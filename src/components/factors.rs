//! Factor List Component
//!
//! Impact-weighted factor rows shared by the spoilage-prediction and
//! NGO-matching detail panels.

use leptos::*;

use crate::fixtures::food::{Factor, Impact};

/// List of factors with impact badges and proportional bars.
///
/// For spoilage factors a high impact is bad (red); for match factors it is
/// good (green). `favorable` selects the palette.
#[component]
pub fn FactorList(
    factors: Vec<Factor>,
    #[prop(default = false)]
    favorable: bool,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {factors.into_iter().map(|factor| view! {
                <FactorRow factor=factor favorable=favorable />
            }).collect_view()}
        </div>
    }
}

#[component]
fn FactorRow(factor: Factor, favorable: bool) -> impl IntoView {
    let (badge_class, bar_class) = impact_classes(factor.impact, favorable);

    view! {
        <div class="bg-gray-50 rounded-lg p-4">
            <div class="flex justify-between mb-2">
                <span class="font-medium">{factor.name}</span>
                <span class=format!("text-sm px-2 py-0.5 rounded-full {}", badge_class)>
                    {factor.impact.label()}
                </span>
            </div>
            <div class="flex justify-between items-center">
                <span class="text-gray-600">{factor.value}</span>
                <div class="w-24 bg-gray-200 rounded-full h-2">
                    <div
                        class=format!("h-2 rounded-full {}", bar_class)
                        style=format!("width: {}", factor.impact.bar_width())
                    />
                </div>
            </div>
        </div>
    }
}

fn impact_classes(impact: Impact, favorable: bool) -> (&'static str, &'static str) {
    match (impact, favorable) {
        (Impact::High, false) => ("bg-red-100 text-red-800", "bg-red-500"),
        (Impact::High, true) => ("bg-green-100 text-green-800", "bg-green-500"),
        (Impact::Medium, _) => ("bg-yellow-100 text-yellow-800", "bg-yellow-500"),
        (Impact::Low, false) => ("bg-blue-100 text-blue-800", "bg-blue-500"),
        (Impact::Low, true) => ("bg-red-100 text-red-800", "bg-red-500"),
    }
}
