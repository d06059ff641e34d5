//! Settings Page
//!
//! Four-tab form surface over a single page-local profile. Every control
//! mutates one field of the profile immediately; the save buttons have no
//! persistence target and the profile resets on navigation away.

use leptos::*;

use crate::components::loading::PageLoading;
use crate::fixtures::profile::{FoodType, Profile};
use crate::timers::view_timeout;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Account,
    Preferences,
    Notifications,
    Privacy,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Account, Tab::Preferences, Tab::Notifications, Tab::Privacy];

    fn label(&self) -> &'static str {
        match self {
            Tab::Account => "Account Settings",
            Tab::Preferences => "Food Preferences",
            Tab::Notifications => "Notifications",
            Tab::Privacy => "Privacy & Data",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Tab::Account => "👤",
            Tab::Preferences => "🎚️",
            Tab::Notifications => "🔔",
            Tab::Privacy => "🛡️",
        }
    }
}

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let (loading, set_loading) = create_signal(true);
    let (tab, set_tab) = create_signal(Tab::Account);
    let profile = create_rw_signal(Profile::default());

    // Simulated data loading
    view_timeout(1000, move || set_loading.set(false));

    view! {
        {move || {
            if loading.get() {
                view! { <PageLoading caption="Loading settings..." /> }.into_view()
            } else {
                view! {
                    <div class="pt-24 pb-20 bg-gradient-to-b from-white to-gray-50">
                        <div class="container-custom">
                            <div class="text-center max-w-3xl mx-auto mb-12">
                                <h1 class="text-3xl md:text-4xl font-bold mb-4 text-gradient">"Settings"</h1>
                                <p class="text-xl text-gray-600">
                                    "Manage your account, preferences, and NGO connections"
                                </p>
                            </div>

                            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                                // Sidebar navigation
                                <div class="lg:col-span-1">
                                    <div class="bg-white rounded-xl shadow-card overflow-hidden border border-gray-100">
                                        <nav class="flex flex-col">
                                            {Tab::ALL.into_iter().map(|t| view! {
                                                <button
                                                    on:click=move |_| set_tab.set(t)
                                                    class=move || {
                                                        let base = "flex items-center space-x-3 px-6 py-5 \
                                                                    text-left transition-colors border-l-4";
                                                        if tab.get() == t {
                                                            format!(
                                                                "{} bg-primary-50 border-primary-500 \
                                                                 text-primary-700 font-medium",
                                                                base
                                                            )
                                                        } else {
                                                            format!(
                                                                "{} hover:bg-gray-50 text-gray-700 \
                                                                 border-transparent",
                                                                base
                                                            )
                                                        }
                                                    }
                                                >
                                                    <span>{t.icon()}</span>
                                                    <span>{t.label()}</span>
                                                </button>
                                            }).collect_view()}
                                        </nav>
                                    </div>
                                </div>

                                // Active panel
                                <div class="lg:col-span-3">
                                    <div class="bg-white rounded-xl shadow-card p-8 border border-gray-100">
                                        {move || match tab.get() {
                                            Tab::Account => view! { <AccountPanel profile=profile /> }.into_view(),
                                            Tab::Preferences => {
                                                view! { <PreferencesPanel profile=profile /> }.into_view()
                                            }
                                            Tab::Notifications => {
                                                view! { <NotificationsPanel profile=profile /> }.into_view()
                                            }
                                            Tab::Privacy => view! { <PrivacyPanel /> }.into_view(),
                                        }}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                }.into_view()
            }
        }}
    }
}

#[component]
fn AccountPanel(profile: RwSignal<Profile>) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"👤 Account Settings"</h2>

            <div class="space-y-6">
                <div>
                    <label for="name" class="block text-gray-700 font-medium mb-2">"Full Name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || profile.with(|p| p.name.clone())
                        on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))
                        class="input-field"
                    />
                </div>

                <div>
                    <label for="email" class="block text-gray-700 font-medium mb-2">"Email Address"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || profile.with(|p| p.email.clone())
                        on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                        class="input-field"
                    />
                </div>

                <div>
                    <label for="phone" class="block text-gray-700 font-medium mb-2">"Phone Number"</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=move || profile.with(|p| p.phone.clone())
                        on:input=move |ev| profile.update(|p| p.phone = event_target_value(&ev))
                        class="input-field"
                    />
                </div>

                <div>
                    <label for="address" class="block text-gray-700 font-medium mb-2">"Address"</label>
                    <textarea
                        id="address"
                        rows="3"
                        prop:value=move || profile.with(|p| p.address.clone())
                        on:input=move |ev| profile.update(|p| p.address = event_target_value(&ev))
                        class="input-field"
                    />
                </div>

                <div class="pt-6">
                    <button class="w-full btn-primary py-3">"💾 Save Changes"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreferencesPanel(profile: RwSignal<Profile>) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-8">"🎚️ Food Preferences"</h2>

            <div class="space-y-8">
                // Automatic matching toggle
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                    <div class="bg-primary-50 px-6 py-4 border-b border-gray-100">
                        <h3 class="text-lg font-semibold text-primary-800">"Automatic Matching"</h3>
                    </div>
                    <div class="flex items-center justify-between p-6">
                        <div>
                            <p class="font-medium text-gray-800">"Enable AI-powered automatic matching"</p>
                            <p class="text-sm text-gray-600 mt-1">
                                "Allow our AI to automatically match your surplus food with nearby NGOs"
                            </p>
                        </div>
                        <SettingToggle
                            checked=Signal::derive(move || profile.with(|p| p.matching.auto_match))
                            on_toggle=move || {
                                profile.update(|p| p.matching.auto_match = !p.matching.auto_match)
                            }
                        />
                    </div>
                </div>

                // Distance slider
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                    <div class="bg-primary-50 px-6 py-4 border-b border-gray-100">
                        <h3 class="text-lg font-semibold text-primary-800">"Distance Preferences"</h3>
                    </div>
                    <div class="p-6 space-y-4">
                        <label for="maxDistance" class="block text-gray-700 font-medium">
                            "Maximum distance for NGO matching (km)"
                        </label>
                        <div class="flex items-center space-x-4">
                            <input
                                type="range"
                                id="maxDistance"
                                min="1"
                                max="50"
                                prop:value=move || profile.with(|p| p.matching.max_distance_km.to_string())
                                on:input=move |ev| {
                                    if let Ok(km) = event_target_value(&ev).parse() {
                                        profile.update(|p| p.matching.max_distance_km = km);
                                    }
                                }
                                class="w-full"
                            />
                            <span class="bg-primary-500 text-white px-4 py-2 rounded-lg font-medium
                                         min-w-[80px] text-center">
                                {move || format!("{} km", profile.with(|p| p.matching.max_distance_km))}
                            </span>
                        </div>
                    </div>
                </div>

                // Quantity slider
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                    <div class="bg-primary-50 px-6 py-4 border-b border-gray-100">
                        <h3 class="text-lg font-semibold text-primary-800">"Minimum Quantity"</h3>
                    </div>
                    <div class="p-6 space-y-4">
                        <label for="minQuantity" class="block text-gray-700 font-medium">
                            "Minimum food quantity for donation (kg)"
                        </label>
                        <div class="flex items-center space-x-4">
                            <input
                                type="range"
                                id="minQuantity"
                                min="0.5"
                                max="10"
                                step="0.5"
                                prop:value=move || profile.with(|p| p.matching.min_quantity_kg.to_string())
                                on:input=move |ev| {
                                    if let Ok(kg) = event_target_value(&ev).parse() {
                                        profile.update(|p| p.matching.min_quantity_kg = kg);
                                    }
                                }
                                class="w-full"
                            />
                            <span class="bg-primary-500 text-white px-4 py-2 rounded-lg font-medium
                                         min-w-[80px] text-center">
                                {move || format!("{} kg", profile.with(|p| p.matching.min_quantity_kg))}
                            </span>
                        </div>
                    </div>
                </div>

                // Food type membership toggles
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden">
                    <div class="bg-primary-50 px-6 py-4 border-b border-gray-100">
                        <h3 class="text-lg font-semibold text-primary-800">"Food Type Preferences"</h3>
                    </div>
                    <div class="p-6">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {FoodType::ALL.into_iter().map(|food_type| view! {
                                <label class="flex items-center p-3 rounded-lg hover:bg-gray-50
                                              transition-colors cursor-pointer">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            profile.with(|p| p.matching.food_types.contains(&food_type))
                                        }
                                        on:change=move |_| {
                                            profile.update(|p| p.matching.toggle_food_type(food_type))
                                        }
                                        class="w-5 h-5"
                                    />
                                    <span class="ml-3 text-gray-700 font-medium">{food_type.label()}</span>
                                </label>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="pt-6">
                    <button class="w-full btn-primary py-3">"💾 Save Preferences"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotificationsPanel(profile: RwSignal<Profile>) -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-6">"🔔 Notification Settings"</h2>

            <div class="space-y-6">
                <NotificationRow
                    title="Email Notifications"
                    detail="Receive updates and alerts via email"
                    checked=Signal::derive(move || profile.with(|p| p.notifications.email))
                    on_toggle=move || profile.update(|p| p.notifications.email = !p.notifications.email)
                />
                <NotificationRow
                    title="SMS Notifications"
                    detail="Receive updates and alerts via text message"
                    checked=Signal::derive(move || profile.with(|p| p.notifications.sms))
                    on_toggle=move || profile.update(|p| p.notifications.sms = !p.notifications.sms)
                />
                <NotificationRow
                    title="Push Notifications"
                    detail="Receive updates and alerts via push notifications"
                    checked=Signal::derive(move || profile.with(|p| p.notifications.push))
                    on_toggle=move || profile.update(|p| p.notifications.push = !p.notifications.push)
                />

                <div class="pt-4">
                    <button class="btn-primary px-6 py-3">"💾 Save Notification Settings"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotificationRow(
    title: &'static str,
    detail: &'static str,
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
            <div>
                <p class="font-medium">{title}</p>
                <p class="text-sm text-gray-600">{detail}</p>
            </div>
            <SettingToggle checked=checked on_toggle=on_toggle />
        </div>
    }
}

/// Switch-styled checkbox
#[component]
fn SettingToggle(
    #[prop(into)]
    checked: Signal<bool>,
    on_toggle: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            role="switch"
            aria-checked=move || checked.get().to_string()
            on:click=move |_| on_toggle()
            class=move || {
                let base = "relative w-11 h-6 rounded-full transition-colors";
                if checked.get() {
                    format!("{} bg-primary-500", base)
                } else {
                    format!("{} bg-gray-200", base)
                }
            }
        >
            <span class=move || {
                let base = "absolute top-[2px] bg-white border border-gray-300 rounded-full \
                            h-5 w-5 transition-all";
                if checked.get() {
                    format!("{} right-[2px]", base)
                } else {
                    format!("{} left-[2px]", base)
                }
            } />
        </button>
    }
}

#[component]
fn PrivacyPanel() -> impl IntoView {
    view! {
        <div>
            <h2 class="text-2xl font-bold mb-6">"🛡️ Privacy & Data"</h2>

            <div class="space-y-6">
                <div class="p-4 bg-gray-50 rounded-lg">
                    <h3 class="font-semibold mb-2">"Data Usage"</h3>
                    <p class="text-gray-600 mb-4">
                        "We use your data to improve our AI models and provide better food waste "
                        "reduction recommendations. Your personal information is never shared with "
                        "third parties without your consent."
                    </p>
                    <label class="flex items-center">
                        <input type="checkbox" checked class="w-4 h-4" />
                        <span class="ml-2 text-gray-700">
                            "I agree to allow WasteWise to use my anonymized data for improving AI models"
                        </span>
                    </label>
                </div>

                <div class="p-4 bg-gray-50 rounded-lg">
                    <h3 class="font-semibold mb-2">"Location Services"</h3>
                    <p class="text-gray-600 mb-4">
                        "We use your location to find nearby NGOs and optimize food redistribution. "
                        "You can disable location services at any time, but this may limit matching "
                        "capabilities."
                    </p>
                    <label class="flex items-center">
                        <input type="checkbox" checked class="w-4 h-4" />
                        <span class="ml-2 text-gray-700">
                            "Enable location services for better NGO matching"
                        </span>
                    </label>
                </div>

                <div class="p-4 bg-gray-50 rounded-lg">
                    <h3 class="font-semibold mb-2">"Account Data"</h3>
                    <p class="text-gray-600 mb-4">
                        "You can download all your data or request account deletion at any time."
                    </p>
                    <div class="flex space-x-4">
                        <button class="px-4 py-2 bg-gray-200 text-gray-800 rounded-lg
                                       hover:bg-gray-300 transition-colors">
                            "Download My Data"
                        </button>
                        <button class="px-4 py-2 bg-red-100 text-red-700 rounded-lg
                                       hover:bg-red-200 transition-colors">
                            "Delete Account"
                        </button>
                    </div>
                </div>

                <div class="pt-4">
                    <button class="btn-primary px-6 py-3">"💾 Save Privacy Settings"</button>
                </div>
            </div>
        </div>
    }
}
