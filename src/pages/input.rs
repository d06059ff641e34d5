//! Food Logging Page
//!
//! Structured form for logging surplus food. Submission is simulated: a
//! fixed-duration "submitting" phase, a "success" phase, then the fields
//! reset to defaults. Nothing is sent anywhere.

use gloo_timers::callback::Timeout;
use leptos::*;
use wasm_bindgen::JsCast;

/// Lifecycle of the simulated submission
#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting,
    Success,
}

const UNITS: [&str; 5] = ["kg", "g", "lbs", "servings", "pieces"];

const STORAGE_OPTIONS: [(&str, &str); 4] = [
    ("refrigerated", "Refrigerated"),
    ("frozen", "Frozen"),
    ("roomTemperature", "Room Temperature"),
    ("heated", "Heated/Warm"),
];

/// Required-field validation. Cross-field business rules are out of scope;
/// a rejected submit must never start the submission timer.
fn validate(
    kind: Option<&str>,
    name: &str,
    quantity: &str,
    logged_at: &str,
    storage: &str,
) -> Result<(), &'static str> {
    if kind.is_none() {
        return Err("Please choose a food type.");
    }
    if name.trim().is_empty() {
        return Err("Please enter a food name.");
    }
    match quantity.trim().parse::<f64>() {
        Ok(q) if q > 0.0 => {}
        _ => return Err("Please enter a positive quantity."),
    }
    if logged_at.is_empty() {
        return Err("Please enter the cooking or purchase time.");
    }
    if storage.is_empty() {
        return Err("Please select a storage condition.");
    }
    Ok(())
}

/// Food logging page component
#[component]
pub fn Input() -> impl IntoView {
    let (kind, set_kind) = create_signal(None::<&'static str>);
    let (name, set_name) = create_signal(String::new());
    let (quantity, set_quantity) = create_signal(String::new());
    let (unit, set_unit) = create_signal("kg".to_string());
    let (logged_at, set_logged_at) = create_signal(String::new());
    let (storage, set_storage) = create_signal(String::new());
    let (temperature, set_temperature) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (photo_preview, set_photo_preview) = create_signal(None::<String>);

    let (phase, set_phase) = create_signal(Phase::Editing);
    let (error, set_error) = create_signal(None::<&'static str>);

    // Drive the submit/success timers from the phase. Each timer is dropped
    // (cancelled) when the phase changes again or the view unmounts.
    create_effect(move |_| match phase.get() {
        Phase::Editing => {}
        Phase::Submitting => {
            let handle = Timeout::new(1500, move || set_phase.set(Phase::Success));
            on_cleanup(move || drop(handle));
        }
        Phase::Success => {
            let handle = Timeout::new(3000, move || {
                // Reset all fields to defaults
                set_kind.set(None);
                set_name.set(String::new());
                set_quantity.set(String::new());
                set_unit.set("kg".to_string());
                set_logged_at.set(String::new());
                set_storage.set(String::new());
                set_temperature.set(String::new());
                set_description.set(String::new());
                set_photo_preview.set(None);
                set_phase.set(Phase::Editing);
            });
            on_cleanup(move || drop(handle));
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let result = validate(
            kind.get(),
            &name.get(),
            &quantity.get(),
            &logged_at.get(),
            &storage.get(),
        );
        match result {
            Ok(()) => {
                set_error.set(None);
                set_phase.set(Phase::Submitting);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    // Read the chosen photo as a data URL for preview; the file itself is
    // never uploaded.
    let on_photo = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                let reader = web_sys::FileReader::new().unwrap();
                let onload = {
                    let reader = reader.clone();
                    wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web_sys::Event| {
                        if let Ok(result) = reader.result() {
                            if let Some(data_url) = result.as_string() {
                                set_photo_preview.set(Some(data_url));
                            }
                        }
                    }) as Box<dyn FnMut(_)>)
                };
                reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();
                let _ = reader.read_as_data_url(&file);
            }
        }
    };

    view! {
        <div class="pt-24 pb-20">
            <div class="container-custom">
                <div class="text-center max-w-3xl mx-auto mb-10">
                    <h1 class="text-3xl md:text-4xl font-bold mb-4">"Log Surplus Food"</h1>
                    <p class="text-xl text-gray-600">
                        "Help reduce waste by logging your surplus food for redistribution or analysis."
                    </p>
                </div>

                {move || {
                    if phase.get() == Phase::Success {
                        view! { <SuccessPanel /> }.into_view()
                    } else {
                        view! {
                            <form
                                on:submit=on_submit
                                class="max-w-2xl mx-auto bg-white rounded-xl shadow-card p-8"
                            >
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    // Food type: two mutually exclusive cards
                                    <div class="md:col-span-2">
                                        <label class="block text-gray-700 font-medium mb-2">"Food Type"</label>
                                        <div class="grid grid-cols-2 gap-4">
                                            <KindCard
                                                value="cooked"
                                                label="Cooked Food"
                                                kind=kind
                                                on_select=move |v| set_kind.set(Some(v))
                                            />
                                            <KindCard
                                                value="raw"
                                                label="Raw Ingredients"
                                                kind=kind
                                                on_select=move |v| set_kind.set(Some(v))
                                            />
                                        </div>
                                    </div>

                                    // Food name
                                    <div class="md:col-span-2">
                                        <label for="foodName" class="block text-gray-700 font-medium mb-2">
                                            "Food Name"
                                        </label>
                                        <input
                                            type="text"
                                            id="foodName"
                                            placeholder="E.g., Vegetable Biryani, Fresh Tomatoes"
                                            prop:value=move || name.get()
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            class="input-field"
                                        />
                                    </div>

                                    // Quantity with unit select
                                    <div>
                                        <label for="quantity" class="block text-gray-700 font-medium mb-2">
                                            "Quantity"
                                        </label>
                                        <div class="flex">
                                            <input
                                                type="number"
                                                id="quantity"
                                                placeholder="Amount"
                                                min="0.1"
                                                step="0.1"
                                                prop:value=move || quantity.get()
                                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                                                class="input-field rounded-r-none"
                                            />
                                            <select
                                                on:change=move |ev| set_unit.set(event_target_value(&ev))
                                                prop:value=move || unit.get()
                                                class="rounded-r-lg border border-gray-300 px-3"
                                            >
                                                {UNITS.into_iter().map(|u| view! {
                                                    <option value=u>{u}</option>
                                                }).collect_view()}
                                            </select>
                                        </div>
                                    </div>

                                    // Cooking/purchase time; the label follows the food type
                                    <div>
                                        <label for="loggedAt" class="block text-gray-700 font-medium mb-2">
                                            {move || {
                                                if kind.get() == Some("cooked") {
                                                    "Cooking Time"
                                                } else {
                                                    "Purchase Time"
                                                }
                                            }}
                                        </label>
                                        <input
                                            type="datetime-local"
                                            id="loggedAt"
                                            prop:value=move || logged_at.get()
                                            on:input=move |ev| set_logged_at.set(event_target_value(&ev))
                                            class="input-field"
                                        />
                                    </div>

                                    // Storage condition
                                    <div>
                                        <label for="storage" class="block text-gray-700 font-medium mb-2">
                                            "Storage Condition"
                                        </label>
                                        <select
                                            id="storage"
                                            on:change=move |ev| set_storage.set(event_target_value(&ev))
                                            prop:value=move || storage.get()
                                            class="input-field"
                                        >
                                            <option value="" disabled selected>"Select storage condition"</option>
                                            {STORAGE_OPTIONS.into_iter().map(|(value, label)| view! {
                                                <option value=value>{label}</option>
                                            }).collect_view()}
                                        </select>
                                    </div>

                                    // Temperature (optional)
                                    <div>
                                        <label for="temperature" class="block text-gray-700 font-medium mb-2">
                                            "Temperature (Optional)"
                                        </label>
                                        <input
                                            type="number"
                                            id="temperature"
                                            placeholder="°C"
                                            prop:value=move || temperature.get()
                                            on:input=move |ev| set_temperature.set(event_target_value(&ev))
                                            class="input-field"
                                        />
                                    </div>

                                    // Description (optional)
                                    <div class="md:col-span-2">
                                        <label for="description" class="block text-gray-700 font-medium mb-2">
                                            "Description (Optional)"
                                        </label>
                                        <textarea
                                            id="description"
                                            placeholder="Any additional details about the food..."
                                            rows="3"
                                            prop:value=move || description.get()
                                            on:input=move |ev| set_description.set(event_target_value(&ev))
                                            class="input-field"
                                        />
                                    </div>

                                    // Photo (optional, preview only)
                                    <div class="md:col-span-2">
                                        <label class="block text-gray-700 font-medium mb-2">"Photo (Optional)"</label>
                                        <div class="flex items-center justify-center border-2 border-dashed border-gray-300
                                                    rounded-lg p-6 hover:border-primary-400 transition-colors">
                                            {move || {
                                                match photo_preview.get() {
                                                    Some(data_url) => view! {
                                                        <div class="relative">
                                                            <img
                                                                src=data_url
                                                                alt="Food preview"
                                                                class="mx-auto h-48 w-auto rounded-lg object-cover"
                                                            />
                                                            <button
                                                                type="button"
                                                                on:click=move |_| set_photo_preview.set(None)
                                                                class="absolute top-2 right-2 bg-white rounded-full px-2 py-1
                                                                       shadow-md hover:bg-gray-100"
                                                            >
                                                                "✕"
                                                            </button>
                                                        </div>
                                                    }.into_view(),
                                                    None => view! {
                                                        <div class="space-y-2 text-center">
                                                            <div class="text-4xl">"📷"</div>
                                                            <label class="relative cursor-pointer text-primary-600
                                                                          hover:text-primary-500 font-medium">
                                                                <span>"Upload a photo"</span>
                                                                <input
                                                                    type="file"
                                                                    accept="image/*"
                                                                    class="sr-only"
                                                                    on:change=on_photo
                                                                />
                                                            </label>
                                                            <p class="text-xs text-gray-500">"PNG, JPG, GIF up to 10MB"</p>
                                                        </div>
                                                    }.into_view(),
                                                }
                                            }}
                                        </div>
                                    </div>
                                </div>

                                // Validation error
                                {move || {
                                    error.get().map(|message| view! {
                                        <p class="mt-4 text-sm text-red-600">{message}</p>
                                    })
                                }}

                                // Submit
                                <div class="mt-8">
                                    <button
                                        type="submit"
                                        disabled=move || phase.get() == Phase::Submitting
                                        class="w-full btn-primary py-3 flex items-center justify-center space-x-2"
                                    >
                                        {move || if phase.get() == Phase::Submitting {
                                            view! {
                                                <span class="loading-spinner w-5 h-5" />
                                                <span>"Processing..."</span>
                                            }.into_view()
                                        } else {
                                            view! { <span>"Log Food"</span> }.into_view()
                                        }}
                                    </button>
                                </div>

                                <div class="mt-4 text-center text-sm text-gray-500">
                                    "🧠 Our AI will analyze your food data to predict spoilage time and "
                                    "suggest redistribution options."
                                </div>
                            </form>
                        }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Radio-style food type card
#[component]
fn KindCard(
    value: &'static str,
    label: &'static str,
    kind: ReadSignal<Option<&'static str>>,
    on_select: impl Fn(&'static str) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_select(value)
            class=move || {
                let base = "block w-full rounded-lg border-2 p-4 text-center transition-all";
                if kind.get() == Some(value) {
                    format!("{} border-primary-500 bg-primary-50", base)
                } else {
                    format!("{} border-gray-200 hover:border-gray-300", base)
                }
            }
        >
            <div class="text-2xl mb-2">"📦"</div>
            <span class="font-medium">{label}</span>
        </button>
    }
}

/// Post-submit confirmation panel
#[component]
fn SuccessPanel() -> impl IntoView {
    view! {
        <div class="max-w-2xl mx-auto bg-green-50 border border-green-200 rounded-xl p-8 text-center">
            <div class="w-20 h-20 bg-green-100 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">
                "✓"
            </div>
            <h2 class="text-2xl font-bold text-primary-600 mb-4">"Food Logged Successfully!"</h2>
            <p class="text-gray-600 mb-6">
                "Your surplus food has been recorded. Our AI will analyze it and suggest the "
                "best redistribution options."
            </p>
            <div class="text-sm text-gray-500 animate-pulse">"Redirecting to dashboard..."</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate(Some("cooked"), "Biryani", "2.5", "2023-09-15T14:30", "refrigerated").is_ok());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(validate(Some("cooked"), "", "2.5", "2023-09-15T14:30", "refrigerated").is_err());
        assert!(validate(Some("cooked"), "   ", "2.5", "2023-09-15T14:30", "refrigerated").is_err());
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        assert!(validate(Some("raw"), "Apples", "0", "2023-09-14T10:00", "refrigerated").is_err());
        assert!(validate(Some("raw"), "Apples", "-1", "2023-09-14T10:00", "refrigerated").is_err());
        assert!(validate(Some("raw"), "Apples", "abc", "2023-09-14T10:00", "refrigerated").is_err());
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        assert!(validate(None, "Apples", "1.2", "2023-09-14T10:00", "refrigerated").is_err());
        assert!(validate(Some("raw"), "Apples", "1.2", "", "refrigerated").is_err());
        assert!(validate(Some("raw"), "Apples", "1.2", "2023-09-14T10:00", "").is_err());
    }
}
