//! Feedback Banner Component

use leptos::prelude::*;

use crate::feedback::Feedback;

/// Success/error banner; renders nothing for `Feedback::None`
#[component]
pub fn FeedbackBanner(#[prop(into)] feedback: Signal<Feedback>) -> impl IntoView {
    move || {
        let current = feedback.get();
        current.text().map(|text| {
            view! {
                <div
                    class=current.css_class()
                    role=if current.is_error() { "alert" } else { "status" }
                >
                    {text.to_string()}
                </div>
            }
        })
    }
}
