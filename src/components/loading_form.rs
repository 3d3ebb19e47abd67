//! Loading Form Component
//!
//! A `<form>` that shows its loaders and locks its submit buttons on submit.

use form_enhance::dom::DomForm;
use form_enhance::{LoaderSelectors, SubmitInterceptor};
use leptos::html;
use leptos::prelude::*;

/// Form posting to `action`; loaders and buttons are found with `selectors`
#[component]
pub fn LoadingForm(
    #[prop(into)] action: String,
    selectors: LoaderSelectors,
    children: Children,
) -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else { return };
        match SubmitInterceptor::on_submit(&DomForm::new(form, selectors.clone())) {
            Ok(outcome) => log::info!("[LOADER] Submitted {:?}", outcome),
            Err(e) => log::error!("[LOADER] {}", e),
        }
    };

    view! {
        <form method="post" action=action node_ref=form_ref on:submit=on_submit>
            {children()}
        </form>
    }
}
