//! Signup Codes Admin App
//!
//! Bulk-delete page: code table inside a form with a loading submit button.

use form_enhance::LoaderSelectors;
use leptos::prelude::*;

use crate::components::{LoadingForm, SignupCodeTable};
use crate::models::SignupCode;

/// Endpoint that deletes the codes listed in the `codes` field
const DELETE_ACTION: &str = "/admin/signup-codes/delete";

#[component]
pub fn App(codes: Vec<SignupCode>, loader: LoaderSelectors) -> impl IntoView {
    view! {
        <main class="admin-page">
            <h1>"Signup codes"</h1>

            <LoadingForm action=DELETE_ACTION selectors=loader>
                <SignupCodeTable codes=codes />
                <button type="submit" class="delete-btn">
                    <span data-loader="" class="loader hidden">"Deleting..."</span>
                    "Delete selected"
                </button>
            </LoadingForm>
        </main>
    }
}
