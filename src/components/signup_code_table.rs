//! Signup Code Table Component
//!
//! Selectable list of signup codes with a select-all header and the hidden
//! `codes` field the delete form posts.

use form_enhance::reactive::signal_group;
use form_enhance::SelectedTokens;
use leptos::prelude::*;

use crate::models::SignupCode;

#[component]
pub fn SignupCodeTable(codes: Vec<SignupCode>) -> impl IntoView {
    let total = codes.len();
    let group = signal_group(codes.iter().map(|c| (c.code.clone(), false)));
    group.initialize();

    let select_all = *group.select_all();
    let output = *group.output();
    let rows: Vec<_> = codes
        .into_iter()
        .zip(group.items().iter().map(|item| item.checked))
        .enumerate()
        .collect();
    let group = StoredValue::new(group);

    let selected_count = move || {
        output.get().parse::<SelectedTokens>().unwrap_or_default().len()
    };

    view! {
        <table class="signup-codes">
            <thead>
                <tr>
                    <th>
                        <input
                            type="checkbox"
                            id="select-all"
                            prop:checked=move || select_all.get()
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                group.with_value(|g| g.on_select_all_change(checked));
                            }
                        />
                    </th>
                    <th>"Code"</th>
                    <th>"Uses"</th>
                    <th>"Created"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || total == 0>
                    <tr><td colspan="4" class="empty">"No signup codes"</td></tr>
                </Show>
                {rows.into_iter().map(|(index, (code, checked))| {
                    view! {
                        <tr>
                            <td>
                                <input
                                    type="checkbox"
                                    name="code-checkbox"
                                    value=code.code.clone()
                                    prop:checked=move || checked.get()
                                    on:change=move |ev| {
                                        checked.set(event_target_checked(&ev));
                                        group.with_value(|g| g.on_item_change(index));
                                    }
                                />
                            </td>
                            <td class="code">{code.code.clone()}</td>
                            <td>{code.uses}</td>
                            <td>{code.created_label()}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
        <input type="hidden" id="codes" name="codes" prop:value=move || output.get() />
        <p class="selection-count">{move || format!("{} of {} selected", selected_count(), total)}</p>
    }
}
