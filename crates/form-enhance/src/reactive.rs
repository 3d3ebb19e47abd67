//! Leptos Signal Handles
//!
//! Lets the checkbox group drive Leptos views: items, select-all and output
//! are plain signals the view binds with `prop:checked` / `prop:value`.

use leptos::prelude::*;

use crate::group::{CheckboxControl, CheckboxGroup, ValueSink};

/// Checkbox group over signals
pub type SignalCheckboxGroup = CheckboxGroup<RwSignal<bool>, SignalCheckbox, RwSignal<String>>;

/// One item: its checked signal and submitted token
#[derive(Clone, Debug)]
pub struct SignalCheckbox {
    pub checked: RwSignal<bool>,
    pub token: String,
}

impl SignalCheckbox {
    pub fn new(token: impl Into<String>, checked: bool) -> Self {
        Self {
            checked: RwSignal::new(checked),
            token: token.into(),
        }
    }
}

impl CheckboxControl for SignalCheckbox {
    fn is_checked(&self) -> bool {
        self.checked.get_untracked()
    }

    fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
    }

    fn token(&self) -> String {
        self.token.clone()
    }
}

/// Select-all control; it has no token of its own
impl CheckboxControl for RwSignal<bool> {
    fn is_checked(&self) -> bool {
        self.get_untracked()
    }

    fn set_checked(&self, checked: bool) {
        self.set(checked);
    }

    fn token(&self) -> String {
        String::new()
    }
}

impl ValueSink for RwSignal<String> {
    fn set_value(&self, value: &str) {
        self.set(value.to_string());
    }
}

/// Build a group from `(token, checked)` pairs with fresh signals
pub fn signal_group<I, T>(items: I) -> SignalCheckboxGroup
where
    I: IntoIterator<Item = (T, bool)>,
    T: Into<String>,
{
    let items = items
        .into_iter()
        .map(|(token, checked)| SignalCheckbox::new(token, checked))
        .collect();
    CheckboxGroup::new(RwSignal::new(false), items, RwSignal::new(String::new()))
}
