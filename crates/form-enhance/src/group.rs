//! Checkbox Group Synchronizer
//!
//! Keeps a "select all" checkbox consistent with a group of item checkboxes
//! and mirrors the checked items' tokens into an output field.

use crate::tokens::SelectedTokens;

/// A checkbox-like control: checked state plus its submitted value
pub trait CheckboxControl {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
    /// Opaque value submitted for this item
    fn token(&self) -> String;
}

/// Receives the serialized token list (usually a hidden input)
pub trait ValueSink {
    fn set_value(&self, value: &str);
}

/// Aggregate checked status of the group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupState {
    pub checked: usize,
    pub total: usize,
}

impl GroupState {
    /// True when every item is checked. An empty group is never "all checked".
    pub fn all_checked(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// Synchronizer over injected element handles
///
/// `S` is the select-all control, `C` the item controls, `O` the output sink.
pub struct CheckboxGroup<S, C, O> {
    select_all: S,
    items: Vec<C>,
    output: O,
}

impl<S, C, O> CheckboxGroup<S, C, O>
where
    S: CheckboxControl,
    C: CheckboxControl,
    O: ValueSink,
{
    pub fn new(select_all: S, items: Vec<C>, output: O) -> Self {
        Self { select_all, items, output }
    }

    pub fn select_all(&self) -> &S {
        &self.select_all
    }

    pub fn items(&self) -> &[C] {
        &self.items
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn group_state(&self) -> GroupState {
        GroupState {
            checked: self.items.iter().filter(|item| item.is_checked()).count(),
            total: self.items.len(),
        }
    }

    /// Tokens of checked items in group order
    pub fn selected_tokens(&self) -> SelectedTokens {
        self.items
            .iter()
            .filter(|item| item.is_checked())
            .map(|item| item.token())
            .collect()
    }

    /// Write the derived select-all state and output value
    pub fn recompute(&self) {
        let state = self.group_state();
        let tokens = self.selected_tokens();
        self.select_all.set_checked(state.all_checked());
        self.output.set_value(&tokens.to_string());
        log::debug!(
            "[GROUP] {}/{} checked, output={:?}",
            state.checked,
            state.total,
            tokens.to_string()
        );
    }

    /// Run once at startup before any interaction
    pub fn initialize(&self) {
        log::debug!("[GROUP] Initializing group of {} items", self.items.len());
        self.recompute();
    }

    /// An individual item changed
    pub fn on_item_change(&self, index: usize) {
        log::trace!("[GROUP] Item {} changed", index);
        self.recompute();
    }

    /// The select-all control changed: propagate to every item, then recompute
    pub fn on_select_all_change(&self, checked: bool) {
        for item in &self.items {
            item.set_checked(checked);
        }
        self.recompute();
    }
}
