//! Submit Loader
//!
//! On submit: reveal loaders, lock submit buttons, then submit for real.

use crate::error::EnhanceResult;

/// Element whose visibility flips when the form is submitted
pub trait Indicator {
    fn toggle_visibility(&self);
}

pub trait SubmitButton {
    fn disable(&self);
}

/// A form that can be submitted without going through its submit listeners
pub trait FormControl {
    type Indicator: Indicator;
    type Button: SubmitButton;

    fn indicators(&self) -> EnhanceResult<Vec<Self::Indicator>>;
    fn submit_buttons(&self) -> EnhanceResult<Vec<Self::Button>>;
    /// Programmatic submit; must not re-enter interception
    fn submit(&self) -> EnhanceResult<()>;
}

/// What a single interception touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub indicators_toggled: usize,
    pub buttons_disabled: usize,
}

pub struct SubmitInterceptor;

impl SubmitInterceptor {
    /// Handle a submit whose default action was already prevented
    pub fn on_submit<F: FormControl>(form: &F) -> EnhanceResult<SubmitOutcome> {
        // Resolve everything before touching the UI
        let indicators = form.indicators()?;
        let buttons = form.submit_buttons()?;

        for indicator in &indicators {
            indicator.toggle_visibility();
        }
        for button in &buttons {
            button.disable();
        }

        let outcome = SubmitOutcome {
            indicators_toggled: indicators.len(),
            buttons_disabled: buttons.len(),
        };
        log::debug!("[LOADER] Submitting: {:?}", outcome);

        form.submit()?;
        Ok(outcome)
    }
}
