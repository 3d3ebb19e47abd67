//! Form Enhancement Utilities
//!
//! Checkbox group synchronization and submit loaders for admin forms.
//! The core logic is generic over small handle traits; `dom` binds it to
//! server-rendered markup and `reactive` to Leptos signals.

mod error;
mod tokens;
mod group;
mod loader;
mod config;
mod binding;
pub mod dom;
pub mod reactive;

pub use error::{EnhanceError, EnhanceResult};
pub use tokens::SelectedTokens;
pub use group::{CheckboxControl, CheckboxGroup, GroupState, ValueSink};
pub use loader::{FormControl, Indicator, SubmitButton, SubmitInterceptor, SubmitOutcome};
pub use binding::{bind_checkbox_group, bind_submit_indicators, enhance_page, EnhancedPage, Page, PageGroup};
pub use config::{EnhanceConfig, GroupSelectors, LoaderSelectors};
