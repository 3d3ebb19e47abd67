//! Page Binding
//!
//! Finds the elements a page config names and wires the behaviors to them.
//! The submit loader and the checkbox group are bound independently: a page
//! without a checkbox group still gets its loaders.

use crate::config::{EnhanceConfig, GroupSelectors, LoaderSelectors};
use crate::error::EnhanceResult;
use crate::group::{CheckboxControl, CheckboxGroup, ValueSink};

/// Checkbox group whose select-all, items and output share one element type
pub type PageGroup<P> = CheckboxGroup<<P as Page>::Input, <P as Page>::Input, <P as Page>::Input>;

/// Element lookup and listener registration for one page
pub trait Page: Sized {
    type Input: CheckboxControl + ValueSink;
    type Form;

    /// Input with the given id; `MissingElement` / `WrongElementType` name `#id`
    fn input_by_id(&self, id: &str) -> EnhanceResult<Self::Input>;
    fn inputs(&self, selector: &str) -> EnhanceResult<Vec<Self::Input>>;
    fn forms(&self, selector: &str) -> EnhanceResult<Vec<Self::Form>>;

    /// Route change events to the group for the page's lifetime
    fn attach_group(&self, group: PageGroup<Self>) -> EnhanceResult<()>;
    /// Route submit events through the loader for the page's lifetime
    fn attach_form(&self, form: Self::Form, selectors: &LoaderSelectors) -> EnhanceResult<()>;
}

/// Summary of what `enhance_page` bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhancedPage {
    /// Number of item checkboxes, when a group was bound
    pub group_items: Option<usize>,
    pub forms: usize,
}

/// Bind the loader and, when configured, the checkbox group.
///
/// Both are attempted; a loader error is reported first, then a group error.
pub fn enhance_page<P: Page>(page: &P, config: &EnhanceConfig) -> EnhanceResult<EnhancedPage> {
    let forms = bind_submit_indicators(page, &config.loader);
    let group_items = config
        .group
        .as_ref()
        .map(|selectors| bind_checkbox_group(page, selectors));

    if let Err(e) = &forms {
        log::error!("[ENHANCE] Loader binding failed: {}", e);
    }
    if let Some(Err(e)) = &group_items {
        log::error!("[ENHANCE] Checkbox group binding failed: {}", e);
    }

    let bound = EnhancedPage {
        forms: forms?,
        group_items: group_items.transpose()?,
    };
    log::info!("[ENHANCE] Bound {:?}", bound);
    Ok(bound)
}

/// Look up the group's elements, initialize it and attach it. Returns the item count.
pub fn bind_checkbox_group<P: Page>(page: &P, selectors: &GroupSelectors) -> EnhanceResult<usize> {
    let select_all = page.input_by_id(&selectors.select_all_id)?;
    let output = page.input_by_id(&selectors.output_id)?;
    let items = page.inputs(&selectors.item_selector())?;

    let group = CheckboxGroup::new(select_all, items, output);
    group.initialize();
    let count = group.items().len();
    page.attach_group(group)?;
    Ok(count)
}

/// Attach the submit loader to every matching form. Returns the number bound.
pub fn bind_submit_indicators<P: Page>(page: &P, selectors: &LoaderSelectors) -> EnhanceResult<usize> {
    let forms = page.forms(&selectors.form)?;
    let count = forms.len();
    for form in forms {
        page.attach_form(form, selectors)?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnhanceError;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeInput {
        checked: Rc<Cell<bool>>,
        value: Rc<RefCell<String>>,
    }

    impl FakeInput {
        fn checkbox(value: &str, checked: bool) -> Self {
            Self {
                checked: Rc::new(Cell::new(checked)),
                value: Rc::new(RefCell::new(value.to_string())),
            }
        }
    }

    impl CheckboxControl for FakeInput {
        fn is_checked(&self) -> bool { self.checked.get() }
        fn set_checked(&self, checked: bool) { self.checked.set(checked) }
        fn token(&self) -> String { self.value.borrow().clone() }
    }

    impl ValueSink for FakeInput {
        fn set_value(&self, value: &str) { *self.value.borrow_mut() = value.to_string() }
    }

    enum FakeElement {
        Input(FakeInput),
        /// Some other tag, e.g. a `<div>`
        Other,
    }

    #[derive(Default)]
    struct FakePage {
        by_id: HashMap<String, FakeElement>,
        items: Vec<FakeInput>,
        forms: Vec<&'static str>,
        attached_forms: RefCell<Vec<&'static str>>,
        attached_groups: Cell<usize>,
    }

    impl Page for FakePage {
        type Input = FakeInput;
        type Form = &'static str;

        fn input_by_id(&self, id: &str) -> EnhanceResult<FakeInput> {
            match self.by_id.get(id) {
                Some(FakeElement::Input(input)) => Ok(input.clone()),
                Some(FakeElement::Other) => Err(EnhanceError::WrongElementType(format!("#{}", id))),
                None => Err(EnhanceError::MissingElement(format!("#{}", id))),
            }
        }

        fn inputs(&self, _selector: &str) -> EnhanceResult<Vec<FakeInput>> {
            Ok(self.items.clone())
        }

        fn forms(&self, _selector: &str) -> EnhanceResult<Vec<&'static str>> {
            Ok(self.forms.clone())
        }

        fn attach_group(&self, _group: PageGroup<Self>) -> EnhanceResult<()> {
            self.attached_groups.set(self.attached_groups.get() + 1);
            Ok(())
        }

        fn attach_form(&self, form: &'static str, _selectors: &LoaderSelectors) -> EnhanceResult<()> {
            self.attached_forms.borrow_mut().push(form);
            Ok(())
        }
    }

    fn codes_page() -> (FakePage, FakeInput, FakeInput) {
        let select_all = FakeInput::checkbox("", false);
        let output = FakeInput::default();
        let mut page = FakePage {
            items: vec![FakeInput::checkbox("welcome", true), FakeInput::checkbox("beta", false)],
            forms: vec!["delete-codes"],
            ..Default::default()
        };
        page.by_id.insert("select-all".to_string(), FakeElement::Input(select_all.clone()));
        page.by_id.insert("codes".to_string(), FakeElement::Input(output.clone()));
        (page, select_all, output)
    }

    #[test]
    fn test_enhance_codes_page() {
        let (page, select_all, output) = codes_page();

        let bound = enhance_page(&page, &EnhanceConfig::default()).unwrap();

        assert_eq!(bound, EnhancedPage { group_items: Some(2), forms: 1 });
        assert_eq!(page.attached_groups.get(), 1);
        assert!(!select_all.is_checked());
        assert_eq!(output.token(), "welcome");
    }

    #[test]
    fn test_missing_select_all_fails() {
        let (mut page, _, _) = codes_page();
        page.by_id.remove("select-all");

        let err = bind_checkbox_group(&page, &GroupSelectors::default()).unwrap_err();
        assert_eq!(err, EnhanceError::MissingElement("#select-all".to_string()));
        assert_eq!(page.attached_groups.get(), 0);
    }

    #[test]
    fn test_non_input_output_fails() {
        let (mut page, _, _) = codes_page();
        page.by_id.insert("codes".to_string(), FakeElement::Other);

        let err = bind_checkbox_group(&page, &GroupSelectors::default()).unwrap_err();
        assert_eq!(err, EnhanceError::WrongElementType("#codes".to_string()));
    }

    #[test]
    fn test_loader_binds_without_group() {
        // Login page: a form, no checkbox group
        let page = FakePage { forms: vec!["login"], ..Default::default() };

        let err = enhance_page(&page, &EnhanceConfig::default()).unwrap_err();

        assert_eq!(err, EnhanceError::MissingElement("#select-all".to_string()));
        assert_eq!(*page.attached_forms.borrow(), vec!["login"]);
        assert_eq!(page.attached_groups.get(), 0);
    }

    #[test]
    fn test_group_disabled_in_config() {
        let page = FakePage { forms: vec!["login", "signup"], ..Default::default() };
        let config = EnhanceConfig { group: None, ..Default::default() };

        let bound = enhance_page(&page, &config).unwrap();
        assert_eq!(bound, EnhancedPage { group_items: None, forms: 2 });
    }
}
