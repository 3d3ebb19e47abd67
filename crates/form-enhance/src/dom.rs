//! DOM Bindings
//!
//! Binds the checkbox group and submit loaders to server-rendered markup.
//! Listeners live as long as the page, so their closures are leaked.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, NodeList};

use crate::binding::{enhance_page, EnhancedPage, Page, PageGroup};
use crate::config::{EnhanceConfig, LoaderSelectors};
use crate::error::{EnhanceError, EnhanceResult};
use crate::group::{CheckboxControl, ValueSink};
use crate::loader::{FormControl, Indicator, SubmitButton, SubmitInterceptor};

impl CheckboxControl for HtmlInputElement {
    fn is_checked(&self) -> bool {
        self.checked()
    }

    fn set_checked(&self, checked: bool) {
        HtmlInputElement::set_checked(self, checked);
    }

    fn token(&self) -> String {
        self.value()
    }
}

impl ValueSink for HtmlInputElement {
    fn set_value(&self, value: &str) {
        HtmlInputElement::set_value(self, value);
    }
}

impl SubmitButton for HtmlButtonElement {
    fn disable(&self) {
        self.set_disabled(true);
    }
}

/// Loader element shown or hidden through a CSS class
pub struct DomIndicator {
    element: HtmlElement,
    hidden_class: String,
}

impl Indicator for DomIndicator {
    fn toggle_visibility(&self) {
        if let Err(e) = self.element.class_list().toggle(&self.hidden_class) {
            log::warn!("[LOADER] Failed to toggle class: {:?}", e);
        }
    }
}

/// A `<form>` with the selectors used to find its loaders and buttons
pub struct DomForm {
    form: HtmlFormElement,
    selectors: LoaderSelectors,
}

impl DomForm {
    pub fn new(form: HtmlFormElement, selectors: LoaderSelectors) -> Self {
        Self { form, selectors }
    }
}

impl FormControl for DomForm {
    type Indicator = DomIndicator;
    type Button = HtmlButtonElement;

    fn indicators(&self) -> EnhanceResult<Vec<DomIndicator>> {
        let list = query_in(&self.form, &self.selectors.indicator)?;
        let elements: Vec<HtmlElement> = cast_nodes(&list, &self.selectors.indicator)?;
        Ok(elements
            .into_iter()
            .map(|element| DomIndicator { element, hidden_class: self.selectors.hidden_class.clone() })
            .collect())
    }

    fn submit_buttons(&self) -> EnhanceResult<Vec<HtmlButtonElement>> {
        let list = query_in(&self.form, &self.selectors.submit_button)?;
        cast_nodes(&list, &self.selectors.submit_button)
    }

    fn submit(&self) -> EnhanceResult<()> {
        // HTMLFormElement.submit() does not fire the submit event
        self.form
            .submit()
            .map_err(|e| EnhanceError::SubmitFailed(format!("{:?}", e)))
    }
}

/// The current document as a bindable page
pub struct DomPage {
    doc: Document,
}

impl DomPage {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }
}

impl Page for DomPage {
    type Input = HtmlInputElement;
    type Form = HtmlFormElement;

    fn input_by_id(&self, id: &str) -> EnhanceResult<HtmlInputElement> {
        let selector = format!("#{}", id);
        self.doc
            .get_element_by_id(id)
            .ok_or_else(|| EnhanceError::MissingElement(selector.clone()))?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| EnhanceError::WrongElementType(selector))
    }

    fn inputs(&self, selector: &str) -> EnhanceResult<Vec<HtmlInputElement>> {
        let list = self
            .doc
            .query_selector_all(selector)
            .map_err(|_| EnhanceError::InvalidSelector(selector.to_string()))?;
        cast_nodes(&list, selector)
    }

    fn forms(&self, selector: &str) -> EnhanceResult<Vec<HtmlFormElement>> {
        let list = self
            .doc
            .query_selector_all(selector)
            .map_err(|_| EnhanceError::InvalidSelector(selector.to_string()))?;
        cast_nodes(&list, selector)
    }

    fn attach_group(&self, group: PageGroup<Self>) -> EnhanceResult<()> {
        let group = Rc::new(group);

        for (index, item) in group.items().iter().enumerate() {
            let group = Rc::clone(&group);
            let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                group.on_item_change(index);
            });
            listen(item, "change", on_change)?;
        }

        let select_all = group.select_all().clone();
        let on_change = {
            let group = Rc::clone(&group);
            let control = select_all.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                group.on_select_all_change(control.checked());
            })
        };
        listen(&select_all, "change", on_change)
    }

    fn attach_form(&self, form: HtmlFormElement, selectors: &LoaderSelectors) -> EnhanceResult<()> {
        let target = DomForm::new(form.clone(), selectors.clone());
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            ev.prevent_default();
            if let Err(e) = SubmitInterceptor::on_submit(&target) {
                log::error!("[LOADER] {}", e);
            }
        });
        listen(&form, "submit", on_submit)
    }
}

/// Get the current document
pub fn document() -> EnhanceResult<Document> {
    web_sys::window()
        .ok_or(EnhanceError::NoWindow)?
        .document()
        .ok_or(EnhanceError::NoDocument)
}

/// Bind everything the config names on the current document
pub fn enhance_document(config: &EnhanceConfig) -> EnhanceResult<EnhancedPage> {
    enhance_page(&DomPage::new(document()?), config)
}

fn query_in(root: &Element, selector: &str) -> EnhanceResult<NodeList> {
    root.query_selector_all(selector)
        .map_err(|_| EnhanceError::InvalidSelector(selector.to_string()))
}

fn cast_nodes<T: JsCast>(list: &NodeList, selector: &str) -> EnhanceResult<Vec<T>> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|node| {
            node.dyn_into::<T>()
                .map_err(|_| EnhanceError::WrongElementType(selector.to_string()))
        })
        .collect()
}

fn listen<T: AsRef<web_sys::EventTarget>>(
    target: &T,
    event: &str,
    handler: Closure<dyn FnMut(web_sys::Event)>,
) -> EnhanceResult<()> {
    target
        .as_ref()
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| EnhanceError::ListenerFailed(format!("{}: {:?}", event, e)))?;
    handler.forget();
    Ok(())
}
