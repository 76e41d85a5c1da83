//! Binds [`ProductFormState`] to the server-rendered modal
//!
//! Every handler runs a state transition first and then mirrors the
//! result into the DOM. Field values are written back only on transitions
//! that change them, never on `input`.

use super::anchors::{edit_trigger_selector, AnchorSet};
use super::model;
use super::state::{EditTrigger, ProductFormState};
use crate::shared::config::FormConfig;
use crate::shared::dom;
use crate::shared::error::FormError;
use contracts::domain::a001_product::form::ProductFields;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Elements the form cannot work without, plus the row edit triggers
struct Anchors {
    add_trigger: HtmlElement,
    close_trigger: HtmlElement,
    overlay: HtmlElement,
    name_input: HtmlInputElement,
    price_input: HtmlInputElement,
    save_control: HtmlElement,
    edit_triggers: Vec<Element>,
}

impl Anchors {
    fn resolve(document: &Document, config: &FormConfig) -> Result<Self, FormError> {
        let lookups = AnchorSet::from_config(config);
        let found = lookups.locate(|lookup| lookup.find(document))?;

        let edit_triggers = match edit_trigger_selector(config) {
            Some(selector) => dom::query_all(document, selector)?,
            None => Vec::new(),
        };

        Ok(Self {
            add_trigger: dom::cast(found.add_trigger, &lookups.add_trigger)?,
            close_trigger: dom::cast(found.close_trigger, &lookups.close_trigger)?,
            overlay: dom::cast(found.overlay, &lookups.overlay)?,
            name_input: dom::cast(found.name_input, &lookups.name_input)?,
            price_input: dom::cast(found.price_input, &lookups.price_input)?,
            save_control: dom::cast(found.save_control, &lookups.save_control)?,
            edit_triggers,
        })
    }
}

pub struct ProductFormController {
    config: FormConfig,
    anchors: Anchors,
    state: RefCell<ProductFormState>,
}

impl ProductFormController {
    /// Resolve anchors, seed state from the inputs and install listeners
    ///
    /// Fails with [`FormError::MissingAnchor`] before any listener is
    /// attached if a required element is absent.
    pub fn mount(document: &Document, config: FormConfig) -> Result<Rc<Self>, FormError> {
        let anchors = Anchors::resolve(document, &config)?;
        let fields = ProductFields::new(anchors.name_input.value(), anchors.price_input.value());

        let controller = Rc::new(Self {
            config,
            anchors,
            state: RefCell::new(ProductFormState::with_fields(fields)),
        });
        controller.sync_gate();

        controller.bind()?;
        log::debug!(
            "product form mounted ({} edit triggers)",
            controller.anchors.edit_triggers.len()
        );
        Ok(controller)
    }

    fn bind(self: &Rc<Self>) -> Result<(), FormError> {
        let a = &self.anchors;

        let this = Rc::clone(self);
        dom::listen(&a.name_input, "input", move |_| this.on_input())?;
        let this = Rc::clone(self);
        dom::listen(&a.price_input, "input", move |_| this.on_input())?;

        let this = Rc::clone(self);
        dom::listen(&a.add_trigger, "click", move |_| this.on_open_for_create())?;
        let this = Rc::clone(self);
        dom::listen(&a.close_trigger, "click", move |_| this.on_close())?;
        let this = Rc::clone(self);
        dom::listen(&a.save_control, "click", move |_| this.on_save())?;

        for trigger in &a.edit_triggers {
            let this = Rc::clone(self);
            let source = trigger.clone();
            dom::listen(trigger, "click", move |_| {
                let row = EditTrigger::from_attributes(|name| dom::data_attr(&source, name));
                this.on_open_for_edit(row);
            })?;
        }
        Ok(())
    }

    // === Handlers ===

    fn on_input(&self) {
        let fields = self.read_inputs();
        self.state.borrow_mut().set_fields(fields);
        self.sync_gate();
    }

    fn on_open_for_create(&self) {
        self.state.borrow_mut().open_for_create();
        self.sync_overlay();
    }

    fn on_open_for_edit(&self, row: EditTrigger) {
        log::debug!("editing product {}", row.id.as_str());
        self.state.borrow_mut().open_for_edit(row);
        self.sync_fields();
        self.sync_gate();
        self.sync_overlay();
    }

    fn on_close(&self) {
        self.state.borrow_mut().close();
        self.sync_overlay();
        self.sync_fields();
        self.sync_gate();
    }

    fn on_save(&self) {
        let fields = self.read_inputs();
        let request = {
            let mut state = self.state.borrow_mut();
            state.set_fields(fields);
            state.submission()
        };

        let Some(request) = request else {
            if let Err(reason) = self.state.borrow().fields().validate() {
                log::debug!("save ignored: {}", reason);
            }
            return;
        };

        let url = model::endpoint(&self.config, request.kind()).to_string();
        wasm_bindgen_futures::spawn_local(model::save_and_reload(url, request));
    }

    // === DOM sync ===

    fn read_inputs(&self) -> ProductFields {
        ProductFields::new(
            self.anchors.name_input.value(),
            self.anchors.price_input.value(),
        )
    }

    fn sync_fields(&self) {
        let state = self.state.borrow();
        self.anchors.name_input.set_value(&state.fields().name);
        self.anchors.price_input.set_value(&state.fields().price);
    }

    fn sync_gate(&self) {
        let enabled = self.state.borrow().can_save();
        let save = &self.anchors.save_control;
        let result = if enabled {
            save.remove_attribute("disabled")
        } else {
            save.set_attribute("disabled", "true")
        };
        if let Err(err) = result {
            log::warn!("failed to toggle save control: {:?}", err);
        }
    }

    fn sync_overlay(&self) {
        let display = if self.state.borrow().is_modal_open() {
            self.config.overlay_display.as_str()
        } else {
            "none"
        };
        if let Err(err) = self.anchors.overlay.style().set_property("display", display) {
            log::warn!("failed to set overlay display: {:?}", err);
        }
    }
}
