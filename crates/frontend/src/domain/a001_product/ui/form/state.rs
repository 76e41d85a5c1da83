use contracts::domain::a001_product::form::{ProductFields, ProductId, SaveRequest};

/// What a save does; an update always knows its target row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Update(ProductId),
}

impl FormMode {
    pub fn editing_target(&self) -> Option<&ProductId> {
        match self {
            FormMode::Create => None,
            FormMode::Update(id) => Some(id),
        }
    }
}

/// Row values carried by an edit trigger's `data-*` attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTrigger {
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl EditTrigger {
    /// Absent attributes read as empty strings
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            id: ProductId(attr("id").unwrap_or_default()),
            name: attr("name").unwrap_or_default(),
            price: attr("price").unwrap_or_default(),
        }
    }
}

/// Controller state for one page load
///
/// The save gate is not stored: it is always derived from `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormState {
    mode: FormMode,
    fields: ProductFields,
    modal_open: bool,
}

impl ProductFormState {
    /// Initial state seeded from whatever the inputs hold at load
    pub fn with_fields(fields: ProductFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &ProductFields {
        &self.fields
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.fields.price = price.into();
    }

    pub fn set_fields(&mut self, fields: ProductFields) {
        self.fields = fields;
    }

    /// Save gate
    pub fn can_save(&self) -> bool {
        self.fields.is_valid()
    }

    /// Field contents are kept from any earlier, unclosed session
    pub fn open_for_create(&mut self) {
        self.mode = FormMode::Create;
        self.modal_open = true;
    }

    pub fn open_for_edit(&mut self, trigger: EditTrigger) {
        self.mode = FormMode::Update(trigger.id);
        self.fields = ProductFields::new(trigger.name, trigger.price);
        self.modal_open = true;
    }

    pub fn close(&mut self) {
        self.modal_open = false;
        self.fields.clear();
        self.mode = FormMode::Create;
    }

    /// Request for the current mode, `None` while the gate is closed
    pub fn submission(&self) -> Option<SaveRequest> {
        if !self.can_save() {
            return None;
        }
        Some(match &self.mode {
            FormMode::Create => SaveRequest::create(&self.fields),
            FormMode::Update(id) => SaveRequest::update(&self.fields, id),
        })
    }
}
