use super::validation::{is_valid_name, is_valid_price, FieldError};
use serde::Serialize;

/// Opaque catalog row identifier, taken verbatim from the row's `data-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Raw contents of the name and price inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: String,
}

impl ProductFields {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Reports the first rule that fails, name before price
    pub fn validate(&self) -> Result<(), FieldError> {
        if !is_valid_name(&self.name) {
            return Err(FieldError::EmptyName);
        }
        if !is_valid_price(&self.price) {
            return Err(FieldError::InvalidPrice(self.price.clone()));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
    }
}

/// Body of `POST /create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProductForm {
    pub name: String,
    pub price: String,
}

/// Body of `POST /update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateProductForm {
    pub name: String,
    pub price: String,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// A save ready to be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(CreateProductForm),
    Update(UpdateProductForm),
}

impl SaveRequest {
    pub fn create(fields: &ProductFields) -> Self {
        SaveRequest::Create(CreateProductForm {
            name: fields.name.clone(),
            price: fields.price.clone(),
        })
    }

    pub fn update(fields: &ProductFields, id: &ProductId) -> Self {
        SaveRequest::Update(UpdateProductForm {
            name: fields.name.clone(),
            price: fields.price.clone(),
            id: id.0.clone(),
        })
    }

    pub fn kind(&self) -> SaveKind {
        match self {
            SaveRequest::Create(_) => SaveKind::Create,
            SaveRequest::Update(_) => SaveKind::Update,
        }
    }

    /// `application/x-www-form-urlencoded` body, fields in declaration order
    pub fn to_form_body(&self) -> Result<String, serde_qs::Error> {
        match self {
            SaveRequest::Create(form) => serde_qs::to_string(form),
            SaveRequest::Update(form) => serde_qs::to_string(form),
        }
    }
}
