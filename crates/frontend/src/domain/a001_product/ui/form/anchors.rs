//! Which page elements the form binds to, and in what order they are checked

use crate::shared::config::FormConfig;
use crate::shared::error::FormError;
use std::fmt;
use web_sys::{Document, Element};

/// How a required element is located on the page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lookup {
    Id(String),
    Selector(String),
}

impl Lookup {
    pub fn find(&self, document: &Document) -> Result<Option<Element>, FormError> {
        match self {
            Lookup::Id(id) => Ok(document.get_element_by_id(id)),
            Lookup::Selector(selector) => {
                document.query_selector(selector).map_err(FormError::dom)
            }
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Id(id) => write!(f, "#{id}"),
            Lookup::Selector(selector) => f.write_str(selector),
        }
    }
}

/// One slot per required element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet<T> {
    pub add_trigger: T,
    pub close_trigger: T,
    pub overlay: T,
    pub name_input: T,
    pub price_input: T,
    pub save_control: T,
}

impl AnchorSet<Lookup> {
    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            add_trigger: Lookup::Id(config.add_trigger_id.clone()),
            close_trigger: Lookup::Id(config.close_trigger_id.clone()),
            overlay: Lookup::Selector(config.overlay_selector.clone()),
            name_input: Lookup::Id(config.name_input_id.clone()),
            price_input: Lookup::Id(config.price_input_id.clone()),
            save_control: Lookup::Id(config.save_control_id.clone()),
        }
    }

    /// Locate every slot in declaration order; the first absent one is the error
    pub fn locate<T>(
        &self,
        mut find: impl FnMut(&Lookup) -> Result<Option<T>, FormError>,
    ) -> Result<AnchorSet<T>, FormError> {
        let mut required = |lookup: &Lookup| -> Result<T, FormError> {
            find(lookup)?.ok_or_else(|| FormError::MissingAnchor(lookup.to_string()))
        };
        Ok(AnchorSet {
            add_trigger: required(&self.add_trigger)?,
            close_trigger: required(&self.close_trigger)?,
            overlay: required(&self.overlay)?,
            name_input: required(&self.name_input)?,
            price_input: required(&self.price_input)?,
            save_control: required(&self.save_control)?,
        })
    }
}

/// Selector of the row edit triggers, `None` for a create-only form
pub fn edit_trigger_selector(config: &FormConfig) -> Option<&str> {
    config
        .edit_enabled
        .then_some(config.edit_trigger_selector.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn default_page() -> HashSet<Lookup> {
        AnchorSet::from_config(&FormConfig::default())
            .locate(|lookup| Ok(Some(lookup.clone())))
            .map(|set| {
                [
                    set.add_trigger,
                    set.close_trigger,
                    set.overlay,
                    set.name_input,
                    set.price_input,
                    set.save_control,
                ]
                .into_iter()
                .collect()
            })
            .unwrap()
    }

    fn locate_on(page: &HashSet<Lookup>) -> Result<AnchorSet<Lookup>, FormError> {
        AnchorSet::from_config(&FormConfig::default())
            .locate(|lookup| Ok(page.get(lookup).cloned()))
    }

    #[test]
    fn test_default_lookups() {
        let set = AnchorSet::from_config(&FormConfig::default());
        assert_eq!(set.add_trigger.to_string(), "#add-btn");
        assert_eq!(set.close_trigger.to_string(), "#productCloseButton");
        assert_eq!(set.overlay.to_string(), ".bg-modal");
        assert_eq!(set.name_input.to_string(), "#productNameId");
        assert_eq!(set.price_input.to_string(), "#productPriceId");
        assert_eq!(set.save_control.to_string(), "#productSaveButton");
    }

    #[test]
    fn test_complete_page_resolves() {
        let page = default_page();
        let set = locate_on(&page).unwrap();
        assert_eq!(set.save_control, Lookup::Id("productSaveButton".to_string()));
    }

    #[test]
    fn test_missing_save_control_is_named() {
        let mut page = default_page();
        page.remove(&Lookup::Id("productSaveButton".to_string()));

        match locate_on(&page) {
            Err(FormError::MissingAnchor(name)) => assert_eq!(name, "#productSaveButton"),
            other => panic!("expected MissingAnchor, got {other:?}"),
        }
    }

    #[test]
    fn test_first_missing_element_is_reported() {
        let mut page = default_page();
        page.remove(&Lookup::Selector(".bg-modal".to_string()));
        page.remove(&Lookup::Id("productPriceId".to_string()));

        match locate_on(&page) {
            Err(FormError::MissingAnchor(name)) => assert_eq!(name, ".bg-modal"),
            other => panic!("expected MissingAnchor, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_errors_propagate() {
        let result = AnchorSet::from_config(&FormConfig::default())
            .locate::<Lookup>(|_| Err(FormError::Dom("bad selector".to_string())));
        assert!(matches!(result, Err(FormError::Dom(_))));
    }

    #[test]
    fn test_edit_triggers_follow_flag() {
        let config = FormConfig::default();
        assert_eq!(edit_trigger_selector(&config), Some(".edit-btn"));

        let create_only = FormConfig {
            edit_enabled: false,
            ..FormConfig::default()
        };
        assert_eq!(edit_trigger_selector(&create_only), None);
    }
}
