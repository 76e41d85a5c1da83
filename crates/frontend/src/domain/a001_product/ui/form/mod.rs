//! Modal create/edit form of the product catalog page

pub mod anchors;
pub mod controller;
pub mod model;
pub mod state;

pub use controller::ProductFormController;
