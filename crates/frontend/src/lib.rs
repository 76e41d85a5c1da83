pub mod domain;
pub mod shared;

use domain::a001_product::ui::form::ProductFormController;
use shared::config::load_config;
use shared::dom;
use shared::error::FormError;
use wasm_bindgen::prelude::wasm_bindgen;

fn mount_product_form() -> Result<(), FormError> {
    let document = dom::document()?;
    let config = load_config(&document);
    ProductFormController::mount(&document, config)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let ready = dom::document().and_then(|document| {
        dom::on_ready(&document, || {
            if let Err(err) = mount_product_form() {
                log::error!("product form not mounted: {}", err);
            }
        })
    });
    if let Err(err) = ready {
        log::error!("product form not scheduled: {}", err);
    }
}
