use crate::shared::api_utils::{post_form, reload_page};
use crate::shared::config::FormConfig;
use crate::shared::error::FormError;
use contracts::domain::a001_product::form::{SaveKind, SaveRequest};

pub fn endpoint(config: &FormConfig, kind: SaveKind) -> &str {
    match kind {
        SaveKind::Create => config.create_endpoint.as_str(),
        SaveKind::Update => config.update_endpoint.as_str(),
    }
}

/// POST the request to its endpoint, returning the response status
pub async fn save(url: &str, request: &SaveRequest) -> Result<u16, FormError> {
    let body = request.to_form_body()?;
    post_form(url, &body).await
}

/// Save, then reload the page once any response arrives
///
/// Response status is not inspected. A rejected fetch leaves the page as is.
pub async fn save_and_reload(url: String, request: SaveRequest) {
    match save(&url, &request).await {
        Ok(status) => {
            log::info!("{:?} product -> {} (HTTP {})", request.kind(), url, status);
            if let Err(err) = reload_page() {
                log::error!("failed to reload page: {}", err);
            }
        }
        Err(err) => {
            log::error!("{:?} product -> {} failed: {}", request.kind(), url, err);
        }
    }
}
