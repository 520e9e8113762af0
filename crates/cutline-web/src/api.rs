//! API Client

use cutline_core::Catalog;

const PRICING_PATH: &str = "/api/payment/pricing";

/// Absolute URL for an API path on the serving origin
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());
    format!("{origin}{path}")
}

/// Fetch the service catalog from the backend
pub async fn fetch_pricing() -> Result<Catalog, String> {
    let response = reqwest::get(api_url(PRICING_PATH))
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("Pricing request failed: {}", response.status()));
    }

    response.json::<Catalog>().await.map_err(|e| e.to_string())
}
