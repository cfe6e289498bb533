//! Client for the server endpoint that renders table previews.

use contracts::preview::TablePreviewRequest;
use gloo_net::http::Request;

/// Endpoint serving rendered table fragments.
pub const GET_TABLE_PATH: &str = "/_get_table";

/// Builds the preview request URL. Kept apart from the fetch itself so
/// the query encoding stays testable without a browser.
pub fn preview_url(request: &TablePreviewRequest) -> Result<String, String> {
    let query = serde_qs::to_string(request)
        .map_err(|e| format!("Failed to encode preview query: {}", e))?;
    Ok(format!("{}?{}", GET_TABLE_PATH, query))
}

/// Fetches the rendered preview fragment for `request`.
///
/// Single shot, no retry. Nothing is mutated here, so a failed fetch
/// leaves the page exactly as it was.
pub async fn fetch_table_preview(request: &TablePreviewRequest) -> Result<String, String> {
    let url = preview_url(request)?;

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch table preview: {}",
            response.status()
        ));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ids::{ComponentId, PreviewKey, TableTransientId};

    fn request(table: &str) -> TablePreviewRequest {
        let key = PreviewKey::new(ComponentId::new("comp1"), TableTransientId::new("t1"));
        TablePreviewRequest::new(table, "edit", &key)
    }

    #[test]
    fn test_preview_url_wire_format() {
        let url = preview_url(&request("users")).unwrap();
        assert_eq!(
            url,
            "/_get_table?table=users&context=edit&component_id=comp1&table_transient_id=t1"
        );
    }

    #[test]
    fn test_preview_url_escapes_separators() {
        let url = preview_url(&request("a&b=c")).unwrap();
        // still exactly four parameters
        assert_eq!(url.matches('&').count(), 3);
        assert_eq!(url.matches('?').count(), 1);
        assert!(!url.contains("a&b"));
    }
}
