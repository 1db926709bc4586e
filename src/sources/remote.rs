//! Remote catalog source speaking JSON over HTTP.

use crate::state::Record;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Percent-encode a query for use in a URL parameter.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// What: Fetch matching records from a remote catalog endpoint.
///
/// Inputs:
/// - `base_url`: Endpoint returning a JSON array of records
/// - `query`: Raw query text; sent as the `q` parameter
///
/// Output:
/// - Validated records in the order the endpoint returned them.
///
/// Details:
/// - Non-success statuses are errors; malformed records in an otherwise
///   valid response are dropped with a warning rather than failing the
///   whole fetch.
pub async fn fetch_remote(base_url: &str, query: &str) -> Result<Vec<Record>> {
    let url = format!(
        "{}?q={}",
        base_url.trim_end_matches('/'),
        percent_encode(query.trim())
    );
    tracing::debug!(%url, "fetching remote catalog page");
    let resp = reqwest::get(&url).await?;
    if !resp.status().is_success() {
        return Err(format!("remote catalog returned {}", resp.status()).into());
    }
    let raw: Vec<Record> = resp.json().await?;
    let mut items = Vec::with_capacity(raw.len());
    for rec in raw {
        match rec.validate() {
            Ok(()) => items.push(rec),
            Err(reason) => tracing::warn!(%reason, "remote record dropped"),
        }
    }
    Ok(items)
}
