use futures::future::join_all;
use reqwest::Client;

use crate::schemas::{EligibilityQueryResult, EligibilityRecord};

// Errors are logged once by the caller, together with the address.
async fn send_http_request(client: &Client, url: &str) -> eyre::Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let text = response.text().await?;

    Ok(text)
}

async fn query_eligibility(
    client: &Client,
    base_url: &str,
    address: &str,
) -> eyre::Result<EligibilityQueryResult> {
    let url = format!("{}/{address}", base_url.trim_end_matches('/'));
    let text = send_http_request(client, &url).await?;

    Ok(serde_json::from_str(&text)?)
}

/// Queries one address. Any failure is folded into a result with no entries
/// and the failure message in `error`.
pub async fn fetch_eligibility(
    client: &Client,
    base_url: &str,
    address: &str,
) -> EligibilityQueryResult {
    match query_eligibility(client, base_url, address).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Error fetching data for address {address}: {e}");
            EligibilityQueryResult::failed(address, e)
        }
    }
}

/// Resolves every address, `batch_size` at a time. Chunks run one after
/// another; addresses inside a chunk are queried concurrently. The output has
/// one record per input address, in input order.
pub async fn fetch_for_addresses(
    client: &Client,
    base_url: &str,
    addresses: &[String],
    batch_size: usize,
) -> Vec<EligibilityRecord> {
    let batch_size = batch_size.max(1);
    let mut results = Vec::with_capacity(addresses.len());

    for (batch_num, batch) in addresses.chunks(batch_size).enumerate() {
        tracing::debug!("Fetching batch {} ({} addresses)", batch_num + 1, batch.len());

        let batch_results = join_all(batch.iter().map(|address| async move {
            let data = fetch_eligibility(client, base_url, address).await;
            EligibilityRecord::normalize(address, &data)
        }))
        .await;

        results.extend(batch_results);
    }

    results
}
