use reqwest::Client;

use crate::{
    config::Config,
    eligibility::fetch_for_addresses,
    parser::parse_addresses,
    report::{render_table, to_json},
    schemas::{EligibilityRecord, Totals},
    utils::{read_raw_input, write_file},
};

/// State of one checking session, owned by the caller.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CheckSession {
    pub addresses: Vec<String>,
    pub eligibility: Vec<EligibilityRecord>,
    pub loading: bool,
}

impl CheckSession {
    pub fn set_input(&mut self, raw: &str) {
        self.addresses = parse_addresses(raw);
    }

    pub fn clear(&mut self) {
        self.addresses.clear();
    }

    /// Marks the session as loading, drops previous results and hands out the
    /// addresses to check. The session stays `loading` until `finish_check`.
    pub fn start_check(&mut self) -> Vec<String> {
        self.loading = true;
        self.eligibility.clear();
        self.addresses.clone()
    }

    pub fn finish_check(&mut self, records: Vec<EligibilityRecord>) -> usize {
        self.eligibility = records;
        self.loading = false;
        self.eligibility.len()
    }

    /// Replaces the previous results with a fresh check of the current
    /// addresses. Returns how many addresses were checked.
    pub async fn check(&mut self, client: &Client, base_url: &str, batch_size: usize) -> usize {
        let addresses = self.start_check();
        let records = fetch_for_addresses(client, base_url, &addresses, batch_size).await;

        self.finish_check(records)
    }

    pub fn totals(&self) -> Totals {
        Totals::from_records(&self.eligibility)
    }
}

pub async fn check_all(config: &Config, session: &mut CheckSession) -> eyre::Result<()> {
    let raw = read_raw_input(&config.input_path).await?;
    let client = config.http_client()?;

    session.set_input(&raw);
    tracing::info!("Checking {} addresses", session.addresses.len());

    let checked = session
        .check(&client, &config.api_base_url, config.batch_size)
        .await;

    let totals = session.totals();
    tracing::info!(
        "Successfully checked {checked} addresses. Eligible: {}, Jupiter volume: {}, Pyth points: {}",
        totals.eligible_any,
        totals.jupiter_volume,
        totals.pyth_points
    );

    println!("{}", render_table(&session.eligibility));

    if let Some(output_path) = &config.output_path {
        write_file(output_path, &to_json(&session.eligibility)?).await?;
        tracing::info!("Results written to {output_path}");
    }

    Ok(())
}
