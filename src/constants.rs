pub const ELIGIBILITY_API_URL: &str = "https://sac-api.solworks.dev";

// Addresses queried concurrently before moving on to the next chunk
pub const BATCH_SIZE: usize = 10;

// Protocol codes as returned by the eligibility service
pub const JUPITER_PROTOCOL: &str = "jupiter";
pub const PYTH_PROTOCOL: &str = "pyth";

// FILES
pub const CONFIG_FILE_PATH: &str = "data/config.toml";
pub const ADDRESSES_FILE_PATH: &str = "data/addresses.txt";
pub const LOGS_DIR: &str = "logs";
