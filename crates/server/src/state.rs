use airdist::airports::AirportDirectory;

use crate::provider::AirportGapClient;

pub struct AppState {
    pub directory: AirportDirectory,
    pub provider: AirportGapClient,
}

impl AppState {
    pub fn new(directory: AirportDirectory, provider: AirportGapClient) -> Self {
        Self {
            directory,
            provider,
        }
    }
}
