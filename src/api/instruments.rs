//! Instrument reference data endpoints: option series.

use crate::client::SaxoClient;
use crate::constants::OPTION_SPACE_PATH;
use crate::error::Result;
use crate::types::option_space::*;

impl SaxoClient {
    /// Retrieve the tradable option series (all expiries) of an option root,
    /// including the order types it supports.
    ///
    /// **Endpoint:** `GET /ref/v1/instruments/contractoptionspaces/{option-root-id}`
    pub async fn get_option_space(&self, option_root_id: &str) -> Result<OptionSpace> {
        self.get_option_space_with(option_root_id, &OptionSpaceQuery::default())
            .await
    }

    /// Like [`get_option_space`](Self::get_option_space) with explicit
    /// segment and trading status filters.
    pub async fn get_option_space_with(
        &self,
        option_root_id: &str,
        query: &OptionSpaceQuery,
    ) -> Result<OptionSpace> {
        self.get(&format!("{OPTION_SPACE_PATH}/{option_root_id}"), query)
            .await
    }
}
