//! Multi-leg order endpoints: strategy defaults, precheck, place, modify,
//! cancel.
//!
//! Every order body is submitted whole, with `AccountKey` overwritten by the
//! client's account key. None of these calls retry.

use uuid::Uuid;

use crate::client::SaxoClient;
use crate::constants::{
    MULTILEG_DEFAULTS_PATH, MULTILEG_ORDERS_PATH, MULTILEG_PRECHECK_PATH, PRECHECK_FIELD_GROUPS,
};
use crate::error::Result;
use crate::types::multileg::*;
use crate::types::order::{Order, fields};
use crate::types::precheck::PrecheckResponse;

impl SaxoClient {
    /// Retrieve a prefilled option strategy for an option root.
    ///
    /// **Endpoint:** `GET /trade/v2/orders/multileg/defaults`
    pub async fn get_strategy_defaults(
        &self,
        option_root_id: &str,
        strategy_type: &str,
    ) -> Result<StrategyDefaults> {
        let query = StrategyDefaultsQuery {
            account_key: self.account_key(),
            option_root_id,
            options_strategy_type: strategy_type,
        };
        self.get(MULTILEG_DEFAULTS_PATH, &query).await
    }

    /// Validate an order without placing it, returning projected costs and
    /// margin impact.
    ///
    /// A fresh random `X-Request-ID` is sent each time so that repeating an
    /// identical precheck inside the gateway's dedup window does not fail
    /// with `409 Conflict`.
    ///
    /// **Endpoint:** `POST /trade/v2/orders/multileg/precheck`
    pub async fn precheck_order(&self, order: &Order) -> Result<Submission<PrecheckResponse>> {
        let mut body = self.order_body(order);
        body.insert(fields::FIELD_GROUPS, PRECHECK_FIELD_GROUPS.to_vec());
        let request_id = Uuid::new_v4().to_string();
        self.post(MULTILEG_PRECHECK_PATH, &body, Some(request_id.as_str()))
            .await
    }

    /// Place a multi-leg order.
    ///
    /// Pass a `request_id` to have the gateway reject an identical order
    /// submitted again within its dedup window.
    ///
    /// **Endpoint:** `POST /trade/v2/orders/multileg`
    pub async fn place_order(
        &self,
        order: &Order,
        request_id: Option<&str>,
    ) -> Result<Submission<PlaceOrderResponse>> {
        let body = self.order_body(order);
        self.post(MULTILEG_ORDERS_PATH, &body, request_id).await
    }

    /// Modify a working multi-leg order.
    ///
    /// **Endpoint:** `PATCH /trade/v2/orders/multileg`
    pub async fn modify_order(
        &self,
        order: &Order,
        multi_leg_order_id: &str,
        request_id: Option<&str>,
    ) -> Result<Submission<OrderAck>> {
        let mut body = self.order_body(order);
        body.insert(fields::MULTI_LEG_ORDER_ID, multi_leg_order_id);
        self.patch(MULTILEG_ORDERS_PATH, &body, request_id).await
    }

    /// Cancel a working multi-leg order.
    ///
    /// **Endpoint:** `DELETE /trade/v2/orders/multileg/{multi-leg-order-id}`
    pub async fn cancel_order(&self, multi_leg_order_id: &str) -> Result<OrderAck> {
        let path = format!("{MULTILEG_ORDERS_PATH}/{multi_leg_order_id}");
        self.delete(&path, &[("AccountKey", self.account_key())])
            .await
    }

    /// Copy of `order` with this client's account key.
    fn order_body(&self, order: &Order) -> Order {
        let mut body = order.clone();
        body.set_account_key(self.account_key());
        body
    }
}
