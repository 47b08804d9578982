//! A working order and its selections, bound to one client.
//!
//! [`OrderSession`] holds everything one user works with between calls: the
//! order being edited, the selected order type and duration, the order types
//! the current option root supports, and the id of the last placed order so
//! it can be modified or cancelled. All methods take `&mut self`; one session
//! runs one call at a time.

use chrono::{Local, NaiveDateTime};

use crate::client::SaxoClient;
use crate::error::{Result, SaxoError};
use crate::shaper::{self, ShapingRules};
use crate::types::enums::{DurationType, OrderType};
use crate::types::multileg::{OrderAck, PlaceOrderResponse, Submission};
use crate::types::option_space::OptionSpace;
use crate::types::order::Order;
use crate::types::precheck::{PrecheckOutcome, PrecheckResponse};

/// Per-user order editing state.
#[derive(Debug)]
pub struct OrderSession {
    client: SaxoClient,
    order: Order,
    order_type: OrderType,
    duration: DurationType,
    supported_order_types: Vec<OrderType>,
    rules: ShapingRules,
    /// Send the order's `ExternalReference` as `X-Request-ID` on place/modify.
    use_reference_as_request_id: bool,
    last_order_id: Option<String>,
}

impl OrderSession {
    /// Start a session around `order`.
    ///
    /// The initial selections come from the order itself, defaulting to
    /// `Limit` / `DayOrder` when absent or unknown. An unknown value is left
    /// in the order until a selection overwrites it.
    pub fn new(client: SaxoClient, order: Order) -> Result<Self> {
        let order_type = order
            .order_type()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default order type");
                None
            })
            .unwrap_or(OrderType::Limit);
        let duration = order
            .duration_type()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default order duration");
                None
            })
            .unwrap_or(DurationType::DayOrder);
        Ok(Self {
            client,
            order,
            order_type,
            duration,
            supported_order_types: OrderType::ALL.to_vec(),
            rules: ShapingRules::default(),
            use_reference_as_request_id: false,
            last_order_id: None,
        })
    }

    pub fn with_rules(mut self, rules: ShapingRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_reference_as_request_id(mut self, enabled: bool) -> Self {
        self.use_reference_as_request_id = enabled;
        self
    }

    /// Resume a session for an order placed earlier.
    pub fn with_last_order_id(mut self, id: impl Into<String>) -> Self {
        self.last_order_id = Some(id.into());
        self
    }

    pub fn client(&self) -> &SaxoClient {
        &self.client
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }

    /// Replace the working order, e.g. after the user edited its JSON.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn duration(&self) -> DurationType {
        self.duration
    }

    pub fn supported_order_types(&self) -> &[OrderType] {
        &self.supported_order_types
    }

    pub fn rules(&self) -> &ShapingRules {
        &self.rules
    }

    pub fn last_order_id(&self) -> Option<&str> {
        self.last_order_id.as_deref()
    }

    // -----------------------------------------------------------------------
    // Selections
    // -----------------------------------------------------------------------

    /// Select an order type and reshape the working order.
    pub fn select_order_type(&mut self, order_type: OrderType) {
        self.order.set_account_key(self.client.account_key());
        shaper::apply_order_type(&mut self.order, order_type, &self.rules);
        self.order_type = order_type;
    }

    /// Select an order type by its wire name.
    pub fn select_order_type_name(&mut self, name: &str) -> Result<OrderType> {
        let order_type = name.parse::<OrderType>().inspect_err(|e| {
            tracing::error!(error = %e, "order type not changed");
        })?;
        self.select_order_type(order_type);
        Ok(order_type)
    }

    /// Select a duration and reshape the working order as of `now`.
    pub fn select_duration_at(
        &mut self,
        duration: DurationType,
        now: NaiveDateTime,
    ) -> Result<()> {
        shaper::apply_order_duration(&mut self.order, duration, now, &self.rules)?;
        self.duration = duration;
        Ok(())
    }

    /// Select a duration and reshape the working order as of the current
    /// local time.
    pub fn select_duration(&mut self, duration: DurationType) -> Result<()> {
        self.select_duration_at(duration, Local::now().naive_local())
    }

    /// Select a duration by its wire name.
    pub fn select_duration_name(&mut self, name: &str) -> Result<DurationType> {
        let duration = name.parse::<DurationType>().inspect_err(|e| {
            tracing::error!(error = %e, "order duration not changed");
        })?;
        self.select_duration(duration)?;
        Ok(duration)
    }

    // -----------------------------------------------------------------------
    // Remote calls
    // -----------------------------------------------------------------------

    /// Replace the order's legs with a prefilled strategy and reshape it for
    /// the current selections.
    pub async fn load_strategy(&mut self, option_root_id: &str, strategy_type: &str) -> Result<()> {
        let defaults = self
            .client
            .get_strategy_defaults(option_root_id, strategy_type)
            .await
            .inspect_err(report)?;

        let mut order = self.order.clone();
        order.set_account_key(self.client.account_key());
        order.reset_duration(self.duration);
        order.set_opening_legs(defaults.legs)?;
        shaper::apply_order_type(&mut order, self.order_type, &self.rules);
        shaper::apply_order_duration(
            &mut order,
            self.duration,
            Local::now().naive_local(),
            &self.rules,
        )?;
        self.order = order;

        tracing::info!(strategy_type, option_root_id, "strategy loaded");
        Ok(())
    }

    /// Fetch the option series and restrict the order type selection to what
    /// it supports.
    ///
    /// The current order type is kept when still supported; otherwise the
    /// first supported type is selected. The order is reshaped either way.
    pub async fn load_series(&mut self, option_root_id: &str) -> Result<OptionSpace> {
        self.order.set_account_key(self.client.account_key());
        let space = self
            .client
            .get_option_space(option_root_id)
            .await
            .inspect_err(report)?;

        let supported = space.known_order_types();
        let next = if supported.is_empty() || supported.contains(&self.order_type) {
            self.order_type
        } else {
            supported[0]
        };
        if !supported.is_empty() {
            self.supported_order_types = supported;
        }
        self.select_order_type(next);

        tracing::info!(
            option_root_id,
            supported = ?space.supported_order_types,
            order_type = %next,
            "option series loaded"
        );
        Ok(space)
    }

    /// Precheck the working order and log the classified result.
    pub async fn precheck(&mut self) -> Result<(PrecheckOutcome, PrecheckResponse)> {
        self.order.set_account_key(self.client.account_key());
        let response = self
            .client
            .precheck_order(&self.order)
            .await
            .inspect_err(report)?
            .into_body();

        let outcome = response.outcome();
        match &outcome {
            PrecheckOutcome::Placeable => {
                tracing::info!(extra = ?response.extra, "precheck passed, order can be placed");
            }
            PrecheckOutcome::FunctionalError(info) => {
                tracing::warn!(error = %info, response = ?response, "precheck passed with a functional error");
            }
            PrecheckOutcome::Rejected { result, .. } => {
                tracing::warn!(%result, response = ?response, "precheck rejected the order");
            }
        }
        Ok((outcome, response))
    }

    /// Place the working order and remember its id.
    pub async fn place(&mut self) -> Result<Submission<PlaceOrderResponse>> {
        self.order.set_account_key(self.client.account_key());
        let request_id = self.request_id();
        let submission = self
            .client
            .place_order(&self.order, request_id.as_deref())
            .await
            .inspect_err(report)?;

        let id = submission.body.multi_leg_order_id.clone();
        tracing::info!(
            multi_leg_order_id = %id,
            echoed_request_id = ?submission.request_id,
            "order placed"
        );
        self.last_order_id = Some(id);
        Ok(submission)
    }

    /// Modify the last placed order with the working order.
    pub async fn modify(&mut self) -> Result<Submission<OrderAck>> {
        let id = self.last_order_id.clone().ok_or(SaxoError::NoLastOrder)?;
        self.order.set_account_key(self.client.account_key());
        let request_id = self.request_id();
        let submission = self
            .client
            .modify_order(&self.order, &id, request_id.as_deref())
            .await
            .inspect_err(report)?;

        tracing::info!(
            multi_leg_order_id = %id,
            echoed_request_id = ?submission.request_id,
            "order modified"
        );
        Ok(submission)
    }

    /// Cancel the last placed order. The stored id is cleared on success.
    pub async fn cancel(&mut self) -> Result<OrderAck> {
        let id = self.last_order_id.clone().ok_or(SaxoError::NoLastOrder)?;
        let ack = self.client.cancel_order(&id).await.inspect_err(report)?;
        tracing::info!(multi_leg_order_id = %id, "order cancelled");
        self.last_order_id = None;
        Ok(ack)
    }

    fn request_id(&self) -> Option<String> {
        if self.use_reference_as_request_id {
            self.order.external_reference().map(str::to_owned)
        } else {
            None
        }
    }
}

/// Log a failed call. API rejections carry the gateway's error body; anything
/// else is a transport or decoding failure.
fn report(err: &SaxoError) {
    match err {
        SaxoError::Api(body) => tracing::error!(error = %body, "request rejected by the gateway"),
        SaxoError::HttpStatus { status, body } => {
            tracing::error!(%status, %body, "request failed")
        }
        other => tracing::error!(error = %other, "request not completed"),
    }
}
