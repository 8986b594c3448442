use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::{
    AmountError, EthAmount, Recipient, SecretString, TransactionResult, TransferIntent,
};
use crate::presentation::state::AppState;

use super::error_response::InputError;

/// Accepts the field names of both historical clients.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEthRequest {
    #[serde(alias = "basename", alias = "baseName")]
    pub recipient_name: Option<String>,
    #[serde(alias = "amountInEth")]
    pub amount: Option<AmountInput>,
    pub sender_private_key: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    fn to_amount(&self) -> Result<EthAmount, AmountError> {
        match self {
            AmountInput::Number(n) => EthAmount::from_f64(*n),
            AmountInput::Text(s) => EthAmount::parse(s),
        }
    }
}

/// Send failures keep the transaction result shape even for bad input.
fn rejected(e: InputError) -> axum::response::Response {
    tracing::warn!(error = %e, "Send request rejected");
    (
        e.status(),
        Json(TransactionResult::failed(e.to_string(), None, None)),
    )
        .into_response()
}

#[tracing::instrument(skip(state, request))]
pub async fn send_eth_handler(
    State(state): State<AppState>,
    Json(request): Json<SendEthRequest>,
) -> impl IntoResponse {
    let (Some(name), Some(amount)) = (
        request.recipient_name.as_deref().filter(|n| !n.trim().is_empty()),
        request.amount.as_ref(),
    ) else {
        return rejected(InputError::MissingFields);
    };

    let amount = match amount.to_amount() {
        Ok(a) => a,
        Err(e) => return rejected(e.into()),
    };

    let Some(recipient) = Recipient::from_token(name, state.interpreter.parser().default_suffix())
    else {
        return rejected(InputError::MissingFields);
    };

    let intent = TransferIntent::new(amount, recipient);
    let signer = request.sender_private_key.as_ref().filter(|k| !k.is_empty());

    let result = state.transfer_service.execute(&intent, signer).await;
    (StatusCode::OK, Json(result)).into_response()
}
