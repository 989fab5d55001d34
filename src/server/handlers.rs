use super::types::{
    ErrorResponse, EtymologyQuery, METHOD_NOT_ALLOWED, PARSE_FAILED, UPSTREAM_FAILED,
    WORD_REQUIRED,
};
use crate::{Error, etymology::EtymologyService};
use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::Json,
};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub etymology: EtymologyService,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn get_etymology(
    State(state): State<AppState>,
    method: Method,
    query: Option<Query<EtymologyQuery>>,
) -> Result<Json<Value>, ApiError> {
    if method != Method::GET {
        warn!("Rejected {} request to etymology endpoint", method);
        return Err((
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse::new(METHOD_NOT_ALLOWED)),
        ));
    }

    let word = query
        .and_then(|Query(q)| q.word)
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(WORD_REQUIRED)),
            )
        })?;

    let request_id = Uuid::new_v4();
    let span = info_span!("etymology", %request_id, %word);

    async move {
        info!("Received etymology request");

        match state.etymology.lookup(&word).await {
            Ok(value) => {
                info!("Successfully fetched etymology");
                Ok(Json(value))
            }
            Err(Error::UpstreamFormat { raw, .. }) => Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(PARSE_FAILED).with_details(raw)),
            )),
            Err(e) => {
                if e.is_upstream_transport() {
                    error!("Error calling model API: {}", e);
                } else {
                    error!("Unexpected error during etymology lookup: {}", e);
                }
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(UPSTREAM_FAILED)),
                ))
            }
        }
    }
    .instrument(span)
    .await
}
