//! HTTP handler functions for the hazard map API.
//!
//! Every state-requiring endpoint answers 400 with
//! `{"error": "State parameter is required"}` when `state` is missing.
//! Upstream failures become 500 with `{"error": ..., "fallback": true}`;
//! nothing is retried.

use actix_web::{HttpResponse, web};
use hazard_map_geography_models::state_fips;
use hazard_map_server_models::{ApiHealth, StateQuery, TestQuery};
use hazard_map_source::{census, cms, fema, nces, noaa, nri};
use serde_json::{Value, json};

use crate::AppState;

/// Declarations fetched by the FEMA diagnostic probe.
const TEST_FEMA_TOP: u32 = 10;

/// Sample coordinate (Los Angeles) used by the NOAA points probe.
const TEST_POINT: (f64, f64) = (34.0522, -118.2437);

/// The 400 response shared by all state-requiring endpoints.
fn missing_state() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "error": "State parameter is required"
    }))
}

/// The 500 response for upstream failures on proxy endpoints.
fn upstream_failure(error: &impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "error": error.to_string(),
        "fallback": true,
    }))
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/demographics?state=XX`
///
/// Proxies the Census ACS 5-year query, re-serving the header and value
/// rows alongside the normalized state code.
pub async fn demographics(
    state: web::Data<AppState>,
    params: web::Query<StateQuery>,
) -> HttpResponse {
    let Some(state_param) = params.state.as_deref() else {
        return missing_state();
    };
    let state_upper = state_param.to_uppercase();
    let fips = state_fips(&state_upper);

    match census::fetch_acs_state(&state.client, census::CENSUS_API_URL, fips).await {
        Ok(body) => match census::acs_rows(&body) {
            Ok((headers, data)) => HttpResponse::Ok().json(json!({
                "state": state_upper,
                "headers": headers,
                "data": data,
            })),
            Err(_) => HttpResponse::NotFound().json(json!({
                "error": "No data available"
            })),
        },
        Err(e) => {
            log::error!("Demographics proxy failed for {state_upper}: {e}");
            upstream_failure(&e)
        }
    }
}

/// `GET /api/hospitals?state=XX`
///
/// Proxies the CMS hospital datastore query, re-serving the raw record
/// array. An upstream response with no rows is an empty array, not an
/// error.
pub async fn hospitals(state: web::Data<AppState>, params: web::Query<StateQuery>) -> HttpResponse {
    let Some(state_param) = params.state.as_deref() else {
        return missing_state();
    };

    match cms::fetch_hospitals(&state.client, cms::CMS_API_URL, state_param).await {
        Ok(body) => HttpResponse::Ok().json(cms::hospital_rows(&body)),
        Err(e) => {
            log::error!("Hospital proxy failed for {state_param}: {e}");
            upstream_failure(&e)
        }
    }
}

/// `GET /api/risk-index?state=XX`
///
/// Proxies the FEMA National Risk Index counties query, re-serving the raw
/// county array.
pub async fn risk_index(
    state: web::Data<AppState>,
    params: web::Query<StateQuery>,
) -> HttpResponse {
    let Some(state_param) = params.state.as_deref() else {
        return missing_state();
    };

    match nri::fetch_counties(&state.client, nri::NRI_API_URL, &state_param.to_uppercase()).await {
        Ok(body) => {
            let rows = body.as_array().cloned().unwrap_or_default();
            HttpResponse::Ok().json(rows)
        }
        Err(e) => {
            log::error!("Risk index proxy failed for {state_param}: {e}");
            upstream_failure(&e)
        }
    }
}

/// `GET /api/schools?state=XX`
///
/// Proxies the NCES school directory query, re-serving the raw school
/// rows.
pub async fn schools(state: web::Data<AppState>, params: web::Query<StateQuery>) -> HttpResponse {
    let Some(state_param) = params.state.as_deref() else {
        return missing_state();
    };

    match nces::fetch_school_directory(&state.client, nces::NCES_API_URL, state_param).await {
        Ok(body) => HttpResponse::Ok().json(nces::school_rows(&body)),
        Err(e) => {
            log::error!("School proxy failed for {state_param}: {e}");
            upstream_failure(&e)
        }
    }
}

/// `GET /api/test-fema?state=XX`
///
/// Diagnostic probe confirming the OpenFEMA declarations API responds.
/// The state defaults to California.
pub async fn test_fema(state: web::Data<AppState>, params: web::Query<TestQuery>) -> HttpResponse {
    let state_param = params.state.as_deref().unwrap_or("CA").to_uppercase();

    match fema::fetch_declarations(
        &state.client,
        fema::FEMA_API_URL,
        &state_param,
        TEST_FEMA_TOP,
    )
    .await
    {
        Ok(body) => {
            let raw = body
                .get("DisasterDeclarationsSummaries")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let declarations = fema::normalize_declarations(&body, chrono::Utc::now());

            HttpResponse::Ok().json(json!({
                "success": true,
                "state": state_param,
                "totalRecords": raw.len(),
                "declarations": declarations,
                "rawSample": raw.first(),
                "metadata": body.get("metadata"),
                "message": "FEMA API is working correctly",
                "apiEndpoint": format!(
                    "{}/DisasterDeclarationsSummaries?$filter=state eq '{state_param}'&$top={TEST_FEMA_TOP}&$orderby=declarationDate desc",
                    fema::FEMA_API_URL
                ),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": e.to_string(),
            "state": state_param,
        })),
    }
}

/// `GET /api/test-noaa?state=XX`
///
/// Diagnostic probe confirming the NWS alerts and points APIs respond.
/// The state defaults to California; the points probe uses a fixed Los
/// Angeles coordinate.
pub async fn test_noaa(state: web::Data<AppState>, params: web::Query<TestQuery>) -> HttpResponse {
    let state_param = params.state.as_deref().unwrap_or("CA").to_uppercase();
    let (lat, lon) = TEST_POINT;

    let alerts = noaa::fetch_active_alerts(&state.client, noaa::NOAA_API_URL, &state_param).await;
    let points = noaa::fetch_point_metadata(&state.client, noaa::NOAA_API_URL, lat, lon).await;

    match (alerts, points) {
        (Ok(alerts_body), Ok(points_body)) => {
            let features = alerts_body
                .get("features")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let props = &points_body["properties"];

            HttpResponse::Ok().json(json!({
                "success": true,
                "state": state_param,
                "alerts": {
                    "count": features.len(),
                    "data": features.iter().take(2).collect::<Vec<_>>(),
                    "title": alerts_body.get("title"),
                    "updated": alerts_body.get("updated"),
                },
                "forecast": {
                    "gridId": props.get("gridId"),
                    "office": props.get("cwa"),
                    "forecastUrl": props.get("forecast"),
                },
                "message": "NOAA API is working correctly with User-Agent header",
            }))
        }
        (Err(e), _) | (_, Err(e)) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": e.to_string(),
        })),
    }
}
