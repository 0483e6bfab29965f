use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use super::render::render_dashboard;
use super::SharedDataset;
use crate::color;
use crate::data::aggregate::AggregateRow;
use crate::data::filter::{Choice, FilterSelection};
use crate::data::histogram::Distribution;
use crate::data::model::{Dataset, Parameter};
use crate::error::{PageError, QueryError};
use crate::pipeline::{DashboardView, TablePage};

/// Query string shared by the page and the JSON view. `page` is one-based.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub parameter: Option<String>,
    pub sex: Option<String>,
    pub species: Option<String>,
    pub page: Option<usize>,
}

impl DashboardQuery {
    /// Missing fields fall back to the defaults; unknown values are rejected.
    pub fn selection(&self, dataset: &Dataset) -> Result<FilterSelection, QueryError> {
        let parameter = match self.parameter.as_deref() {
            Some(p) => p.parse()?,
            None => Parameter::default(),
        };
        let selection = FilterSelection {
            parameter,
            sex: self.sex.as_deref().map(Choice::from).unwrap_or_default(),
            species: self.species.as_deref().map(Choice::from).unwrap_or_default(),
        };
        selection.validate(dataset)?;
        Ok(selection)
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page.unwrap_or(1).saturating_sub(1)
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        log::debug!("Rejected dashboard query: {self}");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Query(err) => err.into_response(),
            PageError::Chart(err) => {
                log::error!("{err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to draw charts").into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// HTML page
// ---------------------------------------------------------------------------

pub async fn dashboard(
    State(dataset): State<SharedDataset>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, PageError> {
    let selection = query.selection(&dataset)?;
    let view = DashboardView::compute(&dataset, &selection, 0);
    Ok(Html(render_dashboard(&dataset, &view, query.page_index())?))
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ParameterOption {
    pub value: Parameter,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IslandOption {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub parameters: Vec<ParameterOption>,
    pub sex: Vec<Choice>,
    pub species: Vec<Choice>,
    /// Islands with their chart colours.
    pub islands: Vec<IslandOption>,
}

pub async fn api_options(State(dataset): State<SharedDataset>) -> Json<OptionsResponse> {
    Json(OptionsResponse {
        parameters: Parameter::ALL
            .into_iter()
            .map(|p| ParameterOption {
                value: p,
                label: p.label(),
            })
            .collect(),
        sex: Choice::options(dataset.sexes()),
        species: Choice::options(dataset.species()),
        islands: dataset
            .islands()
            .iter()
            .map(|name| IslandOption {
                name: name.clone(),
                color: color::to_hex(color::island_color(name)),
            })
            .collect(),
    })
}

#[derive(Debug, Serialize)]
pub struct ViewResponse<'a> {
    pub selection: &'a FilterSelection,
    pub row_count: usize,
    pub means: &'a [AggregateRow],
    pub distribution: &'a Distribution,
    pub page: TablePage<'a>,
}

pub async fn api_view(
    State(dataset): State<SharedDataset>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, QueryError> {
    let selection = query.selection(&dataset)?;
    let view = DashboardView::compute(&dataset, &selection, 0);

    let body = ViewResponse {
        selection: &view.selection,
        row_count: view.rows.len(),
        means: &view.means,
        distribution: &view.distribution,
        page: view.page(&dataset, query.page_index()),
    };
    Ok(Json(&body).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value as JsonValue;
    use tower::ServiceExt;

    use super::*;
    use crate::data::fixtures::sample_dataset;
    use crate::web::build_router;

    async fn get(uri: &str) -> (StatusCode, String) {
        let app = build_router(Arc::new(sample_dataset()));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn query_defaults_and_page_index() {
        let ds = sample_dataset();
        let q = DashboardQuery::default();
        assert_eq!(q.selection(&ds).unwrap(), FilterSelection::default());
        assert_eq!(q.page_index(), 0);

        let q = DashboardQuery {
            page: Some(0),
            ..DashboardQuery::default()
        };
        assert_eq!(q.page_index(), 0);
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let ds = sample_dataset();
        let q = DashboardQuery {
            parameter: Some("tail_length".into()),
            ..DashboardQuery::default()
        };
        assert_eq!(
            q.selection(&ds),
            Err(QueryError::UnknownParameter("tail_length".into()))
        );
    }

    #[tokio::test]
    async fn dashboard_page_renders() {
        let (status, body) = get("/?parameter=flipper_length_mm&sex=FEMALE").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Penguin Analytics Dashboard"));
        assert!(body.contains("Page 1 of 1"));
        assert!(body.contains(r#"<option value="FEMALE" selected>"#));
    }

    #[tokio::test]
    async fn empty_selection_still_renders() {
        let (status, body) = get("/?sex=MALE&species=Chinstrap").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No penguins match the current filters."));
    }

    #[test]
    fn chart_failure_is_a_server_error() {
        let err = PageError::from(crate::error::ChartError {
            chart: "mean",
            message: "backend closed".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = PageError::from(QueryError::UnknownParameter("x".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_option_is_bad_request() {
        let (status, body) = get("/?species=Emperor").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "unknown species 'Emperor'");
    }

    #[tokio::test]
    async fn view_for_gentoo_has_single_island() {
        let (status, body) = get("/api/view?species=Gentoo").await;
        assert_eq!(status, StatusCode::OK);

        let json: JsonValue = serde_json::from_str(&body).unwrap();
        assert_eq!(json["row_count"], 4);
        assert_eq!(json["means"].as_array().unwrap().len(), 1);
        assert_eq!(json["means"][0]["island"], "Biscoe");
        assert_eq!(json["page"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(json["distribution"]["series"][0]["bins"].as_array().unwrap().len(), 30);
    }

    #[tokio::test]
    async fn options_list_all_first() {
        let (status, body) = get("/api/options").await;
        assert_eq!(status, StatusCode::OK);

        let json: JsonValue = serde_json::from_str(&body).unwrap();
        assert_eq!(json["parameters"].as_array().unwrap().len(), 4);
        assert_eq!(json["parameters"][0]["value"], "body_mass_g");
        assert_eq!(json["sex"], serde_json::json!(["All", "MALE", "FEMALE"]));
        assert_eq!(json["species"][0], "All");
        assert_eq!(json["islands"][0]["name"], "Torgersen");
        assert_eq!(json["islands"][0]["color"], "#7e6c6c");
    }
}
