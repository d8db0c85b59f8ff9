//! JSON request handling for the chart and chat endpoints.
//!
//! Transport-agnostic: a caller hands over the request path and body and
//! gets back a status code and a JSON body.

use crate::error::ChartError;
use crate::geocode::Geocoder;
use crate::insight::{respond, InsightMessage};
use crate::time::{parse_birth_datetime, parse_clock_time, BirthInput};
use crate::vedic::{Chart, ChartService};
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERATE_BIRTH_CHART_PATH: &str = "/vedic_astrology_project/script/generate-birth-chart";
pub const CHAT_PATH: &str = "/vedic_astrology_project/script/chat";

const CHART_FAILURE: &str = "Failed to generate birth chart";
const CHAT_FAILURE: &str = "Failed to process your message";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthChartRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// ISO-8601 date-time; its time of day is the one used.
    pub date: String,
    /// `HH:MM`, informational only.
    #[serde(default)]
    pub time: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub birth_details: Option<Value>,
    pub birth_chart: Chart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok<T: Serialize>(payload: &T, failure: &str) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, e.to_string(), failure),
        }
    }

    fn error(status: u16, error: impl Into<String>, message: &str) -> Self {
        let body = ErrorBody {
            error: error.into(),
            message: message.to_string(),
        };
        Self {
            status,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }
}

/// Chart generation and chat, wired to an ephemeris and a geocoder.
pub struct AstrologyService {
    charts: ChartService,
    geocoder: Box<dyn Geocoder>,
}

impl AstrologyService {
    pub fn new(charts: ChartService, geocoder: Box<dyn Geocoder>) -> Self {
        Self { charts, geocoder }
    }

    pub fn generate_birth_chart(&self, request: &BirthChartRequest) -> Result<Chart, ChartError> {
        let timestamp = parse_birth_datetime(&request.date)?;
        if let Some(time) = request.time.as_deref() {
            report_time_mismatch(timestamp, time);
        }
        let location = self.geocoder.resolve_location(&request.location)?;
        let input = BirthInput::new(timestamp, location)?;

        log::info!(
            "Generating chart for {} at {} ({:.4}, {:.4})",
            request.name.as_deref().unwrap_or("anonymous"),
            timestamp,
            location.lat,
            location.lon
        );
        Ok(self.charts.chart_for(&input))
    }

    pub fn chat(&self, request: &ChatRequest) -> InsightMessage {
        respond(&request.message, &request.birth_chart)
    }

    /// Route a JSON request body by path.
    pub fn handle(&self, path: &str, body: &str) -> ApiResponse {
        let route = path.trim_end_matches('/');
        if route.ends_with("generate-birth-chart") {
            let result = serde_json::from_str::<BirthChartRequest>(body)
                .map_err(ChartError::from)
                .and_then(|request| self.generate_birth_chart(&request));
            match result {
                Ok(chart) => ApiResponse::ok(&chart, CHART_FAILURE),
                Err(e) => {
                    log::error!("Error generating birth chart: {}", e);
                    ApiResponse::error(500, e.to_string(), CHART_FAILURE)
                }
            }
        } else if route.ends_with("chat") {
            match serde_json::from_str::<ChatRequest>(body) {
                Ok(request) => ApiResponse::ok(&self.chat(&request), CHAT_FAILURE),
                Err(e) => {
                    log::error!("Error processing chat: {}", e);
                    ApiResponse::error(500, ChartError::from(e).to_string(), CHAT_FAILURE)
                }
            }
        } else {
            ApiResponse::error(404, format!("No route for {}", path), "Not found")
        }
    }
}

/// The date's own time of day wins; a disagreeing `time` field is logged.
fn report_time_mismatch(timestamp: DateTime<Utc>, time: &str) {
    match parse_clock_time(time) {
        Some(clock) if clock.hour() != timestamp.hour() || clock.minute() != timestamp.minute() => {
            log::warn!(
                "Request time field {} differs from the date's UTC time {}; using the date",
                time,
                timestamp.format("%H:%M")
            );
        }
        Some(_) => {}
        None => log::warn!("Ignoring unparseable time field '{}'", time),
    }
}
