//! Upstream response shapes, trimmed to the fields the fetchers read.

use serde::Deserialize;
use serde_json::{Map, Number, Value};

// WeatherAPI

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Forecast,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub day: Day,
    pub astro: Astro,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Day {
    pub maxtemp_c: Number,
    pub mintemp_c: Number,
    pub avgtemp_c: Number,
    pub maxwind_kph: Number,
    pub avghumidity: Number,
    pub daily_chance_of_rain: Number,
    pub condition: Condition,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Condition {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Deserialize)]
pub struct Current {
    pub temp_c: Number,
    pub feelslike_c: Number,
    pub humidity: Number,
    pub wind_kph: Number,
    pub uv: Number,
    pub condition: Condition,
}

// Twitter/X

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub data: User,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub public_metrics: PublicMetrics,
}

#[derive(Debug, Deserialize)]
pub struct PublicMetrics {
    pub followers_count: u64,
    pub tweet_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct TrendPlace {
    /// Passed through untouched; entries vary (`promoted_content`, missing `url`).
    pub trends: Vec<Value>,
    pub locations: Vec<TrendLocation>,
}

#[derive(Debug, Deserialize)]
pub struct TrendLocation {
    pub name: String,
}

// Google Analytics Reporting v4

#[derive(Debug, Deserialize)]
pub struct BatchGetResponse {
    pub reports: Vec<AnalyticsReport>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsReport {
    pub data: ReportData,
}

#[derive(Debug, Deserialize)]
pub struct ReportData {
    pub totals: Vec<DateRangeValues>,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeValues {
    pub values: Vec<String>,
}

// Notion

#[derive(Clone, Debug, Deserialize)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Vec<RichText>,
    /// Kept as a raw map so property order survives deserialization.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RichText {
    pub plain_text: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub select: Option<OptionList>,
    #[serde(default)]
    pub multi_select: Option<OptionList>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct OptionList {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Database>,
}

impl Database {
    /// Plain text of the first title fragment.
    pub fn title_text(&self) -> Option<&str> {
        self.title.first().map(|t| t.plain_text.as_str())
    }

    /// Property names in the order the API returned them.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Decodes every property definition, in order.
    pub fn property_schemas(&self) -> serde_json::Result<Vec<(&str, PropertySchema)>> {
        self.properties
            .iter()
            .map(|(name, raw)| {
                PropertySchema::deserialize(raw).map(|schema| (name.as_str(), schema))
            })
            .collect()
    }
}

impl PropertySchema {
    /// Option names of a `select` or `multi_select` property.
    pub fn option_names(&self) -> Option<Vec<&str>> {
        let list = match self.kind.as_str() {
            "select" => self.select.as_ref(),
            "multi_select" => self.multi_select.as_ref(),
            _ => None,
        }?;
        Some(list.options.iter().map(|o| o.name.as_str()).collect())
    }
}
