use reqwest::Client;
use serde::Serialize;
use serde_json::Number;
use tracing::info;

use crate::config::{require, WeatherConfig};
use crate::error::{FetchError, Result};
use crate::http::{build_client, send_json, trim_base};
use crate::models::{CurrentResponse, ForecastDay, ForecastResponse};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TomorrowForecast {
    pub date: String,
    pub max_temp: Number,
    pub min_temp: Number,
    pub avg_temp: Number,
    pub condition: String,
    pub chance_of_rain: Number,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: Number,
    pub wind: Number,
}

impl From<ForecastDay> for TomorrowForecast {
    fn from(day: ForecastDay) -> Self {
        TomorrowForecast {
            date: day.date,
            max_temp: day.day.maxtemp_c,
            min_temp: day.day.mintemp_c,
            avg_temp: day.day.avgtemp_c,
            condition: day.day.condition.text,
            chance_of_rain: day.day.daily_chance_of_rain,
            sunrise: day.astro.sunrise,
            sunset: day.astro.sunset,
            humidity: day.day.avghumidity,
            wind: day.day.maxwind_kph,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temp: String,
    pub condition: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub uv: Number,
    pub location: String,
    pub country: String,
    pub local_time: String,
    pub forecast: Vec<DayOutlook>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOutlook {
    pub date: String,
    pub max_temp: String,
    pub min_temp: String,
    pub condition: String,
    pub chance_of_rain: String,
}

impl From<&ForecastDay> for DayOutlook {
    fn from(day: &ForecastDay) -> Self {
        DayOutlook {
            date: day.date.clone(),
            max_temp: celsius(&day.day.maxtemp_c),
            min_temp: celsius(&day.day.mintemp_c),
            condition: day.day.condition.text.clone(),
            chance_of_rain: format!("{}%", day.day.daily_chance_of_rain),
        }
    }
}

/// What `weather current` prints: live data, or placeholders plus the error.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherSummary {
    Available(CurrentWeather),
    #[serde(rename_all = "camelCase")]
    Unavailable {
        temp: String,
        condition: String,
        feels_like: String,
        humidity: String,
        error: String,
    },
}

impl WeatherSummary {
    pub fn unavailable(error: &FetchError) -> Self {
        WeatherSummary::Unavailable {
            temp: "N/A".to_string(),
            condition: "Unable to fetch weather".to_string(),
            feels_like: "N/A".to_string(),
            humidity: "N/A".to_string(),
            error: error.to_string(),
        }
    }
}

/// WeatherAPI sends whole degrees as integers; they print without a decimal.
fn celsius(value: &Number) -> String {
    format!("{}°C", value)
}

pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
    location: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = require(&config.api_key, "WEATHER_API_KEY")?.to_string();
        Ok(WeatherClient {
            client: build_client()?,
            base_url: trim_base(&config.api_url).to_string(),
            api_key,
            location: config.location.clone(),
        })
    }

    async fn forecast(&self, days: u8) -> Result<ForecastResponse> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = days.to_string();
        info!("Fetching {}-day forecast for {}", days, self.location);

        send_json(self.client.get(&url).query(&[
            ("key", self.api_key.as_str()),
            ("q", self.location.as_str()),
            ("days", days.as_str()),
            ("aqi", "no"),
        ]))
        .await
    }

    /// Tomorrow's forecast: day index 1 of a two-day forecast.
    pub async fn tomorrow(&self) -> Result<TomorrowForecast> {
        let response = self.forecast(2).await?;
        let tomorrow = response
            .forecast
            .forecastday
            .into_iter()
            .nth(1)
            .ok_or_else(|| {
                FetchError::UnexpectedShape("forecast has no entry for tomorrow".into())
            })?;

        Ok(tomorrow.into())
    }

    /// Current conditions plus a three-day outlook.
    pub async fn current(&self) -> Result<CurrentWeather> {
        let url = format!("{}/current.json", self.base_url);
        info!("Fetching current weather for {}", self.location);

        let now: CurrentResponse = send_json(
            self.client
                .get(&url)
                .query(&[("key", self.api_key.as_str()), ("q", self.location.as_str())]),
        )
        .await?;

        let outlook = self.forecast(3).await?;

        Ok(CurrentWeather {
            temp: celsius(&now.current.temp_c),
            condition: now.current.condition.text,
            feels_like: celsius(&now.current.feelslike_c),
            humidity: format!("{}%", now.current.humidity),
            wind: format!("{} kph", now.current.wind_kph),
            uv: now.current.uv,
            location: now.location.name,
            country: now.location.country,
            local_time: now.location.localtime,
            forecast: outlook.forecast.forecastday.iter().map(DayOutlook::from).collect(),
        })
    }
}

pub async fn fetch_tomorrow(config: &WeatherConfig) -> Result<TomorrowForecast> {
    WeatherClient::new(config)?.tomorrow().await
}

pub async fn fetch_current(config: &WeatherConfig) -> WeatherSummary {
    let result = match WeatherClient::new(config) {
        Ok(client) => client.current().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(weather) => WeatherSummary::Available(weather),
        Err(e) => {
            tracing::error!("Error fetching weather: {}", e);
            WeatherSummary::unavailable(&e)
        }
    }
}
