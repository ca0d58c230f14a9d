//! Regional risk analytics endpoints.

use std::collections::HashMap;

use super::api::{ApiClient, ApiError};
use super::types::{AdminDashboardData, DiseaseDistribution, EnvironmentalData, RegionRisk, TrendPoint};

/// Latest risk snapshot for every tracked region.
pub async fn region_risk(api: &ApiClient) -> Result<Vec<RegionRisk>, ApiError> {
    api.get("/region/risk").await
}

/// Risk trend, optionally narrowed to one region and a day window.
pub async fn region_trend(
    api: &ApiClient,
    region: Option<&str>,
    days: Option<u32>,
) -> Result<Vec<TrendPoint>, ApiError> {
    let mut query = Vec::new();
    if let Some(region) = region {
        query.push(("region", region.to_owned()));
    }
    if let Some(days) = days {
        query.push(("days", days.to_string()));
    }
    api.get_query("/region/trend", &query).await
}

/// Full admin overview: totals, trends, per-region risk, water and weather.
pub async fn admin_overview(api: &ApiClient) -> Result<AdminDashboardData, ApiError> {
    api.get("/admin/risk-overview").await
}

/// Top diagnoses across approved records.
pub async fn disease_distribution(api: &ApiClient) -> Result<Vec<DiseaseDistribution>, ApiError> {
    api.get("/analytics/diseases").await
}

/// Disease counts keyed by name, for callers that want a lookup map.
pub async fn disease_counts(api: &ApiClient) -> Result<HashMap<String, i64>, ApiError> {
    let distribution = disease_distribution(api).await?;
    Ok(distribution
        .into_iter()
        .map(|entry| (entry.disease, entry.count))
        .collect())
}

/// Environmental snapshots, for one region or all tracked regions.
pub async fn environmental(
    api: &ApiClient,
    region: Option<&str>,
) -> Result<Vec<EnvironmentalData>, ApiError> {
    let mut query = Vec::new();
    if let Some(region) = region {
        query.push(("region", region.to_owned()));
    }
    api.get_query("/analytics/environmental", &query).await
}
