//! Core types for the opportunities API

use serde::{Deserialize, Serialize};

/// Opportunity ID type
pub type OpportunityId = u64;

/// A job listing with its presumed relevance score.
///
/// Field order is part of the wire contract; serde emits fields in
/// declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    pub company: String,
    /// Place name or "Remote"
    pub location: String,
    pub description: String,
    /// No range is defined; values are carried as-is.
    pub match_score: u32,
}

impl Opportunity {
    pub fn new(
        id: OpportunityId,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        match_score: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: description.into(),
            match_score,
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Body of `GET /api/opportunities`, borrowing the catalog's records
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OpportunitiesResponse<'a> {
    pub opportunities: &'a [Opportunity],
}

/// Body returned for paths with no route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opportunity_serializes_fields_in_contract_order() {
        let opportunity = Opportunity::new(7, "Title", "Company", "Remote", "Desc", 50);
        let json = serde_json::to_string(&opportunity).unwrap();

        assert_eq!(
            json,
            r#"{"id":7,"title":"Title","company":"Company","location":"Remote","description":"Desc","match_score":50}"#
        );
    }

    #[test]
    fn opportunities_response_serializes_borrowed_records() {
        let records = vec![
            Opportunity::new(1, "A", "B", "C", "D", 1),
            Opportunity::new(2, "E", "F", "Remote", "G", 2),
        ];
        let body = OpportunitiesResponse {
            opportunities: &records,
        };
        let value = serde_json::to_value(body).unwrap();

        assert_eq!(value["opportunities"].as_array().unwrap().len(), 2);
        assert_eq!(value["opportunities"][1]["location"], "Remote");
    }

    #[test]
    fn health_response_shape() {
        let body = HealthResponse {
            status: "healthy".to_string(),
            service: "svc".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value, serde_json::json!({"status": "healthy", "service": "svc"}));
    }
}
