// src/models/industry.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'industries' table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Industry {
    pub code: String,
    /// Unique display name.
    pub industry: String,
}

/// An industry together with the codes of every associated company.
#[derive(Debug, FromRow, Serialize)]
pub struct IndustryWithCompanies {
    pub code: String,
    pub industry: String,
    pub comp_codes: Vec<String>,
}

/// Represents the 'companies_industries' join table.
#[derive(Debug, FromRow, Serialize)]
pub struct CompanyIndustry {
    pub id: i32,
    pub comp_code: String,
    pub ind_code: String,
}

/// DTO for creating an industry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIndustryRequest {
    #[validate(length(min = 1, max = 100))]
    pub code: String,

    #[validate(length(min = 1, max = 200))]
    pub industry: String,
}

/// DTO for linking a company (from the path) to an industry.
#[derive(Debug, Deserialize, Validate)]
pub struct AssociateIndustryRequest {
    #[validate(length(min = 1, max = 100))]
    pub ind_code: String,
}
