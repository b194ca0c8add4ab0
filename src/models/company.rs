// src/models/company.rs

use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::sync::LazyLock;
use validator::Validate;

/// Characters a code may use so it can appear unescaped in a URL path.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").expect("code pattern is a valid regex"));

/// Represents the 'companies' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Company {
    /// Primary key and URL identifier. Never changes once assigned.
    pub code: String,

    pub name: String,

    pub description: Option<String>,
}

/// Projection used by the company listing.
#[derive(Debug, FromRow, Serialize)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// A company merged with the ids of its invoices and its industry names.
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
    pub industries: Vec<String>,
}

impl CompanyDetail {
    pub fn new(company: Company, invoices: Vec<i32>, industries: Vec<String>) -> Self {
        Self {
            code: company.code,
            name: company.name,
            description: company.description,
            invoices,
            industries,
        }
    }
}

/// DTO for creating a company.
/// An explicit `code` is stored as given; when omitted it is derived from `name`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(
        length(min = 1, max = 100, message = "Code length must be between 1 and 100 chars"),
        custom(function = validate_code)
    )]
    pub code: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 chars"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

/// Rejects codes that would need escaping in `/companies/{code}`.
fn validate_code(code: &str) -> Result<(), validator::ValidationError> {
    if !CODE_PATTERN.is_match(code) {
        return Err(validator::ValidationError::new("invalid_code")
            .with_message("Code may only contain letters, digits, '-', '_', '.' and '~'".into()));
    }
    Ok(())
}

/// DTO for updating a company. The code comes from the path and is immutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 200, message = "Name length must be between 1 and 200 chars"))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}
