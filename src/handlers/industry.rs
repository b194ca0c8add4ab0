// src/handlers/industry.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    models::industry::{
        AssociateIndustryRequest, CompanyIndustry, CreateIndustryRequest, Industry,
        IndustryWithCompanies,
    },
};

/// Lists industries with the codes of their companies.
/// Industries without companies are included with an empty `comp_codes`.
pub async fn list_industries(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let industries = sqlx::query_as::<_, IndustryWithCompanies>(
        r#"
        SELECT
            i.code,
            i.industry,
            COALESCE(
                array_agg(ci.comp_code ORDER BY ci.comp_code)
                    FILTER (WHERE ci.comp_code IS NOT NULL),
                '{}'
            ) AS comp_codes
        FROM industries AS i
        LEFT JOIN companies_industries AS ci ON i.code = ci.ind_code
        GROUP BY i.code, i.industry
        ORDER BY i.code
        "#,
    )
    .fetch_all(&pool)
    .await?;

    Ok(Json(json!({ "industries": industries })))
}

pub async fn create_industry(
    State(pool): State<PgPool>,
    AppJson(payload): AppJson<CreateIndustryRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let industry = sqlx::query_as::<_, Industry>(
        "INSERT INTO industries (code, industry) VALUES ($1, $2) RETURNING code, industry",
    )
    .bind(&payload.code)
    .bind(&payload.industry)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "industry": industry }))))
}

/// Links a company to an industry.
/// Unknown codes are rejected by the foreign keys, not by a prior lookup.
pub async fn associate_company(
    State(pool): State<PgPool>,
    AppPath(comp_code): AppPath<String>,
    AppJson(payload): AppJson<AssociateIndustryRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let link = sqlx::query_as::<_, CompanyIndustry>(
        r#"
        INSERT INTO companies_industries (comp_code, ind_code)
        VALUES ($1, $2)
        RETURNING id, comp_code, ind_code
        "#,
    )
    .bind(comp_code.as_str())
    .bind(&payload.ind_code)
    .fetch_one(&pool)
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "company_industry": link }))))
}
