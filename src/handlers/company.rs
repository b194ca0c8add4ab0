// src/handlers/company.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    models::company::{
        Company, CompanyDetail, CompanySummary, CreateCompanyRequest, UpdateCompanyRequest,
    },
    utils::slug::slugify,
};

/// Lists every company as `{code, name}`.
pub async fn list_companies(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let companies =
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies ORDER BY code")
            .fetch_all(&pool)
            .await?;

    Ok(Json(json!({ "companies": companies })))
}

/// Retrieves a company together with its invoice ids and industry names.
///
/// The three reads are independent and run concurrently on the pool. They are
/// not wrapped in a transaction, so under concurrent writes the invoice and
/// industry lists may reflect a slightly different moment than the company row.
pub async fn get_company(
    State(pool): State<PgPool>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = sqlx::query_as::<_, Company>(
        "SELECT code, name, description FROM companies WHERE code = $1",
    )
    .bind(code.as_str())
    .fetch_optional(&pool);

    let invoices =
        sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1 ORDER BY id")
            .bind(code.as_str())
            .fetch_all(&pool);

    let industries = sqlx::query_scalar::<_, String>(
        r#"
        SELECT i.industry
        FROM industries AS i
        JOIN companies_industries AS ci ON ci.ind_code = i.code
        WHERE ci.comp_code = $1
        ORDER BY i.industry
        "#,
    )
    .bind(code.as_str())
    .fetch_all(&pool);

    let (company, invoices, industries) = tokio::try_join!(company, invoices, industries)?;

    let company = company
        .ok_or_else(|| AppError::NotFound(format!("Can't find company with code of {}", code)))?;

    Ok(Json(json!({
        "company": CompanyDetail::new(company, invoices, industries)
    })))
}

/// Creates a company.
/// An explicit `code` is used verbatim; otherwise the code is the slug of `name`.
pub async fn create_company(
    State(pool): State<PgPool>,
    AppJson(payload): AppJson<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let code = match &payload.code {
        Some(code) => code.clone(),
        None => slugify(&payload.name),
    };
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "Company code must contain at least one letter or digit".to_string(),
        ));
    }

    let company = sqlx::query_as::<_, Company>(
        r#"
        INSERT INTO companies (code, name, description)
        VALUES ($1, $2, $3)
        RETURNING code, name, description
        "#,
    )
    .bind(&code)
    .bind(&payload.name)
    .bind(&payload.description)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Created company {}", company.code);

    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// Updates a company's name and description. The code itself never changes.
pub async fn update_company(
    State(pool): State<PgPool>,
    AppPath(code): AppPath<String>,
    AppJson(payload): AppJson<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let company = sqlx::query_as::<_, Company>(
        r#"
        UPDATE companies
        SET name = $1, description = $2
        WHERE code = $3
        RETURNING code, name, description
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(code.as_str())
    .fetch_optional(&pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Can't update company with code of {}", code)))?;

    Ok(Json(json!({ "company": company })))
}

/// Deletes a company; invoices and industry links go with it (ON DELETE CASCADE).
/// Idempotent: answers DELETED whether or not the company existed.
pub async fn delete_company(
    State(pool): State<PgPool>,
    AppPath(code): AppPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM companies WHERE code = $1")
        .bind(code.as_str())
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!("Delete of unknown company {} ignored", code);
    }

    Ok(Json(json!({ "status": "DELETED" })))
}
