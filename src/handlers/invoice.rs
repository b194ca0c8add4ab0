// src/handlers/invoice.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    error::AppError,
    extract::{AppJson, AppPath},
    models::{
        company::Company,
        invoice::{
            CreateInvoiceRequest, Invoice, InvoiceDetail, InvoiceSummary, UpdateInvoiceRequest,
            next_paid_date,
        },
    },
};

/// Lists every invoice as `{id, comp_code}`.
pub async fn list_invoices(State(pool): State<PgPool>) -> Result<impl IntoResponse, AppError> {
    let invoices =
        sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
            .fetch_all(&pool)
            .await?;

    Ok(Json(json!({ "invoices": invoices })))
}

/// Retrieves an invoice and its owning company (two concurrent reads, no snapshot).
pub async fn get_invoice(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = sqlx::query_as::<_, Invoice>(
        "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&pool);

    let company = sqlx::query_as::<_, Company>(
        r#"
        SELECT c.code, c.name, c.description
        FROM companies AS c
        JOIN invoices AS inv ON inv.comp_code = c.code
        WHERE inv.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&pool);

    let (invoice, company) = tokio::try_join!(invoice, company)?;

    let invoice = invoice
        .ok_or_else(|| AppError::NotFound(format!("Can't find invoice with id of {}", id)))?;

    Ok(Json(json!({ "invoice": InvoiceDetail::new(invoice, company) })))
}

/// Creates an unpaid invoice dated today.
pub async fn create_invoice(
    State(pool): State<PgPool>,
    AppJson(payload): AppJson<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        INSERT INTO invoices (comp_code, amt)
        VALUES ($1, $2)
        RETURNING id, comp_code, amt, paid, add_date, paid_date
        "#,
    )
    .bind(&payload.comp_code)
    .bind(payload.amt)
    .fetch_one(&pool)
    .await?;

    tracing::info!("Created invoice {} for {}", invoice.id, invoice.comp_code);

    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

/// Updates the amount and payment status of an invoice.
///
/// The row is locked while the new `paid_date` is decided so that two
/// concurrent payments cannot both observe the unpaid state.
pub async fn update_invoice(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut tx = pool.begin().await?;

    let (was_paid, current_paid_date, today) =
        sqlx::query_as::<_, (bool, Option<NaiveDate>, NaiveDate)>(
            "SELECT paid, paid_date, CURRENT_DATE FROM invoices WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Can't update invoice with id of {}", id)))?;

    let paid = payload.paid.unwrap_or(was_paid);
    let paid_date = next_paid_date(was_paid, current_paid_date, paid, today);

    let invoice = sqlx::query_as::<_, Invoice>(
        r#"
        UPDATE invoices
        SET amt = $1, paid = $2, paid_date = $3
        WHERE id = $4
        RETURNING id, comp_code, amt, paid, add_date, paid_date
        "#,
    )
    .bind(payload.amt)
    .bind(paid)
    .bind(paid_date)
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    if paid != was_paid {
        tracing::info!("Invoice {} marked {}", id, if paid { "paid" } else { "unpaid" });
    }

    Ok(Json(json!({ "invoice": invoice })))
}

/// Deletes an invoice. Idempotent, like company deletion.
pub async fn delete_invoice(
    State(pool): State<PgPool>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!("Delete of unknown invoice {} ignored", id);
    }

    Ok(Json(json!({ "status": "DELETED" })))
}
