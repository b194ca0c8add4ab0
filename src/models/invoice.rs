// src/models/invoice.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::company::Company;

/// Represents the 'invoices' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,

    /// Owning company. Rows are removed together with the company.
    pub comp_code: String,

    /// Always strictly positive (enforced by a CHECK constraint).
    pub amt: f64,

    pub paid: bool,

    pub add_date: NaiveDate,

    /// Set when the invoice flips to paid, cleared when it flips back.
    pub paid_date: Option<NaiveDate>,
}

/// Projection used by the invoice listing.
#[derive(Debug, FromRow, Serialize)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// An invoice merged with its owning company.
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    /// `None` only if the company vanished between the two reads.
    pub company: Option<Company>,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Option<Company>) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

/// DTO for creating an invoice.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, message = "comp_code must not be empty"))]
    pub comp_code: String,

    #[validate(range(exclusive_min = 0.0, message = "amt must be greater than 0"))]
    pub amt: f64,
}

/// DTO for updating an invoice.
/// Omitting `paid` leaves the payment status (and `paid_date`) untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(range(exclusive_min = 0.0, message = "amt must be greater than 0"))]
    pub amt: f64,

    pub paid: Option<bool>,
}

/// Computes the `paid_date` an invoice should carry after an update.
///
/// * unpaid -> paid: stamped with `today`
/// * anything -> unpaid: cleared
/// * paid -> paid: the existing date is kept
pub fn next_paid_date(
    was_paid: bool,
    current: Option<NaiveDate>,
    paid: bool,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match (was_paid, paid) {
        (false, true) => Some(today),
        (_, false) => None,
        (true, true) => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn paying_an_unpaid_invoice_stamps_today() {
        let today = date(2024, 3, 1);
        assert_eq!(next_paid_date(false, None, true, today), Some(today));
    }

    #[test]
    fn unpaying_clears_the_date() {
        let today = date(2024, 3, 1);
        assert_eq!(next_paid_date(true, Some(date(2024, 1, 5)), false, today), None);
    }

    #[test]
    fn staying_paid_keeps_the_original_date() {
        let paid_on = date(2024, 1, 5);
        assert_eq!(next_paid_date(true, Some(paid_on), true, date(2024, 3, 1)), Some(paid_on));
    }

    #[test]
    fn staying_unpaid_has_no_date() {
        assert_eq!(next_paid_date(false, None, false, date(2024, 3, 1)), None);
    }

    #[test]
    fn create_request_requires_positive_amount() {
        let zero: CreateInvoiceRequest =
            serde_json::from_value(json!({"comp_code": "apple", "amt": 0})).unwrap();
        let negative: CreateInvoiceRequest =
            serde_json::from_value(json!({"comp_code": "apple", "amt": -12.5})).unwrap();
        let ok: CreateInvoiceRequest =
            serde_json::from_value(json!({"comp_code": "apple", "amt": 222})).unwrap();

        assert!(zero.validate().is_err());
        assert!(negative.validate().is_err());
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn update_request_paid_is_optional() {
        let req: UpdateInvoiceRequest = serde_json::from_value(json!({"amt": 333})).unwrap();
        assert_eq!(req.paid, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn detail_serializes_dates_as_iso_strings() {
        let invoice = Invoice {
            id: 7,
            comp_code: "ibm".to_string(),
            amt: 400.0,
            paid: true,
            add_date: date(2022, 6, 15),
            paid_date: Some(date(2022, 7, 1)),
        };
        let company = Company {
            code: "ibm".to_string(),
            name: "IBM".to_string(),
            description: Some("Big blue.".to_string()),
        };

        let value = serde_json::to_value(InvoiceDetail::new(invoice, Some(company))).unwrap();

        assert_eq!(value["add_date"], "2022-06-15");
        assert_eq!(value["paid_date"], "2022-07-01");
        assert_eq!(value["company"]["name"], "IBM");
    }
}
