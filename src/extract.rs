// src/extract.rs

//! Thin wrappers around axum's `Json` and `Path` extractors whose rejections
//! are converted into `AppError`, so a bad body or path parameter produces the
//! same JSON error envelope as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
