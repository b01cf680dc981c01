use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::core::timezone::format_iso8601;
use crate::core::Result;
use crate::middleware::request_id_of;
use crate::modules::reports::models::SalesReport;
use crate::modules::sales::models::{Sale, SaleDetail};
use crate::modules::sales::services::SalesSummaryService;

/// Query parameters for the sales summary endpoint
#[derive(Debug, Deserialize)]
pub struct SalesSummaryQuery {
    /// Start of the period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub date_start: Option<String>,
    /// End of the period (inclusive, format: YYYY-MM-DD)
    #[serde(default)]
    pub date_end: Option<String>,
}

/// Response structure for the sales summary
#[derive(Debug, Serialize, Deserialize)]
pub struct SalesSummaryResponse {
    pub period_start: Option<String>, // RFC 3339
    pub period_end: Option<String>,   // RFC 3339
    pub sale_count: usize,
    pub detail_count: usize,
    pub total_subtotal: String, // Decimal as string for JSON precision
    pub total_amount: String,
    pub sales: Vec<SaleResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaleResponse {
    pub id: i64,
    pub date_sale: String,
    pub amount: String,
    pub count: i32,
    pub invoice_type: String,
    pub payment_type: String,
    pub closed: bool,
    pub details: Vec<SaleDetailResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaleDetailResponse {
    pub id: i64,
    pub product_id: i64,
    pub count: i32,
    pub price_sale: String,
    pub subtotal: String,
}

impl From<SalesReport> for SalesSummaryResponse {
    fn from(report: SalesReport) -> Self {
        Self {
            period_start: report.period_start.as_ref().map(format_iso8601),
            period_end: report.period_end.as_ref().map(format_iso8601),
            sale_count: report.sale_count,
            detail_count: report.detail_count,
            total_subtotal: report.total_subtotal.to_string(),
            total_amount: report.total_amount.to_string(),
            sales: report.sales.into_iter().map(SaleResponse::from).collect(),
        }
    }
}

impl From<Sale> for SaleResponse {
    fn from(sale: Sale) -> Self {
        Self {
            id: sale.id,
            date_sale: format_iso8601(&sale.date_sale),
            amount: sale.amount.to_string(),
            count: sale.count,
            invoice_type: sale.invoice_type,
            payment_type: sale.payment_type,
            closed: sale.closed,
            details: sale.details.into_iter().map(SaleDetailResponse::from).collect(),
        }
    }
}

impl From<SaleDetail> for SaleDetailResponse {
    fn from(detail: SaleDetail) -> Self {
        Self {
            id: detail.id,
            product_id: detail.product_id,
            count: detail.count,
            price_sale: detail.price_sale.to_string(),
            subtotal: detail.subtotal().to_string(),
        }
    }
}

/// GET /reports/sales-summary
///
/// Non-voided sales of the period with their line items and subtotals.
/// Missing or malformed dates produce an empty summary, not an error.
pub async fn get_sales_summary(
    req: HttpRequest,
    service: web::Data<SalesSummaryService>,
    query: web::Query<SalesSummaryQuery>,
) -> HttpResponse {
    match handle_get_sales_summary(service, query.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!(
                request_id = %request_id_of(&req),
                "Failed to generate sales summary: {}", e
            );
            actix_web::ResponseError::error_response(&e)
        }
    }
}

async fn handle_get_sales_summary(
    service: web::Data<SalesSummaryService>,
    query: SalesSummaryQuery,
) -> Result<SalesSummaryResponse> {
    let report = service
        .detail_summary(query.date_start, query.date_end)
        .await?;

    Ok(SalesSummaryResponse::from(report))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports").route("/sales-summary", web::get().to(get_sales_summary)),
    );
}
