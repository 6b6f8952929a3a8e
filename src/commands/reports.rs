use crate::date_range::{DateRange, RangeSelector};
use crate::db::DatabaseExt;
use crate::error::Result;
use crate::models::{ChartRow, SalesStats};
use crate::stats::{self, ChartFilter};
use crate::store::OrderStore;
use crate::App;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report period as picked in the admin screen.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RangeQuery {
    pub selector: RangeSelector,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RangeQuery {
    pub fn new(selector: RangeSelector) -> Self {
        RangeQuery {
            selector,
            start_date: None,
            end_date: None,
        }
    }

    pub fn custom(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        RangeQuery {
            selector: RangeSelector::Custom,
            start_date,
            end_date,
        }
    }

    pub fn resolve(&self) -> DateRange {
        DateRange::resolve_now(self.selector, self.start_date, self.end_date)
    }
}

pub fn get_sales_stats(app: &App, query: &RangeQuery) -> Result<SalesStats> {
    let orders = app.db().list()?;
    let range = query.resolve();

    let report = stats::sales_stats(&orders, &range, &app.rules().bread);
    tracing::debug!(
        selector = ?query.selector,
        orders = report.total_orders,
        total_sales = report.total_sales,
        "Computed sales stats"
    );

    Ok(report)
}

pub fn get_chart_rows(app: &App, query: &RangeQuery, filter: &ChartFilter) -> Result<Vec<ChartRow>> {
    let orders = app.db().list()?;
    Ok(stats::chart_rows(&orders, &query.resolve(), filter))
}
