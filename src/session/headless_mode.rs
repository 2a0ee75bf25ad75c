//! Summary mode execution
//!
//! Prints the aggregate digest to the console, for terminals or scripts
//! that do not want the interactive screen.

use super::SessionData;
use crate::analytics::{CountryFilter, DashboardFilter, DateRange, build_dashboard_view};
use crate::consts::cli_consts::views;
use crate::ui::dashboard::utils::{format_count, format_money, format_money_precise};
use crate::{print_cmd_info, print_cmd_warn};

use chrono::NaiveDate;
use std::error::Error;

/// Runs the application in summary mode
///
/// Builds the same aggregate battery the dashboard shows, for the given
/// filter, and prints it as plain sections.
pub fn run_summary(
    session: SessionData,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    country: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let filter = DashboardFilter {
        dates: DateRange::from_endpoints(from, to),
        country: match country {
            Some(name) => CountryFilter::Only(name),
            None => CountryFilter::All,
        },
    };
    let view = build_dashboard_view(&session.tables, &filter);

    let load_note = if session.from_cache { "cached" } else { "parsed" };
    print_cmd_info!(
        "Data loaded",
        "{} transactions, {} customer profiles ({} in {} ms)",
        format_count(session.tables.transactions.len()),
        format_count(session.tables.rfm.len()),
        load_note,
        session.load_ms
    );
    if session.tables.rfm_orphans > 0 {
        print_cmd_warn!(
            "Data quality",
            "{} customer profiles have no transactions in the loaded table",
            format_count(session.tables.rfm_orphans)
        );
    }
    match &filter.dates {
        Some(range) => print_cmd_info!(
            "Filter",
            "{} -> {}, country: {}",
            range.start(),
            range.end(),
            filter.country
        ),
        None if filter.is_unfiltered() => print_cmd_info!("Filter", "none, full dataset"),
        None => print_cmd_info!("Filter", "full history, country: {}", filter.country),
    }
    if view.filtered_rows == 0 && view.total_rows > 0 {
        print_cmd_warn!(
            "Empty slice",
            "no transactions match the filter; totals below are zero"
        );
    }

    println!();
    println!("KEY METRICS");
    println!(
        "  Total revenue     {:>14}  ({:.1}% of total)",
        format_money(view.kpis.total_revenue),
        view.kpis.revenue_share
    );
    println!(
        "  Transactions      {:>14}  ({:.1}% of total)",
        format_count(view.kpis.transaction_count),
        view.kpis.transaction_share
    );
    println!(
        "  Customers         {:>14}  ({:.1}% of total)",
        format_count(view.kpis.customer_count),
        view.kpis.customer_share
    );
    println!(
        "  Avg order value   {:>14}",
        format_money_precise(view.kpis.avg_order_value)
    );

    if !view.monthly_revenue.is_empty() {
        println!();
        println!("MONTHLY REVENUE");
        for item in &view.monthly_revenue {
            println!("  {}  {:>14}", item.label, format_money(item.value));
        }
    }

    if !view.top_countries.is_empty() {
        println!();
        println!("TOP COUNTRIES");
        for (i, item) in view.top_countries.iter().enumerate() {
            println!(
                "  {:>2}. {:<24} {:>14}",
                i + 1,
                item.label,
                format_money(item.value)
            );
        }
    }

    if !view.top_products_by_revenue.is_empty() {
        println!();
        println!("TOP PRODUCTS BY REVENUE");
        for (i, product) in view.top_products_by_revenue.iter().enumerate() {
            println!(
                "  {:>2}. {:<33} {:>14}",
                i + 1,
                product.short_label(views::PRODUCT_LABEL_WIDTH),
                format_money(product.revenue)
            );
        }
    }

    if !view.segment_summaries.is_empty() {
        println!();
        println!("CUSTOMER SEGMENTS");
        println!(
            "  {:<18} {:>7} {:>7} {:>7} {:>10} {:>13} {:>7}",
            "Segment", "Count", "Avg R", "Avg F", "Avg M", "Revenue", "Share"
        );
        for summary in &view.segment_summaries {
            println!(
                "  {:<18} {:>7} {:>7.0} {:>7.1} {:>10} {:>13} {:>6.1}%",
                summary.segment,
                format_count(summary.count),
                summary.avg_recency,
                summary.avg_frequency,
                format_money(summary.avg_monetary),
                format_money(summary.total_revenue),
                summary.revenue_share
            );
        }
    }

    Ok(())
}
