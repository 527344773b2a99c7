//! Terminal rendering of the overview report
//!
//! Consumes the structured [`OverviewReport`] and produces the text the
//! shell prints. Empty ledgers render an explicit absence line rather
//! than a zero total.

use crate::reports::OverviewReport;

const WIDTH: usize = 60;

fn separator() -> String {
    "-".repeat(WIDTH)
}

/// Format an overview report for terminal display
pub fn format_overview(account_name: &str, report: &OverviewReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Overview for {}\n", account_name));
    output.push_str(&"=".repeat(WIDTH));
    output.push('\n');

    match report.total_income {
        Some(total) => output.push_str(&format!("Total income:   {}\n", total)),
        None => output.push_str("No incomes recorded.\n"),
    }

    match report.total_expense {
        Some(total) => output.push_str(&format!("Total expenses: {}\n", total)),
        None => output.push_str("No expenses recorded.\n"),
    }

    if let Some(net) = report.net_flow {
        output.push_str(&format!("Net cash flow:  {}\n", net));
    }

    if report.low_solvency_warning {
        output.push_str("Warning: income does not cover expenses\n");
    }

    output.push_str(&separator());
    output.push('\n');

    if report.budgets.is_empty() {
        output.push_str("No budgets recorded.\n");
    } else {
        output.push_str("Budgets (spent/limit):\n");
        for line in &report.budgets {
            let marker = if line.is_overspent() { " *" } else { "" };
            output.push_str(&format!(
                "  {:<8} {:<24} {}/{}{}\n",
                line.id.to_string(),
                line.name,
                line.spent,
                line.limit,
                marker
            ));
        }
        if report.has_overspent_budget() {
            output.push_str("  * = over limit\n");
        }
    }

    output
}
