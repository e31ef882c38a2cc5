//! Terminal and JSON rendering of a weekly run.

use chrono::NaiveDate;
use moneymate_advice::{Advice, AdviceSource};
use moneymate_core::{
    CategoryBudget, Overspend, SpendStatus, SummaryRow, Transaction, WeeklyReport, format_limit,
};
use serde::Serialize;

fn status_label(status: SpendStatus) -> &'static str {
    match status {
        SpendStatus::Safe => "✅ Safe",
        SpendStatus::Over => "⚠️ Over",
    }
}

fn width_of<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.len())
}

/// Format parsed transactions as a table
pub fn format_transactions(txns: &[Transaction]) -> String {
    if txns.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let desc_w = width_of("Description", txns.iter().map(|t| t.description.as_str()));
    let cat_w = width_of("Category", txns.iter().map(|t| t.category.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<desc_w$}  {:<cat_w$}  {:>10}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<desc_w$}  {:-<cat_w$}  {:->10}\n",
        "", "", "", ""
    ));

    for t in txns {
        output.push_str(&format!(
            "{:<10}  {:<desc_w$}  {:<cat_w$}  {:>10.2}\n",
            t.date.format("%Y-%m-%d").to_string(),
            t.description,
            t.category,
            t.amount
        ));
    }

    output
}

/// Format the spend-vs-budget table
pub fn format_summary(rows: &[SummaryRow]) -> String {
    let cat_w = width_of("Category", rows.iter().map(|r| r.category.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<cat_w$}  {:>10}  {:>10}  {}\n",
        "Category", "Spent", "Budget", "Status"
    ));
    output.push_str(&format!("{:-<cat_w$}  {:->10}  {:->10}  {:-<8}\n", "", "", "", ""));

    for r in rows {
        output.push_str(&format!(
            "{:<cat_w$}  {:>10.2}  {:>10}  {}\n",
            r.category,
            r.spent,
            format_limit(r.budget),
            status_label(r.status)
        ));
    }

    output
}

/// Format the effective budget table
pub fn format_budgets(budget: &CategoryBudget) -> String {
    let cat_w = width_of("Category", budget.categories());

    let mut output = String::new();
    output.push_str(&format!("{:<cat_w$}  {:>10}\n", "Category", "Weekly"));
    output.push_str(&format!("{:-<cat_w$}  {:->10}\n", "", ""));
    for line in budget.lines() {
        output.push_str(&format!(
            "{:<cat_w$}  {:>10}\n",
            line.category,
            format_limit(line.limit)
        ));
    }
    output
}

/// Full text report: raw transactions, advice, weekly table
pub fn format_report(
    report: &WeeklyReport,
    txns: &[Transaction],
    advice: Option<&Advice>,
    show_transactions: bool,
) -> String {
    let mut output = String::new();

    if show_transactions {
        output.push_str("### Raw Transactions\n\n");
        output.push_str(&format_transactions(txns));
        output.push('\n');
    }

    if let Some(advice) = advice {
        output.push_str("### 💡 Money Mate Advice\n\n");
        output.push_str(advice.text().trim_end());
        output.push_str("\n\n");
    }

    output.push_str(&format!(
        "### 📊 Weekly Spending vs Budget ({} .. {})\n\n",
        report.week_start, report.week_end
    ));
    output.push_str(&format_summary(&report.summary));
    output
}

#[derive(Debug, Serialize)]
pub struct JsonWeek {
    pub today: NaiveDate,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct JsonAdvice {
    pub source: AdviceSource,
    pub text: String,
}

/// Machine-readable form of one run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub week: JsonWeek,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<&'a [Transaction]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<JsonAdvice>,
    pub overspending: &'a [Overspend],
    pub summary: &'a [SummaryRow],
}

impl<'a> JsonReport<'a> {
    pub fn new(
        report: &'a WeeklyReport,
        txns: Option<&'a [Transaction]>,
        advice: Option<&Advice>,
    ) -> Self {
        Self {
            week: JsonWeek {
                today: report.today,
                start: report.week_start,
                end: report.week_end,
            },
            transactions: txns,
            advice: advice.map(|a| JsonAdvice {
                source: a.source(),
                text: a.text(),
            }),
            overspending: &report.classification.overspending,
            summary: &report.summary,
        }
    }
}
