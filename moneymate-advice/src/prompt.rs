//! Coaching prompt assembled from a weekly classification.

use moneymate_core::{ClassificationResult, format_limit};

pub const COACH_INTRO: &str = "You are Money Mate, a friendly personal finance coach.";

const OVERSPENDING_HEADER: &str = "The user is overspending in these categories:";

const WITHIN_BUDGET_LINES: [&str; 2] = [
    "The user is within budget for all categories.",
    "Provide 1-2 short, positive reinforcement tips (<50 words each) to help the user maintain good spending habits. Include emojis if useful.",
];

/// Build the single user message sent to the advice service.
///
/// Over-budget categories get one bullet each; safe categories are only ever
/// named in the "do not mention" instruction.
pub fn build_prompt(result: &ClassificationResult) -> String {
    let mut lines: Vec<String> = vec![COACH_INTRO.to_string()];

    if result.overspending.is_empty() {
        lines.extend(WITHIN_BUDGET_LINES.iter().map(|s| s.to_string()));
        return lines.join("\n");
    }

    lines.push(OVERSPENDING_HEADER.to_string());
    for o in &result.overspending {
        lines.push(format!(
            "- {}: ${:.2} (budget: ${})",
            o.category,
            o.spent,
            format_limit(o.budget)
        ));
    }

    lines.push(format!(
        "Provide 2-3 short, actionable tips (<50 words each) to help the user reduce overspending in these categories next week.
Be proactive, friendly, concise, and include emojis if useful.
⚠️ IMPORTANT: ONLY give advice for the overspending categories listed above.
Do NOT mention any safe categories: {}.
Do NOT give generic advice about safe categories like Food or Subscriptions.",
        result.safe.join(", ")
    ));

    lines.join("\n")
}
