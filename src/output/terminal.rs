//! Terminal output formatting with colors.

use colored::Colorize;

use crate::config::Alternative;
use crate::result::{GroupSummary, TTestResult};

/// Format a TTestResult for human-readable terminal output.
///
/// Renders a verdict line (at the 5% significance level), both group
/// summaries, the t-statistic with its degrees of freedom, and the
/// confidence interval for the difference in means.
pub fn format_result(result: &TTestResult) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("welch-t\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Group A: {}\n", format_group(&result.group_a)));
    output.push_str(&format!("  Group B: {}\n", format_group(&result.group_b)));
    output.push('\n');

    if result.is_significant(0.05) {
        output.push_str(&format!(
            "  {}\n\n",
            "\u{2713} Significant difference in means (p < 0.05)"
                .green()
                .bold()
        ));
    } else {
        output.push_str(&format!(
            "  {}\n\n",
            "\u{2717} No significant difference in means (p \u{2265} 0.05)"
                .yellow()
                .bold()
        ));
    }

    output.push_str(&format!(
        "    t = {:.4}, df = {:.2} (Welch), p = {:.6} ({})\n",
        result.t_statistic,
        result.degrees_of_freedom,
        result.p_value,
        format_alternative(result.alternative),
    ));
    output.push_str(&format!(
        "    Mean difference: {:.4} ({:.0}% CI: {:.4} to {:.4})\n",
        result.mean_difference,
        result.confidence_level * 100.0,
        result.confidence_interval.0,
        result.confidence_interval.1
    ));

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    output.push_str(
        "Note: Welch's test does not assume equal population variances.\n",
    );

    output
}

/// Format a group summary for display.
fn format_group(group: &GroupSummary) -> String {
    format!(
        "n = {}, mean = {:.4}, sd = {:.4}",
        group.n,
        group.mean,
        group.variance.sqrt()
    )
}

/// Format the alternative hypothesis for display.
fn format_alternative(alternative: Alternative) -> &'static str {
    match alternative {
        Alternative::TwoSided => "two-sided",
        Alternative::Less => "one-sided, less",
        Alternative::Greater => "one-sided, greater",
    }
}
