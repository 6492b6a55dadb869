use crate::factors::ROUND_TRIP_FACTOR;
use crate::report::EmissionReport;

/// Markdown formatter for emission reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &EmissionReport) -> String {
        let calc = &report.calculation;
        let mut md = String::with_capacity(1024);

        md.push_str("# Your Greendex Footprint\n\n");
        md.push_str(&format!("**Total:** {:.2} kg CO₂\n\n", calc.total_co2));

        md.push_str("## Breakdown\n\n");
        md.push_str("| Component | kg CO₂ | Share |\n");
        md.push_str("|-----------|--------|-------|\n");
        for (label, value) in calc.components() {
            md.push_str(&format!(
                "| {} | {:.2} | {:.1}% |\n",
                label,
                value,
                report.share_pct(value)
            ));
        }
        md.push_str(&format!("| **Total** | **{:.2}** | |\n\n", calc.total_co2));

        if !report.transport.legs.is_empty() {
            Self::format_transport(&mut md, report);
        }

        if report.project_activity_count > 0 {
            md.push_str(&format!(
                "*Includes {} shared project activit{} ({:.2} kg CO₂).*\n\n",
                report.project_activity_count,
                if report.project_activity_count == 1 { "y" } else { "ies" },
                calc.project_activities_co2
            ));
        }

        md.push_str("## Offset\n\n");
        md.push_str(&format!(
            "🌳 **{}** tree{} would need a year to absorb this footprint.\n",
            calc.trees_needed,
            if calc.trees_needed == 1 { "" } else { "s" }
        ));

        md
    }

    /// Per-mode table of the journey to the project (round trip)
    fn format_transport(md: &mut String, report: &EmissionReport) {
        md.push_str("### Transport (round trip)\n\n");
        md.push_str("| Mode | One-way km | kg CO₂ |\n");
        md.push_str("|------|------------|--------|\n");
        for leg in &report.transport.legs {
            md.push_str(&format!(
                "| {} | {:.0} | {:.2} |\n",
                leg.mode,
                leg.distance_km,
                leg.one_way_co2 * ROUND_TRIP_FACTOR
            ));
        }
        md.push('\n');
    }
}
