//! Text rendering of the jump table.
//!
//! Rounding happens here and only here: distances to two decimals, fuel
//! to the nearest whole isotope. The underlying plan values are never
//! mutated.

use jump_core::JumpPlan;

/// One formatted table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpRow {
    pub system: String,
    pub distance_ly: String,
    pub fuel: String,
}

/// Format the per-hop rows in route order.
pub fn jump_rows(plan: &JumpPlan) -> Vec<JumpRow> {
    plan.jumps
        .iter()
        .map(|jump| JumpRow {
            system: jump.system.clone(),
            distance_ly: format!("{:.2}", jump.distance_ly),
            fuel: format!("{}", jump.fuel.round() as i64),
        })
        .collect()
}

/// The total line shown under the table.
pub fn total_fuel_line(plan: &JumpPlan) -> String {
    format!("Total fuel: {}", plan.total_fuel.round() as i64)
}

/// Render the whole table as aligned text.
pub fn render_table(plan: &JumpPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>14} {:>10}\n",
        "System", "Distance (ly)", "Fuel"
    ));
    for row in jump_rows(plan) {
        out.push_str(&format!(
            "{:<24} {:>14} {:>10}\n",
            row.system, row.distance_ly, row.fuel
        ));
    }
    out.push_str(&total_fuel_line(plan));
    out.push('\n');
    out
}
