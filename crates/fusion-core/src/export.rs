use crate::snapshot::DashboardSnapshot;

const HEADER: &str = "Function,Total,Employees,Contractors,Employee%";

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Org mix as CSV: one row per function and a closing `TOTAL` row with an
/// empty employee percentage. Lines are joined by `\n` with no trailing
/// newline.
pub fn export_org_mix_csv(snapshot: &DashboardSnapshot) -> String {
    let mut lines = Vec::with_capacity(snapshot.functions.len() + 2);
    lines.push(HEADER.to_string());

    for f in &snapshot.functions {
        lines.push(format!(
            "{},{},{},{},{}",
            csv_field(&f.team),
            f.total,
            f.employees,
            f.contractors,
            f.emp_pct
        ));
    }

    let totals = &snapshot.totals;
    lines.push(format!("TOTAL,{},{},{},", totals.total, totals.employees, totals.contractors));
    lines.join("\n")
}
