/// Fixed-width text rendering of the comparison table
/// Used by `--print` to dump the table to a terminal
use crate::table::TableModel;

/// Render `model` as an aligned text table.
/// The baseline row is separated from the solutions by a rule.
pub fn render(model: &TableModel) -> String {
    let headers: Vec<String> = model
        .headers
        .iter()
        .map(|header| format!("{}{}", header.label, header.indicator.arrow()))
        .collect();

    // Column widths in characters (arrows and currency symbols count as one)
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &model.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    push_rule(&mut out, &widths);

    for row in &model.rows {
        push_line(&mut out, &row.cells, &widths);
        if row.is_baseline {
            push_rule(&mut out, &widths);
        }
    }

    out.push_str(&format!("\nCosts shown in {}\n", model.unit));
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_rule(out: &mut String, widths: &[usize]) {
    let rule = widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join("-+-");
    out.push_str(&rule);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Dataset;
    use crate::state::view::ViewState;
    use crate::table::cost::Unit;
    use crate::table::sort::Column;

    fn first_cell(line: &str) -> &str {
        line.split(" | ").next().unwrap_or_default().trim()
    }

    #[test]
    fn test_render_layout() {
        let dataset = Dataset::bundled().unwrap();
        let model = TableModel::build(&dataset, &ViewState::new());
        let text = render(&model);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Solution"));
        assert!(lines[1].starts_with("---"));
        assert_eq!(first_cell(lines[2]), dataset.baseline.name);
        assert!(lines[3].starts_with("---"));
        assert_eq!(first_cell(lines[4]), dataset.solutions[0].name);
        assert!(text.ends_with("Costs shown in USD\n"));
    }

    #[test]
    fn test_render_sorted_by_cost() {
        let dataset = Dataset::bundled().unwrap();
        let mut state = ViewState::new();
        state.activate_column(Column::EthTransfer);

        let text = render(&TableModel::build(&dataset, &state));
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("ETH Transfer Cost ▲"));
        let order: Vec<&str> = lines[4..4 + dataset.solutions.len()]
            .iter()
            .map(|line| first_cell(line))
            .collect();
        assert_eq!(order, ["Umbra", "Railgun", "Privacy Pools", "Tornado Cash"]);
    }

    #[test]
    fn test_render_columns_aligned() {
        let dataset = Dataset::bundled().unwrap();
        let mut state = ViewState::new();
        state.select_unit(Unit::Gas);

        let text = render(&TableModel::build(&dataset, &state));
        let separator_positions: Vec<Option<usize>> = text
            .lines()
            .filter(|line| line.contains(" | "))
            .map(|line| line.chars().position(|c| c == '|'))
            .collect();

        assert!(separator_positions.windows(2).all(|w| w[0] == w[1]));
        assert!(text.contains("21,000 gas"));
    }
}
