use super::entities::Aggregation;
use crate::loader::Entity;
use colored::Colorize;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use std::fmt::Write as _;

/// Build a table with the shared styling used for console output
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table
}

/// Display the aggregation on stdout with colored headers and a table
pub fn display_aggregation(aggregation: &Aggregation, selected: usize, total: usize) {
    println!("{}", "=".repeat(60).bright_white());
    println!("{}", "PROPERTY AGGREGATION".bold().bright_white());
    println!("{}", "=".repeat(60).bright_white());
    println!(
        "Entities selected: {} of {}",
        selected.to_string().green().bold(),
        total
    );
    println!(
        "Property occurrences: {} across {} {}",
        aggregation.total_occurrences().to_string().green().bold(),
        aggregation.len(),
        if aggregation.len() == 1 {
            "property"
        } else {
            "properties"
        }
    );

    if aggregation.is_empty() {
        println!("\n{}", "No properties on the selected entities.".yellow());
        return;
    }

    let mut table = create_styled_table(&["Property", "Value", "Count"]);
    for (slug, values) in aggregation.iter() {
        for (idx, vc) in values.iter().enumerate() {
            // The slug appears only on its group's first row
            let slug_cell = if idx == 0 { slug } else { "" };
            table.add_row(vec![
                Cell::new(slug_cell),
                Cell::new(&vc.value),
                Cell::new(vc.count),
            ]);
        }
    }
    println!("{table}");
}

/// Format the aggregation as plain text, without ANSI codes
///
/// Used for `--output` files.
pub fn format_aggregation_text(aggregation: &Aggregation, selected: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PROPERTY AGGREGATION");
    let _ = writeln!(out, "Entities selected: {selected} of {total}");
    let _ = writeln!(
        out,
        "Property occurrences: {} across {} properties",
        aggregation.total_occurrences(),
        aggregation.len()
    );

    for (slug, values) in aggregation.iter() {
        let _ = writeln!(out, "\n{slug}:");
        for vc in values {
            let _ = writeln!(out, "  {} x{}", vc.value, vc.count);
        }
    }

    out
}

/// Pretty JSON in the shape `{ "<slug>": [["<value>", <count>], ...] }`
pub fn aggregation_to_json(aggregation: &Aggregation) -> String {
    serde_json::to_string_pretty(aggregation)
        .unwrap_or_else(|_| "{\"error\":\"failed to serialize aggregation\"}".into())
}

/// Pretty JSON array of the raw entities, for the unfiltered passthrough
pub fn entities_to_json(entities: &[Entity]) -> String {
    serde_json::to_string_pretty(entities)
        .unwrap_or_else(|_| "[\"error: failed to serialize entities\"]".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Property;

    fn sample_aggregation() -> Aggregation {
        let mut agg = Aggregation::new();
        agg.record("city", "Paris");
        agg.record("city", "Paris");
        agg.record("city", "Lyon");
        agg
    }

    #[test]
    fn test_text_format_lists_values_with_counts() {
        let text = format_aggregation_text(&sample_aggregation(), 3, 5);

        assert!(text.contains("Entities selected: 3 of 5"));
        assert!(text.contains("city:"));
        assert!(text.contains("Paris x2"));
        assert!(text.contains("Lyon x1"));
    }

    #[test]
    fn test_json_format_preserves_insertion_order() {
        let json = aggregation_to_json(&sample_aggregation());

        // Paris was recorded first, so it must precede Lyon
        let paris = json.find("Paris").unwrap();
        let lyon = json.find("Lyon").unwrap();
        assert!(paris < lyon);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["city"][0][1], 2);
    }

    #[test]
    fn test_entities_to_json_round_trips() {
        let entities = vec![Entity {
            model: "Person".to_string(),
            properties: vec![Property {
                slug: "city".to_string(),
                value: "Paris".to_string(),
            }],
        }];

        let json = entities_to_json(&entities);
        let decoded: Vec<Entity> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entities);
    }
}
