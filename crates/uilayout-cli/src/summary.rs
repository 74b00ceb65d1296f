use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use uilayout_cli::layout::{LayoutReport, TypeRow};

pub fn print_report(report: &LayoutReport) {
    println!("Root: {}", report.root_type);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Objects")]);
    apply_table_style(&mut table);
    for (name, count) in &report.objects {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    println!(
        "Attributes: {} in file, {} after compaction ({} redundant)",
        report.input_attributes,
        report.saved_attributes,
        report.redundant_attributes()
    );
    for (tag, target) in &report.legacy_tags {
        println!("  legacy tag {tag} loads as {target}");
    }
}

pub fn types_table(rows: &[TypeRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Styles"),
        header_cell("Children"),
        header_cell("Attributes"),
        header_cell("Nested"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let styles = match (&row.style_dictionary, row.styled) {
            (Some(dictionary), _) => dictionary.as_str(),
            (None, true) => "sheet",
            (None, false) => "-",
        };
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(styles),
            Cell::new(row.container_role.as_deref().unwrap_or("-")),
            Cell::new(row.simple.join(", ")),
            Cell::new(row.complex.join(", ")),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
