use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lexiforge::FrequencyTable;

pub fn frequency(freq: &FrequencyTable) {
    if freq.is_empty() {
        println!("No {} entries found.", freq.key_header().to_lowercase());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#"),
        Cell::new(freq.key_header()).add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Share"),
    ]);

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, (key, count)) in freq.rows().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:?}", key)).add_attribute(Attribute::Bold),
            Cell::new(count).fg(Color::Cyan),
            Cell::new(format!("{:.2}%", freq.share(i) * 100.0)),
        ]);
    }
    println!("\n{}", table);
    println!("Total: {}", freq.total());
}
