use comfy_table::{Cell, CellAlignment, Table};
use etr_pricing::pricing::PricingEngine;

pub fn run(engine: &PricingEngine) {
    println!("{}", table(engine));
}

fn table(engine: &PricingEngine) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Km"]);

    for location in engine.locations() {
        table.add_row(vec![
            Cell::new(location.id()),
            Cell::new(location.name()),
            Cell::new(location.cumulative_distance()).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
