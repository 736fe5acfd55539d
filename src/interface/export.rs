use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::planner::ShoppingList;

/// Write a shopping list as CSV to any writer.
pub fn write_shopping_csv_to<W: Write>(writer: W, list: &ShoppingList) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["name", "total_amount", "unit", "cost", "used_in", "mixed_units"])?;

    for item in &list.shopping_list {
        wtr.write_record(&[
            item.name.clone(),
            format!("{:.1}", item.total_amount),
            item.unit.clone(),
            format!("{:.2}", item.cost),
            item.used_in.to_string(),
            item.mixed_units.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a shopping list as CSV to a file.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, list: &ShoppingList) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_shopping_csv_to(file, list)
}
