use crate::config::Config;
use crate::errors::AppResult;
use crate::store::persist;
use crate::ui::console::{ID_W, NUM_W, PRICE_W, TIME_W};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_persist, store) = persist::open(cfg)?;

    if store.is_empty() {
        info("No entries recorded yet.");
        return Ok(());
    }

    header("Tracked entries");

    let mut table = Table::new(vec![
        Column::left("ID", ID_W),
        Column::left("Start", TIME_W),
        Column::left("End", TIME_W),
        Column::right("Rate", NUM_W),
        Column::right("Hours", NUM_W),
        Column::right("Price", PRICE_W),
    ]);

    for e in store.list_entries() {
        table.add_row(vec![
            e.short_id().to_string(),
            e.start_time.clone(),
            e.end_time.clone(),
            format!("{:.2}", e.hourly_rate),
            format!("{:.2}", e.hours),
            format!("{:.2}", e.price),
        ]);
    }

    print!("{}", table.render());
    println!(
        "\nTotals: {:.2} h | {:.2} charged ({} entries)",
        store.total_hours(),
        store.total_charge(),
        store.len()
    );

    Ok(())
}
