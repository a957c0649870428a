use chrono::Datelike;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn next_year() -> i32 {
    chrono::Local::now().year() + 1
}

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record([
        "amount",
        "card_number",
        "expiry_month",
        "expiry_year",
        "currency",
        "customer_id",
    ])?;

    let expiry_year = next_year().to_string();
    for i in 1..=rows {
        // Amount 50 stays clear of every gateway decline rule.
        wtr.write_record([
            "50",
            "4111111111111111",
            "12",
            &expiry_year,
            "USD",
            &format!("customer{i}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
