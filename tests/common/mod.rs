use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_scenarios_csv(path: &Path, rows: usize, seed: u64) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = StdRng::seed_from_u64(seed);

    wtr.write_record(["principal", "rate", "term"])?;

    for _ in 0..rows {
        let principal = rng.gen_range(1_000..=2_000_000u32);
        // Rates in 0.05% steps and terms in 5-year steps, like a slider would offer.
        let rate = f64::from(rng.gen_range(0..=200u32)) * 0.05;
        let term = rng.gen_range(1..=6u32) * 5;
        wtr.write_record([
            principal.to_string(),
            format!("{rate:.2}"),
            term.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
