//! Write a deterministic sample equipment CSV for trying out the dashboard.
//!
//! Usage: `generate-sample [OUTPUT] [ROWS]` (defaults: `sample_equipment.csv`, 60).

use anyhow::{Context, Result};

/// (type, name prefix, flowrate mean/sd, pressure mean/sd, temperature mean/sd)
const EQUIPMENT: [(&str, &str, f64, f64, f64, f64, f64, f64); 6] = [
    ("Pump", "P", 120.0, 25.0, 5.5, 0.8, 110.0, 8.0),
    ("Compressor", "C", 95.0, 15.0, 8.0, 1.2, 130.0, 10.0),
    ("Valve", "V", 60.0, 12.0, 4.2, 0.6, 105.0, 6.0),
    ("HeatExchanger", "HX", 150.0, 30.0, 6.1, 0.7, 140.0, 12.0),
    ("Reactor", "R", 170.0, 20.0, 7.4, 0.9, 145.0, 9.0),
    ("Condenser", "CD", 180.0, 35.0, 6.6, 0.8, 130.0, 11.0),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "sample_equipment.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid row count {n:?}"))?,
        None => 60,
    };

    let mut rng = SimpleRng::new(42);
    let mut serial = [0usize; EQUIPMENT.len()];

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Equipment Name", "Type", "Flowrate", "Pressure", "Temperature"])?;

    for _ in 0..rows {
        let kind = rng.below(EQUIPMENT.len());
        let (type_name, prefix, f_mu, f_sd, p_mu, p_sd, t_mu, t_sd) = EQUIPMENT[kind];
        serial[kind] += 1;

        let name = format!("{prefix}-{}", 100 + serial[kind]);
        let flow = rng.gauss(f_mu, f_sd).max(0.0);
        let pressure = rng.gauss(p_mu, p_sd).max(0.0);
        let temperature = rng.gauss(t_mu, t_sd);

        writer.write_record([
            name,
            type_name.to_string(),
            format!("{flow:.1}"),
            format!("{pressure:.1}"),
            format!("{temperature:.1}"),
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} equipment rows to {output_path}");
    Ok(())
}
