use serde::Serialize;

/// One CSV row; `None` leaves the cell empty like the published data does.
#[derive(Serialize)]
struct Row {
    species: &'static str,
    island: &'static str,
    bill_length_mm: Option<f64>,
    bill_depth_mm: Option<f64>,
    flipper_length_mm: Option<f64>,
    body_mass_g: Option<f64>,
    sex: Option<&'static str>,
}

/// (mean, standard deviation) of one measurement.
type Gauss = (f64, f64);

struct Population {
    species: &'static str,
    islands: &'static [(&'static str, usize)],
    bill_length: Gauss,
    bill_depth: Gauss,
    flipper_length: Gauss,
    body_mass: Gauss,
}

const POPULATIONS: [Population; 3] = [
    Population {
        species: "Adelie",
        islands: &[("Torgersen", 52), ("Biscoe", 44), ("Dream", 56)],
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    Population {
        species: "Chinstrap",
        islands: &[("Dream", 68)],
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3733.0, 384.0),
    },
    Population {
        species: "Gentoo",
        islands: &[("Biscoe", 124)],
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5076.0, 504.0),
    },
];

/// Males run this much larger than the population mean, females smaller.
const SEX_SHIFT: f64 = 0.04;

/// Roughly one row in thirty gets a missing field.
const MISSING_RATE: f64 = 0.03;

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, (mean, std_dev): Gauss) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn measure(rng: &mut SimpleRng, g: Gauss, shift: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (rng.gauss((g.0 * (1.0 + shift), g.1)) * scale).round() / scale
}

fn round_to(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

fn sample_row(rng: &mut SimpleRng, pop: &Population, island: &'static str, male: bool) -> Row {
    let shift = if male { SEX_SHIFT } else { -SEX_SHIFT };
    let mut row = Row {
        species: pop.species,
        island,
        bill_length_mm: Some(measure(rng, pop.bill_length, shift, 1)),
        bill_depth_mm: Some(measure(rng, pop.bill_depth, shift, 1)),
        flipper_length_mm: Some(measure(rng, pop.flipper_length, shift, 0)),
        body_mass_g: Some(round_to(measure(rng, pop.body_mass, shift * 2.0, 0), 25.0).max(2500.0)),
        sex: Some(if male { "MALE" } else { "FEMALE" }),
    };

    if rng.next_f64() < MISSING_RATE {
        if rng.next_f64() < 0.7 {
            row.sex = None;
        } else {
            row.bill_length_mm = None;
            row.bill_depth_mm = None;
            row.flipper_length_mm = None;
            row.body_mass_g = None;
            row.sex = None;
        }
    }
    row
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "penguins_sample.csv".to_string());
    let mut writer = csv::Writer::from_path(&output_path)?;

    let mut written = 0usize;
    for pop in &POPULATIONS {
        for &(island, count) in pop.islands {
            for i in 0..count {
                writer.serialize(sample_row(&mut rng, pop, island, i % 2 == 0))?;
                written += 1;
            }
        }
    }
    writer.flush()?;

    println!("Wrote {written} penguins to {output_path}");
    Ok(())
}
