use anyhow::{Context, Result};

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const KINDS: [&str; 6] = [
    "Hotline",
    "Shelter",
    "Food Bank",
    "Clinic",
    "Legal Aid",
    "Support Group",
];
const AREAS: [&str; 5] = ["Downtown", "Northside", "Eastside", "County", "Statewide"];
const TAGS: [&str; 12] = [
    "crisis",
    "food",
    "shelter",
    "housing",
    "legal",
    "medical",
    "mental health",
    "youth",
    "veterans",
    "24/7",
    "LGBTQ+",
    "substance use",
];

fn main() -> Result<()> {
    env_logger::init();
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "resources.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Resource", "PhoneNumber", "Description", "Keywords", "Website"])?;
    writer.write_record(["# Generated sample data", "", "", "", ""])?;

    let mut rows = 0;
    for kind in KINDS {
        for area in AREAS {
            let name = format!("{area} {kind}");
            let phone = format!("555-{:04}", rng.below(10_000));

            let n_tags = 1 + rng.below(3);
            let mut tags: Vec<&str> = Vec::with_capacity(n_tags);
            while tags.len() < n_tags {
                let tag = rng.pick(&TAGS);
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }

            let description = format!("{kind} services for the {area} area.");
            let website = format!(
                "https://example.org/{}",
                name.to_lowercase().replace(' ', "-")
            );
            writer.write_record([
                name.as_str(),
                phone.as_str(),
                description.as_str(),
                tags.join(", ").as_str(),
                website.as_str(),
            ])?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} resources to {output_path}");
    Ok(())
}
