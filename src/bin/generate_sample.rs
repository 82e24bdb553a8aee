use anyhow::{Context, Result};
use serde_json::{json, Value};

use creature_dash::data::model::MetricKey;

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

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo + 1)
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.range(1, 100) <= percent
    }
}

const SPECIES: [(&str, &[&str]); 30] = [
    ("bulbasaur", &["grass", "poison"]),
    ("ivysaur", &["grass", "poison"]),
    ("venusaur", &["grass", "poison"]),
    ("charmander", &["fire"]),
    ("charmeleon", &["fire"]),
    ("charizard", &["fire", "flying"]),
    ("squirtle", &["water"]),
    ("wartortle", &["water"]),
    ("blastoise", &["water"]),
    ("caterpie", &["bug"]),
    ("metapod", &["bug"]),
    ("butterfree", &["bug", "flying"]),
    ("weedle", &["bug", "poison"]),
    ("kakuna", &["bug", "poison"]),
    ("beedrill", &["bug", "poison"]),
    ("pidgey", &["normal", "flying"]),
    ("pidgeotto", &["normal", "flying"]),
    ("pidgeot", &["normal", "flying"]),
    ("rattata", &["normal"]),
    ("raticate", &["normal"]),
    ("spearow", &["normal", "flying"]),
    ("fearow", &["normal", "flying"]),
    ("ekans", &["poison"]),
    ("arbok", &["poison"]),
    ("pikachu", &["electric"]),
    ("raichu", &["electric"]),
    ("sandshrew", &["ground"]),
    ("sandslash", &["ground"]),
    ("nidoran-f", &["poison"]),
    ("nidorina", &["poison"]),
];

const ABILITIES: [&str; 8] = [
    "overgrow", "blaze", "torrent", "shield-dust", "run-away", "keen-eye", "static", "sand-veil",
];

const MOVES: [&str; 12] = [
    "tackle", "growl", "scratch", "ember", "water-gun", "vine-whip", "thunder-shock",
    "quick-attack", "gust", "poison-sting", "sand-attack", "mega-punch",
];

fn raw_record(id: usize, name: &str, types: &[&str], rng: &mut SimpleRng) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t } }))
        .collect();

    let stats: Vec<Value> = MetricKey::ALL
        .iter()
        .map(|k| json!({ "base_stat": rng.range(20, 130), "stat": { "name": k.api_name() } }))
        .collect();

    let abilities: Vec<Value> = (0..rng.range(1, 3))
        .map(|i| {
            let name = ABILITIES[rng.range(0, ABILITIES.len() as u64 - 1) as usize];
            json!({ "ability": { "name": name }, "is_hidden": i == 2 })
        })
        .collect();

    let moves: Vec<Value> = (0..rng.range(3, 25))
        .map(|_| json!({ "move": { "name": MOVES[rng.range(0, MOVES.len() as u64 - 1) as usize] } }))
        .collect();

    let base_experience = if rng.chance(10) {
        Value::Null
    } else {
        json!(rng.range(39, 270))
    };

    json!({
        "id": id,
        "name": name,
        "height": rng.range(3, 20),
        "weight": rng.range(18, 1000),
        "base_experience": base_experience,
        "types": types,
        "stats": stats,
        "abilities": abilities,
        "moves": moves,
    })
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let records: Vec<Value> = SPECIES
        .iter()
        .enumerate()
        .map(|(i, (name, types))| raw_record(i + 1, name, types, &mut rng))
        .collect();

    let output_path = "sample_catalogue.json";
    let text = serde_json::to_string_pretty(&records).context("serialising sample catalogue")?;
    std::fs::write(output_path, text).with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {} records to {output_path}", records.len());
    Ok(())
}
