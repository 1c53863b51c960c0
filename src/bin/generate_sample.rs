//! Generate a synthetic neutron-multiplicity histogram for demos and manual
//! runs of the main binary.  Deterministic: same seed, same file.

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
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const NUM_BINS: usize = 10;
const NUM_EVENTS: usize = 50_000;

fn main() {
    let mut rng = SimpleRng::new(42);

    // Multiplicity distribution shaped after Cf-252 spontaneous fission:
    // roughly Gaussian with mean 3.76 and width 1.57, truncated at zero.
    let mut counts = [0u64; NUM_BINS];
    let mut overflow = 0u64;

    for _ in 0..NUM_EVENTS {
        let multiplicity = rng.gauss(3.76, 1.57).round().max(0.0) as usize;
        if multiplicity < NUM_BINS {
            counts[multiplicity] += 1;
        } else {
            overflow += 1;
        }
    }

    let output_path = "sample_counts.txt";
    let lines: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
    std::fs::write(output_path, lines.join("\n") + "\n").expect("Failed to write counts file");

    println!(
        "Wrote {} events across {} bins to {output_path} ({} above the last bin, discarded)",
        NUM_EVENTS as u64 - overflow,
        NUM_BINS,
        overflow
    );
}
