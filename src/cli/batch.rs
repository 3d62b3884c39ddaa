use clap::Parser;
use enumset::EnumSet;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    exercise::{DEFAULT_MAX_ATTEMPTS, Exercise, Generator},
    prelude::*,
    quantity::QuantityKind,
};

#[derive(Parser)]
pub struct BatchArgs {
    /// Quantity kinds to generate exercises for, one batch per kind.
    #[clap(
        long = "kind",
        env = "ABAQUE_KINDS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "length"
    )]
    kinds: Vec<QuantityKind>,

    /// Number of exercises per kind.
    #[clap(
        long,
        short = 'n',
        env = "ABAQUE_COUNT",
        default_value = "5",
        value_parser = clap::value_parser!(u16).range(1..=20)
    )]
    count: u16,

    /// Random seed, for reproducible sheets.
    #[clap(long, env = "ABAQUE_SEED")]
    seed: Option<u64>,

    /// Attempts to pick a distinct pair of units before giving up.
    #[clap(long, env = "ABAQUE_MAX_ATTEMPTS", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

impl BatchArgs {
    pub fn kinds(&self) -> EnumSet<QuantityKind> {
        self.kinds.iter().copied().collect()
    }

    fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Generate the exercises of every requested kind.
    #[instrument(skip_all, fields(seed = self.seed))]
    pub fn generate(&self) -> Result<Vec<(QuantityKind, Vec<Exercise>)>> {
        let mut rng = self.rng();
        self.kinds()
            .iter()
            .map(|kind| -> Result<_> {
                let exercises = Generator::builder()
                    .kind(kind)
                    .count(usize::from(self.count))
                    .rng(&mut rng)
                    .max_attempts(self.max_attempts)
                    .generate()?;
                info!(%kind, n_exercises = exercises.len(), "generated");
                Ok((kind, exercises))
            })
            .collect()
    }
}
