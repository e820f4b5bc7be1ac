use std::fmt::Debug;

use rand::{Rng, SeedableRng};
use thiserror::Error;

pub mod list_ops;
pub mod traits;
use traits::*;

#[derive(Debug, Error)]
pub enum TesterError {
    #[error("run with seed {seed} diverged at operation {op_num}: expected {expected}, got {actual}")]
    Mismatch {
        seed: u64,
        op_num: usize,
        expected: String,
        actual: String,
    },
}

/// Replays `ops` generated operations against a fresh target, checking every result against
/// the generator's reference implementation.
pub fn test_operations<O, R>(seed: u64, ops: usize) -> Result<(), OperationFailure<O, R>>
where
    O: OperationGen<R> + Debug,
    O::Result: PartialEq + Debug,
    O::Target: Default + Debug,
    <O::Generator as OperationGenerator<R>>::ReferenceImpl: Debug,
    R: Rng + SeedableRng,
{
    let mut target = O::Target::default();
    let mut gen = O::gen_from_seed(seed);
    for (op_num, (op, expected)) in (&mut gen).take(ops).enumerate() {
        let actual = op.apply(&mut target);
        if actual != expected {
            let mut op_gen = O::gen_from_seed(seed);
            let operations: Vec<_> = (&mut op_gen).take(op_num + 1).collect();
            return Err(OperationFailure {
                seed,
                op_num,
                operations,
                actual,
                target,
                data: op_gen.data(),
            });
        }
    }
    log::debug!("seed {seed}: {ops} operations matched the reference model");
    Ok(())
}

pub struct OperationFailure<O, R>
where
    O: OperationGen<R>,
    R: SeedableRng + Rng,
{
    pub seed: u64,
    pub op_num: usize,
    pub operations: Vec<(O, O::Result)>,
    pub actual: O::Result,
    pub target: O::Target,
    pub data: <O::Generator as OperationGenerator<R>>::ReferenceImpl,
}

impl<O, R> OperationFailure<O, R>
where
    O: OperationGen<R> + Debug,
    O::Result: Debug,
    O::Target: Debug,
    <O::Generator as OperationGenerator<R>>::ReferenceImpl: Debug,
    R: SeedableRng + Rng,
{
    /// Logs the last few operations before the divergence and the two final states.
    pub fn playback(&self) {
        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, expected)) in self.operations.iter().enumerate().skip(lower) {
            log::error!("--------- operation {ind} ----------");
            log::error!("operation: {op:?}");
            log::error!("expected: {expected:?}");
        }
        log::error!("actual: {:?}", self.actual);
        log::error!("target state: {:?}", self.target);
        log::error!("reference state: {:?}", self.data);
    }

    pub fn into_error(self) -> TesterError {
        let expected = match self.operations.last() {
            Some((_, expected)) => format!("{expected:?}"),
            None => String::from("<nothing>"),
        };
        TesterError::Mismatch {
            seed: self.seed,
            op_num: self.op_num,
            expected,
            actual: format!("{:?}", self.actual),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::list_ops::ListOperation;
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn list_matches_model_for_many_seeds() {
        for seed in 0..20 {
            let res = test_operations::<ListOperation, StdRng>(seed, 1_000);
            if let Err(failure) = res {
                failure.playback();
                panic!("{}", failure.into_error());
            }
        }
    }

    /// A target that forgets every other push, so the harness has something to catch.
    #[derive(Debug, Default)]
    struct Forgetful {
        items: Vec<u32>,
        pushes: usize,
    }

    #[derive(Debug, Clone, Copy)]
    struct Push(u32);

    impl Operation for Push {
        type Result = usize;
        type Target = Forgetful;
        fn apply(&self, target: &mut Forgetful) -> usize {
            target.pushes += 1;
            if target.pushes % 2 == 1 {
                target.items.push(self.0);
            }
            target.items.len()
        }
    }

    struct PushGen {
        count: usize,
    }

    impl Iterator for PushGen {
        type Item = (Push, usize);
        fn next(&mut self) -> Option<Self::Item> {
            self.count += 1;
            Some((Push(self.count as u32), self.count))
        }
    }

    impl OperationGenerator<StdRng> for PushGen {
        type Operation = Push;
        type ReferenceImpl = usize;
        fn from_seed(_seed: u64) -> Self {
            Self { count: 0 }
        }
        fn data(self) -> usize {
            self.count
        }
    }

    impl OperationGen<StdRng> for Push {
        type Generator = PushGen;
    }

    #[test]
    fn divergence_is_reported() {
        let failure = test_operations::<Push, StdRng>(3, 10).unwrap_err();
        assert_eq!(failure.op_num, 1);
        assert_eq!(failure.operations.len(), 2);
        assert_eq!(failure.actual, 1);
        match failure.into_error() {
            TesterError::Mismatch {
                seed,
                op_num,
                expected,
                actual,
            } => {
                assert_eq!((seed, op_num), (3, 1));
                assert_eq!(expected, "2");
                assert_eq!(actual, "1");
            }
        }
    }
}
