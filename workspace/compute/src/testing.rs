//! Deterministic random sources for tests.

use rand::RngCore;
use std::collections::VecDeque;

/// Random source that replays a fixed list of uniform `[0, 1)` draws.
///
/// Each value is encoded so that `rng.gen::<f64>()` returns it back (up to the 53 bit
/// resolution of the standard float distribution). Panics once the script runs out, so a
/// test also pins down how many draws the code under test consumes.
pub struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let draw = self.draws.pop_front().expect("scripted draws exhausted");
        assert!((0.0..1.0).contains(&draw), "draw {} outside [0, 1)", draw);
        ((draw * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
