use crate::buffer::Channel;
use crate::consts::LEVELS;

/// A 256-entry lookup table: index = input level, value = output level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lut {
    table: [u8; LEVELS],
}

impl Default for Lut {
    fn default() -> Self {
        Self::identity()
    }
}

impl Lut {
    pub fn identity() -> Self {
        Self::from_fn(|v| v)
    }

    pub fn from_table(table: [u8; LEVELS]) -> Self {
        Self { table }
    }

    /// Tabulate a level-to-level function.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(u8) -> u8,
    {
        let mut table = [0u8; LEVELS];
        for (level, out) in table.iter_mut().enumerate() {
            *out = f(level as u8);
        }
        Self { table }
    }

    pub fn table(&self) -> &[u8; LEVELS] {
        &self.table
    }

    pub fn get(&self, level: u8) -> u8 {
        self.table[level as usize]
    }

    /// True when the table never decreases.
    pub fn is_monotonic(&self) -> bool {
        self.table.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn apply(&self, channel: &Channel) -> Channel {
        channel.map(|v| self.table[v as usize])
    }
}

/// Translate every sample of `channel` through `lut`.
pub fn apply_lut(channel: &Channel, lut: &Lut) -> Channel {
    lut.apply(channel)
}
