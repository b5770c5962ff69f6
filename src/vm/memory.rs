use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

/// Unbounded, zero-initialized memory.
/// The loaded program lives in a dense vector;
/// anything written past its end goes in a sparse map,
/// so a single write to a huge address costs one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    cells:  Vec<i64>,
    sparse: HashMap<usize, i64>,
}

impl Memory {
    pub fn load(program: &[i64]) -> Memory {
        Memory {
            cells:  program.to_vec(),
            sparse: HashMap::new(),
        }
    }

    /// Reads a cell. Cells never written read as `0`.
    pub fn read(&self, address: usize) -> i64 {
        match self.cells.get(address) {
            Some(value) => *value,
            None => self.sparse.get(&address).copied().unwrap_or(0),
        }
    }

    pub fn write(&mut self, address: usize, value: i64) {
        match self.cells.get_mut(address) {
            Some(cell) => *cell = value,
            None => {
                self.sparse.insert(address, value);
            },
        }
    }

    /// The dense region as a slice.
    pub fn cells(&self) -> &[i64] {
        &self.cells
    }
}

/// Renders the dense region in program text format.
impl Display for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self.cells.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cells.join(","))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn loaded() {
        let memory = Memory::load(&[1, 0, 0, 0, 99]);
        assert_eq!(memory.read(0), 1);
        assert_eq!(memory.read(4), 99);
        assert_eq!(memory.read(5), 0);
        assert_eq!(memory.cells().len(), 5);
        assert_eq!(memory.to_string(), "1,0,0,0,99");
    }

    #[test]
    fn dense_writes_stay_dense() {
        let mut memory = Memory::load(&[1, 0, 0, 0, 99]);
        memory.write(0, 2);
        assert_eq!(memory.cells(), &[2, 0, 0, 0, 99]);
        assert!(memory.sparse.is_empty());
    }

    #[test]
    fn empty() {
        let memory = Memory::default();
        assert!(memory.cells().is_empty());
        assert_eq!(memory.read(0), 0);
    }

    proptest! {
        #[test]
        fn far_cells(address in 5usize..(1 << 48), value in any::<i64>()) {
            let mut memory = Memory::load(&[1, 0, 0, 0, 99]);
            prop_assert_eq!(memory.read(address), 0);
            memory.write(address, value);
            prop_assert_eq!(memory.read(address), value);
            prop_assert_eq!(memory.cells().len(), 5);
        }
    }
}
