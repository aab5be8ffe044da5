use serde::{Deserialize, Serialize};

/// Monotonic node id allocator.
///
/// Ids start at zero and only grow, so a graph that never removes nodes
/// always hands out `max existing id + 1`. Ids are never reused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// The id that the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_from_zero() {
        let mut id_gen = IdGenerator::new();
        assert_eq!(id_gen.next_id(), 0);
        assert_eq!(id_gen.next_id(), 1);
        assert_eq!(id_gen.next_id(), 2);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut id_gen = IdGenerator::new();
        id_gen.next_id();
        assert_eq!(id_gen.peek(), 1);
        assert_eq!(id_gen.peek(), 1);
        assert_eq!(id_gen.next_id(), 1);
    }
}
