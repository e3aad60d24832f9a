//! Per-loop action log used as evolution evidence.

/// Ordered action strings grouped by loop. `loops()[i]` belongs to loop `i + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionHistory {
    loops: Vec<Vec<String>>,
}

impl ActionHistory {
    /// History for a fresh game: a single empty log for loop 1.
    pub fn new() -> Self {
        Self {
            loops: vec![Vec::new()],
        }
    }

    /// Appends an entry to the current (last) loop.
    pub fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        match self.loops.last_mut() {
            Some(current) => current.push(entry),
            None => self.loops.push(vec![entry]),
        }
    }

    /// Opens an empty log for the next loop. Earlier logs are left untouched.
    pub fn begin_loop(&mut self) {
        self.loops.push(Vec::new());
    }

    pub fn current(&self) -> &[String] {
        self.loops.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Entries for a 1-based loop number.
    pub fn for_loop(&self, loop_number: u32) -> Option<&[String]> {
        let index = usize::try_from(loop_number.checked_sub(1)?).ok()?;
        self.loops.get(index).map(Vec::as_slice)
    }

    pub fn loops(&self) -> &[Vec<String>] {
        &self.loops
    }

    /// Number of loop logs, including the current one.
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// Every entry across all loops, oldest first.
    pub fn flatten(&self) -> impl Iterator<Item = &str> {
        self.loops.iter().flatten().map(String::as_str)
    }

    /// Counts entries (across all loops) containing `name` as a substring.
    pub fn mentions(&self, name: &str) -> usize {
        self.flatten().filter(|entry| entry.contains(name)).count()
    }
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_span_all_loops() {
        let mut history = ActionHistory::new();
        history.record("Attacked Shadow for 10 damage");
        history.record("Moved to (2, 6)");
        history.begin_loop();
        history.record("Attacked Shadow for 10 damage");

        assert_eq!(history.mentions("Shadow"), 2);
        assert_eq!(history.mentions("Sentinel"), 0);
        assert_eq!(history.loop_count(), 2);
        assert_eq!(history.for_loop(1).map(<[String]>::len), Some(2));
        assert_eq!(history.for_loop(0), None);
        assert_eq!(history.current().len(), 1);
    }
}
