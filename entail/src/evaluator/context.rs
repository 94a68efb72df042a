//! Symbol slots and truth-assignment enumeration
//!
//! Contains the state shared by every assignment of a single check.

use crate::analysis::{SymbolSet, TruthSeed};
use std::collections::HashMap;

/// Maps symbol names to dense slots of a valuation
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    slots: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_symbols(symbols: &SymbolSet) -> Self {
        let mut table = Self::new();
        for name in symbols.iter() {
            table.slot(name);
        }
        table
    }

    /// Slot of `name`, allocating the next free one on first use
    pub fn slot(&mut self, name: &str) -> usize {
        if let Some(slot) = self.slots.get(name) {
            return *slot;
        }
        let slot = self.names.len();
        self.names.push(name.to_string());
        self.slots.insert(name.to_string(), slot);
        slot
    }

    pub fn name(&self, slot: usize) -> &str {
        &self.names[slot]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Walks every complete assignment over a symbol table
///
/// Seeded slots keep their pinned value. Free slots count through all
/// `2^free` combinations like a binary odometer, the first free slot being the
/// lowest digit. With no free slots exactly one assignment is produced.
#[derive(Debug, Clone)]
pub struct Assignments {
    values: Vec<bool>,
    free: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Assignments {
    pub fn new(table: &SymbolTable, seed: &TruthSeed) -> Self {
        let mut values = Vec::with_capacity(table.len());
        let mut free = Vec::new();
        for slot in 0..table.len() {
            match seed.get(table.name(slot)) {
                Some(value) => values.push(value),
                None => {
                    values.push(false);
                    free.push(slot);
                }
            }
        }
        Self {
            values,
            free,
            started: false,
            exhausted: false,
        }
    }

    pub fn free_slots(&self) -> &[usize] {
        &self.free
    }

    /// The next assignment, or `None` once all have been produced
    pub fn next_assignment(&mut self) -> Option<&[bool]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.values);
        }
        for &slot in &self.free {
            if self.values[slot] {
                self.values[slot] = false;
            } else {
                self.values[slot] = true;
                return Some(&self.values);
            }
        }
        self.exhausted = true;
        None
    }
}
