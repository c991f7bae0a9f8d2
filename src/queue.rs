//! The triage queue: a heap of [`Entry`] values plus the bookkeeping that
//! keeps arrival numbers dense.

use itertools::Itertools;
use log::debug;

use crate::entry::{Entry, TriageOrder};
use crate::heap::Heap;
use crate::priority::PriorityClass;

pub const NOT_FOUND_MESSAGE: &str = "Patient with given id was not found.";

#[derive(Debug, Clone, Default)]
pub struct TriageQueue {
    heap: Heap<Entry, TriageOrder>,
}

impl TriageQueue {
    pub fn new() -> Self {
        TriageQueue { heap: Heap::new() }
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries in heap-array order.
    pub fn entries(&self) -> &[Entry] {
        self.heap.as_slice()
    }

    /// Inserts an entry as given. The caller is expected to have numbered it
    /// `size() + 1`; other numbering is accepted but not repaired.
    pub fn add(&mut self, entry: Entry) {
        debug!("add {entry}");
        self.heap.push(entry);
    }

    /// Registers a new patient at the back of the arrival order.
    pub fn admit(&mut self, name: impl Into<String>, priority: PriorityClass) -> usize {
        let arrival = self.size() + 1;
        self.add(Entry::new(name, priority, arrival));
        arrival
    }

    /// Name of the patient to be called next.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn peek(&self) -> &str {
        match self.heap.peek() {
            Some(entry) => entry.name(),
            None => panic!("peek called on an empty triage queue"),
        }
    }

    /// Removes and returns the next patient, closing the gap it leaves in the
    /// arrival numbering.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn remove_top(&mut self) -> Entry {
        let removed_arrival = match self.heap.peek() {
            Some(top) => top.arrival(),
            None => panic!("remove_top called on an empty triage queue"),
        };

        // Shifting every later arrival down by one keeps their relative rank,
        // so the heap stays valid.
        for entry in self.heap.as_mut_slice() {
            if entry.arrival() > removed_arrival {
                entry.decrement_arrival();
            }
        }

        let removed = match self.heap.pop() {
            Some(entry) => entry,
            None => unreachable!("heap emptied between peek and pop"),
        };
        debug!("removed {removed}");
        removed
    }

    /// Moves the patient with the given arrival number to a new priority
    /// class. The patient keeps its arrival number.
    pub fn change_priority(&mut self, arrival: usize, priority: PriorityClass) -> String {
        let Some(index) = self.heap.position(|entry| entry.arrival() == arrival) else {
            debug!("change: no patient with arrival {arrival}");
            return NOT_FOUND_MESSAGE.to_string();
        };

        let replacement = self.heap.as_slice()[index].with_priority(priority);
        let message = format!(
            "Changed patient {}'s priority to {}",
            replacement.name(),
            replacement.priority().name()
        );
        let old = self.heap.replace(index, replacement);
        debug!("change {old} -> {}", priority.name());
        message
    }

    /// One formatted line per entry, in heap-array order.
    pub fn listing(&self) -> impl Iterator<Item = String> + '_ {
        self.heap.iter().map(|entry| {
            format!(
                "{:>7}\t\t{:<13}{:<16}",
                entry.arrival(),
                entry.priority(),
                entry.name()
            )
        })
    }

    /// The queue as `add` commands in arrival order. Replaying the lines into
    /// an empty queue rebuilds the same set of patients.
    pub fn export_commands(&self) -> String {
        self.heap
            .iter()
            .sorted_by_key(|entry| entry.arrival())
            .map(|entry| format!("add {} {}\n", entry.priority().name(), entry.name()))
            .collect()
    }
}
