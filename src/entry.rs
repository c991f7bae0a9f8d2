use std::cmp::Ordering;
use std::fmt;

use crate::heap::HeapOrder;
use crate::priority::PriorityClass;

/// One waiting patient.
///
/// Entries are treated as values: the only in-place change is the arrival
/// renumbering done by the queue after a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    priority: PriorityClass,
    arrival: usize,
}

impl Entry {
    pub fn new(name: impl Into<String>, priority: PriorityClass, arrival: usize) -> Self {
        Entry {
            name: name.into(),
            priority,
            arrival,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> PriorityClass {
        self.priority
    }

    pub fn arrival(&self) -> usize {
        self.arrival
    }

    /// Only called on entries that arrived after some other entry, so the
    /// result never goes below the smallest arrival number in the queue.
    pub fn decrement_arrival(&mut self) {
        self.arrival -= 1;
    }

    /// Same patient and arrival number under a new priority class.
    pub fn with_priority(&self, priority: PriorityClass) -> Self {
        Entry {
            name: self.name.clone(),
            priority,
            arrival: self.arrival,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.arrival, self.priority.code(), self.name)
    }
}

/// Triage ranking: more urgent class first; within a class the larger
/// arrival number surfaces first.
pub struct TriageOrder;

impl HeapOrder<Entry> for TriageOrder {
    fn compare(a: &Entry, b: &Entry) -> Ordering {
        b.priority
            .code()
            .cmp(&a.priority.code())
            .then(a.arrival.cmp(&b.arrival))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, priority: PriorityClass, arrival: usize) -> Entry {
        Entry::new(name, priority, arrival)
    }

    #[test]
    fn test_accessors() {
        let e = entry("Jane Doe", PriorityClass::Urgent, 3);
        assert_eq!(e.name(), "Jane Doe");
        assert_eq!(e.priority(), PriorityClass::Urgent);
        assert_eq!(e.arrival(), 3);
    }

    #[test]
    fn test_display_format() {
        let e = entry("Jane Doe", PriorityClass::Emergency, 7);
        assert_eq!(e.to_string(), "7 2 Jane Doe");
    }

    #[test]
    fn test_decrement_arrival() {
        let mut e = entry("A", PriorityClass::Minimal, 4);
        e.decrement_arrival();
        assert_eq!(e.arrival(), 3);
    }

    #[test]
    fn test_with_priority_keeps_name_and_arrival() {
        let e = entry("A", PriorityClass::Minimal, 4);
        let changed = e.with_priority(PriorityClass::Immediate);
        assert_eq!(changed, entry("A", PriorityClass::Immediate, 4));
        assert_eq!(e.priority(), PriorityClass::Minimal);
    }

    #[test]
    fn test_more_urgent_class_ranks_higher() {
        let urgent = entry("A", PriorityClass::Urgent, 1);
        let immediate = entry("B", PriorityClass::Immediate, 2);
        assert_eq!(TriageOrder::compare(&immediate, &urgent), Ordering::Greater);
        assert_eq!(TriageOrder::compare(&urgent, &immediate), Ordering::Less);
    }

    #[test]
    fn test_class_beats_arrival() {
        let early_minimal = entry("A", PriorityClass::Minimal, 1);
        let late_emergency = entry("B", PriorityClass::Emergency, 9);
        assert_eq!(
            TriageOrder::compare(&late_emergency, &early_minimal),
            Ordering::Greater
        );
    }

    #[test]
    fn test_tie_goes_to_larger_arrival() {
        let first = entry("A", PriorityClass::Immediate, 1);
        let second = entry("B", PriorityClass::Immediate, 2);
        assert_eq!(TriageOrder::compare(&second, &first), Ordering::Greater);
        assert!(TriageOrder::should_swap(&first, &second));
        assert!(!TriageOrder::should_swap(&second, &first));
    }
}
