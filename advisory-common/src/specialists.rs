//! Static specialist directory and the carousel used to browse it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Specialist {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub contact: &'static str,
    pub expertise: &'static str,
}

pub const SPECIALISTS: &[Specialist] = &[
    Specialist {
        id: 1,
        name: "Dr. Anjali Mehta",
        specialty: "Pulmonologist",
        contact: "+91-22-4000-1101",
        expertise: "Air pollution related respiratory illness, asthma, COPD",
    },
    Specialist {
        id: 2,
        name: "Dr. Rohan Kulkarni",
        specialty: "Infectious Disease Specialist",
        contact: "+91-22-4000-1102",
        expertise: "Vector-borne and monsoon outbreaks, epidemic response",
    },
    Specialist {
        id: 3,
        name: "Dr. Sarah D'Souza",
        specialty: "Emergency Medicine",
        contact: "+91-22-4000-1103",
        expertise: "Heat stroke, mass casualty triage, surge planning",
    },
    Specialist {
        id: 4,
        name: "Dr. Imran Shaikh",
        specialty: "Pediatrician",
        contact: "+91-22-4000-1104",
        expertise: "Childhood respiratory and waterborne infections",
    },
    Specialist {
        id: 5,
        name: "Dr. Kavita Rao",
        specialty: "Public Health Physician",
        contact: "+91-22-4000-1105",
        expertise: "Community health advisories, preventive care",
    },
];

/// Circular cursor over a fixed-length list.
///
/// `next` and `prev` wrap; an empty list keeps the cursor at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to an absolute position. Out-of-range positions are rejected and
    /// leave the cursor where it was.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(SPECIALISTS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.select(2));
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.next();
        assert!(!carousel.select(3));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
        assert!(carousel.current(&[] as &[Specialist]).is_none());
    }

    #[test]
    fn default_covers_directory() {
        let mut carousel = Carousel::default();
        assert_eq!(carousel.len(), SPECIALISTS.len());
        assert_eq!(carousel.current(SPECIALISTS).map(|s| s.id), Some(1));
        carousel.prev();
        assert_eq!(
            carousel.current(SPECIALISTS).map(|s| s.id),
            SPECIALISTS.last().map(|s| s.id)
        );
    }

    #[test]
    fn specialist_ids_are_unique() {
        let mut ids: Vec<u32> = SPECIALISTS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SPECIALISTS.len());
    }
}
