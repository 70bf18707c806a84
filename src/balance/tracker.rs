//! Running assignment state shared by the ranking and gap-filling passes.

/// A seat taken on a slot, by participant index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub participant: usize,
    pub rank: Option<u32>,
}

/// Per-slot seat lists plus per-participant running loads.
///
/// Owned by a single balancing run and threaded by `&mut` through both
/// passes. Slots and participants are addressed by their index in the
/// survey's input slices.
#[derive(Debug, Clone)]
pub struct AssignmentTracker {
    capacities: Vec<usize>,
    seats: Vec<Vec<Seat>>,
    loads: Vec<usize>,
    cap: Option<usize>,
}

impl AssignmentTracker {
    pub fn new(capacities: Vec<usize>, participant_count: usize, cap: Option<usize>) -> Self {
        let seats = capacities.iter().map(|&c| Vec::with_capacity(c)).collect();
        Self {
            capacities,
            seats,
            loads: vec![0; participant_count],
            cap,
        }
    }

    /// Slots assigned to `participant` so far.
    pub fn load(&self, participant: usize) -> usize {
        self.loads[participant]
    }

    /// Open seats left on `slot`.
    pub fn remaining(&self, slot: usize) -> usize {
        self.capacities[slot].saturating_sub(self.seats[slot].len())
    }

    pub fn is_full(&self, slot: usize) -> bool {
        self.remaining(slot) == 0
    }

    pub fn is_seated(&self, slot: usize, participant: usize) -> bool {
        self.seats[slot].iter().any(|s| s.participant == participant)
    }

    /// Whether a per-participant cap is in force.
    pub fn is_capped(&self) -> bool {
        self.cap.is_some()
    }

    /// Whether `participant` is below the per-participant cap.
    pub fn has_headroom(&self, participant: usize) -> bool {
        self.cap.map_or(true, |cap| self.loads[participant] < cap)
    }

    /// Whether `participant` may take a seat on `slot` right now.
    pub fn can_seat(&self, slot: usize, participant: usize) -> bool {
        !self.is_full(slot) && self.has_headroom(participant) && !self.is_seated(slot, participant)
    }

    /// Seats `participant` on `slot`. Returns `false` (and changes nothing)
    /// if the slot is full, the participant is capped or already seated.
    pub fn seat(&mut self, slot: usize, participant: usize, rank: Option<u32>) -> bool {
        if !self.can_seat(slot, participant) {
            return false;
        }
        self.seats[slot].push(Seat { participant, rank });
        self.loads[participant] += 1;
        true
    }

    pub fn seats(&self, slot: usize) -> &[Seat] {
        &self.seats[slot]
    }
}
