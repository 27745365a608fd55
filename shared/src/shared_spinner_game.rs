use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;
use crate::validation::validate_entrants;

/// A weighted participant eligible to win a spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Entrant {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub weight: f64, // 0 means present but never occupies a slot
}

/// One discrete position on the race track, tagged with its entrant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Slot {
    pub entrant_id: u32,
    pub entrant_name: String,
    pub color: String,
    pub slot_index: usize, // position within one generated sequence
}

/// The computed translation and timing that land the strip on a winning slot.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LandingPlan {
    pub offset: f64,
    pub duration_ms: u32,
}

/// Per-entrant share of the generated sequence, for the players-info display.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Occupancy {
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpinnerError {
    InvalidInput(String),
    NoSlotsForEntrant(u32),
}

impl fmt::Display for SpinnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinnerError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SpinnerError::NoSlotsForEntrant(id) => {
                write!(f, "entrant {} has no slots", id)
            }
        }
    }
}

impl std::error::Error for SpinnerError {}

/// Splits `target_count` slots between entrants proportionally to weight
/// using largest-remainder apportionment. Returns counts aligned with the
/// input order. Weight-0 entrants always get 0; every other entrant gets at
/// least 1. Deterministic for a given entrant set.
fn apportion(entrants: &[Entrant], target_count: usize) -> Vec<usize> {
    let total_weight: f64 = entrants.iter().map(|e| e.weight).sum();
    let mut counts = vec![0usize; entrants.len()];
    if total_weight <= 0.0 {
        return counts;
    }

    let mut assigned = 0usize;
    let mut remainders: Vec<(usize, f64)> = Vec::new();
    for (i, entrant) in entrants.iter().enumerate() {
        if entrant.weight <= 0.0 {
            continue;
        }
        let quota = entrant.weight / total_weight * target_count as f64;
        let floor = quota.floor() as usize;
        counts[i] = floor;
        assigned += floor;
        remainders.push((i, quota - floor as f64));
    }

    // Hand the shortfall out by descending fractional remainder; ties go to
    // the heavier entrant, then the lower id, so identical weight sets always
    // produce identical counts.
    remainders.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                entrants[b.0]
                    .weight
                    .partial_cmp(&entrants[a.0].weight)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| entrants[a.0].id.cmp(&entrants[b.0].id))
    });
    let mut shortfall = target_count.saturating_sub(assigned);
    let mut next = 0usize;
    while shortfall > 0 && !remainders.is_empty() {
        counts[remainders[next % remainders.len()].0] += 1;
        next += 1;
        shortfall -= 1;
    }

    // Min-1 guarantee: entrants rounded down to nothing take a slot back from
    // whoever currently holds the most. A donor with count > 1 always exists
    // once target_count >= number of weighted entrants.
    for i in 0..entrants.len() {
        if entrants[i].weight > 0.0 && counts[i] == 0 {
            if let Some(donor) = (0..entrants.len())
                .filter(|&j| j != i && counts[j] > 1)
                .max_by_key(|&j| counts[j])
            {
                counts[donor] -= 1;
                counts[i] = 1;
            }
        }
    }

    counts
}

/// Maps weighted entrants onto a fixed-size shuffled slot sequence.
///
/// Every entrant with weight > 0 receives at least one slot, counts sum to
/// exactly `target_count`, and the order is a uniform shuffle. When all
/// weights are 0 the sequence is empty and the caller must treat that as
/// "no eligible entrants".
pub fn generate_slots(entrants: &[Entrant], target_count: usize) -> Result<Vec<Slot>, SpinnerError> {
    generate_slots_with(entrants, target_count, &mut rand::thread_rng())
}

pub fn generate_slots_with<R: Rng>(
    entrants: &[Entrant],
    target_count: usize,
    rng: &mut R,
) -> Result<Vec<Slot>, SpinnerError> {
    validate_entrants(entrants, target_count)?;

    let counts = apportion(entrants, target_count);
    log::debug!("apportioned slot counts: {:?}", counts);

    let mut slots: Vec<Slot> = Vec::with_capacity(target_count);
    for (entrant, &count) in entrants.iter().zip(&counts) {
        for _ in 0..count {
            slots.push(Slot {
                entrant_id: entrant.id,
                entrant_name: entrant.name.clone(),
                color: entrant.color.clone(),
                slot_index: 0,
            });
        }
    }

    slots.shuffle(rng);
    for (index, slot) in slots.iter_mut().enumerate() {
        slot.slot_index = index;
    }

    Ok(slots)
}

/// Picks a landing point for the winning entrant and computes the strip
/// translation plus animation duration that settle on it.
///
/// The presentation renders [`STRIP_REPEATS`] concatenated copies of the
/// sequence; the nominal rotation count only drives perceived distance and
/// timing. `visible_width` is the viewport width in pixels; pass `None` to
/// use [`FALLBACK_VIEWPORT_WIDTH`].
pub fn plan_landing(
    slots: &[Slot],
    winning_entrant_id: u32,
    visible_width: Option<f64>,
) -> Result<LandingPlan, SpinnerError> {
    plan_landing_with(slots, winning_entrant_id, visible_width, &mut rand::thread_rng())
}

pub fn plan_landing_with<R: Rng>(
    slots: &[Slot],
    winning_entrant_id: u32,
    visible_width: Option<f64>,
    rng: &mut R,
) -> Result<LandingPlan, SpinnerError> {
    let matches: Vec<&Slot> = slots
        .iter()
        .filter(|s| s.entrant_id == winning_entrant_id)
        .collect();
    // Land on a random copy of the winner's slots, not always the same one
    let target = *matches
        .choose(rng)
        .ok_or(SpinnerError::NoSlotsForEntrant(winning_entrant_id))?;

    let center = visible_width.unwrap_or(FALLBACK_VIEWPORT_WIDTH) / 2.0;
    let single_set_width = slots.len() as f64 * SLOT_WIDTH_PX;
    let rotations = rng.gen_range(MIN_ROTATIONS..MAX_ROTATIONS);

    // Which repeated set is in view after the nominal spin distance
    let spin_distance = rotations * single_set_width;
    let final_set_index = (spin_distance / single_set_width).floor() as usize % STRIP_REPEATS;

    let slot_left = final_set_index as f64 * single_set_width
        + target.slot_index as f64 * SLOT_WIDTH_PX;
    // Random point inside the slot so it never parks on the left edge
    let landing_point = slot_left + rng.gen_range(0.0..1.0) * SLOT_WIDTH_PX;

    let extra = ((rotations - MIN_ROTATIONS) * EXTRA_MS_PER_ROTATION).min(MAX_EXTRA_SPIN_MS);

    Ok(LandingPlan {
        offset: center - landing_point,
        duration_ms: BASE_SPIN_DURATION_MS + extra as u32,
    })
}

/// Count and rounded percentage of the sequence held by one entrant.
pub fn occupancy(slots: &[Slot], entrant_id: u32) -> Occupancy {
    let count = slots.iter().filter(|s| s.entrant_id == entrant_id).count();
    let percentage = if slots.is_empty() {
        0
    } else {
        (count as f64 / slots.len() as f64 * 100.0).round() as u32
    };
    Occupancy { count, percentage }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settling,
    ShowingWinner,
}

/// The single mutable piece of spinner state, owned by the presentation
/// layer. The core dictates the transitions; the caller schedules them using
/// the delays in [`crate::constants`].
#[derive(Debug, Clone)]
pub struct SpinSession {
    pub slots: Vec<Slot>,
    pub phase: SpinPhase,
    pub plan: Option<LandingPlan>,
    pub winner: Option<u32>,
}

impl SpinSession {
    pub fn new(entrants: &[Entrant]) -> Result<Self, SpinnerError> {
        Ok(Self {
            slots: generate_slots(entrants, TARGET_SLOT_COUNT)?,
            phase: SpinPhase::Idle,
            plan: None,
            winner: None,
        })
    }

    /// Regenerates the slot sequence for a new entrant set and clears any
    /// in-flight spin. The previous shuffle is discarded.
    pub fn set_entrants(&mut self, entrants: &[Entrant]) -> Result<(), SpinnerError> {
        self.slots = generate_slots(entrants, TARGET_SLOT_COUNT)?;
        self.reset();
        Ok(())
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning | SpinPhase::Settling)
    }

    /// Computes a fresh landing plan and enters `Spinning`. Rejected while a
    /// spin is already in flight, and when the requested winner holds no
    /// slots (the caller must not animate in that case).
    pub fn start_spin(
        &mut self,
        winning_entrant_id: u32,
        visible_width: Option<f64>,
    ) -> Result<LandingPlan, SpinnerError> {
        if self.is_spinning() {
            return Err(SpinnerError::InvalidInput(
                "spin already in progress".into(),
            ));
        }

        let plan = plan_landing(&self.slots, winning_entrant_id, visible_width)?;
        self.phase = SpinPhase::Spinning;
        self.plan = Some(plan);
        self.winner = Some(winning_entrant_id);
        Ok(plan)
    }

    /// Called when the animation duration has elapsed.
    pub fn settle(&mut self) {
        if self.phase == SpinPhase::Spinning {
            self.phase = SpinPhase::Settling;
        }
    }

    /// Called after the settle delay; returns the winner to display.
    pub fn reveal_winner(&mut self) -> Option<u32> {
        if self.phase != SpinPhase::Settling {
            return None;
        }
        self.phase = SpinPhase::ShowingWinner;
        self.winner
    }

    /// Returns to `Idle`, dropping the pending plan and winner. Safe to call
    /// from any phase, including mid-animation (cancel).
    pub fn reset(&mut self) {
        self.phase = SpinPhase::Idle;
        self.plan = None;
        self.winner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entrant(id: u32, color: &str, weight: f64) -> Entrant {
        Entrant {
            id,
            name: format!("Player {}", id),
            color: color.to_string(),
            weight,
        }
    }

    fn mock_entrants() -> Vec<Entrant> {
        vec![
            entrant(1, "blue", 40.0),
            entrant(2, "red", 15.0),
            entrant(3, "green", 1.0),
            entrant(4, "yellow", 10.0),
            entrant(5, "purple", 30.0),
        ]
    }

    #[test]
    fn test_sequence_length_matches_target() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        assert_eq!(slots.len(), TARGET_SLOT_COUNT);
    }

    #[test]
    fn test_every_weighted_entrant_gets_a_slot() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        for entrant in mock_entrants() {
            let occ = occupancy(&slots, entrant.id);
            assert!(occ.count >= 1, "entrant {} got no slots", entrant.id);
        }
        // The 1/96 share still lands exactly one slot
        assert_eq!(occupancy(&slots, 3).count, 1);
    }

    #[test]
    fn test_zero_weight_entrant_gets_no_slots() {
        let mut entrants = mock_entrants();
        entrants.push(entrant(6, "orange", 0.0));
        let slots = generate_slots(&entrants, TARGET_SLOT_COUNT).unwrap();
        assert_eq!(slots.len(), TARGET_SLOT_COUNT);
        assert_eq!(occupancy(&slots, 6).count, 0);
    }

    #[test]
    fn test_counts_are_proportional_to_weight() {
        let entrants = mock_entrants();
        let total_weight: f64 = entrants.iter().map(|e| e.weight).sum();
        let slots = generate_slots(&entrants, TARGET_SLOT_COUNT).unwrap();

        for entrant in &entrants {
            let occ = occupancy(&slots, entrant.id);
            let share = occ.count as f64 / TARGET_SLOT_COUNT as f64;
            let ideal = entrant.weight / total_weight;
            assert!(
                (share - ideal).abs() <= 2.0 / TARGET_SLOT_COUNT as f64,
                "entrant {}: {} slots for weight {}",
                entrant.id,
                occ.count,
                entrant.weight
            );
        }
    }

    #[test]
    fn test_apportionment_is_deterministic() {
        let entrants = mock_entrants();
        assert_eq!(
            apportion(&entrants, TARGET_SLOT_COUNT),
            apportion(&entrants, TARGET_SLOT_COUNT)
        );
        let counts = apportion(&entrants, TARGET_SLOT_COUNT);
        assert_eq!(counts.iter().sum::<usize>(), TARGET_SLOT_COUNT);
    }

    #[test]
    fn test_shuffle_randomizes_order() {
        let entrants = mock_entrants();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(8);
        let a = generate_slots_with(&entrants, TARGET_SLOT_COUNT, &mut rng_a).unwrap();
        let b = generate_slots_with(&entrants, TARGET_SLOT_COUNT, &mut rng_b).unwrap();

        let order_a: Vec<u32> = a.iter().map(|s| s.entrant_id).collect();
        let order_b: Vec<u32> = b.iter().map(|s| s.entrant_id).collect();
        assert_ne!(order_a, order_b);
    }

    #[test]
    fn test_all_zero_weights_produce_empty_sequence() {
        let entrants = vec![entrant(1, "blue", 0.0), entrant(2, "red", 0.0)];
        let slots = generate_slots(&entrants, TARGET_SLOT_COUNT).unwrap();
        assert!(slots.is_empty());
        assert_eq!(
            plan_landing(&slots, 1, None),
            Err(SpinnerError::NoSlotsForEntrant(1))
        );
    }

    #[test]
    fn test_single_entrant_takes_every_slot() {
        let entrants = vec![entrant(1, "blue", 100.0)];
        let slots = generate_slots(&entrants, TARGET_SLOT_COUNT).unwrap();
        assert_eq!(slots.len(), TARGET_SLOT_COUNT);
        assert!(slots.iter().all(|s| s.entrant_id == 1));
        assert!(plan_landing(&slots, 1, None).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let entrants = vec![entrant(1, "blue", 10.0), entrant(1, "red", 5.0)];
        assert!(matches!(
            generate_slots(&entrants, TARGET_SLOT_COUNT),
            Err(SpinnerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_plan_duration_is_bounded() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        for _ in 0..50 {
            let plan = plan_landing(&slots, 1, Some(768.0)).unwrap();
            assert!(plan.duration_ms >= BASE_SPIN_DURATION_MS);
            assert!(
                plan.duration_ms
                    <= BASE_SPIN_DURATION_MS + MAX_EXTRA_SPIN_MS as u32
            );
        }
    }

    #[test]
    fn test_plan_offset_stays_on_the_strip() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        let width = 768.0;
        let strip_width = STRIP_REPEATS as f64 * slots.len() as f64 * SLOT_WIDTH_PX;
        for _ in 0..50 {
            let plan = plan_landing(&slots, 5, Some(width)).unwrap();
            // offset translates some strip point under the center marker
            assert!(plan.offset <= width / 2.0);
            assert!(plan.offset > width / 2.0 - strip_width);
            assert!(plan.offset.is_finite());
        }
    }

    #[test]
    fn test_plan_lands_inside_a_winner_slot() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        let width = 768.0;
        let single_set_width = slots.len() as f64 * SLOT_WIDTH_PX;
        let mut rng = StdRng::seed_from_u64(42);

        for winner in [1u32, 3, 5] {
            for _ in 0..50 {
                let plan = plan_landing_with(&slots, winner, Some(width), &mut rng).unwrap();
                // Undo the translation to recover the slot under the marker
                let landing_point = width / 2.0 - plan.offset;
                let index = (landing_point.rem_euclid(single_set_width) / SLOT_WIDTH_PX)
                    .floor() as usize;
                assert_eq!(
                    slots[index].entrant_id, winner,
                    "plan for entrant {} landed on slot {} owned by {}",
                    winner, index, slots[index].entrant_id
                );
            }
        }
    }

    #[test]
    fn test_plan_uses_fallback_width() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        let plan = plan_landing(&slots, 1, None).unwrap();
        assert!(plan.offset <= FALLBACK_VIEWPORT_WIDTH / 2.0);
    }

    #[test]
    fn test_plan_fails_for_absent_entrant() {
        let slots = generate_slots(&mock_entrants(), TARGET_SLOT_COUNT).unwrap();
        assert_eq!(
            plan_landing(&slots, 99, None),
            Err(SpinnerError::NoSlotsForEntrant(99))
        );
    }

    #[test]
    fn test_occupancy_percentages_cover_sequence() {
        let entrants = mock_entrants();
        let slots = generate_slots(&entrants, TARGET_SLOT_COUNT).unwrap();
        let total: usize = entrants
            .iter()
            .map(|e| occupancy(&slots, e.id).count)
            .sum();
        assert_eq!(total, TARGET_SLOT_COUNT);
    }

    #[test]
    fn test_session_rejects_spin_while_spinning() {
        let mut session = SpinSession::new(&mock_entrants()).unwrap();
        assert!(session.start_spin(1, None).is_ok());
        assert_eq!(session.phase, SpinPhase::Spinning);
        assert!(session.start_spin(2, None).is_err());
        assert_eq!(session.winner, Some(1));
    }

    #[test]
    fn test_session_walks_through_phases() {
        let mut session = SpinSession::new(&mock_entrants()).unwrap();
        session.start_spin(4, Some(400.0)).unwrap();

        session.settle();
        assert_eq!(session.phase, SpinPhase::Settling);

        assert_eq!(session.reveal_winner(), Some(4));
        assert_eq!(session.phase, SpinPhase::ShowingWinner);

        session.reset();
        assert_eq!(session.phase, SpinPhase::Idle);
        assert!(session.plan.is_none());
        assert!(session.winner.is_none());
    }

    #[test]
    fn test_session_cancel_mid_spin() {
        let mut session = SpinSession::new(&mock_entrants()).unwrap();
        session.start_spin(2, None).unwrap();
        session.reset();
        assert_eq!(session.phase, SpinPhase::Idle);
        assert!(session.winner.is_none());
        // A fresh spin is accepted after the cancel
        assert!(session.start_spin(2, None).is_ok());
    }

    #[test]
    fn test_set_entrants_regenerates_slots() {
        let mut session = SpinSession::new(&mock_entrants()).unwrap();
        session.start_spin(1, None).unwrap();

        let solo = vec![entrant(9, "pink", 5.0)];
        session.set_entrants(&solo).unwrap();
        assert_eq!(session.phase, SpinPhase::Idle);
        assert!(session.slots.iter().all(|s| s.entrant_id == 9));
    }
}
