use crate::shared_spinner_game::{Entrant, SpinnerError};

/// Rejects entrant sets the slot generator cannot honor: duplicate or zero
/// ids, negative or non-finite weights, or a target too small to give every
/// weighted entrant its guaranteed slot.
pub fn validate_entrants(entrants: &[Entrant], target_count: usize) -> Result<(), SpinnerError> {
    if entrants.is_empty() {
        return Err(SpinnerError::InvalidInput("entrant list is empty".into()));
    }
    if target_count == 0 {
        return Err(SpinnerError::InvalidInput("target slot count must be positive".into()));
    }

    let mut seen = Vec::with_capacity(entrants.len());
    for entrant in entrants {
        if entrant.id == 0 {
            return Err(SpinnerError::InvalidInput("entrant ids start at 1".into()));
        }
        if seen.contains(&entrant.id) {
            return Err(SpinnerError::InvalidInput(format!(
                "duplicate entrant id {}",
                entrant.id
            )));
        }
        seen.push(entrant.id);

        if !entrant.weight.is_finite() || entrant.weight < 0.0 {
            return Err(SpinnerError::InvalidInput(format!(
                "entrant {} has invalid weight {}",
                entrant.id, entrant.weight
            )));
        }
    }

    let eligible = entrants.iter().filter(|e| e.weight > 0.0).count();
    if eligible > target_count {
        return Err(SpinnerError::InvalidInput(format!(
            "{} weighted entrants cannot share {} slots",
            eligible, target_count
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrant(id: u32, weight: f64) -> Entrant {
        Entrant {
            id,
            name: format!("Player {}", id),
            color: "blue".to_string(),
            weight,
        }
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(validate_entrants(&[], 50).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let entrants = vec![entrant(1, 10.0), entrant(1, 5.0)];
        assert!(matches!(
            validate_entrants(&entrants, 50),
            Err(SpinnerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let entrants = vec![entrant(1, -1.0)];
        assert!(validate_entrants(&entrants, 50).is_err());
    }

    #[test]
    fn test_rejects_nan_weight() {
        let entrants = vec![entrant(1, f64::NAN)];
        assert!(validate_entrants(&entrants, 50).is_err());
    }

    #[test]
    fn test_rejects_target_smaller_than_eligible() {
        let entrants: Vec<Entrant> = (1..=5).map(|id| entrant(id, 1.0)).collect();
        assert!(validate_entrants(&entrants, 3).is_err());
        assert!(validate_entrants(&entrants, 5).is_ok());
    }

    #[test]
    fn test_accepts_zero_weights() {
        let entrants = vec![entrant(1, 0.0), entrant(2, 0.0)];
        assert!(validate_entrants(&entrants, 50).is_ok());
    }
}
