use crate::core::ledger::SwipeLedger;
use crate::models::{FilterCriteria, Profile, ViewMode};

/// Check the gender constraint of the criteria
#[inline]
pub fn matches_gender(profile: &Profile, criteria: &FilterCriteria) -> bool {
    criteria.gender.admits(profile.gender)
}

/// Check the inclusive age range of the criteria
#[inline]
pub fn matches_age(profile: &Profile, criteria: &FilterCriteria) -> bool {
    profile.age >= criteria.min_age && profile.age <= criteria.max_age
}

/// Check the required interests of the criteria
///
/// An empty requirement admits everyone; otherwise at least one interest has to overlap.
#[inline]
pub fn matches_interests(profile: &Profile, criteria: &FilterCriteria) -> bool {
    criteria.interests.is_empty()
        || criteria
            .interests
            .iter()
            .any(|interest| profile.interests.contains(interest))
}

/// Full eligibility check for one candidate
///
/// Predicates run in a fixed order and stop at the first failure:
/// 1. already decided (swipe view only)
/// 2. gender
/// 3. age
/// 4. interests
#[inline]
pub fn is_eligible(
    profile: &Profile,
    criteria: &FilterCriteria,
    ledger: &SwipeLedger,
    view: ViewMode,
) -> bool {
    if view == ViewMode::Swipe && ledger.contains(&profile.id) {
        return false;
    }

    matches_gender(profile, criteria)
        && matches_age(profile, criteria)
        && matches_interests(profile, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Gender, GenderFilter, Interest, SwipeDecision};
    use std::collections::BTreeSet;

    fn create_test_profile(age: u8, gender: Gender, interests: &[Interest]) -> Profile {
        Profile {
            id: "test_user".to_string(),
            name: "Test User".to_string(),
            age,
            gender,
            photo_url: String::new(),
            bio: String::new(),
            interests: interests.iter().copied().collect(),
            location: Coordinate::new(55.7558, 37.6173),
        }
    }

    fn create_test_criteria() -> FilterCriteria {
        FilterCriteria {
            min_age: 21,
            max_age: 35,
            gender: GenderFilter::Female,
            interests: BTreeSet::new(),
        }
    }

    #[test]
    fn test_matching_profile_is_eligible() {
        let profile = create_test_profile(25, Gender::Female, &[Interest::Running]);
        let criteria = create_test_criteria();

        assert!(is_eligible(&profile, &criteria, &SwipeLedger::default(), ViewMode::Swipe));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let criteria = create_test_criteria();

        assert!(matches_age(&create_test_profile(21, Gender::Female, &[]), &criteria));
        assert!(matches_age(&create_test_profile(35, Gender::Female, &[]), &criteria));
        assert!(!matches_age(&create_test_profile(20, Gender::Female, &[]), &criteria));
        assert!(!matches_age(&create_test_profile(36, Gender::Female, &[]), &criteria));
    }

    #[test]
    fn test_gender_filter() {
        let criteria = create_test_criteria();
        let profile = create_test_profile(25, Gender::Male, &[]);

        assert!(!matches_gender(&profile, &criteria));
        assert!(matches_gender(
            &profile,
            &FilterCriteria { gender: GenderFilter::Any, ..criteria }
        ));
    }

    #[test]
    fn test_interest_filter_needs_one_overlap() {
        let mut criteria = create_test_criteria();
        criteria.interests = [Interest::Art, Interest::Coffee].into_iter().collect();

        let overlapping = create_test_profile(25, Gender::Female, &[Interest::Coffee, Interest::Gym]);
        let disjoint = create_test_profile(25, Gender::Female, &[Interest::Gym]);

        assert!(matches_interests(&overlapping, &criteria));
        assert!(!matches_interests(&disjoint, &criteria));
    }

    #[test]
    fn test_ledger_only_excludes_in_swipe_view() {
        let profile = create_test_profile(25, Gender::Female, &[]);
        let criteria = create_test_criteria();
        let mut ledger = SwipeLedger::default();
        ledger.record(&profile.id, SwipeDecision::Passed);

        assert!(!is_eligible(&profile, &criteria, &ledger, ViewMode::Swipe));
        assert!(is_eligible(&profile, &criteria, &ledger, ViewMode::Map));
    }
}
