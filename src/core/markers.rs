use crate::models::{Candidate, MapMarker, MarkerStyle, Profile};

/// Pins for the map renderer: the local user first, then every candidate
pub fn build_markers(local: &Profile, candidates: &[Candidate<'_>]) -> Vec<MapMarker> {
    std::iter::once(MapMarker {
        id: local.id.clone(),
        label: local.name.clone(),
        coordinate: local.location,
        style: MarkerStyle::Me,
    })
    .chain(candidates.iter().map(|candidate| MapMarker {
        id: candidate.profile.id.clone(),
        label: format!("{}, {}", candidate.profile.name, candidate.profile.age),
        coordinate: candidate.profile.location,
        style: MarkerStyle::Candidate,
    }))
    .collect()
}
