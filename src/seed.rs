//! Demo data every session starts from

use crate::models::{Coordinate, Event, Gender, Interest, Profile};
use chrono::{Duration, Utc};

/// Id of the local user
pub const LOCAL_USER_ID: &str = "me";

/// Default location for a profile registered without one (central Moscow)
pub const DEFAULT_LOCATION: Coordinate = Coordinate::new(55.7558, 37.6173);

/// Initial contents of a session
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub pool: Vec<Profile>,
    pub incoming_likes: Vec<String>,
    pub events: Vec<Event>,
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    age: u8,
    gender: Gender,
    photo_id: u32,
    bio: &str,
    interests: &[Interest],
    location: Coordinate,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        gender,
        photo_url: format!("https://picsum.photos/id/{}/400/600", photo_id),
        bio: bio.to_string(),
        interests: interests.iter().copied().collect(),
        location,
    }
}

/// The six demo candidates
pub fn demo_pool() -> Vec<Profile> {
    vec![
        profile(
            "1",
            "Maria",
            25,
            Gender::Female,
            338,
            "Looking for company for morning runs and book talk.",
            &[Interest::Running, Interest::Reading, Interest::Coffee],
            Coordinate::new(55.7510, 37.6150),
        ),
        profile(
            "2",
            "Dmitry",
            30,
            Gender::Male,
            1012,
            "Fishing and hunting fan. Out in nature every weekend.",
            &[Interest::Fishing, Interest::Hunting, Interest::Cooking],
            Coordinate::new(55.7600, 37.6200),
        ),
        profile(
            "3",
            "Anna",
            27,
            Gender::Female,
            64,
            "Painter, into exhibitions and fitness.",
            &[Interest::Art, Interest::Fitness, Interest::Music],
            Coordinate::new(55.7400, 37.6300),
        ),
        profile(
            "4",
            "Ivan",
            22,
            Gender::Male,
            1025,
            "Gamer and hiker. Always up for an adventure.",
            &[Interest::Gaming, Interest::Hiking, Interest::Gym],
            Coordinate::new(55.7700, 37.5900),
        ),
        profile(
            "5",
            "Elena",
            29,
            Gender::Female,
            129,
            "Yoga, books and calm.",
            &[Interest::Fitness, Interest::Reading, Interest::Travel, Interest::Coffee],
            Coordinate::new(55.7200, 37.6000),
        ),
        profile(
            "6",
            "Sergey",
            35,
            Gender::Male,
            91,
            "Love grilling steaks and going to the gym.",
            &[Interest::Cooking, Interest::Gym, Interest::Hunting],
            Coordinate::new(55.7800, 37.6500),
        ),
    ]
}

/// Three upcoming demo events, one, two and three days out
pub fn demo_events() -> Vec<Event> {
    let now = Utc::now();

    vec![
        Event {
            id: "e1".to_string(),
            title: "Morning run in Gorky Park".to_string(),
            description: "Meet at the main entrance. Easy pace, beginners welcome!".to_string(),
            date: now + Duration::days(1),
            location_name: "Gorky Park, main entrance".to_string(),
            organizer_id: "1".to_string(),
            participant_ids: vec!["1".to_string(), "3".to_string()],
            tags: [Interest::Running, Interest::Fitness].into_iter().collect(),
        },
        Event {
            id: "e2".to_string(),
            title: "Board game night".to_string(),
            description: "Catan and Ticket to Ride. Snacks welcome.".to_string(),
            date: now + Duration::days(2),
            location_name: "Anticafe \"Vremya\"".to_string(),
            organizer_id: "4".to_string(),
            participant_ids: vec!["4".to_string(), "2".to_string()],
            tags: [Interest::Gaming, Interest::Coffee].into_iter().collect(),
        },
        Event {
            id: "e3".to_string(),
            title: "Plein air on the embankment".to_string(),
            description: "Painting the sunset. Bring your own supplies.".to_string(),
            date: now + Duration::days(3),
            location_name: "Krymskaya embankment".to_string(),
            organizer_id: "3".to_string(),
            participant_ids: vec!["3".to_string()],
            tags: [Interest::Art, Interest::Hiking].into_iter().collect(),
        },
    ]
}

/// Full demo seed: pool, Elena's pending like and the demo events
pub fn demo() -> SeedData {
    SeedData {
        pool: demo_pool(),
        incoming_likes: vec!["5".to_string()],
        events: demo_events(),
    }
}

/// A ready-made local profile for demos and tests
pub fn demo_local_profile() -> Profile {
    profile(
        LOCAL_USER_ID,
        "Alexander",
        28,
        Gender::Male,
        1005,
        "Into outdoor activities and good books.",
        &[
            Interest::Gym,
            Interest::Reading,
            Interest::Travel,
            Interest::Running,
            Interest::Coffee,
        ],
        DEFAULT_LOCATION,
    )
}
