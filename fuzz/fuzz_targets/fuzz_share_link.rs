#![no_main]

use rinkplan_core::plan::{PlanField, PlanState};
use rinkplan_core::share_link;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process valid UTF-8; query strings are text.
    let Ok(query) = std::str::from_utf8(data) else {
        return;
    };

    let mut state = PlanState::new();
    share_link::hydrate(&mut state, query);

    // Post-conditions that must always hold:
    for field in PlanField::ALL {
        assert!(field.get(&state).is_finite(), "{field:?} non-finite");
    }
    assert!(state.num_of_players() >= 1.0, "player floor broken");
    assert!(state.receipt().cost_per_player.is_finite() || state.receipt().base_cost().is_infinite());

    // Whatever was hydrated must build into a URL, and hydrating that
    // URL's query again must be a fixed point.
    let url = share_link::build("https://rink.example", &state).expect("static origin parses");
    let mut again = PlanState::new();
    share_link::hydrate(&mut again, url.query().unwrap_or(""));
    for field in PlanField::ALL {
        assert_eq!(field.get(&again), field.get(&state), "{field:?} drifted");
    }
    assert_eq!(again.team_name(), state.team_name(), "team name drifted");
});
