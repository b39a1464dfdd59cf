//! Built-in sample data so the binary is usable without a snapshot.

use std::error::Error;

use chrono::NaiveDate;
use trailgrid_core::{Activity, Gear, GridPoint, Route};
use trailgrid_store::UserStore;

fn route(name: &str, pts: &[(i32, i32)]) -> Result<Route, Box<dyn Error>> {
    Ok(Route::with_points(
        name,
        pts.iter().map(|&(x, y)| GridPoint::new(x, y)),
    )?)
}

/// Three riders: ann follows bob, bob follows cy.
///
/// ann and bob's rides meet at (2, 1); cy rides far away.
pub fn sample_store() -> Result<UserStore, Box<dyn Error>> {
    let date = NaiveDate::from_ymd_opt(2024, 7, 14).ok_or("invalid sample date")?;
    let bike = Gear::bike("Rocket", "gravel", 11)?;
    let shoes = Gear::shoe("Clip", "44", "cleat")?;

    let mut store = UserStore::new();
    store.create_user("ann")?.add_gear(bike.clone());
    store.create_user("bob")?.add_gear(shoes.clone());
    store.create_user("cy")?;

    let rides = [
        ("ann", "corner", &[(0, 0), (0, 1), (1, 1), (1, 2)][..], &bike),
        ("ann", "spur", &[(1, 1), (2, 1)][..], &bike),
        ("bob", "east", &[(2, 1), (3, 1), (3, 2), (4, 2)][..], &shoes),
        ("cy", "far", &[(20, 20), (21, 20), (21, 21)][..], &shoes),
    ];
    for (user, name, pts, gear) in rides {
        let activity = Activity::new(route(name, pts)?, gear.clone(), date, 5.0, 25, name)?;
        store.record_activity(user, activity)?;
    }

    store.follow("ann", "bob")?;
    store.follow("bob", "cy")?;
    Ok(store)
}
