use tripwise::shared::geo::{Coordinate, Distance};

#[test]
fn distance_test() {
    let coord_a = Coordinate {
        latitude: 48.85800943005911,
        longitude: 2.3514350059357927,
    };

    let coord_b = Coordinate {
        latitude: 51.5052389927712,
        longitude: -0.12495407345099824,
    };
    let d = coord_a.great_circle_distance(&coord_b);
    assert!((d.as_kilometers() - 343.0).abs() < 5.0);
}

#[test]
fn network_distance_is_longer() {
    let coord_a = Coordinate::from((14.5995, 120.9842));
    let coord_b = Coordinate::from((14.5547, 121.0244));
    assert!(coord_a.network_distance(&coord_b) > coord_a.great_circle_distance(&coord_b));
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn coordinate_key_is_exact() {
    let coord_a = Coordinate::from((14.5995, 120.9842));
    let coord_b = Coordinate::from((14.5995, 120.98420001));
    assert_eq!(coord_a.key(), Coordinate::from((14.5995, 120.9842)).key());
    assert_ne!(coord_a.key(), coord_b.key());
}
