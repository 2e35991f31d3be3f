use super::normalize;

/// Distance assumed for any route missing from the table, in kilometers
pub const DEFAULT_DISTANCE_KM: f64 = 100.0;

/// Hub whose row answers lookups from an unknown origin
pub const DEFAULT_HUB: &str = "quezon city";

type DistanceRow = (&'static str, &'static [(&'static str, f64)]);

/// Approximate road distances (km) from each hub, keyed by normalized name
const DISTANCE_TABLE: &[DistanceRow] = &[
    (
        "quezon city",
        &[
            ("quezon city", 0.0),
            ("san juan", 8.0),
            ("caloocan", 9.0),
            ("mandaluyong", 10.0),
            ("marikina", 10.0),
            ("manila", 11.0),
            ("pasig", 13.0),
            ("valenzuela", 15.0),
            ("makati", 16.0),
            ("pasay", 19.0),
            ("taguig", 20.0),
            ("antipolo", 25.0),
            ("paranaque", 25.0),
            ("rizal", 30.0),
            ("las pinas", 30.0),
            ("muntinlupa", 32.0),
            ("bulacan", 40.0),
            ("cavite", 45.0),
            ("laguna", 60.0),
            ("pampanga", 80.0),
            ("batangas", 115.0),
            ("tarlac", 125.0),
            ("zambales", 180.0),
            ("pangasinan", 200.0),
            ("baguio", 250.0),
            ("naga", 380.0),
            ("legazpi", 480.0),
            ("cebu city", 570.0),
            ("davao city", 970.0),
        ],
    ),
    (
        "manila",
        &[
            ("manila", 0.0),
            ("san juan", 6.0),
            ("pasay", 7.0),
            ("makati", 8.0),
            ("mandaluyong", 8.0),
            ("caloocan", 8.0),
            ("quezon city", 11.0),
            ("taguig", 13.0),
            ("pasig", 14.0),
            ("paranaque", 14.0),
            ("marikina", 17.0),
            ("las pinas", 20.0),
            ("muntinlupa", 28.0),
            ("antipolo", 28.0),
            ("cavite", 30.0),
            ("rizal", 30.0),
            ("bulacan", 42.0),
            ("laguna", 50.0),
            ("pampanga", 75.0),
            ("batangas", 105.0),
            ("baguio", 245.0),
            ("cebu city", 570.0),
            ("davao city", 960.0),
        ],
    ),
    (
        "makati",
        &[
            ("makati", 0.0),
            ("pasay", 5.0),
            ("mandaluyong", 5.0),
            ("taguig", 6.0),
            ("manila", 8.0),
            ("pasig", 9.0),
            ("paranaque", 11.0),
            ("quezon city", 16.0),
            ("las pinas", 16.0),
            ("muntinlupa", 20.0),
            ("cavite", 28.0),
            ("rizal", 28.0),
            ("laguna", 42.0),
            ("bulacan", 50.0),
            ("pampanga", 85.0),
            ("batangas", 95.0),
            ("cebu city", 565.0),
            ("davao city", 955.0),
        ],
    ),
    (
        "pasig",
        &[
            ("pasig", 0.0),
            ("mandaluyong", 6.0),
            ("cainta", 6.0),
            ("marikina", 7.0),
            ("taguig", 8.0),
            ("makati", 9.0),
            ("quezon city", 13.0),
            ("manila", 14.0),
            ("antipolo", 15.0),
            ("rizal", 18.0),
            ("cavite", 38.0),
            ("laguna", 45.0),
            ("bulacan", 50.0),
            ("batangas", 100.0),
        ],
    ),
    (
        "cebu city",
        &[
            ("cebu city", 0.0),
            ("mandaue", 8.0),
            ("talisay", 12.0),
            ("lapu-lapu", 15.0),
            ("danao", 35.0),
            ("toledo", 50.0),
            ("tagbilaran", 75.0),
            ("bogo", 100.0),
            ("iloilo city", 260.0),
            ("davao city", 400.0),
            ("manila", 570.0),
            ("quezon city", 570.0),
        ],
    ),
    (
        "davao city",
        &[
            ("davao city", 0.0),
            ("panabo", 30.0),
            ("tagum", 55.0),
            ("digos", 55.0),
            ("general santos", 150.0),
            ("cagayan de oro", 260.0),
            ("butuan", 280.0),
            ("cebu city", 400.0),
            ("manila", 960.0),
            ("quezon city", 970.0),
        ],
    ),
];

fn hub_row(hub: &str) -> Option<&'static [(&'static str, f64)]> {
    DISTANCE_TABLE
        .iter()
        .find(|(name, _)| *name == hub)
        .map(|(_, row)| *row)
}

/// Resolve the distance in kilometers between two named locations
///
/// Names are compared trimmed and case-insensitively. An unknown origin is
/// looked up from the default hub's row; a destination missing from the row
/// resolves to [`DEFAULT_DISTANCE_KM`]. Never fails.
pub fn resolve_distance(origin: &str, destination: &str) -> f64 {
    let row = hub_row(&normalize(origin)).or_else(|| hub_row(DEFAULT_HUB));
    let destination = normalize(destination);

    row.and_then(|entries| {
        entries
            .iter()
            .find(|(name, _)| *name == destination)
            .map(|(_, km)| *km)
    })
    .unwrap_or(DEFAULT_DISTANCE_KM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_route() {
        assert_eq!(resolve_distance("Quezon City", "Antipolo"), 25.0);
        assert_eq!(resolve_distance("Cebu City", "Mandaue"), 8.0);
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        assert_eq!(resolve_distance("  MAKATI ", "taguig"), 6.0);
    }

    #[test]
    fn test_unknown_origin_uses_default_hub() {
        assert_eq!(
            resolve_distance("Somewhere Else", "Pampanga"),
            resolve_distance("Quezon City", "Pampanga")
        );
    }

    #[test]
    fn test_unknown_destination_is_moderate() {
        assert_eq!(resolve_distance("Manila", "Iloilo City"), DEFAULT_DISTANCE_KM);
        assert_eq!(resolve_distance("Nowhere", "Atlantis"), DEFAULT_DISTANCE_KM);
    }

    #[test]
    fn test_every_hub_row_starts_at_zero() {
        for (hub, _) in DISTANCE_TABLE {
            assert_eq!(resolve_distance(hub, hub), 0.0, "hub {}", hub);
        }
        assert!(hub_row(DEFAULT_HUB).is_some());
    }
}
