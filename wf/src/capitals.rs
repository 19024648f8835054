//! Static work item source: the 50 US state capitals

use tracing::debug;

use crate::domain::City;

/// The 50 US state capitals with coordinates
///
/// Lat/Lon roughly for downtown/statehouse; good enough for current
/// conditions. Ordered by state name, though the runner does not care.
pub fn capitals() -> Vec<City> {
    debug!("capitals: called");
    vec![
        City::new("Alabama", "Montgomery", 32.377716, -86.300568),
        City::new("Alaska", "Juneau", 58.301598, -134.420212),
        City::new("Arizona", "Phoenix", 33.448143, -112.096962),
        City::new("Arkansas", "Little Rock", 34.746613, -92.288986),
        City::new("California", "Sacramento", 38.576668, -121.493629),
        City::new("Colorado", "Denver", 39.739227, -104.984856),
        City::new("Connecticut", "Hartford", 41.764046, -72.682198),
        City::new("Delaware", "Dover", 39.157307, -75.519722),
        City::new("Florida", "Tallahassee", 30.438118, -84.281296),
        City::new("Georgia", "Atlanta", 33.748997, -84.387985),
        City::new("Hawaii", "Honolulu", 21.304850, -157.857758),
        City::new("Idaho", "Boise", 43.615021, -116.202316),
        City::new("Illinois", "Springfield", 39.798363, -89.654961),
        City::new("Indiana", "Indianapolis", 39.768402, -86.158066),
        City::new("Iowa", "Des Moines", 41.591087, -93.603729),
        City::new("Kansas", "Topeka", 39.047345, -95.675157),
        City::new("Kentucky", "Frankfort", 38.186722, -84.875374),
        City::new("Louisiana", "Baton Rouge", 30.457069, -91.187393),
        City::new("Maine", "Augusta", 44.307167, -69.781693),
        City::new("Maryland", "Annapolis", 38.978764, -76.490936),
        City::new("Massachusetts", "Boston", 42.358162, -71.063698),
        City::new("Michigan", "Lansing", 42.733635, -84.555328),
        City::new("Minnesota", "Saint Paul", 44.955097, -93.102211),
        City::new("Mississippi", "Jackson", 32.303848, -90.182106),
        City::new("Missouri", "Jefferson City", 38.579201, -92.172935),
        City::new("Montana", "Helena", 46.585709, -112.018417),
        City::new("Nebraska", "Lincoln", 40.808075, -96.699654),
        City::new("Nevada", "Carson City", 39.163914, -119.766121),
        City::new("New Hampshire", "Concord", 43.206898, -71.537994),
        City::new("New Jersey", "Trenton", 40.220596, -74.769913),
        City::new("New Mexico", "Santa Fe", 35.682240, -105.939728),
        City::new("New York", "Albany", 42.652843, -73.757874),
        City::new("North Carolina", "Raleigh", 35.780430, -78.639099),
        City::new("North Dakota", "Bismarck", 46.820850, -100.783318),
        City::new("Ohio", "Columbus", 39.961346, -82.999069),
        City::new("Oklahoma", "Oklahoma City", 35.492207, -97.503342),
        City::new("Oregon", "Salem", 44.938461, -123.030403),
        City::new("Pennsylvania", "Harrisburg", 40.264378, -76.883598),
        City::new("Rhode Island", "Providence", 41.830914, -71.414963),
        City::new("South Carolina", "Columbia", 34.000343, -81.033211),
        City::new("South Dakota", "Pierre", 44.367031, -100.346405),
        City::new("Tennessee", "Nashville", 36.165810, -86.784241),
        City::new("Texas", "Austin", 30.274670, -97.740349),
        City::new("Utah", "Salt Lake City", 40.777477, -111.888237),
        City::new("Vermont", "Montpelier", 44.262436, -72.580536),
        City::new("Virginia", "Richmond", 37.538857, -77.433640),
        City::new("Washington", "Olympia", 47.035805, -122.905014),
        City::new("West Virginia", "Charleston", 38.336246, -81.612328),
        City::new("Wisconsin", "Madison", 43.074684, -89.384445),
        City::new("Wyoming", "Cheyenne", 41.140259, -104.820236),
    ]
}
