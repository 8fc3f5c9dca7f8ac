use chrono::{DateTime, Utc};
use marsclock::{format::hms, DistanceUnit, MarsDate};

/// Spirit landing site, degrees west.
const SPIRIT_LON: f64 = 184.702;
const SPIRIT_LAT: f64 = -14.5684;

fn main() {
    env_logger::init();

    let landing = DateTime::<Utc>::from_timestamp_millis(1_073_137_591_000)
        .expect("landing time in range");
    let mars = MarsDate::from_utc(landing);
    let now = Utc::now().timestamp_millis();

    println!("Earth UTC:  {landing}");
    println!("Mars date:  {mars}");
    println!("{}", mars.julian_date_tt());
    println!("Ls:         {:.3}°", mars.solar_longitude());
    println!("MTC:        {}", hms(mars.mean_solar_time()));
    println!("LMST:       {}", hms(mars.local_mean_solar_time(SPIRIT_LON)));
    println!("LTST:       {}", hms(mars.local_true_solar_time(SPIRIT_LON)));
    println!(
        "Sun:        elevation {:.2}°, azimuth {:.2}°",
        mars.solar_elevation(SPIRIT_LAT, SPIRIT_LON),
        mars.solar_azimuth(SPIRIT_LAT, SPIRIT_LON)
    );
    println!(
        "Earth-Mars: {:.0} km, one-way light time {}",
        mars.earth_mars_distance(DistanceUnit::Kilometers),
        mars.light_delay()
    );
    println!(
        "Today is mission sol {} ({:.2} Mars years after landing)",
        MarsDate::new(now).sol_of_mission(SPIRIT_LON, mars.earth_millis()),
        mars.age_in_years(now)
    );
}
