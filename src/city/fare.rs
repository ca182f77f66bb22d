//! Fare and ETA estimation

use super::drivers::CarType;

/// Base fare in Pakistani Rupees
pub const BASE_FARE_PKR: f64 = 150.0;

/// Rate per kilometer in Pakistani Rupees
pub const PER_KM_RATE_PKR: f64 = 50.0;

/// Average pace used for arrival estimates, minutes per kilometer
const MINUTES_PER_KM: f64 = 2.5;

/// Fare for a trip of the given length, scaled by vehicle class and
/// rounded to whole rupees.
pub fn fare_pkr(distance_km: f64, car_type: CarType) -> u64 {
    let fare = (BASE_FARE_PKR + distance_km * PER_KM_RATE_PKR) * car_type.rate_multiplier();
    fare.round() as u64
}

/// Rough arrival estimate in minutes.
pub fn eta_minutes(distance_km: f64) -> u64 {
    (distance_km * MINUTES_PER_KM).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fare() {
        assert_eq!(fare_pkr(10.0, CarType::Standard), 650);
    }

    #[test]
    fn test_premium_costs_more_than_eco() {
        let premium = fare_pkr(5.0, CarType::Premium);
        let eco = fare_pkr(5.0, CarType::Eco);
        assert!(premium > eco);
        assert_eq!(premium, 560);
        assert_eq!(eco, 360);
    }

    #[test]
    fn test_eta_rounds_to_minutes() {
        assert_eq!(eta_minutes(2.0), 5);
        assert_eq!(eta_minutes(0.0), 0);
    }
}
