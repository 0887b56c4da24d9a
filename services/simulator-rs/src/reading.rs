use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Fixed sensor fleet; the downstream collector keys measurements on these ids.
pub const SENSOR_IDS: [&str; 4] = [
    "sensor_kiev",
    "sensor_lviv",
    "sensor_odesa",
    "sensor_kharkiv",
];

pub const VALUE_MIN: f64 = -5.0;
pub const VALUE_MAX: f64 = 35.5;

/// One synthetic measurement, built fresh each cycle and discarded after send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub sensor_id: String,
    pub value: f64,
}

/// Where readings come from. The production source draws from `rand`;
/// tests supply scripted sequences.
pub trait ReadingSource {
    fn next_reading(&mut self) -> Reading;
}

/// Uniform pick over `SENSOR_IDS`, uniform value over the fixed range,
/// rounded to two decimal places.
pub struct RandomReadings;

impl ReadingSource for RandomReadings {
    fn next_reading(&mut self) -> Reading {
        let mut rng = rand::thread_rng();
        let sensor_id = SENSOR_IDS
            .choose(&mut rng)
            .copied()
            .unwrap_or(SENSOR_IDS[0])
            .to_string();
        let raw: f64 = rng.gen_range(VALUE_MIN..=VALUE_MAX);
        Reading {
            sensor_id,
            value: (raw * 100.0).round() / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_in_range() {
        let mut source = RandomReadings;
        for _ in 0..1000 {
            let r = source.next_reading();
            assert!(SENSOR_IDS.contains(&r.sensor_id.as_str()));
            assert!(r.value >= VALUE_MIN && r.value <= VALUE_MAX);
        }
    }

    #[test]
    fn values_have_two_decimal_digits() {
        let mut source = RandomReadings;
        for _ in 0..1000 {
            let r = source.next_reading();
            let scaled = r.value * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "value {} not rounded to 2 decimals",
                r.value
            );
        }
    }

    #[test]
    fn serializes_to_expected_schema() {
        let r = Reading {
            sensor_id: "sensor_lviv".to_string(),
            value: 21.37,
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["sensor_id"], "sensor_lviv");
        assert_eq!(json["value"], 21.37);
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
