//! WMO weather-code lookup table

/// Human-readable description and icon id for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

/// Map a WMO weather code to its description and icon.
/// Unknown codes fall back to `Unknown` with the clear-sky icon.
pub fn weather_info(code: u8) -> WeatherInfo {
    let (description, icon) = match code {
        0 => ("Clear sky", "01d"),
        1 => ("Mainly clear", "01d"),
        2 => ("Partly cloudy", "02d"),
        3 => ("Overcast", "03d"),
        45 | 48 => ("Foggy", "50d"),
        51 => ("Light drizzle", "09d"),
        53 => ("Drizzle", "09d"),
        55 => ("Heavy drizzle", "09d"),
        61 => ("Light rain", "10d"),
        63 => ("Rain", "10d"),
        65 => ("Heavy rain", "10d"),
        71 => ("Light snow", "13d"),
        73 => ("Snow", "13d"),
        75 => ("Heavy snow", "13d"),
        77 => ("Snow grains", "13d"),
        80 => ("Light showers", "09d"),
        81 => ("Showers", "09d"),
        82 => ("Heavy showers", "09d"),
        85 => ("Light snow showers", "13d"),
        86 => ("Snow showers", "13d"),
        95 => ("Thunderstorm", "11d"),
        96 | 99 => ("Thunderstorm with hail", "11d"),
        _ => ("Unknown", "01d"),
    };

    WeatherInfo { description, icon }
}
