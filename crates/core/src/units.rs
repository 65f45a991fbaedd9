//! Unit-of-measure conversion functions
//!
//! Factor-table conversion within a category (offset math for temperature).
//! Unit lookup is alias-tolerant ("m", "meter", "meters"). Converting across
//! categories is an input error.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Mass,
    Data,
    Temperature,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Mass => "mass",
            Category::Data => "data",
            Category::Temperature => "temperature",
        }
    }
}

/// A resolved unit: canonical symbol, category, and factor to the category's
/// base unit (meter, kilogram, byte). Temperature ignores the factor.
#[derive(Debug, Clone, Copy)]
struct Unit {
    symbol: &'static str,
    category: Category,
    to_base: f64,
}

/// A completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub from: &'static str,
    pub to: &'static str,
    pub category: Category,
    pub result: f64,
}

fn resolve(alias: &str) -> Result<Unit, String> {
    let unit = |symbol, category, to_base| Unit {
        symbol,
        category,
        to_base,
    };

    let found = match alias.to_lowercase().as_str() {
        // Length (base: meter)
        "mm" | "millimeter" | "millimeters" => unit("mm", Category::Length, 0.001),
        "cm" | "centimeter" | "centimeters" => unit("cm", Category::Length, 0.01),
        "m" | "meter" | "meters" => unit("m", Category::Length, 1.0),
        "km" | "kilometer" | "kilometers" => unit("km", Category::Length, 1000.0),
        "in" | "inch" | "inches" => unit("in", Category::Length, 0.0254),
        "ft" | "foot" | "feet" => unit("ft", Category::Length, 0.3048),
        "yd" | "yard" | "yards" => unit("yd", Category::Length, 0.9144),
        "mi" | "mile" | "miles" => unit("mi", Category::Length, 1609.344),

        // Mass (base: kilogram)
        "mg" | "milligram" | "milligrams" => unit("mg", Category::Mass, 1e-6),
        "g" | "gram" | "grams" => unit("g", Category::Mass, 0.001),
        "kg" | "kilogram" | "kilograms" => unit("kg", Category::Mass, 1.0),
        "t" | "tonne" | "tonnes" => unit("t", Category::Mass, 1000.0),
        "oz" | "ounce" | "ounces" => unit("oz", Category::Mass, 0.028_349_523_125),
        "lb" | "lbs" | "pound" | "pounds" => unit("lb", Category::Mass, 0.453_592_37),

        // Data (base: byte; kb/mb/... are decimal, kib/mib/... binary)
        "b" | "byte" | "bytes" => unit("B", Category::Data, 1.0),
        "kb" | "kilobyte" | "kilobytes" => unit("kB", Category::Data, 1e3),
        "mb" | "megabyte" | "megabytes" => unit("MB", Category::Data, 1e6),
        "gb" | "gigabyte" | "gigabytes" => unit("GB", Category::Data, 1e9),
        "tb" | "terabyte" | "terabytes" => unit("TB", Category::Data, 1e12),
        "kib" | "kibibyte" | "kibibytes" => unit("KiB", Category::Data, 1024.0),
        "mib" | "mebibyte" | "mebibytes" => unit("MiB", Category::Data, 1024.0 * 1024.0),
        "gib" | "gibibyte" | "gibibytes" => {
            unit("GiB", Category::Data, 1024.0 * 1024.0 * 1024.0)
        }

        // Temperature (offset math, factor unused)
        "c" | "celsius" => unit("°C", Category::Temperature, 1.0),
        "f" | "fahrenheit" => unit("°F", Category::Temperature, 1.0),
        "k" | "kelvin" => unit("K", Category::Temperature, 1.0),

        other => return Err(format!("Unknown unit: '{other}'")),
    };

    Ok(found)
}

fn to_celsius(value: f64, symbol: &str) -> f64 {
    match symbol {
        "°F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(value: f64, symbol: &str) -> f64 {
    match symbol {
        "°F" => value * 9.0 / 5.0 + 32.0,
        "K" => value + 273.15,
        _ => value,
    }
}

/// Convert `value` from one unit to another within the same category.
pub fn convert(value: f64, from: &str, to: &str) -> Result<Conversion, String> {
    let from = resolve(from)?;
    let to = resolve(to)?;

    if from.category != to.category {
        return Err(format!(
            "Cannot convert {} ({}) to {} ({})",
            from.symbol,
            from.category.name(),
            to.symbol,
            to.category.name()
        ));
    }

    let result = if from.category == Category::Temperature {
        from_celsius(to_celsius(value, from.symbol), to.symbol)
    } else {
        value * from.to_base / to.to_base
    };

    Ok(Conversion {
        value,
        from: from.symbol,
        to: to.symbol,
        category: from.category,
        result,
    })
}

/// Supported units per category, for the `unit list` command.
pub fn supported_units() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "length",
            vec!["mm", "cm", "m", "km", "in", "ft", "yd", "mi"],
        ),
        ("mass", vec!["mg", "g", "kg", "t", "oz", "lb"]),
        (
            "data",
            vec!["B", "kB", "MB", "GB", "TB", "KiB", "MiB", "GiB"],
        ),
        ("temperature", vec!["°C", "°F", "K"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_convert_length() {
        assert_close(convert(1.0, "km", "m").unwrap().result, 1000.0);
        assert_close(convert(1.0, "mi", "km").unwrap().result, 1.609344);
        assert_close(convert(12.0, "in", "ft").unwrap().result, 1.0);
    }

    #[test]
    fn test_convert_mass() {
        assert_close(convert(1.0, "kg", "g").unwrap().result, 1000.0);
        assert_close(convert(16.0, "oz", "lb").unwrap().result, 1.0);
    }

    #[test]
    fn test_convert_data_decimal_vs_binary() {
        assert_close(convert(1.0, "kb", "b").unwrap().result, 1000.0);
        assert_close(convert(1.0, "kib", "b").unwrap().result, 1024.0);
        assert_close(convert(1.0, "gib", "mib").unwrap().result, 1024.0);
    }

    #[test]
    fn test_convert_temperature() {
        assert_close(convert(0.0, "c", "f").unwrap().result, 32.0);
        assert_close(convert(212.0, "f", "c").unwrap().result, 100.0);
        assert_close(convert(0.0, "c", "k").unwrap().result, 273.15);
        assert_close(convert(300.0, "k", "c").unwrap().result, 26.85);
    }

    #[test]
    fn test_convert_same_unit_is_identity() {
        assert_close(convert(42.0, "m", "m").unwrap().result, 42.0);
    }

    #[test]
    fn test_aliases_resolve() {
        assert_close(convert(1.0, "meters", "kilometer").unwrap().result, 0.001);
        assert_close(convert(1.0, "POUNDS", "oz").unwrap().result, 16.0);
    }

    #[test]
    fn test_cross_category_is_error() {
        let result = convert(1.0, "kg", "m");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Cannot convert"));
    }

    #[test]
    fn test_unknown_unit() {
        let result = convert(1.0, "furlong", "m");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown unit"));
    }

    #[test]
    fn test_supported_units_covers_all_categories() {
        let listing = supported_units();

        assert_eq!(listing.len(), 4);
        for (_, units) in &listing {
            assert!(!units.is_empty());
        }
    }
}
