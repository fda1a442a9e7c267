//! Number formatting for chart labels and the summary line

/// SI prefixes from yocto (1e-24) to yotta (1e24)
const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Position of the unprefixed entry in `SI_PREFIXES`
const SI_UNIT_INDEX: i32 = 8;

/// Group an integer with thousands separators: `39000000` -> `39,000,000`
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Group an amount with thousands separators
///
/// Whole amounts print without decimals (`39,000,000`), anything else with
/// two (`99,000.50`).
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude.fract() == 0.0 {
        return format!("{}{}", sign, group_digits(&format!("{:.0}", magnitude)));
    }

    let fixed = format!("{:.2}", magnitude);
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!("{}{}.{}", sign, group_digits(int_part), frac_part),
        None => format!("{}{}", sign, group_digits(&fixed)),
    }
}

/// Two-significant-digit SI label, as shown on top of bars
///
/// `20000000` -> `20M`, `1500000` -> `1.5M`, `1000000` -> `1.0M`, `150000` -> `150k`,
/// `0.5` -> `500m`. Values beyond yotta keep the `Y` prefix with a longer mantissa.
pub fn format_si(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // Round to two significant digits first; rounding can carry into the next power of ten
    let exponent = magnitude.log10().floor() as i32;
    let step = 10f64.powi(exponent - 1);
    let rounded = (magnitude / step).round() * step;
    if !rounded.is_finite() {
        return value.to_string();
    }
    let exponent = rounded.log10().floor() as i32;

    let power = exponent
        .div_euclid(3)
        .clamp(-SI_UNIT_INDEX, SI_PREFIXES.len() as i32 - 1 - SI_UNIT_INDEX);
    let mantissa = rounded / 10f64.powi(power * 3);
    let int_digits = exponent - power * 3 + 1;
    let decimals = (2 - int_digits).max(0) as usize;

    format!(
        "{}{:.*}{}",
        sign,
        decimals,
        mantissa,
        SI_PREFIXES[(power + SI_UNIT_INDEX) as usize]
    )
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
