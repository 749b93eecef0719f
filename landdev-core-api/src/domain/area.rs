use rust_decimal::Decimal;

/// Converts the `W.G.D` area notation into guntas.
///
/// `W` counts whole units of one hundred guntas, `G` counts guntas and `D` is a
/// fractional gunta written with one digit (tenths) or more (hundredths):
///
/// * `1.50.0`  -> 150.0
/// * `0.81.6`  -> 81.6
/// * `0.52.18` -> 52.18
///
/// Anything that does not match the notation yields zero. Callers treat a zero
/// result as "unparseable" rather than as a real area.
pub fn parse_area_to_guntas(area: &str) -> Decimal {
    try_parse_area(area).unwrap_or(Decimal::ZERO)
}

fn try_parse_area(area: &str) -> Option<Decimal> {
    let parts: Vec<&str> = area.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let whole: i64 = parts[0].parse().ok()?;
    let guntas: i64 = parts[1].parse().ok()?;
    let decimal: i64 = parts[2].parse().ok()?;

    let scale = if parts[2].len() == 1 { 1 } else { 2 };
    let decimal_value = Decimal::new(decimal, scale);

    Decimal::from(whole)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_add(Decimal::from(guntas))?
        .checked_add(decimal_value)
}
