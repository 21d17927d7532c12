/// shortest decimal text that reads back to the same `f64`
///
/// Digits come from `ryu`. The layout is positional for decimal exponents in
/// `-4..16` (`0.0001`, `0.5`, `1.0`, `1000000000000000.0`) and scientific
/// outside it, with a signed exponent of at least two digits (`1e-05`,
/// `1.5e+16`). Positional values always carry a fractional part, which keeps
/// integral coordinates distinguishable from node ids in the written file.
pub(crate) fn float_to_str(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0. { "inf" } else { "-inf" }.to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);

    let (sign, body) = match formatted.strip_prefix('-') {
        Some(body) => ("-", body),
        None => ("", formatted),
    };

    let (mantissa, exponent) = match body.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (body, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // significant digits with the decimal point sitting after `point` of them
    let mut point = int_part.len() as i32 + exponent;
    let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();

    let leading_zeros = digits.len() - digits.trim_start_matches('0').len();
    digits.drain(..leading_zeros);
    point -= leading_zeros as i32;

    let trimmed = digits.trim_end_matches('0').len();
    digits.truncate(trimmed);

    if digits.is_empty() {
        return format!("{}0.0", sign);
    }

    let decimal_exponent = point - 1;

    let text = if (-4..16).contains(&decimal_exponent) {
        if point <= 0 {
            format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
        } else if point as usize >= digits.len() {
            format!("{}{}.0", digits, "0".repeat(point as usize - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}.{}", whole, fraction)
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let exponent_sign = if decimal_exponent < 0 { '-' } else { '+' };

        if rest.is_empty() {
            format!("{}e{}{:02}", first, exponent_sign, decimal_exponent.abs())
        } else {
            format!("{}.{}e{}{:02}", first, rest, exponent_sign, decimal_exponent.abs())
        }
    };

    format!("{}{}", sign, text)
}
