//! Форматирование чисел для таблиц

/// Цена с разделителем тысяч (пробел) и двумя знаками: `1 234 567.89`
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(149.5), "149.50");
        assert_eq!(format_price(1234.567), "1 234.57");
        assert_eq!(format_price(1234567.89), "1 234 567.89");
        assert_eq!(format_price(-1234.5), "-1 234.50");
    }
}
