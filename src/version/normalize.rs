//! Separator-stripping numeric normalization

/// Strip every occurrence of `separator` from `value` and parse what
/// remains as a base-10 integer.
///
/// "01-01-2024" with `-` becomes 1012024; "1.2.10" with `.` becomes 1210.
/// The result orders by concatenated digits, which only agrees with
/// calendar or semantic ordering when every segment has a fixed width.
pub fn concatenated_digits(value: &str, separator: char) -> Option<i64> {
    value.replace(separator, "").trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("01-01-2024", '-', Some(1012024))]
    #[case("28-02-2024", '-', Some(28022024))]
    #[case("2024", '-', Some(2024))]
    #[case(" 01-01-2024 ", '-', Some(1012024))]
    #[case("01/01/2024", '-', None)]
    #[case("yesterday", '-', None)]
    #[case("", '-', None)]
    fn concatenated_digits_with_dash_separator(
        #[case] value: &str,
        #[case] separator: char,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(concatenated_digits(value, separator), expected);
    }

    #[rstest]
    #[case("1.2.3", '.', Some(123))]
    #[case("1.2.10", '.', Some(1210))]
    #[case("10", '.', Some(10))]
    #[case("1.2.3-beta", '.', None)]
    #[case("one.two", '.', None)]
    fn concatenated_digits_with_dot_separator(
        #[case] value: &str,
        #[case] separator: char,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(concatenated_digits(value, separator), expected);
    }

    #[test]
    fn concatenated_digits_orders_by_digit_count_not_by_calendar() {
        // Mixed-width segments compare as plain integers
        let newer = concatenated_digits("1-1-2024", '-').unwrap();
        let older = concatenated_digits("31-12-2023", '-').unwrap();

        assert!(older > newer);
    }
}
