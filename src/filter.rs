/// Listing price filter, as picked in the `price-filter` select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Max(i64),
    /// a value that is not a number; no card passes it
    Unparsable,
}

impl PriceFilter {
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value.map(str::trim) else {
            return Self::All;
        };
        if value.is_empty() || value == "All" {
            return Self::All;
        }
        value
            .parse::<i64>()
            .map(Self::Max)
            .unwrap_or(Self::Unparsable)
    }

    // whole part only, like the integer `data-price`
    pub fn shows(&self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Max(max) => price.is_finite() && price.trunc() <= *max as f64,
            Self::Unparsable => false,
        }
    }

    pub fn selected(&self, option: &str) -> bool {
        match self {
            Self::All => option == "All",
            Self::Max(max) => option.parse::<i64>().ok() == Some(*max),
            Self::Unparsable => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, PriceFilter::All)]
    #[case(Some("All"), PriceFilter::All)]
    #[case(Some(""), PriceFilter::All)]
    #[case(Some("100"), PriceFilter::Max(100))]
    #[case(Some(" 50 "), PriceFilter::Max(50))]
    #[case(Some("cheap"), PriceFilter::Unparsable)]
    #[case(Some("50abc"), PriceFilter::Unparsable)]
    #[case(Some("99999999999999999999"), PriceFilter::Unparsable)]
    fn parses_select_values(#[case] raw: Option<&str>, #[case] expected: PriceFilter) {
        assert_eq!(PriceFilter::parse(raw), expected);
    }

    #[rstest]
    #[case(50.0, true)]
    #[case(100.0, true)]
    #[case(100.9, true)]
    #[case(101.0, false)]
    #[case(250.0, false)]
    fn threshold_is_inclusive(#[case] price: f64, #[case] shown: bool) {
        assert_eq!(PriceFilter::Max(100).shows(price), shown);
    }

    #[test]
    fn all_shows_everything_and_garbage_hides_everything() {
        for price in [0.0, 10.0, 99999.0] {
            assert!(PriceFilter::All.shows(price));
            assert!(!PriceFilter::Unparsable.shows(price));
        }
    }
}
