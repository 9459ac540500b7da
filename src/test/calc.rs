#[cfg(test)]
mod tests {
    use crate::app::calc::direction_hint;

    #[test]
    fn rising_series_is_positive() {
        assert_eq!(direction_hint(&[10.0, 12.0, 15.0]), 1);
    }

    #[test]
    fn falling_series_is_negative() {
        assert_eq!(direction_hint(&[15.0, 12.0, 10.0]), -1);
    }

    #[test]
    fn flat_series_is_negative() {
        assert_eq!(direction_hint(&[10.0, 12.0, 10.0]), -1);
    }

    #[test]
    fn single_sample_is_negative() {
        assert_eq!(direction_hint(&[42.0]), -1);
    }

    #[test]
    fn empty_series_is_negative() {
        assert_eq!(direction_hint(&[]), -1);
    }
}
