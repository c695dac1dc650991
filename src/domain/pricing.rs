//! Price string helpers.
//!
//! Prices arrive as display strings, so ranking them means pulling a number
//! out of free text. The heuristic takes the first ASCII integer it finds.

use std::sync::OnceLock;

use regex::Regex;

/// Rank shared by negotiated prices and strings without a number.
pub const PRICE_RANK_UNKNOWN: u64 = 999_999;

fn first_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]+").expect("valid integer pattern"))
}

fn per_million_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/M([^A-Za-z]|$)").expect("valid suffix pattern"))
}

/// Numeric sort rank for a price display string.
///
/// Any `₹0` or `Free` ranks 0, `Custom` ranks [`PRICE_RANK_UNKNOWN`], anything
/// else ranks by its first integer after thousands separators are removed.
/// The markers are matched case-sensitively, anywhere in the string.
pub fn price_rank(price: &str) -> u64 {
    if price.contains("₹0") || price.contains("Free") {
        return 0;
    }
    if price.contains("Custom") {
        return PRICE_RANK_UNKNOWN;
    }

    let stripped = price.replace(',', "");
    first_integer()
        .find(&stripped)
        .and_then(|found| found.as_str().parse::<u64>().ok())
        .unwrap_or(PRICE_RANK_UNKNOWN)
}

/// Rank of an optional starting price; missing prices sort with the unknowns.
pub fn starting_price_rank(price: Option<&str>) -> u64 {
    price.map(price_rank).unwrap_or(PRICE_RANK_UNKNOWN)
}

/// Expands the `/M` per-million suffix; all other text passes through.
pub fn format_price_display(price: &str) -> String {
    per_million_suffix()
        .replace_all(price, "/million$1")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod price_rank_tests {
        use super::*;

        #[test]
        fn free_and_zero_rank_equally() {
            assert_eq!(price_rank("₹0"), 0);
            assert_eq!(price_rank("Free"), 0);
            assert_eq!(price_rank("₹0/month"), 0);
            assert_eq!(price_rank("Free forever"), 0);
        }

        #[test]
        fn zero_marker_anywhere_ranks_zero() {
            assert_eq!(price_rank("₹500/month, ₹0 for students"), 0);
        }

        #[test]
        fn lowercase_free_is_not_a_marker() {
            assert_eq!(price_rank("₹199/month + free domain"), 199);
            assert_eq!(price_rank("custom"), PRICE_RANK_UNKNOWN);
        }

        #[test]
        fn only_ascii_digits_count() {
            assert_eq!(price_rank("١٠ or $20"), 20);
            assert_eq!(price_rank("١٠"), PRICE_RANK_UNKNOWN);
        }

        #[test]
        fn custom_and_unparseable_rank_equally() {
            assert_eq!(price_rank("Custom"), PRICE_RANK_UNKNOWN);
            assert_eq!(price_rank("Contact sales"), PRICE_RANK_UNKNOWN);
            assert_eq!(price_rank(""), PRICE_RANK_UNKNOWN);
        }

        #[test]
        fn thousands_separators_are_stripped() {
            assert_eq!(price_rank("₹1,875/month"), 1875);
            assert_eq!(price_rank("₹20,750/month"), 20750);
        }

        #[test]
        fn first_number_wins() {
            assert_eq!(price_rank("$10–$20"), 10);
            assert_eq!(price_rank("₹4.15/M input tokens"), 4);
            assert_eq!(price_rank("₹1,500/user/month"), 1500);
        }

        #[test]
        fn overflowing_number_ranks_unknown() {
            assert_eq!(price_rank("$99999999999999999999999"), PRICE_RANK_UNKNOWN);
        }

        #[test]
        fn missing_starting_price_ranks_unknown() {
            assert_eq!(starting_price_rank(None), PRICE_RANK_UNKNOWN);
            assert_eq!(starting_price_rank(Some("$10")), 10);
        }
    }

    mod format_price_display_tests {
        use super::*;

        #[test]
        fn expands_per_million_suffix() {
            assert_eq!(
                format_price_display("₹4.15/M input tokens"),
                "₹4.15/million input tokens"
            );
            assert_eq!(format_price_display("$3/M"), "$3/million");
        }

        #[test]
        fn leaves_other_prices_untouched() {
            assert_eq!(format_price_display("₹525/month"), "₹525/month");
            assert_eq!(format_price_display("Custom"), "Custom");
            assert_eq!(format_price_display("₹145/VM/month"), "₹145/VM/month");
            assert_eq!(format_price_display("$5/MB"), "$5/MB");
        }
    }
}
