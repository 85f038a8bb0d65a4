//! Message segmentation
//!
//! A message lists customers one after another, separated by commas or
//! hyphens. Splitting is applied in passes, one delimiter at a time, each
//! pass splitting every piece left by the previous one.
//!
//! The bare `-` pass also cuts hyphenated names inside a customer
//! ("Agualva-Cacém", "Linda-a-Velha"). Such a customer ends up as several
//! spans, most of which then fail extraction.

use transporte_core::RawSpan;

/// Delimiters in the order they are applied
pub const DELIMITERS: [&str; 3] = [",", " - ", "-"];

/// Split a message into trimmed, non-empty customer spans, in message order.
///
/// The returned iterator is lazy; an empty or blank message yields nothing.
pub fn segment(message: &str) -> impl Iterator<Item = RawSpan> + '_ {
    let [first, second, third] = DELIMITERS;
    message
        .split(first)
        .flat_map(move |piece| piece.split(second))
        .flat_map(move |piece| piece.split(third))
        .filter_map(RawSpan::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(message: &str) -> Vec<String> {
        segment(message).map(RawSpan::into_string).collect()
    }

    #[test]
    fn test_comma_separated_customers() {
        let message = "Ana 9h Porto Rua A 1 911111111, Rui 10h Maia Rua B 2 922222222";
        assert_eq!(
            spans(message),
            vec!["Ana 9h Porto Rua A 1 911111111", "Rui 10h Maia Rua B 2 922222222"]
        );
    }

    #[test]
    fn test_spaced_hyphen_and_bare_hyphen() {
        let message = "Ana 9h Porto 911111111 - Rui 10h Maia 922222222-Eva 11h Aveiro 933333333";
        assert_eq!(
            spans(message),
            vec![
                "Ana 9h Porto 911111111",
                "Rui 10h Maia 922222222",
                "Eva 11h Aveiro 933333333"
            ]
        );
    }

    #[test]
    fn test_blank_pieces_are_dropped() {
        assert_eq!(spans(" ,, - ,Ana 9h ,  "), vec!["Ana 9h"]);
    }

    #[test]
    fn test_empty_message_has_no_spans() {
        assert_eq!(segment("").count(), 0);
        assert_eq!(segment("   \n ").count(), 0);
    }

    #[test]
    fn test_hyphenated_place_is_split() {
        // Known limitation: a hyphenated locality inside one customer splits it.
        let message = "Rui 10h Clínica Agualva-Cacém Rua B 2 922222222";
        assert_eq!(
            spans(message),
            vec!["Rui 10h Clínica Agualva", "Cacém Rua B 2 922222222"]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let message = "c, b - a-d";
        assert_eq!(spans(message), vec!["c", "b", "a", "d"]);
    }
}
