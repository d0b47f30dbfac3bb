//! Inbound message classification.
//!
//! Every line a client sends is classified independently into one of two
//! dispatch modes:
//! - **command mode**: the first whitespace-delimited token is the
//!   `exchange` keyword (case-insensitive) and a currency code follows,
//! - **chat mode**: everything else.
//!
//! No state is carried between messages. Matching is on the first token
//! only; `exchanges`, or `exchange` appearing later in the line, is chat.

/// Keyword that puts a message into command mode.
pub const EXCHANGE_KEYWORD: &str = "exchange";

/// Dispatch decision for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Look up a currency and reply to the sender only.
    Lookup {
        /// Upper-cased currency code taken from the second token.
        code: String,
    },

    /// Broadcast the original text to every connected client.
    Chat,
}

/// Classify a single inbound line.
///
/// Command mode requires both the keyword and a second token; a bare
/// `exchange` with nothing after it is ordinary chat, not an error.
pub fn classify(text: &str) -> Dispatch {
    let mut words = text.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(code)) if first.eq_ignore_ascii_case(EXCHANGE_KEYWORD) => {
            Dispatch::Lookup {
                code: code.to_uppercase(),
            }
        }
        _ => Dispatch::Chat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_with_code_is_a_lookup() {
        assert_eq!(
            classify("exchange usd"),
            Dispatch::Lookup {
                code: "USD".to_string()
            }
        );
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        assert_eq!(
            classify("EXCHANGE eur"),
            Dispatch::Lookup {
                code: "EUR".to_string()
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            classify("   exchange   chf   "),
            Dispatch::Lookup {
                code: "CHF".to_string()
            }
        );
    }

    #[test]
    fn bare_keyword_falls_through_to_chat() {
        assert_eq!(classify("exchange"), Dispatch::Chat);
        assert_eq!(classify("  exchange  "), Dispatch::Chat);
    }

    #[test]
    fn keyword_must_be_the_first_token() {
        assert_eq!(classify("please exchange usd"), Dispatch::Chat);
    }

    #[test]
    fn no_partial_keyword_match() {
        assert_eq!(classify("exchanges usd"), Dispatch::Chat);
        assert_eq!(classify("exchang usd"), Dispatch::Chat);
    }

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(classify("hello everyone"), Dispatch::Chat);
        assert_eq!(classify(""), Dispatch::Chat);
    }

    #[test]
    fn extra_tokens_after_the_code_are_dropped() {
        assert_eq!(
            classify("exchange usd please"),
            Dispatch::Lookup {
                code: "USD".to_string()
            }
        );
    }
}
