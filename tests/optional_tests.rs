//! Tests for Optional optics built from the model types.
//!
//! A prism composed with a lens into the variant's payload focuses on a field
//! that exists only for one variant. Reads and writes on any other variant
//! leave the source as it was.

use optikon::model::{HttpError, NetworkError, NetworkResult, Success};
use optikon::optics::{Lens, Optional, Prism};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Success content
// =============================================================================

#[rstest]
fn test_success_content_present() {
    let optional = NetworkResult::success_content_optional();
    let result = NetworkResult::success("payload");

    assert_eq!(optional.get_option(&result), Some(&"payload".to_string()));
    assert!(optional.is_present(&result));
}

#[rstest]
#[case(NetworkResult::timeout())]
#[case(NetworkResult::http_error("404"))]
fn test_success_content_absent(#[case] result: NetworkResult) {
    let optional = NetworkResult::success_content_optional();

    assert_eq!(optional.get_option(&result), None);
    assert!(!optional.is_present(&result));
}

#[rstest]
fn test_success_content_set_rewrites_payload() {
    let optional = NetworkResult::success_content_optional();
    let updated = optional.set(NetworkResult::success("old"), "new".to_string());
    assert_eq!(updated, NetworkResult::success("new"));
}

#[rstest]
fn test_success_content_set_on_failure_is_noop() {
    let optional = NetworkResult::success_content_optional();
    let failure = NetworkResult::http_error("500");
    assert_eq!(optional.set(failure.clone(), "new".to_string()), failure);
}

// =============================================================================
// HTTP error message, two prisms deep
// =============================================================================

#[rstest]
fn test_http_message_built_by_hand_matches_helper() {
    let by_hand = NetworkResult::error_prism()
        .compose(NetworkError::http_prism())
        .compose_lens(HttpError::message_lens());
    let helper = NetworkResult::http_message_optional();
    let result = NetworkResult::http_error("503");

    assert_eq!(by_hand.get_option(&result), helper.get_option(&result));
    assert_eq!(
        by_hand.set(result.clone(), "504".to_string()),
        helper.set(result, "504".to_string())
    );
}

#[rstest]
#[case(NetworkResult::timeout())]
#[case(NetworkResult::success("ok"))]
fn test_http_message_modify_option_absent(#[case] result: NetworkResult) {
    let optional = NetworkResult::http_message_optional();
    assert_eq!(optional.modify_option(result, |message| message + "!"), None);
}

#[rstest]
fn test_http_message_modify_present() {
    let optional = NetworkResult::http_message_optional();
    let modified = optional.modify(NetworkResult::http_error("bad gateway"), |message| {
        message.to_uppercase()
    });
    assert_eq!(modified, NetworkResult::http_error("BAD GATEWAY"));
}

// =============================================================================
// Lens then prism
// =============================================================================

#[derive(Clone, PartialEq, Debug, optikon::Lenses)]
struct Exchange {
    request: String,
    outcome: NetworkResult,
}

#[rstest]
fn test_lens_prism_composition_reads_variant() {
    let outcome_success = Exchange::outcome_lens().compose_prism(NetworkResult::success_prism());
    let exchange = Exchange {
        request: "GET /".to_string(),
        outcome: NetworkResult::success("<html>"),
    };

    assert_eq!(
        outcome_success.get_option(&exchange),
        Some(&Success {
            content: "<html>".to_string()
        })
    );
}

#[rstest]
fn test_lens_prism_composition_set_rewrites_matching_variant() {
    let outcome_success = Exchange::outcome_lens().compose_prism(NetworkResult::success_prism());
    let exchange = Exchange {
        request: "GET /".to_string(),
        outcome: NetworkResult::success("early"),
    };

    let updated = outcome_success.set(
        exchange.clone(),
        Success {
            content: "late".to_string(),
        },
    );

    assert_eq!(updated.outcome, NetworkResult::success("late"));
    assert_eq!(updated.request, exchange.request);
    assert_eq!(exchange.outcome, NetworkResult::success("early"));
}

#[rstest]
fn test_lens_prism_composition_set_keeps_other_variant() {
    let outcome_error = Exchange::outcome_lens().compose_prism(NetworkResult::error_prism());
    let exchange = Exchange {
        request: "GET /".to_string(),
        outcome: NetworkResult::success("ok"),
    };

    let updated = outcome_error.set(exchange.clone(), NetworkError::Timeout);

    assert_eq!(updated, exchange);
    assert_eq!(outcome_error.get_option(&updated), None);
}

#[rstest]
fn test_optional_compose_prism_reaches_timeout() {
    let outcome_timeout = Exchange::outcome_lens()
        .compose_prism(NetworkResult::error_prism())
        .compose(NetworkError::timeout_prism());

    let timed_out = Exchange {
        request: "GET /slow".to_string(),
        outcome: NetworkResult::timeout(),
    };
    let answered = Exchange {
        request: "GET /fast".to_string(),
        outcome: NetworkResult::success("ok"),
    };

    assert_eq!(outcome_timeout.get_option(&timed_out), Some(&()));
    assert_eq!(outcome_timeout.get_option(&answered), None);
    assert_eq!(outcome_timeout.set(answered.clone(), ()), answered);
}

// =============================================================================
// Optional laws
// =============================================================================

fn network_result_strategy() -> impl Strategy<Value = NetworkResult> {
    prop_oneof![
        "[a-z0-9 ]{0,12}".prop_map(|content: String| NetworkResult::success(content)),
        "[a-z0-9 ]{0,12}".prop_map(|message: String| NetworkResult::http_error(message)),
        Just(NetworkResult::timeout()),
    ]
}

fn exchange_strategy() -> impl Strategy<Value = Exchange> {
    ("[A-Z]{3} /[a-z]{0,6}", network_result_strategy())
        .prop_map(|(request, outcome)| Exchange { request, outcome })
}

proptest! {
    /// GetOptionSet Law: writing back what was read is a no-op
    #[test]
    fn prop_http_message_get_option_set_law(result in network_result_strategy()) {
        let optional = NetworkResult::http_message_optional();
        if let Some(message) = optional.get_option(&result).cloned() {
            prop_assert_eq!(optional.set(result.clone(), message), result);
        }
    }

    /// SetGetOption Law: a write is visible exactly where the element exists
    #[test]
    fn prop_http_message_set_get_option_law(
        result in network_result_strategy(),
        message in "[a-z]{0,8}",
    ) {
        let optional = NetworkResult::http_message_optional();
        let was_present = optional.is_present(&result);
        let updated = optional.set(result, message.clone());
        prop_assert_eq!(optional.get_option(&updated), was_present.then_some(&message));
    }

    /// GetOptionSet Law for the success content
    #[test]
    fn prop_success_content_get_option_set_law(result in network_result_strategy()) {
        let optional = NetworkResult::success_content_optional();
        if let Some(content) = optional.get_option(&result).cloned() {
            prop_assert_eq!(optional.set(result.clone(), content), result);
        }
    }

    /// SetGetOption Law for the success content
    #[test]
    fn prop_success_content_set_get_option_law(
        result in network_result_strategy(),
        content in "[a-z]{0,8}",
    ) {
        let optional = NetworkResult::success_content_optional();
        let was_present = optional.is_present(&result);
        let updated = optional.set(result, content.clone());
        prop_assert_eq!(optional.get_option(&updated), was_present.then_some(&content));
    }

    /// A source without the element passes through set unchanged
    #[test]
    fn prop_set_on_absent_element_is_noop(
        result in network_result_strategy(),
        value in "[a-z]{0,8}",
    ) {
        let message = NetworkResult::http_message_optional();
        let content = NetworkResult::success_content_optional();
        if !message.is_present(&result) {
            prop_assert_eq!(message.set(result.clone(), value.clone()), result.clone());
        }
        if !content.is_present(&result) {
            prop_assert_eq!(content.set(result.clone(), value), result);
        }
    }

    /// (lens . prism) . prism and lens . (prism . prism) agree on reads and writes
    #[test]
    fn prop_lens_prism_groupings_agree(
        exchange in exchange_strategy(),
        message in "[a-z]{0,8}",
    ) {
        let grouped_left = Exchange::outcome_lens()
            .compose_prism(NetworkResult::error_prism())
            .compose(NetworkError::http_prism());
        let grouped_right = Exchange::outcome_lens()
            .compose_prism(NetworkResult::error_prism().compose(NetworkError::http_prism()));
        let payload = HttpError { message };

        prop_assert_eq!(grouped_left.get_option(&exchange), grouped_right.get_option(&exchange));
        prop_assert_eq!(
            grouped_left.set(exchange.clone(), payload.clone()),
            grouped_right.set(exchange, payload)
        );
    }

    /// prism . lens and (prism . prism) . lens agree on the HTTP message
    #[test]
    fn prop_prism_lens_groupings_agree(
        result in network_result_strategy(),
        message in "[a-z]{0,8}",
    ) {
        let via_helper = NetworkResult::http_message_optional();
        let via_optional = Exchange::outcome_lens()
            .compose_prism(NetworkResult::error_prism())
            .compose(NetworkError::http_prism());
        let exchange = Exchange { request: "GET /".to_string(), outcome: result.clone() };

        let expected = via_helper.set(result, message.clone());
        let rewritten = via_optional.set(exchange, HttpError { message });
        prop_assert_eq!(rewritten.outcome, expected);
    }
}
