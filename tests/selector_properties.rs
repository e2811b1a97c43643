use opflow::opconfig::{Api, Method};
use opflow::selector::{cors_selector, decode_cors_selector, method_selector};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cors_selectors_decode_back_to_their_origin(
        api_name in "[a-z][a-z0-9_.]{0,30}",
        method_name in "[A-Za-z][A-Za-z0-9]{0,20}",
    ) {
        let api = Api { name: api_name, ..Default::default() };
        let method = Method { name: method_name };

        let decoded = decode_cors_selector(&cors_selector(&api, &method)).unwrap();
        prop_assert_eq!(decoded, Some(method_selector(&api, &method)));
    }

    #[test]
    fn selectors_without_the_reserved_token_are_not_cors(selector in "[A-Za-z0-9_.]{0,64}") {
        prop_assume!(!selector.contains("Opflow_Autogenerated"));
        prop_assert_eq!(decode_cors_selector(&selector).unwrap(), None);
    }

    #[test]
    fn repeated_reserved_tokens_are_rejected(
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}",
        c in "[a-z]{1,8}",
    ) {
        let selector =
            format!("{a}.Opflow_Autogenerated_CORS_{b}.Opflow_Autogenerated_CORS_{c}");
        prop_assert!(decode_cors_selector(&selector).is_err());
    }
}
