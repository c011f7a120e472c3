#![no_main]

use libfuzzer_sys::fuzz_target;
use minigql_parser::token::GraphQLTokenKind;
use minigql_parser::token_source::StrGraphQLTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let last = StrGraphQLTokenSource::new(s).last();
    assert_eq!(last.map(|token| token.kind), Some(GraphQLTokenKind::Eof));
});
