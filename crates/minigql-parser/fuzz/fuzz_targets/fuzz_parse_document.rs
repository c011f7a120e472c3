#![no_main]

use libfuzzer_sys::fuzz_target;
use minigql_parser::GraphQLParser;
use minigql_parser::token_source::StrGraphQLTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let token_source = StrGraphQLTokenSource::new(s);
    let parser = GraphQLParser::from_token_source(token_source);
    let _ = parser.parse_document();
});
