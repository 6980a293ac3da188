use tripforce_core::{QueryError, SearchQuery};

#[test]
fn validation_table() {
    let cases: &[(&str, Result<&str, QueryError>)] = &[
        ("", Err(QueryError::Missing)),
        ("abcdefghijk", Err(QueryError::TooLong(11))),
        ("abc#", Err(QueryError::InvalidCharacter('#'))),
        ("abcdefghix", Err(QueryError::InvalidTenthCharacter('x'))),
        ("abcdefghi2", Ok("abcdefghi2")),
        ("abcdefghi.", Ok("abcdefghi.")),
        ("Trip", Ok("Trip")),
        ("x", Ok("x")),
        ("./", Ok("./")),
    ];

    for (input, expected) in cases {
        let result = SearchQuery::parse(input);
        match expected {
            Ok(q) => assert_eq!(result.map(|r| r.as_str().to_owned()), Ok(q.to_string())),
            Err(e) => assert_eq!(result.as_ref().err(), Some(e), "input {:?}", input),
        }
    }
}

#[test]
fn nine_characters_skip_tenth_rule() {
    assert!(SearchQuery::parse("abcdefghx").is_ok());
}
