use crate::RecoveryTokens;

#[test]
fn given_all_parts_when_built_then_some() {
    let tokens = RecoveryTokens::from_parts(
        Some("access".into()),
        Some("refresh".into()),
        Some("bearer".into()),
    );

    assert_eq!(tokens.map(|t| t.token_type), Some("bearer".to_string()));
}

#[test]
fn given_missing_or_empty_part_when_built_then_none() {
    assert!(RecoveryTokens::from_parts(Some("a".into()), None, Some("bearer".into())).is_none());
    assert!(
        RecoveryTokens::from_parts(Some("a".into()), Some("".into()), Some("bearer".into()))
            .is_none()
    );
}
