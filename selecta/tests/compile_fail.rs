//! Closed-form construction must cover every kind, or the crate does not build.

#[test]
fn test_missing_construction_branch_is_rejected() {
    let cases = trybuild::TestCases::new();
    cases.compile_fail("tests/ui/*.rs");
}
