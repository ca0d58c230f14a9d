use super::*;

#[test]
fn token_file_lives_under_home() {
    let path = token_file_under(Some("/home/ravi"));
    assert_eq!(path, PathBuf::from("/home/ravi/.healthiq/tokens.json"));
}

#[test]
fn token_file_falls_back_to_cwd_without_home() {
    let path = token_file_under(None);
    assert_eq!(path, PathBuf::from("./.healthiq/tokens.json"));
}

#[test]
fn token_file_ignores_blank_home() {
    let path = token_file_under(Some("   "));
    assert_eq!(path, PathBuf::from("./.healthiq/tokens.json"));
}
