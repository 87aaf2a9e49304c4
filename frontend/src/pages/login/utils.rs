/// Rejects blank credentials before any request goes out. Whitespace-only
/// input counts as blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Please enter a username".into());
    }
    if password.trim().is_empty() {
        return Err("Please enter a password".into());
    }
    Ok(())
}
