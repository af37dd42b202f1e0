use regex::Regex;

use crate::service::error::{ServiceError, ValidationError};

const NAME_PATTERN: &str = "^[a-z0-9][a-z0-9-]*[a-z0-9]$";

const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Names become DNS labels inside the generated `did:web` DID, so only
/// lowercase kebab-case is accepted.
pub(crate) fn validate_participant_name(name: &str) -> Result<(), ServiceError> {
    let pattern =
        Regex::new(NAME_PATTERN).map_err(|e| ServiceError::MappingError(e.to_string()))?;

    if !pattern.is_match(name) {
        return Err(ValidationError::InvalidParticipantName.into());
    }

    Ok(())
}

/// Requires at least one lowercase letter, one uppercase letter, one digit
/// and one special character out of `@$!%*?&`. Any other character,
/// whitespace included, fails the whole password.
pub(crate) fn validate_password(password: &str) -> Result<(), ValidationError> {
    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut has_digit = false;
    let mut has_special = false;

    if password.is_empty() {
        return Err(ValidationError::InvalidPasswordFormat);
    }

    for character in password.chars() {
        if character.is_ascii_lowercase() {
            has_lowercase = true;
        } else if character.is_ascii_uppercase() {
            has_uppercase = true;
        } else if character.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SPECIALS.contains(character) {
            has_special = true;
        } else {
            return Err(ValidationError::InvalidPasswordFormat);
        }
    }

    if !(has_lowercase && has_uppercase && has_digit && has_special) {
        return Err(ValidationError::InvalidPasswordFormat);
    }

    Ok(())
}
