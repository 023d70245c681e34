use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating phone numbers on contact forms
    /// Digits with optional leading "+", spaces, dashes and parentheses
    /// - Valid: "1", "+54 11 4444-5555", "(011) 4444 5555"
    /// - Invalid: "phone", "12a34", "+"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]*$").unwrap();

    /// Regex for role names: a capitalised word, letters only
    /// - Valid: "Admin", "Standard", "Editor"
    /// - Invalid: "admin", "Super Admin", "Admin1"
    pub static ref ROLE_NAME_REGEX: Regex = Regex::new(r"^[A-Z][A-Za-z]*$").unwrap();
}
