//! Fixed and personalized greetings.

/// Greeting printed when nothing has been configured.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// The fixed greeting.
pub fn simple_greet() -> &'static str {
    DEFAULT_GREETING
}

/// Greeting echoed back once the user has entered a name.
pub fn personal_greeting(name: &str) -> String {
    format!("Hello, {name}! Nice to meet you.")
}

/// Produces greeting lines, with an optional override for the fixed one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    message: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_GREETING)
    }
}

impl Greeter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fixed greeting, falling back to the default when the
    /// configured message is blank.
    pub fn simple(&self) -> &str {
        if self.message.trim().is_empty() {
            simple_greet()
        } else {
            &self.message
        }
    }

    pub fn personal(&self, name: &str) -> String {
        personal_greeting(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_greet() {
        assert_eq!(simple_greet(), "Hello, World!");
    }

    #[test]
    fn test_personal_greeting() {
        assert_eq!(personal_greeting("Ada"), "Hello, Ada! Nice to meet you.");
    }

    #[test]
    fn test_greeter_override() {
        let greeter = Greeter::new("Howdy, partner!");
        assert_eq!(greeter.simple(), "Howdy, partner!");
        assert_eq!(greeter.personal("Sam"), "Hello, Sam! Nice to meet you.");
    }

    #[test]
    fn test_blank_override_falls_back() {
        assert_eq!(Greeter::new("   ").simple(), DEFAULT_GREETING);
        assert_eq!(Greeter::default().simple(), DEFAULT_GREETING);
    }
}
