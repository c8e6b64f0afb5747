//! Human-verification gate for shared deployments.
//!
//! The gate hands out a small arithmetic challenge; passing it marks the
//! session verified for the rest of its lifetime. A hosted deployment would
//! substitute a real CAPTCHA provider behind the same interface.
//!
//! The gate never renders anything; presentation belongs to the shell.

use rand::Rng;

use crate::config::Settings;
use crate::session::SessionContext;

/// Whether the verification gate stands between this session and the pages.
pub fn verification_required(settings: &Settings, ctx: &SessionContext) -> bool {
    settings.deployment.online_deployment
        && settings.deployment.require_verification
        && !ctx.is_verified()
}

/// A single arithmetic challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    a: u32,
    b: u32,
}

impl Challenge {
    /// Generate a fresh challenge.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            a: rng.gen_range(2..=9),
            b: rng.gen_range(2..=9),
        }
    }

    pub(crate) fn new(a: u32, b: u32) -> Self {
        Self { a, b }
    }

    /// Question shown to the user.
    pub fn prompt(&self) -> String {
        format!("What is {} + {}?", self.a, self.b)
    }

    /// Check the answer; on success the session is marked verified.
    pub fn verify(&self, answer: &str, ctx: &mut SessionContext) -> bool {
        let correct = answer
            .trim()
            .parse::<u32>()
            .map(|value| value == self.a + self.b)
            .unwrap_or(false);
        if correct {
            ctx.mark_verified();
        }
        correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn online_settings() -> Settings {
        let mut settings = Settings::default();
        settings.deployment.online_deployment = true;
        settings.deployment.require_verification = true;
        settings
    }

    #[test]
    fn local_deployment_needs_no_gate() {
        let ctx = SessionContext::new();
        assert!(!verification_required(&Settings::default(), &ctx));
    }

    #[test]
    fn online_deployment_requires_gate_until_verified() {
        let mut ctx = SessionContext::new();
        let settings = online_settings();
        assert!(verification_required(&settings, &ctx));

        Challenge::new(3, 4).verify("7", &mut ctx);
        assert!(!verification_required(&settings, &ctx));
    }

    #[test]
    fn correct_answer_verifies() {
        let mut ctx = SessionContext::new();
        let challenge = Challenge::new(2, 9);
        assert!(challenge.verify(" 11 ", &mut ctx));
        assert!(ctx.is_verified());
    }

    #[test]
    fn wrong_or_garbage_answer_does_not_verify() {
        let mut ctx = SessionContext::new();
        let challenge = Challenge::new(2, 9);
        assert!(!challenge.verify("12", &mut ctx));
        assert!(!challenge.verify("eleven", &mut ctx));
        assert!(!ctx.is_verified());
    }

    #[test]
    fn generated_challenge_accepts_its_own_sum() {
        let challenge = Challenge::generate();
        let mut ctx = SessionContext::new();
        let answer = format!("{}", challenge.a + challenge.b);
        assert!(challenge.verify(&answer, &mut ctx));
    }
}
