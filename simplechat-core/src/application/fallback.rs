//! Local canned-reply responder used when no remote client answers

use super::delay::{Delay, TokioDelay};
use super::resolver::ResolveError;
use crate::config::FallbackConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

pub const TEMPLATE_COUNT: usize = 6;

/// The six canned replies for `input`, in selection order
pub fn templates(input: &str) -> [String; TEMPLATE_COUNT] {
    [
        format!("That's interesting! You said: \"{input}\""),
        "I'm a simple frontend bot. I can't think deeply without an API key, but I'm listening!"
            .to_string(),
        "Could you tell me more about that?".to_string(),
        "I agree completely.".to_string(),
        "That's a great point.".to_string(),
        format!("Echo: {input}"),
    ]
}

/// True when `reply` is one of the canned replies for `input`
pub fn is_template_reply(input: &str, reply: &str) -> bool {
    templates(input).iter().any(|t| t == reply)
}

/// Picks a canned reply after a randomized, injectable delay
pub struct FallbackResponder {
    rng: Mutex<StdRng>,
    delay: Arc<dyn Delay>,
    min_delay: Duration,
    max_delay: Duration,
    failure_rate: f64,
}

struct Draw {
    wait: Duration,
    fail: bool,
    index: usize,
}

impl FallbackResponder {
    pub fn new(config: &FallbackConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        // Built directly (not via the loader) the window may be inverted;
        // an empty range would panic in `gen_range`.
        let (min_delay, max_delay) = if config.min_delay <= config.max_delay {
            (config.min_delay, config.max_delay)
        } else {
            (config.max_delay, config.min_delay)
        };
        Self {
            rng: Mutex::new(rng),
            delay: Arc::new(TokioDelay),
            min_delay,
            max_delay,
            failure_rate: config.failure_rate,
        }
    }

    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    fn draw(&self) -> Draw {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let min = self.min_delay.as_millis() as u64;
        let max = self.max_delay.as_millis() as u64;
        let wait = Duration::from_millis(rng.gen_range(min..=max));
        let fail = self.failure_rate > 0.0 && rng.gen_bool(self.failure_rate.min(1.0));
        let index = rng.gen_range(0..TEMPLATE_COUNT);
        Draw { wait, fail, index }
    }

    /// Wait out the simulated latency, then return a canned reply.
    ///
    /// Fails only through the configured simulated failure rate.
    pub async fn respond(&self, input: &str) -> Result<String, ResolveError> {
        let draw = self.draw();
        debug!(
            delay_ms = draw.wait.as_millis() as u64,
            template = draw.index,
            simulated_failure = draw.fail,
            "Producing fallback reply"
        );

        self.delay.wait(draw.wait).await;

        if draw.fail {
            return Err(ResolveError::Simulated);
        }
        Ok(templates(input)
            .into_iter()
            .nth(draw.index)
            .unwrap_or_default())
    }
}
