use std::collections::VecDeque;

use bevy::prelude::*;

/// Tuning values injected into gadgets when they are constructed
#[derive(Clone, Debug, Resource)]
pub struct GadgetConfig {
    /// Energy cost declared for the tachyon disruptor (default: 0.1)
    pub tachyon_disruptor_energy_cost: f32,
    /// Number of tactical messages kept in the message log
    pub message_log_capacity: usize,
}

impl Default for GadgetConfig {
    fn default() -> Self {
        Self {
            tachyon_disruptor_energy_cost: 0.1,
            message_log_capacity: 32,
        }
    }
}

/// Player-facing notification channel
#[derive(Clone, Debug, Default, Resource)]
pub struct MessageLog {
    messages: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { messages: VecDeque::with_capacity(capacity), capacity }
    }

    /// Append a message, evicting the oldest once full
    pub fn push(&mut self, message: String) {
        if self.capacity == 0 { return; }
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
