//! Colour treatments for report widgets.

use crate::report::{Emphasis, PriorityTreatment};
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Blue;
pub const MUTED: Color = Color::DarkGray;

pub fn label() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn priority(treatment: PriorityTreatment) -> Style {
    match treatment {
        PriorityTreatment::High => Style::default().fg(Color::Red),
        PriorityTreatment::Medium => Style::default().fg(Color::Yellow),
        PriorityTreatment::Low => Style::default().fg(Color::Green),
    }
}

pub fn emphasis(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Strong => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Emphasis::Moderate => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_treatments_are_distinct() {
        let high = priority(PriorityTreatment::High);
        let medium = priority(PriorityTreatment::Medium);
        let low = priority(PriorityTreatment::Low);
        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert_eq!(low.fg, Some(Color::Green));
    }
}
