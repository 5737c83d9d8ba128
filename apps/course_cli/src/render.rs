//! Plain-text rendering of the catalog and interaction state.

use client_core::{ControlState, InteractionController, InteractionEvent, Notification};
use shared::domain::{ActionKind, Course};

pub fn catalog(controller: &InteractionController) -> String {
    let mut out = String::new();
    for course in controller.catalog().iter() {
        let controls: Vec<String> = ActionKind::ALL
            .iter()
            .map(|kind| control(&controller.control_state(course, *kind)))
            .collect();
        out.push_str(&course_card(course));
        out.push_str(&format!("   {}\n\n", controls.join("  ")));
    }
    out
}

fn course_card(course: &Course) -> String {
    format!(
        "{} {} [{}]\n   {} | {} | {} | {} | ★ {} | {} students enrolled\n   {}\n",
        course.icon_glyph,
        course.title,
        course.id,
        course.category,
        course.instructor,
        course.level,
        course.duration_label,
        course.rating,
        thousands(course.student_count),
        course.description,
    )
}

pub fn control(state: &ControlState) -> String {
    if state.enabled {
        format!("[{}]", state.label)
    } else {
        format!("({})", state.label)
    }
}

pub fn notification(current: Option<&Notification>) -> String {
    match current {
        Some(notification) => notification.message.clone(),
        None => "(no notification visible)".to_string(),
    }
}

pub fn event(event: &InteractionEvent) -> String {
    match event {
        InteractionEvent::LoadingChanged { key, loading: true } => format!("… {key} in flight"),
        InteractionEvent::LoadingChanged {
            key,
            loading: false,
        } => format!("✓ {key} settled"),
        InteractionEvent::NotificationPosted(notification) => {
            format!("» {}", notification.message)
        }
        InteractionEvent::NotificationCleared => "» (notification dismissed)".to_string(),
    }
}

fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
