//! OpenGL debug-message handling
//!
//! The driver reports API misuse and performance warnings through the
//! `KHR_debug` channel. Messages on a short allowlist of known-benign ids
//! are dropped; everything else is logged with its source, type and
//! severity spelled out. What happens on a high-severity message is decided
//! by the [`SeverityPolicy`] chosen at window construction.

use serde::{Deserialize, Serialize};

/// Driver message ids that only announce routine buffer placement.
const IGNORED_MESSAGE_IDS: [u32; 4] = [131_169, 131_185, 131_218, 131_204];

/// How high-severity driver messages are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityPolicy {
    /// Log the message and terminate the process
    #[default]
    Abort,
    /// Log the message and continue
    Report,
}

/// True when the id belongs to the known-benign allowlist.
#[must_use]
pub fn is_ignored(id: u32) -> bool {
    IGNORED_MESSAGE_IDS.contains(&id)
}

/// Human-readable name for a `GL_DEBUG_SOURCE_*` value.
#[must_use]
pub fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "API",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        glow::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    }
}

/// Human-readable name for a `GL_DEBUG_TYPE_*` value.
#[must_use]
pub fn type_name(message_type: u32) -> &'static str {
    match message_type {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behaviour",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behaviour",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        glow::DEBUG_TYPE_MARKER => "Marker",
        glow::DEBUG_TYPE_PUSH_GROUP => "Push Group",
        glow::DEBUG_TYPE_POP_GROUP => "Pop Group",
        _ => "Other",
    }
}

/// Human-readable name for a `GL_DEBUG_SEVERITY_*` value.
#[must_use]
pub fn severity_name(severity: u32) -> &'static str {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => "high",
        glow::DEBUG_SEVERITY_MEDIUM => "medium",
        glow::DEBUG_SEVERITY_LOW => "low",
        _ => "notification",
    }
}

/// Log one driver message and apply the severity policy.
///
/// Called synchronously from the GL debug callback, on the thread that
/// issued the offending call.
pub fn handle_debug_message(
    policy: SeverityPolicy,
    source: u32,
    message_type: u32,
    id: u32,
    severity: u32,
    message: &str,
) {
    if is_ignored(id) {
        return;
    }

    let text = format!(
        "GL debug ({id}): {message} [source: {}, type: {}, severity: {}]",
        source_name(source),
        type_name(message_type),
        severity_name(severity),
    );

    match severity {
        glow::DEBUG_SEVERITY_HIGH => {
            log::error!("{text}");
            if policy == SeverityPolicy::Abort {
                log::error!("Aborting on high-severity driver message");
                std::process::abort();
            }
        }
        glow::DEBUG_SEVERITY_MEDIUM => log::warn!("{text}"),
        glow::DEBUG_SEVERITY_LOW => log::info!("{text}"),
        _ => log::debug!("{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benign_ids_are_filtered() {
        for id in [131_169, 131_185, 131_218, 131_204] {
            assert!(is_ignored(id));
        }
        assert!(!is_ignored(0));
        assert!(!is_ignored(131_186));
    }

    #[test]
    fn enum_values_have_names() {
        assert_eq!(source_name(glow::DEBUG_SOURCE_API), "API");
        assert_eq!(type_name(glow::DEBUG_TYPE_ERROR), "Error");
        assert_eq!(severity_name(glow::DEBUG_SEVERITY_HIGH), "high");
        assert_eq!(severity_name(glow::DEBUG_SEVERITY_NOTIFICATION), "notification");
    }

    #[test]
    fn report_policy_survives_high_severity() {
        // Must return rather than abort the test process.
        handle_debug_message(
            SeverityPolicy::Report,
            glow::DEBUG_SOURCE_API,
            glow::DEBUG_TYPE_ERROR,
            1,
            glow::DEBUG_SEVERITY_HIGH,
            "synthetic message",
        );
    }
}
