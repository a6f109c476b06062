//! Terminal detection and capability utilities

use is_terminal::IsTerminal;
use std::env;
use std::io::{stderr, stdin, stdout};

/// Check if stdout is connected to an interactive terminal
pub fn is_interactive() -> bool {
    if !stdout().is_terminal() {
        return false;
    }

    // CI runners may allocate a TTY but nobody is there to answer
    if is_ci_environment() {
        return false;
    }

    true
}

/// Whether prompts can use rich terminal widgets
///
/// Piped stdin (`printf 'notes.txt\ny\n' | filemod`) falls back to plain
/// line reading.
pub fn can_prompt_interactively() -> bool {
    stdin().is_terminal() && stderr().is_terminal() && !is_ci_environment()
}

/// Check if the terminal supports ANSI escape codes for colors
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    if term == "dumb" {
        return false;
    }

    #[cfg(windows)]
    {
        // Windows 10+ consoles handle ANSI natively
        return true;
    }

    #[cfg(not(windows))]
    {
        !term.is_empty()
    }
}

/// Detect if running in a CI environment
fn is_ci_environment() -> bool {
    let ci_vars = [
        "CI",
        "CONTINUOUS_INTEGRATION",
        "JENKINS_URL",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "TRAVIS",
        "CIRCLECI",
        "BUILDKITE",
        "DRONE",
        "TEAMCITY_VERSION",
        "TF_BUILD", // Azure DevOps
    ];

    ci_vars.iter().any(|var| env::var(var).is_ok())
}
