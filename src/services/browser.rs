//! Opening links with the platform's default handler

use std::process::Command;

/// Build the command that opens `target` (URL, `mailto:` link or file path)
pub fn open_command(target: &str) -> Command {
    #[cfg(target_os = "windows")]
    let command = {
        let mut cmd = Command::new("cmd");
        // Empty title argument so `start` doesn't treat a quoted URL as one
        cmd.args(["/C", "start", "", target]);
        cmd
    };

    #[cfg(target_os = "macos")]
    let command = {
        let mut cmd = Command::new("open");
        cmd.arg(target);
        cmd
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let command = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(target);
        cmd
    };

    command
}

/// Whether `target` points anywhere worth opening
///
/// Placeholder links such as `#` are skipped.
pub fn is_openable(target: &str) -> bool {
    let target = target.trim();
    !target.is_empty() && target != "#"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_command_passes_target() {
        let cmd = open_command("https://example.com");
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(args.last().map(String::as_str), Some("https://example.com"));
    }

    #[test]
    fn test_placeholder_links_are_not_openable() {
        assert!(!is_openable("#"));
        assert!(!is_openable("  "));
        assert!(is_openable("mailto:a@x.com"));
    }
}
