use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_unicode: bool,
}

/// Glyphs only when stdout is an interactive terminal; pipes get ASCII
pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities_for(std::io::stdout().is_terminal())
}

fn capabilities_for(is_tty: bool) -> TerminalCapabilities {
    TerminalCapabilities {
        supports_unicode: is_tty,
    }
}
