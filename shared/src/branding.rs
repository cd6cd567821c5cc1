//! Compile-time portal configuration

/// Names and settings the frontend reads at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConfig {
    /// Name shown in the dashboard sidebar
    pub portal_name: &'static str,
    pub portal_subtitle: &'static str,
    /// Initials in the sidebar avatar
    pub avatar_initials: &'static str,
    /// Brand used on the public marketing pages
    pub site_name: &'static str,
    /// Verbose logging for development builds
    pub debug_logging: bool,
}

impl PortalConfig {
    pub const DEFAULT: PortalConfig = PortalConfig {
        portal_name: "Elite Business Coaching",
        portal_subtitle: "Member Portal",
        avatar_initials: "EB",
        site_name: "MembershipPlatform",
        debug_logging: cfg!(debug_assertions),
    };

    pub fn log_level(&self) -> log::Level {
        if self.debug_logging {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_follows_debug_flag() {
        let mut config = PortalConfig::DEFAULT;
        config.debug_logging = true;
        assert_eq!(config.log_level(), log::Level::Debug);
        config.debug_logging = false;
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
