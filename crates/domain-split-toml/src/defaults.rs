//! Built-in values used when `domain-split.toml` omits a key.

use crate::{DEFAULT_DOMAIN, RoutingRule};

pub(crate) const SOURCE_DIR: &str = "lib";
pub(crate) const SOURCE_EXTENSIONS: &[&str] = &["ex", "exs"];
pub(crate) const EXCLUDED_DIRS: &[&str] = &["_build", "deps", ".git"];
pub(crate) const GETTEXT_BACKEND: &str = "StoryarnWeb.Gettext";
pub(crate) const GETTEXT_DIR: &str = "priv/gettext";
pub(crate) const LOCALE: &str = "es";
pub(crate) const BACKUP_FILE: &str = "default.po.bak";

/// Uses the qualified call form but must stay in the default domain.
pub(crate) const SKIP_FILES: &[&str] = &["storyarn_web/helpers/authorize.ex"];

/// Prefixes are relative to the source directory. More specific prefixes
/// come first; the first match wins.
const RULES: &[(&str, &str)] = &[
    // flows
    ("storyarn_web/live/flow_live/", "flows"),
    ("storyarn_web/components/condition_builder.ex", "flows"),
    ("storyarn_web/components/instruction_builder.ex", "flows"),
    ("storyarn_web/components/sidebar/flow_tree.ex", "flows"),
    // maps
    ("storyarn_web/live/map_live/", "maps"),
    ("storyarn_web/components/sidebar/map_tree.ex", "maps"),
    // sheets
    ("storyarn_web/live/sheet_live/", "sheets"),
    ("storyarn_web/components/block_components.ex", "sheets"),
    ("storyarn_web/components/block_components/", "sheets"),
    ("storyarn_web/components/audio_picker.ex", "sheets"),
    ("storyarn_web/components/sidebar/sheet_tree.ex", "sheets"),
    ("storyarn/sheets/versioning.ex", "sheets"),
    // localization
    ("storyarn_web/live/localization_live/", "localization"),
    // projects
    ("storyarn_web/live/project_live/", "projects"),
    // workspaces
    ("storyarn_web/live/workspace_live/", "workspaces"),
    ("storyarn_web/live/settings_live/workspace_members.ex", "workspaces"),
    ("storyarn_web/live/settings_live/workspace_general.ex", "workspaces"),
    // screenplays
    ("storyarn_web/live/screenplay_live/", "screenplays"),
    ("storyarn_web/controllers/screenplay_export_controller.ex", "screenplays"),
    ("storyarn_web/components/sidebar/screenplay_tree.ex", "screenplays"),
    // identity
    ("storyarn_web/live/user_live/", "identity"),
    ("storyarn_web/controllers/user_session_controller.ex", "identity"),
    ("storyarn_web/controllers/oauth_controller.ex", "identity"),
    ("storyarn_web/user_auth.ex", "identity"),
    ("storyarn/accounts/registration.ex", "identity"),
    // personal settings: profile, security, connections
    ("storyarn_web/live/settings_live/profile.ex", "settings"),
    ("storyarn_web/live/settings_live/security.ex", "settings"),
    ("storyarn_web/live/settings_live/connections.ex", "settings"),
    // assets
    ("storyarn_web/live/asset_live/", "assets"),
    ("storyarn_web/live/components/asset_upload.ex", "assets"),
    // listed explicitly so they are reported as default rather than unmatched
    ("storyarn_web/components/layouts.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/core_components.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/project_sidebar.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/sidebar.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/collaboration_components.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/member_components.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/save_indicator.ex", DEFAULT_DOMAIN),
    ("storyarn_web/components/ui_components.ex", DEFAULT_DOMAIN),
    ("storyarn_web/helpers/authorize.ex", DEFAULT_DOMAIN),
];

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn rules() -> Vec<RoutingRule> {
    RULES
        .iter()
        .map(|(prefix, domain)| RoutingRule::new(*prefix, *domain))
        .collect()
}
