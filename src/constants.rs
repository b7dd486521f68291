//! Constants used throughout the Mason application

/// Template manifest file names in order of preference
pub const MANIFEST_FILENAMES: &[&str] = &["creator.yaml", "creator.yml", "creator.json"];

/// Files that are never copied out of a template
pub const DO_NOT_COPY_FILES: &[&str] =
    &[".DS_Store", ".npmrc", "creator.yaml", "creator.yml", "creator.json"];

/// Directory holding the built-in and downloaded templates
pub const TEMPLATES_DIR: &str = "templates";

/// Staging folder for remote template downloads, relative to the templates root
pub const TEMP_DOWNLOAD_DIR: &str = "mason-tmp";

/// Archive artifact directory produced by macOS zip files
pub const MACOS_ARCHIVE_ARTIFACT: &str = "__MACOSX";

/// Subdirectory of a generated project holding its source code
pub const SOURCE_DIR: &str = "src";

/// Subdirectory of a generated project holding build output
pub const OUTPUT_DIR: &str = "dist";

/// Subdirectory of a generated project holding processed npm metadata
pub const NPM_DIR: &str = "npm";

/// Name of the entry page scaffolded into every project
pub const PAGE_NAME: &str = "index";

/// Build-tool configuration directory whose files keep their extension
pub const CONFIG_DIR: &str = "config";

/// Files that must keep a `.js` extension because their consumers require it
pub const PINNED_JS_FILES: &[&str] = &["babel.config.js", ".eslintrc.js"];

/// Source extension of the framework flavor this tool does not scaffold
pub const ALTERNATE_FRAMEWORK_EXT: &str = "vue";

/// Default template repository, `direct:` prefixed with a branch pin
pub const DEFAULT_TEMPLATE_SOURCE: &str =
    "direct:https://github.com/lumenjs/lumen-project-templates.git#v3.5";

/// Registry endpoints consulted for default dependency versions
pub const UI_KIT_REGISTRY: &str = "https://registry.npmmirror.com/@lumen/ui";
pub const CLI_REGISTRY: &str = "https://registry.npmmirror.com/@lumen/cli";

/// Versions used when the registry cannot be reached
pub const UI_KIT_FALLBACK_VERSION: &str = "2.3.1";
pub const CLI_FALLBACK_VERSION: &str = "3.5.7";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
